//! Conversion between [`Settings`] and flat [`Properties`].
//!
//! Decoding never fails: a missing or malformed value yields the field's
//! default and the remaining fields are still decoded.
//!
//! Value encodings:
//!
//! | Type            | Encoding                                    |
//! |-----------------|---------------------------------------------|
//! | `Option<Point>` | `<name>.x` and `<name>.y`, omitted if unset |
//! | `bool`          | `true` / `false`                            |
//! | `Vec<i32>`      | comma-joined decimal integers               |
//! | `Vec<String>`   | comma-joined raw values                     |
//! | `String`        | verbatim                                    |
//!
//! String lists are not escaped. An element containing a comma comes back
//! as several elements, and whitespace around elements is trimmed. This
//! keeps the format readable by older releases.

use crate::properties::Properties;
use crate::recent::RecentFiles;
use crate::settings::{Point, Settings};

/// Property keys of the settings file.
pub mod keys {
    pub const WINDOW_POS: &str = "window.pos";
    pub const WINDOW_SIZE: &str = "window.size";
    pub const HIDE_SCRUBBER: &str = "hide.scrubber";
    pub const HIDE_LEFT: &str = "hide.left";
    pub const HIDE_RIGHT: &str = "hide.right";
    pub const SPLITTER_WEIGHTS: &str = "splitter.weights";
    pub const TABS_LEFT: &str = "tabs.left";
    pub const TABS_CENTER: &str = "tabs.center";
    pub const TABS_RIGHT: &str = "tabs.right";
    pub const TABS_HIDDEN: &str = "tabs.hidden";
    pub const TABS_WEIGHTS: &str = "tabs.weights";
    pub const LAST_OPEN_DIR: &str = "lastOpenDir";
    pub const REPORT_SPLITTER_WEIGHTS: &str = "report.splitter.weights";
    pub const SHADER_SPLITTER_WEIGHTS: &str = "shader.splitter.weights";
    pub const TEXTURE_SPLITTER_WEIGHTS: &str = "texture.splitter.weights";
    pub const TRACE_DEVICE: &str = "trace.device";
    pub const TRACE_PACKAGE: &str = "trace.package";
    pub const TRACE_DIR: &str = "trace.dir";
    pub const TRACE_FILE: &str = "trace.file";
    pub const TRACE_CLEAR_CACHE: &str = "trace.clearCache";
    pub const TRACE_DISABLE_PCS: &str = "trace.disablePCS";
    pub const SKIP_WELCOME: &str = "skip.welcome";
    pub const OPEN_RECENT: &str = "open.recent";
}

/// Decode a full settings record, starting from the defaults.
pub fn decode(props: &Properties) -> Settings {
    let defaults = Settings::default();
    Settings {
        window_location: get_point(props, keys::WINDOW_POS),
        window_size: get_point(props, keys::WINDOW_SIZE),
        hide_scrubber: get_bool(props, keys::HIDE_SCRUBBER),
        hide_left: get_bool(props, keys::HIDE_LEFT),
        hide_right: get_bool(props, keys::HIDE_RIGHT),
        splitter_weights: get_int_list(props, keys::SPLITTER_WEIGHTS, defaults.splitter_weights),
        left_tabs: get_string_list(props, keys::TABS_LEFT, defaults.left_tabs),
        center_tabs: get_string_list(props, keys::TABS_CENTER, defaults.center_tabs),
        right_tabs: get_string_list(props, keys::TABS_RIGHT, defaults.right_tabs),
        hidden_tabs: get_string_list(props, keys::TABS_HIDDEN, defaults.hidden_tabs),
        tab_weights: get_int_list(props, keys::TABS_WEIGHTS, defaults.tab_weights),
        last_open_dir: get_string(props, keys::LAST_OPEN_DIR, defaults.last_open_dir),
        report_splitter_weights: get_int_list(
            props,
            keys::REPORT_SPLITTER_WEIGHTS,
            defaults.report_splitter_weights,
        ),
        shader_splitter_weights: get_int_list(
            props,
            keys::SHADER_SPLITTER_WEIGHTS,
            defaults.shader_splitter_weights,
        ),
        texture_splitter_weights: get_int_list(
            props,
            keys::TEXTURE_SPLITTER_WEIGHTS,
            defaults.texture_splitter_weights,
        ),
        trace_device: get_string(props, keys::TRACE_DEVICE, defaults.trace_device),
        trace_package: get_string(props, keys::TRACE_PACKAGE, defaults.trace_package),
        trace_out_dir: get_string(props, keys::TRACE_DIR, defaults.trace_out_dir),
        trace_out_file: get_string(props, keys::TRACE_FILE, defaults.trace_out_file),
        trace_clear_cache: get_bool(props, keys::TRACE_CLEAR_CACHE),
        trace_disable_pcs: get_bool(props, keys::TRACE_DISABLE_PCS),
        skip_welcome_screen: get_bool(props, keys::SKIP_WELCOME),
        recent_files: RecentFiles::from_entries(get_string_list(
            props,
            keys::OPEN_RECENT,
            defaults.recent_files.entries().to_vec(),
        )),
    }
}

/// Encode every field of `settings` into a fresh property map.
pub fn encode(settings: &Settings) -> Properties {
    let mut props = Properties::new();
    set_point(&mut props, keys::WINDOW_POS, settings.window_location);
    set_point(&mut props, keys::WINDOW_SIZE, settings.window_size);
    set_bool(&mut props, keys::HIDE_SCRUBBER, settings.hide_scrubber);
    set_bool(&mut props, keys::HIDE_LEFT, settings.hide_left);
    set_bool(&mut props, keys::HIDE_RIGHT, settings.hide_right);
    set_int_list(&mut props, keys::SPLITTER_WEIGHTS, &settings.splitter_weights);
    set_string_list(&mut props, keys::TABS_LEFT, &settings.left_tabs);
    set_string_list(&mut props, keys::TABS_CENTER, &settings.center_tabs);
    set_string_list(&mut props, keys::TABS_RIGHT, &settings.right_tabs);
    set_string_list(&mut props, keys::TABS_HIDDEN, &settings.hidden_tabs);
    set_int_list(&mut props, keys::TABS_WEIGHTS, &settings.tab_weights);
    props.set(keys::LAST_OPEN_DIR, settings.last_open_dir.as_str());
    set_int_list(
        &mut props,
        keys::REPORT_SPLITTER_WEIGHTS,
        &settings.report_splitter_weights,
    );
    set_int_list(
        &mut props,
        keys::SHADER_SPLITTER_WEIGHTS,
        &settings.shader_splitter_weights,
    );
    set_int_list(
        &mut props,
        keys::TEXTURE_SPLITTER_WEIGHTS,
        &settings.texture_splitter_weights,
    );
    props.set(keys::TRACE_DEVICE, settings.trace_device.as_str());
    props.set(keys::TRACE_PACKAGE, settings.trace_package.as_str());
    props.set(keys::TRACE_DIR, settings.trace_out_dir.as_str());
    props.set(keys::TRACE_FILE, settings.trace_out_file.as_str());
    set_bool(&mut props, keys::TRACE_CLEAR_CACHE, settings.trace_clear_cache);
    set_bool(&mut props, keys::TRACE_DISABLE_PCS, settings.trace_disable_pcs);
    set_bool(&mut props, keys::SKIP_WELCOME, settings.skip_welcome_screen);
    set_string_list(&mut props, keys::OPEN_RECENT, settings.recent_files.entries());
    props
}

/// Both coordinates must be present and non-negative, otherwise the point is unset.
pub fn get_point(props: &Properties, name: &str) -> Option<Point> {
    let x = props.get(&format!("{name}.x"))?.parse().ok()?;
    let y = props.get(&format!("{name}.y"))?.parse().ok()?;
    Some(Point::new(x, y))
}

/// Only a case-insensitive `true` is true.
pub fn get_bool(props: &Properties, name: &str) -> bool {
    props
        .get(name)
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// A single bad element reverts the whole list to `default`.
///
/// An empty value has one empty element, so it decodes to `default` too.
pub fn get_int_list(props: &Properties, name: &str, default: Vec<i32>) -> Vec<i32> {
    match props.get(name) {
        None => default,
        Some(value) => value
            .split(',')
            .map(str::parse::<i32>)
            .collect::<Result<_, _>>()
            .unwrap_or(default),
    }
}

/// Elements are trimmed and empty elements dropped.
pub fn get_string_list(props: &Properties, name: &str, default: Vec<String>) -> Vec<String> {
    match props.get(name) {
        None => default,
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    }
}

pub fn get_string(props: &Properties, name: &str, default: String) -> String {
    props.get(name).map(String::from).unwrap_or(default)
}

pub fn set_point(props: &mut Properties, name: &str, point: Option<Point>) {
    if let Some(point) = point {
        props.set(format!("{name}.x"), point.x.to_string());
        props.set(format!("{name}.y"), point.y.to_string());
    }
}

pub fn set_bool(props: &mut Properties, name: &str, value: bool) {
    props.set(name, value.to_string());
}

pub fn set_int_list(props: &mut Properties, name: &str, values: &[i32]) {
    let joined = values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    props.set(name, joined);
}

pub fn set_string_list(props: &mut Properties, name: &str, values: &[String]) {
    props.set(name, values.join(","));
}
