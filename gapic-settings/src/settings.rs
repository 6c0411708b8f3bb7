//! The in-memory settings record.

use crate::defaults;
use crate::recent::RecentFiles;
use std::path::PathBuf;

/// A non-negative 2D integer point, used for window position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// UI preferences persisted between runs.
///
/// Every field always holds a usable value; fields missing from the settings
/// file take the values of [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Top-left corner of the main window, `None` until first saved.
    pub window_location: Option<Point>,
    /// Size of the main window, `None` until first saved.
    pub window_size: Option<Point>,
    pub hide_scrubber: bool,
    pub hide_left: bool,
    pub hide_right: bool,
    /// Relative sizes of the main vertical splitter.
    pub splitter_weights: Vec<i32>,
    pub left_tabs: Vec<String>,
    pub center_tabs: Vec<String>,
    pub right_tabs: Vec<String>,
    pub hidden_tabs: Vec<String>,
    /// Relative widths of the left, center and right tab folders.
    pub tab_weights: Vec<i32>,
    pub last_open_dir: String,
    pub report_splitter_weights: Vec<i32>,
    pub shader_splitter_weights: Vec<i32>,
    pub texture_splitter_weights: Vec<i32>,
    // Options of the last trace capture.
    pub trace_device: String,
    pub trace_package: String,
    pub trace_out_dir: String,
    pub trace_out_file: String,
    pub trace_clear_cache: bool,
    pub trace_disable_pcs: bool,
    pub skip_welcome_screen: bool,
    pub recent_files: RecentFiles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_location: None,
            window_size: None,
            hide_scrubber: false,
            hide_left: false,
            hide_right: false,
            splitter_weights: defaults::splitter_weights(),
            left_tabs: Vec::new(),
            center_tabs: Vec::new(),
            right_tabs: Vec::new(),
            hidden_tabs: defaults::hidden_tabs(),
            tab_weights: defaults::tab_weights(),
            last_open_dir: String::new(),
            report_splitter_weights: defaults::report_splitter_weights(),
            shader_splitter_weights: defaults::shader_splitter_weights(),
            texture_splitter_weights: defaults::texture_splitter_weights(),
            trace_device: String::new(),
            trace_package: String::new(),
            trace_out_dir: String::new(),
            trace_out_file: String::new(),
            trace_clear_cache: false,
            trace_disable_pcs: false,
            skip_welcome_screen: false,
            recent_files: RecentFiles::new(),
        }
    }
}

impl Settings {
    /// Record `path` as the most recently opened file.
    pub fn add_to_recent(&mut self, path: impl Into<String>) {
        self.recent_files.add(path);
    }

    /// Recently opened files that are still readable, newest first.
    pub fn recent(&self) -> Vec<PathBuf> {
        self.recent_files.existing()
    }
}
