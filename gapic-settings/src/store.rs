//! Loading and saving the settings file.
//!
//! Settings live in `~/.gapic`. Neither [`SettingsStore::load`] nor
//! [`SettingsStore::save`] ever fails: I/O problems are logged at debug
//! level and the store falls back to defaults (on load) or leaves the file
//! as far as it got (on save).

use crate::codec;
use crate::error::SettingsError;
use crate::properties::Properties;
use crate::settings::Settings;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// Name of the settings file inside the home directory.
pub const SETTINGS_FILE: &str = ".gapic";

/// Header comment written at the top of the settings file.
pub const HEADER_COMMENT: &str = " GAPIC Properties";

/// Owns the settings record together with the file it is persisted to.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Settings file location: `~/.gapic`.
    pub fn settings_path() -> PathBuf {
        if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(SETTINGS_FILE)
        } else {
            log::warn!("Home directory not found, using {SETTINGS_FILE} in the working directory");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Load settings from the home directory.
    pub fn load() -> Self {
        Self::load_from(Self::settings_path())
    }

    /// Load settings from `path`, using defaults for anything unavailable.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match try_read(&path) {
            Ok(Some(props)) => {
                log::info!("Loaded {} settings from {:?}", props.len(), path);
                codec::decode(&props)
            }
            Ok(None) => {
                log::info!("Settings file {:?} not found, using defaults", path);
                Settings::default()
            }
            Err(e) => {
                log::debug!("{e}");
                Settings::default()
            }
        };
        Self { path, settings }
    }

    /// Wrap an existing record, to be saved to `path`.
    pub fn with_settings(path: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            path: path.into(),
            settings,
        }
    }

    /// Write the current settings to the settings file.
    pub fn save(&self) {
        match try_write(&self.path, &codec::encode(&self.settings)) {
            Ok(()) => log::debug!("Saved settings to {:?}", self.path),
            Err(e) => log::debug!("{e}"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Record `path` as the most recently opened file.
    pub fn add_to_recent(&mut self, path: impl Into<String>) {
        self.settings.add_to_recent(path);
    }

    /// Recently opened files that are still readable, newest first.
    pub fn recent(&self) -> Vec<PathBuf> {
        self.settings.recent()
    }
}

/// Read the property file at `path`; `Ok(None)` if it does not exist.
pub fn try_read(path: &Path) -> Result<Option<Properties>, SettingsError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SettingsError::io(path, e)),
    };
    Properties::load(BufReader::new(file))
        .map(Some)
        .map_err(|e| SettingsError::io(path, e))
}

/// Truncate `path` and write `props` to it with the standard header.
pub fn try_write(path: &Path, props: &Properties) -> Result<(), SettingsError> {
    let file = File::create(path).map_err(|e| SettingsError::io(path, e))?;
    props
        .store(BufWriter::new(file), HEADER_COMMENT)
        .map_err(|e| SettingsError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Point;
    use std::fs;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load_from(dir.path().join(SETTINGS_FILE));
        assert_eq!(*store.settings(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let mut store = SettingsStore::load_from(&path);
        store.settings_mut().window_size = Some(Point::new(1024, 768));
        store.settings_mut().trace_package = "com.example.app".to_string();
        store.add_to_recent("/traces/one.gfxtrace");
        store.save();

        let loaded = SettingsStore::load_from(&path);
        assert_eq!(loaded.settings(), store.settings());
    }

    #[test]
    fn test_save_writes_header_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        SettingsStore::with_settings(&path, Settings::default()).save();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# GAPIC Properties\n"));
        assert!(text.contains("splitter.weights=15,85\n"));
        assert!(!text.contains("window.pos"));
    }

    #[test]
    fn test_save_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "stale.key=1\n".repeat(100)).unwrap();

        SettingsStore::with_settings(&path, Settings::default()).save();
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale.key"));
    }

    #[test]
    fn test_directory_in_place_of_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::create_dir(&path).unwrap();

        assert!(try_read(&path).is_err());
        let store = SettingsStore::load_from(&path);
        assert_eq!(*store.settings(), Settings::default());

        // Saving over a directory fails quietly.
        store.save();
        assert!(path.is_dir());
    }

    #[test]
    fn test_save_into_missing_directory_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(SETTINGS_FILE);
        let store = SettingsStore::with_settings(&path, Settings::default());
        store.save();
        assert!(!path.exists());
        assert!(try_write(&path, &Properties::new()).is_err());
    }

    #[test]
    fn test_unparseable_lines_do_not_block_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "# comment\n=\nnot a pair\nhide.right=true\ntabs.weights=1,2,x\n").unwrap();

        let store = SettingsStore::load_from(&path);
        assert!(store.settings().hide_right);
        assert_eq!(store.settings().tab_weights, [20, 60, 20]);
    }

    #[test]
    fn test_non_utf8_byte_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(
            &path,
            b"hide.left=true\nsplitter.weights=40,60\nlastOpenDir=C:\\\\caf\xe9\n",
        )
        .unwrap();

        let store = SettingsStore::load_from(&path);
        assert!(store.settings().hide_left);
        assert_eq!(store.settings().splitter_weights, [40, 60]);
        assert_eq!(store.settings().last_open_dir, "C:\\caf\u{e9}");
    }
}
