//! Application-level owner of the settings.
//!
//! A [`Session`] is created once at startup, handed by reference to the
//! views that read or change preferences, and consumed at shutdown when the
//! settings are written back.

use crate::config::{Settings, SettingsStore};
use std::path::{Path, PathBuf};

pub struct Session {
    store: SettingsStore,
}

impl Session {
    /// Load settings from the user's home directory.
    pub fn start() -> Self {
        let store = SettingsStore::load();
        log::info!("Session started with settings from {:?}", store.path());
        Self { store }
    }

    pub fn with_store(store: SettingsStore) -> Self {
        Self { store }
    }

    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        self.store.settings_mut()
    }

    /// Remember a trace the user just opened.
    ///
    /// The trace goes to the front of the recent files and its directory
    /// becomes the starting point of the next open dialog.
    pub fn open_file(&mut self, path: &Path) {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            self.store.settings_mut().last_open_dir = dir.to_string_lossy().into_owned();
        }
        self.store.add_to_recent(path.to_string_lossy());
    }

    /// Recent files that can still be opened, newest first.
    pub fn recent_files(&self) -> Vec<PathBuf> {
        self.store.recent()
    }

    /// Persist the settings and end the session.
    pub fn shutdown(self) {
        self.store.save();
        log::info!("Session settings saved to {:?}", self.store.path());
    }
}
