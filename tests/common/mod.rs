//! Shared integration test helpers for gapic.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when only a subset of
//! helpers is used per file.

#![allow(dead_code)]

use gapic::config::{SETTINGS_FILE, SettingsStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Provides test isolation with automatic resource cleanup.
///
/// Stands in for the home directory: the settings file lives directly in
/// `dir`, which is removed when the context is dropped.
pub struct TestContext {
    /// Temporary directory, kept alive for the lifetime of the context.
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the settings file inside the fake home directory.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join(SETTINGS_FILE)
    }

    pub fn load(&self) -> SettingsStore {
        SettingsStore::load_from(self.settings_path())
    }

    /// Write raw text as the settings file.
    pub fn write_settings(&self, text: &str) {
        fs::write(self.settings_path(), text).expect("Failed to write settings file");
    }

    pub fn read_settings(&self) -> String {
        fs::read_to_string(self.settings_path()).expect("Failed to read settings file")
    }

    /// Create an empty trace file and return its path as a string.
    pub fn touch_trace(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, b"").expect("Failed to create trace file");
        path.to_str().expect("trace path is valid UTF-8").to_string()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
