//! Most-recently-used list of opened trace files.
//!
//! Entries are kept newest first, deduplicated by exact string equality and
//! capped at [`MAX_RECENT_FILES`].

use std::fs::File;
use std::path::{Path, PathBuf};

/// Maximum number of recent files to remember.
pub const MAX_RECENT_FILES: usize = 16;

/// Bounded, deduplicated, MRU-ordered list of file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentFiles {
    entries: Vec<String>,
}

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from stored entries, newest first.
    ///
    /// Later duplicates and anything beyond [`MAX_RECENT_FILES`] are dropped,
    /// so a hand-edited settings file cannot break the list's invariants.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for entry in entries {
            if list.entries.len() == MAX_RECENT_FILES {
                break;
            }
            let entry = entry.into();
            if !list.entries.contains(&entry) {
                list.entries.push(entry);
            }
        }
        list
    }

    /// Record `path` as the most recently used file.
    ///
    /// A path already in the list moves to the front; a new path is inserted
    /// at the front and the oldest entry is evicted once the list is full.
    pub fn add(&mut self, path: impl Into<String>) {
        let path = path.into();
        match self.entries.iter().position(|e| *e == path) {
            Some(0) => {}
            Some(i) => self.entries[..=i].rotate_right(1),
            None => {
                self.entries.insert(0, path);
                self.entries.truncate(MAX_RECENT_FILES);
            }
        }
    }

    /// The stored entries, newest first, including ones that no longer exist.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries that currently exist and are readable, as absolute paths.
    ///
    /// The stored list is left untouched so a file that is temporarily
    /// unavailable keeps its place in the history.
    pub fn existing(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .map(Path::new)
            .filter(|path| is_readable(path))
            .filter_map(|path| match std::path::absolute(path) {
                Ok(abs) => Some(abs),
                Err(e) => {
                    log::debug!("Cannot resolve recent file {:?}: {}", path, e);
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        return std::fs::read_dir(path).is_ok();
    }
    path.exists() && File::open(path).is_ok()
}
