//! Persistent UI preferences for the GAPIC client.
//!
//! Window geometry, panel layout, last-used paths, trace options and the
//! recently opened files are kept in a flat property file, `~/.gapic`.
//!
//! - [`Settings`]: the in-memory record
//! - [`codec`]: typed fields to and from flat properties
//! - [`RecentFiles`]: the bounded most-recently-used file list
//! - [`SettingsStore`]: load/save of the record
//!
//! ```rust,no_run
//! use gapic_settings::SettingsStore;
//!
//! let mut store = SettingsStore::load();
//! store.add_to_recent("/home/me/traces/frame.gfxtrace");
//! store.settings_mut().hide_scrubber = true;
//! store.save();
//! ```

pub mod codec;
pub mod defaults;
pub mod error;
pub mod properties;
pub mod recent;
pub mod settings;
pub mod store;

pub use error::SettingsError;
pub use properties::Properties;
pub use recent::{MAX_RECENT_FILES, RecentFiles};
pub use settings::{Point, Settings};
pub use store::SettingsStore;
