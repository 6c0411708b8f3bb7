//! Settings re-exports from the `gapic-settings` crate.

pub use gapic_settings::codec;
pub use gapic_settings::store::{HEADER_COMMENT, SETTINGS_FILE};
pub use gapic_settings::{
    MAX_RECENT_FILES, Point, Properties, RecentFiles, Settings, SettingsError, SettingsStore,
};
