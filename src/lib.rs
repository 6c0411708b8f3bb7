// Library exports for the GAPIC client shell.
//
// The settings record is owned by a single `session::Session` created at
// startup and passed by reference; there is no global settings instance.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod debug;
pub mod session;

pub use session::Session;
