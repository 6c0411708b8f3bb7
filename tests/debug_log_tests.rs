mod common;

use common::TestContext;
use gapic::debug::{self, DebugLevel};
use std::fs;

// Single test per binary: the log backend is process-global.
#[test]
fn test_swallowed_load_failure_is_logged_at_debug() {
    debug::init_log_bridge(Some(DebugLevel::Debug));

    let ctx = TestContext::new();
    fs::create_dir(ctx.settings_path()).unwrap();
    let store = ctx.load();
    assert_eq!(*store.settings(), gapic::config::Settings::default());

    log::logger().flush();
    let log = fs::read_to_string(debug::log_path()).unwrap();
    assert!(log.contains("gapic debug session started"));
    assert!(log.contains("[DEBUG]"));
    assert!(log.contains("I/O error on settings file"));
}
