mod common;

use common::TestContext;
use gapic::Session;

// Points HOME at a temp dir, so it lives alone in its own test binary.
#[cfg(unix)]
#[test]
fn test_start_reads_and_shutdown_writes_home_settings() {
    let ctx = TestContext::new();
    // SAFETY: this binary runs a single test, no other thread reads the environment.
    unsafe { std::env::set_var("HOME", ctx.path()) };
    ctx.write_settings("skip.welcome=true\ntabs.left=ApiCalls\n");

    let mut session = Session::start();
    assert!(session.settings().skip_welcome_screen);
    assert_eq!(session.settings().left_tabs, ["ApiCalls"]);

    session.settings_mut().hide_scrubber = true;
    session.shutdown();

    let text = ctx.read_settings();
    assert!(text.starts_with("# GAPIC Properties\n"));
    assert!(text.contains("hide.scrubber=true\n"));
    assert!(text.contains("skip.welcome=true\n"));
}
