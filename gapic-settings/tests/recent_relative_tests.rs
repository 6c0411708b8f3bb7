use gapic_settings::RecentFiles;
use std::fs;

// Changes the working directory, so it lives alone in its own test binary.
#[test]
fn test_relative_entry_is_listed_as_absolute() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    fs::write("relative.gfxtrace", b"trace").unwrap();

    let mut recent = RecentFiles::new();
    recent.add("missing.gfxtrace");
    recent.add("relative.gfxtrace");

    let cwd = std::env::current_dir().unwrap();
    assert_eq!(recent.existing(), vec![cwd.join("relative.gfxtrace")]);
    assert!(recent.existing()[0].is_absolute());
    assert_eq!(recent.entries(), ["relative.gfxtrace", "missing.gfxtrace"]);
}
