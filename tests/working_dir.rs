//! The working-directory form of `save_fig`
//!
//! Kept in its own test binary: it changes the process working directory,
//! which would race with any other test running in parallel.

use figsave::output::export::{save_fig, SaveOptions, IMAGES_PATH};

mod common;
use common::{files_in, sample_figure};

#[test]
fn test_save_fig_writes_under_images_figures() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let mut figure = sample_figure();
    save_fig(&mut figure, "demo", &SaveOptions::default().resolution(20)).unwrap();
    // Running again over the existing directory is fine
    save_fig(&mut figure, "demo", &SaveOptions::default().resolution(20)).unwrap();

    let root = dir.path().join(IMAGES_PATH);
    assert!(root.is_dir());
    assert_eq!(files_in(&root), vec!["demo.png"]);
}
