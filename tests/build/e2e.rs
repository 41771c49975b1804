//! End-to-end tests for the build workflow.

use indicatif::ProgressBar;
use mdindexer::binary::read_index;
use mdindexer::build::{run_build_with_progress, BuildConfig, StopWordPreset, StopWords};
use mdindexer::{exact_match, search, IndexError};
use tempfile::TempDir;

use super::common::{names, sample_tree};

#[test]
fn test_build_then_query_loaded_index() {
    let src = sample_tree();
    let out = TempDir::new().unwrap();
    let output = out.path().join("nested").join("docs.mdix");

    let config = BuildConfig::new(src.path(), r"\.(md|rs)$")
        .unwrap()
        .with_output(&output)
        .with_stop_words(StopWords::preset(StopWordPreset::English));
    let report = run_build_with_progress(&config, &ProgressBar::hidden()).unwrap();

    // README.md, docs/guide.md, src/lib.rs; target/ is skipped.
    assert_eq!(report.stats.indexed, 3);
    assert!(output.exists());

    let index = read_index(&output).unwrap();
    assert!(!index.contains_word("artifact"));
    assert!(index.contains_word("fn"));

    let hello = search("hello", &index);
    let readme = src.path().join("README.md").to_string_lossy().into_owned();
    let lib = src.path().join("src").join("lib.rs").to_string_lossy().into_owned();
    // README.md has "hello" twice, lib.rs once: lower count ranks first.
    assert_eq!(names(&hello), vec![lib.as_str(), readme.as_str()]);

    let both = exact_match("hello world", &index);
    assert_eq!(both.len(), 1);
    assert!(both.contains(&readme));
}

#[test]
fn test_empty_tree_builds_empty_index() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = BuildConfig::new(src.path(), ".*")
        .unwrap()
        .with_output(out.path().join("empty.mdix"));

    let report = run_build_with_progress(&config, &ProgressBar::hidden()).unwrap();
    assert_eq!(report.stats.indexed, 0);

    let index = read_index(&report.output).unwrap();
    assert!(matches!(index.search("x"), Err(IndexError::WordNotIndexed)));
}

#[test]
fn test_config_errors_before_any_work() {
    assert!(matches!(
        BuildConfig::new("/definitely/not/here", r"\.md$"),
        Err(IndexError::Read { .. })
    ));
    let src = TempDir::new().unwrap();
    assert!(matches!(BuildConfig::new(src.path(), "["), Err(IndexError::InvalidPattern { .. })));
}
