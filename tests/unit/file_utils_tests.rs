/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use regex::Regex;
use speaker_srt::app_config::OutputConfig;
use speaker_srt::file_utils::FileManager;
use crate::common;

/// Test that generate_output_path builds the autoname next to the input
#[test]
fn test_generate_output_path_withNickname_shouldReplaceSpaces() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/subs/episode 01.ass"),
        "Big Bob",
        "unknown",
        "2024-01-02_03-04-05",
    );

    assert_eq!(output_path, Path::new("/tmp/subs/episode 01_Big_Bob_2024-01-02_03-04-05.srt"));
}

/// Path separators in the nickname stay inside the file name
#[test]
fn test_generate_output_path_withSeparatorsInNickname_shouldStayInInputDir() {
    let output_path = FileManager::generate_output_path(Path::new("/tmp/subs/ep.ass"), "a/b\\c d", "unknown", "T");
    assert_eq!(output_path, Path::new("/tmp/subs/ep_a_b_c_d_T.srt"));

    let output_path = FileManager::generate_output_path(Path::new("/tmp/subs/ep.ass"), "../x", "unknown", "T");
    assert_eq!(output_path.parent(), Some(Path::new("/tmp/subs")));
    assert_eq!(output_path.file_name().unwrap(), "ep_.._x_T.srt");
}

/// An empty nickname falls back to the placeholder
#[test]
fn test_generate_output_path_withEmptyNickname_shouldUsePlaceholder() {
    let output_path = FileManager::generate_output_path(Path::new("show.ass"), "", "unknown", "T");
    assert_eq!(output_path, Path::new("show_unknown_T.srt"));
}

/// An explicit destination is used verbatim
#[test]
fn test_resolve_output_path_withExplicitPath_shouldUseIt() {
    let explicit = Path::new("/elsewhere/custom name.txt");
    let resolved = FileManager::resolve_output_path(
        "/tmp/show.ass",
        "Alice",
        Some(explicit),
        &OutputConfig::default(),
    );
    assert_eq!(resolved, explicit);
}

/// Without a destination the local timestamp is embedded
#[test]
fn test_resolve_output_path_withoutExplicitPath_shouldEmbedTimestamp() {
    let pattern = Regex::new(r"^show_Alice_\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}\.srt$").unwrap();

    for explicit in [None, Some(Path::new("")), Some(Path::new("   "))] {
        let resolved = FileManager::resolve_output_path("/tmp/show.ass", "Alice", explicit, &OutputConfig::default());

        assert_eq!(resolved.parent(), Some(Path::new("/tmp")));
        let name = resolved.file_name().unwrap().to_string_lossy().to_string();
        assert!(pattern.is_match(&name), "unexpected autoname: {}", name);
    }
}

/// Test read and write round trip through the filesystem
#[test]
fn test_write_to_file_withMissingParent_shouldCreateDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("a").join("b").join("out.srt");

    FileManager::write_to_file(&path, "content")?;
    assert_eq!(FileManager::read_to_string(&path)?, "content");
    Ok(())
}

/// Reading a missing file reports the path
#[test]
fn test_read_to_string_withMissingFile_shouldFailWithPath() {
    let err = FileManager::read_to_string("does/not/exist.ass").unwrap_err();
    assert!(format!("{:#}", err).contains("does/not/exist.ass"));
}
