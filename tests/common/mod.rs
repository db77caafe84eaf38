/*!
 * Common test utilities for the speaker-srt test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Routes library logging to the test harness output
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small ASS script with three speakers, tags, forced breaks and embedded commas
pub const SAMPLE_ASS: &str = r"[Script Info]
Title: Sample episode
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize
Style: Default,Arial,20

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:03.50,Default,(Alice),0,0,0,,{\an8}Hello there!
Dialogue: 0,0:00:04.00,0:00:06.25,Default,(Bob),0,0,0,,Hi, Alice.
Comment: 0,0:00:05.00,0:00:06.00,Default,(Alice),0,0,0,,not shown
Dialogue: 0,0:00:07.10,0:00:09.90,Default,Crowd (alice) & (Bob),0,0,0,,We all{\i1} agree{\i0},\Nsort of.
Dialogue: 0,1:02:03.04,1:02:05.00,Default,(Carol),0,0,0,,Bye.
";

/// Writes the sample script into `dir`
pub fn create_test_ass(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_ASS)
}

/// Helper to get the absolute path to a test resource
pub fn test_resource_path(relative_path: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("resources");
    path.push(relative_path);
    path
}
