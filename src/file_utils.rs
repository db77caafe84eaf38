use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_config::OutputConfig;

// @module: File and directory utilities

/// Extension of generated subtitle files
pub const SRT_EXTENSION: &str = "srt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @resolves: Destination for a conversion
    // @params: input_file, nickname, explicit destination, output settings
    pub fn resolve_output_path<P: AsRef<Path>>(
        input_file: P,
        nickname: &str,
        explicit: Option<&Path>,
        output: &OutputConfig,
    ) -> PathBuf {
        match explicit {
            Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => path.to_path_buf(),
            _ => {
                let timestamp = Local::now().format(&output.timestamp_format).to_string();
                Self::generate_output_path(input_file, nickname, &output.unknown_nickname_placeholder, &timestamp)
            }
        }
    }

    // @generates: `<dir>/<stem>_<nickname>_<timestamp>.srt` next to the input
    pub fn generate_output_path<P: AsRef<Path>>(
        input_file: P,
        nickname: &str,
        placeholder: &str,
        timestamp: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();

        // Separators would turn the nickname into extra path components
        let nickname_safe = if nickname.is_empty() {
            placeholder.to_string()
        } else {
            nickname.replace([' ', '/', '\\'], "_")
        };

        let output_filename = format!("{}_{}_{}.{}", stem, nickname_safe, timestamp, SRT_EXTENSION);

        // Join with the input's directory
        input_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(output_filename)
    }
}
