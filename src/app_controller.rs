use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::ass_events::EventTable;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::speaker_filter::NicknameFilter;
use crate::subtitle_processor::{SubtitleCollection, REQUIRED_COLUMNS};

// @module: Application controller for speaker extraction

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of SRT entries written
    pub entry_count: usize,

    /// Where the SRT file was written
    pub output_path: PathBuf,

    /// Nickname the lines were selected by
    pub nickname: String,
}

impl std::fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ready! Found {} lines with the nickname ({}).\nSaved in:\n{}",
            self.entry_count,
            self.nickname,
            self.output_path.display()
        )
    }
}

/// Main application controller for ASS to SRT conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;

        Ok(Self { config })
    }

    /// Controller with default settings
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Extract the lines of `nickname` from an ASS file into an SRT file.
    ///
    /// `output` is used as given when present; otherwise a name is derived
    /// next to the input. No file is written unless at least one line matched
    /// and every selected line converted.
    pub fn convert(&self, input: Option<&Path>, nickname: &str, output: Option<&Path>) -> Result<ConversionReport, AppError> {
        let input = match input {
            Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => path,
            _ => return Err(AppError::MissingInput),
        };

        debug!("Reading subtitle file: {:?}", input);
        let document = FileManager::read_to_string(input)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        let table = EventTable::parse(&document)?;
        table.require_columns(&REQUIRED_COLUMNS)?;

        let filter = NicknameFilter::new(nickname).map_err(|e| AppError::Nickname(e.to_string()))?;
        let selected = filter.apply(&table.records);
        debug!(
            "{} of {} dialogue lines belong to '{}'",
            selected.len(),
            table.records.len(),
            nickname
        );

        if selected.is_empty() {
            warn!("No lines with the nickname were found ({})", nickname);
            return Err(AppError::NothingFound {
                nickname: nickname.to_string(),
            });
        }

        let collection = SubtitleCollection::from_records(input.to_path_buf(), nickname.to_string(), &selected)?;
        debug!("{}", collection);

        let output_path = FileManager::resolve_output_path(input, nickname, output, &self.config.output);
        collection
            .write_to_srt(&output_path)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        info!("Wrote {} entries to {:?}", collection.entries.len(), output_path);

        Ok(ConversionReport {
            entry_count: collection.entries.len(),
            output_path,
            nickname: nickname.to_string(),
        })
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert with default settings
pub fn convert(input: Option<&Path>, nickname: &str, output: Option<&Path>) -> Result<ConversionReport, AppError> {
    Controller::new().convert(input, nickname, output)
}
