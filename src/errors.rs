/*!
 * Error types for the speaker-srt application.
 *
 * This module contains custom error types for the parsing layer and for the
 * conversion boundary, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while reading the ASS event table or its timestamps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// The document has no `[Events]` section
    #[error("No [Events] section found in the subtitle file")]
    MissingEventsSection,

    /// The `[Events]` section has no `Format:` line
    #[error("No Format: line found in the [Events] section")]
    MissingFormatLine,

    /// The `Format:` line declares no usable columns
    #[error("The Format: line declares no columns")]
    EmptyFormat,

    /// The same column name appears twice in the `Format:` line
    #[error("Duplicate column in Format: line: {0}")]
    DuplicateColumn(String),

    /// A column the conversion depends on is not declared
    #[error("Required column missing from Format: line: {0}")]
    MissingColumn(String),

    /// A `Dialogue:` line carries fewer fields than the `Format:` line declares
    #[error("Dialogue line {line} has {found} fields, expected {expected}")]
    MalformedDialogue {
        /// 1-based line number inside the event section
        line: usize,
        /// Column count declared by the Format line
        expected: usize,
        /// Number of values actually present
        found: usize,
    },

    /// A timestamp does not follow the `H:MM:SS.CC` layout
    #[error("Invalid timestamp '{timestamp}': {reason}")]
    InvalidTimestamp {
        /// The offending input
        timestamp: String,
        /// What was wrong with it
        reason: String,
    },
}

impl SubtitleError {
    /// True when the document lacks the section or header needed to find events
    pub fn is_structure_error(&self) -> bool {
        matches!(self, Self::MissingEventsSection | Self::MissingFormatLine)
    }

    /// True when a row, header or timestamp could not be parsed
    pub fn is_format_error(&self) -> bool {
        !self.is_structure_error()
    }

    pub(crate) fn invalid_timestamp(timestamp: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            timestamp: timestamp.to_string(),
            reason: reason.into(),
        }
    }
}

/// Main application error type returned at the conversion boundary
#[derive(Error, Debug)]
pub enum AppError {
    /// No input file was supplied
    #[error("Select the input ASS file")]
    MissingInput,

    /// The nickname filter matched no dialogue lines
    #[error("No lines with the nickname were found ({nickname})")]
    NothingFound {
        /// The nickname that was searched for
        nickname: String,
    },

    /// Error from subtitle parsing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The nickname could not be turned into a name pattern
    #[error("Invalid nickname: {0}")]
    Nickname(String),
}

impl AppError {
    /// Warnings are user-facing notices rather than failures
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::MissingInput | Self::NothingFound { .. })
    }
}
