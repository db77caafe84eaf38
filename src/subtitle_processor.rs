use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::Result;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ass_events::EventRecord;
use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::timecode::parse_ass_timestamp;

// @module: SRT entries built from ASS dialogue

// @const: ASS override block, shortest match so `{a}x{b}` keeps `x`
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{.*?\}").unwrap()
});

// @const: ASS forced line break
const FORCED_BREAK: &str = "\\N";

/// Columns every converted record must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["Start", "End", "Name", "Text"];

/// Strip override tags, turn forced breaks into newlines and trim
pub fn sanitize_text(raw: &str) -> String {
    OVERRIDE_TAG_REGEX
        .replace_all(raw, "")
        .replace(FORCED_BREAK, "\n")
        .trim()
        .to_string()
}

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    // @creates: Entry from a filtered dialogue record
    // @validates: Both timestamps parse
    pub fn from_record(seq_num: usize, record: &EventRecord) -> Result<Self, SubtitleError> {
        let column = |name: &str| {
            record
                .get(name)
                .ok_or_else(|| SubtitleError::MissingColumn(name.to_string()))
        };

        Ok(SubtitleEntry {
            seq_num,
            start_time_ms: parse_ass_timestamp(column("Start")?)?,
            end_time_ms: parse_ass_timestamp(column("End")?)?,
            text: sanitize_text(column("Text")?),
        })
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)
    }
}

/// Collection of subtitle entries for one speaker
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries
    pub entries: Vec<SubtitleEntry>,

    /// Nickname the entries were selected by
    pub speaker: String,
}

impl SubtitleCollection {
    /// Create a new subtitle collection
    pub fn new(source_file: PathBuf, speaker: String) -> Self {
        SubtitleCollection {
            source_file,
            entries: Vec::new(),
            speaker,
        }
    }

    /// Number records 1..N in the order given and convert them
    pub fn from_records(source_file: PathBuf, speaker: String, records: &[EventRecord]) -> Result<Self, SubtitleError> {
        let entries = records
            .iter()
            .enumerate()
            .map(|(i, record)| SubtitleEntry::from_record(i + 1, record))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Converted {} records for speaker '{}'", entries.len(), speaker);

        Ok(SubtitleCollection {
            source_file,
            entries,
            speaker,
        })
    }

    /// Render the SRT document: blocks separated by one blank line, no surrounding whitespace
    pub fn to_srt_string(&self) -> String {
        let blocks: Vec<String> = self.entries.iter().map(|e| e.to_string()).collect();
        blocks.join("\n").trim().to_string()
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileManager::write_to_file(path, &self.to_srt_string())
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Speaker: {}", self.speaker)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
