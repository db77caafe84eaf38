/*!
 * # speaker-srt - one speaker's lines from ASS to SRT
 *
 * A Rust library for pulling the dialogue of a single speaker out of an
 * Advanced SubStation Alpha subtitle file and saving it as SubRip.
 *
 * ## Features
 *
 * - Parse the `[Events]` table against its `Format:` header
 * - Select lines whose `Name` contains `(nickname)`, case-insensitively
 * - Convert `H:MM:SS.CC` times to `HH:MM:SS,mmm`
 * - Strip `{...}` override tags and turn `\N` into real line breaks
 * - Derive a timestamped output name when none is given
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `ass_events`: Event section parsing
 * - `timecode`: ASS timestamp conversion
 * - `speaker_filter`: Nickname matching
 * - `subtitle_processor`: SRT entries, text cleanup and serialization
 * - `file_utils`: File system operations and output naming
 * - `app_controller`: The conversion entry point
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod ass_events;
pub mod timecode;
pub mod speaker_filter;
pub mod subtitle_processor;
pub mod file_utils;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{convert, ConversionReport, Controller};
pub use ass_events::{EventRecord, EventTable};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use errors::{AppError, SubtitleError};
