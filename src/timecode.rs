/*!
 * ASS timestamp handling.
 *
 * ASS events store times as `H:MM:SS.CC` (unpadded hours, centiseconds),
 * SRT wants `HH:MM:SS,mmm`. Times travel through the crate as milliseconds.
 */

use crate::errors::SubtitleError;
use crate::subtitle_processor::SubtitleEntry;

/// Fractions longer than this are truncated before rounding
const MAX_FRACTION_DIGITS: usize = 9;

/// Parse an ASS timestamp (`H:MM:SS.CC`) to milliseconds
pub fn parse_ass_timestamp(timestamp: &str) -> Result<u64, SubtitleError> {
    let parts: Vec<&str> = timestamp.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(SubtitleError::invalid_timestamp(
            timestamp,
            "expected hours, minutes and seconds separated by ':'",
        ));
    }

    let (seconds_part, fraction_part) = parts[2].split_once('.').ok_or_else(|| {
        SubtitleError::invalid_timestamp(timestamp, "missing '.' before the fraction")
    })?;

    let hours = parse_component(timestamp, parts[0], "hours")?;
    let minutes = parse_component(timestamp, parts[1], "minutes")?;
    let seconds = parse_component(timestamp, seconds_part, "seconds")?;

    if minutes >= 60 || seconds >= 60 {
        return Err(SubtitleError::invalid_timestamp(
            timestamp,
            "minutes and seconds must be below 60",
        ));
    }

    let millis = fraction_to_millis(timestamp, fraction_part)?;

    hours
        .checked_mul(3_600_000)
        .and_then(|ms| ms.checked_add(minutes * 60_000 + seconds * 1_000 + millis))
        .ok_or_else(|| SubtitleError::invalid_timestamp(timestamp, "hours out of range"))
}

/// Convert an ASS timestamp straight to its SRT rendering
pub fn ass_to_srt_timestamp(timestamp: &str) -> Result<String, SubtitleError> {
    parse_ass_timestamp(timestamp).map(SubtitleEntry::format_timestamp)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_component(timestamp: &str, value: &str, name: &str) -> Result<u64, SubtitleError> {
    if !is_digits(value) {
        return Err(SubtitleError::invalid_timestamp(
            timestamp,
            format!("{} is not a number", name),
        ));
    }

    value
        .parse()
        .map_err(|_| SubtitleError::invalid_timestamp(timestamp, format!("{} is out of range", name)))
}

// round(0.<digits> * 1000), in integer arithmetic so "50" is exactly 500
fn fraction_to_millis(timestamp: &str, fraction: &str) -> Result<u64, SubtitleError> {
    // Validate the whole fraction before cutting it by byte count
    if !is_digits(fraction) {
        return Err(SubtitleError::invalid_timestamp(timestamp, "fraction is not a number"));
    }

    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    let value = parse_component(timestamp, digits, "fraction")?;
    let scale = 10u64.pow(digits.len() as u32);

    Ok((value * 1_000 + scale / 2) / scale)
}
