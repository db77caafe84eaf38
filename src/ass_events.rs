/*!
 * Reading the `[Events]` table of an Advanced SubStation Alpha document.
 *
 * Only the event section is looked at. The `Format:` line names the columns
 * and every `Dialogue:` line is split against it, the last column (normally
 * `Text`) keeping any commas it contains.
 */

use log::debug;

use crate::errors::SubtitleError;

/// Marker that opens the event section
pub const EVENTS_MARKER: &str = "[Events]";

const FORMAT_PREFIX: &str = "Format:";
const DIALOGUE_PREFIX: &str = "Dialogue:";

/// One `Dialogue:` row, keyed by the column names of the `Format:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    fields: Vec<(String, String)>,
}

impl EventRecord {
    /// Build a record from column/value pairs, keeping their order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EventRecord {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Value of the named column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// The parsed event section: declared columns plus every dialogue row in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTable {
    /// Column names from the `Format:` line
    pub columns: Vec<String>,

    /// One record per `Dialogue:` line
    pub records: Vec<EventRecord>,
}

impl EventTable {
    /// Parse the event section of a raw ASS document
    pub fn parse(document: &str) -> Result<Self, SubtitleError> {
        let section = event_section(document)?;

        let lines: Vec<&str> = section
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        // First Format line wins
        let format_line = lines
            .iter()
            .find(|line| line.starts_with(FORMAT_PREFIX))
            .ok_or(SubtitleError::MissingFormatLine)?;
        let columns = parse_columns(&format_line[FORMAT_PREFIX.len()..])?;

        let mut records = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(rest) = line.strip_prefix(DIALOGUE_PREFIX) {
                records.push(parse_dialogue(rest, &columns, index + 1)?);
            }
        }

        debug!(
            "Parsed {} dialogue lines against {} columns",
            records.len(),
            columns.len()
        );

        Ok(EventTable { columns, records })
    }

    /// Fail unless every named column is declared
    pub fn require_columns(&self, required: &[&str]) -> Result<(), SubtitleError> {
        match required
            .iter()
            .find(|name| !self.columns.iter().any(|c| c == *name))
        {
            Some(missing) => Err(SubtitleError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }
}

/// Everything after the first `[Events]` marker, ignoring a leading BOM
pub fn event_section(document: &str) -> Result<&str, SubtitleError> {
    let document = document.trim_start_matches('\u{FEFF}');
    document
        .split_once(EVENTS_MARKER)
        .map(|(_, section)| section.trim())
        .ok_or(SubtitleError::MissingEventsSection)
}

fn parse_columns(header: &str) -> Result<Vec<String>, SubtitleError> {
    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

    if columns.iter().all(String::is_empty) {
        return Err(SubtitleError::EmptyFormat);
    }

    for (i, column) in columns.iter().enumerate() {
        if columns[..i].contains(column) {
            return Err(SubtitleError::DuplicateColumn(column.clone()));
        }
    }

    Ok(columns)
}

fn parse_dialogue(rest: &str, columns: &[String], line: usize) -> Result<EventRecord, SubtitleError> {
    let values: Vec<&str> = rest.trim().splitn(columns.len(), ',').map(str::trim).collect();

    if values.len() != columns.len() {
        return Err(SubtitleError::MalformedDialogue {
            line,
            expected: columns.len(),
            found: values.len(),
        });
    }

    Ok(EventRecord::from_pairs(columns.iter().cloned().zip(values)))
}
