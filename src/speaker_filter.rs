use regex::{Regex, RegexBuilder};

use crate::ass_events::EventRecord;

// @module: Selecting the dialogue lines of one speaker

/// Column holding the speaker name
pub const NAME_COLUMN: &str = "Name";

// @const: Compiled pattern budget, far above any real speaker name
const PATTERN_SIZE_LIMIT: usize = 1 << 16;

/// Matches event names that contain `(nickname)`, ignoring case
#[derive(Debug, Clone)]
pub struct NicknameFilter {
    // @field: None for an empty nickname, which matches nothing
    pattern: Option<Regex>,
}

impl NicknameFilter {
    /// Build a filter for the given nickname; regex metacharacters are taken literally
    pub fn new(nickname: &str) -> Result<Self, regex::Error> {
        if nickname.is_empty() {
            return Ok(NicknameFilter { pattern: None });
        }

        let pattern = RegexBuilder::new(&format!(r"\({}\)", regex::escape(nickname)))
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;

        Ok(NicknameFilter {
            pattern: Some(pattern),
        })
    }

    /// Check a single speaker name
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Keep the records whose `Name` column matches, preserving their order
    pub fn apply<'a, I>(&self, records: I) -> Vec<EventRecord>
    where
        I: IntoIterator<Item = &'a EventRecord>,
    {
        records
            .into_iter()
            .filter(|record| record.get(NAME_COLUMN).is_some_and(|name| self.matches(name)))
            .cloned()
            .collect()
    }
}
