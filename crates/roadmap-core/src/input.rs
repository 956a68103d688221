//! Numeric Input
//!
//! Transient text of the dashboard's day/value fields. Only digits get in;
//! a submission turns the text into numbers for the history.

use log::warn;

use crate::domain::MetricKey;

const DEFAULT_DAY: &str = "1";

/// True when `text` matches `^\d*$`
pub fn is_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Draft text of one stat card's input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDraft {
    pub day: String,
    pub value: String,
}

impl Default for MetricDraft {
    fn default() -> Self {
        Self {
            day: DEFAULT_DAY.to_string(),
            value: String::new(),
        }
    }
}

/// A parsed "day N, metric K, value V" request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub key: MetricKey,
    pub day_number: u32,
    pub amount: u64,
}

/// Input rows of all four stat cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricForm {
    drafts: [MetricDraft; 4],
}

impl MetricForm {
    pub fn draft(&self, key: MetricKey) -> &MetricDraft {
        &self.drafts[key.index()]
    }

    /// Replace the day text; returns false and keeps the old text on non-digits
    pub fn set_day(&mut self, key: MetricKey, text: &str) -> bool {
        if !is_digits(text) {
            return false;
        }
        self.drafts[key.index()].day = text.to_string();
        true
    }

    /// Replace the value text; returns false and keeps the old text on non-digits
    pub fn set_value(&mut self, key: MetricKey, text: &str) -> bool {
        if !is_digits(text) {
            return false;
        }
        self.drafts[key.index()].value = text.to_string();
        true
    }

    /// Parse the row for `key`.
    ///
    /// An empty value reads as 0 and an empty day as 1. Positive pairs are
    /// returned and clear the value text; the day text stays for the next
    /// entry on the same day.
    pub fn submit(&mut self, key: MetricKey) -> Option<Submission> {
        let draft = &mut self.drafts[key.index()];
        let amount = parse_or(&draft.value, 0)?;
        let day_number = parse_or(&draft.day, 1)?;
        if amount == 0 || day_number == 0 {
            return None;
        }
        draft.value.clear();
        Some(Submission {
            key,
            day_number,
            amount,
        })
    }
}

fn parse_or<T: std::str::FromStr>(text: &str, empty: T) -> Option<T> {
    if text.is_empty() {
        return Some(empty);
    }
    match text.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("input: '{}' is out of range", text);
            None
        }
    }
}
