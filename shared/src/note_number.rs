//! Note number (nomor nota) generation for purchase and sales orders
//!
//! A note number is `prefix + date partition + separator + sequence`, e.g.
//! `PO20250608-003`. The sequence restarts at 001 for every date partition.
//!
//! Generation is a pure function of the prefix, the issued numbers and the
//! clock reading. Two callers working from the same snapshot receive the same
//! number; whoever records the order must check uniqueness at insert time.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Default zero-padded width of the sequence component
pub const DEFAULT_SEQUENCE_WIDTH: usize = 3;

/// Default separator between the date partition and the sequence
pub const DEFAULT_SEPARATOR: char = '-';

/// Granularity of the date partition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatePartition {
    /// `YYYYMMDD`
    #[default]
    Day,
    /// `YYYYMMDDHHMM`
    Minute,
}

impl DatePartition {
    pub fn key(&self, now: NaiveDateTime) -> String {
        match self {
            DatePartition::Day => {
                format!("{:04}{:02}{:02}", now.year(), now.month(), now.day())
            }
            DatePartition::Minute => format!(
                "{:04}{:02}{:02}{:02}{:02}",
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute()
            ),
        }
    }
}

/// Layout of a note number series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteNumberFormat {
    pub prefix: String,
    pub partition: DatePartition,
    pub separator: char,
    pub width: usize,
}

impl NoteNumberFormat {
    /// Daily series with the default separator and width
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            partition: DatePartition::Day,
            separator: DEFAULT_SEPARATOR,
            width: DEFAULT_SEQUENCE_WIDTH,
        }
    }

    /// Purchase order series (`PO20250608-001`)
    pub fn purchase() -> Self {
        Self::new("PO")
    }

    /// Sales order series (`SO20250608-001`)
    pub fn sales() -> Self {
        Self::new("SO")
    }

    pub fn with_partition(mut self, partition: DatePartition) -> Self {
        self.partition = partition;
        self
    }

    /// `prefix + date partition`, the part shared by every number issued in the same period
    pub fn period_key(&self, now: NaiveDateTime) -> String {
        format!("{}{}", self.prefix, self.partition.key(now))
    }

    /// Sequence component of a note number belonging to the period `period_key`.
    ///
    /// Returns `None` for numbers from another period and for numbers whose
    /// trailing component is not a plain decimal integer; such entries are
    /// skipped rather than reported.
    fn sequence_in_period(&self, note_number: &str, period_key: &str) -> Option<u64> {
        let rest = note_number.strip_prefix(period_key)?;
        if !rest.starts_with(self.separator) {
            return None;
        }
        let (_, sequence) = note_number.rsplit_once(self.separator)?;
        if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        sequence.parse().ok()
    }

    /// Next note number for the period containing `now`
    pub fn next<I, S>(&self, existing: I, now: NaiveDateTime) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let period_key = self.period_key(now);
        let last = existing
            .into_iter()
            .filter_map(|n| self.sequence_in_period(n.as_ref(), &period_key))
            .max()
            .unwrap_or(0);

        format!(
            "{}{}{:0width$}",
            period_key,
            self.separator,
            last.saturating_add(1),
            width = self.width
        )
    }
}

/// Generate the next daily note number for `prefix`
pub fn generate_note_number<I, S>(prefix: &str, existing: I, now: NaiveDateTime) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NoteNumberFormat::new(prefix).next(existing, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_first_number_of_the_day() {
        let none: [&str; 0] = [];
        assert_eq!(
            generate_note_number("PO", none, at(2025, 6, 8, 9, 30)),
            "PO20250608-001"
        );
    }

    #[test]
    fn test_continues_existing_sequence() {
        let existing = ["PO20250608-001", "PO20250608-002"];
        assert_eq!(
            generate_note_number("PO", existing, at(2025, 6, 8, 14, 0)),
            "PO20250608-003"
        );
    }

    #[test]
    fn test_uses_maximum_not_count() {
        let existing = ["PO20250608-007", "PO20250608-002"];
        assert_eq!(
            generate_note_number("PO", existing, at(2025, 6, 8, 0, 0)),
            "PO20250608-008"
        );
    }

    #[test]
    fn test_other_days_are_ignored() {
        let existing = ["PO20250607-010", "PO20250609-004"];
        assert_eq!(
            generate_note_number("PO", existing, at(2025, 6, 8, 0, 0)),
            "PO20250608-001"
        );
    }

    #[test]
    fn test_other_prefixes_are_ignored() {
        let existing = ["SO20250608-005"];
        assert_eq!(
            generate_note_number("PO", existing, at(2025, 6, 8, 0, 0)),
            "PO20250608-001"
        );
    }

    #[test]
    fn test_unparseable_sequences_are_skipped() {
        let existing = ["PO20250608-abc", "PO20250608-", "PO20250608-+9", "PO20250608-004"];
        assert_eq!(
            generate_note_number("PO", existing, at(2025, 6, 8, 0, 0)),
            "PO20250608-005"
        );
    }

    #[test]
    fn test_sequence_grows_past_width() {
        let existing = ["PO20250608-999"];
        assert_eq!(
            generate_note_number("PO", existing, at(2025, 6, 8, 0, 0)),
            "PO20250608-1000"
        );
    }

    #[test]
    fn test_prefix_containing_separator() {
        let format = NoteNumberFormat::new("SALE-");
        let existing = ["SALE-20250608-002"];
        assert_eq!(format.next(existing, at(2025, 6, 8, 0, 0)), "SALE-20250608-003");
    }

    #[test]
    fn test_minute_partition() {
        let format = NoteNumberFormat::sales().with_partition(DatePartition::Minute);
        let existing = ["SO202506081430-001", "SO202506081429-006"];
        assert_eq!(
            format.next(existing, at(2025, 6, 8, 14, 30)),
            "SO202506081430-002"
        );
    }

    #[test]
    fn test_day_series_ignores_minute_series() {
        let existing = ["PO202506081430-009"];
        assert_eq!(
            NoteNumberFormat::purchase().next(existing, at(2025, 6, 8, 14, 30)),
            "PO20250608-001"
        );
    }

    #[test]
    fn test_same_inputs_same_output() {
        let existing = vec!["PO20250608-001".to_string()];
        let now = at(2025, 6, 8, 10, 0);
        assert_eq!(
            generate_note_number("PO", &existing, now),
            generate_note_number("PO", &existing, now)
        );
    }
}
