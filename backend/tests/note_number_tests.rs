//! Note number generation tests
//!
//! Property-based and unit tests for:
//! - First number of a day ends in 001
//! - Other days and other prefixes do not influence the sequence
//! - Generation is pure
//! - The next number is one past the highest, not the count

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use shared::{generate_note_number, NoteNumberFormat};

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_third_purchase_of_the_day() {
        let existing = ["PO20250608-001", "PO20250608-002"];
        assert_eq!(
            generate_note_number("PO", existing, at(2025, 6, 8)),
            "PO20250608-003"
        );
    }

    #[test]
    fn test_purchase_and_sales_series_are_independent() {
        let existing = ["SO20250608-005", "PO20250608-001"];
        let now = at(2025, 6, 8);
        assert_eq!(
            NoteNumberFormat::purchase().next(existing, now),
            "PO20250608-002"
        );
        assert_eq!(NoteNumberFormat::sales().next(existing, now), "SO20250608-006");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn prefix_strategy() -> impl Strategy<Value = String> {
        "[A-Z]{2,4}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_empty_history_starts_at_one(prefix in prefix_strategy(), date in date_strategy()) {
            let now = date.and_hms_opt(12, 0, 0).unwrap();
            let number = generate_note_number(&prefix, Vec::<String>::new(), now);
            prop_assert!(number.ends_with("-001"));
            prop_assert_eq!(number, format!("{}{}-001", prefix, date.format("%Y%m%d")));
        }

        #[test]
        fn prop_other_days_do_not_count(
            prefix in prefix_strategy(),
            date in date_strategy(),
            other_offset in 1i64..400,
            other_sequences in prop::collection::vec(1u32..999, 0..20),
        ) {
            let now = date.and_hms_opt(8, 0, 0).unwrap();
            let other_day = date - chrono::Duration::days(other_offset);
            let existing: Vec<String> = other_sequences
                .iter()
                .map(|seq| format!("{}{}-{:03}", prefix, other_day.format("%Y%m%d"), seq))
                .collect();

            prop_assert_eq!(
                generate_note_number(&prefix, &existing, now),
                generate_note_number(&prefix, Vec::<String>::new(), now)
            );
        }

        #[test]
        fn prop_next_is_one_past_highest(
            date in date_strategy(),
            sequences in prop::collection::vec(1u32..999, 1..30),
        ) {
            let now = date.and_hms_opt(8, 0, 0).unwrap();
            let day = date.format("%Y%m%d").to_string();
            let existing: Vec<String> = sequences
                .iter()
                .map(|seq| format!("PO{}-{:03}", day, seq))
                .collect();
            let highest = sequences.iter().max().copied().unwrap_or(0);

            prop_assert_eq!(
                generate_note_number("PO", &existing, now),
                format!("PO{}-{:03}", day, highest + 1)
            );
        }

        #[test]
        fn prop_generation_is_pure(
            date in date_strategy(),
            sequences in prop::collection::vec(1u32..999, 0..10),
        ) {
            let now = date.and_hms_opt(15, 45, 0).unwrap();
            let existing: Vec<String> = sequences
                .iter()
                .map(|seq| format!("SO{}-{:03}", date.format("%Y%m%d"), seq))
                .collect();

            prop_assert_eq!(
                generate_note_number("SO", &existing, now),
                generate_note_number("SO", &existing, now)
            );
        }

        #[test]
        fn prop_generated_number_is_new(
            date in date_strategy(),
            sequences in prop::collection::vec(1u32..999, 0..30),
        ) {
            let now = date.and_hms_opt(10, 0, 0).unwrap();
            let existing: Vec<String> = sequences
                .iter()
                .map(|seq| format!("PO{}-{:03}", date.format("%Y%m%d"), seq))
                .collect();
            let number = generate_note_number("PO", &existing, now);
            prop_assert!(!existing.contains(&number));
        }
    }
}
