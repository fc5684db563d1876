//! # Roster View Engine
//!
//! Turns the raw teacher collection into what the roster page shows.
//!
//! The presented rows are produced by a fixed pipeline, re-run from scratch
//! whenever the collection or the view state changes:
//!
//! 1. **Search**: keep records whose name contains the search text,
//!    ignoring case. Empty text keeps everything.
//! 2. **Sort**: stable sort by the selected criterion. `None` leaves the
//!    search output untouched.
//!
//! The class average is computed separately over the whole collection, so
//! searching never changes it.

use std::fmt;
use std::str::FromStr;

use crate::Teacher;

/// Ordering applied to the presented rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    None,
    AgeAsc,
    AgeDesc,
    ClassesAsc,
    ClassesDesc,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 5] = [
        SortCriterion::None,
        SortCriterion::AgeAsc,
        SortCriterion::AgeDesc,
        SortCriterion::ClassesAsc,
        SortCriterion::ClassesDesc,
    ];

    /// Value used in the sort `<select>` options
    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::None => "none",
            SortCriterion::AgeAsc => "age(asc)",
            SortCriterion::AgeDesc => "age(desc)",
            SortCriterion::ClassesAsc => "numberOfClasses(asc)",
            SortCriterion::ClassesDesc => "numberOfClasses(desc)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::None => "None",
            SortCriterion::AgeAsc => "Age (asc)",
            SortCriterion::AgeDesc => "Age (desc)",
            SortCriterion::ClassesAsc => "Number of Classes (asc)",
            SortCriterion::ClassesDesc => "Number of Classes (desc)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortCriterionError(String);

impl fmt::Display for ParseSortCriterionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort criterion: {}", self.0)
    }
}

impl std::error::Error for ParseSortCriterionError {}

impl FromStr for SortCriterion {
    type Err = ParseSortCriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| ParseSortCriterionError(s.to_string()))
    }
}

/// Average number of classes across the collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassAverage {
    /// The collection is empty
    NoData,
    Value(f64),
}

impl fmt::Display for ClassAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassAverage::NoData => write!(f, "No data"),
            ClassAverage::Value(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Keep records whose full name contains `text`, case-insensitively
pub fn search<'a>(records: &'a [Teacher], text: &str) -> Vec<&'a Teacher> {
    if text.is_empty() {
        return records.iter().collect();
    }

    let needle = text.to_lowercase();
    records
        .iter()
        .filter(|teacher| teacher.full_name.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort; ties keep their input order
pub fn sort(mut rows: Vec<&Teacher>, criterion: SortCriterion) -> Vec<&Teacher> {
    match criterion {
        SortCriterion::None => {}
        SortCriterion::AgeAsc => rows.sort_by_key(|t| t.age),
        SortCriterion::AgeDesc => rows.sort_by(|a, b| b.age.cmp(&a.age)),
        SortCriterion::ClassesAsc => rows.sort_by_key(|t| t.number_of_classes),
        SortCriterion::ClassesDesc => {
            rows.sort_by(|a, b| b.number_of_classes.cmp(&a.number_of_classes))
        }
    }
    rows
}

pub fn average_number_of_classes(records: &[Teacher]) -> ClassAverage {
    if records.is_empty() {
        return ClassAverage::NoData;
    }

    // Summed in i128; the i64 sum overflows on large stored counts
    let total: i128 = records.iter().map(|t| i128::from(t.number_of_classes)).sum();
    ClassAverage::Value(total as f64 / records.len() as f64)
}

/// Search then sort
pub fn present<'a>(
    records: &'a [Teacher],
    search_text: &str,
    criterion: SortCriterion,
) -> Vec<&'a Teacher> {
    sort(search(records, search_text), criterion)
}

/// Transient roster page state.
///
/// Treated as a value: every input change builds a new `RosterView`
/// rather than mutating the current one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterView {
    search_text: String,
    sort: SortCriterion,
    show_average: bool,
}

impl RosterView {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort(&self) -> SortCriterion {
        self.sort
    }

    pub fn show_average(&self) -> bool {
        self.show_average
    }

    pub fn with_search_text(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortCriterion) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn toggle_average(&self) -> Self {
        Self {
            show_average: !self.show_average,
            ..self.clone()
        }
    }

    pub fn present<'a>(&self, records: &'a [Teacher]) -> PresentedRoster<'a> {
        PresentedRoster {
            rows: present(records, &self.search_text, self.sort),
            average: average_number_of_classes(records),
            show_average: self.show_average,
        }
    }
}

/// Output of [`RosterView::present`]
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedRoster<'a> {
    pub rows: Vec<&'a Teacher>,
    /// Over the full collection, not just `rows`
    pub average: ClassAverage,
    pub show_average: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn teacher(id: &str, name: &str, age: i64, classes: i64) -> Teacher {
        Teacher {
            id: id.to_string(),
            full_name: name.to_string(),
            age,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            number_of_classes: classes,
        }
    }

    fn ids(rows: &[&Teacher]) -> Vec<String> {
        rows.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![
            teacher("1", "Ada Lovelace", 36, 3),
            teacher("2", "Alan Turing", 41, 5),
        ];

        let ada = search(&records, "ada");
        assert_eq!(ids(&ada), vec!["1"]);

        let both = search(&records, "a");
        assert_eq!(ids(&both), vec!["1", "2"]);

        let upper = search(&records, "TURING");
        assert_eq!(ids(&upper), vec!["2"]);

        assert!(search(&records, "grace").is_empty());
    }

    #[test]
    fn test_empty_search_is_identity() {
        let records = vec![
            teacher("3", "Zed", 1, 1),
            teacher("1", "Amy", 2, 2),
            teacher("2", "Bob", 3, 3),
        ];

        assert_eq!(ids(&search(&records, "")), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_by_age_is_stable() {
        let records = vec![
            teacher("id1", "A", 5, 0),
            teacher("id2", "B", 5, 0),
            teacher("id3", "C", 3, 0),
        ];

        let rows = sort(records.iter().collect(), SortCriterion::AgeAsc);
        assert_eq!(ids(&rows), vec!["id3", "id1", "id2"]);

        let rows = sort(records.iter().collect(), SortCriterion::AgeDesc);
        assert_eq!(ids(&rows), vec!["id1", "id2", "id3"]);
    }

    #[test]
    fn test_sort_by_classes() {
        let records = vec![
            teacher("1", "A", 40, 7),
            teacher("2", "B", 30, 2),
            teacher("3", "C", 50, 7),
            teacher("4", "D", 20, 4),
        ];

        let rows = sort(records.iter().collect(), SortCriterion::ClassesAsc);
        assert_eq!(ids(&rows), vec!["2", "4", "1", "3"]);

        let rows = sort(records.iter().collect(), SortCriterion::ClassesDesc);
        assert_eq!(ids(&rows), vec!["1", "3", "4", "2"]);
    }

    #[test]
    fn test_sort_none_passes_through() {
        let records = vec![
            teacher("b", "B", 9, 1),
            teacher("a", "A", 1, 9),
            teacher("c", "C", 5, 5),
        ];

        let rows = sort(records.iter().collect(), SortCriterion::None);
        assert_eq!(ids(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_average() {
        let records = vec![
            teacher("1", "A", 30, 3),
            teacher("2", "B", 30, 5),
            teacher("3", "C", 30, 7),
        ];

        assert_eq!(average_number_of_classes(&records), ClassAverage::Value(5.0));
        assert_eq!(average_number_of_classes(&records).to_string(), "5.00");
    }

    #[test]
    fn test_average_of_huge_counts_does_not_overflow() {
        let records = vec![
            teacher("1", "A", 30, i64::MAX),
            teacher("2", "B", 30, 1),
        ];

        // (2^63 - 1 + 1) / 2 == 2^62
        assert_eq!(
            average_number_of_classes(&records),
            ClassAverage::Value(4_611_686_018_427_387_904.0)
        );
    }

    #[test]
    fn test_average_of_empty_collection_is_no_data() {
        let average = average_number_of_classes(&[]);

        assert_eq!(average, ClassAverage::NoData);
        assert_eq!(average.to_string(), "No data");
    }

    #[test]
    fn test_sort_criterion_parses_its_own_values() {
        for criterion in SortCriterion::ALL {
            assert_eq!(criterion.as_str().parse::<SortCriterion>(), Ok(criterion));
        }
        assert!("age".parse::<SortCriterion>().is_err());
    }

    #[test]
    fn test_view_searches_before_sorting_and_averages_everything() {
        let records = vec![
            teacher("1", "Ada Lovelace", 36, 3),
            teacher("2", "Alan Turing", 41, 5),
            teacher("3", "Grace Hopper", 85, 7),
            teacher("4", "Adam Smith", 30, 1),
        ];

        let view = RosterView::default()
            .with_search_text("ADA")
            .with_sort(SortCriterion::AgeAsc);
        let presented = view.present(&records);

        assert_eq!(ids(&presented.rows), vec!["4", "1"]);
        assert_eq!(presented.average, ClassAverage::Value(4.0));
        assert!(!presented.show_average);
    }

    #[test]
    fn test_view_updates_produce_new_values() {
        let original = RosterView::default();
        let searched = original.with_search_text("x");
        let toggled = searched.toggle_average();

        assert_eq!(original.search_text(), "");
        assert_eq!(searched.search_text(), "x");
        assert!(!searched.show_average());
        assert!(toggled.show_average());
        assert!(!toggled.toggle_average().show_average());
        assert_eq!(toggled.sort(), SortCriterion::None);
    }
}
