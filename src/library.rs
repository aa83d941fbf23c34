//! Library view sectioning
//!
//! Groups an already-sorted match list into labeled sections for the
//! library page: by month when sorting by date, by opponent otherwise.
//! Pure functions, no I/O; matches keep their incoming order inside each
//! section.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::db::matches::MatchSort;
use crate::db::Match;

const NO_DATE_LABEL: &str = "No date";
const NO_OPPONENT_LABEL: &str = "No opponent";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One labeled section of the library page
#[derive(Debug, Clone, Serialize)]
pub struct LibrarySection {
    pub label: String,
    pub matches: Vec<Match>,
}

/// Section a match list for the library view.
///
/// Date sort buckets by month (newest month first, undated matches last);
/// every other sort buckets by opponent (A-Z, unnamed opponents last).
pub fn group_matches(matches: Vec<Match>, sort: MatchSort) -> Vec<LibrarySection> {
    match sort {
        MatchSort::Date => group_by_month(matches),
        _ => group_by_opponent(matches),
    }
}

/// Bucket key for a date string: the "YYYY-MM" prefix when present,
/// the raw value otherwise
fn month_key(date: &str) -> &str {
    if date.contains('-') {
        date.get(..7).unwrap_or(date)
    } else {
        date
    }
}

/// "2024-01" -> "January 2024"; keys that do not parse are used verbatim
fn month_label(key: &str) -> String {
    let mut parts = key.splitn(2, '-');
    let year = parts.next().unwrap_or(key);
    let month = parts
        .next()
        .and_then(|m| m.parse::<usize>().ok())
        .filter(|&m| (1..=12).contains(&m));
    match month {
        Some(m) => format!("{} {}", MONTH_NAMES[m - 1], year),
        None => key.to_string(),
    }
}

fn group_by_month(matches: Vec<Match>) -> Vec<LibrarySection> {
    let mut buckets: HashMap<String, Vec<Match>> = HashMap::new();
    for m in matches {
        let key = match m.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(date) => month_key(date).to_string(),
            None => NO_DATE_LABEL.to_string(),
        };
        buckets.entry(key).or_default().push(m);
    }

    let mut keys: Vec<String> = buckets.keys().cloned().collect();
    keys.sort_by(|a, b| {
        match (a.as_str() == NO_DATE_LABEL, b.as_str() == NO_DATE_LABEL) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Newest month first
            (false, false) => b.cmp(a),
        }
    });

    keys.into_iter()
        .map(|key| {
            let matches = buckets.remove(&key).unwrap_or_default();
            let label = if key == NO_DATE_LABEL {
                key
            } else {
                month_label(&key)
            };
            LibrarySection { label, matches }
        })
        .collect()
}

fn group_by_opponent(matches: Vec<Match>) -> Vec<LibrarySection> {
    let mut buckets: HashMap<String, Vec<Match>> = HashMap::new();
    for m in matches {
        let key = match m
            .opponent
            .as_deref()
            .filter(|o| !o.trim().is_empty())
        {
            Some(opponent) => opponent.to_string(),
            None => NO_OPPONENT_LABEL.to_string(),
        };
        buckets.entry(key).or_default().push(m);
    }

    let mut keys: Vec<String> = buckets.keys().cloned().collect();
    keys.sort_by(|a, b| {
        match (
            a.as_str() == NO_OPPONENT_LABEL,
            b.as_str() == NO_OPPONENT_LABEL,
        ) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.cmp(b),
        }
    });

    keys.into_iter()
        .map(|label| {
            let matches = buckets.remove(&label).unwrap_or_default();
            LibrarySection { label, matches }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MatchCategory;
    use chrono::Utc;

    fn library_match(id: i64, date: Option<&str>, opponent: Option<&str>) -> Match {
        let now = Utc::now();
        Match {
            id,
            title: format!("Match {}", id),
            video_path: format!("videos/{}.mp4", id),
            duration_seconds: None,
            date: date.map(str::to_string),
            opponent: opponent.map(str::to_string),
            result: None,
            notes: None,
            category: MatchCategory::Uncategorized,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn date_sort_sections_by_month_newest_first() {
        let matches = vec![
            library_match(1, Some("2024-01-15"), None),
            library_match(2, Some("2024-02-01"), None),
            library_match(3, Some("2024-01-20"), None),
            library_match(4, None, None),
        ];
        let sections = group_matches(matches, MatchSort::Date);
        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["February 2024", "January 2024", "No date"]);
        let january_ids: Vec<i64> = sections[1].matches.iter().map(|m| m.id).collect();
        // Incoming order survives within a section
        assert_eq!(january_ids, vec![1, 3]);
        assert_eq!(sections[2].matches[0].id, 4);
    }

    #[test]
    fn blank_dates_land_in_the_no_date_bucket() {
        let matches = vec![
            library_match(1, Some("  "), None),
            library_match(2, Some("2024-03-05"), None),
        ];
        let sections = group_matches(matches, MatchSort::Date);
        assert_eq!(sections[0].label, "March 2024");
        assert_eq!(sections[1].label, "No date");
        assert_eq!(sections[1].matches[0].id, 1);
    }

    #[test]
    fn unparseable_date_keys_are_used_verbatim() {
        let matches = vec![library_match(1, Some("2024"), None)];
        let sections = group_matches(matches, MatchSort::Date);
        assert_eq!(sections[0].label, "2024");
    }

    #[test]
    fn non_date_sorts_section_by_opponent_with_unnamed_last() {
        let matches = vec![
            library_match(1, None, Some("Sam")),
            library_match(2, None, Some("Alex")),
            library_match(3, None, None),
            library_match(4, None, Some("")),
            library_match(5, None, Some("Alex")),
        ];
        let sections = group_matches(matches, MatchSort::Opponent);
        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Alex", "Sam", "No opponent"]);
        let alex_ids: Vec<i64> = sections[0].matches.iter().map(|m| m.id).collect();
        assert_eq!(alex_ids, vec![2, 5]);
        // Blank and missing opponents share the unnamed bucket
        assert_eq!(sections[2].matches.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(group_matches(Vec::new(), MatchSort::Date).is_empty());
        assert!(group_matches(Vec::new(), MatchSort::Opponent).is_empty());
    }
}
