//! Clinical timeline events and day grouping.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Display severity for a timeline entry.
pub enum Severity {
    /// Neutral entry.
    #[default]
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Urgent.
    Critical,
}

impl Severity {
    /// Stable token used in `data-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Single entry on a patient timeline.
pub struct TimelineEvent {
    /// Host identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Supporting detail.
    #[serde(default)]
    pub description: Option<String>,
    /// Local time the event happened.
    pub occurred_at: NaiveDateTime,
    /// Free-form category (`"lab"`, `"visit"`).
    #[serde(default)]
    pub category: Option<String>,
    /// Display severity.
    #[serde(default)]
    pub severity: Severity,
    /// Recording clinician.
    #[serde(default)]
    pub author: Option<String>,
}

/// Groups events by calendar day, newest day first and newest event first within a day.
pub fn group_by_day(events: &[TimelineEvent]) -> Vec<(NaiveDate, Vec<TimelineEvent>)> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

    let mut groups: Vec<(NaiveDate, Vec<TimelineEvent>)> = Vec::new();
    for event in sorted {
        let day = event.occurred_at.date();
        match groups.last_mut() {
            Some((current, bucket)) if *current == day => bucket.push(event),
            _ => groups.push((day, vec![event])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn event(id: &str, day: u32, hour: u32) -> TimelineEvent {
        TimelineEvent {
            id: id.to_string(),
            title: format!("event {id}"),
            description: None,
            occurred_at: NaiveDate::from_ymd_opt(2024, 1, day)
                .and_then(|date| date.and_hms_opt(hour, 0, 0))
                .expect("datetime"),
            category: None,
            severity: Severity::Info,
            author: None,
        }
    }

    #[test]
    fn groups_newest_day_first_with_descending_events() {
        let events = vec![
            event("a", 3, 9),
            event("b", 5, 8),
            event("c", 3, 17),
            event("d", 5, 20),
        ];
        let grouped = group_by_day(&events);
        let shape: Vec<(u32, Vec<&str>)> = grouped
            .iter()
            .map(|(day, bucket)| {
                (
                    chrono::Datelike::day(day),
                    bucket.iter().map(|event| event.id.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(shape, vec![(5, vec!["d", "b"]), (3, vec!["c", "a"])]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_day(&[]).is_empty());
    }
}
