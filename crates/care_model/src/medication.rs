//! Medication list records, list filtering, and dose adherence.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Lifecycle status of a medication order.
pub enum MedicationStatus {
    /// Currently taken.
    Active,
    /// Temporarily held.
    Paused,
    /// Stopped before completion.
    Discontinued,
    /// Course finished.
    Completed,
}

impl MedicationStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Paused,
        Self::Discontinued,
        Self::Completed,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Discontinued => "Discontinued",
            Self::Completed => "Completed",
        }
    }

    /// Stable token used in `data-*` attributes and filter values.
    pub fn token(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Discontinued => "discontinued",
            Self::Completed => "completed",
        }
    }

    /// Parses a [`MedicationStatus::token`] value.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.token() == token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Medication as shown in list and tracker surfaces.
pub struct Medication {
    /// Host identifier.
    pub id: String,
    /// Drug name.
    pub name: String,
    /// Dose text (`"10 mg"`).
    pub dosage: String,
    /// Route (`"oral"`, `"IV"`).
    #[serde(default)]
    pub route: String,
    /// Frequency text (`"twice daily"`).
    pub frequency: String,
    /// Order status.
    pub status: MedicationStatus,
    /// First dose date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Planned or actual stop date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Ordering clinician.
    #[serde(default)]
    pub prescriber: Option<String>,
    /// Patient instructions.
    #[serde(default)]
    pub instructions: Option<String>,
    /// Daily administration times.
    #[serde(default)]
    pub schedule: Vec<NaiveTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// List filter for medication surfaces.
pub struct MedicationFilter {
    /// Case-insensitive search over name, dosage, and prescriber.
    pub query: String,
    /// Restrict to a single status.
    pub status: Option<MedicationStatus>,
}

impl MedicationFilter {
    /// Returns `true` when `medication` passes the filter.
    pub fn matches(&self, medication: &Medication) -> bool {
        if self
            .status
            .is_some_and(|status| status != medication.status)
        {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            Some(medication.name.as_str()),
            Some(medication.dosage.as_str()),
            medication.prescriber.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Medications passing `filter`, in input order.
pub fn filter_medications(medications: &[Medication], filter: &MedicationFilter) -> Vec<Medication> {
    medications
        .iter()
        .filter(|medication| filter.matches(medication))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-status medication totals.
pub struct StatusCounts {
    /// Active medications.
    pub active: usize,
    /// Paused medications.
    pub paused: usize,
    /// Discontinued medications.
    pub discontinued: usize,
    /// Completed medications.
    pub completed: usize,
}

impl StatusCounts {
    /// Count for a single status.
    pub fn get(&self, status: MedicationStatus) -> usize {
        match status {
            MedicationStatus::Active => self.active,
            MedicationStatus::Paused => self.paused,
            MedicationStatus::Discontinued => self.discontinued,
            MedicationStatus::Completed => self.completed,
        }
    }
}

/// Tallies medications by status.
pub fn status_counts(medications: &[Medication]) -> StatusCounts {
    medications
        .iter()
        .fold(StatusCounts::default(), |mut counts, medication| {
            match medication.status {
                MedicationStatus::Active => counts.active += 1,
                MedicationStatus::Paused => counts.paused += 1,
                MedicationStatus::Discontinued => counts.discontinued += 1,
                MedicationStatus::Completed => counts.completed += 1,
            }
            counts
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Outcome of a scheduled dose.
pub enum DoseStatus {
    /// Not yet due or not yet recorded.
    #[default]
    Scheduled,
    /// Administered.
    Taken,
    /// Not administered.
    Missed,
    /// Intentionally withheld.
    Skipped,
}

impl DoseStatus {
    /// Stable token used in `data-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Taken => "taken",
            Self::Missed => "missed",
            Self::Skipped => "skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Single scheduled administration of a medication.
pub struct DoseEvent {
    /// Medication this dose belongs to.
    pub medication_id: String,
    /// Planned administration time.
    pub scheduled_at: NaiveDateTime,
    /// Recorded outcome.
    #[serde(default)]
    pub status: DoseStatus,
    /// Actual administration time, when taken.
    #[serde(default)]
    pub taken_at: Option<NaiveDateTime>,
}

/// Doses scheduled on `date`, ordered by time.
pub fn doses_on(events: &[DoseEvent], date: NaiveDate) -> Vec<DoseEvent> {
    let mut doses: Vec<DoseEvent> = events
        .iter()
        .filter(|event| event.scheduled_at.date() == date)
        .cloned()
        .collect();
    doses.sort_by_key(|event| event.scheduled_at);
    doses
}

/// Percent of resolved doses that were taken, rounded. `None` when nothing has resolved yet.
pub fn adherence_percent(events: &[DoseEvent]) -> Option<u8> {
    let (taken, resolved) = events
        .iter()
        .fold((0usize, 0usize), |(taken, resolved), event| match event.status {
            DoseStatus::Scheduled => (taken, resolved),
            DoseStatus::Taken => (taken + 1, resolved + 1),
            DoseStatus::Missed | DoseStatus::Skipped => (taken, resolved + 1),
        });
    if resolved == 0 {
        return None;
    }
    let percent = (taken as f64 / resolved as f64 * 100.0).round();
    Some(percent.clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn medication(id: &str, name: &str, status: MedicationStatus) -> Medication {
        Medication {
            id: id.to_string(),
            name: name.to_string(),
            dosage: "10 mg".to_string(),
            route: "oral".to_string(),
            frequency: "daily".to_string(),
            status,
            start_date: None,
            end_date: None,
            prescriber: Some("Dr. Chen".to_string()),
            instructions: None,
            schedule: Vec::new(),
        }
    }

    fn dose(hour: u32, status: DoseStatus) -> DoseEvent {
        DoseEvent {
            medication_id: "m-1".to_string(),
            scheduled_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|date| date.and_hms_opt(hour, 0, 0))
                .expect("datetime"),
            status,
            taken_at: None,
        }
    }

    #[test]
    fn filter_combines_status_and_case_insensitive_query() {
        let meds = vec![
            medication("1", "Lisinopril", MedicationStatus::Active),
            medication("2", "Metformin", MedicationStatus::Paused),
            medication("3", "Lipitor", MedicationStatus::Active),
        ];

        let filter = MedicationFilter {
            query: "LI".to_string(),
            status: Some(MedicationStatus::Active),
        };
        let ids: Vec<String> = filter_medications(&meds, &filter)
            .into_iter()
            .map(|med| med.id)
            .collect();
        assert_eq!(ids, vec!["1".to_string(), "3".to_string()]);

        let by_prescriber = MedicationFilter {
            query: "chen".to_string(),
            status: None,
        };
        assert_eq!(filter_medications(&meds, &by_prescriber).len(), 3);
        assert_eq!(
            filter_medications(&meds, &MedicationFilter::default()).len(),
            3
        );
    }

    #[test]
    fn status_counts_tally_each_bucket() {
        let meds = vec![
            medication("1", "A", MedicationStatus::Active),
            medication("2", "B", MedicationStatus::Active),
            medication("3", "C", MedicationStatus::Discontinued),
        ];
        let counts = status_counts(&meds);
        assert_eq!(counts.get(MedicationStatus::Active), 2);
        assert_eq!(counts.get(MedicationStatus::Discontinued), 1);
        assert_eq!(counts.get(MedicationStatus::Paused), 0);
    }

    #[test]
    fn adherence_ignores_unresolved_doses() {
        assert_eq!(adherence_percent(&[]), None);
        assert_eq!(adherence_percent(&[dose(8, DoseStatus::Scheduled)]), None);
        let events = vec![
            dose(8, DoseStatus::Taken),
            dose(12, DoseStatus::Missed),
            dose(16, DoseStatus::Taken),
            dose(20, DoseStatus::Scheduled),
        ];
        assert_eq!(adherence_percent(&events), Some(67));
    }

    #[test]
    fn doses_on_sorts_by_time_within_day() {
        let events = vec![dose(20, DoseStatus::Scheduled), dose(8, DoseStatus::Taken)];
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).expect("date");
        let hours: Vec<String> = doses_on(&events, day)
            .iter()
            .map(|event| event.scheduled_at.format("%H").to_string())
            .collect();
        assert_eq!(hours, vec!["08".to_string(), "20".to_string()]);

        let other_day = NaiveDate::from_ymd_opt(2024, 5, 2).expect("date");
        assert!(doses_on(&events, other_day).is_empty());
    }

    #[test]
    fn status_tokens_round_trip() {
        for status in MedicationStatus::ALL {
            assert_eq!(MedicationStatus::from_token(status.token()), Some(status));
        }
        assert_eq!(MedicationStatus::from_token("unknown"), None);
    }
}
