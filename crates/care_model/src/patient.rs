//! Patient demographic, allergy, and vital-sign display records.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Administrative sex as recorded by the host system.
pub enum Sex {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Other or non-binary.
    Other,
    /// Not recorded.
    #[default]
    Unknown,
}

impl Sex {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Allergy reaction severity, ordered from least to most severe.
pub enum AllergySeverity {
    /// Mild reaction.
    Mild,
    /// Moderate reaction.
    Moderate,
    /// Severe reaction.
    Severe,
    /// Anaphylaxis or similar.
    LifeThreatening,
}

impl AllergySeverity {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::LifeThreatening => "Life-threatening",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Recorded allergy or intolerance.
pub struct Allergy {
    /// Substance name.
    pub substance: String,
    /// Observed reaction, if documented.
    #[serde(default)]
    pub reaction: Option<String>,
    /// Reaction severity.
    pub severity: AllergySeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Vital-sign category.
pub enum VitalKind {
    /// Heart rate.
    HeartRate,
    /// Blood pressure.
    BloodPressure,
    /// Body temperature.
    Temperature,
    /// Respiratory rate.
    RespiratoryRate,
    /// Peripheral oxygen saturation.
    OxygenSaturation,
    /// Body weight.
    Weight,
}

impl VitalKind {
    /// Short clinical label.
    pub fn label(self) -> &'static str {
        match self {
            Self::HeartRate => "HR",
            Self::BloodPressure => "BP",
            Self::Temperature => "Temp",
            Self::RespiratoryRate => "RR",
            Self::OxygenSaturation => "SpO₂",
            Self::Weight => "Weight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Interpretation flag attached to a vital reading.
pub enum VitalFlag {
    /// Within reference range.
    #[default]
    Normal,
    /// Below reference range.
    Low,
    /// Above reference range.
    High,
    /// Requires immediate attention.
    Critical,
}

impl VitalFlag {
    /// Stable token used in `data-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Low => "low",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Single vital-sign reading as displayed.
pub struct Vital {
    /// Reading category.
    pub kind: VitalKind,
    /// Pre-formatted value (`"120/80"`, `"98.6"`).
    pub value: String,
    /// Unit suffix.
    pub unit: String,
    /// Capture time.
    #[serde(default)]
    pub recorded_at: Option<NaiveDateTime>,
    /// Interpretation flag.
    #[serde(default)]
    pub flag: VitalFlag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Patient header/profile record.
pub struct Patient {
    /// Host identifier.
    pub id: String,
    /// Medical record number. Treated as PHI.
    pub mrn: String,
    /// Given name.
    pub given_name: String,
    /// Family name.
    pub family_name: String,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Administrative sex.
    #[serde(default)]
    pub sex: Sex,
    /// ABO/Rh blood type.
    #[serde(default)]
    pub blood_type: Option<String>,
    /// Primary care provider.
    #[serde(default)]
    pub primary_provider: Option<String>,
    /// Contact phone. Treated as PHI.
    #[serde(default)]
    pub phone: Option<String>,
    /// Profile photo.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Recorded allergies.
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    /// Latest vitals.
    #[serde(default)]
    pub vitals: Vec<Vital>,
}

impl Patient {
    /// `Given Family` display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name.trim(), self.family_name.trim())
            .trim()
            .to_string()
    }

    /// Completed years of age on `today`, or `None` without a birth date or for future dates.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        if dob > today {
            return None;
        }
        let mut years = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    /// Initials derived from the display name.
    pub fn initials(&self) -> String {
        initials(&self.display_name())
    }

    /// Most severe recorded allergy.
    pub fn highest_allergy_severity(&self) -> Option<AllergySeverity> {
        self.allergies.iter().map(|allergy| allergy.severity).max()
    }

    /// Returns `true` when any vital is flagged critical.
    pub fn has_critical_vitals(&self) -> bool {
        self.vitals
            .iter()
            .any(|vital| vital.flag == VitalFlag::Critical)
    }
}

/// Up to two uppercase initials: first letter of the first and last words.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first = words.first().and_then(|word| word.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|word| word.chars().next())
    } else {
        None
    };
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn patient() -> Patient {
        Patient {
            id: "p-1".to_string(),
            mrn: "MRN-00412345".to_string(),
            given_name: "Ada".to_string(),
            family_name: "Okafor".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 6, 15),
            sex: Sex::Female,
            blood_type: Some("O+".to_string()),
            primary_provider: None,
            phone: None,
            photo_url: None,
            allergies: vec![
                Allergy {
                    substance: "Latex".to_string(),
                    reaction: None,
                    severity: AllergySeverity::Moderate,
                },
                Allergy {
                    substance: "Penicillin".to_string(),
                    reaction: Some("Anaphylaxis".to_string()),
                    severity: AllergySeverity::LifeThreatening,
                },
            ],
            vitals: Vec::new(),
        }
    }

    #[test]
    fn age_counts_completed_years() {
        let patient = patient();
        let before_birthday = NaiveDate::from_ymd_opt(2024, 6, 14).expect("date");
        let on_birthday = NaiveDate::from_ymd_opt(2024, 6, 15).expect("date");
        assert_eq!(patient.age_on(before_birthday), Some(43));
        assert_eq!(patient.age_on(on_birthday), Some(44));

        let before_birth = NaiveDate::from_ymd_opt(1979, 1, 1).expect("date");
        assert_eq!(patient.age_on(before_birth), None);
    }

    #[test]
    fn initials_use_first_and_last_words() {
        assert_eq!(initials("ada lovelace byron"), "AB");
        assert_eq!(initials("  Cher "), "C");
        assert_eq!(initials(""), "");
        assert_eq!(patient().initials(), "AO");
    }

    #[test]
    fn highest_allergy_severity_picks_most_severe() {
        assert_eq!(
            patient().highest_allergy_severity(),
            Some(AllergySeverity::LifeThreatening)
        );
    }

    #[test]
    fn patient_deserializes_with_optional_fields_missing() {
        let value = serde_json::json!({
            "id": "p-2",
            "mrn": "123",
            "given_name": "Lin",
            "family_name": "Wei"
        });
        let patient: Patient = serde_json::from_value(value).expect("deserialize");
        assert_eq!(patient.sex, Sex::Unknown);
        assert!(patient.allergies.is_empty());
        assert_eq!(patient.display_name(), "Lin Wei");
    }
}
