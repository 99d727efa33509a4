//! Prescription records with refill eligibility and expiry derivation.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default look-ahead window for the "expiring soon" badge.
pub const EXPIRING_SOON_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Prescription status as recorded by the host.
pub enum PrescriptionStatus {
    /// Awaiting signature or pharmacy review.
    Pending,
    /// Valid and fillable.
    Active,
    /// Past its expiry date.
    Expired,
    /// Voided.
    Cancelled,
}

impl PrescriptionStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Active, Self::Expired, Self::Cancelled];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Stable token used in `data-*` attributes and filter values.
    pub fn token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a [`PrescriptionStatus::token`] value.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.token() == token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Prescription as listed in the management panel.
pub struct Prescription {
    /// Host identifier.
    pub id: String,
    /// Drug name.
    pub medication_name: String,
    /// Dose and sig text.
    pub dosage: String,
    /// Dispense quantity.
    pub quantity: u32,
    /// Remaining refills.
    pub refills_remaining: u32,
    /// Recorded status.
    pub status: PrescriptionStatus,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Expiry date.
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    /// Prescribing clinician.
    pub prescriber: String,
    /// Dispensing pharmacy.
    #[serde(default)]
    pub pharmacy: Option<String>,
}

impl Prescription {
    /// Recorded status, with active prescriptions past `expires_on` reported as expired.
    pub fn effective_status(&self, today: NaiveDate) -> PrescriptionStatus {
        match (self.status, self.expires_on) {
            (PrescriptionStatus::Active, Some(expires)) if expires < today => {
                PrescriptionStatus::Expired
            }
            (status, _) => status,
        }
    }

    /// Active, unexpired, and with refills left.
    pub fn can_refill(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == PrescriptionStatus::Active && self.refills_remaining > 0
    }

    /// Active and expiring within `within_days` of `today` (inclusive). A window reaching past
    /// the representable date range covers every expiry date.
    pub fn is_expiring_soon(&self, today: NaiveDate, within_days: i64) -> bool {
        if self.effective_status(today) != PrescriptionStatus::Active {
            return false;
        }
        let horizon = Duration::try_days(within_days).and_then(|window| today.checked_add_signed(window));
        self.expires_on.is_some_and(|expires| match horizon {
            Some(horizon) => expires <= horizon,
            None => within_days >= 0,
        })
    }
}

/// Prescriptions whose effective status matches `status` (all when `None`), newest issue first.
pub fn filter_prescriptions(
    prescriptions: &[Prescription],
    status: Option<PrescriptionStatus>,
    today: NaiveDate,
) -> Vec<Prescription> {
    let mut matching: Vec<Prescription> = prescriptions
        .iter()
        .filter(|prescription| {
            status.map_or(true, |status| prescription.effective_status(today) == status)
        })
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.issued_on.cmp(&a.issued_on));
    matching
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).expect("date")
    }

    fn prescription(id: &str, issued: NaiveDate, expires: Option<NaiveDate>) -> Prescription {
        Prescription {
            id: id.to_string(),
            medication_name: "Atorvastatin".to_string(),
            dosage: "20 mg nightly".to_string(),
            quantity: 30,
            refills_remaining: 2,
            status: PrescriptionStatus::Active,
            issued_on: issued,
            expires_on: expires,
            prescriber: "Dr. Ito".to_string(),
            pharmacy: None,
        }
    }

    #[test]
    fn active_prescription_past_expiry_is_expired() {
        let rx = prescription("1", date(1, 1), Some(date(6, 1)));
        assert_eq!(rx.effective_status(date(6, 1)), PrescriptionStatus::Active);
        assert_eq!(rx.effective_status(date(6, 2)), PrescriptionStatus::Expired);
        assert!(rx.can_refill(date(5, 1)));
        assert!(!rx.can_refill(date(7, 1)));
    }

    #[test]
    fn refill_requires_remaining_refills() {
        let mut rx = prescription("1", date(1, 1), None);
        rx.refills_remaining = 0;
        assert!(!rx.can_refill(date(2, 1)));

        rx.refills_remaining = 1;
        rx.status = PrescriptionStatus::Cancelled;
        assert!(!rx.can_refill(date(2, 1)));
    }

    #[test]
    fn expiring_soon_is_bounded_by_window() {
        let rx = prescription("1", date(1, 1), Some(date(3, 31)));
        assert!(rx.is_expiring_soon(date(3, 1), EXPIRING_SOON_DAYS));
        assert!(!rx.is_expiring_soon(date(2, 1), EXPIRING_SOON_DAYS));
        assert!(!rx.is_expiring_soon(date(4, 1), EXPIRING_SOON_DAYS));
        assert!(!prescription("2", date(1, 1), None).is_expiring_soon(date(3, 1), 30));
    }

    #[test]
    fn out_of_range_windows_do_not_overflow() {
        let rx = prescription("1", date(1, 1), Some(date(12, 31)));
        assert!(rx.is_expiring_soon(date(3, 1), i64::MAX));
        assert!(!rx.is_expiring_soon(date(3, 1), i64::MIN));
        assert!(!prescription("2", date(1, 1), None).is_expiring_soon(date(3, 1), i64::MAX));
    }

    #[test]
    fn filter_uses_effective_status_and_sorts_newest_first() {
        let list = vec![
            prescription("old", date(1, 1), Some(date(2, 1))),
            prescription("new", date(3, 1), None),
            prescription("mid", date(2, 1), None),
        ];
        let today = date(4, 1);

        let active: Vec<String> =
            filter_prescriptions(&list, Some(PrescriptionStatus::Active), today)
                .into_iter()
                .map(|rx| rx.id)
                .collect();
        assert_eq!(active, vec!["new".to_string(), "mid".to_string()]);

        let expired = filter_prescriptions(&list, Some(PrescriptionStatus::Expired), today);
        assert_eq!(expired.len(), 1);
        assert_eq!(filter_prescriptions(&list, None, today).len(), 3);
    }
}
