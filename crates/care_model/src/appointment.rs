//! Appointment records and day slot-grid generation for the scheduler.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Appointment workflow status.
pub enum AppointmentStatus {
    /// Booked.
    #[default]
    Scheduled,
    /// Patient has arrived.
    CheckedIn,
    /// Visit finished.
    Completed,
    /// Cancelled; frees the slot.
    Cancelled,
    /// Patient did not attend.
    NoShow,
}

impl AppointmentStatus {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::CheckedIn => "Checked in",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No show",
        }
    }

    /// Stable token used in `data-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::CheckedIn => "checked-in",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no-show",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Booked visit.
pub struct Appointment {
    /// Host identifier.
    pub id: String,
    /// Patient display name.
    pub patient_name: String,
    /// Clinician name.
    pub provider: String,
    /// Local start time.
    pub start: NaiveDateTime,
    /// Visit length.
    pub duration_minutes: u32,
    /// Visit reason.
    #[serde(default)]
    pub reason: String,
    /// Room or telehealth link label.
    #[serde(default)]
    pub location: Option<String>,
    /// Workflow status.
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Local end time.
    pub fn end(&self) -> NaiveDateTime {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Cancelled visits do not occupy their slot.
    pub fn blocks_time(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }

    /// Half-open interval overlap with `[start, end)`.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Bookable hours and slot length for a day.
pub struct SlotWindow {
    /// First slot start.
    pub opening: NaiveTime,
    /// No slot may end after this time.
    pub closing: NaiveTime,
    /// Slot length.
    pub interval_minutes: u32,
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self {
            opening: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            closing: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            interval_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Bookable interval in the day grid.
pub struct TimeSlot {
    /// Slot start.
    pub start: NaiveDateTime,
    /// Slot end.
    pub end: NaiveDateTime,
    /// `false` when an existing appointment overlaps the slot.
    pub available: bool,
}

/// Builds the slot grid for `date`, marking slots blocked by overlapping appointments.
///
/// When `provider` is set, only that provider's appointments block slots. A zero interval or an
/// inverted window yields no slots.
pub fn day_slots(
    date: NaiveDate,
    window: SlotWindow,
    appointments: &[Appointment],
    provider: Option<&str>,
) -> Vec<TimeSlot> {
    if window.interval_minutes == 0 || window.closing <= window.opening {
        return Vec::new();
    }
    let step = Duration::minutes(i64::from(window.interval_minutes));
    let closing = date.and_time(window.closing);
    let blocking: Vec<&Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.blocks_time())
        .filter(|appointment| provider.map_or(true, |provider| appointment.provider == provider))
        .collect();

    let mut slots = Vec::new();
    let mut start = date.and_time(window.opening);
    while start + step <= closing {
        let end = start + step;
        let available = !blocking
            .iter()
            .any(|appointment| appointment.overlaps(start, end));
        slots.push(TimeSlot {
            start,
            end,
            available,
        });
        start = end;
    }
    slots
}

/// Appointments starting on `date`, ordered by start time.
pub fn appointments_on(appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
    let mut day: Vec<Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.start.date() == date)
        .cloned()
        .collect();
    day.sort_by_key(|appointment| appointment.start);
    day
}

/// Distinct provider names, sorted.
pub fn providers(appointments: &[Appointment]) -> Vec<String> {
    let mut names: Vec<String> = appointments
        .iter()
        .map(|appointment| appointment.provider.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 2).expect("date")
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).expect("datetime")
    }

    fn appointment(provider: &str, start: NaiveDateTime, minutes: u32) -> Appointment {
        Appointment {
            id: format!("{provider}-{start}"),
            patient_name: "Sam Rivera".to_string(),
            provider: provider.to_string(),
            start,
            duration_minutes: minutes,
            reason: "Follow-up".to_string(),
            location: None,
            status: AppointmentStatus::Scheduled,
        }
    }

    #[test]
    fn default_window_yields_eighteen_half_hour_slots() {
        let slots = day_slots(day(), SlotWindow::default(), &[], None);
        assert_eq!(slots.len(), 18);
        assert_eq!(slots[0].start, at(8, 0));
        assert_eq!(slots[17].end, at(17, 0));
        assert!(slots.iter().all(|slot| slot.available));
    }

    #[test]
    fn overlapping_appointments_block_every_touched_slot() {
        let booked = vec![appointment("Dr. Patel", at(9, 15), 45)];
        let slots = day_slots(day(), SlotWindow::default(), &booked, None);
        let blocked: Vec<NaiveDateTime> = slots
            .iter()
            .filter(|slot| !slot.available)
            .map(|slot| slot.start)
            .collect();
        assert_eq!(blocked, vec![at(9, 0), at(9, 30)]);
    }

    #[test]
    fn cancelled_and_other_provider_appointments_do_not_block() {
        let mut cancelled = appointment("Dr. Patel", at(10, 0), 30);
        cancelled.status = AppointmentStatus::Cancelled;
        let other = appointment("Dr. Moreau", at(11, 0), 30);
        let booked = vec![cancelled, other];

        let for_patel = day_slots(day(), SlotWindow::default(), &booked, Some("Dr. Patel"));
        assert!(for_patel.iter().all(|slot| slot.available));

        let for_all = day_slots(day(), SlotWindow::default(), &booked, None);
        assert_eq!(for_all.iter().filter(|slot| !slot.available).count(), 1);
    }

    #[test]
    fn degenerate_windows_produce_no_slots() {
        let zero = SlotWindow {
            interval_minutes: 0,
            ..SlotWindow::default()
        };
        assert!(day_slots(day(), zero, &[], None).is_empty());

        let inverted = SlotWindow {
            opening: NaiveTime::from_hms_opt(17, 0, 0).expect("time"),
            closing: NaiveTime::from_hms_opt(8, 0, 0).expect("time"),
            interval_minutes: 30,
        };
        assert!(day_slots(day(), inverted, &[], None).is_empty());
    }

    #[test]
    fn trailing_partial_slot_is_dropped() {
        let window = SlotWindow {
            opening: NaiveTime::from_hms_opt(8, 0, 0).expect("time"),
            closing: NaiveTime::from_hms_opt(9, 10, 0).expect("time"),
            interval_minutes: 30,
        };
        assert_eq!(day_slots(day(), window, &[], None).len(), 2);
    }

    #[test]
    fn appointments_on_and_providers_are_sorted() {
        let booked = vec![
            appointment("Dr. Patel", at(14, 0), 30),
            appointment("Dr. Moreau", at(9, 0), 30),
            appointment("Dr. Patel", at(8, 0), 30),
        ];
        let starts: Vec<NaiveDateTime> = appointments_on(&booked, day())
            .iter()
            .map(|appointment| appointment.start)
            .collect();
        assert_eq!(starts, vec![at(8, 0), at(9, 0), at(14, 0)]);
        assert_eq!(
            providers(&booked),
            vec!["Dr. Moreau".to_string(), "Dr. Patel".to_string()]
        );
    }
}
