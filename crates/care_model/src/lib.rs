//! Read-only clinical display models shared by the `care_ui` component kit.
//!
//! Host applications own and fetch these records; the kit only formats, filters, and displays
//! them. Everything here is DOM-free so view transforms (slot grids, adherence, masking, viewer
//! math) can be exercised on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appointment;
pub mod format;
pub mod imaging;
pub mod medication;
pub mod patient;
pub mod phi;
pub mod prescription;
pub mod timeline;

pub use appointment::{
    appointments_on, day_slots, providers, Appointment, AppointmentStatus, SlotWindow, TimeSlot,
};
pub use format::{
    format_date, format_date_or_raw, format_datetime, format_day, format_time, parse_date,
    parse_datetime, DateStyle, FormatError,
};
pub use imaging::{
    ImagingSeries, ImagingStudy, Modality, ViewerState, WindowPreset, MAX_ZOOM, MIN_ZOOM,
};
pub use medication::{
    adherence_percent, doses_on, filter_medications, status_counts, DoseEvent, DoseStatus,
    Medication, MedicationFilter, MedicationStatus, StatusCounts,
};
pub use patient::{initials, Allergy, AllergySeverity, Patient, Sex, Vital, VitalFlag, VitalKind};
pub use phi::{mask_identifier, mask_name};
pub use prescription::{
    filter_prescriptions, Prescription, PrescriptionStatus, EXPIRING_SOON_DAYS,
};
pub use timeline::{group_by_day, Severity, TimelineEvent};
