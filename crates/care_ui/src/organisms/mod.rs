//! Healthcare-domain panels composed from the primitives.
//!
//! Organisms receive read-only records from the host, keep only view state (filters, reveal
//! toggles, viewer transforms), and report every clinical action through callbacks.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::classes;
use crate::config::use_ui_config;
use crate::icon::{Icon, IconName, IconSize};
use crate::primitives::*;
use crate::time::today;

mod footer;
mod imaging;
mod medication;
mod patient;
mod prescription;
mod scheduler;

pub use footer::{copyright_line, Footer, FooterLink, FooterLinkGroup};
pub use imaging::{apply_viewer_action, ImagingViewer};
pub use medication::{
    medication_actions, MedicationAction, MedicationManagement, MedicationTracker,
};
pub use patient::PatientProfile;
pub use prescription::{prescription_actions, PrescriptionAction, PrescriptionManagement};
pub use scheduler::{AppointmentScheduler, BookingRequest};
