//! Leptos component kit for clinical front-ends.
//!
//! The crate owns design tokens, the class-merging utility, a centralized icon API, keyboard
//! shortcut dispatch, and the atoms, molecules, organisms, and layout primitives built on them.
//! Every primitive emits the stable `data-care-*` DOM contract consumed by the host stylesheet.
//! Domain display records come from [`model`] and are only formatted, never mutated.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod class;
pub mod clipboard;
pub mod config;
pub mod confirm;
mod focus;
pub mod icon;
pub mod keyboard;
pub mod organisms;
pub mod primitives;
pub mod time;
pub mod timing;
pub mod tokens;

pub use care_model as model;

pub use calendar::{month_grid, CalendarCell, CalendarError, DateBounds};
pub use class::{ClassFragment, ClassList, ClassVariant};
pub use clipboard::{copy_text, ClipboardError};
pub use config::{use_ui_config, CareUiProvider, ConfigError, UiConfig};
pub use confirm::{use_confirmation, Confirmation, ConfirmationGate, ConfirmState, GateOutcome};
pub use icon::{resolve_icon, Icon, IconName, IconSize, NamedIcon};
pub use keyboard::{
    use_global_shortcut, KeyCombo, ShortcutAction, ShortcutGate, ShortcutMode, ShortcutTable,
};
pub use organisms::{
    AppointmentScheduler, BookingRequest, Footer, FooterLink, FooterLinkGroup, ImagingViewer,
    MedicationAction, MedicationManagement, MedicationTracker, PatientProfile,
    PrescriptionAction, PrescriptionManagement,
};
pub use primitives::{
    Alert, Avatar, AvatarSize, Badge, Breadcrumb, BreadcrumbItem, Button, ButtonSize,
    ButtonVariant, Card, Checkbox, Column, Command, CommandPalette, Container, ContainerWidth,
    CopyButton, DateTimePicker, Divider, Dropdown, DropdownOption, Elevation, EmptyState,
    FormField, Grid, Heading, HeadingLevel, IconButton, Kbd, Layout, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, MedicalScale, Presence, ProgressBar, Radio, RadioGroup,
    RadioOption, Rating, Row, Select, SelectOption, Slider, Spinner, Stack, SurfaceVariant,
    Switch, Text, TextArea, TextInput, TextRole, Timeline, Tone, Tooltip, TooltipPlacement,
};
pub use tokens::Theme;

/// Convenience imports for host applications composing the kit.
pub mod prelude {
    pub use crate::classes;
    pub use crate::{
        Alert, AppointmentScheduler, Avatar, AvatarSize, Badge, BookingRequest, Breadcrumb,
        BreadcrumbItem, Button, ButtonSize, ButtonVariant, Card, CareUiProvider, Checkbox,
        Column, Command, CommandPalette, Container, ContainerWidth, CopyButton, DateBounds,
        DateTimePicker, Divider, Dropdown, DropdownOption, Elevation, EmptyState, Footer,
        FooterLink, FooterLinkGroup, FormField, Grid, Heading, HeadingLevel, Icon, IconButton,
        IconName, IconSize, ImagingViewer, Kbd, Layout, LayoutAlign, LayoutGap, LayoutJustify,
        LayoutPadding, MedicalScale, MedicationAction, MedicationManagement, MedicationTracker,
        PatientProfile, PrescriptionAction, PrescriptionManagement, Presence, ProgressBar, Radio,
        RadioGroup, RadioOption, Rating, Row, Select, SelectOption, Slider, Spinner, Stack,
        SurfaceVariant, Switch, Text, TextArea, TextInput, TextRole, Theme, Timeline, Tone,
        Tooltip, TooltipPlacement, UiConfig,
    };
}
