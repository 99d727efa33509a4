//! Atoms, molecules, and layout primitives.
//!
//! Every primitive emits the stable `data-care-*` DOM contract (`data-care-primitive`,
//! `data-care-kind`, variant and state tokens) next to a base class and the utility classes of
//! its variants. Hosts may append layout-only classes through `layout_class`.

use std::sync::atomic::{AtomicU32, Ordering};

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::class::ClassVariant;
use crate::classes;
use crate::config::use_ui_config;
use crate::icon::{Icon, IconName, IconSize};

mod choice;
mod controls;
mod data_display;
mod feedback;
mod forms;
mod layout;
mod navigation;

pub use choice::{
    pain_descriptor, slider_display, slider_percent, MedicalScale, Radio, RadioGroup,
    RadioOption, Rating, Slider,
};
pub use controls::{
    Button, Checkbox, CopyButton, IconButton, Select, SelectOption, Switch, TextArea, TextInput,
};
pub use data_display::{
    Avatar, AvatarSize, Badge, Card, Divider, EmptyState, Heading, HeadingLevel, Kbd, Presence,
    Text, Timeline,
};
pub use feedback::{progress_percent, Alert, ProgressBar, Spinner, Tooltip, TooltipPlacement};
pub use forms::{DateTimePicker, FormField};
pub use layout::{Column, Container, ContainerWidth, Grid, Layout, Row, Stack};
pub use navigation::{
    collapse_breadcrumbs, filter_commands, move_active, Breadcrumb, BreadcrumbEntry,
    BreadcrumbItem, Command, CommandPalette, Dropdown, DropdownOption,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic surface variants for cards and panels.
pub enum SurfaceVariant {
    /// Primary surface.
    #[default]
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Outlined surface without fill.
    Outline,
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Outline => "outline",
        }
    }
}

impl ClassVariant for SurfaceVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Standard => "bg-[var(--care-color-surface)] border border-[var(--care-color-border)]",
            Self::Muted => "bg-[var(--care-color-surface-muted)]",
            Self::Outline => "bg-transparent border border-[var(--care-color-border)]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic elevation levels.
pub enum Elevation {
    /// Flat surface.
    Flat,
    /// Raised surface.
    #[default]
    Raised,
    /// Overlay surface.
    Overlay,
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

impl ClassVariant for Elevation {
    fn classes(self) -> &'static str {
        match self {
            Self::Flat => "shadow-none",
            Self::Raised => "shadow-[var(--care-shadow-raised)]",
            Self::Overlay => "shadow-[var(--care-shadow-overlay)]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button variants.
pub enum ButtonVariant {
    /// Primary emphasized action.
    #[default]
    Primary,
    /// Secondary action.
    Secondary,
    /// Outlined action.
    Outline,
    /// Low-emphasis action.
    Ghost,
    /// Destructive action.
    Danger,
    /// Positive confirmation action.
    Success,
    /// Inline text link.
    Link,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Link => "link",
        }
    }
}

impl ClassVariant for ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-[var(--care-color-primary)] text-white hover:bg-[var(--care-color-primary-strong)]",
            Self::Secondary => "bg-[var(--care-color-secondary)] text-white",
            Self::Outline => "border border-[var(--care-color-border)] bg-transparent",
            Self::Ghost => "bg-transparent hover:bg-[var(--care-color-surface-muted)]",
            Self::Danger => "bg-[var(--care-color-danger)] text-white",
            Self::Success => "bg-[var(--care-color-success)] text-white",
            Self::Link => "bg-transparent underline text-[var(--care-color-primary)]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Extra-large touch target for gloved or bedside use.
    Xl,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Medical-device mode never renders below the large target size.
    pub(crate) fn for_medical_device(self, medical_device: bool) -> Self {
        match self {
            Self::Sm | Self::Md if medical_device => Self::Lg,
            size => size,
        }
    }
}

impl ClassVariant for ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-sm",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
            Self::Xl => "h-14 px-8 text-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic tone shared by badges, alerts, and text.
pub enum Tone {
    /// Default text color.
    #[default]
    Neutral,
    /// De-emphasized.
    Muted,
    /// Brand color.
    Primary,
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Error or destructive.
    Danger,
    /// Clinically critical.
    Critical,
}

impl Tone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Muted => "muted",
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Critical => "critical",
        }
    }

    /// Foreground-only classes for inline text.
    pub(crate) fn text_classes(self) -> &'static str {
        match self {
            Self::Neutral => "text-[var(--care-color-text)]",
            Self::Muted => "text-[var(--care-color-text-muted)]",
            Self::Primary => "text-[var(--care-color-primary)]",
            Self::Info => "text-[var(--care-color-info)]",
            Self::Success => "text-[var(--care-color-success)]",
            Self::Warning => "text-[var(--care-color-warning)]",
            Self::Danger => "text-[var(--care-color-danger)]",
            Self::Critical => "text-[var(--care-color-critical)] font-semibold",
        }
    }
}

impl ClassVariant for Tone {
    fn classes(self) -> &'static str {
        match self {
            Self::Neutral => "bg-[var(--care-color-surface-muted)] text-[var(--care-color-text)]",
            Self::Muted => "bg-[var(--care-color-surface-muted)] text-[var(--care-color-text-muted)]",
            Self::Primary => "bg-[var(--care-color-primary)]/10 text-[var(--care-color-primary)]",
            Self::Info => "bg-[var(--care-color-info)]/10 text-[var(--care-color-info)]",
            Self::Success => "bg-[var(--care-color-success)]/10 text-[var(--care-color-success)]",
            Self::Warning => "bg-[var(--care-color-warning)]/10 text-[var(--care-color-warning)]",
            Self::Danger => "bg-[var(--care-color-danger)]/10 text-[var(--care-color-danger)]",
            Self::Critical => "bg-[var(--care-color-critical)] text-white font-semibold",
        }
    }
}

impl From<care_model::Severity> for Tone {
    fn from(severity: care_model::Severity) -> Self {
        match severity {
            care_model::Severity::Info => Self::Info,
            care_model::Severity::Success => Self::Success,
            care_model::Severity::Warning => Self::Warning,
            care_model::Severity::Critical => Self::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Monospace/code text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Code => "code",
        }
    }
}

impl ClassVariant for TextRole {
    fn classes(self) -> &'static str {
        match self {
            Self::Body => "text-base",
            Self::Label => "text-sm font-medium",
            Self::Caption => "text-xs",
            Self::Code => "font-mono text-sm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl ClassVariant for LayoutGap {
    fn classes(self) -> &'static str {
        match self {
            Self::None => "gap-0",
            Self::Sm => "gap-2",
            Self::Md => "gap-4",
            Self::Lg => "gap-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    #[default]
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl ClassVariant for LayoutPadding {
    fn classes(self) -> &'static str {
        match self {
            Self::None => "p-0",
            Self::Sm => "p-2",
            Self::Md => "p-4",
            Self::Lg => "p-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Cross-axis alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

impl ClassVariant for LayoutAlign {
    fn classes(self) -> &'static str {
        match self {
            Self::Stretch => "items-stretch",
            Self::Start => "items-start",
            Self::Center => "items-center",
            Self::End => "items-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Main-axis justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

impl ClassVariant for LayoutJustify {
    fn classes(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::Between => "justify-between",
            Self::End => "justify-end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

static NEXT_DOM_ID: AtomicU32 = AtomicU32::new(1);

/// Unique element id for `aria-describedby` / `aria-labelledby` wiring.
pub(crate) fn next_dom_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_DOM_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("care-card", None), "care-card");
        assert_eq!(merge_layout_class("care-card", Some("")), "care-card");
        assert_eq!(
            merge_layout_class("care-card", Some("col-span-2")),
            "care-card col-span-2"
        );
    }

    #[test]
    fn medical_device_mode_raises_small_buttons() {
        assert_eq!(ButtonSize::Sm.for_medical_device(true), ButtonSize::Lg);
        assert_eq!(ButtonSize::Xl.for_medical_device(true), ButtonSize::Xl);
        assert_eq!(ButtonSize::Sm.for_medical_device(false), ButtonSize::Sm);
    }

    #[test]
    fn dom_ids_are_unique_per_call() {
        let first = next_dom_id("care-field");
        let second = next_dom_id("care-field");
        assert!(first.starts_with("care-field-"));
        assert_ne!(first, second);
    }

    #[test]
    fn severity_maps_onto_tones() {
        assert_eq!(Tone::from(care_model::Severity::Critical), Tone::Critical);
        assert_eq!(Tone::from(care_model::Severity::Info).token(), "info");
    }
}
