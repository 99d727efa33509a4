//! Centralized icon set and `<svg>` rendering.

use leptos::*;

use crate::class::ClassVariant;
use crate::classes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyphs available to every component.
pub enum IconName {
    /// Check mark.
    Check,
    /// Close / dismiss.
    Close,
    /// Chevron pointing left.
    ChevronLeft,
    /// Chevron pointing right.
    ChevronRight,
    /// Chevron pointing down.
    ChevronDown,
    /// Chevron pointing up.
    ChevronUp,
    /// Plus.
    Plus,
    /// Minus.
    Minus,
    /// Magnifier.
    Search,
    /// Calendar page.
    Calendar,
    /// Clock face.
    Clock,
    /// Person.
    User,
    /// Heart with pulse trace.
    HeartPulse,
    /// Capsule.
    Pill,
    /// Prescription clipboard.
    Prescription,
    /// Warning triangle.
    Alert,
    /// Information circle.
    Info,
    /// Copy sheets.
    Copy,
    /// Rating star.
    Star,
    /// Phone handset.
    Phone,
    /// Envelope.
    Mail,
    /// House.
    Home,
    /// Hamburger menu.
    Menu,
    /// Zoom in.
    ZoomIn,
    /// Zoom out.
    ZoomOut,
    /// Rotate clockwise.
    Rotate,
    /// Half-filled contrast circle.
    Contrast,
    /// Picture frame.
    Image,
    /// Eye (reveal).
    Eye,
    /// Struck eye (conceal).
    EyeOff,
    /// Command key.
    Command,
    /// Medical cross.
    Emergency,
    /// External link arrow.
    ExternalLink,
    /// Pause bars.
    Pause,
    /// Play triangle.
    Play,
    /// Stop square.
    Stop,
    /// Fallback glyph for unknown names.
    Placeholder,
}

const ICON_NAMES: [(IconName, &str); 37] = [
    (IconName::Check, "check"),
    (IconName::Close, "close"),
    (IconName::ChevronLeft, "chevron-left"),
    (IconName::ChevronRight, "chevron-right"),
    (IconName::ChevronDown, "chevron-down"),
    (IconName::ChevronUp, "chevron-up"),
    (IconName::Plus, "plus"),
    (IconName::Minus, "minus"),
    (IconName::Search, "search"),
    (IconName::Calendar, "calendar"),
    (IconName::Clock, "clock"),
    (IconName::User, "user"),
    (IconName::HeartPulse, "heart-pulse"),
    (IconName::Pill, "pill"),
    (IconName::Prescription, "prescription"),
    (IconName::Alert, "alert"),
    (IconName::Info, "info"),
    (IconName::Copy, "copy"),
    (IconName::Star, "star"),
    (IconName::Phone, "phone"),
    (IconName::Mail, "mail"),
    (IconName::Home, "home"),
    (IconName::Menu, "menu"),
    (IconName::ZoomIn, "zoom-in"),
    (IconName::ZoomOut, "zoom-out"),
    (IconName::Rotate, "rotate"),
    (IconName::Contrast, "contrast"),
    (IconName::Image, "image"),
    (IconName::Eye, "eye"),
    (IconName::EyeOff, "eye-off"),
    (IconName::Command, "command"),
    (IconName::Emergency, "emergency"),
    (IconName::ExternalLink, "external-link"),
    (IconName::Pause, "pause"),
    (IconName::Play, "play"),
    (IconName::Stop, "stop"),
    (IconName::Placeholder, "placeholder"),
];

impl IconName {
    /// Looks up a glyph by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ICON_NAMES
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
            .map(|(icon, _)| *icon)
    }

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        ICON_NAMES
            .iter()
            .find(|(icon, _)| *icon == self)
            .map_or("placeholder", |(_, name)| *name)
    }

    /// SVG path data on a 24x24 stroke grid.
    pub fn path(self) -> &'static str {
        match self {
            Self::Check => "M5 12l5 5L20 7",
            Self::Close => "M6 6l12 12M18 6L6 18",
            Self::ChevronLeft => "M15 18l-6-6 6-6",
            Self::ChevronRight => "M9 6l6 6-6 6",
            Self::ChevronDown => "M6 9l6 6 6-6",
            Self::ChevronUp => "M18 15l-6-6-6 6",
            Self::Plus => "M12 5v14M5 12h14",
            Self::Minus => "M5 12h14",
            Self::Search => "M11 4a7 7 0 1 0 0 14a7 7 0 1 0 0-14zM21 21l-5-5",
            Self::Calendar => "M4 6h16v14H4zM4 10h16M8 3v4M16 3v4",
            Self::Clock => "M12 3a9 9 0 1 0 0 18a9 9 0 1 0 0-18zM12 7v5l3 3",
            Self::User => "M12 4a4 4 0 1 0 0 8a4 4 0 1 0 0-8zM4 21c0-4 4-6 8-6s8 2 8 6",
            Self::HeartPulse => {
                "M12 20s-7-4.5-7-10a4 4 0 0 1 7-2.5A4 4 0 0 1 19 10c0 5.5-7 10-7 10zM3 12h4l2-3 3 6 2-3h7"
            }
            Self::Pill => "M10.5 3.5a5 5 0 0 1 7 7l-7 7a5 5 0 0 1-7-7zM7 10l7 7",
            Self::Prescription => "M9 4h6v3H9zM7 5H5v16h14V5h-2M9 12h6M9 16h4",
            Self::Alert => "M12 3L2 21h20zM12 10v5M12 18v.01",
            Self::Info => "M12 3a9 9 0 1 0 0 18a9 9 0 1 0 0-18zM12 11v6M12 7v.01",
            Self::Copy => "M8 8h12v12H8zM4 16V4h12",
            Self::Star => {
                "M12 3l2.8 5.7 6.2.9-4.5 4.4 1.1 6.2L12 17.3 6.4 20.2l1.1-6.2L3 9.6l6.2-.9z"
            }
            Self::Phone => {
                "M5 3h4l2 5-3 2a11 11 0 0 0 6 6l2-3 5 2v4a2 2 0 0 1-2 2A17 17 0 0 1 3 5a2 2 0 0 1 2-2z"
            }
            Self::Mail => "M3 5h18v14H3zM3 6l9 7 9-7",
            Self::Home => "M3 11l9-8 9 8M5 10v10h14V10",
            Self::Menu => "M4 6h16M4 12h16M4 18h16",
            Self::ZoomIn => "M11 4a7 7 0 1 0 0 14a7 7 0 1 0 0-14zM21 21l-5-5M11 8v6M8 11h6",
            Self::ZoomOut => "M11 4a7 7 0 1 0 0 14a7 7 0 1 0 0-14zM21 21l-5-5M8 11h6",
            Self::Rotate => "M20 11a8 8 0 1 0-2.3 5.7M20 4v7h-7",
            Self::Contrast => "M12 3a9 9 0 1 0 0 18a9 9 0 1 0 0-18zM12 3v18",
            Self::Image => "M3 5h18v14H3zM3 16l5-5 4 4 3-3 6 6M15 9v.01",
            Self::Eye => "M2 12s4-7 10-7 10 7 10 7-4 7-10 7S2 12 2 12zM12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            Self::EyeOff => {
                "M3 3l18 18M10.6 6.1A10 10 0 0 1 12 6c6 0 10 6 10 6a17 17 0 0 1-3 3.5M6.6 6.6C3.8 8.4 2 12 2 12s4 7 10 7a9 9 0 0 0 4.4-1.1"
            }
            Self::Command => {
                "M9 6a3 3 0 1 0-3 3h12a3 3 0 1 0-3-3v12a3 3 0 1 0 3-3H6a3 3 0 1 0 3 3z"
            }
            Self::Emergency => "M9 3h6v6h6v6h-6v6H9v-6H3V9h6z",
            Self::ExternalLink => "M14 4h6v6M20 4l-9 9M18 14v6H4V6h6",
            Self::Pause => "M8 5v14M16 5v14",
            Self::Play => "M7 4l13 8-13 8z",
            Self::Stop => "M6 6h12v12H6z",
            Self::Placeholder => {
                "M4 4h16v16H4zM9.5 9.5a2.5 2.5 0 1 1 3.5 2.3c-.6.3-1 .8-1 1.5V14M12 17v.01"
            }
        }
    }
}

/// Resolves a glyph name, falling back to [`IconName::Placeholder`] with a logged warning.
pub fn resolve_icon(name: &str) -> IconName {
    IconName::from_name(name).unwrap_or_else(|| {
        logging::warn!("unknown icon `{name}`, rendering placeholder glyph");
        IconName::Placeholder
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Md,
    /// 24px.
    Lg,
    /// 32px.
    Xl,
}

impl IconSize {
    /// Rendered edge length in CSS pixels.
    pub fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
        }
    }
}

impl ClassVariant for IconSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Xs => "w-3 h-3",
            Self::Sm => "w-4 h-4",
            Self::Md => "w-5 h-5",
            Self::Lg => "w-6 h-6",
            Self::Xl => "w-8 h-8",
        }
    }
}

fn icon_view(
    icon: IconName,
    size: IconSize,
    label: Option<String>,
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let decorative = label.is_none();
    let class = classes!["care-icon shrink-0", size.classes(), layout_class];
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width=size.px()
            height=size.px()
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role=(!decorative).then_some("img")
            aria-hidden=decorative.then_some("true")
            aria-label=label
            data-care-icon=icon.name()
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[component]
/// Renders a glyph from the shared icon set.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Accessible label. Icons without a label are hidden from assistive technology.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    icon_view(icon, size, label, layout_class)
}

#[component]
/// Renders a glyph by name, for hosts that configure icons from data.
pub fn NamedIcon(
    #[prop(into)] name: String,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    icon_view(resolve_icon(&name), size, label, layout_class)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_icon_name_round_trips() {
        for (icon, name) in ICON_NAMES {
            assert_eq!(icon.name(), name);
            assert_eq!(IconName::from_name(name), Some(icon));
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(IconName::from_name(" Heart-Pulse "), Some(IconName::HeartPulse));
        assert_eq!(IconName::from_name("unicorn"), None);
    }

    #[test]
    fn unknown_names_resolve_to_placeholder() {
        assert_eq!(resolve_icon("unicorn"), IconName::Placeholder);
        assert_eq!(resolve_icon("pill"), IconName::Pill);
    }
}
