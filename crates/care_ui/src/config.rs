//! Kit-wide configuration and its Leptos context provider.
//!
//! Hosts mount [`CareUiProvider`] once near the root. Components read the active
//! [`UiConfig`] through [`use_ui_config`], which falls back to defaults when no provider is
//! mounted so every component also works standalone.

use std::time::Duration;

use care_model::DateStyle;
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keyboard::ShortcutMode;
use crate::tokens::{css_variables, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Behavioural and presentation settings shared by every component.
pub struct UiConfig {
    /// Color theme.
    pub theme: Theme,
    /// Clinical-device mode: larger targets and auto-repeat keyboard activation suppressed.
    pub medical_device_mode: bool,
    /// Emergency mode: enables emergency shortcuts and styling.
    pub emergency_mode: bool,
    /// Enables workflow shortcuts (digit selection, Escape-to-clear, Ctrl+Enter submit).
    pub workflow_shortcuts: bool,
    /// Delay before a tooltip appears.
    pub tooltip_show_delay_ms: u64,
    /// Delay before a tooltip hides.
    pub tooltip_hide_delay_ms: u64,
    /// How long copy buttons show their "Copied" state.
    pub copy_reset_ms: u64,
    /// How long a confirmation-required control waits for the second activation.
    pub confirmation_timeout_ms: u64,
    /// Mask PHI fields until revealed.
    pub mask_phi: bool,
    /// Date display style.
    pub date_style: DateStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            medical_device_mode: false,
            emergency_mode: false,
            workflow_shortcuts: true,
            tooltip_show_delay_ms: 400,
            tooltip_hide_delay_ms: 100,
            copy_reset_ms: 2_000,
            confirmation_timeout_ms: 3_000,
            mask_phi: true,
            date_style: DateStyle::Medium,
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised when loading host configuration.
pub enum ConfigError {
    /// The JSON payload could not be parsed.
    #[error("invalid care_ui configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl UiConfig {
    /// Parses a (possibly partial) JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Keyboard gates opened by this configuration.
    pub fn shortcut_mode(&self) -> ShortcutMode {
        ShortcutMode {
            medical_device: self.medical_device_mode,
            emergency: self.emergency_mode,
            workflow: self.workflow_shortcuts,
        }
    }

    /// Tooltip show delay.
    pub fn tooltip_show_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_show_delay_ms)
    }

    /// Tooltip hide delay.
    pub fn tooltip_hide_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_hide_delay_ms)
    }

    /// Copy feedback duration.
    pub fn copy_reset(&self) -> Duration {
        Duration::from_millis(self.copy_reset_ms)
    }

    /// Confirmation window.
    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_millis(self.confirmation_timeout_ms)
    }
}

#[derive(Clone, Copy)]
/// Leptos context carrying the active [`UiConfig`].
pub struct UiConfigContext {
    /// Reactive configuration.
    pub config: Signal<UiConfig>,
}

#[component]
/// Provides [`UiConfig`] to descendants and applies design tokens as CSS custom properties.
pub fn CareUiProvider(
    /// Active configuration; pass a signal to switch theme or modes at runtime.
    #[prop(optional, into)]
    config: MaybeSignal<UiConfig>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let config = Signal::derive(move || config.get());
    provide_context(UiConfigContext { config });

    let theme = move || config.with(|config| config.theme);
    view! {
        <div
            class=crate::primitives::merge_layout_class("care-root", layout_class)
            style=move || css_variables(theme())
            data-care-theme=move || theme().token()
            data-care-medical-device=move || {
                crate::primitives::bool_token(config.with(|config| config.medical_device_mode))
            }
            data-care-emergency=move || {
                crate::primitives::bool_token(config.with(|config| config.emergency_mode))
            }
        >
            {children()}
        </div>
    }
}

/// Returns the provided configuration, or defaults when no [`CareUiProvider`] is mounted.
pub fn use_ui_config() -> Signal<UiConfig> {
    use_context::<UiConfigContext>()
        .map(|context| context.config)
        .unwrap_or_else(|| Signal::derive(UiConfig::default))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            UiConfig::from_json(r#"{"emergency_mode": true, "theme": "high-contrast"}"#)
                .expect("config");
        assert!(config.emergency_mode);
        assert_eq!(config.theme, Theme::HighContrast);
        assert_eq!(config.confirmation_timeout_ms, 3_000);
        assert!(config.workflow_shortcuts);
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = UiConfig::from_json("{not json").expect_err("parse error");
        assert!(err.to_string().starts_with("invalid care_ui configuration"));
    }

    #[test]
    fn shortcut_mode_mirrors_flags() {
        let config = UiConfig {
            medical_device_mode: true,
            workflow_shortcuts: false,
            ..UiConfig::default()
        };
        assert_eq!(
            config.shortcut_mode(),
            ShortcutMode {
                medical_device: true,
                emergency: false,
                workflow: false,
            }
        );
        assert_eq!(config.copy_reset(), Duration::from_secs(2));
    }
}
