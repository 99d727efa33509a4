//! Keyboard combos and mode-gated shortcut tables.
//!
//! Components describe their keyboard contract as a [`ShortcutTable`]: an ordered list of
//! `(combo, gate, action)` bindings. A keydown is resolved against the table using the active
//! [`ShortcutMode`], so medical-device, emergency, and workflow shortcuts switch on and off with
//! the kit configuration instead of being hard-coded in each handler.

use std::fmt;

use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// A key plus its modifier state, in `KeyboardEvent.key` vocabulary.
pub struct KeyCombo {
    /// Normalized `key` value (`"Enter"`, `" "`, `"ArrowUp"`, `"e"`).
    pub key: String,
    /// Control held.
    pub ctrl: bool,
    /// Alt/Option held.
    pub alt: bool,
    /// Shift held.
    pub shift: bool,
    /// Meta/Command held.
    pub meta: bool,
}

fn normalize_key(key: &str) -> String {
    match key {
        "Space" | "Spacebar" => " ".to_string(),
        "Esc" => "Escape".to_string(),
        "Up" => "ArrowUp".to_string(),
        "Down" => "ArrowDown".to_string(),
        "Left" => "ArrowLeft".to_string(),
        "Right" => "ArrowRight".to_string(),
        "Return" => "Enter".to_string(),
        "Plus" => "+".to_string(),
        other => other.to_string(),
    }
}

impl KeyCombo {
    /// Unmodified key.
    pub fn key(key: &str) -> Self {
        Self {
            key: normalize_key(key),
            ..Self::default()
        }
    }

    /// Reads the combo carried by a keydown event.
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: normalize_key(&ev.key()),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
            meta: ev.meta_key(),
        }
    }

    /// Parses `"Ctrl+Shift+E"`-style notation. Returns `None` for empty or modifier-only input.
    /// A trailing `++` binds the plus key itself (`"Ctrl++"`).
    pub fn parse(notation: &str) -> Option<Self> {
        let notation = notation.trim();
        if notation == "+" {
            return Some(Self::key("+"));
        }
        let (notation, mut key) = match notation.strip_suffix("++") {
            Some(modifiers) => (modifiers, Some("+".to_string())),
            None => (notation, None),
        };

        let mut combo = Self::default();
        for part in notation.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => combo.ctrl = true,
                "alt" | "option" => combo.alt = true,
                "shift" => combo.shift = true,
                "meta" | "cmd" | "command" | "super" => combo.meta = true,
                "" => return None,
                _ => {
                    if key.is_some() {
                        return None;
                    }
                    key = Some(normalize_key(part));
                }
            }
        }
        combo.key = key?;
        Some(combo)
    }

    /// Whether a binding only cares about the produced character, not the Shift state used to
    /// type it (`+`, `?`, ` `).
    fn shift_insensitive(&self) -> bool {
        let mut chars = self.key.chars();
        matches!((chars.next(), chars.next()), (Some(ch), None) if !ch.is_alphabetic())
    }

    /// Returns `true` when `pressed` triggers this binding.
    pub fn matches(&self, pressed: &KeyCombo) -> bool {
        self.key.eq_ignore_ascii_case(&pressed.key)
            && self.ctrl == pressed.ctrl
            && self.alt == pressed.alt
            && self.meta == pressed.meta
            && (self.shift == pressed.shift || self.shift_insensitive())
    }

    /// Human-readable label such as `Ctrl+Shift+E` or `↑`.
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.alt {
            parts.push("Alt".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        if self.meta {
            parts.push("Meta".to_string());
        }
        let key = match self.key.as_str() {
            " " => "Space".to_string(),
            "ArrowUp" => "↑".to_string(),
            "ArrowDown" => "↓".to_string(),
            "ArrowLeft" => "←".to_string(),
            "ArrowRight" => "→".to_string(),
            "Escape" => "Esc".to_string(),
            key if key.chars().count() == 1 => key.to_uppercase(),
            key => key.to_string(),
        };
        parts.push(key);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which optional shortcut families are currently switched on.
pub struct ShortcutMode {
    /// Medical-device mode is active.
    pub medical_device: bool,
    /// Emergency mode is active.
    pub emergency: bool,
    /// Workflow shortcuts are enabled.
    pub workflow: bool,
}

impl ShortcutMode {
    /// Returns `true` when bindings behind `gate` are live.
    pub fn allows(self, gate: ShortcutGate) -> bool {
        match gate {
            ShortcutGate::Always => true,
            ShortcutGate::MedicalDevice => self.medical_device,
            ShortcutGate::Emergency => self.emergency,
            ShortcutGate::Workflow => self.workflow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Mode flag a binding depends on.
pub enum ShortcutGate {
    /// Always live.
    Always,
    /// Live in medical-device mode.
    MedicalDevice,
    /// Live in emergency mode.
    Emergency,
    /// Live when workflow shortcuts are enabled.
    Workflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions produced by the preset tables.
pub enum ShortcutAction {
    /// Press / toggle the focused control.
    Activate,
    /// Move to the next item or increment.
    Next,
    /// Move to the previous item or decrement.
    Previous,
    /// Jump to the first item or minimum.
    First,
    /// Jump to the last item or maximum.
    Last,
    /// A digit key was pressed.
    Digit(u8),
    /// Clear the current value.
    Clear,
    /// Submit the surrounding form.
    Submit,
    /// Close or cancel the current interaction.
    Cancel,
    /// Trigger the emergency action.
    EmergencyActivate,
    /// Zoom in.
    ZoomIn,
    /// Zoom out.
    ZoomOut,
    /// Pan the view by one step.
    Pan(i8, i8),
    /// Reset view transforms.
    Reset,
    /// Rotate a quarter turn.
    Rotate,
    /// Invert grayscale.
    Invert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of a [`ShortcutTable`].
pub struct ShortcutBinding<A> {
    /// Combo that triggers the binding.
    pub combo: KeyCombo,
    /// Mode flag required for the binding to be live.
    pub gate: ShortcutGate,
    /// Produced action.
    pub action: A,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered shortcut bindings; the first live match wins.
pub struct ShortcutTable<A> {
    bindings: Vec<ShortcutBinding<A>>,
}

impl<A> Default for ShortcutTable<A> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<A: Copy> ShortcutTable<A> {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a binding written in `Ctrl+Shift+E` notation. Unparsable notation is logged and
    /// skipped.
    pub fn bind(mut self, notation: &str, gate: ShortcutGate, action: A) -> Self {
        match KeyCombo::parse(notation) {
            Some(combo) => self.bindings.push(ShortcutBinding {
                combo,
                gate,
                action,
            }),
            None => logging::warn!("ignoring unparsable shortcut `{notation}`"),
        }
        self
    }

    /// Resolves a pressed combo under `mode`.
    pub fn resolve(&self, pressed: &KeyCombo, mode: ShortcutMode) -> Option<A> {
        self.bindings
            .iter()
            .find(|binding| mode.allows(binding.gate) && binding.combo.matches(pressed))
            .map(|binding| binding.action)
    }

    /// Resolves a keydown event, preventing the browser default when a binding matches.
    pub fn dispatch(&self, ev: &web_sys::KeyboardEvent, mode: ShortcutMode) -> Option<A> {
        let action = self.resolve(&KeyCombo::from_event(ev), mode)?;
        ev.prevent_default();
        Some(action)
    }

    /// Bindings live under `mode`, in table order.
    pub fn live_bindings(&self, mode: ShortcutMode) -> impl Iterator<Item = &ShortcutBinding<A>> {
        self.bindings
            .iter()
            .filter(move |binding| mode.allows(binding.gate))
    }

    /// Number of bindings, live or not.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn with_digits(
    mut table: ShortcutTable<ShortcutAction>,
    digits: std::ops::RangeInclusive<u8>,
    gate: ShortcutGate,
) -> ShortcutTable<ShortcutAction> {
    for digit in digits {
        table = table.bind(&digit.to_string(), gate, ShortcutAction::Digit(digit));
    }
    table
}

/// Focused-button keys. Enter/Space are resolved explicitly so medical-device mode can drop
/// auto-repeat activations.
pub fn button_shortcuts() -> ShortcutTable<ShortcutAction> {
    ShortcutTable::new()
        .bind("Enter", ShortcutGate::MedicalDevice, ShortcutAction::Activate)
        .bind("Space", ShortcutGate::MedicalDevice, ShortcutAction::Activate)
        .bind("Escape", ShortcutGate::Always, ShortcutAction::Cancel)
}

/// Window-level activation binding for a button. Emergency buttons answer only in emergency
/// mode, other buttons only while workflow shortcuts are enabled.
pub fn activation_shortcut(notation: &str, emergency: bool) -> ShortcutTable<ShortcutAction> {
    if emergency {
        ShortcutTable::new().bind(
            notation,
            ShortcutGate::Emergency,
            ShortcutAction::EmergencyActivate,
        )
    } else {
        ShortcutTable::new().bind(notation, ShortcutGate::Workflow, ShortcutAction::Activate)
    }
}

/// Radio-group roving focus; digits pick an option by 1-based position in workflow mode.
pub fn choice_shortcuts() -> ShortcutTable<ShortcutAction> {
    let table = ShortcutTable::new()
        .bind("ArrowDown", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowRight", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowUp", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("ArrowLeft", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("Home", ShortcutGate::Always, ShortcutAction::First)
        .bind("End", ShortcutGate::Always, ShortcutAction::Last)
        .bind("Space", ShortcutGate::Always, ShortcutAction::Activate)
        .bind("Escape", ShortcutGate::Always, ShortcutAction::Cancel);
    with_digits(table, 1..=9, ShortcutGate::Workflow)
}

/// Star rating: arrows step, Home/End jump, digits `0..=max` (capped at 9) set the value.
pub fn rating_shortcuts(max: u8) -> ShortcutTable<ShortcutAction> {
    let table = ShortcutTable::new()
        .bind("ArrowRight", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowUp", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowLeft", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("ArrowDown", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("Home", ShortcutGate::Always, ShortcutAction::First)
        .bind("End", ShortcutGate::Always, ShortcutAction::Last);
    with_digits(table, 0..=max.min(9), ShortcutGate::Always)
}

/// Text-entry workflow shortcuts.
pub fn form_field_shortcuts() -> ShortcutTable<ShortcutAction> {
    ShortcutTable::new()
        .bind("Escape", ShortcutGate::Workflow, ShortcutAction::Clear)
        .bind("Ctrl+Enter", ShortcutGate::Workflow, ShortcutAction::Submit)
        .bind("Meta+Enter", ShortcutGate::Workflow, ShortcutAction::Submit)
}

/// Listbox navigation used by dropdowns and the command palette.
pub fn list_shortcuts() -> ShortcutTable<ShortcutAction> {
    ShortcutTable::new()
        .bind("ArrowDown", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowUp", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("Home", ShortcutGate::Always, ShortcutAction::First)
        .bind("End", ShortcutGate::Always, ShortcutAction::Last)
        .bind("Enter", ShortcutGate::Always, ShortcutAction::Activate)
        .bind("Escape", ShortcutGate::Always, ShortcutAction::Cancel)
}

/// Imaging viewer controls.
pub fn viewer_shortcuts() -> ShortcutTable<ShortcutAction> {
    ShortcutTable::new()
        .bind("Shift+ArrowLeft", ShortcutGate::Always, ShortcutAction::Pan(-1, 0))
        .bind("Shift+ArrowRight", ShortcutGate::Always, ShortcutAction::Pan(1, 0))
        .bind("Shift+ArrowUp", ShortcutGate::Always, ShortcutAction::Pan(0, -1))
        .bind("Shift+ArrowDown", ShortcutGate::Always, ShortcutAction::Pan(0, 1))
        .bind("ArrowRight", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowDown", ShortcutGate::Always, ShortcutAction::Next)
        .bind("PageDown", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowLeft", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("ArrowUp", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("PageUp", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("Home", ShortcutGate::Always, ShortcutAction::First)
        .bind("End", ShortcutGate::Always, ShortcutAction::Last)
        .bind("+", ShortcutGate::Always, ShortcutAction::ZoomIn)
        .bind("=", ShortcutGate::Always, ShortcutAction::ZoomIn)
        .bind("-", ShortcutGate::Always, ShortcutAction::ZoomOut)
        .bind("0", ShortcutGate::Always, ShortcutAction::Reset)
        .bind("r", ShortcutGate::Always, ShortcutAction::Rotate)
        .bind("i", ShortcutGate::Always, ShortcutAction::Invert)
}

/// Registers a window-level keydown listener for `table`, removed when the owner is disposed.
///
/// Events already handled by a focused control (`defaultPrevented`) are ignored.
pub fn use_global_shortcut<A>(
    table: ShortcutTable<A>,
    mode: Signal<ShortcutMode>,
    on_action: impl Fn(A) + 'static,
) where
    A: Copy + 'static,
{
    let listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if let Some(action) = table.dispatch(&ev, mode.get_untracked()) {
            on_action(action);
        }
    });
    on_cleanup(move || listener.remove());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pressed(notation: &str) -> KeyCombo {
        KeyCombo::parse(notation).expect("combo")
    }

    const ALL_MODES: ShortcutMode = ShortcutMode {
        medical_device: true,
        emergency: true,
        workflow: true,
    };

    #[test]
    fn parses_modifiers_and_aliases() {
        assert_eq!(
            pressed("Ctrl+Shift+E"),
            KeyCombo {
                key: "E".to_string(),
                ctrl: true,
                shift: true,
                ..KeyCombo::default()
            }
        );
        assert_eq!(pressed("Space").key, " ");
        assert!(pressed("cmd+k").meta);
        assert_eq!(pressed("+").key, "+");
        assert_eq!(KeyCombo::parse("Ctrl+"), None);
        assert_eq!(
            pressed("Ctrl++"),
            KeyCombo {
                key: "+".to_string(),
                ctrl: true,
                ..KeyCombo::default()
            }
        );
        assert_eq!(pressed("Ctrl+Shift++").label(), "Ctrl+Shift++");
        assert_eq!(KeyCombo::parse("Ctrl+a++"), None);
        assert_eq!(KeyCombo::parse("++"), None);
        assert_eq!(KeyCombo::parse("Shift"), None);
        assert_eq!(KeyCombo::parse("a+b"), None);
    }

    #[test]
    fn matching_ignores_letter_case_but_not_modifiers() {
        let binding = pressed("Ctrl+k");
        assert!(binding.matches(&pressed("Ctrl+K")));
        assert!(!binding.matches(&pressed("k")));
        assert!(!binding.matches(&pressed("Ctrl+Alt+k")));
        assert!(!pressed("r").matches(&pressed("Shift+r")));
    }

    #[test]
    fn symbol_bindings_accept_shifted_presses() {
        assert!(pressed("+").matches(&pressed("Shift+Plus")));
        assert!(!pressed("Ctrl+Enter").matches(&pressed("Ctrl+Shift+Enter")));
    }

    #[test]
    fn labels_render_glyphs_and_modifier_order() {
        assert_eq!(pressed("shift+ctrl+e").label(), "Ctrl+Shift+E");
        assert_eq!(pressed("ArrowUp").to_string(), "↑");
        assert_eq!(pressed("Space").label(), "Space");
        assert_eq!(pressed("Esc").label(), "Esc");
    }

    #[test]
    fn gates_follow_mode_flags() {
        let table = button_shortcuts();
        let enter = pressed("Enter");
        assert_eq!(table.resolve(&enter, ShortcutMode::default()), None);
        assert_eq!(
            table.resolve(
                &enter,
                ShortcutMode {
                    medical_device: true,
                    ..ShortcutMode::default()
                }
            ),
            Some(ShortcutAction::Activate)
        );

        assert_eq!(
            table.resolve(&pressed("Escape"), ShortcutMode::default()),
            Some(ShortcutAction::Cancel)
        );
    }

    #[test]
    fn activation_shortcuts_follow_emergency_flag() {
        let emergency = activation_shortcut("Ctrl+Shift+E", true);
        let combo = pressed("Ctrl+Shift+E");
        let workflow_only = ShortcutMode {
            workflow: true,
            ..ShortcutMode::default()
        };
        assert_eq!(emergency.resolve(&combo, workflow_only), None);
        assert_eq!(
            emergency.resolve(&combo, ALL_MODES),
            Some(ShortcutAction::EmergencyActivate)
        );

        let routine = activation_shortcut("Alt+s", false);
        assert_eq!(
            routine.resolve(&pressed("Alt+S"), workflow_only),
            Some(ShortcutAction::Activate)
        );
        assert_eq!(routine.resolve(&pressed("Alt+s"), ShortcutMode::default()), None);
    }

    #[test]
    fn choice_digits_require_workflow_mode() {
        let table = choice_shortcuts();
        assert_eq!(table.resolve(&pressed("3"), ShortcutMode::default()), None);
        assert_eq!(
            table.resolve(&pressed("3"), ALL_MODES),
            Some(ShortcutAction::Digit(3))
        );
        assert_eq!(
            table.resolve(&pressed("ArrowLeft"), ShortcutMode::default()),
            Some(ShortcutAction::Previous)
        );
    }

    #[test]
    fn rating_digits_are_capped_by_max() {
        let table = rating_shortcuts(5);
        assert_eq!(
            table.resolve(&pressed("5"), ShortcutMode::default()),
            Some(ShortcutAction::Digit(5))
        );
        assert_eq!(table.resolve(&pressed("6"), ShortcutMode::default()), None);
        assert_eq!(rating_shortcuts(12).len(), 6 + 10);
    }

    #[test]
    fn form_field_shortcuts_are_workflow_only() {
        let table = form_field_shortcuts();
        let workflow = ShortcutMode {
            workflow: true,
            ..ShortcutMode::default()
        };
        assert_eq!(table.resolve(&pressed("Escape"), ShortcutMode::default()), None);
        assert_eq!(
            table.resolve(&pressed("Escape"), workflow),
            Some(ShortcutAction::Clear)
        );
        assert_eq!(
            table.resolve(&pressed("Ctrl+Enter"), workflow),
            Some(ShortcutAction::Submit)
        );
        assert_eq!(table.live_bindings(ShortcutMode::default()).count(), 0);
    }

    #[test]
    fn viewer_prefers_pan_for_shifted_arrows() {
        let table = viewer_shortcuts();
        let mode = ShortcutMode::default();
        assert_eq!(
            table.resolve(&pressed("Shift+ArrowLeft"), mode),
            Some(ShortcutAction::Pan(-1, 0))
        );
        assert_eq!(
            table.resolve(&pressed("ArrowLeft"), mode),
            Some(ShortcutAction::Previous)
        );
        assert_eq!(
            table.resolve(&pressed("Shift+="), mode),
            Some(ShortcutAction::ZoomIn)
        );
    }

    #[test]
    fn unparsable_bindings_are_skipped() {
        let table = ShortcutTable::new()
            .bind("Ctrl+", ShortcutGate::Always, 1_u8)
            .bind("x", ShortcutGate::Always, 2_u8);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(&pressed("x"), ShortcutMode::default()), Some(2));
    }
}
