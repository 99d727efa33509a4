//! Two-step confirmation for destructive or clinically significant actions.
//!
//! The first activation arms a pending window; a second activation inside the window confirms.
//! The window expires after the configured timeout. Each armed window carries a generation number
//! so a stale timeout can never cancel a newer window.

use std::time::Duration;

use leptos::*;

use crate::config::use_ui_config;
use crate::timing::TimeoutSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Gate state.
pub enum ConfirmState {
    /// Nothing armed.
    #[default]
    Idle,
    /// Waiting for the confirming activation.
    Pending {
        /// Identifies the armed window.
        generation: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of an activation.
pub enum GateOutcome {
    /// A confirmation window was armed; the action must not run yet.
    Pending(u32),
    /// The action should run now.
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Pure confirmation state machine.
pub struct ConfirmationGate {
    required: bool,
    state: ConfirmState,
    next_generation: u32,
}

impl ConfirmationGate {
    /// Creates a gate; when `required` is false every activation confirms immediately.
    pub fn new(required: bool) -> Self {
        Self {
            required,
            ..Self::default()
        }
    }

    /// Current state.
    pub fn state(&self) -> ConfirmState {
        self.state
    }

    /// Returns `true` while a confirmation window is armed.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ConfirmState::Pending { .. })
    }

    /// Toggles the confirmation requirement; turning it off drops any armed window.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
        if !required {
            self.state = ConfirmState::Idle;
        }
    }

    /// Registers an activation.
    pub fn activate(&mut self) -> GateOutcome {
        if !self.required {
            return GateOutcome::Confirmed;
        }
        match self.state {
            ConfirmState::Pending { .. } => {
                self.state = ConfirmState::Idle;
                GateOutcome::Confirmed
            }
            ConfirmState::Idle => {
                self.next_generation = self.next_generation.wrapping_add(1);
                let generation = self.next_generation;
                self.state = ConfirmState::Pending { generation };
                GateOutcome::Pending(generation)
            }
        }
    }

    /// Expires the window armed as `generation`. Returns `false` for stale generations.
    pub fn expire(&mut self, generation: u32) -> bool {
        match self.state {
            ConfirmState::Pending { generation: armed } if armed == generation => {
                self.state = ConfirmState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drops any armed window. Returns `true` when one was armed.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = ConfirmState::Idle;
        was_pending
    }
}

#[derive(Clone, Copy)]
/// Reactive handle returned by [`use_confirmation`].
pub struct Confirmation {
    gate: RwSignal<ConfirmationGate>,
    timeout: TimeoutSlot,
    window: StoredValue<Duration>,
}

impl Confirmation {
    /// Registers an activation. Returns `true` when the guarded action should run now.
    pub fn activate(&self) -> bool {
        let mut outcome = GateOutcome::Confirmed;
        self.gate.update(|gate| outcome = gate.activate());
        match outcome {
            GateOutcome::Confirmed => {
                self.timeout.clear();
                true
            }
            GateOutcome::Pending(generation) => {
                let gate = self.gate;
                self.timeout.schedule(self.window.get_value(), move || {
                    gate.try_update(|gate| gate.expire(generation));
                });
                false
            }
        }
    }

    /// Drops any armed window.
    pub fn cancel(&self) {
        self.timeout.clear();
        self.gate.update(|gate| {
            gate.cancel();
        });
    }

    /// Reactive pending flag.
    pub fn pending(&self) -> Signal<bool> {
        let gate = self.gate;
        Signal::derive(move || gate.with(ConfirmationGate::is_pending))
    }
}

/// Creates a confirmation gate bound to the current component.
///
/// The window length comes from `UiConfig::confirmation_timeout_ms`. The requirement follows
/// `required` reactively.
pub fn use_confirmation(required: MaybeSignal<bool>) -> Confirmation {
    let config = use_ui_config();
    let gate = create_rw_signal(ConfirmationGate::new(required.get_untracked()));
    let timeout = TimeoutSlot::new();
    let window = store_value(config.with_untracked(|config| config.confirmation_timeout()));

    create_effect(move |_| {
        let required = required.get();
        gate.update(|gate| gate.set_required(required));
        if !required {
            timeout.clear();
        }
    });
    create_effect(move |_| {
        window.set_value(config.with(|config| config.confirmation_timeout()));
    });

    Confirmation {
        gate,
        timeout,
        window,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unrequired_gate_confirms_immediately() {
        let mut gate = ConfirmationGate::new(false);
        assert_eq!(gate.activate(), GateOutcome::Confirmed);
        assert!(!gate.is_pending());
    }

    #[test]
    fn first_activation_arms_and_second_confirms() {
        let mut gate = ConfirmationGate::new(true);
        assert_eq!(gate.activate(), GateOutcome::Pending(1));
        assert_eq!(gate.state(), ConfirmState::Pending { generation: 1 });
        assert_eq!(gate.activate(), GateOutcome::Confirmed);
        assert_eq!(gate.state(), ConfirmState::Idle);
    }

    #[test]
    fn expiry_resets_without_confirming() {
        let mut gate = ConfirmationGate::new(true);
        let GateOutcome::Pending(generation) = gate.activate() else {
            panic!("expected pending");
        };
        assert!(gate.expire(generation));
        assert!(!gate.is_pending());
        assert_eq!(gate.activate(), GateOutcome::Pending(generation + 1));
    }

    #[test]
    fn stale_expiry_does_not_cancel_newer_window() {
        let mut gate = ConfirmationGate::new(true);
        assert_eq!(gate.activate(), GateOutcome::Pending(1));
        assert!(gate.cancel());
        assert_eq!(gate.activate(), GateOutcome::Pending(2));
        assert!(!gate.expire(1));
        assert!(gate.is_pending());
        assert!(gate.expire(2));
        assert!(!gate.cancel());
    }

    #[test]
    fn hook_runs_the_action_only_on_the_second_activation() {
        let runtime = create_runtime();
        let confirmation = use_confirmation(MaybeSignal::Static(true));
        let pending = confirmation.pending();

        assert!(!confirmation.activate());
        assert!(pending.get_untracked());
        assert!(confirmation.activate());
        assert!(!pending.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn hook_timeout_resets_without_running_the_action() {
        let runtime = create_runtime();
        let confirmation = use_confirmation(MaybeSignal::Static(true));
        let pending = confirmation.pending();

        assert!(!confirmation.activate());
        assert!(confirmation.timeout.elapse());
        assert!(!pending.get_untracked());
        assert!(!confirmation.activate());
        assert!(pending.get_untracked());

        confirmation.cancel();
        assert!(!pending.get_untracked());
        assert!(!confirmation.timeout.elapse());
        runtime.dispose();
    }

    #[test]
    fn hook_without_requirement_confirms_immediately() {
        let runtime = create_runtime();
        let confirmation = use_confirmation(MaybeSignal::Static(false));
        assert!(confirmation.activate());
        assert!(!confirmation.pending().get_untracked());
        assert!(!confirmation.timeout.elapse());
        runtime.dispose();
    }

    #[test]
    fn dropping_the_requirement_clears_pending_state() {
        let mut gate = ConfirmationGate::new(true);
        gate.activate();
        gate.set_required(false);
        assert!(!gate.is_pending());
        assert_eq!(gate.activate(), GateOutcome::Confirmed);
    }
}
