use super::*;
use crate::clipboard::copy_text;
use crate::confirm::use_confirmation;
use crate::keyboard::{
    activation_shortcut, button_shortcuts, form_field_shortcuts, use_global_shortcut, KeyCombo,
    ShortcutAction,
};
use crate::primitives::forms::bind_field;
use crate::timing::TimeoutSlot;

const BUTTON_BASE: &str = "care-button inline-flex items-center justify-center gap-2 rounded-[var(--care-radius-md)] font-medium transition-colors focus-visible:outline-2";
const FIELD_BASE: &str = "care-field w-full rounded-[var(--care-radius-md)] border border-[var(--care-color-border)] bg-[var(--care-color-surface)] px-3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Resolved interaction state of a [`Button`] at one moment.
pub(crate) struct ButtonState {
    pub(crate) disabled: bool,
    pub(crate) loading: bool,
    pub(crate) emergency: bool,
    pub(crate) pending: bool,
    pub(crate) medical_device: bool,
}

impl ButtonState {
    /// Disabled or loading buttons ignore activation.
    pub(crate) fn inert(self) -> bool {
        self.disabled || self.loading
    }

    /// Emergency styling overrides the requested variant.
    pub(crate) fn variant(self, requested: ButtonVariant) -> ButtonVariant {
        if self.emergency {
            ButtonVariant::Danger
        } else {
            requested
        }
    }

    pub(crate) fn size(self, requested: ButtonSize) -> ButtonSize {
        requested.for_medical_device(self.medical_device)
    }

    pub(crate) fn class(
        self,
        variant: ButtonVariant,
        size: ButtonSize,
        layout_class: Option<&'static str>,
    ) -> String {
        classes![
            BUTTON_BASE,
            self.variant(variant).classes(),
            self.size(size).classes(),
            ("opacity-50 cursor-not-allowed", self.inert()),
            (
                "care-button--emergency ring-2 ring-offset-2 ring-[var(--care-color-emergency)] uppercase tracking-wide",
                self.emergency
            ),
            ("care-button--pending animate-pulse", self.pending),
            layout_class
        ]
    }

    pub(crate) fn aria_busy(self) -> Option<&'static str> {
        self.loading.then_some("true")
    }

    pub(crate) fn aria_disabled(self) -> Option<&'static str> {
        self.inert().then_some("true")
    }
}

#[component]
/// Action button with loading, emergency, and two-step confirmation states.
///
/// With `require_confirmation` the first activation only arms the button (`data-care-pending`)
/// and `on_click` runs on the second activation inside the configured window. A `shortcut`
/// registers a window-level key binding that clicks the button, so it passes through the same
/// disabled/loading/confirmation checks as a pointer click.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] emergency: MaybeSignal<bool>,
    #[prop(optional, into)] require_confirmation: MaybeSignal<bool>,
    /// Text announced while a confirmation is pending.
    #[prop(optional, into)]
    confirm_label: Option<String>,
    /// Window-level shortcut in `Ctrl+Shift+E` notation.
    #[prop(optional)]
    shortcut: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let config = use_ui_config();
    let confirmation = use_confirmation(require_confirmation);
    let pending = confirmation.pending();
    let node_ref = create_node_ref::<html::Button>();
    let local_shortcuts = store_value(button_shortcuts());
    let confirm_label = confirm_label.unwrap_or_else(|| "Press again to confirm".to_string());

    if let Some(notation) = shortcut {
        let mode = Signal::derive(move || config.with(|config| config.shortcut_mode()));
        use_global_shortcut(
            activation_shortcut(notation, emergency.get_untracked()),
            mode,
            move |_| {
                if let Some(button) = node_ref.get_untracked() {
                    button.click();
                }
            },
        );
    }

    let state = move || ButtonState {
        disabled: disabled.get(),
        loading: loading.get(),
        emergency: emergency.get(),
        pending: pending.get(),
        medical_device: config.with(|config| config.medical_device_mode),
    };

    let handle_click = move |ev: MouseEvent| {
        if disabled.get_untracked() || loading.get_untracked() {
            ev.prevent_default();
            return;
        }
        if !confirmation.activate() {
            return;
        }
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };
    let handle_keydown = move |ev: KeyboardEvent| {
        let mode = config.with_untracked(|config| config.shortcut_mode());
        let action = local_shortcuts
            .with_value(|table| table.resolve(&KeyCombo::from_event(&ev), mode));
        match action {
            Some(ShortcutAction::Activate) if ev.repeat() => ev.prevent_default(),
            Some(ShortcutAction::Cancel) if pending.get_untracked() => {
                ev.prevent_default();
                confirmation.cancel();
            }
            _ => {}
        }
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=move || state().class(variant, size, layout_class)
            id=id
            node_ref=node_ref
            aria-label=aria_label
            title=title
            aria-busy=move || state().aria_busy()
            aria-disabled=move || state().aria_disabled()
            aria-keyshortcuts=shortcut
            disabled=move || disabled.get()
            data-care-primitive="true"
            data-care-kind="button"
            data-care-variant=move || state().variant(variant).token()
            data-care-size=move || state().size(size).token()
            data-care-loading=move || bool_token(loading.get())
            data-care-disabled=move || bool_token(disabled.get())
            data-care-emergency=move || bool_token(emergency.get())
            data-care-pending=move || bool_token(pending.get())
            on:click=handle_click
            on:keydown=handle_keydown
        >
            <Show when=move || loading.get()>
                <span
                    class="care-spinner inline-block h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"
                    aria-hidden="true"
                ></span>
            </Show>
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <Show when=move || pending.get()>
                <span class="care-button__confirm sr-only" role="status" aria-live="assertive">
                    {confirm_label.clone()}
                </span>
            </Show>
        </button>
    }
}

#[component]
/// Icon-only button; `aria_label` is required because there is no visible text.
pub fn IconButton(
    icon: IconName,
    #[prop(into)] aria_label: String,
    #[prop(default = ButtonVariant::Ghost)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let config = use_ui_config();
    let icon_size = move || {
        match size.for_medical_device(config.with(|config| config.medical_device_mode)) {
            ButtonSize::Sm => IconSize::Sm,
            ButtonSize::Md => IconSize::Md,
            ButtonSize::Lg => IconSize::Lg,
            ButtonSize::Xl => IconSize::Xl,
        }
    };
    let class = move || {
        classes![
            "care-icon-button inline-flex items-center justify-center rounded-full p-2",
            variant.classes(),
            ("opacity-50 cursor-not-allowed", disabled.get()),
            layout_class
        ]
    };
    let title = aria_label.clone();

    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            title=title
            aria-pressed=move || pressed.get().then_some("true")
            disabled=move || disabled.get()
            data-care-primitive="true"
            data-care-kind="icon-button"
            data-care-variant=variant.token()
            data-care-pressed=move || bool_token(pressed.get())
            data-care-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || view! { <Icon icon size=icon_size() /> }}
        </button>
    }
}

#[component]
/// Single-line text input.
///
/// With workflow shortcuts enabled, Escape clears the value and Ctrl/Meta+Enter submits.
pub fn TextInput(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] leading_icon: Option<IconName>,
    /// Shows a clear button while the input has a value.
    #[prop(optional)]
    clearable: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
    #[prop(optional)] on_submit: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let config = use_ui_config();
    let field = bind_field(id, invalid, required);
    let invalid = field.invalid;
    let shortcuts = store_value(form_field_shortcuts());
    let value = Signal::derive(move || value.get());

    let clear = move || {
        if let Some(on_input) = on_input.as_ref() {
            on_input.call(String::new());
        }
        if let Some(on_clear) = on_clear.as_ref() {
            on_clear.call(());
        }
    };
    let handle_keydown = move |ev: KeyboardEvent| {
        let mode = config.with_untracked(|config| config.shortcut_mode());
        match shortcuts.with_value(|table| table.dispatch(&ev, mode)) {
            Some(ShortcutAction::Clear) => clear(),
            Some(ShortcutAction::Submit) => {
                if let Some(on_submit) = on_submit.as_ref() {
                    on_submit.call(value.get_untracked());
                }
            }
            _ => {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        }
    };
    let class = move || {
        classes![
            FIELD_BASE,
            "h-10",
            ("pl-9", leading_icon.is_some()),
            ("pr-9", clearable),
            ("border-[var(--care-color-danger)]", invalid.get()),
            ("opacity-50 cursor-not-allowed", disabled.get())
        ]
    };

    view! {
        <div
            class=merge_layout_class("care-text-input relative", layout_class)
            data-care-primitive="true"
            data-care-kind="text-input"
            data-care-invalid=move || bool_token(invalid.get())
            data-care-disabled=move || bool_token(disabled.get())
        >
            {leading_icon
                .map(|icon| {
                    view! {
                        <Icon
                            icon
                            size=IconSize::Sm
                            layout_class="absolute left-3 top-1/2 -translate-y-1/2 text-[var(--care-color-text-muted)]"
                        />
                    }
                })}
            <input
                type=input_type.unwrap_or("text")
                class=class
                id=field.id
                name=name
                placeholder=placeholder
                aria-label=aria_label
                autocomplete=autocomplete
                node_ref=node_ref
                required=field.required
                aria-required=field.required.then_some("true")
                aria-invalid=move || invalid.get().then_some("true")
                aria-describedby=move || field.described_by.get()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
                on:keydown=handle_keydown
            />
            <Show when=move || clearable && !value.with(String::is_empty) && !disabled.get()>
                <button
                    type="button"
                    class="care-text-input__clear absolute right-2 top-1/2 -translate-y-1/2 p-1"
                    aria-label="Clear"
                    on:click=move |_| clear()
                >
                    <Icon icon=IconName::Close size=IconSize::Xs />
                </button>
            </Show>
        </div>
    }
}

#[component]
/// Multi-line text input with the same workflow shortcuts as [`TextInput`].
pub fn TextArea(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] max_length: Option<u32>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_submit: Option<Callback<String>>,
) -> impl IntoView {
    let config = use_ui_config();
    let field = bind_field(id, invalid, required);
    let invalid = field.invalid;
    let shortcuts = store_value(form_field_shortcuts());
    let value = Signal::derive(move || value.get());
    let class = move || {
        classes![
            FIELD_BASE,
            "care-textarea py-2 resize-y",
            ("border-[var(--care-color-danger)]", invalid.get()),
            layout_class
        ]
    };

    view! {
        <textarea
            class=class
            id=field.id
            rows=rows
            maxlength=max_length
            placeholder=placeholder
            aria-label=aria_label
            required=field.required
            aria-invalid=move || invalid.get().then_some("true")
            aria-describedby=move || field.described_by.get()
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-care-primitive="true"
            data-care-kind="text-area"
            data-care-invalid=move || bool_token(invalid.get())
            data-care-length=move || value.with(|value| value.chars().count())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                let mode = config.with_untracked(|config| config.shortcut_mode());
                match shortcuts.with_value(|table| table.dispatch(&ev, mode)) {
                    Some(ShortcutAction::Clear) => {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(String::new());
                        }
                    }
                    Some(ShortcutAction::Submit) => {
                        if let Some(on_submit) = on_submit.as_ref() {
                            on_submit.call(value.get_untracked());
                        }
                    }
                    _ => {}
                }
            }
        ></textarea>
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Option rendered by [`Select`].
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Option cannot be chosen.
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

#[component]
/// Native select with an optional placeholder entry.
pub fn Select(
    #[prop(into)] options: MaybeSignal<Vec<SelectOption>>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let field = bind_field(id, invalid, required);
    let invalid = field.invalid;
    let class = move || {
        classes![
            FIELD_BASE,
            "care-select h-10",
            ("border-[var(--care-color-danger)]", invalid.get()),
            layout_class
        ]
    };

    view! {
        <select
            class=class
            id=field.id
            aria-label=aria_label
            required=field.required
            aria-invalid=move || invalid.get().then_some("true")
            aria-describedby=move || field.described_by.get()
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-care-primitive="true"
            data-care-kind="select"
            data-care-invalid=move || bool_token(invalid.get())
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(event_target_value(&ev));
                }
            }
        >
            {placeholder.map(|placeholder| view! { <option value="" disabled=true>{placeholder}</option> })}
            <For
                each=move || options.get()
                key=|option| option.clone()
                let:option
            >
                <option value=option.value disabled=option.disabled>
                    {option.label}
                </option>
            </For>
        </select>
    }
}

#[component]
/// Labeled checkbox.
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("care-checkbox inline-flex items-center gap-2 cursor-pointer", layout_class)
            data-care-primitive="true"
            data-care-kind="checkbox"
            data-care-selected=move || bool_token(checked.get())
            data-care-disabled=move || bool_token(disabled.get())
        >
            <input
                type="checkbox"
                id=id
                class="h-4 w-4 accent-[var(--care-color-primary)]"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_checked(&ev));
                    }
                }
            />
            <span class="text-sm">{label}</span>
        </label>
    }
}

#[component]
/// Toggle with explicit `role="switch"` semantics.
pub fn Switch(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };
    let track_class = move || {
        classes![
            "care-switch__track relative inline-flex h-6 w-11 rounded-full transition-colors",
            ("bg-[var(--care-color-primary)]", checked.get()),
            ("bg-[var(--care-color-border)]", !checked.get())
        ]
    };
    let thumb_class = move || {
        classes![
            "care-switch__thumb absolute top-0.5 h-5 w-5 rounded-full bg-white transition-transform",
            ("translate-x-5", checked.get()),
            ("translate-x-0.5", !checked.get())
        ]
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("care-switch inline-flex items-center gap-2", layout_class)
            role="switch"
            aria-label=aria_label
            aria-checked=move || checked.get().to_string()
            disabled=move || disabled.get()
            data-care-primitive="true"
            data-care-kind="switch"
            data-care-selected=move || bool_token(checked.get())
            data-care-disabled=move || bool_token(disabled.get())
            on:click=move |_| handle_toggle()
        >
            <span class=track_class>
                <span class=thumb_class></span>
            </span>
            {label.map(|label| view! { <span class="text-sm">{label}</span> })}
        </button>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Feedback state of a [`CopyButton`].
pub(crate) enum CopyState {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyState {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Copied => "copied",
            Self::Failed => "failed",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Idle => IconName::Copy,
            Self::Copied => IconName::Check,
            Self::Failed => IconName::Alert,
        }
    }
}

#[component]
/// Copies `text` to the clipboard and shows "Copied" (or a failure label) until the configured
/// reset delay elapses.
pub fn CopyButton(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_copied: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_ui_config();
    let state = create_rw_signal(CopyState::Idle);
    let reset = TimeoutSlot::new();
    let idle_label = label.unwrap_or_else(|| "Copy".to_string());
    let text = Signal::derive(move || text.get());

    let handle_click = move |_: MouseEvent| {
        let value = text.get_untracked();
        let delay = config.with_untracked(|config| config.copy_reset());
        spawn_local(async move {
            let next = match copy_text(value).await {
                Ok(()) => {
                    if let Some(on_copied) = on_copied.as_ref() {
                        on_copied.call(());
                    }
                    CopyState::Copied
                }
                Err(err) => {
                    logging::warn!("copy to clipboard failed: {err}");
                    CopyState::Failed
                }
            };
            state.try_set(next);
            reset.schedule(delay, move || {
                state.try_set(CopyState::Idle);
            });
        });
    };

    view! {
        <button
            type="button"
            class=merge_layout_class(
                "care-copy-button inline-flex items-center gap-1 rounded-[var(--care-radius-sm)] px-2 py-1 text-sm",
                layout_class,
            )
            data-care-primitive="true"
            data-care-kind="copy-button"
            data-care-state=move || state.get().token()
            on:click=handle_click
        >
            {move || view! { <Icon icon=state.get().icon() size=IconSize::Sm /> }}
            <span aria-live="polite">
                {move || match state.get() {
                    CopyState::Idle => idle_label.clone(),
                    CopyState::Copied => "Copied".to_string(),
                    CopyState::Failed => "Copy failed".to_string(),
                }}
            </span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn copy_state_tokens_and_icons() {
        assert_eq!(CopyState::default().token(), "idle");
        assert_eq!(CopyState::Copied.icon(), IconName::Check);
        assert_eq!(CopyState::Failed.token(), "failed");
    }

    #[test]
    fn button_state_flags_add_and_remove_their_markers() {
        let idle = ButtonState::default();
        let base = idle.class(ButtonVariant::Primary, ButtonSize::Md, None);
        assert!(!base.contains("opacity-50"));
        assert_eq!(idle.aria_busy(), None);
        assert_eq!(idle.aria_disabled(), None);

        let disabled = ButtonState { disabled: true, ..idle };
        assert!(disabled.class(ButtonVariant::Primary, ButtonSize::Md, None).contains("cursor-not-allowed"));
        assert_eq!(disabled.aria_disabled(), Some("true"));
        assert_eq!(disabled.aria_busy(), None);

        let loading = ButtonState { loading: true, ..idle };
        assert_eq!(loading.aria_busy(), Some("true"));
        assert_eq!(loading.aria_disabled(), Some("true"));
        assert!(loading.inert());

        let emergency = ButtonState { emergency: true, ..idle };
        let emergency_class = emergency.class(ButtonVariant::Primary, ButtonSize::Md, None);
        assert!(emergency_class.contains("care-button--emergency"));
        assert!(emergency_class.contains(ButtonVariant::Danger.classes()));
        assert_eq!(emergency.variant(ButtonVariant::Primary), ButtonVariant::Danger);
        assert!(!emergency.inert());

        let pending = ButtonState { pending: true, ..idle };
        assert!(pending.class(ButtonVariant::Primary, ButtonSize::Md, None).contains("care-button--pending"));

        let cleared = [
            ButtonState { disabled: false, ..disabled },
            ButtonState { loading: false, ..loading },
            ButtonState { emergency: false, ..emergency },
            ButtonState { pending: false, ..pending },
        ];
        for state in cleared {
            assert_eq!(state.class(ButtonVariant::Primary, ButtonSize::Md, None), base);
            assert_eq!(state.variant(ButtonVariant::Primary), ButtonVariant::Primary);
            assert_eq!(state.aria_busy(), None);
            assert_eq!(state.aria_disabled(), None);
        }
    }

    #[test]
    fn button_state_is_idempotent() {
        let states = [
            ButtonState::default(),
            ButtonState { disabled: true, ..ButtonState::default() },
            ButtonState { loading: true, emergency: true, ..ButtonState::default() },
        ];
        for state in states {
            let once = state.class(ButtonVariant::Secondary, ButtonSize::Sm, Some("w-full"));
            let twice = state.class(ButtonVariant::Secondary, ButtonSize::Sm, Some("w-full"));
            assert_eq!(once, twice);
            assert_eq!(once.matches("opacity-50").count(), usize::from(state.inert()));
        }
    }

    #[test]
    fn medical_device_mode_enlarges_small_buttons() {
        let state = ButtonState { medical_device: true, ..ButtonState::default() };
        assert_eq!(state.size(ButtonSize::Sm), ButtonSize::Lg);
        assert!(state.class(ButtonVariant::Primary, ButtonSize::Sm, None).contains(ButtonSize::Lg.classes()));
        assert_eq!(ButtonState::default().size(ButtonSize::Sm), ButtonSize::Sm);
    }

    #[test]
    fn select_option_defaults_to_enabled() {
        let option = SelectOption::new("po", "By mouth");
        assert_eq!(option.value, "po");
        assert!(!option.disabled);
        assert_ne!(SelectOption::new("0", "Axial (40 images)"), SelectOption::new("0", "Sagittal (12 images)"));
    }
}
