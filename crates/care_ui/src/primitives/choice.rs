use super::*;
use crate::confirm::use_confirmation;
use crate::focus::{focus_element_by_id, roving_index};
use crate::keyboard::{choice_shortcuts, rating_shortcuts, ShortcutAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Clinical scale applied to a [`Slider`]'s displayed value.
pub enum MedicalScale {
    /// Plain number.
    #[default]
    None,
    /// Numeric pain rating, shown as `value/max` with a descriptor.
    Pain,
    /// Position within the range as a percentage.
    Percent,
}

impl MedicalScale {
    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pain => "pain",
            Self::Percent => "percent",
        }
    }
}

/// Position of `value` within `min..=max` as a percentage of the track, clamped to `0..=100`.
pub fn slider_percent(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Text shown next to the slider for `scale`.
pub fn slider_display(value: f64, min: f64, max: f64, scale: MedicalScale) -> String {
    match scale {
        MedicalScale::None => format_number(value),
        MedicalScale::Pain => format!("{}/{}", format_number(value), format_number(max)),
        MedicalScale::Percent => format!("{:.0}%", slider_percent(value, min, max)),
    }
}

/// Verbal anchor for a 0-10 pain rating.
pub fn pain_descriptor(value: f64) -> &'static str {
    match value.round() as i64 {
        i64::MIN..=0 => "No pain",
        1..=3 => "Mild",
        4..=6 => "Moderate",
        7..=9 => "Severe",
        _ => "Worst possible",
    }
}

/// Clamps `raw` into range and snaps it to the nearest step from `min`.
pub(crate) fn snap_value(raw: f64, min: f64, max: f64, step: f64) -> f64 {
    let clamped = raw.clamp(min.min(max), max.max(min));
    if step <= 0.0 {
        return clamped;
    }
    let snapped = min + ((clamped - min) / step).round() * step;
    snapped.clamp(min.min(max), max.max(min))
}

#[component]
/// Range input with an optional clinical scale readout.
pub fn Slider(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(default = MedicalScale::None)] medical_scale: MedicalScale,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<f64>>,
) -> impl IntoView {
    let input_id = next_dom_id("care-slider");
    let label_for = input_id.clone();
    let percent = Signal::derive(move || slider_percent(value.get(), min, max));
    let display = Signal::derive(move || slider_display(value.get(), min, max, medical_scale));
    let value_text = move || match medical_scale {
        MedicalScale::Pain => format!("{} ({})", display.get(), pain_descriptor(value.get())),
        _ => display.get(),
    };

    view! {
        <div
            class=merge_layout_class("care-slider flex flex-col gap-2", layout_class)
            data-care-primitive="true"
            data-care-kind="slider"
            data-care-scale=medical_scale.token()
            data-care-disabled=move || bool_token(disabled.get())
        >
            <div class="flex items-center justify-between text-sm">
                {label.map(|label| view! { <label for=label_for>{label}</label> })}
                <span class="care-slider__value font-semibold tabular-nums" data-care-slot="value">
                    {move || display.get()}
                </span>
            </div>
            <div class="relative h-6">
                <div class="absolute inset-x-0 top-1/2 h-1.5 -translate-y-1/2 rounded-full bg-[var(--care-color-border)]">
                    <div
                        class="care-slider__fill h-full rounded-full bg-[var(--care-color-primary)]"
                        style=move || format!("width:{:.2}%", percent.get())
                    ></div>
                </div>
                <span
                    class="care-slider__thumb absolute top-1/2 h-4 w-4 -translate-x-1/2 -translate-y-1/2 rounded-full bg-white shadow"
                    data-care-slot="thumb"
                    style=move || format!("left:{:.2}%", percent.get())
                    aria-hidden="true"
                ></span>
                <input
                    id=input_id
                    type="range"
                    class="absolute inset-0 w-full opacity-0 cursor-pointer"
                    min=min
                    max=max
                    step=step
                    prop:value=move || value.get()
                    aria-valuetext=value_text
                    disabled=move || disabled.get()
                    data-care-percent=move || format!("{:.2}", percent.get())
                    on:input=move |ev| {
                        let Ok(raw) = event_target_value(&ev).parse::<f64>() else {
                            return;
                        };
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(snap_value(raw, min, max, step));
                        }
                    }
                />
            </div>
            {(medical_scale == MedicalScale::Pain)
                .then(|| {
                    view! {
                        <span class="care-slider__descriptor text-xs text-[var(--care-color-text-muted)]">
                            {move || pain_descriptor(value.get())}
                        </span>
                    }
                })}
        </div>
    }
}

/// Value a rating moves to for a keyboard action, or `None` when the action does not apply.
pub(crate) fn rating_step(current: u8, max: u8, action: ShortcutAction) -> Option<u8> {
    match action {
        ShortcutAction::Next => Some(current.saturating_add(1).min(max)),
        ShortcutAction::Previous => Some(current.saturating_sub(1)),
        ShortcutAction::First => Some(0),
        ShortcutAction::Last => Some(max),
        ShortcutAction::Digit(digit) if digit <= max => Some(digit),
        _ => None,
    }
}

#[component]
/// Star rating with hover preview and keyboard entry.
pub fn Rating(
    #[prop(into)] value: MaybeSignal<u8>,
    #[prop(default = 5)] max: u8,
    #[prop(optional)] read_only: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<u8>>,
) -> impl IntoView {
    let config = use_ui_config();
    let hover = create_rw_signal(None::<u8>);
    let shortcuts = store_value(rating_shortcuts(max));
    let shown = move || hover.get().unwrap_or_else(|| value.get()).min(max);
    let commit = move |next: u8| {
        if read_only {
            return;
        }
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(next.min(max));
        }
    };

    let stars = (1..=max)
        .map(|star| {
            let class = move || {
                classes![
                    "care-rating__star p-0.5",
                    ("text-[var(--care-color-warning)]", star <= shown()),
                    ("text-[var(--care-color-border)]", star > shown()),
                    ("cursor-pointer", !read_only)
                ]
            };
            view! {
                <span
                    class=class
                    data-care-filled=move || bool_token(star <= shown())
                    on:mouseenter=move |_| {
                        if !read_only {
                            hover.set(Some(star));
                        }
                    }
                    on:click=move |_| commit(star)
                >
                    <Icon icon=IconName::Star size />
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("care-rating inline-flex items-center", layout_class)
            role="slider"
            tabindex=if read_only { -1 } else { 0 }
            aria-label=aria_label
            aria-valuemin="0"
            aria-valuemax=max
            aria-valuenow=move || value.get()
            aria-valuetext=move || format!("{} of {max} stars", value.get().min(max))
            aria-readonly=read_only.then_some("true")
            data-care-primitive="true"
            data-care-kind="rating"
            data-care-readonly=bool_token(read_only)
            data-care-value=move || value.get()
            on:mouseleave=move |_| hover.set(None)
            on:keydown=move |ev: KeyboardEvent| {
                if read_only {
                    return;
                }
                let mode = config.with_untracked(|config| config.shortcut_mode());
                if let Some(action) = shortcuts.with_value(|table| table.dispatch(&ev, mode)) {
                    if let Some(next) = rating_step(value.get_untracked(), max, action) {
                        commit(next);
                    }
                }
            }
        >
            {stars}
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Choice rendered by [`RadioGroup`].
pub struct RadioOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Secondary line.
    pub description: Option<String>,
    /// Option cannot be chosen.
    pub disabled: bool,
}

impl RadioOption {
    /// Enabled option without description.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            disabled: false,
        }
    }
}

fn radio_mark(checked: Signal<bool>) -> impl IntoView {
    let class = move || {
        classes![
            "care-radio__mark inline-flex h-4 w-4 items-center justify-center rounded-full border-2",
            ("border-[var(--care-color-primary)]", checked.get()),
            ("border-[var(--care-color-border)]", !checked.get())
        ]
    };
    view! {
        <span class=class aria-hidden="true">
            <Show when=move || checked.get()>
                <span class="h-2 w-2 rounded-full bg-[var(--care-color-primary)]"></span>
            </Show>
        </span>
    }
}

const RADIO_ROLE: &str = "radio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Resolved state of one radio control.
pub(crate) struct RadioState {
    pub(crate) checked: bool,
    pub(crate) disabled: bool,
    pub(crate) pending: bool,
}

impl RadioState {
    pub(crate) fn class(self, base: &'static str, layout_class: Option<&'static str>) -> String {
        classes![
            base,
            ("care-radio--checked", self.checked),
            ("care-radio--pending", self.pending),
            ("opacity-50 cursor-not-allowed", self.disabled),
            layout_class
        ]
    }

    pub(crate) fn aria_checked(self) -> &'static str {
        bool_token(self.checked)
    }

    pub(crate) fn aria_disabled(self) -> Option<&'static str> {
        self.disabled.then_some("true")
    }
}

#[component]
/// Standalone radio control. Selection is reported through `on_select`; with
/// `require_confirmation` it fires on the second activation inside the confirmation window.
pub fn Radio(
    #[prop(into)] label: String,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] require_confirmation: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let confirmation = use_confirmation(require_confirmation);
    let pending = confirmation.pending();
    let checked = Signal::derive(move || checked.get());
    let activate = move || {
        if disabled.get_untracked() || checked.get_untracked() {
            return;
        }
        if confirmation.activate() {
            if let Some(on_select) = on_select.as_ref() {
                on_select.call(());
            }
        }
    };

    let state = move || RadioState {
        checked: checked.get(),
        disabled: disabled.get(),
        pending: pending.get(),
    };

    view! {
        <button
            type="button"
            role=RADIO_ROLE
            class=move || state().class("care-radio inline-flex items-center gap-2", layout_class)
            aria-checked=move || state().aria_checked()
            aria-disabled=move || state().aria_disabled()
            disabled=move || disabled.get()
            data-care-primitive="true"
            data-care-kind="radio"
            data-care-selected=move || bool_token(state().checked)
            data-care-pending=move || bool_token(state().pending)
            on:click=move |_| activate()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" && pending.get_untracked() {
                    ev.prevent_default();
                    confirmation.cancel();
                }
            }
        >
            {radio_mark(checked)}
            <span class="text-sm">{label}</span>
            <Show when=move || pending.get()>
                <span class="care-radio__confirm text-xs text-[var(--care-color-warning)]" role="status">
                    "Select again to confirm"
                </span>
            </Show>
        </button>
    }
}

#[component]
/// Radio group with roving focus (arrows, Home/End, digits in workflow mode).
///
/// With `require_confirmation` a choice is reported only when the same option is activated twice
/// inside the confirmation window; activating another option re-arms for that option.
pub fn RadioGroup(
    options: Vec<RadioOption>,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] horizontal: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] require_confirmation: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let config = use_ui_config();
    let group_id = name.unwrap_or_else(|| next_dom_id("care-radio-group"));
    let label_id = format!("{group_id}-label");
    let confirmation = use_confirmation(require_confirmation);
    let pending = confirmation.pending();
    let pending_choice = create_rw_signal(None::<String>);
    let shortcuts = store_value(choice_shortcuts());
    let options = store_value(options);
    let value = Signal::derive(move || value.get());
    let option_id = {
        let group_id = group_id.clone();
        store_value(move |index: usize| format!("{group_id}-option-{index}"))
    };

    let choose = move |index: usize| {
        if disabled.get_untracked() {
            return;
        }
        let Some(choice) = options.with_value(|options| {
            options
                .get(index)
                .filter(|option| !option.disabled)
                .map(|option| option.value.clone())
        }) else {
            return;
        };
        if pending_choice.get_untracked().as_deref() != Some(choice.as_str()) {
            confirmation.cancel();
        }
        pending_choice.set(Some(choice.clone()));
        if confirmation.activate() {
            pending_choice.set(None);
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(choice);
            }
        }
    };

    let handle_keydown = move |ev: KeyboardEvent| {
        let mode = config.with_untracked(|config| config.shortcut_mode());
        let Some(action) = shortcuts.with_value(|table| table.dispatch(&ev, mode)) else {
            return;
        };
        if action == ShortcutAction::Cancel {
            pending_choice.set(None);
            confirmation.cancel();
            return;
        }
        let (enabled, current) = options.with_value(|options| {
            let selected = value.get_untracked();
            (
                options.iter().map(|option| !option.disabled).collect::<Vec<_>>(),
                options.iter().position(|option| option.value == selected),
            )
        });
        let target = if action == ShortcutAction::Activate {
            current.or_else(|| roving_index(&enabled, None, ShortcutAction::First))
        } else {
            roving_index(&enabled, current, action)
        };
        if let Some(index) = target {
            option_id.with_value(|option_id| focus_element_by_id(&option_id(index)));
            choose(index);
        }
    };

    let items = options
        .get_value()
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let option_value = option.value.clone();
            let checked = Signal::derive(move || value.with(|value| *value == option_value));
            let armed_value = option.value.clone();
            let armed = Signal::derive(move || {
                pending.get() && pending_choice.with(|choice| choice.as_deref() == Some(armed_value.as_str()))
            });
            let option_disabled = option.disabled;
            let state = move || RadioState {
                checked: checked.get(),
                disabled: option_disabled,
                pending: armed.get(),
            };
            view! {
                <button
                    type="button"
                    role=RADIO_ROLE
                    id=option_id.with_value(|option_id| option_id(index))
                    class=move || state().class("care-radio inline-flex items-start gap-2 text-left", None)
                    tabindex=move || if checked.get() || (index == 0 && value.with(String::is_empty)) { 0 } else { -1 }
                    aria-checked=move || state().aria_checked()
                    aria-disabled=move || state().aria_disabled()
                    disabled=move || option_disabled || disabled.get()
                    data-care-selected=move || bool_token(state().checked)
                    data-care-pending=move || bool_token(state().pending)
                    data-care-value=option.value
                    on:click=move |_| choose(index)
                >
                    {radio_mark(checked)}
                    <span class="flex flex-col">
                        <span class="text-sm">{option.label}</span>
                        {option
                            .description
                            .map(|description| {
                                view! {
                                    <span class="text-xs text-[var(--care-color-text-muted)]">
                                        {description}
                                    </span>
                                }
                            })}
                    </span>
                </button>
            }
        })
        .collect_view();

    let class = classes![
        "care-radio-group flex",
        ("flex-row flex-wrap gap-4", horizontal),
        ("flex-col gap-2", !horizontal),
        layout_class
    ];

    view! {
        <div
            class=class
            role="radiogroup"
            id=group_id
            aria-labelledby=label.as_ref().map(|_| label_id.clone())
            aria-orientation=if horizontal { "horizontal" } else { "vertical" }
            aria-disabled=move || disabled.get().then_some("true")
            data-care-primitive="true"
            data-care-kind="radio-group"
            data-care-pending=move || bool_token(pending.get())
            on:keydown=handle_keydown
        >
            {label.map(|label| view! { <span id=label_id class="text-sm font-medium">{label}</span> })}
            {items}
            <Show when=move || pending.get()>
                <span class="care-radio-group__confirm text-xs text-[var(--care-color-warning)]" role="status">
                    "Select again to confirm"
                </span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pain_scale_shows_value_over_max_at_seventy_percent() {
        assert_eq!(slider_display(7.0, 0.0, 10.0, MedicalScale::Pain), "7/10");
        assert_eq!(slider_percent(7.0, 0.0, 10.0), 70.0);
        assert_eq!(pain_descriptor(7.0), "Severe");
    }

    #[test]
    fn percent_is_clamped_and_degenerate_ranges_are_zero() {
        assert_eq!(slider_percent(150.0, 0.0, 100.0), 100.0);
        assert_eq!(slider_percent(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(slider_percent(5.0, 10.0, 10.0), 0.0);
        assert_eq!(slider_display(25.0, 0.0, 50.0, MedicalScale::Percent), "50%");
        assert_eq!(slider_display(2.5, 0.0, 5.0, MedicalScale::None), "2.5");
    }

    #[test]
    fn pain_descriptors_cover_the_scale() {
        assert_eq!(pain_descriptor(0.0), "No pain");
        assert_eq!(pain_descriptor(2.0), "Mild");
        assert_eq!(pain_descriptor(5.0), "Moderate");
        assert_eq!(pain_descriptor(10.0), "Worst possible");
    }

    #[test]
    fn values_snap_to_steps_inside_the_range() {
        assert_eq!(snap_value(7.4, 0.0, 10.0, 1.0), 7.0);
        assert_eq!(snap_value(7.6, 0.0, 10.0, 0.5), 7.5);
        assert_eq!(snap_value(12.0, 0.0, 10.0, 1.0), 10.0);
        assert_eq!(snap_value(3.3, 0.0, 10.0, 0.0), 3.3);
    }

    #[test]
    fn radio_state_toggles_markers_both_ways() {
        let base = "care-radio inline-flex";
        let idle = RadioState::default();
        assert_eq!(idle.class(base, None), base);
        assert_eq!(idle.aria_checked(), "false");
        assert_eq!(idle.aria_disabled(), None);

        let checked = RadioState { checked: true, ..idle };
        assert_eq!(checked.class(base, None), "care-radio inline-flex care-radio--checked");
        assert_eq!(checked.aria_checked(), "true");

        let disabled = RadioState { disabled: true, ..idle };
        assert_eq!(disabled.aria_disabled(), Some("true"));
        assert!(disabled.class(base, None).contains("cursor-not-allowed"));

        let pending = RadioState { pending: true, ..idle };
        assert!(pending.class(base, Some("w-full")).ends_with("care-radio--pending w-full"));

        for (on, off) in [
            (checked, RadioState { checked: false, ..checked }),
            (disabled, RadioState { disabled: false, ..disabled }),
            (pending, RadioState { pending: false, ..pending }),
        ] {
            assert_eq!(on.class(base, None), on.class(base, None));
            assert_eq!(off.class(base, None), base);
            assert_eq!(off.aria_checked(), "false");
            assert_eq!(off.aria_disabled(), None);
        }
    }

    #[test]
    fn radios_expose_the_radio_role() {
        assert_eq!(RADIO_ROLE, "radio");
    }

    #[test]
    fn rating_keys_clamp_to_range() {
        assert_eq!(rating_step(5, 5, ShortcutAction::Next), Some(5));
        assert_eq!(rating_step(0, 5, ShortcutAction::Previous), Some(0));
        assert_eq!(rating_step(2, 5, ShortcutAction::Last), Some(5));
        assert_eq!(rating_step(2, 5, ShortcutAction::Digit(4)), Some(4));
        assert_eq!(rating_step(2, 5, ShortcutAction::Digit(7)), None);
        assert_eq!(rating_step(2, 5, ShortcutAction::Submit), None);
    }
}
