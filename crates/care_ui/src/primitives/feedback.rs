use super::*;
use crate::timing::TimeoutSlot;

const STATUS_ROLE: &str = "status";
const PROGRESS_ROLE: &str = "progressbar";
const TOOLTIP_ROLE: &str = "tooltip";

fn spinner_label(label: Option<String>) -> String {
    label.unwrap_or_else(|| "Loading".to_string())
}

#[component]
/// Indeterminate busy indicator announced through a status region.
pub fn Spinner(
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let dimension = match size {
        IconSize::Xs | IconSize::Sm => "h-4 w-4",
        IconSize::Md => "h-5 w-5",
        IconSize::Lg => "h-8 w-8",
        IconSize::Xl => "h-12 w-12",
    };
    view! {
        <span
            class=merge_layout_class("care-spinner inline-flex items-center gap-2", layout_class)
            role=STATUS_ROLE
            aria-live="polite"
            data-care-primitive="true"
            data-care-kind="spinner"
        >
            <span
                class=classes![
                    "inline-block animate-spin rounded-full border-2 border-current border-t-transparent",
                    dimension
                ]
                aria-hidden="true"
            ></span>
            <span class="sr-only">{spinner_label(label)}</span>
        </span>
    }
}

/// Completion of `value` out of `max` as a percentage clamped to `0..=100`.
pub fn progress_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// `aria-valuenow` for a bar: `value` clamped into `0..=max`.
fn progress_value_now(value: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, max.max(0.0))
}

#[component]
/// Determinate progress bar.
pub fn ProgressBar(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(default = 100.0)] max: f64,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = Tone::Primary)] tone: Tone,
    #[prop(optional)] show_value: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let percent = Signal::derive(move || progress_percent(value.get(), max));
    let clamped = move || progress_value_now(value.get(), max);
    let aria_label = label.clone();

    view! {
        <div
            class=merge_layout_class("care-progress flex flex-col gap-1", layout_class)
            data-care-primitive="true"
            data-care-kind="progress"
            data-care-tone=tone.token()
            data-care-complete=move || bool_token(percent.get() >= 100.0)
        >
            {(label.is_some() || show_value)
                .then(|| {
                    view! {
                        <div class="flex justify-between text-xs">
                            <span>{label.clone()}</span>
                            {show_value
                                .then(|| {
                                    view! {
                                        <span class="tabular-nums">
                                            {move || format!("{:.0}%", percent.get())}
                                        </span>
                                    }
                                })}
                        </div>
                    }
                })}
            <div
                class="h-2 w-full overflow-hidden rounded-full bg-[var(--care-color-surface-muted)]"
                role=PROGRESS_ROLE
                aria-label=aria_label
                aria-valuemin="0"
                aria-valuemax=max
                aria-valuenow=clamped
            >
                <div
                    class=classes!["care-progress__bar h-full rounded-full transition-all", tone.classes()]
                    style=move || format!("width:{:.2}%", percent.get())
                ></div>
            </div>
        </div>
    }
}

fn alert_role(tone: Tone) -> &'static str {
    match tone {
        Tone::Warning | Tone::Danger | Tone::Critical => "alert",
        _ => STATUS_ROLE,
    }
}

fn alert_icon(tone: Tone) -> IconName {
    match tone {
        Tone::Success => IconName::Check,
        Tone::Warning | Tone::Danger => IconName::Alert,
        Tone::Critical => IconName::Emergency,
        _ => IconName::Info,
    }
}

#[component]
/// Inline message banner. Urgent tones use `role="alert"`, others a polite status region.
pub fn Alert(
    #[prop(default = Tone::Info)] tone: Tone,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] dismissible: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let dismissed = create_rw_signal(false);
    let title = store_value(title);
    let children = store_value(children);

    view! {
        <Show when=move || !dismissed.get()>
            <div
                class=classes![
                    "care-alert flex items-start gap-3 rounded-md p-3",
                    tone.classes(),
                    layout_class
                ]
                role=alert_role(tone)
                data-care-primitive="true"
                data-care-kind="alert"
                data-care-tone=tone.token()
            >
                <Icon icon=alert_icon(tone) size=IconSize::Md />
                <div class="flex flex-1 flex-col gap-1">
                    {title
                        .get_value()
                        .map(|title| view! { <p class="font-semibold">{title}</p> })}
                    <div class="text-sm">{children.with_value(|children| children())}</div>
                </div>
                {dismissible
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="care-alert__dismiss rounded p-1 hover:bg-black/5"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    dismissed.set(true);
                                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                                        on_dismiss.call(());
                                    }
                                }
                            >
                                <Icon icon=IconName::Close size=IconSize::Sm />
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side of the trigger a [`Tooltip`] opens on.
pub enum TooltipPlacement {
    /// Above the trigger.
    #[default]
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl TooltipPlacement {
    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl ClassVariant for TooltipPlacement {
    fn classes(self) -> &'static str {
        match self {
            Self::Top => "bottom-full left-1/2 mb-2 -translate-x-1/2",
            Self::Bottom => "top-full left-1/2 mt-2 -translate-x-1/2",
            Self::Left => "right-full top-1/2 mr-2 -translate-y-1/2",
            Self::Right => "left-full top-1/2 ml-2 -translate-y-1/2",
        }
    }
}

#[component]
/// Hover/focus tooltip. Opening waits for the configured show delay and closing for the hide
/// delay; each new pointer or focus transition replaces the pending timeout.
pub fn Tooltip(
    #[prop(into)] content: MaybeSignal<String>,
    #[prop(default = TooltipPlacement::Top)] placement: TooltipPlacement,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let config = use_ui_config();
    let visible = create_rw_signal(false);
    let pending = TimeoutSlot::new();
    let tooltip_id = next_dom_id("care-tooltip");
    let described_by = tooltip_id.clone();
    let content = Signal::derive(move || content.get());

    let show = move || {
        let delay = config.with_untracked(|config| config.tooltip_show_delay());
        pending.schedule(delay, move || {
            visible.try_set(true);
        });
    };
    let hide = move || {
        let delay = config.with_untracked(|config| config.tooltip_hide_delay());
        pending.schedule(delay, move || {
            visible.try_set(false);
        });
    };

    view! {
        <span
            class=merge_layout_class("care-tooltip relative inline-flex", layout_class)
            aria-describedby=move || visible.get().then(|| described_by.clone())
            data-care-primitive="true"
            data-care-kind="tooltip"
            data-care-placement=placement.token()
            data-care-open=move || bool_token(visible.get())
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
            on:focusin=move |_| show()
            on:focusout=move |_| hide()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" && visible.get_untracked() {
                    pending.clear();
                    visible.set(false);
                }
            }
        >
            {children()}
            <Show when=move || visible.get()>
                <span
                    id=tooltip_id.clone()
                    role=TOOLTIP_ROLE
                    class=classes![
                        "care-tooltip__bubble pointer-events-none absolute z-50 whitespace-nowrap rounded bg-[var(--care-color-text)] px-2 py-1 text-xs text-[var(--care-color-surface)]",
                        placement.classes()
                    ]
                >
                    {move || content.get()}
                </span>
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn progress_is_clamped_and_zero_for_empty_ranges() {
        assert_eq!(progress_percent(25.0, 50.0), 50.0);
        assert_eq!(progress_percent(120.0, 100.0), 100.0);
        assert_eq!(progress_percent(-4.0, 100.0), 0.0);
        assert_eq!(progress_percent(3.0, 0.0), 0.0);
        assert_eq!(progress_percent(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn urgent_alerts_interrupt_and_others_are_polite() {
        assert_eq!(alert_role(Tone::Danger), "alert");
        assert_eq!(alert_role(Tone::Critical), "alert");
        assert_eq!(alert_role(Tone::Info), "status");
        assert_eq!(alert_role(Tone::Success), "status");
        assert_eq!(alert_icon(Tone::Critical), IconName::Emergency);
    }

    #[test]
    fn minimal_props_expose_documented_roles() {
        assert_eq!(alert_role(Tone::Info), STATUS_ROLE);
        assert_eq!(spinner_label(None), "Loading");
        assert_eq!(spinner_label(Some("Saving chart".to_string())), "Saving chart");
        assert_eq!(PROGRESS_ROLE, "progressbar");
        assert_eq!(TOOLTIP_ROLE, "tooltip");
        assert_eq!(progress_value_now(40.0, 100.0), 40.0);
        assert_eq!(progress_value_now(140.0, 100.0), 100.0);
        assert_eq!(progress_value_now(f64::NAN, 100.0), 0.0);
        assert_eq!(progress_value_now(5.0, -1.0), 0.0);
    }

    #[test]
    fn tooltip_placements_position_outside_the_trigger() {
        assert_eq!(TooltipPlacement::default(), TooltipPlacement::Top);
        assert!(TooltipPlacement::Bottom.classes().contains("top-full"));
        assert_eq!(TooltipPlacement::Right.token(), "right");
    }
}
