use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::*;
use crate::calendar::{month_grid, month_title, shift_month, time_options, DateBounds, WEEKDAY_LABELS};
use crate::time::today;

/// Wiring a [`FormField`] hands to the control rendered inside it.
#[derive(Clone)]
pub(crate) struct FieldContext {
    control_id: String,
    described_by: Signal<Option<String>>,
    invalid: Signal<bool>,
    required: bool,
}

/// Control-side view of the surrounding [`FormField`], merged with the control's own props.
pub(crate) struct FieldBinding {
    pub(crate) id: Option<String>,
    pub(crate) described_by: Signal<Option<String>>,
    pub(crate) invalid: Signal<bool>,
    pub(crate) required: bool,
}

pub(crate) fn bind_field(id: Option<String>, invalid: MaybeSignal<bool>, required: bool) -> FieldBinding {
    match use_context::<FieldContext>() {
        Some(field) => {
            let field_invalid = field.invalid;
            FieldBinding {
                id: id.or(Some(field.control_id)),
                described_by: field.described_by,
                invalid: Signal::derive(move || invalid.get() || field_invalid.get()),
                required: required || field.required,
            }
        }
        None => FieldBinding {
            id,
            described_by: Signal::derive(|| None),
            invalid: Signal::derive(move || invalid.get()),
            required,
        },
    }
}

/// Joins the ids of the hint and error messages that currently describe a control.
pub(crate) fn describe_ids(hint_id: Option<&str>, error_id: Option<&str>) -> Option<String> {
    let ids: Vec<&str> = [hint_id, error_id].into_iter().flatten().collect();
    (!ids.is_empty()).then(|| ids.join(" "))
}

#[component]
/// Label, hint, and error wrapper for one form control.
///
/// The control rendered as a child picks up the generated id, `aria-describedby`,
/// `aria-invalid`, and `required` automatically.
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let control_id = id.unwrap_or_else(|| next_dom_id("care-field"));
    let hint_id = hint.as_ref().map(|_| format!("{control_id}-hint"));
    let error_id = format!("{control_id}-error");

    let invalid = Signal::derive(move || error.with(Option::is_some));
    let described_by = {
        let hint_id = hint_id.clone();
        let error_id = error_id.clone();
        Signal::derive(move || {
            describe_ids(
                hint_id.as_deref(),
                invalid.get().then_some(error_id.as_str()),
            )
        })
    };
    provide_context(FieldContext {
        control_id: control_id.clone(),
        described_by,
        invalid,
        required,
    });

    view! {
        <div
            class=merge_layout_class("care-form-field flex flex-col gap-1", layout_class)
            data-care-primitive="true"
            data-care-kind="form-field"
            data-care-invalid=move || bool_token(invalid.get())
            data-care-required=bool_token(required)
        >
            <label for=control_id class="care-form-field__label text-sm font-medium">
                {label}
                {required
                    .then(|| {
                        view! {
                            <span class="text-[var(--care-color-danger)] ml-1" aria-hidden="true">
                                "*"
                            </span>
                        }
                    })}
            </label>
            {children()}
            {hint
                .zip(hint_id)
                .map(|(hint, hint_id)| {
                    view! {
                        <p id=hint_id class="care-form-field__hint text-xs text-[var(--care-color-text-muted)]">
                            {hint}
                        </p>
                    }
                })}
            <Show when=move || invalid.get()>
                <p
                    id=error_id.clone()
                    role="alert"
                    class="care-form-field__error text-xs text-[var(--care-color-danger)]"
                >
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

fn initial_month(value: Option<NaiveDateTime>) -> (i32, u32) {
    use chrono::Datelike;

    let date = value.map(|value| value.date()).unwrap_or_else(today);
    (date.year(), date.month())
}

/// Combines a picked day with the time already chosen, or the earliest offered time.
pub(crate) fn pick_datetime(
    date: NaiveDate,
    current: Option<NaiveDateTime>,
    step_minutes: u32,
) -> NaiveDateTime {
    let time = current
        .map(|value| value.time())
        .or_else(|| time_options(step_minutes).first().copied())
        .unwrap_or_default();
    date.and_time(time)
}

#[component]
/// Date picker with a month grid and an optional time select.
pub fn DateTimePicker(
    #[prop(optional, into)] value: MaybeSignal<Option<NaiveDateTime>>,
    #[prop(optional)] with_time: bool,
    #[prop(default = 30)] time_step_minutes: u32,
    #[prop(optional)] bounds: DateBounds,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<NaiveDateTime>>,
) -> impl IntoView {
    let config = use_ui_config();
    let field = bind_field(None, MaybeSignal::Static(false), false);
    let open = create_rw_signal(false);
    let view_month = create_rw_signal(initial_month(value.get_untracked()));
    let bounds = store_value(bounds);
    let popover_id = next_dom_id("care-date-picker");
    let trigger_controls = popover_id.clone();
    let placeholder = placeholder.unwrap_or_else(|| "Select date".to_string());

    let cells = Signal::derive(move || {
        let (year, month) = view_month.get();
        bounds.with_value(|bounds| month_grid(year, month, bounds, today())).unwrap_or_else(|err| {
            logging::warn!("date picker could not build month grid: {err}");
            Vec::new()
        })
    });
    let title = move || {
        let (year, month) = view_month.get();
        month_title(year, month).unwrap_or_default()
    };
    let display = move || {
        let style = config.with(|config| config.date_style);
        match value.get() {
            Some(value) if with_time => care_model::format_datetime(value, style),
            Some(value) => care_model::format_day(value.date(), style),
            None => placeholder.clone(),
        }
    };

    let step = move |delta: i32| {
        let (year, month) = view_month.get_untracked();
        match shift_month(year, month, delta) {
            Ok(next) => view_month.set(next),
            Err(err) => logging::warn!("date picker month navigation failed: {err}"),
        }
    };
    let choose_day = move |date: NaiveDate| {
        let next = pick_datetime(date, value.get_untracked(), time_step_minutes);
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(next);
        }
        if !with_time {
            open.set(false);
        }
    };
    let choose_time = move |raw: String| {
        let Some(current) = value.get_untracked() else {
            return;
        };
        match NaiveTime::parse_from_str(&raw, "%H:%M") {
            Ok(time) => {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(current.date().and_time(time));
                }
            }
            Err(err) => logging::warn!("date picker ignored time `{raw}`: {err}"),
        }
    };

    let selected_date = move || value.get().map(|value| value.date());
    let time_choices = store_value(if with_time {
        time_options(time_step_minutes)
    } else {
        Vec::new()
    });

    view! {
        <div
            class=merge_layout_class("care-date-time-picker relative inline-block", layout_class)
            data-care-primitive="true"
            data-care-kind="date-time-picker"
            data-care-open=move || bool_token(open.get())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" && open.get_untracked() {
                    ev.prevent_default();
                    open.set(false);
                }
            }
        >
            <button
                type="button"
                id=field.id
                class="care-date-time-picker__trigger inline-flex items-center gap-2 h-10 px-3 rounded-[var(--care-radius-md)] border border-[var(--care-color-border)]"
                aria-label=aria_label
                aria-haspopup="dialog"
                aria-expanded=move || open.get().to_string()
                aria-controls=trigger_controls
                aria-describedby=move || field.described_by.get()
                aria-invalid=move || field.invalid.get().then_some("true")
                disabled=move || disabled.get()
                data-care-disabled=move || bool_token(disabled.get())
                on:click=move |_| open.update(|open| *open = !*open)
            >
                <Icon icon=IconName::Calendar size=IconSize::Sm />
                <span>{display}</span>
            </button>
            <Show when=move || open.get()>
                <div
                    id=popover_id.clone()
                    role="dialog"
                    aria-modal="false"
                    aria-label="Choose date"
                    class="care-date-time-picker__popover absolute z-20 mt-2 p-3 rounded-[var(--care-radius-lg)] bg-[var(--care-color-surface)] shadow-[var(--care-shadow-overlay)]"
                >
                    <div class="flex items-center justify-between mb-2">
                        <button
                            type="button"
                            class="care-date-time-picker__nav p-1"
                            aria-label="Previous month"
                            on:click=move |_| step(-1)
                        >
                            <Icon icon=IconName::ChevronLeft size=IconSize::Sm />
                        </button>
                        <span class="font-medium" aria-live="polite">{title}</span>
                        <button
                            type="button"
                            class="care-date-time-picker__nav p-1"
                            aria-label="Next month"
                            on:click=move |_| step(1)
                        >
                            <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                        </button>
                    </div>
                    <div role="grid" class="grid grid-cols-7 gap-1 text-center">
                        {WEEKDAY_LABELS
                            .iter()
                            .map(|label| {
                                view! {
                                    <span role="columnheader" class="text-xs text-[var(--care-color-text-muted)]">
                                        {*label}
                                    </span>
                                }
                            })
                            .collect_view()}
                        <For
                            each=move || cells.get()
                            key=|cell| *cell
                            let:cell
                        >
                            {
                                let selected = move || selected_date() == Some(cell.date);
                                let class = move || {
                                    classes![
                                        "care-calendar-cell h-8 w-8 rounded-full text-sm",
                                        ("text-[var(--care-color-text-muted)]", !cell.in_month),
                                        ("ring-1 ring-[var(--care-color-primary)]", cell.is_today),
                                        ("opacity-40 cursor-not-allowed", cell.disabled),
                                        ("bg-[var(--care-color-primary)] text-white", selected())
                                    ]
                                };
                                view! {
                                    <button
                                        type="button"
                                        role="gridcell"
                                        class=class
                                        disabled=cell.disabled
                                        aria-selected=move || selected().to_string()
                                        aria-current=cell.is_today.then_some("date")
                                        data-care-in-month=bool_token(cell.in_month)
                                        data-care-today=bool_token(cell.is_today)
                                        data-care-disabled=bool_token(cell.disabled)
                                        data-care-date=cell.date.format("%Y-%m-%d").to_string()
                                        on:click=move |_| choose_day(cell.date)
                                    >
                                        {chrono::Datelike::day(&cell.date)}
                                    </button>
                                }
                            }
                        </For>
                    </div>
                    {with_time
                        .then(|| {
                            view! {
                                <select
                                    class="care-date-time-picker__time mt-2 w-full h-9 rounded-[var(--care-radius-md)] border border-[var(--care-color-border)]"
                                    aria-label="Time"
                                    disabled=move || value.with(Option::is_none)
                                    prop:value=move || {
                                        value
                                            .get()
                                            .map(|value| value.time().format("%H:%M").to_string())
                                            .unwrap_or_default()
                                    }
                                    on:change=move |ev| choose_time(event_target_value(&ev))
                                >
                                    {time_choices
                                        .get_value()
                                        .into_iter()
                                        .map(|time| {
                                            let raw = time.format("%H:%M").to_string();
                                            view! {
                                                <option value=raw>{care_model::format_time(time)}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            }
                        })}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn described_by_lists_present_messages_in_order() {
        assert_eq!(describe_ids(None, None), None);
        assert_eq!(describe_ids(Some("f-hint"), None).as_deref(), Some("f-hint"));
        assert_eq!(
            describe_ids(Some("f-hint"), Some("f-error")).as_deref(),
            Some("f-hint f-error")
        );
    }

    #[test]
    fn picking_a_day_keeps_the_chosen_time() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 14).expect("date");
        let current = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(14, 30, 0))
            .expect("datetime");
        assert_eq!(
            pick_datetime(day, Some(current), 30),
            day.and_hms_opt(14, 30, 0).expect("datetime")
        );
        assert_eq!(
            pick_datetime(day, None, 30),
            day.and_hms_opt(0, 0, 0).expect("datetime")
        );
        assert_eq!(
            pick_datetime(day, None, 0),
            day.and_hms_opt(0, 0, 0).expect("datetime")
        );
    }
}
