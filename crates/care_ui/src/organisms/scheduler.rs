use chrono::{NaiveDate, NaiveDateTime};

use super::*;
use crate::calendar::DateBounds;
use care_model::{
    appointments_on, day_slots, format_day, format_time, providers, Appointment,
    AppointmentStatus, SlotWindow, TimeSlot,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Slot chosen in an [`AppointmentScheduler`].
pub struct BookingRequest {
    /// Slot start.
    pub start: NaiveDateTime,
    /// Slot end.
    pub end: NaiveDateTime,
    /// Provider filter active when booking, if any.
    pub provider: Option<String>,
}

pub(crate) fn appointment_tone(status: AppointmentStatus) -> Tone {
    match status {
        AppointmentStatus::Scheduled => Tone::Info,
        AppointmentStatus::CheckedIn => Tone::Primary,
        AppointmentStatus::Completed => Tone::Success,
        AppointmentStatus::Cancelled => Tone::Muted,
        AppointmentStatus::NoShow => Tone::Warning,
    }
}

/// Appointments on `date` for `provider` (all providers when `None`), by start time.
pub(crate) fn visible_appointments(
    appointments: &[Appointment],
    date: NaiveDate,
    provider: Option<&str>,
) -> Vec<Appointment> {
    appointments_on(appointments, date)
        .into_iter()
        .filter(|appointment| provider.map_or(true, |provider| appointment.provider == provider))
        .collect()
}

fn slot_label(slot: &TimeSlot) -> String {
    format!("{} – {}", format_time(slot.start.time()), format_time(slot.end.time()))
}

#[component]
/// Day scheduler: date picker, provider filter, bookable slot grid, and the day's appointments.
pub fn AppointmentScheduler(
    #[prop(into)] appointments: MaybeSignal<Vec<Appointment>>,
    #[prop(optional)] window: SlotWindow,
    #[prop(optional)] bounds: DateBounds,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_book: Option<Callback<BookingRequest>>,
) -> impl IntoView {
    let config = use_ui_config();
    let date = create_rw_signal(today());
    let provider = create_rw_signal(None::<String>);
    let chosen = create_rw_signal(None::<TimeSlot>);
    let appointments = Signal::derive(move || appointments.get());

    let slots = Signal::derive(move || {
        let date = date.get();
        provider.with(|provider| {
            appointments.with(|appointments| day_slots(date, window, appointments, provider.as_deref()))
        })
    });
    let day = Signal::derive(move || {
        let date = date.get();
        provider.with(|provider| {
            appointments.with(|appointments| visible_appointments(appointments, date, provider.as_deref()))
        })
    });
    let provider_options = Signal::derive(move || {
        std::iter::once(SelectOption::new("", "All providers"))
            .chain(
                appointments
                    .with(|appointments| providers(appointments))
                    .into_iter()
                    .map(|name| SelectOption::new(name.clone(), name)),
            )
            .collect::<Vec<_>>()
    });
    let picker_value = Signal::derive(move || date.get().and_hms_opt(0, 0, 0));

    let book = move |_: MouseEvent| {
        let Some(slot) = chosen.get_untracked() else {
            return;
        };
        if let Some(on_book) = on_book.as_ref() {
            on_book.call(BookingRequest {
                start: slot.start,
                end: slot.end,
                provider: provider.get_untracked(),
            });
        }
        chosen.set(None);
    };

    view! {
        <Card layout_class=layout_class.unwrap_or("care-appointment-scheduler") title="Schedule appointment">
            <div class="flex flex-col gap-4" data-care-kind="appointment-scheduler">
                <div class="flex flex-wrap items-end gap-3">
                    <FormField label="Date">
                        <DateTimePicker
                            value=picker_value
                            bounds=bounds
                            aria_label="Appointment date"
                            on_change=Callback::new(move |picked: NaiveDateTime| {
                                date.set(picked.date());
                                chosen.set(None);
                            })
                        />
                    </FormField>
                    <FormField label="Provider">
                        <Select
                            options=provider_options
                            value=Signal::derive(move || provider.get().unwrap_or_default())
                            on_change=Callback::new(move |name: String| {
                                provider.set((!name.is_empty()).then_some(name));
                                chosen.set(None);
                            })
                        />
                    </FormField>
                </div>
                <section aria-label="Available times" class="flex flex-col gap-2">
                    <Heading level=HeadingLevel::H4>
                        {move || format_day(date.get(), config.with(|config| config.date_style))}
                    </Heading>
                    <Show
                        when=move || slots.with(|slots| !slots.is_empty())
                        fallback=|| view! { <EmptyState title="No bookable hours" icon=IconName::Calendar /> }
                    >
                        <div class="grid grid-cols-2 gap-2 sm:grid-cols-4" role="group" aria-label="Time slots">
                            <For each=move || slots.get() key=|slot| (slot.start, slot.available) let:slot>
                                {
                                    let selected = move || chosen.get().is_some_and(|chosen| chosen.start == slot.start);
                                    let unavailable = !slot.available;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                classes![
                                                    "care-slot rounded-md border px-2 py-1.5 text-sm",
                                                    ("border-[var(--care-color-primary)] bg-[var(--care-color-primary)] text-white", selected()),
                                                    ("border-[var(--care-color-border)]", !selected()),
                                                    ("cursor-not-allowed opacity-40 line-through", unavailable)
                                                ]
                                            }
                                            disabled=unavailable
                                            aria-pressed=move || selected().to_string()
                                            data-care-available=bool_token(slot.available)
                                            on:click=move |_| chosen.set(Some(slot))
                                        >
                                            {slot_label(&slot)}
                                        </button>
                                    }
                                }
                            </For>
                        </div>
                    </Show>
                    <div class="flex justify-end">
                        <Button
                            leading_icon=IconName::Calendar
                            disabled=Signal::derive(move || chosen.get().is_none())
                            on_click=Callback::new(book)
                        >
                            "Book slot"
                        </Button>
                    </div>
                </section>
                <section aria-label="Booked appointments" class="flex flex-col gap-2">
                    <Heading level=HeadingLevel::H4>"Booked"</Heading>
                    <Show
                        when=move || day.with(|day| !day.is_empty())
                        fallback=|| view! { <Text tone=Tone::Muted>"No appointments on this day"</Text> }
                    >
                        <ul class="flex flex-col gap-2">
                            <For
                                each=move || day.get()
                                key=|appointment| (appointment.id.clone(), appointment.status)
                                let:appointment
                            >
                                <li
                                    class="care-appointment flex items-center justify-between rounded-md border border-[var(--care-color-border)] p-2"
                                    data-care-status=appointment.status.token()
                                >
                                    <div class="flex flex-col">
                                        <span class="font-medium">
                                            {format!(
                                                "{} – {}",
                                                format_time(appointment.start.time()),
                                                format_time(appointment.end().time()),
                                            )}
                                        </span>
                                        <Text role=TextRole::Caption tone=Tone::Muted>
                                            {format!("{} · {}", appointment.patient_name, appointment.provider)}
                                        </Text>
                                        {(!appointment.reason.is_empty())
                                            .then(|| view! { <Text role=TextRole::Caption>{appointment.reason.clone()}</Text> })}
                                    </div>
                                    <Badge tone=appointment_tone(appointment.status)>{appointment.status.label()}</Badge>
                                </li>
                            </For>
                        </ul>
                    </Show>
                </section>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("timestamp")
    }

    fn appointment(id: &str, provider: &str, start: NaiveDateTime) -> Appointment {
        Appointment {
            id: id.to_string(),
            patient_name: "Pat".to_string(),
            provider: provider.to_string(),
            start,
            duration_minutes: 30,
            reason: String::new(),
            location: None,
            status: AppointmentStatus::Scheduled,
        }
    }

    #[test]
    fn day_list_respects_provider_filter() {
        let appointments = vec![
            appointment("a", "Dr. Grey", at(2, 10)),
            appointment("b", "Dr. House", at(2, 9)),
            appointment("c", "Dr. Grey", at(3, 9)),
        ];
        let date = at(2, 0).date();
        let all = visible_appointments(&appointments, date, None);
        assert_eq!(all.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["b", "a"]);
        let grey = visible_appointments(&appointments, date, Some("Dr. Grey"));
        assert_eq!(grey.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn slot_labels_span_start_to_end() {
        let slot = TimeSlot {
            start: at(2, 9),
            end: at(2, 9) + chrono::Duration::minutes(30),
            available: true,
        };
        assert_eq!(slot_label(&slot), "9:00 AM – 9:30 AM");
        assert_eq!(
            NaiveTime::from_hms_opt(9, 30, 0).map(format_time).as_deref(),
            Some("9:30 AM")
        );
    }

    #[test]
    fn statuses_have_distinct_tones() {
        assert_eq!(appointment_tone(AppointmentStatus::Cancelled), Tone::Muted);
        assert_eq!(appointment_tone(AppointmentStatus::NoShow), Tone::Warning);
    }
}
