use super::*;
use care_model::{
    adherence_percent, doses_on, filter_medications, format_time, status_counts, DoseEvent,
    DoseStatus, Medication, MedicationFilter, MedicationStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Order change requested from the medication list.
pub enum MedicationAction {
    /// Hold an active medication.
    Pause,
    /// Restart a paused medication.
    Resume,
    /// Stop the medication. Always confirmed.
    Discontinue,
}

impl MedicationAction {
    fn label(self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Discontinue => "Discontinue",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Pause => IconName::Pause,
            Self::Resume => IconName::Play,
            Self::Discontinue => IconName::Stop,
        }
    }

    fn variant(self) -> ButtonVariant {
        match self {
            Self::Pause | Self::Resume => ButtonVariant::Secondary,
            Self::Discontinue => ButtonVariant::Danger,
        }
    }
}

/// Actions offered for a medication in `status`. Finished orders offer none.
pub fn medication_actions(status: MedicationStatus) -> Vec<MedicationAction> {
    match status {
        MedicationStatus::Active => vec![MedicationAction::Pause, MedicationAction::Discontinue],
        MedicationStatus::Paused => vec![MedicationAction::Resume, MedicationAction::Discontinue],
        MedicationStatus::Discontinued | MedicationStatus::Completed => Vec::new(),
    }
}

pub(crate) fn medication_status_tone(status: MedicationStatus) -> Tone {
    match status {
        MedicationStatus::Active => Tone::Success,
        MedicationStatus::Paused => Tone::Warning,
        MedicationStatus::Discontinued => Tone::Danger,
        MedicationStatus::Completed => Tone::Muted,
    }
}

fn medication_row(
    medication: Medication,
    on_action: Option<Callback<(String, MedicationAction)>>,
) -> impl IntoView {
    let tone = medication_status_tone(medication.status);
    let subtitle = [
        Some(medication.dosage.clone()),
        (!medication.route.is_empty()).then(|| medication.route.clone()),
        Some(medication.frequency.clone()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    let id = medication.id.clone();
    let actions = medication_actions(medication.status)
        .into_iter()
        .map(|action| {
            let id = id.clone();
            let confirm = action == MedicationAction::Discontinue;
            view! {
                <Button
                    variant=action.variant()
                    size=ButtonSize::Sm
                    leading_icon=action.icon()
                    require_confirmation=confirm
                    confirm_label=format!("Press again to {} {}", action.label().to_lowercase(), medication.name)
                    on_click=Callback::new(move |_: MouseEvent| {
                        if let Some(on_action) = on_action.as_ref() {
                            on_action.call((id.clone(), action));
                        }
                    })
                >
                    {action.label()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <li
            class="care-medication flex items-center justify-between gap-4 border-b border-[var(--care-color-border)] py-3 last:border-b-0"
            data-care-medication=medication.id.clone()
            data-care-status=medication.status.token()
        >
            <div class="flex min-w-0 flex-col">
                <div class="flex items-center gap-2">
                    <span class="font-medium">{medication.name.clone()}</span>
                    <Badge tone dot=true>{medication.status.label()}</Badge>
                </div>
                <Text role=TextRole::Caption tone=Tone::Muted>{subtitle}</Text>
                {medication
                    .prescriber
                    .clone()
                    .map(|prescriber| {
                        view! { <Text role=TextRole::Caption tone=Tone::Muted>{format!("Prescribed by {prescriber}")}</Text> }
                    })}
                {medication
                    .instructions
                    .clone()
                    .map(|instructions| view! { <Text role=TextRole::Caption>{instructions}</Text> })}
            </div>
            <div class="flex shrink-0 gap-2">{actions}</div>
        </li>
    }
}

#[component]
/// Searchable, status-filterable medication list with per-status counts and order actions.
pub fn MedicationManagement(
    #[prop(into)] medications: MaybeSignal<Vec<Medication>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_action: Option<Callback<(String, MedicationAction)>>,
    #[prop(optional)] on_add: Option<Callback<()>>,
) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let status = create_rw_signal(None::<MedicationStatus>);
    let medications = Signal::derive(move || medications.get());
    let counts = Signal::derive(move || medications.with(|medications| status_counts(medications)));
    let filtered = Signal::derive(move || {
        let filter = MedicationFilter {
            query: query.get(),
            status: status.get(),
        };
        medications.with(|medications| filter_medications(medications, &filter))
    });
    let status_options = Signal::derive(move || {
        let counts = counts.get();
        let total = medications.with(Vec::len);
        std::iter::once(SelectOption::new("", format!("All statuses ({total})")))
            .chain(MedicationStatus::ALL.into_iter().map(|status| {
                SelectOption::new(status.token(), format!("{} ({})", status.label(), counts.get(status)))
            }))
            .collect::<Vec<_>>()
    });
    let status_value = Signal::derive(move || {
        status
            .get()
            .map(|status| status.token().to_string())
            .unwrap_or_default()
    });

    view! {
        <Card layout_class=layout_class.unwrap_or("care-medication-management") title="Medications">
            <div class="flex flex-col gap-3" data-care-kind="medication-management">
                <div class="flex flex-wrap items-center gap-2">
                    <TextInput
                        value=query
                        placeholder="Search medications"
                        aria_label="Search medications"
                        leading_icon=IconName::Search
                        clearable=true
                        layout_class="flex-1"
                        on_input=Callback::new(move |value: String| query.set(value))
                        on_clear=Callback::new(move |_| query.set(String::new()))
                    />
                    <Select
                        options=status_options
                        value=status_value
                        aria_label="Filter by status"
                        on_change=Callback::new(move |token: String| status.set(MedicationStatus::from_token(&token)))
                    />
                    {on_add
                        .map(|on_add| {
                            view! {
                                <Button
                                    leading_icon=IconName::Plus
                                    on_click=Callback::new(move |_: MouseEvent| on_add.call(()))
                                >
                                    "Add medication"
                                </Button>
                            }
                        })}
                </div>
                <div class="flex flex-wrap gap-2" aria-label="Status counts">
                    {MedicationStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <Badge tone=medication_status_tone(status)>
                                    {status.label()}
                                    ": "
                                    {move || counts.get().get(status)}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>
                <Show
                    when=move || filtered.with(|filtered| !filtered.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                title="No medications match"
                                description="Adjust the search or status filter."
                                icon=IconName::Pill
                            />
                        }
                    }
                >
                    <ul class="flex flex-col" aria-label="Medication list">
                        <For
                            each=move || filtered.get()
                            key=|medication| (medication.id.clone(), medication.status)
                            let:medication
                        >
                            {medication_row(medication, on_action)}
                        </For>
                    </ul>
                </Show>
            </div>
        </Card>
    }
}

/// `(taken, total)` for a day's doses.
pub(crate) fn dose_summary(doses: &[DoseEvent]) -> (usize, usize) {
    let taken = doses
        .iter()
        .filter(|dose| dose.status == DoseStatus::Taken)
        .count();
    (taken, doses.len())
}

pub(crate) fn dose_tone(status: DoseStatus) -> Tone {
    match status {
        DoseStatus::Scheduled => Tone::Info,
        DoseStatus::Taken => Tone::Success,
        DoseStatus::Missed => Tone::Danger,
        DoseStatus::Skipped => Tone::Muted,
    }
}

fn dose_label(status: DoseStatus) -> &'static str {
    match status {
        DoseStatus::Scheduled => "Due",
        DoseStatus::Taken => "Taken",
        DoseStatus::Missed => "Missed",
        DoseStatus::Skipped => "Skipped",
    }
}

#[component]
/// Today's dose schedule with taken/missed marking and an adherence bar over all supplied doses.
pub fn MedicationTracker(
    #[prop(into)] medications: MaybeSignal<Vec<Medication>>,
    #[prop(into)] doses: MaybeSignal<Vec<DoseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_mark: Option<Callback<(DoseEvent, DoseStatus)>>,
) -> impl IntoView {
    let on = today();
    let medications = Signal::derive(move || medications.get());
    let doses = Signal::derive(move || doses.get());
    let todays = Signal::derive(move || doses.with(|doses| doses_on(doses, on)));
    let adherence = Signal::derive(move || doses.with(|doses| adherence_percent(doses)));
    let medication_for = move |id: &str| {
        medications.with_untracked(|medications| {
            medications
                .iter()
                .find(|medication| medication.id == id)
                .map(|medication| (medication.name.clone(), medication.dosage.clone()))
        })
    };

    let mark = move |dose: DoseEvent, status: DoseStatus| {
        Callback::new(move |_: MouseEvent| {
            if let Some(on_mark) = on_mark.as_ref() {
                on_mark.call((dose.clone(), status));
            }
        })
    };

    view! {
        <Card layout_class=layout_class.unwrap_or("care-medication-tracker") title="Today's doses">
            <div class="flex flex-col gap-3" data-care-kind="medication-tracker">
                <div class="flex items-center justify-between text-sm">
                    <span>
                        {move || {
                            let (taken, total) = todays.with(|todays| dose_summary(todays));
                            format!("{taken} of {total} doses taken")
                        }}
                    </span>
                    <Show when=move || adherence.get().is_some()>
                        <Badge tone=Tone::Info>
                            {move || format!("Adherence {}%", adherence.get().unwrap_or_default())}
                        </Badge>
                    </Show>
                </div>
                <ProgressBar
                    value=Signal::derive(move || f64::from(adherence.get().unwrap_or_default()))
                    label="Adherence"
                    tone=Tone::Success
                />
                <Show
                    when=move || todays.with(|todays| !todays.is_empty())
                    fallback=|| view! { <EmptyState title="No doses scheduled today" icon=IconName::Clock /> }
                >
                    <ol class="flex flex-col gap-2" aria-label="Dose schedule">
                        <For
                            each=move || todays.get()
                            key=|dose| (dose.medication_id.clone(), dose.scheduled_at, dose.status)
                            let:dose
                        >
                            {
                                let (name, dosage) = medication_for(&dose.medication_id)
                                    .unwrap_or_else(|| (dose.medication_id.clone(), String::new()));
                                let status = dose.status;
                                let due = status == DoseStatus::Scheduled;
                                let taken = mark(dose.clone(), DoseStatus::Taken);
                                let missed = mark(dose.clone(), DoseStatus::Missed);
                                view! {
                                    <li
                                        class="care-dose flex items-center justify-between gap-3 rounded-md border border-[var(--care-color-border)] p-2"
                                        data-care-status=status.token()
                                    >
                                        <div class="flex items-center gap-3">
                                            <time class="w-20 font-mono text-sm tabular-nums">
                                                {format_time(dose.scheduled_at.time())}
                                            </time>
                                            <div class="flex flex-col">
                                                <span class="font-medium">{name}</span>
                                                <Text role=TextRole::Caption tone=Tone::Muted>{dosage}</Text>
                                            </div>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <Badge tone=dose_tone(status)>{dose_label(status)}</Badge>
                                            {due
                                                .then(|| {
                                                    view! {
                                                        <Button variant=ButtonVariant::Success size=ButtonSize::Sm leading_icon=IconName::Check on_click=taken>
                                                            "Taken"
                                                        </Button>
                                                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on_click=missed>
                                                            "Missed"
                                                        </Button>
                                                    }
                                                })}
                                        </div>
                                    </li>
                                }
                            }
                        </For>
                    </ol>
                </Show>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_live_orders_offer_actions() {
        assert_eq!(
            medication_actions(MedicationStatus::Active),
            vec![MedicationAction::Pause, MedicationAction::Discontinue]
        );
        assert_eq!(
            medication_actions(MedicationStatus::Paused),
            vec![MedicationAction::Resume, MedicationAction::Discontinue]
        );
        assert!(medication_actions(MedicationStatus::Completed).is_empty());
        assert!(medication_actions(MedicationStatus::Discontinued).is_empty());
    }

    #[test]
    fn discontinue_is_the_destructive_action() {
        assert_eq!(MedicationAction::Discontinue.variant(), ButtonVariant::Danger);
        assert_eq!(MedicationAction::Pause.variant(), ButtonVariant::Secondary);
        assert_eq!(medication_status_tone(MedicationStatus::Paused), Tone::Warning);
    }

    #[test]
    fn dose_summary_counts_taken_doses() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(8, 0, 0))
            .expect("timestamp");
        let dose = |status| DoseEvent {
            medication_id: "m1".to_string(),
            scheduled_at: at,
            status,
            taken_at: None,
        };
        let doses = vec![dose(DoseStatus::Taken), dose(DoseStatus::Missed), dose(DoseStatus::Scheduled)];
        assert_eq!(dose_summary(&doses), (1, 3));
        assert_eq!(dose_tone(DoseStatus::Missed), Tone::Danger);
        assert_eq!(dose_label(DoseStatus::Scheduled), "Due");
    }
}
