use chrono::NaiveDate;

use super::*;
use care_model::{
    filter_prescriptions, format_day, DateStyle, Prescription, PrescriptionStatus,
    EXPIRING_SOON_DAYS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Request raised from the prescription list.
pub enum PrescriptionAction {
    /// Send a refill request.
    Refill,
    /// Void the prescription. Always confirmed.
    Cancel,
}

/// Actions a prescription supports on `today`: refills need an active, unexpired order with
/// refills left; pending and active orders can be cancelled.
pub fn prescription_actions(prescription: &Prescription, today: NaiveDate) -> Vec<PrescriptionAction> {
    let mut actions = Vec::new();
    if prescription.can_refill(today) {
        actions.push(PrescriptionAction::Refill);
    }
    if matches!(
        prescription.effective_status(today),
        PrescriptionStatus::Pending | PrescriptionStatus::Active
    ) {
        actions.push(PrescriptionAction::Cancel);
    }
    actions
}

pub(crate) fn prescription_tone(status: PrescriptionStatus) -> Tone {
    match status {
        PrescriptionStatus::Pending => Tone::Info,
        PrescriptionStatus::Active => Tone::Success,
        PrescriptionStatus::Expired => Tone::Warning,
        PrescriptionStatus::Cancelled => Tone::Muted,
    }
}

fn refill_text(refills: u32) -> String {
    match refills {
        0 => "No refills left".to_string(),
        1 => "1 refill left".to_string(),
        refills => format!("{refills} refills left"),
    }
}

fn prescription_row(
    prescription: Prescription,
    on: NaiveDate,
    style: DateStyle,
    expiring_within_days: i64,
    on_action: Option<Callback<(String, PrescriptionAction)>>,
) -> impl IntoView {
    let status = prescription.effective_status(on);
    let expiring = prescription.is_expiring_soon(on, expiring_within_days);
    let issued = format_day(prescription.issued_on, style);
    let expires = prescription.expires_on.map(|expires| format_day(expires, style));
    let actions = prescription_actions(&prescription, on)
        .into_iter()
        .map(|action| {
            let id = prescription.id.clone();
            match action {
                PrescriptionAction::Refill => view! {
                    <Button
                        size=ButtonSize::Sm
                        leading_icon=IconName::Prescription
                        on_click=Callback::new(move |_: MouseEvent| {
                            if let Some(on_action) = on_action.as_ref() {
                                on_action.call((id.clone(), PrescriptionAction::Refill));
                            }
                        })
                    >
                        "Refill"
                    </Button>
                }
                .into_view(),
                PrescriptionAction::Cancel => view! {
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        require_confirmation=true
                        confirm_label="Press again to cancel this prescription"
                        on_click=Callback::new(move |_: MouseEvent| {
                            if let Some(on_action) = on_action.as_ref() {
                                on_action.call((id.clone(), PrescriptionAction::Cancel));
                            }
                        })
                    >
                        "Cancel"
                    </Button>
                }
                .into_view(),
            }
        })
        .collect_view();

    view! {
        <li
            class="care-prescription flex items-start justify-between gap-4 border-b border-[var(--care-color-border)] py-3 last:border-b-0"
            data-care-prescription=prescription.id.clone()
            data-care-status=status.token()
            data-care-expiring=bool_token(expiring)
        >
            <div class="flex min-w-0 flex-col gap-0.5">
                <div class="flex flex-wrap items-center gap-2">
                    <span class="font-medium">{prescription.medication_name.clone()}</span>
                    <Badge tone=prescription_tone(status) dot=true>{status.label()}</Badge>
                    {expiring.then(|| view! { <Badge tone=Tone::Warning>"Expires soon"</Badge> })}
                </div>
                <Text role=TextRole::Caption>
                    {format!(
                        "{} · Qty {} · {}",
                        prescription.dosage,
                        prescription.quantity,
                        refill_text(prescription.refills_remaining),
                    )}
                </Text>
                <Text role=TextRole::Caption tone=Tone::Muted>
                    {match expires {
                        Some(expires) => format!("Issued {issued} · Expires {expires}"),
                        None => format!("Issued {issued}"),
                    }}
                </Text>
                <Text role=TextRole::Caption tone=Tone::Muted>
                    {match &prescription.pharmacy {
                        Some(pharmacy) => format!("{} · {pharmacy}", prescription.prescriber),
                        None => prescription.prescriber.clone(),
                    }}
                </Text>
            </div>
            <div class="flex shrink-0 gap-2">{actions}</div>
        </li>
    }
}

#[component]
/// Prescription list with a status filter, refill eligibility, and expiring-soon flags.
pub fn PrescriptionManagement(
    #[prop(into)] prescriptions: MaybeSignal<Vec<Prescription>>,
    #[prop(default = EXPIRING_SOON_DAYS)] expiring_within_days: i64,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_action: Option<Callback<(String, PrescriptionAction)>>,
) -> impl IntoView {
    let config = use_ui_config();
    let on = today();
    let status = create_rw_signal(None::<PrescriptionStatus>);
    let prescriptions = Signal::derive(move || prescriptions.get());
    let visible = Signal::derive(move || {
        let status = status.get();
        prescriptions.with(|prescriptions| filter_prescriptions(prescriptions, status, on))
    });
    let options = std::iter::once(SelectOption::new("", "All prescriptions"))
        .chain(
            PrescriptionStatus::ALL
                .into_iter()
                .map(|status| SelectOption::new(status.token(), status.label())),
        )
        .collect::<Vec<_>>();

    view! {
        <Card layout_class=layout_class.unwrap_or("care-prescription-management") title="Prescriptions">
            <div class="flex flex-col gap-3" data-care-kind="prescription-management">
                <Select
                    options=options
                    value=Signal::derive(move || status.get().map(|status| status.token().to_string()).unwrap_or_default())
                    aria_label="Filter prescriptions by status"
                    on_change=Callback::new(move |token: String| status.set(PrescriptionStatus::from_token(&token)))
                />
                <Show
                    when=move || visible.with(|visible| !visible.is_empty())
                    fallback=|| view! { <EmptyState title="No prescriptions" icon=IconName::Prescription /> }
                >
                    <ul class="flex flex-col" aria-label="Prescription list">
                        {move || {
                            let style = config.with(|config| config.date_style);
                            visible
                                .get()
                                .into_iter()
                                .map(|prescription| {
                                    prescription_row(
                                        prescription,
                                        on,
                                        style,
                                        expiring_within_days,
                                        on_action,
                                    )
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).expect("date")
    }

    fn prescription(status: PrescriptionStatus, refills: u32, expires_on: Option<NaiveDate>) -> Prescription {
        Prescription {
            id: "rx1".to_string(),
            medication_name: "Lisinopril".to_string(),
            dosage: "10 mg daily".to_string(),
            quantity: 30,
            refills_remaining: refills,
            status,
            issued_on: date(1, 1),
            expires_on,
            prescriber: "Dr. Grey".to_string(),
            pharmacy: None,
        }
    }

    #[test]
    fn active_orders_with_refills_can_be_refilled_and_cancelled() {
        let rx = prescription(PrescriptionStatus::Active, 2, Some(date(12, 31)));
        assert_eq!(
            prescription_actions(&rx, date(6, 1)),
            vec![PrescriptionAction::Refill, PrescriptionAction::Cancel]
        );
    }

    #[test]
    fn exhausted_or_expired_orders_cannot_be_refilled() {
        let exhausted = prescription(PrescriptionStatus::Active, 0, None);
        assert_eq!(prescription_actions(&exhausted, date(6, 1)), vec![PrescriptionAction::Cancel]);

        let expired = prescription(PrescriptionStatus::Active, 3, Some(date(3, 1)));
        assert!(prescription_actions(&expired, date(6, 1)).is_empty());

        let cancelled = prescription(PrescriptionStatus::Cancelled, 3, None);
        assert!(prescription_actions(&cancelled, date(6, 1)).is_empty());
    }

    #[test]
    fn refill_text_pluralizes() {
        assert_eq!(refill_text(0), "No refills left");
        assert_eq!(refill_text(1), "1 refill left");
        assert_eq!(refill_text(4), "4 refills left");
        assert_eq!(prescription_tone(PrescriptionStatus::Expired), Tone::Warning);
    }
}
