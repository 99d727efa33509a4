use super::*;
use care_model::{
    format_day, mask_identifier, mask_name, AllergySeverity, Patient, VitalFlag,
};

/// Characters left visible when an identifier is masked.
const VISIBLE_ID_CHARS: usize = 4;

pub(crate) fn allergy_tone(severity: AllergySeverity) -> Tone {
    match severity {
        AllergySeverity::Mild => Tone::Info,
        AllergySeverity::Moderate => Tone::Warning,
        AllergySeverity::Severe => Tone::Danger,
        AllergySeverity::LifeThreatening => Tone::Critical,
    }
}

pub(crate) fn vital_tone(flag: VitalFlag) -> Tone {
    match flag {
        VitalFlag::Normal => Tone::Neutral,
        VitalFlag::Low | VitalFlag::High => Tone::Warning,
        VitalFlag::Critical => Tone::Critical,
    }
}

/// PHI rendering: masked unless masking is off or the viewer revealed it.
pub(crate) fn shown_identifier(value: &str, masked: bool) -> String {
    if masked {
        mask_identifier(value, VISIBLE_ID_CHARS)
    } else {
        value.to_string()
    }
}

pub(crate) fn shown_name(patient: &Patient, masked: bool) -> String {
    let name = patient.display_name();
    if masked {
        mask_name(&name)
    } else {
        name
    }
}

/// `"42 y · Female"`-style demographic line.
pub(crate) fn demographics(patient: &Patient, on: chrono::NaiveDate) -> String {
    let age = patient
        .age_on(on)
        .map(|age| format!("{age} y"))
        .unwrap_or_else(|| "Age unknown".to_string());
    format!("{age} · {}", patient.sex.label())
}

#[component]
/// Patient header card: identity, demographics, allergies, and latest vitals.
///
/// The name, MRN, and phone number are masked while the configuration asks for PHI masking;
/// the reveal toggle unmasks them for this instance only and reports the change to `on_reveal`.
pub fn PatientProfile(
    #[prop(into)] patient: MaybeSignal<Patient>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_reveal: Option<Callback<bool>>,
) -> impl IntoView {
    let config = use_ui_config();
    let revealed = create_rw_signal(false);
    let patient = Signal::derive(move || patient.get());
    let masking = Signal::derive(move || config.with(|config| config.mask_phi));
    let masked = Signal::derive(move || masking.get() && !revealed.get());
    let on = today();

    let toggle_reveal = move |_: MouseEvent| {
        let next = !revealed.get_untracked();
        revealed.set(next);
        if let Some(on_reveal) = on_reveal.as_ref() {
            on_reveal.call(next);
        }
    };

    let allergies = move || {
        let allergies = patient.with(|patient| patient.allergies.clone());
        if allergies.is_empty() {
            return view! { <Text tone=Tone::Muted>"No known allergies"</Text> }.into_view();
        }
        allergies
            .into_iter()
            .map(|allergy| {
                let tone = allergy_tone(allergy.severity);
                let text = match allergy.reaction {
                    Some(reaction) => format!("{} ({reaction})", allergy.substance),
                    None => allergy.substance,
                };
                view! {
                    <span title=allergy.severity.label()>
                        <Badge tone=tone dot=true>{text}</Badge>
                    </span>
                }
            })
            .collect_view()
    };

    let vitals = move || {
        patient
            .with(|patient| patient.vitals.clone())
            .into_iter()
            .map(|vital| {
                let tone = vital_tone(vital.flag);
                let critical = vital.flag == VitalFlag::Critical;
                view! {
                    <div
                        class=classes![
                            "care-vital flex flex-col rounded-md border border-[var(--care-color-border)] p-2",
                            ("border-[var(--care-color-critical)]", critical)
                        ]
                        data-care-flag=vital.flag.token()
                    >
                        <Text role=TextRole::Caption tone=Tone::Muted>{vital.kind.label()}</Text>
                        <Text role=TextRole::Label tone=tone>
                            {format!("{} {}", vital.value, vital.unit)}
                        </Text>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Card layout_class=layout_class.unwrap_or("care-patient-profile") aria_label="Patient profile">
            <div
                class="flex flex-col gap-4"
                data-care-kind="patient-profile"
                data-care-masked=move || bool_token(masked.get())
            >
                <Show when=move || patient.with(Patient::has_critical_vitals)>
                    <Alert tone=Tone::Critical title="Critical vitals">
                        "One or more vital signs are flagged critical."
                    </Alert>
                </Show>
                <div class="flex items-center gap-4">
                    <Avatar
                        name=patient.with_untracked(|patient| shown_name(patient, masking.get_untracked()))
                        src=patient.with_untracked(|patient| patient.photo_url.clone()).unwrap_or_default()
                        size=AvatarSize::Lg
                    />
                    <div class="flex flex-1 flex-col">
                        <span class="text-lg font-semibold" data-care-slot="name">
                            {move || patient.with(|patient| shown_name(patient, masked.get()))}
                        </span>
                        <Text tone=Tone::Muted>
                            {move || patient.with(|patient| demographics(patient, on))}
                        </Text>
                        <span class="font-mono text-xs" data-care-slot="mrn">
                            "MRN "
                            {move || patient.with(|patient| shown_identifier(&patient.mrn, masked.get()))}
                        </span>
                    </div>
                    <Show when=move || masking.get()>
                        <button
                            type="button"
                            class="care-patient-profile__reveal inline-flex items-center gap-1 rounded px-2 py-1 text-xs hover:bg-[var(--care-color-surface-muted)]"
                            aria-pressed=move || revealed.get().to_string()
                            on:click=toggle_reveal
                        >
                            <Icon icon=IconName::Eye size=IconSize::Sm />
                            {move || if revealed.get() { "Hide PHI" } else { "Show PHI" }}
                        </button>
                    </Show>
                </div>
                <dl class="grid grid-cols-2 gap-2 text-sm">
                    <dt class="text-[var(--care-color-text-muted)]">"Date of birth"</dt>
                    <dd>
                        {move || {
                            let style = config.with(|config| config.date_style);
                            patient
                                .with(|patient| patient.date_of_birth.map(|dob| format_day(dob, style)))
                                .unwrap_or_else(|| "—".to_string())
                        }}
                    </dd>
                    <dt class="text-[var(--care-color-text-muted)]">"Phone"</dt>
                    <dd data-care-slot="phone">
                        {move || {
                            patient
                                .with(|patient| patient.phone.clone())
                                .map(|phone| shown_identifier(&phone, masked.get()))
                                .unwrap_or_else(|| "—".to_string())
                        }}
                    </dd>
                    <dt class="text-[var(--care-color-text-muted)]">"Blood type"</dt>
                    <dd>{move || patient.with(|patient| patient.blood_type.clone()).unwrap_or_else(|| "—".to_string())}</dd>
                    <dt class="text-[var(--care-color-text-muted)]">"Primary provider"</dt>
                    <dd>
                        {move || patient.with(|patient| patient.primary_provider.clone()).unwrap_or_else(|| "—".to_string())}
                    </dd>
                </dl>
                <section aria-label="Allergies" class="flex flex-col gap-2">
                    <Heading level=HeadingLevel::H4>"Allergies"</Heading>
                    <div class="flex flex-wrap gap-2">{allergies}</div>
                </section>
                <section aria-label="Vitals" class="flex flex-col gap-2">
                    <Heading level=HeadingLevel::H4>"Vitals"</Heading>
                    <Show
                        when=move || patient.with(|patient| !patient.vitals.is_empty())
                        fallback=|| view! { <Text tone=Tone::Muted>"No vitals recorded"</Text> }
                    >
                        <div class="grid grid-cols-3 gap-2">{vitals}</div>
                    </Show>
                </section>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use care_model::Sex;

    fn patient() -> Patient {
        Patient {
            id: "p1".to_string(),
            mrn: "MRN-00412345".to_string(),
            given_name: "Ada".to_string(),
            family_name: "Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 6, 15),
            sex: Sex::Female,
            blood_type: None,
            primary_provider: None,
            phone: Some("555-0100".to_string()),
            photo_url: None,
            allergies: Vec::new(),
            vitals: Vec::new(),
        }
    }

    #[test]
    fn identifiers_are_masked_until_revealed() {
        assert_eq!(shown_identifier("MRN-00412345", true), "•••-••••2345");
        assert_eq!(shown_identifier("MRN-00412345", false), "MRN-00412345");
        assert_ne!(shown_name(&patient(), true), "Ada Lovelace");
        assert_eq!(shown_name(&patient(), false), "Ada Lovelace");
    }

    #[test]
    fn demographics_show_age_and_sex() {
        let on = NaiveDate::from_ymd_opt(2024, 6, 14).expect("date");
        assert_eq!(demographics(&patient(), on), "43 y · Female");

        let mut unknown = patient();
        unknown.date_of_birth = None;
        assert_eq!(demographics(&unknown, on), "Age unknown · Female");
    }

    #[test]
    fn severities_escalate_tone() {
        assert_eq!(allergy_tone(AllergySeverity::Mild), Tone::Info);
        assert_eq!(allergy_tone(AllergySeverity::LifeThreatening), Tone::Critical);
        assert_eq!(vital_tone(VitalFlag::High), Tone::Warning);
        assert_eq!(vital_tone(VitalFlag::Critical), Tone::Critical);
    }
}
