use super::*;
use crate::keyboard::KeyCombo;
use care_model::{format_datetime, format_day, group_by_day, initials, TimelineEvent};

#[component]
/// Shared card surface for summaries and record panels.
pub fn Card(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = classes![
        "care-card rounded-lg",
        variant.classes(),
        elevation.classes(),
        padding.classes(),
        layout_class
    ];
    view! {
        <article
            class=class
            aria-label=aria_label
            data-care-primitive="true"
            data-care-kind="card"
            data-care-variant=variant.token()
            data-care-elevation=elevation.token()
            data-care-padding=padding.token()
        >
            {title
                .map(|title| {
                    view! {
                        <header class="care-card__header mb-3 text-base font-semibold" data-care-slot="title">
                            {title}
                        </header>
                    }
                })}
            {children()}
        </article>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Heading levels rendered by [`Heading`].
pub enum HeadingLevel {
    /// Page title.
    H1,
    /// Section title.
    #[default]
    H2,
    /// Subsection title.
    H3,
    /// Group title.
    H4,
}

impl HeadingLevel {
    fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }
}

impl ClassVariant for HeadingLevel {
    fn classes(self) -> &'static str {
        match self {
            Self::H1 => "text-3xl font-bold",
            Self::H2 => "text-2xl font-semibold",
            Self::H3 => "text-xl font-semibold",
            Self::H4 => "text-lg font-medium",
        }
    }
}

#[component]
/// Semantic heading primitive.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = classes!["care-heading", level.classes(), tone.text_classes(), layout_class];
    let content = children();
    let view = match level {
        HeadingLevel::H1 => view! { <h1 class=class>{content}</h1> }.into_view(),
        HeadingLevel::H2 => view! { <h2 class=class>{content}</h2> }.into_view(),
        HeadingLevel::H3 => view! { <h3 class=class>{content}</h3> }.into_view(),
        HeadingLevel::H4 => view! { <h4 class=class>{content}</h4> }.into_view(),
    };
    view! {
        <div
            class="care-heading-wrap contents"
            data-care-primitive="true"
            data-care-kind="heading"
            data-care-level=level.token()
        >
            {view}
        </div>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=classes!["care-text", role.classes(), tone.text_classes(), layout_class]
            data-care-primitive="true"
            data-care-kind="text"
            data-care-variant=role.token()
            data-care-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Compact status badge with an optional leading dot.
pub fn Badge(
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] dot: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=classes![
                "care-badge inline-flex items-center gap-1 rounded-full px-2 py-0.5 text-xs font-medium",
                tone.classes(),
                layout_class
            ]
            data-care-primitive="true"
            data-care-kind="badge"
            data-care-tone=tone.token()
            data-care-dot=bool_token(dot)
        >
            {dot.then(|| view! { <span class="care-badge__dot h-1.5 w-1.5 rounded-full bg-current" aria-hidden="true"></span> })}
            {children()}
        </span>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class(
                "care-empty-state flex flex-col items-center gap-2 py-8 text-center",
                layout_class,
            )
            data-care-primitive="true"
            data-care-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Xl layout_class="text-[var(--care-color-text-muted)]" /> })}
            <p class="text-base font-medium">{title}</p>
            {description
                .map(|description| {
                    view! { <p class="text-sm text-[var(--care-color-text-muted)]">{description}</p> }
                })}
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Horizontal or vertical separator.
pub fn Divider(
    #[prop(optional)] vertical: bool,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = classes![
        "care-divider",
        ("border-l border-[var(--care-color-border)] self-stretch", vertical),
        ("flex items-center gap-3 text-xs text-[var(--care-color-text-muted)]", !vertical && label.is_some()),
        ("border-t border-[var(--care-color-border)]", !vertical && label.is_none()),
        layout_class
    ];
    view! {
        <div
            class=class
            role="separator"
            aria-orientation=if vertical { "vertical" } else { "horizontal" }
            data-care-primitive="true"
            data-care-kind="divider"
        >
            {label
                .map(|label| {
                    view! {
                        <span class="h-px flex-1 bg-[var(--care-color-border)]"></span>
                        <span>{label}</span>
                        <span class="h-px flex-1 bg-[var(--care-color-border)]"></span>
                    }
                })}
        </div>
    }
}

#[component]
/// Keyboard chord rendered from shortcut notation (`"Ctrl+Shift+E"`).
pub fn Kbd(
    #[prop(into)] keys: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let label = match KeyCombo::parse(&keys) {
        Some(combo) => combo.label(),
        None => {
            logging::warn!("unparsable shortcut notation `{keys}`");
            keys.clone()
        }
    };
    view! {
        <kbd
            class=merge_layout_class(
                "care-kbd rounded border border-[var(--care-color-border)] bg-[var(--care-color-surface-muted)] px-1.5 py-0.5 font-mono text-xs",
                layout_class,
            )
            aria-label=keys
            data-care-primitive="true"
            data-care-kind="kbd"
        >
            {label}
        </kbd>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Avatar diameters.
pub enum AvatarSize {
    /// 24px.
    Sm,
    /// 40px.
    #[default]
    Md,
    /// 56px.
    Lg,
    /// 80px.
    Xl,
}

impl AvatarSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl ClassVariant for AvatarSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-6 w-6 text-[10px]",
            Self::Md => "h-10 w-10 text-sm",
            Self::Lg => "h-14 w-14 text-lg",
            Self::Xl => "h-20 w-20 text-2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Presence indicator shown on an avatar.
pub enum Presence {
    /// Available.
    Online,
    /// Occupied.
    Busy,
    /// Idle.
    Away,
    /// Not available.
    Offline,
}

impl Presence {
    fn token(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Busy => "busy",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Busy => "Busy",
            Self::Away => "Away",
            Self::Offline => "Offline",
        }
    }
}

impl ClassVariant for Presence {
    fn classes(self) -> &'static str {
        match self {
            Self::Online => "bg-[var(--care-color-success)]",
            Self::Busy => "bg-[var(--care-color-danger)]",
            Self::Away => "bg-[var(--care-color-warning)]",
            Self::Offline => "bg-[var(--care-color-text-muted)]",
        }
    }
}

#[component]
/// Portrait with initials fallback when no image is given (or an empty URL) or the image fails
/// to load.
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional, into)] src: Option<String>,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] presence: Option<Presence>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let image_failed = create_rw_signal(false);
    let src = src.filter(|src| !src.trim().is_empty());
    let initials_text = initials(&name);
    let has_image = src.is_some();
    let show_image = move || has_image && !image_failed.get();
    let alt = name.clone();

    view! {
        <span
            class=classes![
                "care-avatar relative inline-flex shrink-0 items-center justify-center rounded-full bg-[var(--care-color-surface-muted)] font-semibold",
                size.classes(),
                layout_class
            ]
            role="img"
            aria-label=name
            data-care-primitive="true"
            data-care-kind="avatar"
            data-care-size=size.token()
            data-care-presence=presence.map(Presence::token)
        >
            <Show
                when=show_image
                fallback=move || view! { <span aria-hidden="true" data-care-slot="initials">{initials_text.clone()}</span> }
            >
                <img
                    class="h-full w-full rounded-full object-cover"
                    src=src.clone()
                    alt=alt.clone()
                    on:error=move |_| image_failed.set(true)
                />
            </Show>
            {presence
                .map(|presence| {
                    view! {
                        <span
                            class=classes![
                                "care-avatar__presence absolute bottom-0 right-0 h-2.5 w-2.5 rounded-full ring-2 ring-white",
                                presence.classes()
                            ]
                            title=presence.label()
                        ></span>
                    }
                })}
        </span>
    }
}

/// Day headings for a timeline, newest day first.
pub(crate) fn timeline_sections(
    events: &[TimelineEvent],
    style: care_model::DateStyle,
) -> Vec<(String, Vec<TimelineEvent>)> {
    group_by_day(events)
        .into_iter()
        .map(|(day, events)| (format_day(day, style), events))
        .collect()
}

#[component]
/// Vertical event timeline grouped by day, newest first, colored by severity.
pub fn Timeline(
    #[prop(into)] events: MaybeSignal<Vec<TimelineEvent>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let config = use_ui_config();
    let events = Signal::derive(move || events.get());
    let sections = move || {
        let style = config.with(|config| config.date_style);
        events.with(|events| timeline_sections(events, style))
    };

    view! {
        <section
            class=merge_layout_class("care-timeline flex flex-col gap-4", layout_class)
            aria-label=aria_label.unwrap_or_else(|| "Timeline".to_string())
            data-care-primitive="true"
            data-care-kind="timeline"
        >
            <Show
                when=move || events.with(|events| !events.is_empty())
                fallback=|| view! { <EmptyState title="No events recorded" /> }
            >
                <For each=sections key=|section| section.clone() let:section>
                    <div class="care-timeline__day flex flex-col gap-2">
                        <h3 class="text-xs font-semibold uppercase tracking-wide text-[var(--care-color-text-muted)]">
                            {section.0}
                        </h3>
                        <ol class="flex flex-col gap-3 border-l border-[var(--care-color-border)] pl-4">
                            {section
                                .1
                                .into_iter()
                                .map(|event| timeline_entry(event, config))
                                .collect_view()}
                        </ol>
                    </div>
                </For>
            </Show>
        </section>
    }
}

fn timeline_entry(event: TimelineEvent, config: Signal<crate::config::UiConfig>) -> impl IntoView {
    let tone = Tone::from(event.severity);
    let occurred_at = event.occurred_at;
    view! {
        <li
            class="care-timeline__event relative flex flex-col gap-0.5"
            data-care-severity=event.severity.token()
            data-care-event=event.id
        >
            <span
                class=classes!["absolute -left-[21px] top-1.5 h-2.5 w-2.5 rounded-full", tone.classes()]
                aria-hidden="true"
            ></span>
            <div class="flex items-center gap-2">
                <span class=classes!["text-sm font-medium", tone.text_classes()]>{event.title}</span>
                {event.category.map(|category| view! { <Badge tone=Tone::Muted>{category}</Badge> })}
            </div>
            <time
                class="text-xs text-[var(--care-color-text-muted)]"
                datetime=occurred_at.format("%Y-%m-%dT%H:%M").to_string()
            >
                {move || format_datetime(occurred_at, config.with(|config| config.date_style))}
            </time>
            {event
                .description
                .map(|description| view! { <p class="text-sm">{description}</p> })}
            {event
                .author
                .map(|author| {
                    view! { <span class="text-xs text-[var(--care-color-text-muted)]">{author}</span> }
                })}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use care_model::{DateStyle, Severity};

    fn event(id: &str, day: u32, hour: u32) -> TimelineEvent {
        TimelineEvent {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: None,
            occurred_at: NaiveDate::from_ymd_opt(2024, 3, day)
                .and_then(|date| date.and_hms_opt(hour, 0, 0))
                .expect("valid timestamp"),
            category: None,
            severity: Severity::Info,
            author: None,
        }
    }

    #[test]
    fn timeline_sections_are_newest_day_first_with_formatted_headings() {
        let events = vec![event("a", 1, 9), event("b", 3, 8), event("c", 3, 17)];
        let sections = timeline_sections(&events, DateStyle::Medium);

        let headings = sections.iter().map(|(day, _)| day.as_str()).collect::<Vec<_>>();
        assert_eq!(headings, vec!["Mar 3, 2024", "Mar 1, 2024"]);
        let first_day = sections[0].1.iter().map(|event| event.id.as_str()).collect::<Vec<_>>();
        assert_eq!(first_day, vec!["c", "b"]);
    }

    #[test]
    fn same_day_changes_produce_a_new_section_key() {
        let before = timeline_sections(&[event("a", 3, 9)], DateStyle::Medium);
        let added = timeline_sections(&[event("a", 3, 9), event("b", 3, 11)], DateStyle::Medium);
        let mut edited_event = event("a", 3, 9);
        edited_event.title = "Dose adjusted".to_string();
        let edited = timeline_sections(&[edited_event], DateStyle::Medium);

        assert_eq!(before[0].0, added[0].0);
        assert_ne!(before[0], added[0]);
        assert_ne!(before[0], edited[0]);
        assert_eq!(before, timeline_sections(&[event("a", 3, 9)], DateStyle::Medium));
    }

    #[test]
    fn heading_levels_map_to_tags_and_scale() {
        assert_eq!(HeadingLevel::default(), HeadingLevel::H2);
        assert_eq!(HeadingLevel::H1.token(), "h1");
        assert!(HeadingLevel::H1.classes().contains("text-3xl"));
    }

    #[test]
    fn avatar_sizes_and_presence_have_stable_tokens() {
        assert_eq!(AvatarSize::Lg.token(), "lg");
        assert_eq!(Presence::Busy.token(), "busy");
        assert_eq!(Presence::Away.label(), "Away");
    }
}
