use super::*;
use crate::focus::roving_index;
use crate::keyboard::{
    list_shortcuts, use_global_shortcut, ShortcutAction, ShortcutGate, ShortcutMode,
    ShortcutTable,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One level of a breadcrumb trail.
pub struct BreadcrumbItem {
    /// Visible label.
    pub label: String,
    /// Link target; the current page usually has none.
    pub href: Option<String>,
}

impl BreadcrumbItem {
    /// Linked crumb.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// Unlinked crumb.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Rendered breadcrumb slot after collapsing.
pub enum BreadcrumbEntry {
    /// Crumb at `index` of the full trail.
    Item {
        /// Position in the uncollapsed trail.
        index: usize,
        /// The crumb.
        item: BreadcrumbItem,
    },
    /// Placeholder for the hidden middle crumbs.
    Ellipsis {
        /// Number of hidden crumbs.
        hidden: usize,
    },
}

/// Collapses the middle of a trail longer than `max_items`, keeping the root and the last
/// `max_items - 1` crumbs. `max_items` below 2 is treated as 2; `0` disables collapsing.
pub fn collapse_breadcrumbs(items: &[BreadcrumbItem], max_items: usize) -> Vec<BreadcrumbEntry> {
    let entry = |index: usize| BreadcrumbEntry::Item {
        index,
        item: items[index].clone(),
    };
    if max_items == 0 || items.len() <= max_items.max(2) {
        return (0..items.len()).map(entry).collect();
    }
    let tail = max_items.max(2) - 1;
    let tail_start = items.len() - tail;
    let mut entries = Vec::with_capacity(tail + 2);
    entries.push(entry(0));
    entries.push(BreadcrumbEntry::Ellipsis {
        hidden: tail_start - 1,
    });
    entries.extend((tail_start..items.len()).map(entry));
    entries
}

#[component]
/// Breadcrumb trail. The last crumb is the current page.
pub fn Breadcrumb(
    items: Vec<BreadcrumbItem>,
    #[prop(optional)] max_items: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_navigate: Option<Callback<usize>>,
) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let last = items.len().saturating_sub(1);
    let items = store_value(items);
    let entries = move || {
        let limit = if expanded.get() { 0 } else { max_items };
        items.with_value(|items| collapse_breadcrumbs(items, limit))
    };

    let crumb = move |index: usize, item: BreadcrumbItem| {
        if index == last {
            return view! {
                <span class="font-medium" aria-current="page">
                    {item.label}
                </span>
            }
            .into_view();
        }
        view! {
            <a
                class="text-[var(--care-color-primary)] hover:underline"
                href=item.href.unwrap_or_else(|| "#".to_string())
                on:click=move |ev: MouseEvent| {
                    if let Some(on_navigate) = on_navigate.as_ref() {
                        ev.prevent_default();
                        on_navigate.call(index);
                    }
                }
            >
                {item.label}
            </a>
        }
        .into_view()
    };

    view! {
        <nav
            class=merge_layout_class("care-breadcrumb", layout_class)
            aria-label="Breadcrumb"
            data-care-primitive="true"
            data-care-kind="breadcrumb"
            data-care-collapsed=move || bool_token(!expanded.get() && max_items > 0 && last + 1 > max_items.max(2))
        >
            <ol class="flex flex-wrap items-center gap-1 text-sm">
                {move || {
                    entries()
                        .into_iter()
                        .enumerate()
                        .map(|(position, entry)| {
                            let separator = (position > 0)
                                .then(|| {
                                    view! {
                                        <span aria-hidden="true" class="text-[var(--care-color-text-muted)]">
                                            "/"
                                        </span>
                                    }
                                });
                            let body = match entry {
                                BreadcrumbEntry::Item { index, item } => crumb(index, item),
                                BreadcrumbEntry::Ellipsis { hidden } => {
                                    view! {
                                        <button
                                            type="button"
                                            class="rounded px-1 hover:bg-[var(--care-color-surface-muted)]"
                                            aria-label=format!("Show {hidden} hidden levels")
                                            on:click=move |_| expanded.set(true)
                                        >
                                            "…"
                                        </button>
                                    }
                                        .into_view()
                                }
                            };
                            view! { <li class="inline-flex items-center gap-1">{separator} {body}</li> }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Entry in a [`Dropdown`].
pub struct DropdownOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Option cannot be chosen.
    pub disabled: bool,
}

impl DropdownOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// Options whose label contains `query`, case-insensitively. A blank query keeps everything.
pub(crate) fn filter_options(options: &[DropdownOption], query: &str) -> Vec<DropdownOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Arrow/Enter/Escape handling for text inputs that drive a listbox; Home/End stay with the caret.
fn search_shortcuts() -> ShortcutTable<ShortcutAction> {
    ShortcutTable::new()
        .bind("ArrowDown", ShortcutGate::Always, ShortcutAction::Next)
        .bind("ArrowUp", ShortcutGate::Always, ShortcutAction::Previous)
        .bind("Enter", ShortcutGate::Always, ShortcutAction::Activate)
        .bind("Escape", ShortcutGate::Always, ShortcutAction::Cancel)
}

#[component]
/// Select-like trigger with a popup listbox, optional search, and keyboard navigation.
pub fn Dropdown(
    #[prop(into)] options: MaybeSignal<Vec<DropdownOption>>,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] searchable: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let config = use_ui_config();
    let open = create_rw_signal(false);
    let query = create_rw_signal(String::new());
    let active = create_rw_signal(None::<usize>);
    let trigger_ref = create_node_ref::<html::Button>();
    let list_id = next_dom_id("care-dropdown");
    let trigger_keys = store_value(list_shortcuts());
    let search_keys = store_value(search_shortcuts());
    let placeholder = store_value(placeholder.unwrap_or_else(|| "Select…".to_string()));
    let options = Signal::derive(move || options.get());
    let value = Signal::derive(move || value.get());
    let visible = Signal::derive(move || {
        options.with(|options| query.with(|query| filter_options(options, query)))
    });
    let option_id = {
        let list_id = list_id.clone();
        store_value(move |index: usize| format!("{list_id}-option-{index}"))
    };

    let selected_label = move || {
        let current = value.get();
        options
            .with(|options| {
                options
                    .iter()
                    .find(|option| Some(&option.value) == current.as_ref())
                    .map(|option| option.label.clone())
            })
            .unwrap_or_else(|| placeholder.get_value())
    };

    let enabled_flags = move || {
        visible.with_untracked(|visible| visible.iter().map(|option| !option.disabled).collect::<Vec<_>>())
    };

    let open_list = move || {
        if disabled.get_untracked() {
            return;
        }
        query.set(String::new());
        let current = value.get_untracked();
        let selected = visible.with_untracked(|visible| {
            visible
                .iter()
                .position(|option| Some(&option.value) == current.as_ref() && !option.disabled)
        });
        active.set(selected.or_else(|| roving_index(&enabled_flags(), None, ShortcutAction::First)));
        open.set(true);
    };

    let close = move |restore_focus: bool| {
        open.set(false);
        if restore_focus {
            if let Some(trigger) = trigger_ref.get_untracked() {
                let _ = trigger.focus();
            }
        }
    };

    let select = move |index: usize| {
        let Some(choice) = visible.with_untracked(|visible| {
            visible
                .get(index)
                .filter(|option| !option.disabled)
                .map(|option| option.value.clone())
        }) else {
            return;
        };
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(choice);
        }
        close(true);
    };

    let navigate = move |action: ShortcutAction| {
        if !open.get_untracked() {
            if matches!(
                action,
                ShortcutAction::Next | ShortcutAction::Previous | ShortcutAction::Activate
            ) {
                open_list();
            }
            return;
        }
        match action {
            ShortcutAction::Cancel => close(true),
            ShortcutAction::Activate => {
                if let Some(index) = active.get_untracked() {
                    select(index);
                }
            }
            other => {
                if let Some(next) = roving_index(&enabled_flags(), active.get_untracked(), other) {
                    active.set(Some(next));
                }
            }
        }
    };

    let outside_click = window_event_listener(ev::mousedown, move |_| {
        if open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let active_descendant = move || {
        open.get()
            .then(|| active.get())
            .flatten()
            .map(|index| option_id.with_value(|option_id| option_id(index)))
    };
    let trigger_controls = list_id.clone();
    let indexed = move || visible.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div
            class=merge_layout_class("care-dropdown relative inline-block", layout_class)
            data-care-primitive="true"
            data-care-kind="dropdown"
            data-care-open=move || bool_token(open.get())
            data-care-disabled=move || bool_token(disabled.get())
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                type="button"
                node_ref=trigger_ref
                class="care-dropdown__trigger inline-flex w-full items-center justify-between gap-2 rounded-md border border-[var(--care-color-border)] bg-[var(--care-color-surface)] px-3 py-2 text-sm"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                aria-controls=trigger_controls
                aria-label=aria_label
                aria-activedescendant=active_descendant
                disabled=move || disabled.get()
                on:click=move |_| {
                    if open.get_untracked() {
                        close(false);
                    } else {
                        open_list();
                    }
                }
                on:keydown=move |ev: KeyboardEvent| {
                    let mode = config.with_untracked(|config| config.shortcut_mode());
                    if let Some(action) = trigger_keys.with_value(|table| table.dispatch(&ev, mode)) {
                        navigate(action);
                    }
                }
            >
                <span class="truncate">{selected_label}</span>
                <Icon icon=IconName::ChevronDown size=IconSize::Sm />
            </button>
            <Show when=move || open.get()>
                <div class="care-dropdown__popup absolute z-40 mt-1 w-full rounded-md border border-[var(--care-color-border)] bg-[var(--care-color-surface)] shadow-lg">
                    {searchable
                        .then(|| {
                            view! {
                                <input
                                    type="search"
                                    class="care-dropdown__search w-full border-b border-[var(--care-color-border)] px-3 py-2 text-sm"
                                    placeholder="Search…"
                                    aria-label="Filter options"
                                    autofocus=true
                                    prop:value=move || query.get()
                                    on:input=move |ev| {
                                        query.set(event_target_value(&ev));
                                        active.set(roving_index(&enabled_flags(), None, ShortcutAction::First));
                                    }
                                    on:keydown=move |ev: KeyboardEvent| {
                                        let mode = config.with_untracked(|config| config.shortcut_mode());
                                        if let Some(action) = search_keys.with_value(|table| table.dispatch(&ev, mode)) {
                                            navigate(action);
                                        }
                                    }
                                />
                            }
                        })}
                    <ul id=list_id.clone() role="listbox" class="max-h-60 overflow-auto py-1">
                        <Show
                            when=move || visible.with(|visible| !visible.is_empty())
                            fallback=|| {
                                view! {
                                    <li class="px-3 py-2 text-sm text-[var(--care-color-text-muted)]" role="presentation">
                                        "No matches"
                                    </li>
                                }
                            }
                        >
                            <For
                                each=indexed
                                key=|(index, option)| (*index, option.value.clone())
                                let:entry
                            >
                                {
                                    let (index, option) = entry;
                                    let option_value = option.value.clone();
                                    let selected = Signal::derive(move || {
                                        value.with(|value| value.as_deref() == Some(option_value.as_str()))
                                    });
                                    let is_active = move || active.get() == Some(index);
                                    let option_disabled = option.disabled;
                                    view! {
                                        <li
                                            id=option_id.with_value(|option_id| option_id(index))
                                            role="option"
                                            class=move || {
                                                classes![
                                                    "care-dropdown__option flex cursor-pointer items-center justify-between px-3 py-2 text-sm",
                                                    ("bg-[var(--care-color-surface-muted)]", is_active()),
                                                    ("cursor-not-allowed opacity-50", option_disabled)
                                                ]
                                            }
                                            aria-selected=move || selected.get().to_string()
                                            aria-disabled=option_disabled.then_some("true")
                                            data-care-active=move || bool_token(is_active())
                                            data-care-value=option.value
                                            on:mouseenter=move |_| {
                                                if !option_disabled {
                                                    active.set(Some(index));
                                                }
                                            }
                                            on:click=move |_| select(index)
                                        >
                                            <span>{option.label}</span>
                                            <Show when=move || selected.get()>
                                                <Icon icon=IconName::Check size=IconSize::Sm />
                                            </Show>
                                        </li>
                                    }
                                }
                            </For>
                        </Show>
                    </ul>
                </div>
            </Show>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Action offered by a [`CommandPalette`].
pub struct Command {
    /// Identifier passed to `on_run`.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Section heading the command is listed under.
    pub group: Option<String>,
    /// Extra search terms.
    pub keywords: Vec<String>,
    /// Shortcut notation displayed next to the label.
    pub shortcut: Option<String>,
}

impl Command {
    /// Ungrouped command without keywords or shortcut.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            group: None,
            keywords: Vec::new(),
            shortcut: None,
        }
    }

    /// Places the command in `group`.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Adds search keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Shows `notation` as the command's shortcut.
    pub fn with_shortcut(mut self, notation: impl Into<String>) -> Self {
        self.shortcut = Some(notation.into());
        self
    }

    fn rank(&self, terms: &[String]) -> Option<u8> {
        let label = self.label.to_lowercase();
        let haystack = |term: &str| {
            label.contains(term)
                || self
                    .group
                    .as_ref()
                    .is_some_and(|group| group.to_lowercase().contains(term))
                || self
                    .keywords
                    .iter()
                    .any(|keyword| keyword.to_lowercase().contains(term))
        };
        if !terms.iter().all(|term| haystack(term)) {
            return None;
        }
        let first = terms.first().map(String::as_str).unwrap_or_default();
        Some(if label.starts_with(first) {
            0
        } else if terms.iter().all(|term| label.contains(term.as_str())) {
            1
        } else {
            2
        })
    }
}

/// Commands matching every whitespace-separated term of `query` (label, group, or keyword,
/// case-insensitive). Label-prefix matches rank first, then label matches, then the rest;
/// ties keep their original order.
pub fn filter_commands(commands: &[Command], query: &str) -> Vec<Command> {
    let terms = query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    if terms.is_empty() {
        return commands.to_vec();
    }
    let mut ranked = commands
        .iter()
        .filter_map(|command| command.rank(&terms).map(|rank| (rank, command)))
        .collect::<Vec<_>>();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, command)| command.clone()).collect()
}

/// Groups commands under their heading in first-appearance order.
pub(crate) fn group_commands(commands: Vec<Command>) -> Vec<(Option<String>, Vec<Command>)> {
    let mut groups: Vec<(Option<String>, Vec<Command>)> = Vec::new();
    for command in commands {
        match groups.iter_mut().find(|(group, _)| *group == command.group) {
            Some((_, bucket)) => bucket.push(command),
            None => groups.push((command.group.clone(), vec![command])),
        }
    }
    groups
}

/// Moves the active row by `delta`, wrapping at both ends. With no active row, forward movement
/// lands on the first row and backward on the last.
pub fn move_active(current: Option<usize>, len: usize, delta: i32) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len_i = len as i64;
    let next = match current {
        Some(current) => (current.min(len - 1) as i64 + i64::from(delta)).rem_euclid(len_i),
        None if delta < 0 => len_i - 1,
        None => 0,
    };
    Some(next as usize)
}

#[component]
/// Modal command search. Typing filters, arrows move the active row with wraparound, Enter runs
/// it, Escape closes. `open_shortcut` toggles the palette while workflow shortcuts are on.
pub fn CommandPalette(
    #[prop(into)] commands: MaybeSignal<Vec<Command>>,
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] open_shortcut: Option<&'static str>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    on_close: Callback<()>,
    on_run: Callback<String>,
) -> impl IntoView {
    let config = use_ui_config();
    let query = create_rw_signal(String::new());
    let active = create_rw_signal(Some(0usize));
    let input_ref = create_node_ref::<html::Input>();
    let list_id = next_dom_id("care-command-list");
    let keys = store_value(search_shortcuts());
    let placeholder = placeholder.unwrap_or_else(|| "Type a command…".to_string());
    let commands = Signal::derive(move || commands.get());
    let groups = Signal::derive(move || {
        commands.with(|commands| query.with(|query| group_commands(filter_commands(commands, query))))
    });
    let ordered = Signal::derive(move || {
        groups.with(|groups| {
            groups
                .iter()
                .flat_map(|(_, commands)| commands.iter().cloned())
                .collect::<Vec<_>>()
        })
    });
    let option_id = {
        let list_id = list_id.clone();
        store_value(move |index: usize| format!("{list_id}-{index}"))
    };

    create_effect(move |_| {
        if open.get() {
            query.set(String::new());
            active.set(Some(0));
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    if let Some(notation) = open_shortcut {
        let table = ShortcutTable::new().bind(notation, ShortcutGate::Workflow, ShortcutAction::Activate);
        let mode = Signal::derive(move || config.with(|config| config.shortcut_mode()));
        use_global_shortcut(table, mode, move |_| {
            if open.get_untracked() {
                on_close.call(());
            } else if let Some(on_open) = on_open.as_ref() {
                on_open.call(());
            }
        });
    }

    let run = move |index: usize| {
        if let Some(id) = ordered.with_untracked(|ordered| ordered.get(index).map(|command| command.id.clone())) {
            on_close.call(());
            on_run.call(id);
        }
    };

    let handle_keydown = move |ev: KeyboardEvent| {
        let mode: ShortcutMode = config.with_untracked(|config| config.shortcut_mode());
        let Some(action) = keys.with_value(|table| table.dispatch(&ev, mode)) else {
            return;
        };
        let len = ordered.with_untracked(Vec::len);
        match action {
            ShortcutAction::Next => active.set(move_active(active.get_untracked(), len, 1)),
            ShortcutAction::Previous => active.set(move_active(active.get_untracked(), len, -1)),
            ShortcutAction::Activate => {
                if let Some(index) = active.get_untracked() {
                    run(index);
                }
            }
            ShortcutAction::Cancel => on_close.call(()),
            _ => {}
        }
    };

    let row = move |index: usize, command: Command| {
        let is_active = move || active.get() == Some(index);
        view! {
            <li
                id=option_id.with_value(|option_id| option_id(index))
                role="option"
                class=move || {
                    classes![
                        "care-command flex cursor-pointer items-center justify-between rounded px-3 py-2 text-sm",
                        ("bg-[var(--care-color-primary)] text-white", is_active())
                    ]
                }
                aria-selected=move || is_active().to_string()
                data-care-command=command.id
                on:mouseenter=move |_| active.set(Some(index))
                on:click=move |_| run(index)
            >
                <span>{command.label}</span>
                {command.shortcut.map(|keys| view! { <Kbd keys /> })}
            </li>
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="care-command-palette__backdrop fixed inset-0 z-50 flex items-start justify-center bg-black/40 pt-24"
                on:mousedown=move |_| on_close.call(())
            >
                <div
                    class=merge_layout_class(
                        "care-command-palette w-full max-w-lg overflow-hidden rounded-lg bg-[var(--care-color-surface)] shadow-2xl",
                        layout_class,
                    )
                    role="dialog"
                    aria-modal="true"
                    aria-label="Command palette"
                    data-care-primitive="true"
                    data-care-kind="command-palette"
                    on:mousedown=move |ev| ev.stop_propagation()
                >
                    <div class="flex items-center gap-2 border-b border-[var(--care-color-border)] px-3">
                        <Icon icon=IconName::Search size=IconSize::Sm />
                        <input
                            node_ref=input_ref
                            type="text"
                            role="combobox"
                            class="w-full bg-transparent py-3 text-sm outline-none"
                            placeholder=placeholder.clone()
                            aria-expanded="true"
                            aria-controls=list_id.clone()
                            aria-activedescendant=move || {
                                active.get().map(|index| option_id.with_value(|option_id| option_id(index)))
                            }
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                query.set(event_target_value(&ev));
                                active.set(Some(0));
                            }
                            on:keydown=handle_keydown
                        />
                    </div>
                    <ul id=list_id.clone() role="listbox" class="max-h-80 overflow-auto p-2">
                        <Show
                            when=move || ordered.with(|ordered| !ordered.is_empty())
                            fallback=|| {
                                view! {
                                    <li class="px-3 py-6 text-center text-sm text-[var(--care-color-text-muted)]" role="presentation">
                                        "No matching commands"
                                    </li>
                                }
                            }
                        >
                            {move || {
                                let mut offset = 0usize;
                                groups
                                    .get()
                                    .into_iter()
                                    .map(|(group, commands)| {
                                        let start = offset;
                                        offset += commands.len();
                                        view! {
                                            <li role="presentation">
                                                {group
                                                    .map(|group| {
                                                        view! {
                                                            <div class="px-3 pb-1 pt-2 text-xs font-semibold uppercase text-[var(--care-color-text-muted)]">
                                                                {group}
                                                            </div>
                                                        }
                                                    })}
                                                <ul role="group">
                                                    {commands
                                                        .into_iter()
                                                        .enumerate()
                                                        .map(|(position, command)| row(start + position, command))
                                                        .collect_view()}
                                                </ul>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Show>
                    </ul>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn trail(len: usize) -> Vec<BreadcrumbItem> {
        (0..len)
            .map(|index| BreadcrumbItem::link(format!("L{index}"), format!("/{index}")))
            .collect()
    }

    fn labels(entries: &[BreadcrumbEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| match entry {
                BreadcrumbEntry::Item { item, .. } => item.label.clone(),
                BreadcrumbEntry::Ellipsis { hidden } => format!("…{hidden}"),
            })
            .collect()
    }

    #[test]
    fn short_trails_are_not_collapsed() {
        assert_eq!(labels(&collapse_breadcrumbs(&trail(3), 4)), vec!["L0", "L1", "L2"]);
        assert_eq!(labels(&collapse_breadcrumbs(&trail(6), 0)).len(), 6);
    }

    #[test]
    fn long_trails_keep_root_and_tail() {
        let entries = collapse_breadcrumbs(&trail(6), 3);
        assert_eq!(labels(&entries), vec!["L0", "…3", "L4", "L5"]);
        assert_eq!(
            entries[2],
            BreadcrumbEntry::Item {
                index: 4,
                item: BreadcrumbItem::link("L4", "/4"),
            }
        );
        assert_eq!(labels(&collapse_breadcrumbs(&trail(5), 1)), vec!["L0", "…3", "L4"]);
    }

    #[test]
    fn dropdown_filter_is_case_insensitive() {
        let options = vec![
            DropdownOption::new("am", "Amoxicillin"),
            DropdownOption::new("ib", "Ibuprofen"),
        ];
        let filtered = filter_options(&options, " AMOX ");
        assert_eq!(filtered, vec![options[0].clone()]);
        assert_eq!(filter_options(&options, "").len(), 2);
    }

    fn palette() -> Vec<Command> {
        vec![
            Command::new("vitals", "Record vitals").in_group("Charting"),
            Command::new("note", "New progress note")
                .in_group("Charting")
                .with_keywords(["soap"]),
            Command::new("refill", "Refill prescription")
                .in_group("Medications")
                .with_shortcut("Ctrl+R"),
            Command::new("pre", "Prescribe").in_group("Medications"),
        ]
    }

    fn ids(commands: &[Command]) -> Vec<&str> {
        commands.iter().map(|command| command.id.as_str()).collect()
    }

    #[test]
    fn blank_query_lists_everything_in_order() {
        assert_eq!(ids(&filter_commands(&palette(), "  ")), vec!["vitals", "note", "refill", "pre"]);
    }

    #[test]
    fn query_matches_labels_groups_and_keywords() {
        assert_eq!(ids(&filter_commands(&palette(), "soap")), vec!["note"]);
        assert_eq!(ids(&filter_commands(&palette(), "medications")), vec!["refill", "pre"]);
        assert_eq!(ids(&filter_commands(&palette(), "charting vitals")), vec!["vitals"]);
        assert!(filter_commands(&palette(), "xyz").is_empty());
    }

    #[test]
    fn label_prefix_matches_rank_first() {
        assert_eq!(ids(&filter_commands(&palette(), "pre")), vec!["pre", "refill"]);
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let groups = group_commands(palette());
        let names = groups
            .iter()
            .map(|(group, commands)| (group.clone().unwrap_or_default(), commands.len()))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![("Charting".to_string(), 2), ("Medications".to_string(), 2)]
        );
    }

    #[test]
    fn active_row_wraps_in_both_directions() {
        assert_eq!(move_active(Some(2), 3, 1), Some(0));
        assert_eq!(move_active(Some(0), 3, -1), Some(2));
        assert_eq!(move_active(None, 3, 1), Some(0));
        assert_eq!(move_active(None, 3, -1), Some(2));
        assert_eq!(move_active(Some(7), 3, 1), Some(0));
        assert_eq!(move_active(Some(1), 0, 1), None);
    }
}
