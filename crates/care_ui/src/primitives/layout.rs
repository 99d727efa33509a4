use super::*;

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=classes![
                "care-stack flex flex-col",
                gap.classes(),
                align.classes(),
                padding.classes(),
                layout_class
            ]
            data-care-primitive="true"
            data-care-kind="stack"
            data-care-gap=gap.token()
            data-care-align=align.token()
            data-care-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal row, wrapping by default.
pub fn Row(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(default = true)] wrap: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=classes![
                "care-row flex flex-row",
                ("flex-wrap", wrap),
                ("flex-nowrap", !wrap),
                gap.classes(),
                align.classes(),
                justify.classes(),
                layout_class
            ]
            data-care-primitive="true"
            data-care-kind="row"
            data-care-gap=gap.token()
            data-care-align=align.token()
            data-care-justify=justify.token()
            data-care-wrap=bool_token(wrap)
        >
            {children()}
        </div>
    }
}

/// Tailwind span class for a 12-column track; `0` lets the column size to its content.
pub(crate) fn column_span_class(span: u8) -> &'static str {
    match span {
        0 => "flex-none",
        1 => "basis-1/12",
        2 => "basis-2/12",
        3 => "basis-3/12",
        4 => "basis-4/12",
        5 => "basis-5/12",
        6 => "basis-6/12",
        7 => "basis-7/12",
        8 => "basis-8/12",
        9 => "basis-9/12",
        10 => "basis-10/12",
        11 => "basis-11/12",
        _ => "basis-full",
    }
}

#[component]
/// Flex child occupying `span` twelfths of its row, or the remaining space when `span` is unset.
pub fn Column(
    #[prop(optional)] span: Option<u8>,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=classes![
                "care-column flex min-w-0 flex-col",
                span.map(column_span_class).unwrap_or("flex-1"),
                gap.classes(),
                layout_class
            ]
            data-care-primitive="true"
            data-care-kind="column"
            data-care-span=span.map(|span| span.min(12).to_string())
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Maximum widths for [`Container`].
pub enum ContainerWidth {
    /// Reading width.
    Sm,
    /// Form width.
    Md,
    /// Default page width.
    #[default]
    Lg,
    /// Dashboard width.
    Xl,
    /// No maximum.
    Full,
}

impl ContainerWidth {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }
}

impl ClassVariant for ContainerWidth {
    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "max-w-screen-sm",
            Self::Md => "max-w-screen-md",
            Self::Lg => "max-w-screen-lg",
            Self::Xl => "max-w-screen-xl",
            Self::Full => "max-w-none",
        }
    }
}

#[component]
/// Centered, width-capped page container.
pub fn Container(
    #[prop(default = ContainerWidth::Lg)] width: ContainerWidth,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=classes!["care-container mx-auto w-full", width.classes(), padding.classes(), layout_class]
            data-care-primitive="true"
            data-care-kind="container"
            data-care-width=width.token()
        >
            {children()}
        </div>
    }
}

/// Tailwind grid template for `columns` equal tracks (clamped to `1..=12`).
pub(crate) fn grid_columns_class(columns: u8) -> &'static str {
    match columns {
        0 | 1 => "grid-cols-1",
        2 => "grid-cols-2",
        3 => "grid-cols-3",
        4 => "grid-cols-4",
        5 => "grid-cols-5",
        6 => "grid-cols-6",
        7 => "grid-cols-7",
        8 => "grid-cols-8",
        9 => "grid-cols-9",
        10 => "grid-cols-10",
        11 => "grid-cols-11",
        _ => "grid-cols-12",
    }
}

#[component]
/// Equal-track grid.
pub fn Grid(
    #[prop(default = 2)] columns: u8,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=classes![
                "care-grid grid",
                grid_columns_class(columns),
                gap.classes(),
                padding.classes(),
                layout_class
            ]
            data-care-primitive="true"
            data-care-kind="grid"
            data-care-columns=columns.clamp(1, 12)
            data-care-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Application shell with header, optional sidebar, main region, and footer.
pub fn Layout(
    #[prop(optional)] header: Option<Children>,
    #[prop(optional)] sidebar: Option<Children>,
    #[prop(optional)] footer: Option<Children>,
    #[prop(optional, into)] main_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let has_sidebar = sidebar.is_some();
    view! {
        <div
            class=classes![
                "care-layout grid min-h-screen grid-rows-[auto_1fr_auto]",
                ("md:grid-cols-[16rem_1fr]", has_sidebar),
                layout_class
            ]
            data-care-primitive="true"
            data-care-kind="layout"
            data-care-sidebar=bool_token(has_sidebar)
        >
            {header
                .map(|header| {
                    view! {
                        <header class="care-layout__header col-span-full" data-care-slot="header">
                            {header()}
                        </header>
                    }
                })}
            {sidebar
                .map(|sidebar| {
                    view! {
                        <aside class="care-layout__sidebar hidden md:block" data-care-slot="sidebar">
                            {sidebar()}
                        </aside>
                    }
                })}
            <main class="care-layout__main min-w-0" data-care-slot="main" aria-label=main_label>
                {children()}
            </main>
            {footer
                .map(|footer| {
                    view! {
                        <footer class="care-layout__footer col-span-full" data-care-slot="footer">
                            {footer()}
                        </footer>
                    }
                })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grid_columns_clamp_to_twelve_tracks() {
        assert_eq!(grid_columns_class(0), "grid-cols-1");
        assert_eq!(grid_columns_class(3), "grid-cols-3");
        assert_eq!(grid_columns_class(40), "grid-cols-12");
    }

    #[test]
    fn column_spans_map_to_twelfths() {
        assert_eq!(column_span_class(0), "flex-none");
        assert_eq!(column_span_class(6), "basis-6/12");
        assert_eq!(column_span_class(12), "basis-full");
        assert_eq!(column_span_class(20), "basis-full");
    }

    #[test]
    fn container_defaults_to_page_width() {
        assert_eq!(ContainerWidth::default(), ContainerWidth::Lg);
        assert_eq!(ContainerWidth::Full.classes(), "max-w-none");
    }
}
