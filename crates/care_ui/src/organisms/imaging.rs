use super::*;
use crate::keyboard::{viewer_shortcuts, ShortcutAction};
use care_model::{format_day, ImagingStudy, ViewerState, WindowPreset};

const ZOOM_STEP: f32 = 1.25;
const PAN_STEP: f32 = 20.0;

/// Applies a viewer shortcut to `state`. Returns `false` for actions the viewer ignores.
pub fn apply_viewer_action(state: &mut ViewerState, action: ShortcutAction, image_count: usize) -> bool {
    match action {
        ShortcutAction::Next => state.step(1, image_count),
        ShortcutAction::Previous => state.step(-1, image_count),
        ShortcutAction::First => state.image_index = 0,
        ShortcutAction::Last => state.image_index = image_count.saturating_sub(1),
        ShortcutAction::ZoomIn => state.zoom_by(ZOOM_STEP),
        ShortcutAction::ZoomOut => state.zoom_by(1.0 / ZOOM_STEP),
        ShortcutAction::Pan(dx, dy) => state.pan_by(f32::from(dx) * PAN_STEP, f32::from(dy) * PAN_STEP),
        ShortcutAction::Reset => state.reset_view(),
        ShortcutAction::Rotate => state.rotate_clockwise(),
        ShortcutAction::Invert => state.toggle_invert(),
        _ => return false,
    }
    true
}

fn image_counter(index: usize, count: usize) -> String {
    if count == 0 {
        "No images".to_string()
    } else {
        format!("Image {} of {count}", index.min(count - 1) + 1)
    }
}

#[component]
/// Study viewer with series selection, slice stepping, zoom/pan/rotate, inversion, and
/// modality window presets.
///
/// The image region is focusable; while focused it takes the arrow, page, zoom (`+`/`-`),
/// reset (`0`), rotate (`r`), and invert (`i`) keys. Shift+arrows pan.
pub fn ImagingViewer(
    #[prop(into)] studies: MaybeSignal<Vec<ImagingStudy>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let config = use_ui_config();
    let studies = Signal::derive(move || studies.get());
    let study_index = create_rw_signal(0usize);
    let series_index = create_rw_signal(0usize);
    let viewer = create_rw_signal(ViewerState::default());
    let shortcuts = store_value(viewer_shortcuts());

    let study = Signal::derive(move || {
        studies.with(|studies| studies.get(study_index.get()).or_else(|| studies.first()).cloned())
    });
    let images = Signal::derive(move || {
        study.with(|study| {
            study
                .as_ref()
                .and_then(|study| study.series.get(series_index.get()).or_else(|| study.series.first()))
                .map(|series| series.image_urls.clone())
                .unwrap_or_default()
        })
    });
    let image_count = Signal::derive(move || images.with(Vec::len));
    let current_image = Signal::derive(move || {
        let index = viewer.with(|viewer| viewer.image_index);
        images.with(|images| images.get(index).cloned())
    });
    let presets = Signal::derive(move || {
        study.with(|study| {
            study
                .as_ref()
                .map(|study| study.modality.presets().to_vec())
                .unwrap_or_default()
        })
    });

    let study_options = Signal::derive(move || {
        let style = config.with(|config| config.date_style);
        studies.with(|studies| {
            studies
                .iter()
                .enumerate()
                .map(|(index, study)| {
                    let label = match study.performed_on {
                        Some(on) => format!("{} · {} · {}", study.modality.label(), study.description, format_day(on, style)),
                        None => format!("{} · {}", study.modality.label(), study.description),
                    };
                    SelectOption::new(index.to_string(), label)
                })
                .collect::<Vec<_>>()
        })
    });
    let series_options = Signal::derive(move || {
        study.with(|study| {
            study
                .iter()
                .flat_map(|study| study.series.iter())
                .enumerate()
                .map(|(index, series)| {
                    SelectOption::new(
                        index.to_string(),
                        format!("{} ({} images)", series.description, series.image_urls.len()),
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    let act = move |action: ShortcutAction| -> bool {
        let count = image_count.get_untracked();
        let mut handled = false;
        viewer.update(|viewer| handled = apply_viewer_action(viewer, action, count));
        handled
    };
    let tool = move |action: ShortcutAction| {
        Callback::new(move |_: MouseEvent| {
            act(action);
        })
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let mode = config.with_untracked(|config| config.shortcut_mode());
        if let Some(action) = shortcuts.with_value(|table| table.dispatch(&ev, mode)) {
            if act(action) {
                ev.prevent_default();
            }
        }
    };

    let preset_buttons = move || {
        let active = viewer.with(|viewer| (viewer.window_width, viewer.window_level));
        presets
            .get()
            .into_iter()
            .map(|preset: WindowPreset| {
                let variant = if active == (preset.width, preset.level) {
                    ButtonVariant::Secondary
                } else {
                    ButtonVariant::Ghost
                };
                view! {
                    <Button
                        variant=variant
                        size=ButtonSize::Sm
                        title=format!("Window {} / Level {}", preset.width, preset.level)
                        on_click=Callback::new(move |_: MouseEvent| viewer.update(|viewer| viewer.apply_preset(preset)))
                    >
                        {preset.name}
                    </Button>
                }
            })
            .collect_view()
    };

    view! {
        <Card layout_class=layout_class.unwrap_or("care-imaging-viewer") title="Imaging">
            <Show
                when=move || studies.with(|studies| !studies.is_empty())
                fallback=|| view! { <EmptyState title="No imaging studies" icon=IconName::Image /> }
            >
                <div class="flex flex-col gap-3" data-care-kind="imaging-viewer">
                    <div class="flex flex-wrap items-end gap-3">
                        <FormField label="Study">
                            <Select
                                options=study_options
                                value=Signal::derive(move || study_index.get().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    if let Ok(index) = raw.parse::<usize>() {
                                        study_index.set(index);
                                        series_index.set(0);
                                        viewer.set(ViewerState::default());
                                    }
                                })
                            />
                        </FormField>
                        <FormField label="Series">
                            <Select
                                options=series_options
                                value=Signal::derive(move || series_index.get().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    if let Ok(index) = raw.parse::<usize>() {
                                        series_index.set(index);
                                        viewer.update(|viewer| viewer.image_index = 0);
                                    }
                                })
                            />
                        </FormField>
                    </div>
                    <div class="flex flex-wrap items-center gap-1" role="toolbar" aria-label="Viewer tools">
                        <IconButton icon=IconName::ZoomIn aria_label="Zoom in" on_click=tool(ShortcutAction::ZoomIn) />
                        <IconButton icon=IconName::ZoomOut aria_label="Zoom out" on_click=tool(ShortcutAction::ZoomOut) />
                        <IconButton icon=IconName::Rotate aria_label="Rotate" on_click=tool(ShortcutAction::Rotate) />
                        <IconButton
                            icon=IconName::Contrast
                            aria_label="Invert"
                            pressed=Signal::derive(move || viewer.with(|viewer| viewer.inverted))
                            on_click=tool(ShortcutAction::Invert)
                        />
                        <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on_click=tool(ShortcutAction::Reset)>
                            "Reset"
                        </Button>
                        <Divider vertical=true />
                        {preset_buttons}
                    </div>
                    <div
                        class="care-imaging-viewer__stage relative flex h-96 items-center justify-center overflow-hidden rounded-md bg-black focus:outline-none focus-visible:ring-2 focus-visible:ring-[var(--care-color-focus)]"
                        tabindex="0"
                        role="region"
                        aria-label="Image viewport"
                        data-care-zoom=move || format!("{:.2}", viewer.with(|viewer| viewer.zoom))
                        data-care-inverted=move || bool_token(viewer.with(|viewer| viewer.inverted))
                        on:keydown=on_keydown
                    >
                        {move || match current_image.get() {
                            Some(src) => view! {
                                <img
                                    class="max-h-full max-w-full select-none"
                                    src=src
                                    alt=move || image_counter(viewer.with(|viewer| viewer.image_index), image_count.get())
                                    draggable="false"
                                    style:transform=move || viewer.with(ViewerState::css_transform)
                                    style:filter=move || viewer.with(ViewerState::css_filter)
                                />
                            }
                            .into_view(),
                            None => view! { <Text tone=Tone::Muted>"No images in this series"</Text> }.into_view(),
                        }}
                    </div>
                    <div class="flex items-center justify-between">
                        <IconButton
                            icon=IconName::ChevronLeft
                            aria_label="Previous image"
                            disabled=Signal::derive(move || viewer.with(|viewer| viewer.image_index == 0))
                            on_click=tool(ShortcutAction::Previous)
                        />
                        <span class="text-sm tabular-nums" aria-live="polite" data-care-slot="counter">
                            {move || image_counter(viewer.with(|viewer| viewer.image_index), image_count.get())}
                        </span>
                        <IconButton
                            icon=IconName::ChevronRight
                            aria_label="Next image"
                            disabled=Signal::derive(move || {
                                viewer.with(|viewer| viewer.image_index + 1 >= image_count.get())
                            })
                            on_click=tool(ShortcutAction::Next)
                        />
                    </div>
                </div>
            </Show>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slice_navigation_stays_in_bounds() {
        let mut state = ViewerState::default();
        assert!(apply_viewer_action(&mut state, ShortcutAction::Previous, 3));
        assert_eq!(state.image_index, 0);
        apply_viewer_action(&mut state, ShortcutAction::Last, 3);
        assert_eq!(state.image_index, 2);
        apply_viewer_action(&mut state, ShortcutAction::Next, 3);
        assert_eq!(state.image_index, 2);
        apply_viewer_action(&mut state, ShortcutAction::First, 3);
        assert_eq!(state.image_index, 0);
        apply_viewer_action(&mut state, ShortcutAction::Last, 0);
        assert_eq!(state.image_index, 0);
    }

    #[test]
    fn transforms_follow_shortcuts_and_reset_keeps_slice() {
        let mut state = ViewerState::default();
        apply_viewer_action(&mut state, ShortcutAction::Next, 5);
        apply_viewer_action(&mut state, ShortcutAction::ZoomIn, 5);
        apply_viewer_action(&mut state, ShortcutAction::Pan(1, -1), 5);
        apply_viewer_action(&mut state, ShortcutAction::Rotate, 5);
        apply_viewer_action(&mut state, ShortcutAction::Invert, 5);
        assert_eq!(state.zoom, 1.25);
        assert_eq!((state.pan_x, state.pan_y), (20.0, -20.0));
        assert_eq!(state.rotation, 90);
        assert!(state.inverted);

        apply_viewer_action(&mut state, ShortcutAction::Reset, 5);
        assert_eq!(
            state,
            ViewerState {
                image_index: 1,
                ..ViewerState::default()
            }
        );
    }

    #[test]
    fn unrelated_actions_are_ignored() {
        let mut state = ViewerState::default();
        assert!(!apply_viewer_action(&mut state, ShortcutAction::Submit, 4));
        assert!(!apply_viewer_action(&mut state, ShortcutAction::Digit(3), 4));
        assert_eq!(state, ViewerState::default());
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(image_counter(0, 12), "Image 1 of 12");
        assert_eq!(image_counter(40, 12), "Image 12 of 12");
        assert_eq!(image_counter(0, 0), "No images");
    }
}
