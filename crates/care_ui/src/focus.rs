//! DOM focus helpers and roving-focus index math.

use wasm_bindgen::JsCast;

use crate::keyboard::ShortcutAction;

/// Focuses an element by id and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

/// Resolves the next roving-focus index for `action` over items whose `enabled` flags are given.
///
/// Arrow movement wraps and skips disabled items; `Digit(n)` addresses the n-th item (1-based).
/// Returns `None` when the action does not move focus or no enabled target exists.
pub fn roving_index(enabled: &[bool], current: Option<usize>, action: ShortcutAction) -> Option<usize> {
    let len = enabled.len();
    if len == 0 {
        return None;
    }
    let is_enabled = |index: usize| enabled.get(index).copied().unwrap_or(false);

    match action {
        ShortcutAction::First => (0..len).find(|&index| is_enabled(index)),
        ShortcutAction::Last => (0..len).rev().find(|&index| is_enabled(index)),
        ShortcutAction::Next => {
            let start = current.map_or(0, |current| current + 1);
            (0..len)
                .map(|offset| (start + offset) % len)
                .find(|&index| is_enabled(index))
        }
        ShortcutAction::Previous => {
            let start = current.map_or(len - 1, |current| (current + len - 1) % len);
            (0..len)
                .map(|offset| (start + len - offset) % len)
                .find(|&index| is_enabled(index))
        }
        ShortcutAction::Digit(digit) => {
            let index = usize::from(digit).checked_sub(1)?;
            is_enabled(index).then_some(index)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn arrows_wrap_and_skip_disabled_items() {
        let enabled = [true, false, true, true];
        assert_eq!(roving_index(&enabled, Some(0), ShortcutAction::Next), Some(2));
        assert_eq!(roving_index(&enabled, Some(3), ShortcutAction::Next), Some(0));
        assert_eq!(roving_index(&enabled, Some(2), ShortcutAction::Previous), Some(0));
        assert_eq!(roving_index(&enabled, Some(0), ShortcutAction::Previous), Some(3));
    }

    #[test]
    fn missing_current_starts_at_the_edges() {
        let enabled = [false, true, true];
        assert_eq!(roving_index(&enabled, None, ShortcutAction::Next), Some(1));
        assert_eq!(roving_index(&enabled, None, ShortcutAction::Previous), Some(2));
    }

    #[test]
    fn edges_and_digits_respect_disabled_items() {
        let enabled = [false, true, true, false];
        assert_eq!(roving_index(&enabled, None, ShortcutAction::First), Some(1));
        assert_eq!(roving_index(&enabled, None, ShortcutAction::Last), Some(2));
        assert_eq!(roving_index(&enabled, None, ShortcutAction::Digit(2)), Some(1));
        assert_eq!(roving_index(&enabled, None, ShortcutAction::Digit(1)), None);
        assert_eq!(roving_index(&enabled, None, ShortcutAction::Digit(0)), None);
        assert_eq!(roving_index(&enabled, None, ShortcutAction::Digit(9)), None);
    }

    #[test]
    fn nothing_enabled_or_unrelated_actions_yield_none() {
        assert_eq!(roving_index(&[], None, ShortcutAction::Next), None);
        assert_eq!(roving_index(&[false, false], Some(0), ShortcutAction::Next), None);
        assert_eq!(roving_index(&[true], Some(0), ShortcutAction::Submit), None);
    }
}
