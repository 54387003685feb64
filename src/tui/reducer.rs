use tracing::debug;

use super::action::Action;
use super::state::AppState;
use crate::browser::{BrowserEvent, Control};

/// Pure state reducer
///
/// Applies `action` to the UI state and returns the browser event the action
/// triggers, if any. Every edit of a filter input re-runs the search with
/// the current value of every input. `visible_rows` bounds row selection.
pub fn reduce(
    mut state: AppState,
    action: &Action,
    visible_rows: usize,
) -> (AppState, Option<BrowserEvent>) {
    let event = match action {
        Action::FocusNext => {
            state.focused = state.focused.next();
            None
        }
        Action::FocusPrevious => {
            state.focused = state.focused.prev();
            None
        }
        Action::InsertChar(c) => {
            state.inputs.push_char(state.focused, *c);
            Some(BrowserEvent::Input(state.inputs.clone()))
        }
        Action::DeleteChar => {
            if state.inputs.pop_char(state.focused) {
                Some(BrowserEvent::Input(state.inputs.clone()))
            } else {
                None
            }
        }
        Action::ClearField => {
            if state.inputs.get(state.focused).is_empty() {
                None
            } else {
                state.inputs.set(state.focused, "");
                Some(BrowserEvent::Input(state.inputs.clone()))
            }
        }
        Action::LoadMore => Some(BrowserEvent::Click(Control::LoadMore)),
        Action::ShowLess => Some(BrowserEvent::Click(Control::ShowLess)),
        Action::SelectNext => {
            if state.selected + 1 < visible_rows {
                state.selected += 1;
            }
            None
        }
        Action::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
            None
        }
        Action::Quit => None,
    };

    if matches!(event, Some(BrowserEvent::Input(_))) {
        state.selected = 0;
    }
    if let Some(event) = &event {
        debug!("REDUCER: {:?} -> {:?}", action, event);
    }
    (state, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterField;

    #[test]
    fn test_typing_triggers_search_with_all_inputs() {
        let mut state = AppState::default();
        state.inputs.set(FilterField::Capital, "par");

        let (state, event) = reduce(state, &Action::InsertChar('f'), 20);

        assert_eq!(state.inputs.get(FilterField::Name), "f");
        match event {
            Some(BrowserEvent::Input(inputs)) => {
                assert_eq!(inputs.get(FilterField::Name), "f");
                assert_eq!(inputs.get(FilterField::Capital), "par");
            }
            other => panic!("expected search event, got {:?}", other),
        }
    }

    #[test]
    fn test_backspace_on_empty_field_does_nothing() {
        let (_, event) = reduce(AppState::default(), &Action::DeleteChar, 20);
        assert_eq!(event, None);
    }

    #[test]
    fn test_focus_moves_between_fields() {
        let (state, event) = reduce(AppState::default(), &Action::FocusNext, 20);
        assert_eq!(state.focused, FilterField::Code);
        assert_eq!(event, None);

        let (state, _) = reduce(state, &Action::FocusPrevious, 20);
        let (state, _) = reduce(state, &Action::FocusPrevious, 20);
        assert_eq!(state.focused, FilterField::Language);
    }

    #[test]
    fn test_paging_actions_become_clicks() {
        let (_, event) = reduce(AppState::default(), &Action::LoadMore, 20);
        assert_eq!(event, Some(BrowserEvent::Click(Control::LoadMore)));

        let (_, event) = reduce(AppState::default(), &Action::ShowLess, 20);
        assert_eq!(event, Some(BrowserEvent::Click(Control::ShowLess)));
    }

    #[test]
    fn test_selection_is_bounded() {
        let mut state = AppState::default();
        for _ in 0..5 {
            state = reduce(state, &Action::SelectNext, 3).0;
        }
        assert_eq!(state.selected, 2);

        for _ in 0..5 {
            state = reduce(state, &Action::SelectPrevious, 3).0;
        }
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_search_resets_selection() {
        let mut state = AppState::default();
        state.selected = 7;
        let (state, _) = reduce(state, &Action::InsertChar('a'), 20);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_clear_field() {
        let mut state = AppState::default();
        state.inputs.set(FilterField::Name, "fra");

        let (state, event) = reduce(state, &Action::ClearField, 20);
        assert_eq!(state.inputs.get(FilterField::Name), "");
        assert!(matches!(event, Some(BrowserEvent::Input(_))));

        let (_, event) = reduce(state, &Action::ClearField, 20);
        assert_eq!(event, None);
    }
}
