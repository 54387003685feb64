/// Actions produced by key presses
///
/// Local actions (focus, editing, selection) only change `AppState`. Editing
/// a filter and the paging keys additionally hand a `BrowserEvent` to the
/// controller, see `reducer::reduce`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Filter inputs
    FocusNext,
    FocusPrevious,
    InsertChar(char),
    DeleteChar,
    ClearField,

    // Paging
    LoadMore,
    ShowLess,

    // Row selection
    SelectNext,
    SelectPrevious,

    Quit,
}
