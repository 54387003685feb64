use crate::query::{FilterField, FilterInputs};

/// UI state that lives outside the browser controller
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current text of every filter input
    pub inputs: FilterInputs,
    /// Filter input receiving typed characters
    pub focused: FilterField,
    /// Highlighted table row (0-based)
    pub selected: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            inputs: FilterInputs::new(),
            focused: FilterField::Name,
            selected: 0,
        }
    }
}
