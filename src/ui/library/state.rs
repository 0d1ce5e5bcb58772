use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

pub const EMPTY_LIBRARY: &str = "No forms available. Create some forms first.";
pub const EMPTY_TABLE: &str = "No form data available.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryState {
    pub notice: Option<Notice>,
}

impl UiState for LibraryState {}
