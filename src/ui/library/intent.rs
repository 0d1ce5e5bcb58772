use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LibraryIntent {
    /// Outcome of `Workspace::submit`.
    Submitted { accepted: bool },
    DismissNotice,
}

impl Intent for LibraryIntent {}
