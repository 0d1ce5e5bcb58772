use crate::ui::mvi::Intent;
use crate::ui::table::state::SortKey;

#[derive(Debug, Clone)]
pub enum TableIntent {
    /// Header clicked. Same key toggles direction, a new key sorts ascending.
    SortBy(SortKey),
    /// Back to form name, ascending.
    ResetSort,
}

impl Intent for TableIntent {}
