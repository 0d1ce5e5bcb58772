//! Data table over all submissions: column set, sort state, rows.

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::TableIntent;
pub use model::{collate, columns_of, TableRow, TableView, MISSING_CELL};
pub use reducer::TableReducer;
pub use state::{SortKey, SortOrder, TableState};
