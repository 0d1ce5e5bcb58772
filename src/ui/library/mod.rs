//! Form library: every saved form, filled in place and submitted.

mod intent;
mod reducer;
mod state;

pub use intent::LibraryIntent;
pub use reducer::{LibraryReducer, SUBMIT_FAILED, SUBMIT_SUCCEEDED};
pub use state::{LibraryState, EMPTY_LIBRARY, EMPTY_TABLE};
