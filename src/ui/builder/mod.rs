//! Form builder: staged form name, staged fields and the field draft.

mod intent;
mod reducer;
mod state;

pub use intent::BuilderIntent;
pub use reducer::{BuilderReducer, CHOICE_NEEDS_OPTIONS, LABEL_AND_TYPE_REQUIRED};
pub use state::{BuilderState, FieldDraft};
