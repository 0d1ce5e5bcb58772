//! Form schemas: field definitions, the builder staging area and the
//! persisted form collection.

mod field;
mod form;
mod pending;
mod store;

pub use field::{Field, FieldInput, FieldType};
pub use form::{Form, FormId};
pub use pending::PendingForm;
pub use store::{FormLookup, FormStore, UNKNOWN_FORM};
