//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use std::path::Path;
use std::sync::Arc;

use formsmith::schema::{Field, FormId, PendingForm};
use formsmith::storage::{CorruptPolicy, JsonFileStore};
use formsmith::workspace::Workspace;
use tempfile::TempDir;

/// Workspace on a fresh temp directory. Keep the `TempDir` alive.
pub fn temp_workspace() -> (TempDir, Workspace) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let ws = open_at(dir.path());
    (dir, ws)
}

/// (Re)open a file-backed workspace at `dir`.
pub fn open_at(dir: &Path) -> Workspace {
    Workspace::with_storage(Arc::new(JsonFileStore::new(dir)), CorruptPolicy::Fail)
        .expect("Failed to open workspace")
}

/// Save a form named `name` with `fields`, returning its id.
pub fn save(ws: &mut Workspace, name: &str, fields: Vec<Field>) -> FormId {
    let mut pending = PendingForm::new();
    pending.set_name(name);
    for field in fields {
        pending.add_field(field);
    }
    ws.save_form(&mut pending)
        .expect("save failed")
        .expect("name was empty")
}

/// Contact form: Name (text), Email (email), Phone (phone).
pub fn contact_form(ws: &mut Workspace) -> FormId {
    save(
        ws,
        "Contact",
        vec![Field::text("Name"), Field::email("Email"), Field::phone("Phone")],
    )
}
