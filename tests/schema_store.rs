mod common;

use std::collections::HashSet;

use common::{open_at, save, temp_workspace};
use formsmith::schema::{Field, FieldInput, FormId, PendingForm, UNKNOWN_FORM, FormLookup};

#[test]
fn pending_fields_keep_insertion_order_and_length() {
    let labels = ["A", "B", "A", "C", "B"];
    let mut pending = PendingForm::new();
    for (i, label) in labels.iter().enumerate() {
        pending.add_field(Field::text(*label));
        assert_eq!(pending.fields().len(), i + 1);
    }
    let stored: Vec<_> = pending.fields().iter().map(|f| f.label.as_str()).collect();
    assert_eq!(stored, labels);
}

#[test]
fn empty_name_never_mutates_forms() {
    let (dir, mut ws) = temp_workspace();
    let mut pending = PendingForm::new().with_field(Field::text("Name"));

    assert!(ws.save_form(&mut pending).unwrap().is_none());
    assert!(ws.forms().is_empty());
    assert_eq!(pending.fields().len(), 1);
    assert!(open_at(dir.path()).forms().is_empty());
}

#[test]
fn each_save_appends_one_form_with_fresh_id() {
    let (_dir, mut ws) = temp_workspace();
    let mut ids = HashSet::new();
    for i in 0..20 {
        let id = save(&mut ws, &format!("Form {i}"), vec![Field::text("Name")]);
        assert!(ids.insert(id));
        assert_eq!(ws.forms().len(), i + 1);
    }
}

#[test]
fn saved_forms_survive_reopen_in_order() {
    let (dir, mut ws) = temp_workspace();
    let first = save(&mut ws, "First", vec![Field::select("Size", ["S", "M", "L"])]);
    let second = save(&mut ws, "Second", vec![]);
    ws.close();

    let reopened = open_at(dir.path());
    let ids: Vec<_> = reopened.forms().forms().iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids, vec![first.clone(), second]);
    assert_eq!(
        reopened.form(&first).unwrap().fields[0].input,
        FieldInput::Select {
            options: vec!["S".into(), "M".into(), "L".into()]
        }
    );
}

#[test]
fn delete_leaves_submissions_behind() {
    let (dir, mut ws) = temp_workspace();
    let id = save(&mut ws, "Survey", vec![Field::text("Q1")]);
    ws.set_value(&id, "Q1", "yes").unwrap();

    assert!(ws.delete_form(&id).unwrap());
    assert!(ws.form(&id).is_none());
    assert!(!ws.delete_form(&id).unwrap());

    let reopened = open_at(dir.path());
    assert!(reopened.form(&id).is_none());
    assert_eq!(reopened.submissions().value(&id, "Q1"), Some("yes"));
    assert_eq!(reopened.forms().display_name(&id), UNKNOWN_FORM);
}

#[test]
fn delete_unknown_id_is_noop() {
    let (_dir, mut ws) = temp_workspace();
    save(&mut ws, "Keep", vec![]);
    assert!(!ws.delete_form(&FormId::from("nope")).unwrap());
    assert_eq!(ws.forms().len(), 1);
}
