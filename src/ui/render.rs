//! Plain-text rendering of the views, used by the command-line front end.

use std::fmt::Write;

use crate::schema::{Field, Form};
use crate::submission::Submission;
use crate::ui::field::Affordance;
use crate::ui::library::{EMPTY_LIBRARY, EMPTY_TABLE};
use crate::ui::notice::Notice;
use crate::ui::table::{SortKey, TableState, TableView};

const FORM_NAME_HEADER: &str = "Form Name";
const COLUMN_GAP: &str = "  ";

/// One line per form: id, name and field count.
pub fn render_form_list(forms: &[Form]) -> String {
    if forms.is_empty() {
        return format!("{EMPTY_LIBRARY}\n");
    }
    let mut out = String::new();
    for form in forms {
        let _ = writeln!(out, "{}  {}  ({} fields)", form.id, form.name, form.fields.len());
    }
    out
}

/// A form with one control per field, filled from `submission`.
pub fn render_form(form: &Form, submission: Option<&Submission>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", form.name, form.id);
    for field in &form.fields {
        let value = submission.map(|s| s.value(&field.label)).unwrap_or("");
        render_field(&mut out, field, value);
    }
    out
}

/// Fields staged in the builder, with empty values.
pub fn render_preview(fields: &[Field]) -> String {
    let mut out = String::new();
    for field in fields {
        render_field(&mut out, field, "");
    }
    out
}

fn render_field(out: &mut String, field: &Field, value: &str) {
    match Affordance::for_field(field) {
        Affordance::SingleLine => {
            let _ = writeln!(out, "  {}: [{}]", field.label, value);
        }
        Affordance::MultiLine => {
            let _ = writeln!(out, "  {}:", field.label);
            for line in value.lines() {
                let _ = writeln!(out, "    | {line}");
            }
            if value.is_empty() {
                let _ = writeln!(out, "    |");
            }
        }
        Affordance::Email => {
            let _ = writeln!(out, "  {} (email): [{}]", field.label, value);
        }
        Affordance::Phone => {
            let _ = writeln!(out, "  {} (phone): [{}]", field.label, value);
        }
        Affordance::RadioGroup(options) => {
            let _ = writeln!(out, "  {}:", field.label);
            for option in options {
                let mark = if option == value { "(*)" } else { "( )" };
                let _ = writeln!(out, "    {mark} {option}");
            }
        }
        Affordance::Dropdown(options) => {
            let _ = writeln!(out, "  {}: <{}> of {}", field.label, value, options.join(" | "));
        }
    }
}

/// Aligned table with the active sort column marked.
pub fn render_table(view: &TableView, state: &TableState) -> String {
    if view.is_empty() {
        return format!("{EMPTY_TABLE}\n");
    }

    let mut headers = vec![FORM_NAME_HEADER.to_string()];
    headers.extend(view.columns.iter().cloned());
    for (i, header) in headers.iter_mut().enumerate() {
        let active = if i == 0 {
            state.sort_key == SortKey::FormName
        } else {
            state.is_sorted_by_column(&view.columns[i - 1])
        };
        if active {
            header.push_str(state.order.marker());
        }
    }

    let rows: Vec<Vec<&str>> = view
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.form_name.as_str()];
            cells.extend((0..view.columns.len()).map(|i| row.cell_text(i)));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        write_row(&mut out, row.iter().copied(), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join(COLUMN_GAP).trim_end());
}

pub fn render_notice(notice: &Notice) -> String {
    format!("{}\n", notice.message())
}
