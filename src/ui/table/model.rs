use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::schema::{FormId, FormLookup};
use crate::submission::Submission;
use crate::ui::table::state::{SortKey, SortOrder, TableState};

/// Text shown for a column the submission has no value for.
pub const MISSING_CELL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub form_id: FormId,
    pub form_name: String,
    /// One entry per column; `None` when the submission lacks that label.
    pub cells: Vec<Option<String>>,
}

impl TableRow {
    pub fn cell_text(&self, column: usize) -> &str {
        self.cells
            .get(column)
            .and_then(|cell| cell.as_deref())
            .unwrap_or(MISSING_CELL)
    }
}

/// Rendered table: header labels after the form-name column, then rows in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn build(
        forms: &(impl FormLookup + ?Sized),
        submissions: &[Submission],
        state: &TableState,
    ) -> Self {
        let columns = columns_of(submissions);

        let mut rows: Vec<TableRow> = submissions
            .iter()
            .map(|submission| TableRow {
                form_id: submission.form_id.clone(),
                form_name: forms.display_name(&submission.form_id).to_string(),
                cells: columns
                    .iter()
                    .map(|label| submission.data.get(label).cloned())
                    .collect(),
            })
            .collect();

        let column = match &state.sort_key {
            SortKey::FormName => None,
            SortKey::Column(label) => Some(columns.iter().position(|c| c == label)),
        };

        // `sort_by` is stable, so equal keys keep store order both ways.
        rows.sort_by(|a, b| {
            let ordering = match column {
                None => collate(&a.form_name, &b.form_name),
                Some(index) => {
                    let a = index.and_then(|i| a.cells[i].as_deref()).unwrap_or("");
                    let b = index.and_then(|i| b.cells[i].as_deref()).unwrap_or("");
                    collate(a, b)
                }
            };
            match state.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Union of data labels across `submissions`, in order of first appearance.
pub fn columns_of(submissions: &[Submission]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for submission in submissions {
        seen.extend(submission.data.keys().map(String::as_str));
    }
    seen.into_iter().map(str::to_string).collect()
}

/// Display collation: case-insensitive first, lowercase before uppercase
/// when the strings differ only in case.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
