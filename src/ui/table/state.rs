use crate::ui::mvi::UiState;

/// Column the table is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// The form's display name (first column).
    #[default]
    FormName,
    /// A submission data column, by field label.
    Column(String),
}

impl SortKey {
    /// Key for a header name as typed by a user: `form-name` selects the
    /// first column, anything else a data column.
    pub fn from_header(header: &str) -> Self {
        if header == "form-name" {
            Self::FormName
        } else {
            Self::Column(header.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Suffix for the active column header.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Ascending => " ^",
            Self::Descending => " v",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    pub sort_key: SortKey,
    pub order: SortOrder,
}

impl UiState for TableState {}

impl TableState {
    /// Whether the data column `label` is the active sort column.
    pub fn is_sorted_by_column(&self, label: &str) -> bool {
        matches!(&self.sort_key, SortKey::Column(active) if active == label)
    }
}
