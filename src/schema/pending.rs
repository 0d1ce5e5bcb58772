use super::field::Field;

/// Staging area for a form that has not been saved yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingForm {
    name: String,
    fields: Vec<Field>,
}

impl PendingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Append `field`. Labels are not deduplicated.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Builder-style [`add_field`](Self::add_field).
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.fields.clear();
    }
}
