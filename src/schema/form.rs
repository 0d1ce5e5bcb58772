use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::field::Field;

/// Opaque, unique form identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Fresh identifier (random UUIDv4, hyphenated).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FormId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FormId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, ordered collection of fields. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Form {
    pub fn new(id: FormId, name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id,
            name: name.into(),
            fields,
            extra: Map::new(),
        }
    }

    /// First field with `label`, if any.
    pub fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generated_ids_are_distinct() {
        let a = FormId::generate();
        let b = FormId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn legacy_numeric_ids_load() {
        let form: Form = serde_json::from_value(json!({
            "id": "1718000000000",
            "name": "Contact",
            "fields": [{ "label": "Name", "type": "text" }]
        }))
        .unwrap();
        assert_eq!(form.id.as_str(), "1718000000000");
        assert_eq!(form.fields.len(), 1);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = json!({
            "id": "f1",
            "name": "Survey",
            "fields": [],
            "createdBy": "ops"
        });
        let form: Form = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(form.extra.get("createdBy"), Some(&json!("ops")));
        assert_eq!(serde_json::to_value(&form).unwrap(), raw);
    }
}
