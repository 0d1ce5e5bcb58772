use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::schema::FormId;

/// The single data record kept for a form: field label → entered value.
///
/// `data` keeps insertion order; a label's position is fixed by its first
/// write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "formId")]
    pub form_id: FormId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: IndexMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Submission {
    pub fn new(form_id: FormId) -> Self {
        Self {
            form_id,
            data: IndexMap::new(),
            extra: Map::new(),
        }
    }

    /// Stored value for `label`, empty string when absent.
    pub fn value(&self, label: &str) -> &str {
        self.data.get(label).map(String::as_str).unwrap_or("")
    }
}

/// `"data": null` is stored by older writers for a record with no values.
fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}
