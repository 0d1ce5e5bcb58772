//! Field definitions.
//!
//! On the wire a field is `{ "label", "type", "options"? }`. In memory the
//! options only exist on the choice variants of [`FieldInput`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat field type, as stored in the `type` key and picked in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Textarea,
    Radio,
    Select,
    Email,
    Phone,
}

impl FieldType {
    /// Stable wire name. Once published, do not rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// All variants, in picker order.
    pub fn all() -> &'static [FieldType] {
        &[
            Self::Text,
            Self::Textarea,
            Self::Radio,
            Self::Select,
            Self::Email,
            Self::Phone,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == s)
    }

    /// Whether fields of this type carry a list of options.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Radio | Self::Select)
    }

    /// Build the input variant. `options` is ignored for non-choice types.
    pub fn into_input(self, options: Vec<String>) -> FieldInput {
        match self {
            Self::Text => FieldInput::Text,
            Self::Textarea => FieldInput::Textarea,
            Self::Email => FieldInput::Email,
            Self::Phone => FieldInput::Phone,
            Self::Radio => FieldInput::Radio { options },
            Self::Select => FieldInput::Select { options },
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of input a field takes. Choice variants own their options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Textarea,
    Email,
    Phone,
    Radio { options: Vec<String> },
    Select { options: Vec<String> },
    /// A stored `type` this version does not know. Kept verbatim and
    /// presented as single-line text.
    Other { type_name: String },
}

impl FieldInput {
    /// The known field type, `None` for [`FieldInput::Other`].
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Self::Text => Some(FieldType::Text),
            Self::Textarea => Some(FieldType::Textarea),
            Self::Email => Some(FieldType::Email),
            Self::Phone => Some(FieldType::Phone),
            Self::Radio { .. } => Some(FieldType::Radio),
            Self::Select { .. } => Some(FieldType::Select),
            Self::Other { .. } => None,
        }
    }

    /// Value of the stored `type` key.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Other { type_name } => type_name,
            known => known.field_type().map_or("", |t| t.as_str()),
        }
    }

    /// Options of a choice field, `None` for free-text inputs.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Radio { options } | Self::Select { options } => Some(options),
            _ => None,
        }
    }
}

/// One input definition within a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldRecord", into = "FieldRecord")]
pub struct Field {
    pub label: String,
    pub input: FieldInput,
    /// Unrecognised keys from the stored record, written back unchanged.
    pub extra: Map<String, Value>,
}

impl Field {
    pub fn new(label: impl Into<String>, input: FieldInput) -> Self {
        Self {
            label: label.into(),
            input,
            extra: Map::new(),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(label, FieldInput::Text)
    }

    pub fn textarea(label: impl Into<String>) -> Self {
        Self::new(label, FieldInput::Textarea)
    }

    pub fn email(label: impl Into<String>) -> Self {
        Self::new(label, FieldInput::Email)
    }

    pub fn phone(label: impl Into<String>) -> Self {
        Self::new(label, FieldInput::Phone)
    }

    pub fn radio<S: Into<String>>(label: impl Into<String>, options: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            label,
            FieldInput::Radio {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn select<S: Into<String>>(label: impl Into<String>, options: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            label,
            FieldInput::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn field_type(&self) -> Option<FieldType> {
        self.input.field_type()
    }
}

/// Wire shape of a [`Field`].
#[derive(Serialize, Deserialize)]
struct FieldRecord {
    label: String,
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<FieldRecord> for Field {
    fn from(record: FieldRecord) -> Self {
        let mut extra = record.extra;
        let input = match FieldType::parse(&record.field_type) {
            Some(field_type) if field_type.is_choice() => {
                field_type.into_input(record.options.unwrap_or_default())
            }
            known => {
                // Options on a free-text field have no meaning but are kept
                // so the record round-trips.
                if let Some(options) = record.options {
                    extra.insert("options".to_string(), Value::from(options));
                }
                match known {
                    Some(field_type) => field_type.into_input(Vec::new()),
                    None => FieldInput::Other {
                        type_name: record.field_type,
                    },
                }
            }
        };

        Self {
            label: record.label,
            input,
            extra,
        }
    }
}

impl From<Field> for FieldRecord {
    fn from(field: Field) -> Self {
        let field_type = field.input.type_name().to_string();
        let mut extra = field.extra;
        let options = match field.input {
            FieldInput::Radio { options } | FieldInput::Select { options } => {
                extra.remove("options");
                Some(options)
            }
            _ => None,
        };
        Self {
            label: field.label,
            field_type,
            options,
            extra,
        }
    }
}
