//! Input affordance per field.

use crate::schema::{Field, FieldInput};

/// The single input control a view presents for a field.
///
/// Whatever the control, each edit is reported as the raw string through
/// [`Workspace::set_value`](crate::workspace::Workspace::set_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance<'a> {
    SingleLine,
    MultiLine,
    Email,
    Phone,
    RadioGroup(&'a [String]),
    Dropdown(&'a [String]),
}

impl<'a> Affordance<'a> {
    pub fn for_field(field: &'a Field) -> Self {
        match &field.input {
            FieldInput::Text | FieldInput::Other { .. } => Self::SingleLine,
            FieldInput::Textarea => Self::MultiLine,
            FieldInput::Email => Self::Email,
            FieldInput::Phone => Self::Phone,
            FieldInput::Radio { options } => Self::RadioGroup(options),
            FieldInput::Select { options } => Self::Dropdown(options),
        }
    }

    /// Whether `value` is one the control can produce. Free-text controls
    /// accept anything; choice controls only their options or nothing.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::RadioGroup(options) | Self::Dropdown(options) => {
                value.is_empty() || options.iter().any(|o| o == value)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_type_maps_to_one_control() {
        assert_eq!(Affordance::for_field(&Field::text("a")), Affordance::SingleLine);
        assert_eq!(Affordance::for_field(&Field::textarea("a")), Affordance::MultiLine);
        assert_eq!(Affordance::for_field(&Field::email("a")), Affordance::Email);
        assert_eq!(Affordance::for_field(&Field::phone("a")), Affordance::Phone);

        let radio = Field::radio("a", ["x", "y"]);
        assert!(matches!(Affordance::for_field(&radio), Affordance::RadioGroup(opts) if opts.len() == 2));

        let unknown = Field::new("When", FieldInput::Other { type_name: "date".into() });
        assert_eq!(Affordance::for_field(&unknown), Affordance::SingleLine);
    }

    #[test]
    fn choice_controls_only_accept_options() {
        let field = Field::select("Size", ["S", "M"]);
        let control = Affordance::for_field(&field);
        assert!(control.accepts("M"));
        assert!(control.accepts(""));
        assert!(!control.accepts("XL"));
    }
}
