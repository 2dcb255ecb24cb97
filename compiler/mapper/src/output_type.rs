//! Output type tags.

use std::fmt;

/// Type of an interface member as written into generated client code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputType {
    /// `number`
    Number,
    /// `string`
    String,
    /// `Date`
    Date,
    /// `any`
    Any,
    /// A single related entity, rendered as its short name.
    Entity(String),
    /// A collection of related entities, rendered as `Name[]`.
    EntityCollection(String),
}

impl OutputType {
    /// Short name of the related entity, for association types.
    pub fn related_entity(&self) -> Option<&str> {
        match self {
            OutputType::Entity(name) | OutputType::EntityCollection(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Number => f.write_str("number"),
            OutputType::String => f.write_str("string"),
            OutputType::Date => f.write_str("Date"),
            OutputType::Any => f.write_str("any"),
            OutputType::Entity(name) => f.write_str(name),
            OutputType::EntityCollection(name) => write!(f, "{}[]", name),
        }
    }
}

impl From<OutputType> for String {
    fn from(value: OutputType) -> Self { value.to_string() }
}
