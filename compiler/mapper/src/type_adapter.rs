//! Type adapter trait for client-language type mapping.
//!
//! A `TypeAdapter` decides how storage types and associations are spelled in
//! a generated client. [`TypeScriptAdapter`] is the adapter used for the
//! interface and data service files.

use crate::OutputType;

/// Maps entity metadata to client-side types.
///
/// ```rust
/// use mapper::{OutputType, TypeAdapter};
///
/// struct LooseAdapter;
///
/// impl TypeAdapter for LooseAdapter {
///     fn language_name(&self) -> &str { "loose" }
///
///     fn map_field_type(&self, _storage_type: &str) -> OutputType { OutputType::Any }
/// }
///
/// assert_eq!(LooseAdapter.map_field_type("integer"), OutputType::Any);
/// assert_eq!(LooseAdapter.map_association_type("Tag", false).to_string(), "Tag[]");
/// ```
pub trait TypeAdapter: Send + Sync {
    /// Target language name for logging and debugging purposes.
    fn language_name(&self) -> &str;

    /// Map a raw storage type tag to an output type.
    fn map_field_type(&self, storage_type: &str) -> OutputType;

    /// Map an association to an output type.
    fn map_association_type(&self, related_short_name: &str, is_owning_side: bool) -> OutputType {
        if is_owning_side {
            OutputType::Entity(related_short_name.to_string())
        } else {
            OutputType::EntityCollection(related_short_name.to_string())
        }
    }
}

/// TypeScript type mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptAdapter;

impl TypeAdapter for TypeScriptAdapter {
    fn language_name(&self) -> &str { "typescript" }

    fn map_field_type(&self, storage_type: &str) -> OutputType {
        match storage_type {
            // "dezimal" is an alias found in existing metadata and is kept as-is
            "integer" | "double" | "float" | "dezimal" => OutputType::Number,
            "text" | "string" => OutputType::String,
            "Date" | "Time" | "TimeStamp" | "datetime" => OutputType::Date,
            _ => OutputType::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_types() {
        let adapter = TypeScriptAdapter;
        for tag in ["integer", "double", "float", "dezimal"] {
            assert_eq!(adapter.map_field_type(tag), OutputType::Number, "{}", tag);
        }
        for tag in ["text", "string"] {
            assert_eq!(adapter.map_field_type(tag), OutputType::String, "{}", tag);
        }
        for tag in ["Date", "Time", "TimeStamp", "datetime"] {
            assert_eq!(adapter.map_field_type(tag), OutputType::Date, "{}", tag);
        }
    }

    #[test]
    fn test_unknown_and_case_variants_fall_back_to_any() {
        let adapter = TypeScriptAdapter;
        for tag in ["unknown_xyz", "", "boolean", "decimal", "Integer", "DATETIME", "date"] {
            assert_eq!(adapter.map_field_type(tag), OutputType::Any, "{}", tag);
        }
    }

    #[test]
    fn test_association_types() {
        let adapter = TypeScriptAdapter;
        assert_eq!(adapter.map_association_type("Category", true).to_string(), "Category");
        assert_eq!(adapter.map_association_type("Category", false).to_string(), "Category[]");
    }
}
