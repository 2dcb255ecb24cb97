#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Metadata mapper.
//!
//! Maps entity field and association metadata to client-side type tags
//! (`number`, `string`, `Date`, `any`, `Category`, `Category[]`) and selects
//! the members that end up in generated interfaces and forms.

pub mod members;
pub mod output_type;
pub mod type_adapter;

pub use members::{collect_interface_members, form_fields, FormField, InterfaceMember};
pub use output_type::OutputType;
pub use type_adapter::{TypeAdapter, TypeScriptAdapter};

/// Map a raw storage type tag to its output type.
///
/// Matching is exact and case-sensitive; unknown tags map to `any`.
///
/// ```
/// assert_eq!(mapper::map_field_type("integer").to_string(), "number");
/// assert_eq!(mapper::map_field_type("Integer").to_string(), "any");
/// ```
pub fn map_field_type(storage_type: &str) -> OutputType {
    TypeScriptAdapter.map_field_type(storage_type)
}

/// Map an association to its output type.
///
/// The owning side refers to a single related entity, the inverse side to a
/// collection of them.
pub fn map_association_type(related_short_name: &str, is_owning_side: bool) -> OutputType {
    TypeScriptAdapter.map_association_type(related_short_name, is_owning_side)
}
