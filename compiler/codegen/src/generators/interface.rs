//! TypeScript interface generator.

use std::collections::BTreeSet;

use mapper::InterfaceMember;
use naming::casing::lc_first;
use naming::inflector::singularize;

use super::SourceGenerator;
use crate::template::{TemplateName, TemplateParams};

/// File stem of the interface generated for the entity `short_name`.
///
/// ```
/// assert_eq!(codegen::generators::interface::interface_file_stem("BlogPost"), "blogPost");
/// ```
pub fn interface_file_stem(short_name: &str) -> String { lc_first(&singularize(short_name)) }

/// Generates a TypeScript interface from mapped members.
pub struct InterfaceGenerator<'a> {
    class_name: &'a str,
    members: &'a [InterfaceMember],
}

impl<'a> InterfaceGenerator<'a> {
    /// Create a generator for interface `class_name` with `members` in order.
    pub fn new(class_name: &'a str, members: &'a [InterfaceMember]) -> Self {
        Self { class_name, members }
    }

    fn imports(&self) -> String {
        let related: BTreeSet<&str> = self
            .members
            .iter()
            .filter_map(|member| member.type_.related_entity())
            .filter(|name| *name != self.class_name)
            .collect();

        if related.is_empty() {
            return String::new();
        }

        let mut imports: String = related
            .into_iter()
            .map(|name| {
                format!("import {{{}}} from './{}.interface';\n", name, interface_file_stem(name))
            })
            .collect();
        imports.push('\n');
        imports
    }
}

impl SourceGenerator for InterfaceGenerator<'_> {
    fn template(&self) -> TemplateName { TemplateName::Interface }

    fn params(&self) -> TemplateParams {
        let members = self
            .members
            .iter()
            .map(|member| format!("    {}: {};", member.name, member.type_))
            .collect::<Vec<_>>()
            .join("\n");

        TemplateParams::new()
            .with("IMPORTS", self.imports())
            .with("CLASS_NAME", self.class_name)
            .with("MEMBERS", members)
    }
}
