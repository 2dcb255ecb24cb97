//! CRUD controller generator.

use naming::{EntityDescriptor, NameSet};

use super::SourceGenerator;
use crate::template::{TemplateName, TemplateParams};

/// Generates the JSON CRUD controller of an entity.
pub struct ControllerGenerator<'a> {
    entity: &'a EntityDescriptor,
    names: &'a NameSet,
}

impl<'a> ControllerGenerator<'a> {
    /// Create a generator for `entity` using the derived `names`.
    pub fn new(entity: &'a EntityDescriptor, names: &'a NameSet) -> Self { Self { entity, names } }
}

impl SourceGenerator for ControllerGenerator<'_> {
    fn template(&self) -> TemplateName { TemplateName::Controller }

    fn params(&self) -> TemplateParams {
        let entity = &self.entity.class;
        let repository = &self.names.repository;

        // Without a custom repository the controller asks the entity manager for one
        let (repository_use, repository_argument, repository_source) = match &repository.class {
            Some(class) => (
                format!("use {};\n", class.full_name()),
                format!(",\n        {} ${}", class.short_name(), repository.var),
                format!("${}", repository.var),
            ),
            None => (
                String::new(),
                String::new(),
                format!("$entityManager->getRepository({}::class)", entity.short_name()),
            ),
        };

        TemplateParams::new()
            .with("NAMESPACE", self.names.controller.namespace())
            .with("CLASS_NAME", self.names.controller.short_name())
            .with("ENTITY_FULL_CLASS_NAME", entity.full_name())
            .with("ENTITY_CLASS_NAME", entity.short_name())
            .with("FORM_FULL_CLASS_NAME", self.names.form.full_name())
            .with("FORM_CLASS_NAME", self.names.form.short_name())
            .with("ROUTE_PATH", self.names.route_path.as_str())
            .with("ROUTE_NAME", self.names.route_name.as_str())
            .with("TEMPLATES_PATH", self.names.templates_path.as_str())
            .with("ENTITY_VAR_PLURAL", self.entity.var_plural.as_str())
            .with("ENTITY_VAR_SINGULAR", self.entity.var_singular.as_str())
            .with("ENTITY_IDENTIFIER", self.entity.identifier.as_str())
            .with("REPOSITORY_VAR", repository.var.as_str())
            .with("REPOSITORY_USE", repository_use)
            .with("REPOSITORY_ARGUMENT", repository_argument)
            .with("REPOSITORY_SOURCE", repository_source)
    }
}
