//! Angular data service generators.

use super::interface::interface_file_stem;
use super::SourceGenerator;
use crate::template::{TemplateName, TemplateParams};

/// Generates the Angular data service of an entity.
pub struct DataServiceGenerator<'a> {
    entity_class_name: &'a str,
    data_model: &'a str,
    with_interface: bool,
}

impl<'a> DataServiceGenerator<'a> {
    /// Create a generator for `entity_class_name` served under `data_model`
    /// (the route path without its leading slash).
    ///
    /// With `with_interface` the service is typed with the entity interface,
    /// otherwise with `any`.
    pub fn new(entity_class_name: &'a str, data_model: &'a str, with_interface: bool) -> Self {
        Self { entity_class_name, data_model, with_interface }
    }
}

impl SourceGenerator for DataServiceGenerator<'_> {
    fn template(&self) -> TemplateName { TemplateName::DataService }

    fn params(&self) -> TemplateParams {
        let (model_import, model_type) = if self.with_interface {
            (
                format!(
                    "import {{{}}} from '../interface/{}.interface';\n",
                    self.entity_class_name,
                    interface_file_stem(self.entity_class_name)
                ),
                self.entity_class_name.to_string(),
            )
        } else {
            (String::new(), "any".to_string())
        };

        TemplateParams::new()
            .with("ENTITY_CLASS_NAME", self.entity_class_name)
            .with("DATA_MODEL", self.data_model)
            .with("MODEL_IMPORT", model_import)
            .with("MODEL_TYPE", model_type)
    }
}

/// Generates the abstract service every data service extends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedBaseServiceGenerator;

impl SourceGenerator for SharedBaseServiceGenerator {
    fn template(&self) -> TemplateName { TemplateName::SharedBaseService }

    fn params(&self) -> TemplateParams { TemplateParams::new() }
}
