//! Form type generator.

use std::collections::{BTreeMap, HashSet};

use mapper::FormField;
use metadata::short_class_name;
use naming::{ClassNameDetails, EntityDescriptor};

use super::SourceGenerator;
use crate::template::{TemplateName, TemplateParams};

const ENTITY_TYPE_CLASS: &str = "Symfony\\Bridge\\Doctrine\\Form\\Type\\EntityType";

/// Generates the form type binding an entity's editable fields.
pub struct FormGenerator<'a> {
    entity: &'a EntityDescriptor,
    form: &'a ClassNameDetails,
    fields: &'a [FormField],
}

impl<'a> FormGenerator<'a> {
    /// Create a generator for the `form` class of `entity` binding `fields`.
    pub fn new(
        entity: &'a EntityDescriptor,
        form: &'a ClassNameDetails,
        fields: &'a [FormField],
    ) -> Self {
        Self { entity, form, fields }
    }

    /// Local name of every imported class, keyed by fully-qualified name.
    ///
    /// A related entity whose short name is already taken is imported under
    /// an alias prefixed with its parent namespace segment (`BlogTag`).
    fn imports(&self) -> BTreeMap<String, String> {
        let mut base = vec![
            self.entity.class.full_name(),
            "Symfony\\Component\\Form\\AbstractType",
            "Symfony\\Component\\Form\\FormBuilderInterface",
            "Symfony\\Component\\OptionsResolver\\OptionsResolver",
        ];
        if self.fields.iter().any(|field| field.target_entity.is_some()) {
            base.push(ENTITY_TYPE_CLASS);
        }

        let mut taken = HashSet::from([self.form.short_name().to_string()]);
        let mut imports = BTreeMap::new();
        for class in base {
            taken.insert(short_class_name(class).to_string());
            imports.insert(class.to_string(), short_class_name(class).to_string());
        }

        for target in self.fields.iter().filter_map(|field| field.target_entity.as_deref()) {
            let target = target.trim_start_matches('\\');
            if imports.contains_key(target) {
                continue;
            }
            let local = free_alias(target, &taken);
            taken.insert(local.clone());
            imports.insert(target.to_string(), local);
        }
        imports
    }

    fn form_fields(&self, imports: &BTreeMap<String, String>) -> String {
        self.fields
            .iter()
            .map(|field| match &field.target_entity {
                None => format!("            ->add('{}')", field.name),
                Some(target) => {
                    let local = imports
                        .get(target.trim_start_matches('\\'))
                        .map(String::as_str)
                        .unwrap_or_else(|| short_class_name(target));
                    [
                        format!("            ->add('{}', EntityType::class, [", field.name),
                        format!("                'class' => {}::class,", local),
                        "                'choice_label' => 'id',".to_string(),
                        "            ])".to_string(),
                    ]
                    .join("\n")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn use_statements(imports: &BTreeMap<String, String>) -> String {
    imports
        .iter()
        .map(|(class, local)| {
            if short_class_name(class) == local.as_str() {
                format!("use {};\n", class)
            } else {
                format!("use {} as {};\n", class, local)
            }
        })
        .collect()
}

fn free_alias(class: &str, taken: &HashSet<String>) -> String {
    let short = short_class_name(class);
    if !taken.contains(short) {
        return short.to_string();
    }

    let parent = class.rsplit('\\').nth(1).unwrap_or_default();
    let prefixed = format!("{}{}", parent, short);
    let mut alias = prefixed.clone();
    let mut counter = 1;
    while taken.contains(&alias) {
        counter += 1;
        alias = format!("{}{}", prefixed, counter);
    }
    alias
}

impl SourceGenerator for FormGenerator<'_> {
    fn template(&self) -> TemplateName { TemplateName::Form }

    fn params(&self) -> TemplateParams {
        let imports = self.imports();
        let entity_local = imports
            .get(self.entity.class.full_name())
            .map(String::as_str)
            .unwrap_or_else(|| self.entity.class.short_name());

        TemplateParams::new()
            .with("NAMESPACE", self.form.namespace())
            .with("CLASS_NAME", self.form.short_name())
            .with("ENTITY_CLASS_NAME", entity_local)
            .with("USE_STATEMENTS", use_statements(&imports))
            .with("FORM_FIELDS", self.form_fields(&imports))
    }
}
