//! Name deriver.
//!
//! Computes every name a generation run needs from the entity class: the
//! entity's variable names, the controller and form classes, the route name
//! and path, the template path and the repository variable.

use tracing::debug;

use crate::casing::{as_file_path, as_route_name, as_route_path, lc_first};
use crate::class_name::ClassNameDetails;
use crate::inflector::{pluralize, singularize};
use crate::{NamingError, Result};

/// Root namespace of the target application.
pub const DEFAULT_ROOT_NAMESPACE: &str = "App";

/// Maximum number of form class candidates probed before giving up.
pub const DEFAULT_MAX_FORM_ATTEMPTS: usize = 100;

const ENTITY_NAMESPACE: &str = "Entity\\";
const CONTROLLER_NAMESPACE: &str = "Controller\\";
const FORM_NAMESPACE: &str = "Form\\";
const REPOSITORY_NAMESPACE: &str = "Repository\\";

/// Answers whether a fully-qualified class name is already defined.
///
/// Implemented for any `Fn(&str) -> bool`, so tests and callers can pass a
/// closure.
pub trait ClassProbe {
    /// Whether `class` already exists in the target project.
    fn class_exists(&self, class: &str) -> bool;
}

impl<F> ClassProbe for F
where
    F: Fn(&str) -> bool,
{
    fn class_exists(&self, class: &str) -> bool { self(class) }
}

/// The entity a run generates scaffolding for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Entity class name.
    pub class: ClassNameDetails,
    /// Variable name for a collection of entities (`products`).
    pub var_plural: String,
    /// Variable name for a single entity (`product`).
    pub var_singular: String,
    /// Identifier field name.
    pub identifier: String,
}

/// Repository class and the variable holding it in the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryNames {
    /// Custom repository class, if the entity declares one.
    pub class: Option<ClassNameDetails>,
    /// Variable name for the repository (`productRepository`).
    pub var: String,
}

/// All derived names for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    /// Controller class.
    pub controller: ClassNameDetails,
    /// Form type class, guaranteed not to collide with an existing class.
    pub form: ClassNameDetails,
    /// Route name prefix (`blog_post`).
    pub route_name: String,
    /// Route path (`/blog-post`).
    pub route_path: String,
    /// Template directory (`blog_post`).
    pub templates_path: String,
    /// Repository names.
    pub repository: RepositoryNames,
}

impl NameSet {
    /// The route path without its leading slash (`blog-post`).
    pub fn route_slug(&self) -> &str { self.route_path.trim_start_matches('/') }
}

/// Derives names under a root namespace.
#[derive(Debug, Clone)]
pub struct NameDeriver {
    root_namespace: String,
    max_form_attempts: usize,
}

impl Default for NameDeriver {
    fn default() -> Self { Self::new(DEFAULT_ROOT_NAMESPACE, DEFAULT_MAX_FORM_ATTEMPTS) }
}

impl NameDeriver {
    /// Create a deriver for `root_namespace` probing at most `max_form_attempts`
    /// form class names (at least one candidate is always probed).
    pub fn new(root_namespace: impl Into<String>, max_form_attempts: usize) -> Self {
        Self { root_namespace: root_namespace.into(), max_form_attempts: max_form_attempts.max(1) }
    }

    /// The root namespace, e.g. `App`.
    pub fn root_namespace(&self) -> &str { &self.root_namespace }

    /// The namespace entities live in, e.g. `App\Entity`.
    pub fn entity_namespace(&self) -> String {
        format!("{}\\{}", self.root_namespace, ENTITY_NAMESPACE.trim_end_matches('\\'))
    }

    /// Describe the entity with fully-qualified class `entity_class`.
    pub fn describe_entity(
        &self,
        entity_class: &str,
        identifier: &str,
    ) -> Result<EntityDescriptor> {
        let class = ClassNameDetails::create(
            &self.root_namespace,
            &format!("\\{}", entity_class.trim_start_matches('\\')),
            ENTITY_NAMESPACE,
            "",
        )?;
        let short_name = class.short_name().to_string();

        Ok(EntityDescriptor {
            var_plural: lc_first(&pluralize(&short_name)),
            var_singular: lc_first(&singularize(&short_name)),
            identifier: identifier.to_string(),
            class,
        })
    }

    /// Derive controller, form, route, template and repository names.
    ///
    /// Form class candidates are `<Entity>Type`, `<Entity>1Type`,
    /// `<Entity>2Type`, … and the first one `probe` reports as free wins.
    pub fn derive(
        &self,
        entity: &EntityDescriptor,
        repository_class: Option<&str>,
        probe: &dyn ClassProbe,
    ) -> Result<NameSet> {
        let base = entity.class.relative_name_without_suffix();

        let controller = ClassNameDetails::create(
            &self.root_namespace,
            &format!("{}Controller", base),
            CONTROLLER_NAMESPACE,
            "Controller",
        )?;
        let form = self.free_form_class(&base, probe)?;

        let relative = controller.relative_name_without_suffix();
        let repository = self.repository_names(entity, repository_class)?;

        Ok(NameSet {
            route_name: as_route_name(&relative),
            route_path: as_route_path(&relative),
            templates_path: as_file_path(&relative),
            controller,
            form,
            repository,
        })
    }

    fn free_form_class(&self, base: &str, probe: &dyn ClassProbe) -> Result<ClassNameDetails> {
        for attempt in 0..self.max_form_attempts {
            let counter = if attempt == 0 { String::new() } else { attempt.to_string() };
            let candidate = ClassNameDetails::create(
                &self.root_namespace,
                &format!("{}{}Type", base, counter),
                FORM_NAMESPACE,
                "Type",
            )?;

            if !probe.class_exists(candidate.full_name()) {
                return Ok(candidate);
            }
            debug!(candidate = candidate.full_name(), "form class already exists, trying next");
        }

        Err(NamingError::FormNameExhausted {
            base: format!("{}Type", base),
            attempts: self.max_form_attempts,
        })
    }

    fn repository_names(
        &self,
        entity: &EntityDescriptor,
        repository_class: Option<&str>,
    ) -> Result<RepositoryNames> {
        match repository_class {
            Some(class) => {
                let details = ClassNameDetails::create(
                    &self.root_namespace,
                    &format!("\\{}", class.trim_start_matches('\\')),
                    REPOSITORY_NAMESPACE,
                    "Repository",
                )?;
                let var = lc_first(&singularize(details.short_name()));
                Ok(RepositoryNames { class: Some(details), var })
            }
            None => Ok(RepositoryNames {
                class: None,
                var: format!("{}Repository", lc_first(entity.class.short_name())),
            }),
        }
    }
}

/// Derive the [`NameSet`] for an entity living in `App\Entity`.
///
/// Uses the default root namespace and attempt cap; the entity is assumed to
/// have no custom repository.
///
/// ```
/// let names = naming::derive_names("BlogPost", |_: &str| false).expect("names");
/// assert_eq!(names.controller.full_name(), "App\\Controller\\BlogPostController");
/// assert_eq!(names.form.short_name(), "BlogPostType");
/// assert_eq!(names.route_name, "blog_post");
/// assert_eq!(names.route_path, "/blog-post");
/// ```
pub fn derive_names(entity_short_name: &str, probe: impl ClassProbe) -> Result<NameSet> {
    let deriver = NameDeriver::default();
    let class = format!("{}\\{}", deriver.entity_namespace(), entity_short_name);
    let entity = deriver.describe_entity(&class, "id")?;
    deriver.derive(&entity, None, &probe)
}
