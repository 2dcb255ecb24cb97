//! Fully-qualified class name construction.

use crate::casing::{as_class_name, remove_suffix};
use crate::{NamingError, Result};

/// PHP reserved words that cannot be used as a class name or namespace segment.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "false", "final", "finally", "float", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "include_once", "instanceof", "insteadof",
    "int", "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never",
    "new", "null", "object", "or", "parent", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "return", "self", "static", "string", "switch",
    "throw", "trait", "true", "try", "unset", "use", "var", "void", "while", "xor", "yield",
];

/// A fully-qualified class name together with the namespace it was created in.
///
/// `App\Controller\Admin\PostController` created under the `Controller\`
/// prefix with suffix `Controller` has short name `PostController`, relative
/// name `Admin\PostController` and relative name without suffix `Admin\Post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNameDetails {
    full_name: String,
    namespace_prefix: String,
    suffix: String,
}

impl ClassNameDetails {
    /// Build class name details for `name`.
    ///
    /// A `name` starting with `\` is taken as fully qualified. Anything else
    /// is normalized with [`as_class_name`], given `suffix`, and placed under
    /// `<root_namespace>\<namespace_prefix>`.
    pub fn create(
        root_namespace: &str,
        name: &str,
        namespace_prefix: &str,
        suffix: &str,
    ) -> Result<Self> {
        let full_prefix = join_namespace(root_namespace, namespace_prefix);

        let full_name = match name.trim().strip_prefix('\\') {
            Some(absolute) => absolute.to_string(),
            None => {
                format!("{}\\{}", full_prefix.trim_end_matches('\\'), as_class_name(name, suffix))
            }
        };

        validate_class_name(&full_name)?;

        // Custom classes outside the expected namespace keep their full name as relative name
        let namespace_prefix =
            if full_name.starts_with(&full_prefix) { full_prefix } else { String::new() };

        Ok(Self { full_name, namespace_prefix, suffix: suffix.to_string() })
    }

    /// The fully-qualified class name.
    pub fn full_name(&self) -> &str { &self.full_name }

    /// The class name without namespace.
    pub fn short_name(&self) -> &str {
        self.full_name.rsplit('\\').next().unwrap_or(&self.full_name)
    }

    /// The namespace the class lives in.
    pub fn namespace(&self) -> &str {
        self.full_name.rsplit_once('\\').map(|(ns, _)| ns).unwrap_or("")
    }

    /// The class name relative to the namespace prefix it was created under.
    pub fn relative_name(&self) -> &str {
        self.full_name.strip_prefix(self.namespace_prefix.as_str()).unwrap_or(&self.full_name)
    }

    /// The relative name with the class suffix removed.
    pub fn relative_name_without_suffix(&self) -> String {
        remove_suffix(self.relative_name(), &self.suffix)
    }
}

fn join_namespace(root_namespace: &str, namespace_prefix: &str) -> String {
    let root = root_namespace.trim_matches('\\');
    let prefix = namespace_prefix.trim_matches('\\');
    match (root.is_empty(), prefix.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("{}\\", prefix),
        (false, true) => format!("{}\\", root),
        (false, false) => format!("{}\\{}\\", root, prefix),
    }
}

/// Check that every namespace segment of `class` is a usable PHP identifier.
pub fn validate_class_name(class: &str) -> Result<()> {
    let invalid =
        |reason: String| NamingError::InvalidClassName { class: class.to_string(), reason };

    for segment in class.split('\\') {
        let mut chars = segment.chars();
        let first = chars.next().ok_or_else(|| invalid("empty namespace segment".to_string()))?;

        if !(first.is_alphabetic() || first == '_')
            || !chars.all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(invalid(format!("\"{}\" is not a valid identifier", segment)));
        }

        if RESERVED_WORDS.contains(&segment.to_lowercase().as_str()) {
            return Err(invalid(format!("\"{}\" is a reserved keyword", segment)));
        }
    }

    Ok(())
}
