//! Case conversions used to turn class names into routes, paths and variables.
//!
//! Relative class names may contain namespace separators (`Admin\BlogPost`).
//! Each namespace segment is converted on its own and the results are joined
//! with the separator of the target convention.

use convert_case::{Case, Casing};

/// Lower-case the first character.
pub fn lc_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Upper-case the first character.
pub fn uc_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn segments(value: &str) -> impl Iterator<Item = &str> {
    value.trim().split('\\').filter(|s| !s.is_empty())
}

/// `BlogPost` → `blog_post`
pub fn as_snake_case(value: &str) -> String { value.trim().to_case(Case::Snake) }

/// `BlogPost` → `blog-post`
pub fn as_slug(value: &str) -> String { value.trim().to_case(Case::Kebab) }

/// Route name for a relative class name.
///
/// ```
/// use naming::casing::as_route_name;
/// assert_eq!(as_route_name("BlogPost"), "blog_post");
/// assert_eq!(as_route_name("Admin\\BlogPost"), "admin_blog_post");
/// ```
pub fn as_route_name(value: &str) -> String {
    segments(value).map(as_snake_case).collect::<Vec<_>>().join("_")
}

/// Route path for a relative class name.
///
/// ```
/// use naming::casing::as_route_path;
/// assert_eq!(as_route_path("BlogPost"), "/blog-post");
/// assert_eq!(as_route_path("Admin\\BlogPost"), "/admin/blog-post");
/// ```
pub fn as_route_path(value: &str) -> String {
    format!("/{}", segments(value).map(as_slug).collect::<Vec<_>>().join("/"))
}

/// Template directory for a relative class name.
///
/// ```
/// use naming::casing::as_file_path;
/// assert_eq!(as_file_path("Admin\\BlogPost"), "admin/blog_post");
/// ```
pub fn as_file_path(value: &str) -> String {
    segments(value).map(as_snake_case).collect::<Vec<_>>().join("/")
}

/// Normalize free-form input into a class name carrying `suffix`.
///
/// `-`, `_`, `.`, `:` and spaces separate words; every word and namespace
/// segment is upper-cased at its first letter.
///
/// ```
/// use naming::casing::as_class_name;
/// assert_eq!(as_class_name("blog_post", "Controller"), "BlogPostController");
/// assert_eq!(as_class_name("BlogPostController", "Controller"), "BlogPostController");
/// assert_eq!(as_class_name("admin\\post", ""), "Admin\\Post");
/// ```
pub fn as_class_name(value: &str, suffix: &str) -> String {
    let name = value
        .trim()
        .split('\\')
        .map(|segment| {
            segment
                .split(|c: char| matches!(c, '-' | '_' | '.' | ':') || c.is_whitespace())
                .map(uc_first)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\\");

    add_suffix(&name, suffix)
}

/// Whether `value` ends with `suffix`, compared case-insensitively.
pub fn has_suffix(value: &str, suffix: &str) -> bool {
    if suffix.is_empty() || value.len() < suffix.len() {
        return false;
    }
    value
        .get(value.len() - suffix.len()..)
        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

/// Strip `suffix` from `value` when present.
pub fn remove_suffix(value: &str, suffix: &str) -> String {
    if has_suffix(value, suffix) {
        value[..value.len() - suffix.len()].to_string()
    } else {
        value.to_string()
    }
}

/// Ensure `value` ends with exactly one `suffix`.
pub fn add_suffix(value: &str, suffix: &str) -> String {
    format!("{}{}", remove_suffix(value, suffix), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lc_first() {
        assert_eq!(lc_first("Product"), "product");
        assert_eq!(lc_first("BlogPost"), "blogPost");
        assert_eq!(lc_first(""), "");
    }

    #[test]
    fn test_route_conventions() {
        assert_eq!(as_route_name("Product"), "product");
        assert_eq!(as_route_path("Product"), "/product");
        assert_eq!(as_slug("BlogPost"), "blog-post");
        assert_eq!(as_file_path("BlogPost"), "blog_post");
    }

    #[test]
    fn test_suffix_handling() {
        assert!(has_suffix("ProductType", "type"));
        assert!(!has_suffix("Type", "ProductType"));
        assert!(!has_suffix("Product", ""));
        assert_eq!(remove_suffix("ProductController", "Controller"), "Product");
        assert_eq!(remove_suffix("Product", "Controller"), "Product");
        assert_eq!(add_suffix("Producttype", "Type"), "ProductType");
    }

    #[test]
    fn test_as_class_name_separators() {
        assert_eq!(as_class_name("blog-post", "Type"), "BlogPostType");
        assert_eq!(as_class_name("shop.order:line item", ""), "ShopOrderLineItem");
        assert_eq!(as_class_name("  Product1", "Type"), "Product1Type");
    }
}
