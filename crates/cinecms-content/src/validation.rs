//! Input validation for content entities.
//!
//! All checks run before any mutation; callers collect every failure into
//! one `ContentError::Validation` so the client sees the full list.

use cinecms_commons::PageComponent;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_SEO_TITLE_LEN: usize = 255;
pub const MAX_META_DESCRIPTION_LEN: usize = 500;
pub const MAX_SLUG_LEN: usize = 255;
pub const MAX_LINK_TARGET_LEN: usize = 100;

/// Lowercase words of letters/digits joined by single hyphens; no leading
/// or trailing hyphen.
pub fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"))
}

/// Letters, digits, and underscores only.
pub fn link_target_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid link target regex"))
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= MAX_SLUG_LEN && slug_pattern().is_match(slug)
}

pub fn is_valid_link_target(link_target: &str) -> bool {
    !link_target.is_empty()
        && link_target.len() <= MAX_LINK_TARGET_LEN
        && link_target_pattern().is_match(link_target)
}

/// Validates the writable page fields, returning one message per failure.
pub fn validate_page_fields(
    title: &str,
    seo_title: Option<&str>,
    meta_description: Option<&str>,
    slug: &str,
    link_target: &str,
    components: &[PageComponent],
) -> Vec<String> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push("Title must not be empty.".to_string());
    } else if title.len() > MAX_TITLE_LEN {
        errors.push(format!("Title must be at most {} characters.", MAX_TITLE_LEN));
    }

    if let Some(seo_title) = seo_title {
        if seo_title.len() > MAX_SEO_TITLE_LEN {
            errors.push(format!(
                "SEO title must be at most {} characters.",
                MAX_SEO_TITLE_LEN
            ));
        }
    }

    if let Some(meta_description) = meta_description {
        if meta_description.len() > MAX_META_DESCRIPTION_LEN {
            errors.push(format!(
                "Meta description must be at most {} characters.",
                MAX_META_DESCRIPTION_LEN
            ));
        }
    }

    if !is_valid_slug(slug) {
        errors.push(
            "Slug must be lowercase, contain only letters, numbers, and hyphens, \
             and cannot start or end with a hyphen."
                .to_string(),
        );
    }

    if !is_valid_link_target(link_target) {
        errors.push("Link target must contain only letters, numbers, and underscores.".to_string());
    }

    for component in components {
        if component.component_type.trim().is_empty()
            || component.component_id.trim().is_empty()
        {
            errors.push("Invalid component configuration.".to_string());
            break;
        }
    }

    errors
}
