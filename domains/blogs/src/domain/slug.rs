//! URL slug derivation for blog posts
//!
//! Slugs are derived from titles: lowercased, with every run of
//! non-alphanumeric characters collapsed into a single hyphen. The result
//! is stable for a given title, so re-saving an unchanged title keeps its
//! URL.

/// Derive a URL slug from a post title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
