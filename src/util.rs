//! Utility functions for relative site links

use crate::articles::Slug;

/// Returns prefix leading from a page at `depth` back to the site root.
///
/// Depth counts directories between the site root and the page: `0` for
/// `index.html`, `2` for `repos/10/3.html`.
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Returns directory depth of an article page.
///
/// Articles live at `articles/<slug...>/index.html`.
pub fn article_depth(slug: &Slug) -> usize {
    1 + slug.segments().len()
}

/// Returns link to an article from the site root.
pub fn article_href(slug: &Slug) -> String {
    format!("articles/{}/index.html", slug.joined())
}
