//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Displays hierarchical navigation starting at the site home. Every
/// component with a link target is clickable; the last one is normally the
/// current page.
///
/// # Arguments
///
/// * `root`: Relative prefix back to the site root
/// * `components`: Labels with optional link targets relative to the page
///
/// # Returns
///
/// Breadcrumb navigation markup with links and separators
pub fn breadcrumb(root: &str, components: &[(&str, Option<String>)]) -> Markup {
    html! {
        nav class="breadcrumb" aria-label="Page navigation" {
            a href=(format!("{}index.html", root)) class="breadcrumb-link" { "Home" }
            @for (component, href) in components {
                span class="breadcrumb-separator" { "/" }
                @if let Some(link) = href {
                    a href=(link) class="breadcrumb-link" { (*component) }
                } @else {
                    span class="breadcrumb-current" { (*component) }
                }
            }
        }
    }
}
