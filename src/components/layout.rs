//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. The wrapper handles viewport configuration, charset,
/// stylesheet loading and the copy-to-clipboard script while the caller
/// provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `site_name`: Site name appended to the title
/// * `root`: Relative prefix back to the site root (`""`, `"../"`, ...)
/// * `stylesheets`: CSS file names under `assets/`
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    site_name: &str,
    root: &str,
    stylesheets: &[&str],
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_name) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(format!("{}assets/{}", root, stylesheet));
                }
                script src=(format!("{}assets/copy.js", root)) defer {}
            }
            body {
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
