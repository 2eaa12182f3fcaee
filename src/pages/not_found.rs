//! Not found page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;

/// Generates the 404 page
///
/// Static hosts serve it for any path, so links are absolute from the
/// site root.
pub fn generate(site_name: &str) -> Markup {
    page_wrapper(
        "Not found",
        site_name,
        "/",
        &["home.css"],
        html! {
            main class="not-found" {
                h1 { "404" }
                p { "Not found" }
                a href="/index.html" { "Back to home" }
            }
        },
    )
}
