//! Site footer component

use maud::{Markup, html};

/// Renders the footer shown on every page
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "Generated by "
                a href="https://github.com/Miners-Online" target="_blank" rel="noopener" { "orgsite" }
            }
        }
    }
}
