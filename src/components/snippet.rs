//! Copyable code snippet components

use maud::{Markup, PreEscaped, html};

const COPY_FEEDBACK: &str = "Copied to clipboard";

fn copy_button() -> Markup {
    html! {
        button type="button" class="copy-button" title="Copy to clipboard"
            aria-label="Copy to clipboard" data-feedback=(COPY_FEEDBACK) {
            i class="ph ph-copy" {}
        }
    }
}

/// Renders inline code with a copy button
///
/// # Arguments
///
/// * `code`: Raw code text (escaped by the template)
pub fn inline_snippet(code: &str) -> Markup {
    html! {
        span class="code-snippet code-snippet--inline" {
            code { (code) }
            (copy_button())
        }
    }
}

/// Renders a multi-line code block with a copy button
///
/// Highlighted blocks carry `data-lang` with the language used; plain
/// blocks keep the author's language class, if any, without it.
///
/// # Arguments
///
/// * `body_html`: Already escaped or highlighted code HTML
/// * `class_language`: Language named in the fence info string
/// * `highlighted_as`: Language the body was highlighted with
pub fn block_snippet(
    body_html: &str,
    class_language: Option<&str>,
    highlighted_as: Option<&str>,
) -> Markup {
    html! {
        div class="code-snippet code-snippet--multi" {
            pre {
                code class=[class_language.map(|l| format!("language-{}", l))]
                    data-lang=[highlighted_as] {
                    (PreEscaped(body_html))
                }
            }
            (copy_button())
        }
    }
}
