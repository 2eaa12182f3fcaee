//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::nodes::{NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options, format_html, parse_document};

use crate::components::snippet::{block_snippet, inline_snippet};
use crate::highlight::{Highlighter, escape_html};

/// Opening tags that receive presentational classes.
const STYLED_TAGS: [(&str, &str); 3] = [
    ("<h1>", "<h1 class=\"md-h1\">"),
    ("<h2>", "<h2 class=\"md-h2\">"),
    ("<p>", "<p class=\"md-p\">"),
];

/// Renders article markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Code is rendered as copyable snippets: inline code becomes an inline
/// snippet, code blocks become multi-line snippets, and code blocks whose
/// info string names a known language are syntax highlighted with CSS
/// classes. Level 1 and 2 headings and paragraphs get fixed classes.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures tables, strikethrough, autolinks, task lists and
    /// footnotes. Raw HTML passes through: article content is trusted.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        options.render.unsafe_ = true;

        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting or HTML formatting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        for node in root.descendants() {
            let replacement = match &node.data.borrow().value {
                NodeValue::CodeBlock(block) => Some(NodeValue::HtmlBlock(NodeHtmlBlock {
                    block_type: 0,
                    literal: self.render_code_block(&block.info, &block.literal)?,
                })),
                NodeValue::Code(code) => Some(NodeValue::HtmlInline(
                    inline_snippet(&code.literal).into_string(),
                )),
                _ => None,
            };

            if let Some(value) = replacement {
                node.data.borrow_mut().value = value;
            }
        }

        let mut html = Vec::new();
        format_html(root, &self.options, &mut html).context("Failed to format markdown HTML")?;
        let html = String::from_utf8(html).context("Markdown HTML is not valid UTF-8")?;

        Ok(style_tags(&html))
    }

    /// Renders a fenced or indented code block.
    ///
    /// The language is the leading word characters of the info string, so
    /// `rust,ignore` and `js{1,3}` select `rust` and `js`. One trailing
    /// newline is dropped so the snippet does not end with a blank line.
    fn render_code_block(&self, info: &str, literal: &str) -> Result<String> {
        let language = fence_language(info);
        let code = literal.strip_suffix('\n').unwrap_or(literal);

        let html = match language.filter(|l| self.highlighter.supports(l)) {
            Some(lang) => {
                let body = self
                    .highlighter
                    .highlight(code, lang)
                    .context("Failed to highlight code block")?;
                block_snippet(&body, Some(lang), Some(lang))
            }
            None => block_snippet(&escape_html(code), language, None),
        };

        Ok(html.into_string())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn fence_language(info: &str) -> Option<&str> {
    let word = info.split_whitespace().next()?;
    let end = word
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(word.len());

    (end > 0).then(|| &word[..end])
}

fn style_tags(html: &str) -> String {
    STYLED_TAGS
        .iter()
        .fold(html.to_string(), |acc, (plain, styled)| {
            acc.replace(plain, styled)
        })
}
