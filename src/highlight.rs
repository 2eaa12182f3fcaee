//! Syntax highlighting with syntect.

use anyhow::{Context, Result, anyhow};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Class style shared by generated spans and the theme stylesheet.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Default highlighting theme.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Highlights code into HTML spans carrying `hljs-` prefixed CSS classes.
///
/// Colors come from a stylesheet generated by [`Highlighter::theme_css`],
/// so the same markup works with any bundled theme.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Looks up syntax by language token (`rust`, `go`) or file extension.
    pub fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }

    /// Returns whether the language can be highlighted.
    pub fn supports(&self, language: &str) -> bool {
        !language.is_empty() && self.find_syntax(language).is_some()
    }

    /// Highlights code in the given language.
    ///
    /// Unknown languages produce escaped plain text.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line.
    pub fn highlight(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self.find_syntax(language) else {
            return Ok(escape_html(code));
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    /// Generates the stylesheet for a bundled theme.
    ///
    /// # Errors
    ///
    /// Returns error if the theme is unknown.
    pub fn theme_css(theme: &str) -> Result<String> {
        let themes = ThemeSet::load_defaults();
        let theme = themes.themes.get(theme).ok_or_else(|| {
            let mut names: Vec<_> = themes.themes.keys().map(String::as_str).collect();
            names.sort_unstable();
            anyhow!(
                "Unknown highlight theme '{}' (available: {})",
                theme,
                names.join(", ")
            )
        })?;

        css_for_theme_with_class_style(theme, CLASS_STYLE)
            .context("Failed to generate highlight stylesheet")
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
