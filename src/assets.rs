//! CSS and script asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::highlight::Highlighter;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const TABLE: &str = include_str!("../assets/components/table.css");
const PAGER: &str = include_str!("../assets/components/pager.css");
const SNIPPET: &str = include_str!("../assets/components/snippet.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const REPOS_PAGE: &str = include_str!("../assets/page-repos.css");
const ARTICLE_PAGE: &str = include_str!("../assets/page-article.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

const COPY_SCRIPT: &str = include_str!("../assets/copy.js");

/// Writes all bundled assets to output directory
///
/// The highlight stylesheet is generated from `theme`.
///
/// # Errors
///
/// Returns error if the theme is unknown or a file cannot be written.
pub fn write_assets(assets_dir: &Path, theme: &str) -> Result<()> {
    fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;

    write_bundled(assets_dir, "home.css", &[BASE, LAYOUT, NAV, HOME_PAGE])?;
    write_bundled(
        assets_dir,
        "repos.css",
        &[BASE, LAYOUT, NAV, TABLE, PAGER, REPOS_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "article.css",
        &[BASE, LAYOUT, NAV, SNIPPET, ARTICLE_PAGE, MARKDOWN],
    )?;

    let highlight_css = Highlighter::theme_css(theme)?;
    write_bundled(assets_dir, "highlight.css", &[&highlight_css])?;
    write_bundled(assets_dir, "copy.js", &[COPY_SCRIPT])?;

    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(dir.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
