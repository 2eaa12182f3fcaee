//! Whole-site generation.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::articles::{Article, ArticleContent, ArticleSource};
use crate::assets::write_assets;
use crate::config::Config;
use crate::github::RepoClient;
use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::pages::home::HomePageData;
use crate::pages::repos::{RepoPageData, page_path};
use crate::pagination::{PAGE_SIZES, Pagination, page_count};
use crate::rows::{DisplayRow, project_rows};
use crate::util::article_href;

/// Outcome of a site generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Site entry page
    pub index_path: PathBuf,
    /// Repositories listed, `None` if the listing failed
    pub repo_count: Option<usize>,
    /// Repository table pages written
    pub repo_pages: usize,
    pub articles: ArticleReport,
}

/// Outcome of article generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleReport {
    pub published: usize,
    /// Articles listed by the source that could not be produced
    pub skipped: usize,
}

/// Generates the complete site into `config.output`.
///
/// A failing repository listing or article does not fail the run; the
/// listing is replaced by an error message and articles fall back to the
/// 404 page.
///
/// # Errors
///
/// Returns error if the output cannot be written, the highlight theme is
/// unknown, or the article source cannot be created.
pub fn generate_site(config: &Config) -> Result<SiteSummary> {
    let site_name = config.site_name();
    let output = &config.output;

    fs::create_dir_all(output).context("Failed to create output directory")?;
    write_assets(&output.join("assets"), &config.theme)?;

    let client = RepoClient::new(&config.github_api).context("Failed to create GitHub client")?;
    let (repo_count, repo_pages) = match client.list_org_repos(&config.org) {
        Ok(records) => {
            let rows = project_rows(&records, &config.date_format);
            let pages = write_repo_pages(output, &site_name, &rows, config.page_size)?;
            (Some(rows.len()), pages)
        }
        Err(e) => {
            warn!(org = %config.org, error = %e, "repository listing unavailable");
            write_page(
                &output.join("repos").join("index.html"),
                pages::repos::generate_error(&site_name, e.display_message(), 1),
            )?;
            (None, 1)
        }
    };
    info!(pages = repo_pages, "generated repository pages");

    let source = config
        .article_source()
        .context("Failed to create article source")?;
    let articles = write_articles(output, &site_name, source.as_ref())?;
    info!(
        published = articles.published,
        skipped = articles.skipped,
        "generated article pages"
    );

    let index_path = output.join("index.html");
    write_page(
        &index_path,
        pages::home::generate(HomePageData {
            site_name: &site_name,
            org: &config.org,
            repo_count,
            article_count: articles.published,
        }),
    )?;
    write_page(&output.join("404.html"), pages::not_found::generate(&site_name))?;

    Ok(SiteSummary {
        index_path,
        repo_count,
        repo_pages,
        articles,
    })
}

/// Writes every repository table page.
///
/// `repos/index.html` shows the first page at `default_page_size`; every
/// offered size gets `repos/<size>/<page>.html` for each of its pages.
///
/// # Returns
///
/// Number of pages written
///
/// # Errors
///
/// Returns error if the default size is not offered or a page cannot be
/// written.
pub fn write_repo_pages(
    output: &Path,
    site_name: &str,
    rows: &[DisplayRow],
    default_page_size: usize,
) -> Result<usize> {
    let mut pagination = Pagination::new(rows.len(), default_page_size)?;

    write_page(
        &output.join("repos").join("index.html"),
        pages::repos::generate(RepoPageData {
            site_name,
            rows,
            pagination: &pagination,
            depth: 1,
        }),
    )?;
    let mut written = 1;

    for size in PAGE_SIZES {
        for page in 1..=page_count(rows.len(), size) {
            pagination.on_change(page, size)?;
            write_page(
                &output.join(page_path(size, page)),
                pages::repos::generate(RepoPageData {
                    site_name,
                    rows,
                    pagination: &pagination,
                    depth: 2,
                }),
            )?;
            written += 1;
        }
    }

    Ok(written)
}

/// Loads and writes every article listed by `source`, then the index.
///
/// Articles that cannot be loaded or rendered are skipped and logged.
///
/// # Errors
///
/// Returns error only if a page cannot be written.
pub fn write_articles(
    output: &Path,
    site_name: &str,
    source: &dyn ArticleSource,
) -> Result<ArticleReport> {
    let slugs = source.slugs().unwrap_or_else(|e| {
        warn!(error = %e, "cannot list articles");
        Vec::new()
    });

    let renderer = MarkdownRenderer::new();
    let mut published: Vec<Article> = Vec::new();
    let mut skipped = 0;

    for slug in slugs {
        let article = match source.load(&slug) {
            Ok(article) => article,
            Err(e) => {
                warn!(%slug, error = %e, "article unavailable, serving 404");
                skipped += 1;
                continue;
            }
        };

        let body = match &article.content {
            ArticleContent::Markdown(markdown) => match renderer.render(markdown) {
                Ok(html) => html,
                Err(e) => {
                    warn!(%slug, error = %e, "cannot render article, serving 404");
                    skipped += 1;
                    continue;
                }
            },
            ArticleContent::Html(html) => html.clone(),
        };

        let path = output.join(article_href(&slug));
        write_page(&path, pages::article::generate(site_name, &article, &body))?;
        debug!(path = %path.display(), "generated article");
        published.push(article);
    }

    write_page(
        &output.join("articles").join("index.html"),
        pages::articles::generate(site_name, &published),
    )?;

    Ok(ArticleReport {
        published: published.len(),
        skipped,
    })
}

fn write_page(path: &Path, html: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, html.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))
}
