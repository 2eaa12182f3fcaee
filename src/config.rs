//! Command line configuration.

use anyhow::{Result, bail};
use chrono::format::{Item, StrftimeItems};
use clap::Parser;
use std::path::PathBuf;

use crate::articles::{ArticleSource, LocalArticles, RemoteArticles, SourceKind};
use crate::github::DEFAULT_API_BASE;
use crate::highlight::DEFAULT_THEME;
use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::rows::DEFAULT_DATE_FORMAT;

/// Command line configuration for orgsite.
#[derive(Debug, Clone, Parser)]
#[command(name = "orgsite", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// GitHub organization whose repositories are listed
    #[arg(long, default_value = "Miners-Online")]
    pub org: String,

    /// Site title (defaults to the organization name)
    #[arg(long)]
    pub title: Option<String>,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub github_api: String,

    /// Default number of repositories per table page (5, 10, 15 or 25)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Where articles are loaded from
    #[arg(long, value_enum, default_value_t = SourceKind::Local)]
    pub articles: SourceKind,

    /// Content directory for local articles
    #[arg(long, default_value = "content")]
    pub content: PathBuf,

    /// Base URL of the article API for remote articles
    #[arg(long, env = "ORGSITE_ARTICLES_URL")]
    pub articles_url: Option<String>,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// strftime pattern for repository dates
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the page size is not offered, the date pattern is
    /// invalid, the local content directory is missing, or remote mode has
    /// no article URL.
    pub fn validate(&self) -> Result<()> {
        if !PAGE_SIZES.contains(&self.page_size) {
            bail!(
                "Page size {} is not one of {:?}",
                self.page_size,
                PAGE_SIZES
            );
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!("Invalid date format: {}", self.date_format);
        }

        match self.articles {
            SourceKind::Local if !self.content.is_dir() => {
                bail!(
                    "Content directory does not exist: {}",
                    self.content.display()
                );
            }
            SourceKind::Remote if self.articles_url.is_none() => {
                bail!("Remote articles require --articles-url or ORGSITE_ARTICLES_URL");
            }
            _ => {}
        }

        Ok(())
    }

    /// Returns site title from configuration or organization name.
    ///
    /// `Miners-Online` becomes `Miners Online`.
    pub fn site_name(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => self.org.replace(['-', '_'], " "),
        }
    }

    /// Creates the article source selected by `--articles`.
    ///
    /// # Errors
    ///
    /// Returns error if remote mode has no article URL or its HTTP client
    /// cannot be built.
    pub fn article_source(&self) -> Result<Box<dyn ArticleSource>> {
        match self.articles {
            SourceKind::Local => Ok(Box::new(LocalArticles::new(&self.content))),
            SourceKind::Remote => {
                let Some(url) = &self.articles_url else {
                    bail!("Remote articles require --articles-url or ORGSITE_ARTICLES_URL");
                };
                Ok(Box::new(RemoteArticles::new(url)?))
            }
        }
    }
}
