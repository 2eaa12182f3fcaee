//! Article loading from a local content tree or a remote article feed.
//!
//! Both sources implement [`ArticleSource`]; which one a run uses is decided
//! once from configuration. Callers only distinguish "found" from "not
//! found": the reason an article could not be produced is logged by the
//! source and never shown to readers.

mod frontmatter;
mod local;
mod remote;

use clap::ValueEnum;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub use frontmatter::split_front_matter;
pub use local::LocalArticles;
pub use remote::{RemoteArticles, find_post};

/// Route prefix under which all articles live.
pub const ARTICLES_ROUTE: &str = "/articles";

/// Where articles come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Markdown files with front matter in a content directory
    Local,
    /// JSON article feed served by the site backend
    Remote,
}

/// Failure to produce an article.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("article not found: {0}")]
    NotFound(String),
    #[error("article feed returned {0}")]
    Http(StatusCode),
    #[error("article feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("cannot read content directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Path segments identifying an article, e.g. `["guides", "install"]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(Vec<String>);

impl Slug {
    /// Builds slug from segments.
    ///
    /// Returns `None` for an empty list or any segment that is empty, `.`,
    /// `..` or contains a path separator.
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || !segments.iter().all(|s| is_valid_segment(s)) {
            return None;
        }
        Some(Self(segments))
    }

    /// Parses slash separated slug such as `guides/install`.
    pub fn parse(joined: &str) -> Option<Self> {
        Self::new(joined.split('/'))
    }

    /// Parses slug from a feed route such as `/articles/guides/install`.
    pub fn from_route(route: &str) -> Option<Self> {
        route
            .strip_prefix(ARTICLES_ROUTE)?
            .strip_prefix('/')
            .and_then(Self::parse)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns segments joined with `/`.
    pub fn joined(&self) -> String {
        self.0.join("/")
    }

    /// Returns site route of the article, `/articles/<slug>`.
    pub fn route(&self) -> String {
        format!("{}/{}", ARTICLES_ROUTE, self.joined())
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

/// Article metadata from front matter or the feed's `meta` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    /// Remaining free-form keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Article body as provided by its source.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleContent {
    /// Markdown source, rendered by the site
    Markdown(String),
    /// HTML compiled upstream, inserted as is
    Html(String),
}

/// Loaded article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub slug: Slug,
    pub meta: ArticleMeta,
    pub content: ArticleContent,
}

impl Article {
    /// Returns site route of the article.
    pub fn path(&self) -> String {
        self.slug.route()
    }

    /// Returns display title, falling back to the last slug segment.
    pub fn title(&self) -> &str {
        if self.meta.title.is_empty() {
            self.slug.segments().last().map_or("", String::as_str)
        } else {
            &self.meta.title
        }
    }
}

/// Source of articles for one site generation.
pub trait ArticleSource {
    /// Lists slugs of all available articles.
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be enumerated at all.
    fn slugs(&self) -> Result<Vec<Slug>, LoadError>;

    /// Loads a single article.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if no article exists for the slug or
    /// it cannot be read. Remote sources may also fail with an HTTP level
    /// error before the lookup happens.
    fn load(&self, slug: &Slug) -> Result<Article, LoadError>;
}
