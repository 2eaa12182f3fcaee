//! Static site generator for an organization's repositories and articles.

pub mod articles;
mod assets;
pub mod components;
mod config;
pub mod github;
mod highlight;
pub mod logging;
mod markdown;
pub mod pages;
pub mod pagination;
pub mod rows;
mod site;
mod util;

pub use articles::{
    Article, ArticleContent, ArticleMeta, ArticleSource, LoadError, LocalArticles,
    RemoteArticles, Slug, SourceKind,
};
pub use assets::write_assets;
pub use config::Config;
pub use github::{FetchError, RepoClient, RepositoryRecord};
pub use highlight::Highlighter;
pub use markdown::MarkdownRenderer;
pub use pagination::{PageWindow, Pagination, PaginationError};
pub use rows::{DisplayRow, RepoLink, project_rows};
pub use site::{ArticleReport, SiteSummary, generate_site, write_articles, write_repo_pages};
