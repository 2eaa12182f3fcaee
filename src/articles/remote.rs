//! Articles from the site backend's JSON article feed.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::{Article, ArticleContent, ArticleMeta, ArticleSource, LoadError, Slug};
use crate::github::USER_AGENT;

const FEED_PATH: &str = "api/articles/json";

#[derive(Deserialize)]
struct Feed {
    posts: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct Post {
    meta: ArticleMeta,
    content: PostContent,
}

#[derive(Deserialize)]
struct PostContent {
    compiled: String,
}

/// Feed document at `{base}/api/articles/json` listing every article.
///
/// The whole feed is fetched for every lookup; articles are matched on
/// their `path` field.
pub struct RemoteArticles {
    client: Client,
    feed_url: String,
}

impl RemoteArticles {
    /// Creates source for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            feed_url: format!("{}/{}", base_url.trim_end_matches('/'), FEED_PATH),
        })
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn fetch_feed(&self) -> Result<String, LoadError> {
        debug!(url = %self.feed_url, "fetching article feed");
        let response = self.client.get(&self.feed_url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http(status));
        }

        Ok(response.text()?)
    }
}

impl ArticleSource for RemoteArticles {
    fn slugs(&self) -> Result<Vec<Slug>, LoadError> {
        let body = self.fetch_feed()?;
        feed_slugs(&body).map_err(|e| {
            warn!(url = %self.feed_url, error = %e, "malformed article feed");
            LoadError::NotFound(super::ARTICLES_ROUTE.to_string())
        })
    }

    fn load(&self, slug: &Slug) -> Result<Article, LoadError> {
        let body = self.fetch_feed()?;
        find_post(&body, slug)
    }
}

/// Lists article slugs of a feed in order.
///
/// A path listed more than once yields one slug, at its first position.
fn feed_slugs(feed: &str) -> Result<Vec<Slug>, serde_json::Error> {
    let feed: Feed = serde_json::from_str(feed)?;
    let mut seen = HashSet::new();

    Ok(feed
        .posts
        .iter()
        .filter_map(|post| post.get("path")?.as_str())
        .filter_map(Slug::from_route)
        .filter(|slug| seen.insert(slug.clone()))
        .collect())
}

/// Finds an article in a feed document.
///
/// Scans `posts` in order and returns the first entry whose `path` is the
/// slug's route. A missing entry and a malformed document are both reported
/// as [`LoadError::NotFound`]; the malformation is only logged.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if no usable entry matches.
pub fn find_post(feed: &str, slug: &Slug) -> Result<Article, LoadError> {
    let route = slug.route();

    scan(feed, &route)
        .map_err(|e| {
            warn!(route, error = %e, "cannot read article feed");
            LoadError::NotFound(route.clone())
        })?
        .map(|(meta, compiled)| Article {
            slug: slug.clone(),
            meta,
            content: ArticleContent::Html(compiled),
        })
        .ok_or_else(|| LoadError::NotFound(route.clone()))
}

fn scan(feed: &str, route: &str) -> Result<Option<(ArticleMeta, String)>, serde_json::Error> {
    let feed: Feed = serde_json::from_str(feed)?;

    for post in feed.posts {
        if post.get("path").and_then(|p| p.as_str()) == Some(route) {
            let post: Post = serde_json::from_value(post)?;
            return Ok(Some((post.meta, post.content.compiled)));
        }
    }

    Ok(None)
}
