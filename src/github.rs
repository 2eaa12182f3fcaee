//! GitHub REST client for organization repository listings.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Maximum repositories requested in a single listing.
///
/// The listing is one page of the API; organizations with more repositories
/// than this only show the most recently updated ones.
pub const REPOS_PER_PAGE: usize = 75;

pub(crate) const USER_AGENT: &str = concat!("orgsite/", env!("CARGO_PKG_VERSION"));

/// Repository as returned by `GET /orgs/{org}/repos`.
///
/// Only the fields the site displays are decoded; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub stargazers_count: u64,
    pub open_issues_count: u64,
    pub created_at: String,
    pub updated_at: String,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Failure to obtain the repository listing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message shown to visitors in place of the repository table.
    ///
    /// The cause goes to the log only.
    pub fn display_message(&self) -> &'static str {
        "Error obtaining repository data"
    }
}

/// Blocking client for the repository listing endpoint.
pub struct RepoClient {
    client: Client,
    api_base: String,
}

impl RepoClient {
    /// Creates client against the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed (TLS backend
    /// initialisation).
    pub fn new(api_base: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds the listing URL for an organization.
    ///
    /// Requests the most recently updated repositories first.
    pub fn repos_url(&self, org: &str) -> String {
        format!(
            "{}/orgs/{}/repos?per_page={}&sort=updated&direction=desc",
            self.api_base,
            urlencoding::encode(org),
            REPOS_PER_PAGE
        )
    }

    /// Fetches public repositories of an organization.
    ///
    /// Issues exactly one request. Anything but `200 OK` is an error; there
    /// is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] on network failure,
    /// [`FetchError::Status`] on a non-200 response and
    /// [`FetchError::Decode`] if the body is not a repository list.
    pub fn list_org_repos(&self, org: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        let url = self.repos_url(org);
        debug!(%url, "fetching organization repositories");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let repos: Vec<RepositoryRecord> = response.json().map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e.to_string())
            } else {
                FetchError::Transport(e)
            }
        })?;

        info!(org, count = repos.len(), "fetched repositories");
        Ok(repos)
    }
}
