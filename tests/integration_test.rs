//! Integration tests against a local HTTP server.

mod common;

use anyhow::Result;
use common::{Route, repo_json, repos_json, serve, write_file};
use orgsite::{
    ArticleContent, ArticleSource, Config, FetchError, LoadError, LocalArticles, RemoteArticles,
    RepoClient, Slug, SourceKind, generate_site, write_articles,
};
use reqwest::StatusCode;
use std::fs;
use std::path::{Path, PathBuf};

const FEED: &str = r#"{
    "posts": [
        {
            "path": "/articles/guides/setup",
            "meta": { "title": "Setup", "date": "2024-02-01" },
            "content": { "compiled": "<p class=\"md-p\">Install it.</p>" }
        },
        {
            "path": "/articles/news",
            "meta": { "title": "News" },
            "content": { "compiled": "<p>Fresh.</p>" }
        }
    ]
}"#;

fn config(output: &Path, content: &Path, github_api: &str) -> Config {
    Config {
        output: output.to_path_buf(),
        org: "Miners-Online".to_string(),
        title: None,
        github_api: github_api.to_string(),
        page_size: 10,
        articles: SourceKind::Local,
        content: content.to_path_buf(),
        articles_url: None,
        theme: "InspiredGitHub".to_string(),
        date_format: "%-m/%-d/%Y".to_string(),
        no_open: true,
    }
}

fn content_tree() -> Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    write_file(
        dir.path(),
        "welcome.md",
        "---\ntitle: Welcome\ndate: 2024-01-06\n---\n# Hello\n\nRun `make`.\n\n```rust\nfn main() {}\n```\n",
    )?;
    write_file(
        dir.path(),
        "guides/setup.md",
        "---\ntitle: Setup\n---\nInstall it.\n",
    )?;
    write_file(dir.path(), "guides/notes.txt", "not an article")?;
    Ok(dir)
}

fn read(path: PathBuf) -> String {
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Should read {}: {}", path.display(), e))
}

#[test]
fn test_list_org_repos_request() -> Result<()> {
    // Arrange
    let body = format!(
        "[{},{}]",
        repo_json(1, "launcher", Some("https://launcher.example.com")),
        repo_json(2, "docs", None)
    );
    let server = serve(vec![Route::new("/orgs/Miners-Online/repos", 200, body)])?;
    let client = RepoClient::new(&server.base_url)?;

    // Act
    let records = client.list_org_repos("Miners-Online")?;

    // Assert
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "launcher");
    assert_eq!(
        records[0].homepage.as_deref(),
        Some("https://launcher.example.com")
    );
    assert_eq!(records[1].homepage, None);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].ends_with("?per_page=75&sort=updated&direction=desc"),
        "Unexpected request: {}",
        requests[0]
    );
    Ok(())
}

#[test]
fn test_list_org_repos_error_status() -> Result<()> {
    let server = serve(vec![Route::new("/orgs/", 403, r#"{"message":"rate limited"}"#)])?;
    let client = RepoClient::new(&server.base_url)?;

    let err = client.list_org_repos("Miners-Online").unwrap_err();

    assert!(
        matches!(err, FetchError::Status(status) if status == StatusCode::FORBIDDEN),
        "got {:?}",
        err
    );
    Ok(())
}

#[test]
fn test_list_org_repos_malformed_body() -> Result<()> {
    let server = serve(vec![Route::new("/orgs/", 200, r#"{"not":"a list"}"#)])?;
    let client = RepoClient::new(&server.base_url)?;

    let err = client.list_org_repos("Miners-Online").unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
    assert_eq!(err.display_message(), "Error obtaining repository data");
    Ok(())
}

#[test]
fn test_remote_articles_load() -> Result<()> {
    // Arrange
    let server = serve(vec![Route::new("/api/articles/json", 200, FEED)])?;
    let source = RemoteArticles::new(&format!("{}/", server.base_url))?;
    let slug = Slug::parse("guides/setup").expect("Valid slug");

    // Act
    let article = source.load(&slug)?;

    // Assert
    assert_eq!(article.title(), "Setup");
    assert_eq!(article.meta.date.as_deref(), Some("2024-02-01"));
    assert!(matches!(
        article.content,
        ArticleContent::Html(ref html) if html.contains("Install it.")
    ));
    assert_eq!(server.requests(), vec!["/api/articles/json".to_string()]);
    Ok(())
}

#[test]
fn test_remote_articles_slugs_and_missing() -> Result<()> {
    let server = serve(vec![Route::new("/api/articles/json", 200, FEED)])?;
    let source = RemoteArticles::new(&server.base_url)?;

    let slugs = source.slugs()?;
    let missing = source.load(&Slug::parse("nope").expect("Valid slug"));

    assert_eq!(
        slugs.iter().map(Slug::joined).collect::<Vec<_>>(),
        vec!["guides/setup", "news"]
    );
    assert!(matches!(missing, Err(LoadError::NotFound(_))));
    Ok(())
}

#[test]
fn test_write_articles_publishes_repeated_feed_path_once() -> Result<()> {
    // Arrange
    let feed = r#"{"posts": [
        {"path": "/articles/a", "meta": {"title": "First"}, "content": {"compiled": "<p>one</p>"}},
        {"path": "/articles/a", "meta": {"title": "Second"}, "content": {"compiled": "<p>two</p>"}}
    ]}"#;
    let server = serve(vec![Route::new("/api/articles/json", 200, feed)])?;
    let source = RemoteArticles::new(&server.base_url)?;
    let output = tempfile::tempdir()?;

    // Act
    let report = write_articles(output.path(), "Acme", &source)?;

    // Assert
    assert_eq!(report.published, 1);
    assert_eq!(report.skipped, 0);
    let index = read(output.path().join("articles/index.html"));
    assert_eq!(index.matches("articles/a/index.html").count(), 1);
    let page = read(output.path().join("articles/a/index.html"));
    assert!(page.contains("<p>one</p>"));
    assert!(!page.contains("Second"));
    Ok(())
}

#[test]
fn test_remote_articles_server_error() -> Result<()> {
    let server = serve(vec![Route::new("/api/", 500, "oops")])?;
    let source = RemoteArticles::new(&server.base_url)?;

    let result = source.load(&Slug::parse("news").expect("Valid slug"));

    assert!(
        matches!(result, Err(LoadError::Http(status)) if status == StatusCode::INTERNAL_SERVER_ERROR)
    );
    Ok(())
}

#[test]
fn test_local_articles_listing() -> Result<()> {
    // Arrange
    let content = content_tree()?;
    let source = LocalArticles::new(content.path());

    // Act
    let slugs = source.slugs()?;
    let article = source.load(&Slug::parse("welcome").expect("Valid slug"))?;

    // Assert
    assert_eq!(
        slugs.iter().map(Slug::joined).collect::<Vec<_>>(),
        vec!["guides/setup", "welcome"],
        "Non-markdown files are not articles"
    );
    assert_eq!(article.title(), "Welcome");
    assert!(matches!(
        article.content,
        ArticleContent::Markdown(ref md) if md.starts_with("# Hello")
    ));
    Ok(())
}

#[test]
fn test_generate_site_local_articles() -> Result<()> {
    // Arrange
    let server = serve(vec![Route::new("/orgs/Miners-Online/repos", 200, repos_json(12))])?;
    let content = content_tree()?;
    let output = tempfile::tempdir()?;
    let config = config(output.path(), content.path(), &server.base_url);

    // Act
    let summary = generate_site(&config)?;

    // Assert
    assert_eq!(summary.index_path, output.path().join("index.html"));
    assert_eq!(summary.repo_count, Some(12));
    assert_eq!(summary.repo_pages, 8);
    assert_eq!(summary.articles.published, 2);
    assert_eq!(summary.articles.skipped, 0);

    for page in [
        "index.html",
        "404.html",
        "repos/index.html",
        "repos/5/3.html",
        "repos/25/1.html",
        "articles/index.html",
        "articles/welcome/index.html",
        "articles/guides/setup/index.html",
        "assets/repos.css",
        "assets/highlight.css",
        "assets/copy.js",
    ] {
        assert!(output.path().join(page).exists(), "Missing {}", page);
    }

    let repos = read(output.path().join("repos/index.html"));
    assert!(repos.contains("Miners Online Repositories"));
    assert_eq!(repos.matches("class=\"repo-row\"").count(), 10);
    assert!(repos.contains("1–10 of 12 items"), "got {}", repos);

    let article = read(output.path().join("articles/welcome/index.html"));
    assert!(article.contains("<h1 class=\"md-h1\">Hello</h1>"));
    assert!(article.contains("code-snippet--inline"));
    assert!(article.contains(r#"data-lang="rust""#));
    assert!(article.contains("../../assets/article.css"));

    let nested = read(output.path().join("articles/guides/setup/index.html"));
    assert!(nested.contains("../../../assets/article.css"));
    Ok(())
}

#[test]
fn test_generate_site_repo_listing_failure() -> Result<()> {
    // Arrange
    let server = serve(vec![Route::new("/orgs/", 502, "bad gateway")])?;
    let content = content_tree()?;
    let output = tempfile::tempdir()?;
    let config = config(output.path(), content.path(), &server.base_url);

    // Act
    let summary = generate_site(&config)?;

    // Assert
    assert_eq!(summary.repo_count, None);
    assert_eq!(summary.repo_pages, 1);
    let repos = read(output.path().join("repos/index.html"));
    assert!(repos.contains("Error! Error obtaining repository data"));
    assert!(!repos.contains("bad gateway"), "Cause stays in the log");
    assert!(!output.path().join("repos/10/1.html").exists());
    assert_eq!(summary.articles.published, 2, "Articles do not depend on repos");
    Ok(())
}

#[test]
fn test_generate_site_remote_articles() -> Result<()> {
    // Arrange
    let server = serve(vec![
        Route::new("/orgs/", 200, "[]"),
        Route::new("/api/articles/json", 200, FEED),
    ])?;
    let output = tempfile::tempdir()?;
    let config = Config {
        articles: SourceKind::Remote,
        articles_url: Some(server.base_url.clone()),
        ..config(output.path(), Path::new("/nonexistent"), &server.base_url)
    };

    // Act
    let summary = generate_site(&config)?;

    // Assert
    assert_eq!(summary.repo_count, Some(0));
    assert_eq!(summary.articles.published, 2);
    let news = read(output.path().join("articles/news/index.html"));
    assert!(news.contains("<p>Fresh.</p>"), "Compiled HTML is used as is");

    let repos = read(output.path().join("repos/index.html"));
    assert!(repos.contains("No repositories found"));
    Ok(())
}
