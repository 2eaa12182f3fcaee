//! Shared test utilities for integration tests.
//!
//! Provides a canned-response HTTP server standing in for the GitHub API and
//! the article feed, plus helpers for building content trees.

#![allow(dead_code)]

use anyhow::Result;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned response for requests whose path starts with `prefix`.
pub struct Route {
    pub prefix: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn new(prefix: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            prefix,
            status,
            body: body.into(),
        }
    }
}

/// Local HTTP server answering with canned responses.
///
/// Records the request target (path and query) of every request. The
/// server thread lives until the test process exits.
pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Returns request targets received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

/// Starts a server on an ephemeral local port.
///
/// Unmatched paths get `404` with an empty JSON object.
///
/// # Errors
///
/// Returns error if no local port can be bound
pub fn serve(routes: Vec<Route>) -> Result<TestServer> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let _ = respond(stream, &routes, &recorded);
        }
    });

    Ok(TestServer { base_url, requests })
}

fn respond(
    mut stream: TcpStream,
    routes: &[Route],
    recorded: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    if let Ok(mut log) = recorded.lock() {
        log.push(target.clone());
    }

    let (status, body) = routes
        .iter()
        .find(|route| target.starts_with(route.prefix))
        .map(|route| (route.status, route.body.as_str()))
        .unwrap_or((404, "{}"));

    let reason = if status == 200 { "OK" } else { "Error" };
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )?;
    stream.flush()
}

/// Returns a GitHub repository JSON object.
pub fn repo_json(id: u64, name: &str, homepage: Option<&str>) -> String {
    let homepage = match homepage {
        Some(url) => format!("\"{}\"", url),
        None => "null".to_string(),
    };
    format!(
        r#"{{
            "id": {id},
            "name": "{name}",
            "full_name": "Miners-Online/{name}",
            "stargazers_count": {stars},
            "open_issues_count": 1,
            "created_at": "2023-02-01T12:00:00Z",
            "updated_at": "2024-01-06T12:00:00Z",
            "html_url": "https://github.com/Miners-Online/{name}",
            "homepage": {homepage},
            "description": "About {name}"
        }}"#,
        stars = id * 3,
    )
}

/// Returns a JSON array of `count` repositories named `repo-<id>`.
pub fn repos_json(count: u64) -> String {
    let items: Vec<String> = (1..=count)
        .map(|id| repo_json(id, &format!("repo-{}", id), None))
        .collect();
    format!("[{}]", items.join(","))
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
