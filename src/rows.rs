//! Projection of fetched repositories into table rows.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::github::RepositoryRecord;

/// Default date pattern, matching the en-US locale (`1/6/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Text shown for timestamps that fail to parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Column key and display label of the repository table.
pub struct TableHeader {
    pub key: &'static str,
    pub label: &'static str,
}

/// Columns of the repository table, in display order.
pub const TABLE_HEADERS: [TableHeader; 6] = [
    TableHeader { key: "name", label: "Name" },
    TableHeader { key: "createdAt", label: "Created" },
    TableHeader { key: "updatedAt", label: "Updated" },
    TableHeader { key: "issueCount", label: "Open Issues" },
    TableHeader { key: "stars", label: "Stars" },
    TableHeader { key: "links", label: "Links" },
];

/// External link shown in the links column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLink {
    pub label: &'static str,
    pub href: String,
}

/// Repository projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: u64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub issue_count: u64,
    pub stars: u64,
    pub links: Vec<RepoLink>,
    pub description: String,
}

/// Projects repository records into display rows.
///
/// Produces exactly one row per record, in input order, carrying the
/// record's id. Dates are rendered in local time with `date_format`.
pub fn project_rows(records: &[RepositoryRecord], date_format: &str) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|record| project_row(record, date_format))
        .collect()
}

fn project_row(record: &RepositoryRecord, date_format: &str) -> DisplayRow {
    DisplayRow {
        id: record.id,
        name: record.name.clone(),
        created_at: format_date(&record.created_at, date_format),
        updated_at: format_date(&record.updated_at, date_format),
        issue_count: record.open_issues_count,
        stars: record.stargazers_count,
        links: link_list(&record.html_url, record.homepage.as_deref()),
        description: record.description.clone().unwrap_or_default(),
    }
}

/// Builds the link list for a repository.
///
/// The canonical URL is always present; the homepage only when set and
/// non-empty.
pub fn link_list(html_url: &str, homepage: Option<&str>) -> Vec<RepoLink> {
    let mut links = vec![RepoLink {
        label: "GitHub",
        href: html_url.to_string(),
    }];

    if let Some(homepage) = homepage.filter(|h| !h.is_empty()) {
        links.push(RepoLink {
            label: "Homepage",
            href: homepage.to_string(),
        });
    }

    links
}

/// Formats an RFC 3339 timestamp as a local calendar date.
///
/// Unparseable input yields [`INVALID_DATE`] rather than an error.
pub fn format_date(timestamp: &str, date_format: &str) -> String {
    format_date_in(timestamp, date_format, &Local)
}

/// Formats an RFC 3339 timestamp as a calendar date in `tz`.
pub fn format_date_in<Tz>(timestamp: &str, date_format: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.with_timezone(tz).format(date_format).to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
