//! Expandable repository table components

use maud::{Markup, html};

use crate::rows::{DisplayRow, RepoLink, TABLE_HEADERS};

/// Table row as shown on a page.
///
/// Expansion is view state for one rendering and never stored on the
/// [`DisplayRow`].
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub row: &'a DisplayRow,
    pub expanded: bool,
}

impl<'a> RowView<'a> {
    pub fn collapsed(row: &'a DisplayRow) -> Self {
        Self {
            row,
            expanded: false,
        }
    }
}

/// Renders the links column as a separated list
pub fn link_list(links: &[RepoLink]) -> Markup {
    html! {
        ul class="link-list" {
            @for (i, link) in links.iter().enumerate() {
                li {
                    @if i > 0 {
                        span class="link-separator" { "|" }
                    }
                    a href=(link.href) target="_blank" rel="noopener" { (link.label) }
                }
            }
        }
    }
}

/// Renders a repository table with expandable description rows
///
/// Each row sits in its own `tbody` together with its description panel.
/// The toggle is a checkbox so rows expand without scripting; `expanded`
/// only controls the initial state.
///
/// # Arguments
///
/// * `title`: Table caption title
/// * `description`: Caption description line
/// * `rows`: Rows of the visible page
///
/// # Returns
///
/// Table container markup
pub fn repo_table(title: &str, description: &str, rows: &[RowView<'_>]) -> Markup {
    let colspan = TABLE_HEADERS.len() + 1;

    html! {
        section class="table-container" {
            div class="table-header" {
                h2 class="table-title" { (title) }
                p class="table-description" { (description) }
            }
            table class="repo-table" {
                thead {
                    tr {
                        th class="expand-header" {}
                        @for header in &TABLE_HEADERS {
                            th data-key=(header.key) { (header.label) }
                        }
                    }
                }
                @if rows.is_empty() {
                    tbody {
                        tr {
                            td class="empty-state" colspan=(colspan) { "No repositories found" }
                        }
                    }
                }
                @for view in rows {
                    (table_row(view, colspan))
                }
            }
        }
    }
}

fn table_row(view: &RowView<'_>, colspan: usize) -> Markup {
    let row = view.row;
    let toggle_id = format!("repo-{}", row.id);

    html! {
        tbody class="repo-row-group" {
            tr class="repo-row" {
                td class="expand-cell" {
                    input type="checkbox" class="row-toggle" id=(toggle_id) checked[view.expanded];
                    label for=(toggle_id) aria-label="Expand current row" {
                        i class="ph ph-caret-right" {}
                    }
                }
                td class="cell-name" { (row.name) }
                td class="cell-date" { (row.created_at) }
                td class="cell-date" { (row.updated_at) }
                td class="cell-count" { (row.issue_count) }
                td class="cell-count" { (row.stars) }
                td class="cell-links" { (link_list(&row.links)) }
            }
            tr class="expanded-row" {
                td colspan=(colspan) {
                    p { (row.description) }
                }
            }
        }
    }
}
