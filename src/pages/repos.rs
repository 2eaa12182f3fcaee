//! Repository listing page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::components::pager::pager;
use crate::components::repo_table::{RowView, repo_table};
use crate::pagination::Pagination;
use crate::rows::DisplayRow;
use crate::util::root_prefix;

const STYLESHEETS: [&str; 1] = ["repos.css"];

/// Data container for a repository table page.
pub struct RepoPageData<'a> {
    /// Site name for titles and captions
    pub site_name: &'a str,
    /// Complete row set, in fetch order
    pub rows: &'a [DisplayRow],
    /// Window to show
    pub pagination: &'a Pagination,
    /// Directory depth of the page below the site root
    pub depth: usize,
}

/// Returns location of a table page relative to the site root.
///
/// # Examples
///
/// ```
/// assert_eq!(orgsite::pages::repos::page_path(10, 3), "repos/10/3.html");
/// ```
pub fn page_path(page_size: usize, page: usize) -> String {
    format!("repos/{}/{}.html", page_size, page)
}

/// Generates a repository table page
///
/// Shows the rows inside the pagination window, each collapsed, followed
/// by the pager linking to the other pages.
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(data: RepoPageData<'_>) -> Markup {
    let root = root_prefix(data.depth);
    let visible = data.pagination.window().slice(data.rows);
    let views: Vec<RowView<'_>> = visible.iter().map(RowView::collapsed).collect();

    let title = format!("{} Repositories", data.site_name);
    let description = format!(
        "A collection of public {} repositories.",
        data.site_name
    );

    page_wrapper(
        "Repositories",
        data.site_name,
        &root,
        &STYLESHEETS,
        html! {
            (breadcrumb(&root, &[("Repositories", None)]))
            main class="repo-page" {
                (repo_table(&title, &description, &views))
                (pager(data.pagination, |size, page| {
                    format!("{}{}", root, page_path(size, page))
                }))
            }
        },
    )
}

/// Generates the repository page shown when the listing is unavailable
///
/// # Arguments
///
/// * `site_name`: Site name for the title
/// * `message`: Visitor facing error message
/// * `depth`: Directory depth of the page below the site root
pub fn generate_error(site_name: &str, message: &str, depth: usize) -> Markup {
    let root = root_prefix(depth);

    page_wrapper(
        "Repositories",
        site_name,
        &root,
        &STYLESHEETS,
        html! {
            (breadcrumb(&root, &[("Repositories", None)]))
            main class="repo-page" {
                p class="error-state" { "Error! " (message) }
            }
        },
    )
}
