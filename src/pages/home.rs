//! Site home page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;

/// Data container for home page generation.
pub struct HomePageData<'a> {
    pub site_name: &'a str,
    pub org: &'a str,
    /// Number of repositories listed, `None` if the listing failed
    pub repo_count: Option<usize>,
    pub article_count: usize,
}

/// Generates the home page linking to repositories and articles
pub fn generate(data: HomePageData<'_>) -> Markup {
    page_wrapper(
        "Home",
        data.site_name,
        "",
        &["home.css"],
        html! {
            header class="site-header" {
                h1 class="site-name" { (data.site_name) }
                a class="org-link" href=(format!("https://github.com/{}", data.org))
                    target="_blank" rel="noopener" {
                    i class="ph ph-github-logo" {}
                    " " (data.org)
                }
            }
            main class="home-cards" {
                a class="home-card" href="repos/index.html" {
                    i class="ph ph-git-branch" {}
                    h2 { "Repositories" }
                    @if let Some(count) = data.repo_count {
                        p { (count) " public repositories" }
                    } @else {
                        p { "Repository listing unavailable" }
                    }
                }
                a class="home-card" href="articles/index.html" {
                    i class="ph ph-article" {}
                    h2 { "Articles" }
                    p { (data.article_count) " articles" }
                }
            }
        },
    )
}
