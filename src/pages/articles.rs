//! Articles index page generation

use maud::{Markup, html};

use crate::articles::Article;
use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::util::{article_href, root_prefix};

/// Generates the list of all published articles
///
/// Articles are listed in the order given.
pub fn generate(site_name: &str, articles: &[Article]) -> Markup {
    let root = root_prefix(1);

    page_wrapper(
        "Articles",
        site_name,
        &root,
        &["article.css"],
        html! {
            (breadcrumb(&root, &[("Articles", None)]))
            main class="articles-index" {
                h1 class="page-title" { "Articles" }
                @if articles.is_empty() {
                    p class="empty-state" { "No articles published yet." }
                } @else {
                    ul class="article-list" {
                        @for article in articles {
                            li class="article-item" {
                                a href=(format!("{}{}", root, article_href(&article.slug))) {
                                    (article.title())
                                }
                                @if let Some(date) = &article.meta.date {
                                    span class="article-date" { (date) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
