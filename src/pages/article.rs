//! Article page generation

use maud::{Markup, PreEscaped, html};

use crate::articles::Article;
use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::util::{article_depth, root_prefix};

/// Generates an article page
///
/// The breadcrumb follows the slug: intermediate segments are shown as
/// plain text and the article title is the current page.
///
/// # Arguments
///
/// * `site_name`: Site name shown in the banner
/// * `article`: Loaded article
/// * `body_html`: Rendered article body
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site_name: &str, article: &Article, body_html: &str) -> Markup {
    let depth = article_depth(&article.slug);
    let root = root_prefix(depth);

    let segments = article.slug.segments();
    let mut crumbs: Vec<(&str, Option<String>)> =
        vec![("Articles", Some(format!("{}articles/index.html", root)))];
    for segment in &segments[..segments.len() - 1] {
        crumbs.push((segment.as_str(), None));
    }
    crumbs.push((article.title(), None));

    page_wrapper(
        article.title(),
        site_name,
        &root,
        &["article.css", "highlight.css"],
        html! {
            div class="articles-page__banner" {
                (breadcrumb(&root, &crumbs))
                h1 class="articles-page__heading" { (site_name) }
            }
            main class="articles-page__content" {
                div class="tabs" role="tablist" aria-label="Page navigation" {
                    span class="tab tab--selected" role="tab" aria-selected="true" { "Content" }
                }
                article class="tab-panel" role="tabpanel" {
                    h1 class="articles-page__subheading" { (article.title()) }
                    @if let Some(date) = &article.meta.date {
                        p class="article-date" { (date) }
                    }
                    div class="markdown-body" {
                        (PreEscaped(body_html))
                    }
                }
            }
        },
    )
}
