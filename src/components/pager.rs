//! Pagination control component

use maud::{Markup, html};

use crate::pagination::{PAGE_SIZES, Pagination};

/// Renders the pager below a paginated table
///
/// Page size choices link to the first page at that size. Previous and next
/// links are rendered disabled at either end.
///
/// # Arguments
///
/// * `pagination`: Current pagination state
/// * `href`: Link target for a `(page_size, page)` pair
///
/// # Returns
///
/// Pager markup
pub fn pager(pagination: &Pagination, href: impl Fn(usize, usize) -> String) -> Markup {
    let window = pagination.window();
    let page = pagination.page();
    let pages = pagination.page_count();

    html! {
        nav class="pager" aria-label="Pagination" {
            div class="pager-sizes" {
                span class="pager-label" { "Items per page:" }
                @for size in PAGE_SIZES {
                    @if size == window.page_size {
                        span class="pager-size pager-size--current" { (size) }
                    } @else {
                        a class="pager-size" href=(href(size, 1)) { (size) }
                    }
                }
            }
            span class="pager-range" {
                @if let Some((start, end)) = pagination.item_range() {
                    (start) "–" (end) " of " (pagination.total()) " items"
                } @else {
                    "0 items"
                }
            }
            div class="pager-pages" {
                span class="pager-position" { "page " (page) " of " (pages) }
                @if pagination.has_previous() {
                    a class="pager-step" href=(href(window.page_size, page - 1)) aria-label="Previous page" {
                        i class="ph ph-caret-left" {}
                    }
                } @else {
                    span class="pager-step pager-step--disabled" aria-label="Previous page" {
                        i class="ph ph-caret-left" {}
                    }
                }
                @if pagination.has_next() {
                    a class="pager-step" href=(href(window.page_size, page + 1)) aria-label="Next page" {
                        i class="ph ph-caret-right" {}
                    }
                } @else {
                    span class="pager-step pager-step--disabled" aria-label="Next page" {
                        i class="ph ph-caret-right" {}
                    }
                }
            }
        }
    }
}
