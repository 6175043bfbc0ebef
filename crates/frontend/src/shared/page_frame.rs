//! PageFrame: корневая обёртка каждой страницы в табе.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, например `"a001_product--list"`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !is_known_category(category) {
        log::warn!("PageFrame: non-standard page '{}' ({})", page_id, category);
    }

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
