use super::page_window::{PageSizeChangePolicy, PageWindow, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// TablePagination: выбор размера страницы, диапазон записей, назад/вперёд.
///
/// Виджет ничего не хранит: он получает `PageWindow` и сообщает новое окно
/// через `on_change`. При смене размера страница пересчитывается по
/// `page_size_policy`, так что вызывающему коду не нужно делать это самому.
#[component]
pub fn TablePagination(
    #[prop(into)]
    window: Signal<PageWindow>,

    on_change: Callback<PageWindow>,

    /// По умолчанию: возврат на первую страницу
    #[prop(optional)]
    page_size_policy: PageSizeChangePolicy,

    /// Варианты размера страницы (по умолчанию PAGE_SIZE_OPTIONS)
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());

    view! {
        <div class="pagination-controls">
            <label class="pagination-page-size">
                <span>"Rows per page:"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                        let next = window.get_untracked().with_page_size(size, page_size_policy);
                        on_change.run(next);
                    }
                    prop:value=move || window.get().page_size.to_string()
                >
                    {page_size_opts.into_iter().map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || window.get().page_size == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-info">
                {move || window.get().range_label()}
            </span>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=move || !window.get().has_previous()
                on:click=move |_| {
                    let current = window.get_untracked();
                    if current.has_previous() {
                        on_change.run(current.previous());
                    }
                }
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=move || !window.get().has_next()
                on:click=move |_| {
                    let current = window.get_untracked();
                    if current.has_next() {
                        on_change.run(current.next());
                    }
                }
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
