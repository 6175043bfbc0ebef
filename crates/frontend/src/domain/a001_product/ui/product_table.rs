//! ProductTable: таблица каталога с выбором строк.
//!
//! Выбор хранится в `SelectionSet` владельца и не зависит от страницы.
//! Чекбокс в заголовке работает только с id текущей страницы.
//! Ячейки статуса и действий интерактивные: их клики не открывают строку.

use crate::shared::components::table::{
    format_price, format_weight, placeholder_row, render_row_cells, Column, PageWindow,
    SelectionSet, TableCellCheckbox, TableHeader, TableHeaderCheckbox, TablePagination,
};
use crate::shared::icons::icon;
use contracts::domain::a001_product::ProductDto;
use leptos::prelude::*;
use std::sync::Arc;

fn product_columns(
    on_toggle_status: Callback<String>,
    on_edit: Callback<ProductDto>,
    on_delete: Callback<ProductDto>,
) -> Vec<Column<ProductDto>> {
    vec![
        Column::new("code", "Code", |p: &ProductDto| Some(p.code.clone())).width("110px"),
        Column::new("name", "Name", |p: &ProductDto| Some(p.name.clone())),
        Column::new("category", "Category", |p: &ProductDto| Some(p.category.clone()))
            .width("120px"),
        Column::new("metal", "Metal", |p: &ProductDto| p.metal.clone()).width("140px"),
        Column::new("weight", "Weight", |p: &ProductDto| p.weight_grams.map(format_weight))
            .width("90px"),
        Column::new("price", "Price", |p: &ProductDto| Some(format_price(p.price)))
            .width("110px")
            .render(|value, _, _| {
                view! { <span class="table__cell-money">{value}</span> }.into_any()
            }),
        Column::new("stock", "Stock", |p: &ProductDto| Some(p.stock.to_string())).width("70px"),
        Column::new("status", "Status", |p: &ProductDto| Some(p.status.label().to_string()))
            .width("100px")
            .interactive()
            .render(move |value, product, _| {
                let id = product.id.clone();
                let modifier = if product.is_active() {
                    "badge--success"
                } else {
                    "badge--neutral"
                };
                view! {
                    <button
                        class=format!("badge badge--clickable {}", modifier)
                        title="Toggle status"
                        on:click=move |_| on_toggle_status.run(id.clone())
                    >
                        {value}
                    </button>
                }
                .into_any()
            }),
        Column::new("actions", "", |_: &ProductDto| None)
            .width("90px")
            .interactive()
            .render(move |_, product, _| {
                let for_edit = product.clone();
                let for_delete = product.clone();
                view! {
                    <div class="table__actions">
                        <button
                            class="button button--icon"
                            title="Edit"
                            on:click=move |_| on_edit.run(for_edit.clone())
                        >
                            {icon("edit")}
                        </button>
                        <button
                            class="button button--icon button--danger"
                            title="Delete"
                            on:click=move |_| on_delete.run(for_delete.clone())
                        >
                            {icon("trash")}
                        </button>
                    </div>
                }
                .into_any()
            }),
    ]
}

#[component]
pub fn ProductTable(
    /// Строки текущей страницы
    #[prop(into)]
    rows: Signal<Vec<ProductDto>>,

    #[prop(into)]
    window: Signal<PageWindow>,

    on_page_change: Callback<PageWindow>,

    selection: RwSignal<SelectionSet>,

    #[prop(optional, into)]
    loading: MaybeProp<bool>,

    /// Клик по строке вне интерактивных ячеек
    on_open: Callback<ProductDto>,

    on_toggle_status: Callback<String>,
    on_edit: Callback<ProductDto>,
    on_delete: Callback<ProductDto>,
) -> impl IntoView {
    let columns = product_columns(on_toggle_status, on_edit, on_delete);
    let colspan = columns.len() + 1;
    let header_columns = columns.clone();
    let columns = StoredValue::new(columns);

    let page_ids = Memo::new(move |_| {
        rows.with(|items| items.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
    });

    let header_state = Signal::derive(move || page_ids.with(|ids| selection.with(|s| s.page_state(ids))));
    let toggle_all = Callback::new(move |_| {
        let ids = page_ids.get_untracked();
        selection.update(|s| s.toggle_all(&ids));
    });

    let leading: ChildrenFn = Arc::new(move || {
        view! { <TableHeaderCheckbox state=header_state on_toggle=toggle_all /> }.into_any()
    });

    let body = move || {
        if loading.get().unwrap_or(false) {
            return placeholder_row(colspan, "Loading...".to_string());
        }
        let items = rows.get();
        if items.is_empty() {
            return placeholder_row(colspan, "No products found".to_string());
        }
        let start = window.get().start_index().max(1);
        items
            .into_iter()
            .enumerate()
            .map(|(position, product)| {
                let cells =
                    columns.with_value(|cols| render_row_cells(cols, &product, start + position));
                let id = product.id.clone();
                let id_for_class = id.clone();
                let id_for_checked = id.clone();
                let id_for_change = id.clone();
                view! {
                    <tr
                        class="table__row table__row--clickable"
                        class:table__row--selected=move || selection.with(|s| s.contains(&id_for_class))
                        data-row-id=id
                        on:click=move |_| on_open.run(product.clone())
                    >
                        <TableCellCheckbox
                            checked=Signal::derive(move || selection.with(|s| s.contains(&id_for_checked)))
                            on_change=Callback::new(move |checked: bool| {
                                selection.update(|s| s.set(&id_for_change, checked));
                            })
                        />
                        {cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table product-table">
            <div class="table-wrapper">
                <table id="a001-product-table" class="table">
                    <TableHeader columns=header_columns leading=leading />
                    <tbody class="table__body">{body}</tbody>
                </table>
            </div>
            <TablePagination window=window on_change=on_page_change />
        </div>
    }
}
