//! DataTable: универсальная таблица по описанию колонок.
//!
//! Строки приходят уже нарезанными по странице: таблица рендерит ровно
//! `data.len()` строк либо одну строку-заглушку, если данных нет.
//!
//! ```ignore
//! let columns = vec![
//!     Column::new("code", "Code", |p: &ProductDto| Some(p.code.clone())),
//!     Column::new("metal", "Metal", |p: &ProductDto| p.metal.clone()).width("140px"),
//! ];
//! view! {
//!     <DataTable
//!         columns=columns
//!         data=page_rows
//!         window=window
//!         on_page_change=Callback::new(move |w| state.update(|s| s.window = w))
//!     />
//! }
//! ```

use super::cell_format::TableRowId;
use super::column::{validate_columns, Column};
use super::page_window::{PageSizeChangePolicy, PageWindow};
use super::table_header::TableHeader;
use super::table_pagination::TablePagination;
use leptos::prelude::*;

/// Ячейки одной строки. Интерактивные колонки гасят клик, чтобы он не
/// открыл строку.
pub fn render_row_cells<T>(columns: &[Column<T>], row: &T, absolute_index: usize) -> Vec<AnyView> {
    columns
        .iter()
        .map(|column| {
            let content = column.render_cell(row, absolute_index);
            if column.is_interactive() {
                view! {
                    <td
                        class="table__cell table__cell--interactive"
                        on:click=|e| e.stop_propagation()
                    >
                        {content}
                    </td>
                }
                .into_any()
            } else {
                view! { <td class="table__cell">{content}</td> }.into_any()
            }
        })
        .collect()
}

/// Строка-заглушка на всю ширину таблицы
pub fn placeholder_row(colspan: usize, text: String) -> AnyView {
    view! {
        <tr class="table__row table__row--placeholder">
            <td class="table__cell table__cell--placeholder" colspan=colspan.to_string()>
                {text}
            </td>
        </tr>
    }
    .into_any()
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,

    /// Строки текущей страницы
    #[prop(into)]
    data: Signal<Vec<T>>,

    #[prop(into)]
    window: Signal<PageWindow>,

    on_page_change: Callback<PageWindow>,

    #[prop(optional)]
    page_size_policy: PageSizeChangePolicy,

    #[prop(optional, into)]
    loading: MaybeProp<bool>,

    #[prop(optional)]
    on_row_click: Option<Callback<T>>,

    #[prop(optional, into)]
    empty_text: MaybeProp<String>,

    #[prop(optional)]
    table_id: &'static str,
) -> impl IntoView
where
    T: TableRowId + Clone + Send + Sync + 'static,
{
    if let Err(e) = validate_columns(&columns) {
        log::warn!("DataTable '{}': {}", table_id, e);
    }

    let column_count = columns.len().max(1);
    let header_columns = columns.clone();
    let columns = StoredValue::new(columns);

    let rows = move || {
        if loading.get().unwrap_or(false) {
            return placeholder_row(column_count, "Loading...".to_string());
        }
        let items = data.get();
        if items.is_empty() {
            let text = empty_text.get().unwrap_or_else(|| "No data".to_string());
            return placeholder_row(column_count, text);
        }
        let start = window.get().start_index().max(1);
        items
            .into_iter()
            .enumerate()
            .map(|(position, row)| {
                let cells = columns.with_value(|cols| render_row_cells(cols, &row, start + position));
                let row_id = row.row_id();
                view! {
                    <tr
                        class="table__row"
                        class:table__row--clickable=on_row_click.is_some()
                        data-row-id=row_id
                        on:click=move |_| {
                            if let Some(handler) = on_row_click {
                                handler.run(row.clone());
                            }
                        }
                    >
                        {cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table">
            <div class="table-wrapper">
                <table id=table_id class="table">
                    <TableHeader columns=header_columns />
                    <tbody class="table__body">{rows}</tbody>
                </table>
            </div>
            <TablePagination
                window=window
                on_change=on_page_change
                page_size_policy=page_size_policy
            />
        </div>
    }
}
