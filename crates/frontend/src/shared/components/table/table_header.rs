use super::column::Column;
use leptos::prelude::*;

/// Строка заголовков по описанию колонок.
///
/// `leading` рендерится перед колонками (например, чекбокс "выбрать все")
/// и должен сам состоять из `<th>`.
#[component]
pub fn TableHeader<T>(
    columns: Vec<Column<T>>,
    #[prop(optional)] leading: Option<ChildrenFn>,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <thead class="table__head">
            <tr class="table__header-row">
                {leading.map(|leading| leading())}
                {columns
                    .into_iter()
                    .map(|column| {
                        let style = column.width.as_ref().map(|w| format!("width: {w}; min-width: {w};"));
                        view! {
                            <th class="table__header-cell" data-column-key=column.key style=style>
                                {column.header.clone()}
                            </th>
                        }
                    })
                    .collect_view()}
            </tr>
        </thead>
    }
}
