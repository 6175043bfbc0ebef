use leptos::prelude::*;

/// Чекбокс выбора строки.
///
/// Рендерит `<td>`; клик по ячейке не вызывает клик по строке (stop_propagation).
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    /// Новое значение чекбокса
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
