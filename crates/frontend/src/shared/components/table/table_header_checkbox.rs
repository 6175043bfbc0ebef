//! Чекбокс "выбрать все" в заголовке таблицы
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || selection.with(|s| s.page_state(&page_ids.get())))
//!     on_toggle=Callback::new(move |_| selection.update(|s| s.toggle_all(&page_ids.get_untracked())))
//! />
//! ```

use crate::shared::components::ui::{CheckState, Checkbox};
use leptos::prelude::*;

#[component]
pub fn TableHeaderCheckbox(
    /// Состояние, вычисленное по строкам текущей страницы
    #[prop(into)]
    state: Signal<CheckState>,
    /// Клик по чекбоксу; решение "выбрать / снять" принимает владелец выбора
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <Checkbox
                state=state
                on_change=Callback::new(move |_| on_toggle.run(()))
            />
        </th>
    }
}
