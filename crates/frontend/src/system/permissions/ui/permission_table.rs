//! PermissionTable: матрица "пункт меню × действие" с группами.
//!
//! Таблица ничего не хранит, кроме раскрытых групп. Клик по ячейке
//! группы отдаёт наверх одну пачку изменений для всех детей.

use crate::shared::components::ui::{CheckState, Checkbox};
use crate::shared::icons::icon;
use crate::system::permissions::aggregate::{
    group_state, group_toggle_changes, visible_rows, PermissionRow,
};
use contracts::system::permissions::{
    PermissionAction, PermissionChange, PermissionMatrix, PermissionMenu,
};
use leptos::prelude::*;
use std::collections::HashSet;

#[component]
pub fn PermissionTable(
    #[prop(into)]
    menus: Signal<Vec<PermissionMenu>>,

    #[prop(into)]
    permissions: Signal<PermissionMatrix>,

    /// Пачка изменений; владелец применяет её одним обновлением
    on_toggle: Callback<Vec<PermissionChange>>,
) -> impl IntoView {
    let expanded: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

    let toggle_group = move |key: String| {
        expanded.update(|set| {
            if !set.remove(&key) {
                set.insert(key);
            }
        });
    };

    let group_cells = move |group: PermissionMenu| {
        PermissionAction::COLUMNS
            .into_iter()
            .map(|action| {
                let for_state = group.clone();
                let for_toggle = group.clone();
                let state = Signal::derive(move || {
                    permissions.with(|m| group_state(m, &for_state, action))
                });
                let on_change = Callback::new(move |_: bool| {
                    let changes =
                        permissions.with_untracked(|m| group_toggle_changes(m, &for_toggle, action));
                    if !changes.is_empty() {
                        on_toggle.run(changes);
                    }
                });
                view! {
                    <td class="table__cell table__cell--checkbox" data-action=action.as_str()>
                        <Checkbox state=state on_change=on_change />
                    </td>
                }
            })
            .collect_view()
    };

    let leaf_cells = move |menu_key: String| {
        PermissionAction::COLUMNS
            .into_iter()
            .map(|action| {
                let key_for_state = menu_key.clone();
                let key_for_toggle = menu_key.clone();
                let state = Signal::derive(move || {
                    CheckState::from(permissions.with(|m| m.get(&key_for_state, action)))
                });
                let on_change = Callback::new(move |checked: bool| {
                    on_toggle.run(vec![PermissionChange::new(
                        key_for_toggle.clone(),
                        action,
                        checked,
                    )]);
                });
                view! {
                    <td class="table__cell table__cell--checkbox" data-action=action.as_str()>
                        <Checkbox state=state on_change=on_change />
                    </td>
                }
            })
            .collect_view()
    };

    let rows = move || {
        let rows = menus.with(|m| expanded.with(|e| visible_rows(m, e)));
        rows.into_iter()
            .map(|row| match row {
                PermissionRow::Group { menu, expanded: is_expanded } => {
                    let key_for_attr = menu.key.clone();
                    let key_for_toggle = menu.key.clone();
                    let label = menu.label.clone();
                    view! {
                        <tr class="table__row permission-table__group" data-menu-key=key_for_attr>
                            <td class="table__cell">
                                <button
                                    class="permission-table__toggle"
                                    class:permission-table__toggle--expanded=is_expanded
                                    on:click=move |_| toggle_group(key_for_toggle.clone())
                                >
                                    {icon(if is_expanded { "chevron-down" } else { "chevron-right" })}
                                    <span>{label}</span>
                                </button>
                            </td>
                            {group_cells(menu)}
                        </tr>
                    }
                    .into_any()
                }
                PermissionRow::Child { menu, group_key } => {
                    let key_for_attr = menu.key.clone();
                    let PermissionMenu { key, label, .. } = menu;
                    view! {
                        <tr
                            class="table__row permission-table__child"
                            data-menu-key=key_for_attr
                            data-group-key=group_key
                        >
                            <td class="table__cell permission-table__child-label">{label}</td>
                            {leaf_cells(key)}
                        </tr>
                    }
                    .into_any()
                }
                PermissionRow::Single { menu } => {
                    let key_for_attr = menu.key.clone();
                    let PermissionMenu { key, label, .. } = menu;
                    view! {
                        <tr class="table__row permission-table__single" data-menu-key=key_for_attr>
                            <td class="table__cell">{label}</td>
                            {leaf_cells(key)}
                        </tr>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="table-wrapper">
            <table class="table permission-table">
                <thead class="table__head">
                    <tr class="table__header-row">
                        <th class="table__header-cell">"Menu"</th>
                        {PermissionAction::COLUMNS
                            .into_iter()
                            .map(|action| view! {
                                <th class="table__header-cell table__header-cell--checkbox">
                                    {action.label()}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="table__body">{rows}</tbody>
            </table>
        </div>
    }
}
