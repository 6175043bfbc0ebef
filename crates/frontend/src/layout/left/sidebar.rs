//! Sidebar: группы меню, каждый пункт открывает таб

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec![
                ("a001_product", tab_label_for_key("a001_product"), "products"),
                ("a002_purchase", tab_label_for_key("a002_purchase"), "purchases"),
            ],
        },
        MenuGroup {
            id: "pos",
            label: "Point of sale",
            icon: "pos",
            items: vec![("u001_pos_home", tab_label_for_key("u001_pos_home"), "grid")],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "shield",
            items: vec![("sys_users", tab_label_for_key("sys_users"), "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["catalog".to_string(), "pos".to_string()]);

    let toggle_group = move |gid: &'static str| {
        expanded_groups.update(|items| {
            if let Some(pos) = items.iter().position(|x| x == gid) {
                items.remove(pos);
            } else {
                items.push(gid.to_string());
            }
        });
    };

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let gid = group.id;
                let is_expanded = move || expanded_groups.with(|items| items.iter().any(|x| x == gid));
                let items = group.items.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| toggle_group(gid)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.iter().map(|&(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| {
                                                log::info!("Menu: open '{}'", id);
                                                ctx.open_tab(id, label);
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_have_labels() {
        for group in get_menu_groups() {
            assert!(!group.items.is_empty(), "{}", group.id);
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "{}", id);
            }
        }
    }
}
