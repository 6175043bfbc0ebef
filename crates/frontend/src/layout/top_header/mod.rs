//! TopHeader: верхняя панель: название и переключатель сайдбара

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let pos_label = tab_label_for_key("u001_pos_home");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("chevron-left")
                    } else {
                        icon("chevron-right")
                    }}
                </button>
                <span class="top-header__title">"Jewelry Back Office"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title=pos_label
                    on:click=move |_| ctx.open_tab("u001_pos_home", pos_label)
                >
                    {icon("pos")}
                </button>
            </div>
        </div>
    }
}

