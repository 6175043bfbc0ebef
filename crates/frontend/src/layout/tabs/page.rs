//! TabPage: обёртка контента таба.
//!
//! Контент создаётся один раз при открытии через `registry::render_tab_content`;
//! неактивные табы скрываются классом, а не размонтируются.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_ref() == Some(&key_for_active);

    log::debug!("TabPage created: '{}'", tab_key);
    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || log::debug!("TabPage destroyed: '{}'", key_for_cleanup));

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
