use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key.get_value().as_str()));

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    let title = move || {
        tabs_store.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key.get_value())
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{title}</span>
            <button class="tab-close" title="Close" on:click=on_close>{icon("x")}</button>
        </div>
    }
}
