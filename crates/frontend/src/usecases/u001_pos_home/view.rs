use super::POS_TILES;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use leptos::prelude::*;

/// Стартовый экран кассира: сетка плиток, каждая открывает таб
#[component]
pub fn PosHomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let tiles = POS_TILES
        .iter()
        .map(|tile| {
            let key = tile.tab_key;
            let label = tab_label_for_key(key);
            view! {
                <button
                    class="pos-home__tile"
                    on:click=move |_| {
                        log::info!("POS home: open '{}'", key);
                        ctx.open_tab(key, label);
                    }
                >
                    <span class="pos-home__icon">{icon(tile.icon)}</span>
                    <span class="pos-home__label">{label}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="u001_pos_home--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h1 class="page__title">"Point of sale"</h1>
            </div>
            <div class="pos-home__grid">{tiles}</div>
        </PageFrame>
    }
}
