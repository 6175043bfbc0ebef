pub mod state;

use self::state::create_state;
use crate::domain::a001_product::filter::categories;
use crate::domain::a001_product::mock;
use crate::domain::a001_product::ui::{ExportDropdown, ExportScope, ProductTable};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::components::table::{PageWindow, SelectionSet};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::ProductDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let selection = RwSignal::new(SelectionSet::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let pending_delete: RwSignal<Option<ProductDto>> = RwSignal::new(None);
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let load_items = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match mock::fetch_products().await {
                Ok(items) => {
                    log::info!("Loaded {} products", items.len());
                    let ids: Vec<String> = items.iter().map(|p| p.id.clone()).collect();
                    state.update(|s| {
                        s.items = items;
                        s.refresh_window();
                        s.is_loaded = true;
                    });
                    selection.update(|s| s.retain_existing(ids.iter().map(String::as_str)));
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    Effect::new(move |_| {
        let query = search.get();
        let selected_category = category.get();
        state.update(|s| {
            s.filter.query = query;
            s.filter.category = (!selected_category.is_empty()).then_some(selected_category);
            s.window = s.window.go_to(1);
            s.refresh_window();
        });
    });

    let filtered = Memo::new(move |_| state.with(|s| s.filtered()));
    let window = Signal::derive(move || state.with(|s| s.window));
    let page_rows =
        Signal::derive(move || filtered.with(|rows| window.get().slice(rows).to_vec()));
    let category_list = Memo::new(move |_| state.with(|s| categories(&s.items)));
    let selected_count = Signal::derive(move || selection.with(|s| s.len()));

    let selected_products = move || {
        selection.with_untracked(|sel| {
            state.with_untracked(|s| {
                s.items
                    .iter()
                    .filter(|p| sel.contains(&p.id))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    let open_product = move |product: ProductDto| {
        log::info!("Open product {}", product.code);
        ctx.open_tab(
            &format!("a001_product_detail_{}", product.id),
            &detail_tab_label(tab_label_for_key("a001_product"), &product.code),
        );
    };

    let on_export = Callback::new(move |scope: ExportScope| {
        let rows = match &scope {
            ExportScope::Filtered => filtered.get_untracked(),
            ExportScope::Selected => selected_products(),
            ExportScope::Category(name) => state.with_untracked(|s| {
                s.items
                    .iter()
                    .filter(|p| &p.category == name)
                    .cloned()
                    .collect()
            }),
        };
        let filename = format!("products_{}.csv", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
        match export_to_csv(&rows, &filename) {
            Ok(()) => log::info!("Exported {} products ({:?})", rows.len(), scope),
            Err(e) => {
                log::error!("Export failed: {}", e);
                set_error.set(Some(format!("Export failed: {}", e)));
            }
        }
    });

    let print_selected = move |_| {
        let count = selection.with_untracked(|s| s.len());
        if count == 0 {
            return;
        }
        log::info!("Print {} selected products", count);
        if let Some(w) = web_sys::window() {
            if let Err(e) = w.print() {
                log::warn!("Print failed: {:?}", e);
            }
        }
    };

    let on_toggle_status = Callback::new(move |id: String| {
        state.update(|s| {
            if let Some(status) = s.toggle_status(&id) {
                log::info!("Product {} is now {}", id, status.label());
            }
        });
    });

    let confirm_delete = move |id: String| {
        state.update(|s| {
            if let Some(removed) = s.remove(&id) {
                log::info!("Deleted product {}", removed.code);
            }
        });
        selection.update(|s| s.set(&id, false));
        pending_delete.set(None);
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || filtered.with(|f| f.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_tab("a001_product_new", tab_label_for_key("a001_product_new"))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = state.with(|s| s.filter.active_count());
                                (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                            }}
                        </div>
                        <div class="filter-panel-header__right">
                            <span class="bulk-actions__count">
                                {move || format!("Selected: {}", selected_count.get())}
                            </span>
                            <ExportDropdown
                                categories=category_list
                                selected_count=selected_count
                                on_export=on_export
                            />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=print_selected
                                disabled=Signal::derive(move || selected_count.get() == 0)
                            >
                                {icon("printer")}
                                " Print"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| selection.update(|s| s.clear())
                                disabled=Signal::derive(move || selected_count.get() == 0)
                            >
                                "Clear selection"
                            </Button>
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search placeholder="Code, name or metal..." />
                            </div>
                            <select
                                class="filter-panel__select"
                                on:change=move |ev| category.set(event_target_value(&ev))
                                prop:value=move || category.get()
                            >
                                <option value="">"All categories"</option>
                                {move || category_list.get().into_iter().map(|name| {
                                    let value = name.clone();
                                    view! { <option value=value>{name}</option> }
                                }).collect_view()}
                            </select>
                        </Flex>
                    </div>
                </div>

                <ProductTable
                    rows=page_rows
                    window=window
                    on_page_change=Callback::new(move |w: PageWindow| state.update(|s| s.window = w))
                    selection=selection
                    loading=Signal::derive(move || loading.get() && !state.with(|s| s.is_loaded))
                    on_open=Callback::new(open_product)
                    on_toggle_status=on_toggle_status
                    on_edit=Callback::new(open_product)
                    on_delete=Callback::new(move |product: ProductDto| pending_delete.set(Some(product)))
                />
            </div>

            {move || pending_delete.get().map(|product| {
                let id = product.id.clone();
                let buttons: ChildrenFn = Arc::new(move || {
                    let id = id.clone();
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| pending_delete.set(None)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| confirm_delete(id.clone())
                        >
                            {icon("trash")}
                            " Delete"
                        </Button>
                    }
                    .into_any()
                });
                view! {
                    <Modal
                        title=format!("Delete {}?", product.code)
                        on_close=Callback::new(move |_| pending_delete.set(None))
                        action_buttons=buttons
                    >
                        <p>{format!("\"{}\" will be removed from the catalog.", product.name)}</p>
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
