pub mod state;

use self::state::create_state;
use crate::domain::a002_purchase::mock;
use crate::shared::components::table::{
    format_price, Column, DataTable, PageSizeChangePolicy, PageWindow, TableRowId,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_purchase::PurchaseDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a002-purchase-table";

impl TableRowId for PurchaseDto {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for PurchaseDto {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.document_no, query)
            || contains_ci(&self.supplier, query)
            || self.note.as_deref().is_some_and(|n| contains_ci(n, query))
    }
}

fn purchase_columns() -> Vec<Column<PurchaseDto>> {
    vec![
        Column::new("index", "#", |_: &PurchaseDto| None)
            .width("48px")
            .render(|_, _, index| view! { <span class="table__cell-index">{index}</span> }.into_any()),
        Column::new("document_date", "Date", |p: &PurchaseDto| {
            Some(format_date(p.document_date))
        })
        .width("110px"),
        Column::new("document_no", "Number", |p: &PurchaseDto| Some(p.document_no.clone()))
            .width("110px"),
        Column::new("supplier", "Supplier", |p: &PurchaseDto| Some(p.supplier.clone())),
        Column::new("lines_count", "Lines", |p: &PurchaseDto| Some(p.lines_count.to_string()))
            .width("70px"),
        Column::new("total_amount", "Total", |p: &PurchaseDto| {
            Some(format_price(p.total_amount))
        })
        .width("130px")
        .render(|value, _, _| view! { <span class="table__cell-money">{value}</span> }.into_any()),
        Column::new("status", "Status", |p: &PurchaseDto| Some(p.status.label().to_string()))
            .width("110px")
            .render(|value, purchase, _| {
                let class = format!("badge badge--{}", purchase.status.badge_modifier());
                view! { <span class=class>{value}</span> }.into_any()
            }),
        Column::new("note", "Note", |p: &PurchaseDto| p.note.clone()),
    ]
}

#[component]
pub fn PurchasePage() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());

    let load_items = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match mock::fetch_purchases().await {
                Ok(items) => {
                    log::info!("Loaded {} purchases", items.len());
                    state.update(|s| {
                        let total = filter_list(&items, &s.search_query).len();
                        s.items = items;
                        s.window = s.window.with_total(total);
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load purchases: {}", e);
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
        state.update(|s| {
            let total = filter_list(&s.items, &query).len();
            s.search_query = query;
            s.window = s.window.with_total(total).go_to(1);
        });
    });

    let filtered = Memo::new(move |_| state.with(|s| filter_list(&s.items, &s.search_query)));
    let window = Signal::derive(move || state.with(|s| s.window));
    let page_rows =
        Signal::derive(move || filtered.with(|rows| window.get().slice(rows).to_vec()));
    let grand_total = Signal::derive(move || {
        filtered.with(|rows| rows.iter().map(|p| p.total_amount).sum::<f64>())
    });

    view! {
        <PageFrame page_id="a002_purchase--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Purchases"</h1>
                    <Badge>{move || filtered.with(|f| f.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__summary">
                        {move || format!("Total: {}", format_price(grand_total.get()))}
                    </span>
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
                            <span class="filter-panel__title">"Search"</span>
                        </div>
                        <div class="filter-panel-header__right">
                            <Input value=search placeholder="Number, supplier or note..." />
                        </div>
                    </div>
                </div>

                <DataTable
                    columns=purchase_columns()
                    data=page_rows
                    window=window
                    on_page_change=Callback::new(move |w: PageWindow| state.update(|s| s.window = w))
                    page_size_policy=PageSizeChangePolicy::KeepPage
                    loading=Signal::derive(move || loading.get() && !state.with(|s| s.is_loaded))
                    empty_text="No purchases found"
                    table_id=TABLE_ID
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_have_unique_keys() {
        let columns = purchase_columns();
        let mut keys: Vec<&str> = columns.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), columns.len());
    }

    #[test]
    fn test_supplier_search() {
        let rows = filter_list(&mock::mock_purchases(), "gem house");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|p| p.supplier == "Gem House"));
    }
}
