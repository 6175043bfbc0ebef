use crate::shared::components::table::PageWindow;
use contracts::domain::a002_purchase::PurchaseDto;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PurchaseListState {
    pub items: Vec<PurchaseDto>,
    pub search_query: String,
    pub window: PageWindow,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<PurchaseListState> {
    RwSignal::new(PurchaseListState::default())
}
