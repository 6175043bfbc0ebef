use crate::domain::a001_product::filter::{filter_products, ProductFilter};
use crate::shared::components::table::PageWindow;
use contracts::domain::a001_product::{ProductDto, ProductStatus};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    pub items: Vec<ProductDto>,
    pub filter: ProductFilter,
    pub window: PageWindow,
    pub is_loaded: bool,
}

impl ProductListState {
    pub fn filtered(&self) -> Vec<ProductDto> {
        filter_products(&self.items, &self.filter)
    }

    /// Пересчитывает итог окна после изменения данных или фильтра
    pub fn refresh_window(&mut self) {
        let total = self.filtered().len();
        self.window = self.window.with_total(total);
    }

    pub fn toggle_status(&mut self, id: &str) -> Option<ProductStatus> {
        let product = self.items.iter_mut().find(|p| p.id == id)?;
        product.status = product.status.toggled();
        Some(product.status)
    }

    pub fn remove(&mut self, id: &str) -> Option<ProductDto> {
        let index = self.items.iter().position(|p| p.id == id)?;
        let removed = self.items.remove(index);
        self.refresh_window();
        Some(removed)
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock::mock_products;

    fn loaded(page_size: usize) -> ProductListState {
        let mut state = ProductListState {
            items: mock_products(),
            window: PageWindow::new(1, page_size, 0),
            ..Default::default()
        };
        state.refresh_window();
        state
    }

    #[test]
    fn test_toggle_status_flips_one_row() {
        let mut state = loaded(10);
        assert_eq!(state.toggle_status("p-1003"), Some(ProductStatus::Active));
        assert_eq!(state.toggle_status("missing"), None);
        assert!(state.items.iter().all(|p| p.is_active()));
    }

    #[test]
    fn test_remove_on_last_page_moves_window_back() {
        let mut state = loaded(2);
        state.window = state.window.go_to(3);
        assert_eq!(state.window.start_index(), 5);

        state.remove("p-1005");
        assert_eq!(state.window.total, 4);
        assert_eq!(state.window.page, 2);
    }

    #[test]
    fn test_filter_shrinks_total() {
        let mut state = loaded(10);
        state.filter.category = Some("Rings".into());
        state.refresh_window();
        assert_eq!(state.window.total, 1);
        assert_eq!(state.window.range_label(), "1–1 of 1");
    }
}
