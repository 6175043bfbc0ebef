//! Реестр контента табов: ключ таба → страница.
//!
//! Detail-табы кодируют id в ключе (`a001_product_detail_{id}`).

use crate::domain::a001_product::ui::details::ProductFormPage;
use crate::domain::a001_product::ui::list::ProductListPage;
use crate::domain::a002_purchase::ui::list::PurchasePage;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::list::UserListContainer;
use crate::usecases::u001_pos_home::PosHomePage;
use leptos::prelude::*;

const PRODUCT_DETAIL_PREFIX: &str = "a001_product_detail_";

/// Что показывать в табе с данным ключом
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    PosHome,
    ProductList,
    ProductForm { id: Option<String> },
    PurchaseList,
    Users,
    Unknown,
}

pub fn resolve_tab(key: &str) -> TabContent {
    match key {
        "u001_pos_home" => TabContent::PosHome,
        "a001_product" => TabContent::ProductList,
        "a001_product_new" => TabContent::ProductForm { id: None },
        "a002_purchase" => TabContent::PurchaseList,
        "sys_users" => TabContent::Users,
        k => match k.strip_prefix(PRODUCT_DETAIL_PREFIX) {
            Some(id) if !id.is_empty() => TabContent::ProductForm {
                id: Some(id.to_string()),
            },
            _ => TabContent::Unknown,
        },
    }
}

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match resolve_tab(key) {
        TabContent::PosHome => view! { <PosHomePage /> }.into_any(),
        TabContent::ProductList => view! { <ProductListPage /> }.into_any(),
        TabContent::ProductForm { id } => {
            let key_for_close = key.to_string();
            let key_for_cancel = key.to_string();
            view! {
                <ProductFormPage
                    id=id
                    on_saved=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                    on_cancel=Callback::new(move |_| tabs_store.close_tab(&key_for_cancel))
                />
            }
            .into_any()
        }
        TabContent::PurchaseList => view! { <PurchasePage /> }.into_any(),
        TabContent::Users => view! { <UserListContainer /> }.into_any(),
        TabContent::Unknown => {
            log::warn!("No page registered for tab '{}'", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tab() {
        assert_eq!(resolve_tab("a001_product"), TabContent::ProductList);
        assert_eq!(
            resolve_tab("a001_product_new"),
            TabContent::ProductForm { id: None }
        );
        assert_eq!(
            resolve_tab("a001_product_detail_p-1003"),
            TabContent::ProductForm {
                id: Some("p-1003".to_string())
            }
        );
        assert_eq!(resolve_tab("a001_product_detail_"), TabContent::Unknown);
        assert_eq!(resolve_tab("u002_pos_sale"), TabContent::Unknown);
    }
}
