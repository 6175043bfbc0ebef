pub mod view;

pub use view::PosHomePage;

/// Плитка стартового экрана: ключ таба и иконка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosTile {
    pub tab_key: &'static str,
    pub icon: &'static str,
}

/// Порядок плиток на экране. Ключи без страницы в реестре открывают заглушку.
pub const POS_TILES: &[PosTile] = &[
    PosTile { tab_key: "u002_pos_sale", icon: "pos" },
    PosTile { tab_key: "a001_product", icon: "products" },
    PosTile { tab_key: "a001_product_new", icon: "plus" },
    PosTile { tab_key: "a002_purchase", icon: "purchases" },
    PosTile { tab_key: "u003_price_tags", icon: "tag" },
    PosTile { tab_key: "u004_sales_report", icon: "bar-chart" },
    PosTile { tab_key: "sys_users", icon: "users" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::tab_labels::tab_label_for_key;
    use std::collections::HashSet;

    #[test]
    fn test_tiles_have_labels_and_unique_keys() {
        let mut seen = HashSet::new();
        for tile in POS_TILES {
            assert!(!tab_label_for_key(tile.tab_key).is_empty(), "{}", tile.tab_key);
            assert!(seen.insert(tile.tab_key), "duplicate {}", tile.tab_key);
        }
    }
}
