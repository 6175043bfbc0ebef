//! Заголовки табов. Меню, стартовый экран и реестр берут подписи отсюда.

/// Заголовок таба по ключу; пустая строка для неизвестных ключей
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Catalog (a0xx) ────────────────────────────────────────────────
        "a001_product" => "Products",
        "a001_product_new" => "New product",
        "a002_purchase" => "Purchases",

        // ── Point of sale (u0xx) ──────────────────────────────────────────
        "u001_pos_home" => "POS",
        "u002_pos_sale" => "Sale",
        "u003_price_tags" => "Price tags",
        "u004_sales_report" => "Sales report",

        // ── System (sys_*) ────────────────────────────────────────────────
        "sys_users" => "Users",

        _ => "",
    }
}

/// Заголовок detail-таба: «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_product"), "Products");
        assert_eq!(tab_label_for_key("a001_product_detail_p-1001"), "");
        assert_eq!(detail_tab_label("Products", "RNG-1001"), "Products · RNG-1001");
    }
}
