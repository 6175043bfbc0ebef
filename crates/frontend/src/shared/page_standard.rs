//! Категории страниц внутри табов.
//!
//! Корневой элемент страницы получает `id` вида `{entity}--{category}` и
//! `data-page-category` с одной из констант ниже.

/// Список записей: таблица с фильтрами и пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка / форма одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Рабочее место (POS и т.п.)
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Администрирование
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_USECASE, PAGE_CAT_SYSTEM];

/// `{entity}--{category}`, обе части непустые
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_SYSTEM));
        assert!(!is_known_category("dashboard"));
    }
}
