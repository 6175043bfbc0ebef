//! Клиентский фильтр каталога: поиск, категория, статус

use crate::shared::list_utils::{contains_ci, filter_list, Searchable};
use contracts::domain::a001_product::{ProductDto, ProductStatus};

impl Searchable for ProductDto {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.code, query)
            || contains_ci(&self.name, query)
            || self.metal.as_deref().is_some_and(|m| contains_ci(m, query))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub query: String,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
}

impl ProductFilter {
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.query.trim().is_empty() {
            count += 1;
        }
        if self.category.is_some() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        count
    }
}

pub fn filter_products(items: &[ProductDto], filter: &ProductFilter) -> Vec<ProductDto> {
    filter_list(items, &filter.query)
        .into_iter()
        .filter(|p| {
            filter
                .category
                .as_deref()
                .map_or(true, |category| p.category == category)
        })
        .filter(|p| filter.status.map_or(true, |status| p.status == status))
        .collect()
}

/// Категории в порядке первого появления
pub fn categories(items: &[ProductDto]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for item in items {
        if !result.contains(&item.category) {
            result.push(item.category.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock::mock_products;

    #[test]
    fn test_category_filter_accessories() {
        let filter = ProductFilter {
            category: Some("Accessories".to_string()),
            ..Default::default()
        };
        let rows = filter_products(&mock_products(), &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "CHN-1001");
    }

    #[test]
    fn test_query_matches_code_name_and_metal() {
        let products = mock_products();
        let by_code = ProductFilter { query: "rng-".into(), ..Default::default() };
        assert_eq!(filter_products(&products, &by_code).len(), 1);

        let by_metal = ProductFilter { query: "gold".into(), ..Default::default() };
        let codes: Vec<String> = filter_products(&products, &by_metal)
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec!["RNG-1001", "BRC-1001", "ERG-1001"]);
    }

    #[test]
    fn test_filters_combine() {
        let filter = ProductFilter {
            query: "gold".into(),
            category: None,
            status: Some(ProductStatus::Inactive),
        };
        let rows = filter_products(&mock_products(), &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "BRC-1001");
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        assert_eq!(
            categories(&mock_products()),
            vec!["Rings", "Necklaces", "Bracelets", "Earrings", "Accessories"]
        );
    }
}
