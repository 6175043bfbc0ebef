/// Поиск по спискам на клиенте

/// Минимальная длина запроса, с которой включается фильтр
pub const MIN_QUERY_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// `query` уже приведён к нижнему регистру и обрезан
    fn matches_filter(&self, query: &str) -> bool;
}

pub fn is_query_active(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Фильтрует список по поисковому запросу; короткий запрос список не меняет
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if !is_query_active(query) {
        return items.to_vec();
    }
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&query))
        .cloned()
        .collect()
}

/// Регистронезависимое вхождение для реализаций `Searchable`
pub fn contains_ci(haystack: &str, query_lower: &str) -> bool {
    haystack.to_lowercase().contains(query_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn matches_filter(&self, query: &str) -> bool {
            contains_ci(self.0, query)
        }
    }

    #[test]
    fn test_short_query_is_ignored() {
        let items = vec![Item("Ring"), Item("Chain")];
        assert_eq!(filter_list(&items, "ri"), items);
        assert_eq!(filter_list(&items, "   "), items);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![Item("Gold Ring"), Item("Silver Chain")];
        assert_eq!(filter_list(&items, " CHAIN "), vec![Item("Silver Chain")]);
    }
}
