//! Выбор строк, общий для всех страниц списка.
//!
//! Набор хранит идентификаторы, а не индексы, поэтому выбор на странице 1
//! переживает переход на страницу 2 и обратно. "Выбрать все" работает только
//! с идентификаторами текущей страницы.

use crate::shared::components::ui::CheckState;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn toggle(&mut self, id: &str) {
        let checked = !self.contains(id);
        self.set(id, checked);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Убирает идентификаторы, которых больше нет в наборе данных (после удаления)
    pub fn retain_existing<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) {
        let existing: HashSet<&str> = existing.into_iter().collect();
        self.ids.retain(|id| existing.contains(id.as_str()));
    }

    pub fn selected_on_page(&self, page_ids: &[String]) -> usize {
        page_ids.iter().filter(|id| self.ids.contains(*id)).count()
    }

    pub fn page_state(&self, page_ids: &[String]) -> CheckState {
        CheckState::from_counts(self.selected_on_page(page_ids), page_ids.len())
    }

    pub fn is_all_selected(&self, page_ids: &[String]) -> bool {
        self.page_state(page_ids).is_checked()
    }

    pub fn is_indeterminate(&self, page_ids: &[String]) -> bool {
        self.page_state(page_ids).is_indeterminate()
    }

    /// Все выбраны → снять текущую страницу, иначе добавить её целиком
    pub fn toggle_all(&mut self, page_ids: &[String]) {
        if self.is_all_selected(page_ids) {
            for id in page_ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(page_ids.iter().cloned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_selection_survives_navigation() {
        let page_a = ids(&["a1", "a2", "a3"]);
        let page_b = ids(&["b1", "b2"]);
        let mut selection = SelectionSet::new();

        selection.toggle_all(&page_a);
        assert!(selection.is_all_selected(&page_a));
        assert_eq!(selection.page_state(&page_b), CheckState::Unchecked);

        selection.set("b2", true);
        assert!(selection.is_indeterminate(&page_b));
        assert!(selection.is_all_selected(&page_a));
        assert_eq!(selection.len(), 4);
    }

    #[test]
    fn test_toggle_all_twice_restores_membership() {
        let page = ids(&["r1", "r2", "r3"]);
        for initial in [vec![], vec!["r2"], vec!["r1", "r2", "r3"]] {
            let mut selection = SelectionSet::new();
            selection.set("other-page", true);
            for id in &initial {
                selection.set(id, true);
            }
            let before = selection.clone();

            selection.toggle_all(&page);
            selection.toggle_all(&page);

            if initial.len() == page.len() {
                assert_eq!(selection, before);
            } else {
                // частичный выбор: первый клик добирает страницу, второй снимает её целиком
                assert_eq!(selection.page_state(&page), CheckState::Unchecked);
                assert!(selection.contains("other-page"));
            }
        }
    }

    #[test]
    fn test_toggle_all_from_unchecked_pair() {
        let page = ids(&["r1", "r2"]);
        let mut selection = SelectionSet::new();
        selection.toggle_all(&page);
        selection.toggle_all(&page);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_page_is_never_all_selected() {
        let mut selection = SelectionSet::new();
        selection.set("x", true);
        assert!(!selection.is_all_selected(&[]));
        assert!(!selection.is_indeterminate(&[]));
    }

    #[test]
    fn test_toggle_single_row() {
        let mut selection = SelectionSet::new();
        selection.toggle("r1");
        assert!(selection.contains("r1"));
        selection.toggle("r1");
        assert!(!selection.contains("r1"));
    }

    #[test]
    fn test_retain_existing() {
        let mut selection = SelectionSet::new();
        selection.set("keep", true);
        selection.set("gone", true);
        selection.retain_existing(["keep", "other"]);
        assert!(selection.contains("keep"));
        assert!(!selection.contains("gone"));
    }
}
