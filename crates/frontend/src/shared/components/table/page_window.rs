//! Арифметика пагинации: страница (с 1), размер страницы, всего записей.

/// Допустимые размеры страницы
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Что делать с текущей страницей при смене размера страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSizeChangePolicy {
    /// Вернуться на первую страницу
    #[default]
    ResetToFirst,
    /// Остаться на той же странице, если она ещё существует
    KeepPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}

impl PageWindow {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Смещение первой записи текущей страницы (с 0)
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Номер первой записи страницы (с 1), `0` при пустом наборе
    pub fn start_index(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.offset() + 1).min(self.total)
        }
    }

    /// Номер последней записи страницы (включительно), `0` при пустом наборе
    pub fn end_index(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page * self.page_size).min(self.total)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        let total_pages = self.total_pages();
        total_pages != 0 && self.page < total_pages
    }

    /// "0-0 of 0" либо "21–25 of 25"
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            "0-0 of 0".to_string()
        } else {
            format!("{}–{} of {}", self.start_index(), self.end_index(), self.total)
        }
    }

    /// Переход на страницу с ограничением диапазоном `[1, total_pages]`
    pub fn go_to(self, page: usize) -> Self {
        let last = self.total_pages().max(1);
        Self {
            page: page.clamp(1, last),
            ..self
        }
    }

    pub fn previous(self) -> Self {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        self.go_to(self.page + 1)
    }

    pub fn with_page_size(self, page_size: usize, policy: PageSizeChangePolicy) -> Self {
        let resized = Self {
            page_size: page_size.max(1),
            ..self
        };
        match policy {
            PageSizeChangePolicy::ResetToFirst => resized.go_to(1),
            PageSizeChangePolicy::KeepPage => resized.go_to(self.page),
        }
    }

    /// Новый итог (после фильтрации), страница прижимается к последней
    pub fn with_total(self, total: usize) -> Self {
        let page = self.page;
        Self { total, ..self }.go_to(page)
    }

    /// Срез текущей страницы из полного набора
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_of_twenty_five() {
        let window = PageWindow::new(3, 10, 25);
        assert_eq!(window.total_pages(), 3);
        assert_eq!(window.start_index(), 21);
        assert_eq!(window.end_index(), 25);
        assert!(!window.has_next());
        assert!(window.has_previous());
        assert_eq!(window.range_label(), "21–25 of 25");
    }

    #[test]
    fn test_empty_total() {
        let window = PageWindow::new(1, 10, 0);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.start_index(), 0);
        assert_eq!(window.end_index(), 0);
        assert!(!window.has_next());
        assert!(!window.has_previous());
        assert_eq!(window.range_label(), "0-0 of 0");
    }

    #[test]
    fn test_page_lengths_for_all_sizes() {
        for total in 0..=60usize {
            for page_size in PAGE_SIZE_OPTIONS {
                let pages = PageWindow::new(1, page_size, total).total_pages();
                assert_eq!(pages, (total + page_size - 1) / page_size);
                for page in 1..=pages {
                    let window = PageWindow::new(page, page_size, total);
                    let len = window.end_index() - window.start_index() + 1;
                    if page < pages {
                        assert_eq!(len, page_size);
                    } else {
                        assert!(len >= 1 && len <= page_size);
                    }
                }
            }
        }
    }

    #[test]
    fn test_go_to_is_clamped() {
        let window = PageWindow::new(1, 10, 25);
        assert_eq!(window.go_to(0).page, 1);
        assert_eq!(window.go_to(9).page, 3);
        assert_eq!(window.next().next().next().page, 3);
        assert_eq!(PageWindow::new(1, 10, 0).next().page, 1);
    }

    #[test]
    fn test_page_size_policy() {
        let window = PageWindow::new(3, 10, 45);
        let reset = window.with_page_size(20, PageSizeChangePolicy::ResetToFirst);
        assert_eq!((reset.page, reset.page_size), (1, 20));

        let kept = window.with_page_size(20, PageSizeChangePolicy::KeepPage);
        assert_eq!(kept.page, 3);

        let clamped = window.with_page_size(50, PageSizeChangePolicy::KeepPage);
        assert_eq!(clamped.page, 1);
    }

    #[test]
    fn test_with_total_clamps_page() {
        let window = PageWindow::new(3, 10, 25).with_total(5);
        assert_eq!(window.page, 1);
        assert_eq!(window.range_label(), "1–5 of 5");
    }

    #[test]
    fn test_slice() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(PageWindow::new(3, 10, 25).slice(&items), &[21, 22, 23, 24, 25]);
        assert_eq!(PageWindow::new(1, 10, 25).slice(&items).len(), 10);
        assert!(PageWindow::new(4, 10, 25).slice(&items).is_empty());
    }
}
