use serde::{Deserialize, Serialize};

/// Страница серверной выдачи списка
///
/// Бэкенд отвечает этой обёрткой на все list-запросы с параметрами
/// `page`/`page_size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Номер страницы (0-based)
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    /// Всего записей с учётом фильтров
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

impl<T> Page<T> {
    /// Всего страниц при текущем размере страницы
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            page_size: 50,
            total_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<i32> = Page {
            items: vec![],
            page: 0,
            page_size: 50,
            total_count: 101,
        };
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn empty_page_size_is_safe() {
        let page: Page<i32> = Page {
            items: vec![],
            page: 0,
            page_size: 0,
            total_count: 10,
        };
        assert_eq!(page.total_pages(), 0);
    }
}
