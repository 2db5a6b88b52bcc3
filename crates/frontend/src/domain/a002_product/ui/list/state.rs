use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    // Фильтры
    pub category_ref: Option<String>,
    pub search: String,

    // Сортировка
    pub sort_field: String,
    pub sort_ascending: bool,

    // Серверная пагинация
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            category_ref: None,
            search: String::new(),
            sort_field: "code".to_string(),
            sort_ascending: true,
            // Пагинация
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
