use contracts::domain::a004_order::OrderStatus;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrderListState {
    // Фильтры
    pub status: Option<OrderStatus>,
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

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            status: None,
            search: String::new(),
            sort_field: "ordered_at".to_string(),
            sort_ascending: false,
            // Пагинация
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
