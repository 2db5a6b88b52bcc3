use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ConsumerListState {
    // Фильтры
    pub search: String,
    /// None — все, Some(true) — только активные, Some(false) — только заблокированные
    pub active_only: Option<bool>,

    // Сортировка
    pub sort_field: String,
    pub sort_ascending: bool,

    // Серверная пагинация
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for ConsumerListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            active_only: None,
            sort_field: "signed_up_at".to_string(),
            sort_ascending: false,
            // Пагинация
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<ConsumerListState> {
    RwSignal::new(ConsumerListState::default())
}
