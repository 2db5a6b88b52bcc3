pub mod state;

use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_date_utc;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    get_sort_indicator, highlight_matches, is_filter_applicable, SearchInput, Searchable, Sortable,
};
use crate::shared::toast::use_toast;
use contracts::domain::a005_consumer::{BulkStatusRequest, Consumer};
use contracts::domain::common::{AggregateId, Page};
use gloo_net::http::Request;
use leptos::prelude::*;
use state::create_state;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct ConsumerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
    pub signed_up_at: chrono::DateTime<chrono::Utc>,
    pub order_count: i32,
}

impl ConsumerRow {
    fn from_consumer(c: Consumer) -> Self {
        Self {
            id: c.base.id.as_string(),
            name: c.base.description,
            email: c.email,
            phone: c.phone.unwrap_or_else(|| "—".to_string()),
            is_active: c.is_active,
            signed_up_at: c.signed_up_at,
            order_count: c.order_count,
        }
    }
}

impl Searchable for ConsumerRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter_lower)
            || self.email.to_lowercase().contains(&filter_lower)
            || self.phone.to_lowercase().contains(&filter_lower)
    }
}

impl Sortable for ConsumerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "signed_up_at" => self.signed_up_at.cmp(&other.signed_up_at),
            "order_count" => self.order_count.cmp(&other.order_count),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ConsumerList() -> impl IntoView {
    let toast = use_toast();

    let list_state = create_state();
    let (items, set_items) = signal::<Vec<ConsumerRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        let state = list_state.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_consumers(state.page, state.page_size, &state.search, state.active_only)
                .await
            {
                Ok(page) => {
                    let total_count = page.total_count;
                    let total_pages = page.total_pages();
                    let rows: Vec<ConsumerRow> = page
                        .items
                        .into_iter()
                        .map(ConsumerRow::from_consumer)
                        .collect();
                    list_state.update(|s| {
                        s.total_count = total_count;
                        s.total_pages = total_pages;
                    });
                    set_items.set(rows);
                }
                Err(e) => toast.error(format!("Ошибка загрузки покупателей: {}", e)),
            }
        });
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    // Один вызов на всю выборку, батчинг на сервере
    let bulk_set_active = move |active: bool| {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let request = BulkStatusRequest {
                ids,
                is_active: active,
            };
            match bulk_update_status(&request).await {
                Ok(()) => {
                    toast.success(if active {
                        "Учётные записи активированы"
                    } else {
                        "Учётные записи заблокированы"
                    });
                    set_selected.set(HashSet::new());
                    fetch();
                }
                Err(e) => toast.error(format!("Ошибка обновления: {}", e)),
            }
        });
    };

    // Переключение статуса одной строки — тот же bulk-запрос с одним ID
    let toggle_active = move |id: String, active: bool| {
        wasm_bindgen_futures::spawn_local(async move {
            let request = BulkStatusRequest {
                ids: vec![id.clone()],
                is_active: active,
            };
            match bulk_update_status(&request).await {
                Ok(()) => {
                    set_items.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                            row.is_active = active;
                        }
                    });
                }
                Err(e) => toast.error(format!("Ошибка обновления: {}", e)),
            }
        });
    };

    let get_filtered_sorted_items = move || -> Vec<ConsumerRow> {
        let mut result: Vec<ConsumerRow> = items
            .get()
            .into_iter()
            .filter(|row| {
                let filter = list_state.get().search;
                if !is_filter_applicable(&filter) {
                    true
                } else {
                    row.matches_filter(&filter)
                }
            })
            .collect();

        let state = list_state.get();
        result.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, &state.sort_field);
            if state.sort_ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        result
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            list_state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Покупатели"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || list_state.get().search)
                        on_change=Callback::new(move |val: String| {
                            list_state.update(|s| {
                                s.search = val;
                                s.page = 0;
                            });
                            fetch();
                        })
                        placeholder="Имя, email или телефон...".to_string()
                    />
                    <select
                        class="form-control"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            list_state.update(|s| {
                                s.active_only = match value.as_str() {
                                    "active" => Some(true),
                                    "blocked" => Some(false),
                                    _ => None,
                                };
                                s.page = 0;
                            });
                            fetch();
                        }
                    >
                        <option value="">{"Все"}</option>
                        <option value="active">{"Активные"}</option>
                        <option value="blocked">{"Заблокированные"}</option>
                    </select>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="btn btn-success" on:click=move |_| bulk_set_active(true) disabled={move || selected.get().is_empty()}>
                        {icon("check")}
                        {move || format!("Активировать ({})", selected.get().len())}
                    </button>
                    <button class="btn btn-danger" on:click=move |_| bulk_set_active(false) disabled={move || selected.get().is_empty()}>
                        {icon("x")}
                        {"Заблокировать"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th></th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("name")
                                title="Сортировать"
                            >
                                {move || format!("Имя{}", get_sort_indicator(&list_state.get().sort_field, "name", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("email")
                                title="Сортировать"
                            >
                                {move || format!("Email{}", get_sort_indicator(&list_state.get().sort_field, "email", list_state.get().sort_ascending))}
                            </th>
                            <th>{"Телефон"}</th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("signed_up_at")
                                title="Сортировать"
                            >
                                {move || format!("Регистрация{}", get_sort_indicator(&list_state.get().sort_field, "signed_up_at", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("order_count")
                                title="Сортировать"
                            >
                                {move || format!("Заказов{}", get_sort_indicator(&list_state.get().sort_field, "order_count", list_state.get().sort_ascending))}
                            </th>
                            <th>{"Активен"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filtered = get_filtered_sorted_items();
                            let current_filter = list_state.get().search;

                            filtered.into_iter().map(|row| {
                                let id = row.id.clone();
                                let id_for_toggle = id.clone();
                                let is_active = row.is_active;

                                let name_view = if is_filter_applicable(&current_filter) {
                                    highlight_matches(&row.name, &current_filter)
                                } else {
                                    view! { <span>{row.name.clone()}</span> }.into_any()
                                };

                                let email_view = if is_filter_applicable(&current_filter) {
                                    highlight_matches(&row.email, &current_filter)
                                } else {
                                    view! { <span>{row.email.clone()}</span> }.into_any()
                                };

                                view! {
                                    <tr>
                                        <td>
                                            <input type="checkbox"
                                                prop:checked={
                                                    let selected = selected.get();
                                                    selected.contains(&id)
                                                }
                                                on:change={
                                                    let id2 = id.clone();
                                                    move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        toggle_select(id2.clone(), checked);
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>{name_view}</td>
                                        <td>{email_view}</td>
                                        <td>{row.phone.clone()}</td>
                                        <td>{format_date_utc(&row.signed_up_at)}</td>
                                        <td style="text-align: right;">{row.order_count}</td>
                                        <td style="text-align: center;">
                                            <input type="checkbox"
                                                prop:checked=is_active
                                                on:change={
                                                    move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        toggle_active(id_for_toggle.clone(), checked);
                                                    }
                                                }
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || list_state.get().page)
                total_pages=Signal::derive(move || list_state.get().total_pages)
                total_count=Signal::derive(move || list_state.get().total_count)
                page_size=Signal::derive(move || list_state.get().page_size)
                on_page_change=Callback::new(move |page: usize| {
                    list_state.update(|s| s.page = page);
                    fetch();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    list_state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    fetch();
                })
            />
        </div>
    }
}

async fn fetch_consumers(
    page: usize,
    page_size: usize,
    search: &str,
    active_only: Option<bool>,
) -> Result<Page<Consumer>, String> {
    let mut url = format!(
        "{}/api/users?page={}&pageSize={}",
        crate::shared::api_utils::api_base(),
        page,
        page_size
    );
    if !search.trim().is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    if let Some(active) = active_only {
        url.push_str(&format!("&isActive={}", active));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Page<Consumer>>()
        .await
        .map_err(|e| format!("{e}"))
}

async fn bulk_update_status(request: &BulkStatusRequest) -> Result<(), String> {
    let url = format!("{}/api/users/status", crate::shared::api_utils::api_base());
    let response = Request::put(&url)
        .json(request)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
