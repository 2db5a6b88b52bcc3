pub mod state;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::number_format::format_money;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_datetime_utc;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput, Sortable};
use crate::shared::toast::use_toast;
use contracts::domain::a004_order::{Order, OrderStatus};
use contracts::domain::common::{AggregateId, Page};
use gloo_net::http::Request;
use leptos::prelude::*;
use state::create_state;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: String,
    pub number: String,
    pub consumer_ref: String,
    pub status: OrderStatus,
    pub line_count: usize,
    pub grand_total: f64,
    pub ordered_at: chrono::DateTime<chrono::Utc>,
}

impl OrderRow {
    fn from_order(o: Order) -> Self {
        Self {
            id: o.base.id.as_string(),
            number: o.base.code,
            consumer_ref: o.consumer_ref,
            status: o.status,
            line_count: o.lines.len(),
            grand_total: o.grand_total,
            ordered_at: o.ordered_at,
        }
    }
}

impl Sortable for OrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "number" => self.number.cmp(&other.number),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "grand_total" => self
                .grand_total
                .partial_cmp(&other.grand_total)
                .unwrap_or(Ordering::Equal),
            "ordered_at" => self.ordered_at.cmp(&other.ordered_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    let list_state = create_state();
    let (items, set_items) = signal::<Vec<OrderRow>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);

    let fetch = move || {
        let state = list_state.get_untracked();
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_orders(state.page, state.page_size, &state.search, state.status).await {
                Ok(page) => {
                    let total_count = page.total_count;
                    let total_pages = page.total_pages();
                    let rows: Vec<OrderRow> =
                        page.items.into_iter().map(OrderRow::from_order).collect();
                    list_state.update(|s| {
                        s.total_count = total_count;
                        s.total_pages = total_pages;
                    });
                    set_items.set(rows);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_is_loading.set(false);
                    toast.error(format!("Ошибка загрузки заказов: {}", e));
                }
            }
        });
    };

    let handle_open = move |id: String| {
        let key = format!("a004_order_detail_{}", id);
        tabs_store.open_tab(&key, "Заказ");
    };

    let get_sorted_items = move || -> Vec<OrderRow> {
        let mut result = items.get();
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
                <h2>{"Заказы"}</h2>
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
                        placeholder="Номер заказа...".to_string()
                    />
                    <select
                        class="form-control"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let status = OrderStatus::ALL
                                .into_iter()
                                .find(|s| s.as_str() == value);
                            list_state.update(|s| {
                                s.status = status;
                                s.page = 0;
                            });
                            fetch();
                        }
                    >
                        <option value="">{"Все статусы"}</option>
                        {OrderStatus::ALL.into_iter().map(|status| {
                            view! {
                                <option value={status.as_str()}>{status.label()}</option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || is_loading.get().then(|| view! { <div class="loading">{"Загрузка..."}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("number")
                                title="Сортировать"
                            >
                                {move || format!("Номер{}", get_sort_indicator(&list_state.get().sort_field, "number", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("ordered_at")
                                title="Сортировать"
                            >
                                {move || format!("Оформлен{}", get_sort_indicator(&list_state.get().sort_field, "ordered_at", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("status")
                                title="Сортировать"
                            >
                                {move || format!("Статус{}", get_sort_indicator(&list_state.get().sort_field, "status", list_state.get().sort_ascending))}
                            </th>
                            <th>{"Строк"}</th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("grand_total")
                                title="Сортировать"
                            >
                                {move || format!("Итого{}", get_sort_indicator(&list_state.get().sort_field, "grand_total", list_state.get().sort_ascending))}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            get_sorted_items().into_iter().map(|row| {
                                let id = row.id.clone();
                                let status_color = match row.status {
                                    OrderStatus::Pending => "#f57c00",
                                    OrderStatus::Paid => "#1976d2",
                                    OrderStatus::Shipped => "#7b1fa2",
                                    OrderStatus::Delivered => "#2e7d32",
                                    OrderStatus::Cancelled => "#757575",
                                };

                                view! {
                                    <tr on:click=move |_| handle_open(id.clone())>
                                        <td>{row.number.clone()}</td>
                                        <td>{format_datetime_utc(&row.ordered_at)}</td>
                                        <td>
                                            <span style=format!("color: {}; font-weight: 500;", status_color)>
                                                {row.status.label()}
                                            </span>
                                        </td>
                                        <td style="text-align: right;">{row.line_count}</td>
                                        <td style="text-align: right;">{format_money(row.grand_total)}</td>
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

async fn fetch_orders(
    page: usize,
    page_size: usize,
    search: &str,
    status: Option<OrderStatus>,
) -> Result<Page<Order>, String> {
    let mut url = format!(
        "{}/api/orders?page={}&pageSize={}",
        crate::shared::api_utils::api_base(),
        page,
        page_size
    );
    if !search.trim().is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status.as_str()));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Page<Order>>()
        .await
        .map_err(|e| format!("{e}"))
}
