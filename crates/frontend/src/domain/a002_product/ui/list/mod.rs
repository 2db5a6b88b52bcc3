pub mod state;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::number_format::format_money;
use crate::shared::components::PaginationControls;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    get_sort_indicator, highlight_matches, is_filter_applicable, SearchInput, Searchable, Sortable,
};
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::aggregate::BulkPublishRequest;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_variant::{all_sold_out, Variant};
use contracts::domain::common::{AggregateId, Page};
use leptos::prelude::*;
use state::create_state;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category_ref: Option<String>,
    pub category_name: String,
    pub brand: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub is_published: bool,
    /// None пока остатки вариантов не загружены
    pub sold_out: Option<bool>,
}

impl ProductRow {
    fn from_product(p: Product, category_map: &HashMap<String, String>) -> Self {
        let category_name = p
            .category_ref
            .as_ref()
            .and_then(|id| category_map.get(id).cloned())
            .unwrap_or_else(|| "—".to_string());

        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            name: p.base.description,
            category_ref: p.category_ref,
            category_name,
            brand: p.brand.unwrap_or_else(|| "—".to_string()),
            price: p.price,
            sale_price: p.sale_price,
            is_published: p.is_published,
            sold_out: None,
        }
    }
}

impl CsvExportable for ProductRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Артикул",
            "Название",
            "Категория",
            "Бренд",
            "Цена",
            "Цена со скидкой",
            "Опубликован",
            "Распродан",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.category_name.clone(),
            self.brand.clone(),
            format_money(self.price),
            self.sale_price.map(format_money).unwrap_or_else(|| "-".to_string()),
            if self.is_published { "Да" } else { "Нет" }.to_string(),
            match self.sold_out {
                Some(true) => "Да",
                Some(false) => "Нет",
                None => "-",
            }
            .to_string(),
        ]
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();

        self.code.to_lowercase().contains(&filter_lower)
            || self.name.to_lowercase().contains(&filter_lower)
            || self.brand.to_lowercase().contains(&filter_lower)
            || self.category_name.to_lowercase().contains(&filter_lower)
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category_name" => self
                .category_name
                .to_lowercase()
                .cmp(&other.category_name.to_lowercase()),
            "brand" => self.brand.to_lowercase().cmp(&other.brand.to_lowercase()),
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    let list_state = create_state();
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);

    let category_map = move || -> HashMap<String, String> {
        categories
            .get()
            .into_iter()
            .map(|c| (c.base.id.as_string(), c.base.description.clone()))
            .collect()
    };

    // Перезагрузка страницы с сервера
    let fetch = move || {
        let state = list_state.get_untracked();
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products(
                state.page,
                state.page_size,
                &state.search,
                state.category_ref.as_deref(),
            )
            .await
            {
                Ok(page) => {
                    let map = category_map();
                    let total_count = page.total_count;
                    let total_pages = page.total_pages();
                    let rows: Vec<ProductRow> = page
                        .items
                        .into_iter()
                        .map(|p| ProductRow::from_product(p, &map))
                        .collect();
                    let ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();

                    list_state.update(|s| {
                        s.total_count = total_count;
                        s.total_pages = total_pages;
                    });
                    set_items.set(rows);
                    set_is_loading.set(false);

                    // Производный признак "распродан": по остаткам вариантов
                    // загруженных строк, никогда не сохраняется
                    wasm_bindgen_futures::spawn_local(async move {
                        for id in ids {
                            if let Ok(variants) = fetch_product_variants(&id).await {
                                let sold_out = all_sold_out(&variants);
                                set_items.update(|rows| {
                                    if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                                        row.sold_out = Some(sold_out);
                                    }
                                });
                            }
                        }
                    });
                }
                Err(e) => {
                    set_is_loading.set(false);
                    toast.error(format!("Ошибка загрузки товаров: {}", e));
                }
            }
        });
    };

    // Справочник категорий (один раз)
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_categories().await {
            Ok(v) => set_categories.set(v),
            Err(e) => toast.error(format!("Ошибка загрузки категорий: {}", e)),
        }
    });

    // Обновляем отображаемые названия после загрузки справочника
    Effect::new(move |_| {
        let map = category_map();
        set_items.update(|rows| {
            for row in rows.iter_mut() {
                if let Some(ref cat_id) = row.category_ref {
                    if let Some(name) = map.get(cat_id) {
                        row.category_name = name.clone();
                    }
                }
            }
        });
    });

    let handle_create_new = move || {
        tabs_store.open_tab("a002_product_detail_new", "Новый товар");
    };

    let handle_edit = move |id: String| {
        let key = format!("a002_product_detail_{}", id);
        tabs_store.open_tab(&key, "Товар");
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

    // Публикация выбранных одним вызовом — батчинг на сервере
    let bulk_publish = move |publish: bool| {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let request = BulkPublishRequest {
                ids,
                is_published: publish,
            };
            match bulk_publish_products(&request).await {
                Ok(()) => {
                    toast.success(if publish {
                        "Товары опубликованы"
                    } else {
                        "Товары сняты с публикации"
                    });
                    set_selected.set(HashSet::new());
                    fetch();
                }
                Err(e) => toast.error(format!("Ошибка обновления: {}", e)),
            }
        });
    };

    // Фильтр и сортировка в пределах загруженной страницы
    let get_filtered_sorted_items = move || -> Vec<ProductRow> {
        let mut result: Vec<ProductRow> = items
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

    let handle_export = move || {
        let filtered_items = get_filtered_sorted_items();

        if filtered_items.is_empty() {
            toast.error("Нет данных для экспорта");
            return;
        }

        if let Err(e) = export_to_csv(&filtered_items, "товары.csv") {
            toast.error(format!("Ошибка экспорта: {}", e));
        }
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
                <h2>{"Товары"}</h2>
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
                        placeholder="Поиск по товарам...".to_string()
                    />
                    <select
                        class="form-control"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            list_state.update(|s| {
                                s.category_ref = if value.is_empty() { None } else { Some(value) };
                                s.page = 0;
                            });
                            fetch();
                        }
                    >
                        <option value="">{"Все категории"}</option>
                        {move || categories.get().into_iter().map(|c| {
                            let id = c.base.id.as_string();
                            let name = c.base.description.clone();
                            view! {
                                <option value={id}>{name}</option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="btn btn-primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Новый товар"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="btn btn-success" on:click=move |_| handle_export()>
                        {icon("excel")}
                        {"Excel"}
                    </button>
                    <button class="btn btn-success" on:click=move |_| bulk_publish(true) disabled={move || selected.get().is_empty()}>
                        {icon("check")}
                        {move || format!("Опубликовать ({})", selected.get().len())}
                    </button>
                    <button class="btn btn-danger" on:click=move |_| bulk_publish(false) disabled={move || selected.get().is_empty()}>
                        {icon("x")}
                        {"Снять"}
                    </button>
                </div>
            </div>

            {move || is_loading.get().then(|| view! { <div class="loading">{"Загрузка..."}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th></th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("code")
                                title="Сортировать"
                            >
                                {move || format!("Артикул{}", get_sort_indicator(&list_state.get().sort_field, "code", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("name")
                                title="Сортировать"
                            >
                                {move || format!("Название{}", get_sort_indicator(&list_state.get().sort_field, "name", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("category_name")
                                title="Сортировать"
                            >
                                {move || format!("Категория{}", get_sort_indicator(&list_state.get().sort_field, "category_name", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("brand")
                                title="Сортировать"
                            >
                                {move || format!("Бренд{}", get_sort_indicator(&list_state.get().sort_field, "brand", list_state.get().sort_ascending))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("price")
                                title="Сортировать"
                            >
                                {move || format!("Цена{}", get_sort_indicator(&list_state.get().sort_field, "price", list_state.get().sort_ascending))}
                            </th>
                            <th>{"Опубликован"}</th>
                            <th>{"Распродан"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filtered = get_filtered_sorted_items();
                            let current_filter = list_state.get().search;

                            filtered.into_iter().map(|row| {
                                let id = row.id.clone();
                                let id_for_edit = id.clone();
                                let id_for_publish = id.clone();
                                let is_published = row.is_published;

                                let code_view = if is_filter_applicable(&current_filter) {
                                    highlight_matches(&row.code, &current_filter)
                                } else {
                                    view! { <span>{row.code.clone()}</span> }.into_any()
                                };

                                let name_view = if is_filter_applicable(&current_filter) {
                                    highlight_matches(&row.name, &current_filter)
                                } else {
                                    view! { <span>{row.name.clone()}</span> }.into_any()
                                };

                                let price_cell = match row.sale_price {
                                    Some(sale) => format!("{} → {}", format_money(row.price), format_money(sale)),
                                    None => format_money(row.price),
                                };

                                view! {
                                    <tr on:click=move |_| handle_edit(id_for_edit.clone())>
                                        <td>
                                            <input type="checkbox"
                                                prop:checked={
                                                    let selected = selected.get();
                                                    selected.contains(&id)
                                                }
                                                on:click=move |ev| ev.stop_propagation()
                                                on:change={
                                                    let id2 = id.clone();
                                                    move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        toggle_select(id2.clone(), checked);
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>{code_view}</td>
                                        <td>{name_view}</td>
                                        <td>{row.category_name.clone()}</td>
                                        <td>{row.brand.clone()}</td>
                                        <td style="text-align: right;">{price_cell}</td>
                                        <td style="text-align: center;" on:click=move |ev| ev.stop_propagation()>
                                            <input type="checkbox"
                                                prop:checked=is_published
                                                on:change={
                                                    move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        let request = BulkPublishRequest {
                                                            ids: vec![id_for_publish.clone()],
                                                            is_published: checked,
                                                        };
                                                        wasm_bindgen_futures::spawn_local(async move {
                                                            match bulk_publish_products(&request).await {
                                                                Ok(()) => fetch(),
                                                                Err(e) => toast.error(format!("Ошибка обновления: {}", e)),
                                                            }
                                                        });
                                                    }
                                                }
                                            />
                                        </td>
                                        <td style="text-align: center;">
                                            {match row.sold_out {
                                                Some(true) => view! { <span style="color: red; font-weight: bold;">{"✗"}</span> }.into_any(),
                                                Some(false) => view! { <span style="color: green;">{"✓"}</span> }.into_any(),
                                                None => view! { <span>{"…"}</span> }.into_any(),
                                            }}
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

async fn fetch_products(
    page: usize,
    page_size: usize,
    search: &str,
    category_ref: Option<&str>,
) -> Result<Page<Product>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let mut url = format!(
        "{}/api/products?page={}&pageSize={}",
        crate::shared::api_utils::api_base(),
        page,
        page_size
    );
    if !search.trim().is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }
    if let Some(cat) = category_ref {
        url.push_str(&format!("&categoryRef={}", urlencoding::encode(cat)));
    }

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Page<Product> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn fetch_categories() -> Result<Vec<Category>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/categories", crate::shared::api_utils::api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Category> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn fetch_product_variants(product_id: &str) -> Result<Vec<Variant>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!(
        "{}/api/products/{}/variants",
        crate::shared::api_utils::api_base(),
        product_id
    );
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Variant> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn bulk_publish_products(request: &BulkPublishRequest) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let json_data = serde_json::to_string(request).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&json_data);
    opts.set_body(&body);

    let url = format!(
        "{}/api/products/bulk-publish",
        crate::shared::api_utils::api_base()
    );
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
