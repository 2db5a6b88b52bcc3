use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    get_sort_indicator, highlight_matches, is_filter_applicable, SearchInput, Searchable, Sortable,
};
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::Category;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct CategoryRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub parent_ref: Option<String>,
    pub depth: i32,
    pub position: i32,
    pub is_visible: bool,
}

impl CategoryRow {
    fn from_category(c: Category) -> Self {
        Self {
            id: c.base.id.as_string(),
            code: c.base.code,
            name: c.base.description,
            parent_ref: c.parent_ref,
            depth: c.depth,
            position: c.position,
            is_visible: c.is_visible,
        }
    }
}

impl Searchable for CategoryRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();
        self.code.to_lowercase().contains(&filter_lower)
            || self.name.to_lowercase().contains(&filter_lower)
    }
}

impl Sortable for CategoryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "position" => self.position.cmp(&other.position),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    let (items, set_items) = signal::<Vec<CategoryRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    // Поиск и сортировка
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort_field, set_sort_field) = signal::<String>("position".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_categories().await {
                Ok(v) => {
                    let rows: Vec<CategoryRow> =
                        v.into_iter().map(CategoryRow::from_category).collect();
                    set_items.set(rows);
                }
                Err(e) => toast.error(format!("Ошибка загрузки категорий: {}", e)),
            }
        });
    };

    let handle_create_new = move || {
        tabs_store.open_tab("a001_category_detail_new", "Новая категория");
    };

    let handle_edit = move |id: String| {
        let key = format!("a001_category_detail_{}", id);
        tabs_store.open_tab(&key, "Категория");
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

    // Смена видимости прямо в строке
    let toggle_visible = move |id: String, visible: bool| {
        wasm_bindgen_futures::spawn_local(async move {
            match update_visibility(&id, visible).await {
                Ok(()) => {
                    set_items.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                            row.is_visible = visible;
                        }
                    });
                }
                Err(e) => toast.error(format!("Не удалось обновить видимость: {}", e)),
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Удалить выбранные категории? Количество: {}",
                    ids.len()
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let mut all_ok = true;
            for id in ids {
                if delete_category(&id).await.is_err() {
                    all_ok = false;
                }
            }
            if all_ok {
                toast.success("Категории удалены");
            } else {
                toast.error("Часть категорий удалить не удалось");
            }
            match fetch_categories().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(CategoryRow::from_category).collect());
                }
                Err(e) => toast.error(format!("Ошибка загрузки категорий: {}", e)),
            }
            set_selected.set(HashSet::new());
        });
    };

    // Функция для получения отфильтрованных и отсортированных данных
    let get_filtered_sorted_items = move || -> Vec<CategoryRow> {
        let mut result: Vec<CategoryRow> = items
            .get()
            .into_iter()
            .filter(|row| {
                let filter = filter_text.get();
                if !is_filter_applicable(&filter) {
                    true
                } else {
                    row.matches_filter(&filter)
                }
            })
            .collect();

        let field = sort_field.get();
        let ascending = sort_ascending.get();
        result.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, &field);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        result
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Категории"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=filter_text
                        on_change=Callback::new(move |val: String| set_filter_text.set(val))
                        placeholder="Поиск по категориям...".to_string()
                    />
                    <button class="btn btn-primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Новая категория"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="btn btn-danger" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
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
                                on:click=toggle_sort("code")
                                title="Сортировать"
                            >
                                {move || format!("Код{}", get_sort_indicator(&sort_field.get(), "code", sort_ascending.get()))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("name")
                                title="Сортировать"
                            >
                                {move || format!("Название{}", get_sort_indicator(&sort_field.get(), "name", sort_ascending.get()))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("position")
                                title="Сортировать"
                            >
                                {move || format!("Позиция{}", get_sort_indicator(&sort_field.get(), "position", sort_ascending.get()))}
                            </th>
                            <th>{"Видимость"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filtered = get_filtered_sorted_items();
                            let current_filter = filter_text.get();

                            filtered.into_iter().map(|row| {
                                let id = row.id.clone();
                                let id_for_edit = id.clone();
                                let id_for_toggle = id.clone();

                                let name_view = if is_filter_applicable(&current_filter) {
                                    highlight_matches(&row.name, &current_filter)
                                } else {
                                    view! { <span>{row.name.clone()}</span> }.into_any()
                                };

                                // Отступ по глубине вложенности
                                let indent = format!("padding-left: {}px;", 8 + row.depth * 20);
                                let is_visible = row.is_visible;

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
                                        <td>{row.code.clone()}</td>
                                        <td style={indent}>{name_view}</td>
                                        <td>{row.position}</td>
                                        <td on:click=move |ev| ev.stop_propagation()>
                                            <input type="checkbox"
                                                prop:checked=is_visible
                                                on:change={
                                                    move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        toggle_visible(id_for_toggle.clone(), checked);
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
        </div>
    }
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

async fn update_visibility(id: &str, visible: bool) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let body = serde_json::json!({ "isVisible": visible }).to_string();

    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&body);
    opts.set_body(&body);

    let url = format!(
        "{}/api/categories/{}/visibility",
        crate::shared::api_utils::api_base(),
        id
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

async fn delete_category(id: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = format!(
        "{}/api/categories/{}",
        crate::shared::api_utils::api_base(),
        id
    );
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

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
