use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, get_sort_indicator, highlight_matches, is_filter_applicable, SearchInput,
    Searchable, Sortable,
};
use crate::shared::toast::use_toast;
use contracts::domain::a008_video::{Video, VideoDto};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct VideoRow {
    pub id: String,
    pub title: String,
    pub url: String,
    pub product_ref: Option<String>,
    pub is_published: bool,
}

impl VideoRow {
    fn from_video(v: Video) -> Self {
        Self {
            id: v.base.id.as_string(),
            title: v.base.description,
            url: v.url,
            product_ref: v.product_ref,
            is_published: v.is_published,
        }
    }
}

impl Searchable for VideoRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();
        self.title.to_lowercase().contains(&filter_lower)
            || self.url.to_lowercase().contains(&filter_lower)
    }
}

impl Sortable for VideoRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            "url" => self.url.cmp(&other.url),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VideoList() -> impl IntoView {
    let toast = use_toast();

    let (items, set_items) = signal::<Vec<VideoRow>>(Vec::new());
    let (show_add, set_show_add) = signal(false);

    // Поиск и сортировка
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort_field, set_sort_field) = signal::<String>("title".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_videos().await {
                Ok(v) => set_items.set(v.into_iter().map(VideoRow::from_video).collect()),
                Err(e) => toast.error(format!("Ошибка загрузки видео: {}", e)),
            }
        });
    };

    let toggle_published = move |id: String, published: bool| {
        wasm_bindgen_futures::spawn_local(async move {
            match update_published(&id, published).await {
                Ok(()) => {
                    set_items.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                            row.is_published = published;
                        }
                    });
                }
                Err(e) => toast.error(format!("Ошибка обновления: {}", e)),
            }
        });
    };

    let delete_video_by_id = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Удалить видео?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_video(&id).await {
                Ok(()) => {
                    toast.success("Видео удалено");
                    set_items.update(|rows| rows.retain(|r| r.id != id));
                }
                Err(e) => toast.error(format!("Ошибка удаления: {}", e)),
            }
        });
    };

    let get_filtered_sorted_items = move || -> Vec<VideoRow> {
        let mut result: Vec<VideoRow> = items
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
        create_sort_toggle(field, sort_field.into(), set_sort_field, set_sort_ascending)
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Видео"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=filter_text
                        on_change=Callback::new(move |val: String| set_filter_text.set(val))
                        placeholder="Поиск по видео...".to_string()
                    />
                    <button class="btn btn-primary" on:click=move |_| set_show_add.set(true)>
                        {icon("plus")}
                        {"Новое видео"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("title")
                                title="Сортировать"
                            >
                                {move || format!("Заголовок{}", get_sort_indicator(&sort_field.get(), "title", sort_ascending.get()))}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("url")
                                title="Сортировать"
                            >
                                {move || format!("Ссылка{}", get_sort_indicator(&sort_field.get(), "url", sort_ascending.get()))}
                            </th>
                            <th>{"Товар"}</th>
                            <th>{"Опубликовано"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filtered = get_filtered_sorted_items();
                            let current_filter = filter_text.get();

                            filtered.into_iter().map(|row| {
                                let id_for_toggle = row.id.clone();
                                let id_for_delete = row.id.clone();
                                let is_published = row.is_published;

                                let title_view = if is_filter_applicable(&current_filter) {
                                    highlight_matches(&row.title, &current_filter)
                                } else {
                                    view! { <span>{row.title.clone()}</span> }.into_any()
                                };

                                view! {
                                    <tr>
                                        <td>{title_view}</td>
                                        <td>
                                            <a href={row.url.clone()} target="_blank">{row.url.clone()}</a>
                                        </td>
                                        <td style="text-align: center;">
                                            {if row.product_ref.is_some() {
                                                view! { <span style="color: green; font-weight: bold;">{"✓"}</span> }.into_any()
                                            } else {
                                                view! { <span>{"—"}</span> }.into_any()
                                            }}
                                        </td>
                                        <td style="text-align: center;">
                                            <input type="checkbox"
                                                prop:checked=is_published
                                                on:change={
                                                    move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        toggle_published(id_for_toggle.clone(), checked);
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>
                                            <button class="btn btn-danger btn-sm" title="Удалить"
                                                on:click=move |_| delete_video_by_id(id_for_delete.clone())>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {move || show_add.get().then(|| view! {
                <AddVideoModal
                    on_done=Callback::new(move |_| {
                        set_show_add.set(false);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| set_show_add.set(false))
                />
            })}
        </div>
    }
}

/// Модальное окно добавления видео
#[component]
fn AddVideoModal(on_done: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let (title, set_title) = signal(String::new());
    let (url, set_url) = signal(String::new());

    let handle_submit = move |_| {
        let title_val = title.get();
        let url_val = url.get();
        if title_val.trim().is_empty() || url_val.trim().is_empty() {
            toast.error("Заголовок и ссылка обязательны");
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let dto = VideoDto {
                id: None,
                description: title_val.trim().to_string(),
                url: url_val.trim().to_string(),
                product_ref: None,
                is_published: false,
            };
            match save_video(&dto).await {
                Ok(()) => {
                    toast.success("Видео добавлено");
                    on_done.run(());
                }
                Err(e) => toast.error(format!("Ошибка сохранения: {}", e)),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <h3>{"Новое видео"}</h3>
                <div class="form-group">
                    <label>{"Заголовок *"}</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>{"Ссылка *"}</label>
                    <input
                        type="text"
                        class="form-control"
                        placeholder="https://..."
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                </div>
                <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;">
                    <button class="btn btn-primary" on:click=handle_submit>{"Сохранить"}</button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>{"Отмена"}</button>
                </div>
            </div>
        </div>
    }
}

async fn fetch_videos() -> Result<Vec<Video>, String> {
    let url = format!("{}/api/videos", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Video>>()
        .await
        .map_err(|e| format!("{e}"))
}

async fn save_video(dto: &VideoDto) -> Result<(), String> {
    let url = format!("{}/api/videos", api_base());
    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

async fn update_published(id: &str, published: bool) -> Result<(), String> {
    let url = format!("{}/api/videos/{}/published", api_base(), id);
    let body = serde_json::json!({ "isPublished": published });
    let response = Request::put(&url)
        .json(&body)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

async fn delete_video(id: &str) -> Result<(), String> {
    let url = format!("{}/api/videos/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
