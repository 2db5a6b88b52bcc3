//! Витрина: упорядоченные слоты опубликованных товаров.
//!
//! Порядок правится стрелками (позиция уходит на сервер, список
//! перечитывается), включение/выключение — чекбоксом или массово.

use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a007_curation::{BulkActiveRequest, CurationSlot};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct CurationRow {
    pub id: String,
    pub product_name: String,
    pub headline: String,
    pub position: i32,
    pub is_active: bool,
}

impl CurationRow {
    fn from_slot(slot: CurationSlot) -> Self {
        Self {
            id: slot.base.id.as_string(),
            product_name: slot.product_name,
            headline: slot.headline.unwrap_or_default(),
            position: slot.position,
            is_active: slot.is_active,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CurationList() -> impl IntoView {
    let toast = use_toast();

    let (items, set_items) = signal::<Vec<CurationRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_slots().await {
                Ok(slots) => {
                    let mut rows: Vec<CurationRow> =
                        slots.into_iter().map(CurationRow::from_slot).collect();
                    rows.sort_by_key(|r| r.position);
                    set_items.set(rows);
                }
                Err(e) => toast.error(format!("Ошибка загрузки витрины: {}", e)),
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

    // Сдвиг слота вверх/вниз: сервер переставляет соседей сам
    let move_slot = move |id: String, delta: i32| {
        let new_position = items.with_untracked(|rows| {
            rows.iter()
                .find(|r| r.id == id)
                .map(|r| (r.position + delta).max(0))
        });
        let Some(new_position) = new_position else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match update_position(&id, new_position).await {
                Ok(()) => fetch(),
                Err(e) => toast.error(format!("Ошибка перемещения: {}", e)),
            }
        });
    };

    let toggle_active = move |id: String, active: bool| {
        wasm_bindgen_futures::spawn_local(async move {
            let request = BulkActiveRequest {
                ids: vec![id.clone()],
                is_active: active,
            };
            match bulk_set_active(&request).await {
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

    let bulk_activate = move |active: bool| {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let request = BulkActiveRequest {
                ids,
                is_active: active,
            };
            match bulk_set_active(&request).await {
                Ok(()) => {
                    toast.success(if active {
                        "Слоты включены"
                    } else {
                        "Слоты выключены"
                    });
                    set_selected.set(HashSet::new());
                    fetch();
                }
                Err(e) => toast.error(format!("Ошибка обновления: {}", e)),
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
                    "Убрать выбранные слоты с витрины? Количество: {}",
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
                if delete_slot(&id).await.is_err() {
                    all_ok = false;
                }
            }
            if all_ok {
                toast.success("Слоты удалены");
            } else {
                toast.error("Часть слотов удалить не удалось");
            }
            set_selected.set(HashSet::new());
            fetch();
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Витрина"}</h2>
                <div class="header-actions">
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="btn btn-success" on:click=move |_| bulk_activate(true) disabled={move || selected.get().is_empty()}>
                        {icon("check")}
                        {move || format!("Включить ({})", selected.get().len())}
                    </button>
                    <button class="btn btn-danger" on:click=move |_| bulk_activate(false) disabled={move || selected.get().is_empty()}>
                        {icon("x")}
                        {"Выключить"}
                    </button>
                    <button class="btn btn-danger" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {"Удалить"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th></th>
                            <th>{"Позиция"}</th>
                            <th>{"Товар"}</th>
                            <th>{"Заголовок"}</th>
                            <th>{"Активен"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items.get().into_iter().map(|row| {
                                let id = row.id.clone();
                                let id_for_up = id.clone();
                                let id_for_down = id.clone();
                                let id_for_toggle = id.clone();
                                let is_active = row.is_active;

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
                                        <td>{row.position}</td>
                                        <td>{row.product_name.clone()}</td>
                                        <td>{if row.headline.is_empty() { "—".to_string() } else { row.headline.clone() }}</td>
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
                                        <td>
                                            <button class="btn btn-secondary btn-sm" title="Выше"
                                                on:click=move |_| move_slot(id_for_up.clone(), -1)>
                                                {icon("arrow-up")}
                                            </button>
                                            <button class="btn btn-secondary btn-sm" title="Ниже"
                                                on:click=move |_| move_slot(id_for_down.clone(), 1)>
                                                {icon("arrow-down")}
                                            </button>
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

async fn fetch_slots() -> Result<Vec<CurationSlot>, String> {
    let url = format!("{}/api/curations", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<CurationSlot>>()
        .await
        .map_err(|e| format!("{e}"))
}

async fn update_position(id: &str, position: i32) -> Result<(), String> {
    let url = format!("{}/api/curations/{}/position", api_base(), id);
    let body = serde_json::json!({ "position": position });
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

async fn bulk_set_active(request: &BulkActiveRequest) -> Result<(), String> {
    let url = format!("{}/api/curations/bulk-active", api_base());
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

async fn delete_slot(id: &str) -> Result<(), String> {
    let url = format!("{}/api/curations/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
