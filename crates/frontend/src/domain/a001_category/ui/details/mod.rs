//! Карточка категории: создание и редактирование

use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::{Category, CategoryDto};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use thaw::*;

/// Форма карточки (локальное состояние до сохранения)
#[derive(Clone, Debug, Default)]
struct CategoryForm {
    id: Option<String>,
    code: Option<String>,
    name: String,
    comment: String,
    parent_ref: Option<String>,
    position: i32,
    is_visible: bool,
}

impl From<Category> for CategoryForm {
    fn from(c: Category) -> Self {
        Self {
            id: Some(c.base.id.as_string()),
            code: Some(c.base.code),
            name: c.base.description,
            comment: c.base.comment.unwrap_or_default(),
            parent_ref: c.parent_ref,
            position: c.position,
            is_visible: c.is_visible,
        }
    }
}

impl From<CategoryForm> for CategoryDto {
    fn from(form: CategoryForm) -> Self {
        Self {
            id: form.id,
            code: form.code,
            description: form.name,
            comment: if form.comment.trim().is_empty() {
                None
            } else {
                Some(form.comment)
            },
            parent_ref: form.parent_ref,
            position: form.position,
            is_visible: form.is_visible,
        }
    }
}

fn validate(form: &CategoryForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("Название обязательно для заполнения");
    }
    if form.position < 0 {
        return Err("Позиция не может быть отрицательной");
    }
    Ok(())
}

#[component]
pub fn CategoryDetail(id: Option<String>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let toast = use_toast();

    let form = RwSignal::new(CategoryForm::default());
    let (parents, set_parents) = signal::<Vec<(String, String)>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Загрузка карточки
    if let Some(id_val) = id.clone() {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_by_id(&id_val).await {
                Ok(category) => form.set(CategoryForm::from(category)),
                Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    // Справочник родителей для селекта
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_parent_options().await {
            Ok(options) => set_parents.set(options),
            Err(e) => set_error.set(Some(format!("Ошибка загрузки категорий: {}", e))),
        }
    });

    let is_form_valid = move || validate(&form.get()).is_ok();

    let handle_save = move |_| {
        let current = form.get();
        if let Err(msg) = validate(&current) {
            set_error.set(Some(msg.to_string()));
            return;
        }

        let dto: CategoryDto = current.into();
        wasm_bindgen_futures::spawn_local(async move {
            match save_form(&dto).await {
                Ok(()) => {
                    toast.success("Категория сохранена");
                    on_close.run(());
                }
                Err(e) => toast.error(format!("Ошибка сохранения: {}", e)),
            }
        });
    };

    let is_edit = id.is_some();
    let title = if is_edit {
        "Редактирование категории"
    } else {
        "Новая категория"
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{title}</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || !is_form_valid())
                    >
                        {icon("save")}
                        " Сохранить"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                        " Закрыть"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form-grid" style="padding: var(--spacing-md); max-width: 640px;">
                    <div class="form-group">
                        <label>{"Название *"}</label>
                        <input
                            type="text"
                            class="form-control"
                            prop:value=move || form.get().name
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                form.update(|f| f.name = val);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Родительская категория"}</label>
                        <select
                            class="form-control"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.parent_ref = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        >
                            <option value="" selected=move || form.get().parent_ref.is_none()>
                                {"— корневая —"}
                            </option>
                            {move || {
                                let current = form.get();
                                parents.get().into_iter()
                                    // Категория не может быть родителем самой себя
                                    .filter(|(pid, _)| Some(pid) != current.id.as_ref())
                                    .map(|(pid, name)| {
                                        let selected = current.parent_ref.as_deref() == Some(pid.as_str());
                                        view! {
                                            <option value={pid.clone()} selected=selected>{name}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>{"Позиция"}</label>
                        <input
                            type="number"
                            class="form-control"
                            min="0"
                            prop:value=move || form.get().position.to_string()
                            on:input=move |ev| {
                                let val = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.position = val);
                            }
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <label>{"Видна на витрине"}</label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_visible
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.is_visible = checked);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Комментарий"}</label>
                        <textarea
                            class="form-control"
                            prop:value=move || form.get().comment
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                form.update(|f| f.comment = val);
                            }
                        ></textarea>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Загрузить категорию по ID
async fn fetch_by_id(id: &str) -> Result<Category, String> {
    let url = format!("{}/api/categories/{}", api_base(), id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json::<Category>().await.map_err(|e| format!("{e}"))
}

/// Список (id, название) для селекта родителя
async fn fetch_parent_options() -> Result<Vec<(String, String)>, String> {
    let url = format!("{}/api/categories", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let categories: Vec<Category> = response.json().await.map_err(|e| format!("{e}"))?;
    Ok(categories
        .into_iter()
        .map(|c| (c.base.id.as_string(), c.base.description))
        .collect())
}

/// Сохранить категорию (создать или обновить)
async fn save_form(dto: &CategoryDto) -> Result<(), String> {
    let url = format!("{}/api/categories", api_base());
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
