use crate::shared::api_utils::api_base;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_variant::Variant;
use contracts::domain::a006_inquire::{AnswerRequest, Inquire, ResolveRequest};
use contracts::domain::common::{AggregateId, Page};
use gloo_net::http::Request;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct InquireRow {
    pub id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: String,
    pub is_answered: bool,
    pub answer: Option<String>,
    pub product_ref: Option<String>,
    pub variant_ref: Option<String>,
}

impl InquireRow {
    fn from_inquire(i: Inquire) -> Self {
        Self {
            id: i.base.id.as_string(),
            author_name: i.author_name,
            created_at: i.base.metadata.created_at.to_rfc3339(),
            is_answered: i.is_answered,
            answer: i.answer,
            product_ref: i.product_ref,
            variant_ref: i.variant_ref,
            body: i.body,
        }
    }
}

/// Режим модального окна
#[derive(Clone, Debug)]
enum ModalMode {
    Closed,
    /// Ответ оператора
    Answer(InquireRow),
    /// Привязка к товару/варианту
    Resolve(InquireRow),
}

#[component]
#[allow(non_snake_case)]
pub fn InquireList() -> impl IntoView {
    let toast = use_toast();

    let (items, set_items) = signal::<Vec<InquireRow>>(Vec::new());
    let (answered_filter, set_answered_filter) = signal::<Option<bool>>(None);
    let (modal, set_modal) = signal(ModalMode::Closed);

    // Серверная пагинация
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(50usize);
    let (total_count, set_total_count) = signal(0usize);
    let (total_pages, set_total_pages) = signal(0usize);

    let fetch = move || {
        let page_val = page.get_untracked();
        let page_size_val = page_size.get_untracked();
        let answered = answered_filter.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_inquires(page_val, page_size_val, answered).await {
                Ok(loaded) => {
                    set_total_count.set(loaded.total_count);
                    set_total_pages.set(loaded.total_pages());
                    set_items.set(
                        loaded
                            .items
                            .into_iter()
                            .map(InquireRow::from_inquire)
                            .collect(),
                    );
                }
                Err(e) => toast.error(format!("Ошибка загрузки вопросов: {}", e)),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Вопросы покупателей"}</h2>
                <div class="header-actions">
                    <select
                        class="form-control"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_answered_filter.set(match value.as_str() {
                                "answered" => Some(true),
                                "open" => Some(false),
                                _ => None,
                            });
                            set_page.set(0);
                            fetch();
                        }
                    >
                        <option value="">{"Все вопросы"}</option>
                        <option value="open">{"Без ответа"}</option>
                        <option value="answered">{"Отвеченные"}</option>
                    </select>
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
                            <th>{"Автор"}</th>
                            <th>{"Вопрос"}</th>
                            <th>{"Создан"}</th>
                            <th>{"Ответ"}</th>
                            <th>{"Товар"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items.get().into_iter().map(|row| {
                                let row_for_answer = row.clone();
                                let row_for_resolve = row.clone();

                                view! {
                                    <tr>
                                        <td>{row.author_name.clone()}</td>
                                        <td style="max-width: 420px;">{row.body.clone()}</td>
                                        <td>{format_datetime(&row.created_at)}</td>
                                        <td style="text-align: center;">
                                            {if row.is_answered {
                                                view! { <span style="color: green; font-weight: bold;">{"✓"}</span> }.into_any()
                                            } else {
                                                view! { <span style="color: red;">{"✗"}</span> }.into_any()
                                            }}
                                        </td>
                                        <td style="text-align: center;">
                                            {if row.product_ref.is_some() {
                                                view! { <span style="color: green; font-weight: bold;">{"✓"}</span> }.into_any()
                                            } else {
                                                view! { <span>{"—"}</span> }.into_any()
                                            }}
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-secondary btn-sm"
                                                on:click=move |_| set_modal.set(ModalMode::Answer(row_for_answer.clone()))
                                            >
                                                {"Ответить"}
                                            </button>
                                            <button
                                                class="btn btn-secondary btn-sm"
                                                on:click=move |_| set_modal.set(ModalMode::Resolve(row_for_resolve.clone()))
                                            >
                                                {icon("link")}
                                                {"Привязать"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |p: usize| {
                    set_page.set(p);
                    fetch();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    set_page_size.set(size);
                    set_page.set(0);
                    fetch();
                })
            />

            {move || match modal.get() {
                ModalMode::Closed => view! { <></> }.into_any(),
                ModalMode::Answer(row) => view! {
                    <AnswerModal
                        row=row
                        on_done=Callback::new(move |_| {
                            set_modal.set(ModalMode::Closed);
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| set_modal.set(ModalMode::Closed))
                    />
                }.into_any(),
                ModalMode::Resolve(row) => view! {
                    <ResolveModal
                        row=row
                        on_done=Callback::new(move |_| {
                            set_modal.set(ModalMode::Closed);
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| set_modal.set(ModalMode::Closed))
                    />
                }.into_any(),
            }}
        </div>
    }
}

/// Модальное окно ответа оператора
#[component]
fn AnswerModal(
    row: InquireRow,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let (answer, set_answer) = signal(row.answer.clone().unwrap_or_default());
    let id = StoredValue::new(row.id.clone());

    let handle_submit = move |_| {
        let text = answer.get();
        if text.trim().is_empty() {
            toast.error("Текст ответа обязателен");
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let request = AnswerRequest {
                answer: text.trim().to_string(),
            };
            match post_answer(&id.get_value(), &request).await {
                Ok(()) => {
                    toast.success("Ответ сохранён");
                    on_done.run(());
                }
                Err(e) => toast.error(format!("Ошибка сохранения ответа: {}", e)),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <h3>{"Ответ на вопрос"}</h3>
                <blockquote style="color: #666; border-left: 3px solid #ddd; padding-left: 8px;">
                    {row.body.clone()}
                </blockquote>
                <textarea
                    class="form-control"
                    rows="5"
                    style="width: 100%;"
                    prop:value=move || answer.get()
                    on:input=move |ev| set_answer.set(event_target_value(&ev))
                ></textarea>
                <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;">
                    <button class="btn btn-primary" on:click=handle_submit>{"Ответить"}</button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>{"Отмена"}</button>
                </div>
            </div>
        </div>
    }
}

/// Модальное окно привязки вопроса к товару/варианту
#[component]
fn ResolveModal(
    row: InquireRow,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let id = StoredValue::new(row.id.clone());

    let (products, set_products) = signal::<Vec<(String, String)>>(Vec::new());
    let (variants, set_variants) = signal::<Vec<(String, String)>>(Vec::new());
    let (product_ref, set_product_ref) = signal(row.product_ref.clone().unwrap_or_default());
    let (variant_ref, set_variant_ref) = signal(row.variant_ref.clone().unwrap_or_default());

    // Товары для селекта
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_product_options().await {
            Ok(options) => set_products.set(options),
            Err(e) => toast.error(format!("Ошибка загрузки товаров: {}", e)),
        }
    });

    // Варианты выбранного товара
    let load_variants = move |product_id: String| {
        if product_id.is_empty() {
            set_variants.set(Vec::new());
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_variant_options(&product_id).await {
                Ok(options) => set_variants.set(options),
                Err(e) => toast.error(format!("Ошибка загрузки вариантов: {}", e)),
            }
        });
    };

    // Если вопрос уже привязан — показываем текущие варианты
    if !row.product_ref.clone().unwrap_or_default().is_empty() {
        load_variants(row.product_ref.clone().unwrap_or_default());
    }

    let handle_submit = move |_| {
        let product = product_ref.get();
        if product.is_empty() {
            toast.error("Выберите товар");
            return;
        }
        let variant = variant_ref.get();
        wasm_bindgen_futures::spawn_local(async move {
            let request = ResolveRequest {
                product_ref: product,
                variant_ref: if variant.is_empty() {
                    None
                } else {
                    Some(variant)
                },
            };
            match put_resolve(&id.get_value(), &request).await {
                Ok(()) => {
                    toast.success("Вопрос привязан к товару");
                    on_done.run(());
                }
                Err(e) => toast.error(format!("Ошибка привязки: {}", e)),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <h3>{"Привязать вопрос к товару"}</h3>
                <div class="form-group">
                    <label>{"Товар *"}</label>
                    <select
                        class="form-control"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_product_ref.set(value.clone());
                            set_variant_ref.set(String::new());
                            load_variants(value);
                        }
                    >
                        <option value="" selected=move || product_ref.get().is_empty()>{"— выберите —"}</option>
                        {move || {
                            let current = product_ref.get();
                            products.get().into_iter().map(|(pid, name)| {
                                let selected = current == pid;
                                view! {
                                    <option value={pid.clone()} selected=selected>{name}</option>
                                }
                            }).collect_view()
                        }}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Вариант"}</label>
                    <select
                        class="form-control"
                        on:change=move |ev| set_variant_ref.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || variant_ref.get().is_empty()>{"— весь товар —"}</option>
                        {move || {
                            let current = variant_ref.get();
                            variants.get().into_iter().map(|(vid, name)| {
                                let selected = current == vid;
                                view! {
                                    <option value={vid.clone()} selected=selected>{name}</option>
                                }
                            }).collect_view()
                        }}
                    </select>
                </div>
                <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;">
                    <button class="btn btn-primary" on:click=handle_submit>{"Привязать"}</button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>{"Отмена"}</button>
                </div>
            </div>
        </div>
    }
}

async fn fetch_inquires(
    page: usize,
    page_size: usize,
    answered: Option<bool>,
) -> Result<Page<Inquire>, String> {
    let mut url = format!(
        "{}/api/inquires?page={}&pageSize={}",
        api_base(),
        page,
        page_size
    );
    if let Some(answered) = answered {
        url.push_str(&format!("&isAnswered={}", answered));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Page<Inquire>>()
        .await
        .map_err(|e| format!("{e}"))
}

async fn post_answer(id: &str, request: &AnswerRequest) -> Result<(), String> {
    let url = format!("{}/api/inquires/{}/answer", api_base(), id);
    let response = Request::post(&url)
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

async fn put_resolve(id: &str, request: &ResolveRequest) -> Result<(), String> {
    let url = format!("{}/api/inquires/{}/resolve", api_base(), id);
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

async fn fetch_product_options() -> Result<Vec<(String, String)>, String> {
    let url = format!("{}/api/products?page=0&pageSize=500", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let page: Page<Product> = response.json().await.map_err(|e| format!("{e}"))?;
    Ok(page
        .items
        .into_iter()
        .map(|p| (p.base.id.as_string(), p.base.description))
        .collect())
}

async fn fetch_variant_options(product_id: &str) -> Result<Vec<(String, String)>, String> {
    let url = format!("{}/api/products/{}/variants", api_base(), product_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let variants: Vec<Variant> = response.json().await.map_err(|e| format!("{e}"))?;
    Ok(variants
        .into_iter()
        .map(|v| (v.base.id.as_string(), v.option_name))
        .collect())
}
