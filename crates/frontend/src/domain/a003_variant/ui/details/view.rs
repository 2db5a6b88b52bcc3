use super::view_model::VariantDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a003_variant::MediaKind;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn VariantDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = VariantDetailsVm::new(id.clone());
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    // Заголовок таба после загрузки
    {
        let stored_id = StoredValue::new(id.clone());
        let vm = vm.clone();
        Effect::new(move || {
            let form = vm.form.get();
            if !form.option_name.is_empty() {
                let tab_key = format!("a003_variant_detail_{}", stored_id.get_value());
                let tab_title = format!("Вариант: {}", form.option_name);
                tabs_store.update_tab_title(&tab_key, &tab_title);
            }
        });
    }

    // Ошибки VM уходят в тосты
    Effect::new({
        let vm = vm.clone();
        move || {
            if let Some(err) = vm.error.get() {
                toast.error(err);
                vm.error.set(None);
            }
        }
    });

    let form = vm.form;
    let media = vm.media;

    // Форма добавления медиа
    let (new_media_url, set_new_media_url) = signal(String::new());
    let (new_media_kind, set_new_media_kind) = signal(MediaKind::Image);

    let vm_save = vm.clone();
    let handle_save = move |_| {
        let on_saved = Rc::new(move |_| {
            toast.success("Вариант сохранён");
            on_close.run(());
        });
        vm_save.save_command(on_saved);
    };

    let vm_add_media = vm.clone();
    let handle_add_media = move |_| {
        let url = new_media_url.get();
        if url.trim().is_empty() {
            toast.error("Укажите URL медиа");
            return;
        }
        vm_add_media.add_media_command(url.trim().to_string(), new_media_kind.get());
        set_new_media_url.set(String::new());
    };

    let vm_remove_media = vm.clone();

    let vm_valid = vm.clone();

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{"Карточка варианта"}</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || !vm_valid.is_form_valid()())
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
                <div class="form-grid" style="padding: var(--spacing-md); max-width: 640px;">
                    <div class="form-group">
                        <label>{"SKU"}</label>
                        <input
                            type="text"
                            class="form-control"
                            readonly
                            prop:value=move || form.get().sku.unwrap_or_default()
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Название опции *"}</label>
                        <input
                            type="text"
                            class="form-control"
                            prop:value=move || form.get().option_name
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                form.update(|f| f.option_name = val);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Надбавка к цене"}</label>
                        <input
                            type="number"
                            class="form-control"
                            step="0.01"
                            prop:value=move || form.get().price_delta.to_string()
                            on:input=move |ev| {
                                let val = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.price_delta = val);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Остаток *"}</label>
                        <input
                            type="number"
                            class="form-control"
                            min="0"
                            prop:value=move || form.get().inventory_count.to_string()
                            on:input=move |ev| {
                                let val = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.inventory_count = val);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Страховой запас"}</label>
                        <input
                            type="number"
                            class="form-control"
                            min="0"
                            prop:value=move || form.get().safety_stock.to_string()
                            on:input=move |ev| {
                                let val = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.safety_stock = val);
                            }
                        />
                    </div>
                </div>

                <div style="padding: var(--spacing-md);">
                    <h3>{"Медиа"}</h3>

                    <div style="display: flex; gap: 8px; margin-bottom: 12px;">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="https://..."
                            style="flex: 1;"
                            prop:value=move || new_media_url.get()
                            on:input=move |ev| set_new_media_url.set(event_target_value(&ev))
                        />
                        <select
                            class="form-control"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_new_media_kind.set(if value == "video" {
                                    MediaKind::Video
                                } else {
                                    MediaKind::Image
                                });
                            }
                        >
                            <option value="image">{"Изображение"}</option>
                            <option value="video">{"Видео"}</option>
                        </select>
                        <button class="btn btn-primary" on:click=handle_add_media>
                            {icon("plus")}
                            {"Добавить"}
                        </button>
                    </div>

                    {move || {
                        let list = media.get();
                        if list.is_empty() {
                            view! { <div class="placeholder">{"Медиа не загружены"}</div> }.into_any()
                        } else {
                            let vm = vm_remove_media.clone();
                            view! {
                                <div style="display: flex; flex-wrap: wrap; gap: 12px;">
                                    {list.into_iter().map(|m| {
                                        let vm = vm.clone();
                                        let media_id = m.id.clone();
                                        view! {
                                            <div class="media-card" style="width: 160px; border: 1px solid #ddd; border-radius: 4px; padding: 8px;">
                                                {match m.kind {
                                                    MediaKind::Image => view! {
                                                        <img src={m.url.clone()} style="width: 100%; height: 120px; object-fit: cover;" />
                                                    }.into_any(),
                                                    MediaKind::Video => view! {
                                                        <div style="width: 100%; height: 120px; display: flex; align-items: center; justify-content: center; background: #000; color: #fff;">
                                                            {"▶ видео"}
                                                        </div>
                                                    }.into_any(),
                                                }}
                                                <button
                                                    class="btn btn-danger"
                                                    style="width: 100%; margin-top: 6px;"
                                                    on:click=move |_| vm.remove_media_command(media_id.clone())
                                                >
                                                    {"Удалить"}
                                                </button>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
