use super::view_model::TemplateDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn TemplateDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = TemplateDetailsVm::new(id.clone());
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    // Заголовок таба после загрузки
    {
        let stored_id = StoredValue::new(id.clone());
        let vm = vm.clone();
        Effect::new(move || {
            let form = vm.form.get();
            if !form.name.is_empty() {
                let tab_key = format!("a009_template_detail_{}", stored_id.get_value());
                let tab_title = format!("Шаблон: {}", form.name);
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

    let vm_save = vm.clone();
    let handle_save = move |_| {
        let on_saved = Rc::new(move |_| {
            toast.success("Шаблон сохранён");
        });
        vm_save.save_command(on_saved);
    };

    let vm_valid = vm.clone();

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{move || {
                        let name = form.get().name;
                        if name.is_empty() {
                            "Шаблон витрины".to_string()
                        } else {
                            format!("Шаблон: {}", name)
                        }
                    }}</h2>
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
                <div class="form-grid" style="padding: var(--spacing-md); max-width: 860px;">
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
                        <label>{"Тип раскладки"}</label>
                        <select
                            class="form-control"
                            on:change=move |ev| {
                                let val = event_target_value(&ev);
                                form.update(|f| f.layout_kind = val);
                            }
                        >
                            {["main", "event", "collection"].into_iter().map(|kind| {
                                view! {
                                    <option value={kind} selected=move || form.get().layout_kind == kind>
                                        {kind}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group form-group--inline">
                        <label>{"Опубликован"}</label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_published
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.is_published = checked);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Секции (JSON-массив блоков)"}</label>
                        <textarea
                            class="form-control"
                            rows="18"
                            style="font-family: monospace; font-size: 13px;"
                            prop:value=move || form.get().sections_raw
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                form.update(|f| f.sections_raw = val);
                            }
                        ></textarea>
                    </div>
                </div>
            </div>
        </div>
    }
}
