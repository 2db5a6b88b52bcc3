use super::super::view_model::ProductDetailsVm;
use leptos::prelude::*;

#[component]
pub fn GeneralTab(vm: ProductDetailsVm) -> impl IntoView {
    let form = vm.form;
    let categories = vm.categories;

    view! {
        <div class="form-grid" style="padding: var(--spacing-md); max-width: 720px;">
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
                <label>{"Артикул"}</label>
                <input
                    type="text"
                    class="form-control"
                    readonly
                    prop:value=move || form.get().code.unwrap_or_else(|| "— присвоится при сохранении —".to_string())
                />
            </div>

            <div class="form-group">
                <label>{"Категория"}</label>
                <select
                    class="form-control"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| {
                            f.category_ref = if value.is_empty() { None } else { Some(value) };
                        });
                    }
                >
                    <option value="" selected=move || form.get().category_ref.is_none()>
                        {"— без категории —"}
                    </option>
                    {move || {
                        let current = form.get().category_ref;
                        categories.get().into_iter().map(|(id, name)| {
                            let selected = current.as_deref() == Some(id.as_str());
                            view! {
                                <option value={id.clone()} selected=selected>{name}</option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div class="form-group">
                <label>{"Бренд"}</label>
                <input
                    type="text"
                    class="form-control"
                    prop:value=move || form.get().brand
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        form.update(|f| f.brand = val);
                    }
                />
            </div>

            <div class="form-group">
                <label>{"Цена *"}</label>
                <input
                    type="number"
                    class="form-control"
                    min="0"
                    step="0.01"
                    prop:value=move || form.get().price.to_string()
                    on:input=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(0.0);
                        form.update(|f| f.price = val);
                    }
                />
            </div>

            <div class="form-group">
                <label>{"Цена со скидкой"}</label>
                <input
                    type="number"
                    class="form-control"
                    min="0"
                    step="0.01"
                    prop:value=move || {
                        form.get()
                            .sale_price
                            .map(|v| v.to_string())
                            .unwrap_or_default()
                    }
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| {
                            f.sale_price = if raw.trim().is_empty() {
                                None
                            } else {
                                raw.parse().ok()
                            };
                        });
                    }
                />
            </div>

            <div class="form-group">
                <label>{"Миниатюра (URL)"}</label>
                <input
                    type="text"
                    class="form-control"
                    prop:value=move || form.get().thumbnail_url
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        form.update(|f| f.thumbnail_url = val);
                    }
                />
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
    }
}
