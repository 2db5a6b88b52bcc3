//! Main page component for Product details

use super::tabs::{GeneralTab, MediaTab, VariantsTab};
use super::view_model::ProductDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn ProductDetails(
    id: Option<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsVm::new(id.clone());
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    // Обновить заголовок таба после загрузки данных
    if let Some(id_val) = id.clone() {
        let stored_id = StoredValue::new(id_val);
        Effect::new({
            let vm = vm.clone();
            move || {
                let form = vm.form.get();
                if !form.name.is_empty() {
                    let tab_key = format!("a002_product_detail_{}", stored_id.get_value());
                    let tab_title = format!("Товар: {}", form.name);
                    tabs_store.update_tab_title(&tab_key, &tab_title);
                }
            }
        });
    }

    let (active_tab, set_active_tab) = signal("general".to_string());

    // Ошибки VM уходят в тосты (единый плоский формат)
    Effect::new({
        let vm = vm.clone();
        move || {
            if let Some(err) = vm.error.get() {
                toast.error(err);
                vm.error.set(None);
            }
        }
    });

    let vm_header = vm.clone();
    let vm_general = vm.clone();
    let vm_variants = vm.clone();
    let vm_media = vm.clone();

    view! {
        <div class="page page--detail">
            <Header vm=vm_header id=id on_close=on_close />

            <div class="page__tabs-bar">
                <button
                    class="page__tab"
                    class:page__tab--active=move || active_tab.get() == "general"
                    on:click=move |_| set_active_tab.set("general".to_string())
                >
                    {"Основное"}
                </button>
                <button
                    class="page__tab"
                    class:page__tab--active=move || active_tab.get() == "variants"
                    on:click=move |_| set_active_tab.set("variants".to_string())
                >
                    {"Варианты"}
                </button>
                <button
                    class="page__tab"
                    class:page__tab--active=move || active_tab.get() == "media"
                    on:click=move |_| set_active_tab.set("media".to_string())
                >
                    {"Медиа"}
                </button>
            </div>

            <div class="page__content">
                {move || {
                    match active_tab.get().as_str() {
                        "variants" => view! { <VariantsTab vm=vm_variants.clone() /> }.into_any(),
                        "media" => view! { <MediaTab vm=vm_media.clone() /> }.into_any(),
                        _ => view! { <GeneralTab vm=vm_general.clone() /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn Header(
    vm: ProductDetailsVm,
    id: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();

    let is_edit = id.is_some();
    let title = if is_edit {
        "Редактирование товара"
    } else {
        "Новый товар"
    };

    let vm_save = vm.clone();

    let handle_save = move |_| {
        let on_saved = Rc::new(move |_| {
            toast.success("Товар сохранён");
            on_close.run(());
        });
        vm_save.save_command(on_saved);
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2>{title}</h2>
            </div>
            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=Signal::derive({
                        let vm = vm.clone();
                        move || !vm.is_form_valid()()
                    })
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
    }
}
