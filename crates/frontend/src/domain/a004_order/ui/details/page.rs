//! Main page component for Order details

use super::model;
use super::tabs::{GeneralTab, LinesTab};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a004_order::Order;
use contracts::domain::a005_consumer::Consumer;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    let (order, set_order) = signal::<Option<Order>>(None);
    let (consumer, set_consumer) = signal::<Option<Consumer>>(None);
    let (active_tab, set_active_tab) = signal("general".to_string());

    let id_stored = StoredValue::new(id.clone());

    let load = move || {
        let order_id = id_stored.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&order_id).await {
                Ok(loaded) => {
                    // Заголовок таба — номер заказа
                    let tab_key = format!("a004_order_detail_{}", order_id);
                    let tab_title = format!("Заказ: {}", loaded.base.code);
                    tabs_store.update_tab_title(&tab_key, &tab_title);

                    let consumer_ref = loaded.consumer_ref.clone();
                    set_order.set(Some(loaded));

                    match model::fetch_consumer(&consumer_ref).await {
                        Ok(c) => set_consumer.set(Some(c)),
                        // Блок покупателя не критичен для карточки
                        Err(e) => leptos::logging::log!("consumer load failed: {}", e),
                    }
                }
                Err(e) => toast.error(format!("Ошибка загрузки заказа: {}", e)),
            }
        });
    };

    // Переход статуса: PUT + перезагрузка карточки
    let transition_to = move |next: contracts::domain::a004_order::OrderStatus| {
        let order_id = id_stored.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match model::update_status(&order_id, next).await {
                Ok(()) => {
                    toast.success(format!("Статус изменён: {}", next.label()));
                    load();
                }
                Err(e) => toast.error(format!("Ошибка смены статуса: {}", e)),
            }
        });
    };

    load();

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{move || {
                        order.get()
                            .map(|o| format!("Заказ {}", o.base.code))
                            .unwrap_or_else(|| "Заказ".to_string())
                    }}</h2>
                    {move || order.get().map(|o| view! {
                        <span class="badge">{o.status.label()}</span>
                    })}
                </div>
                <div class="page__header-right">
                    // Кнопки только допустимых переходов
                    {move || {
                        order.get().map(|o| {
                            o.status.allowed_transitions().into_iter().map(|next| {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| transition_to(next)
                                    >
                                        {next.label()}
                                    </Button>
                                }
                            }).collect_view()
                        })
                    }}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                        " Закрыть"
                    </Button>
                </div>
            </div>

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
                    class:page__tab--active=move || active_tab.get() == "lines"
                    on:click=move |_| set_active_tab.set("lines".to_string())
                >
                    {"Состав"}
                </button>
            </div>

            <div class="page__content">
                {move || {
                    match order.get() {
                        None => view! { <div class="loading">{"Загрузка..."}</div> }.into_any(),
                        Some(o) => match active_tab.get().as_str() {
                            "lines" => view! { <LinesTab order=o /> }.into_any(),
                            _ => view! { <GeneralTab order=o consumer=consumer /> }.into_any(),
                        },
                    }
                }}
            </div>
        </div>
    }
}
