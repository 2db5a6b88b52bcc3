use crate::shared::components::number_format::format_money;
use crate::shared::date_utils::format_datetime_utc;
use contracts::domain::a004_order::Order;
use contracts::domain::a005_consumer::Consumer;
use leptos::prelude::*;

#[component]
pub fn GeneralTab(order: Order, consumer: ReadSignal<Option<Consumer>>) -> impl IntoView {
    view! {
        <div style="padding: var(--spacing-md); display: flex; gap: 24px; flex-wrap: wrap;">
            <div class="info-block" style="min-width: 280px;">
                <h3>{"Заказ"}</h3>
                <dl>
                    <dt>{"Номер"}</dt>
                    <dd>{order.base.code.clone()}</dd>
                    <dt>{"Оформлен"}</dt>
                    <dd>{format_datetime_utc(&order.ordered_at)}</dd>
                    <dt>{"Статус"}</dt>
                    <dd>{order.status.label()}</dd>
                    <dt>{"Комментарий"}</dt>
                    <dd>{order.base.comment.clone().unwrap_or_else(|| "—".to_string())}</dd>
                </dl>
            </div>

            <div class="info-block" style="min-width: 280px;">
                <h3>{"Суммы"}</h3>
                <dl>
                    <dt>{"Товары"}</dt>
                    <dd>{format_money(order.items_total)}</dd>
                    <dt>{"Доставка"}</dt>
                    <dd>{format_money(order.shipping_fee)}</dd>
                    <dt>{"Итого"}</dt>
                    <dd style="font-weight: bold;">{format_money(order.grand_total)}</dd>
                </dl>
            </div>

            <div class="info-block" style="min-width: 280px;">
                <h3>{"Покупатель"}</h3>
                {move || match consumer.get() {
                    None => view! { <div class="placeholder">{"Загрузка..."}</div> }.into_any(),
                    Some(c) => view! {
                        <dl>
                            <dt>{"Имя"}</dt>
                            <dd>{c.base.description.clone()}</dd>
                            <dt>{"Email"}</dt>
                            <dd>{c.email.clone()}</dd>
                            <dt>{"Телефон"}</dt>
                            <dd>{c.phone.clone().unwrap_or_else(|| "—".to_string())}</dd>
                            <dt>{"Заказов"}</dt>
                            <dd>{c.order_count}</dd>
                        </dl>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
