use crate::shared::components::number_format::format_money;
use contracts::domain::a004_order::Order;
use leptos::prelude::*;

#[component]
pub fn LinesTab(order: Order) -> impl IntoView {
    let lines = order.lines;

    view! {
        <div style="padding: var(--spacing-md);">
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"№"}</th>
                            <th>{"Товар"}</th>
                            <th>{"Кол-во"}</th>
                            <th>{"Цена"}</th>
                            <th>{"Сумма"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {lines.into_iter().enumerate().map(|(i, line)| {
                            let line_total = line.line_total();
                            view! {
                                <tr>
                                    <td>{i + 1}</td>
                                    <td>{line.title.clone()}</td>
                                    <td style="text-align: right;">{line.qty}</td>
                                    <td style="text-align: right;">{format_money(line.unit_price)}</td>
                                    <td style="text-align: right;">{format_money(line_total)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
