use super::super::view_model::ProductDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::number_format::format_money;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Варианты товара: таблица с переходом в карточку варианта
#[component]
pub fn VariantsTab(vm: ProductDetailsVm) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let variants = vm.variants;

    let open_variant = move |id: String| {
        let key = format!("a003_variant_detail_{}", id);
        tabs_store.open_tab(&key, "Вариант");
    };

    view! {
        <div style="padding: var(--spacing-md);">
            {move || {
                let list = variants.get();
                if list.is_empty() {
                    view! { <div class="placeholder">{"У товара пока нет вариантов"}</div> }.into_any()
                } else {
                    view! {
                        <div class="table-container">
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"SKU"}</th>
                                        <th>{"Опция"}</th>
                                        <th>{"Надбавка к цене"}</th>
                                        <th>{"Остаток"}</th>
                                        <th>{"Медиа"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list.into_iter().map(|variant| {
                                        let id = variant.base.id.as_string();
                                        let in_stock = variant.in_stock();
                                        view! {
                                            <tr on:click=move |_| open_variant(id.clone())>
                                                <td>{variant.base.code.clone()}</td>
                                                <td>{variant.option_name.clone()}</td>
                                                <td style="text-align: right;">{format_money(variant.price_delta)}</td>
                                                <td style="text-align: right;">
                                                    {if in_stock {
                                                        view! { <span>{variant.inventory.count}</span> }.into_any()
                                                    } else {
                                                        view! { <span style="color: red;">{"нет"}</span> }.into_any()
                                                    }}
                                                </td>
                                                <td style="text-align: right;">{variant.media.len()}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
