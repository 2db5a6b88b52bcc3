//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use crate::domain::a001_category::ui::details::CategoryDetail;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_variant::ui::details::VariantDetails;
use crate::domain::a004_order::ui::details::OrderDetails;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_consumer::ui::list::ConsumerList;
use crate::domain::a006_inquire::ui::list::InquireList;
use crate::domain::a007_curation::ui::list::CurationList;
use crate::domain::a008_video::ui::list::VideoList;
use crate::domain::a009_template::ui::details::TemplateDetail;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::RequireAdmin;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a002_product", "a004_order_detail_<id>")
/// * `tabs_store` - контекст для закрытия таба (используется в detail-views с on_close)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Каталог
        // ═══════════════════════════════════════════════════════════════════

        // a001: Categories
        "a001_category" => view! { <CategoryList /> }.into_any(),
        k if k.starts_with("a001_category_detail_") => {
            let id_str = k.strip_prefix("a001_category_detail_").unwrap();
            let id = if id_str == "new" {
                None
            } else {
                Some(id_str.to_string())
            };
            view! {
                <CategoryDetail
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // a002: Products
        "a002_product" => view! { <ProductList /> }.into_any(),
        k if k.starts_with("a002_product_detail_") => {
            let id_str = k.strip_prefix("a002_product_detail_").unwrap();
            let id = if id_str == "new" {
                None
            } else {
                Some(id_str.to_string())
            };
            view! {
                <ProductDetails
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // a003: Variants (открываются только из карточки товара)
        k if k.starts_with("a003_variant_detail_") => {
            let id = k.strip_prefix("a003_variant_detail_").unwrap().to_string();
            view! {
                <VariantDetails
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Продажи
        // ═══════════════════════════════════════════════════════════════════

        // a004: Orders
        "a004_order" => view! { <OrderList /> }.into_any(),
        k if k.starts_with("a004_order_detail_") => {
            let id = k.strip_prefix("a004_order_detail_").unwrap().to_string();
            view! {
                <OrderDetails
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // a006: Inquiries
        "a006_inquire" => view! { <InquireList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Контент
        // ═══════════════════════════════════════════════════════════════════

        // a007: Curation
        "a007_curation" => view! { <CurationList /> }.into_any(),

        // a008: Videos
        "a008_video" => view! { <VideoList /> }.into_any(),

        // a009: Templates
        k if k.starts_with("a009_template_detail_") => {
            let id = k.strip_prefix("a009_template_detail_").unwrap().to_string();
            view! {
                <TemplateDetail
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Администрирование
        // ═══════════════════════════════════════════════════════════════════

        // a005: Consumers (только для администраторов)
        "a005_consumer" => view! {
            <RequireAdmin>
                <ConsumerList />
            </RequireAdmin>
        }
        .into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
