use crate::shared::api_utils::api_base;
use contracts::domain::a004_order::{Order, OrderStatus, StatusUpdateRequest};
use contracts::domain::a005_consumer::Consumer;
use gloo_net::http::Request;

/// Загрузить заказ по ID
pub async fn fetch_by_id(id: &str) -> Result<Order, String> {
    let url = format!("{}/api/orders/orderDetails/{}", api_base(), id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json::<Order>().await.map_err(|e| format!("{e}"))
}

/// Перевести заказ в новый статус
pub async fn update_status(id: &str, status: OrderStatus) -> Result<(), String> {
    let url = format!("{}/api/orders/{}/status", api_base(), id);
    let request = StatusUpdateRequest { status };
    let response = Request::put(&url)
        .json(&request)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Блок покупателя на карточке заказа
pub async fn fetch_consumer(id: &str) -> Result<Consumer, String> {
    let url = format!("{}/api/users/{}", api_base(), id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json::<Consumer>().await.map_err(|e| format!("{e}"))
}
