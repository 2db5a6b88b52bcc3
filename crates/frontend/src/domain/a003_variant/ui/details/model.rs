use crate::shared::api_utils::api_base;
use contracts::domain::a003_variant::{Inventory, Media, MediaKind, Variant, VariantDto};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use serde::Serialize;

/// Загрузить вариант по ID
pub async fn fetch_by_id(id: &str) -> Result<Variant, String> {
    let url = format!("{}/api/variants/{}", api_base(), id);
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

    response.json::<Variant>().await.map_err(|e| format!("{e}"))
}

/// Сохранить вариант (цена/остатки/опция)
pub async fn save_form(dto: &VariantDto) -> Result<(), String> {
    let url = format!("{}/api/variants", api_base());
    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaAddRequest {
    pub url: String,
    pub kind: MediaKind,
    pub position: i32,
}

/// Добавить медиа к варианту
pub async fn add_media(variant_id: &str, request: &MediaAddRequest) -> Result<Media, String> {
    let url = format!("{}/api/variants/{}/media", api_base(), variant_id);
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json::<Media>().await.map_err(|e| format!("{e}"))
}

/// Удалить медиа варианта
pub async fn remove_media(variant_id: &str, media_id: &str) -> Result<(), String> {
    let url = format!("{}/api/variants/{}/media/{}", api_base(), variant_id, media_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// DTO для работы с формой (используется в ViewModel)
#[derive(Clone, Debug)]
pub struct VariantFormDto {
    pub id: Option<String>,
    pub sku: Option<String>,
    pub description: String,
    pub product_ref: String,
    pub option_name: String,
    pub price_delta: f64,
    pub inventory_count: i32,
    pub safety_stock: i32,
}

impl Default for VariantFormDto {
    fn default() -> Self {
        Self {
            id: None,
            sku: None,
            description: String::new(),
            product_ref: String::new(),
            option_name: String::new(),
            price_delta: 0.0,
            inventory_count: 0,
            safety_stock: 0,
        }
    }
}

impl From<Variant> for VariantFormDto {
    fn from(v: Variant) -> Self {
        Self {
            id: Some(v.base.id.as_string()),
            sku: Some(v.base.code),
            description: v.base.description,
            product_ref: v.product_ref,
            option_name: v.option_name,
            price_delta: v.price_delta,
            inventory_count: v.inventory.count,
            safety_stock: v.inventory.safety_stock,
        }
    }
}

impl From<VariantFormDto> for VariantDto {
    fn from(form: VariantFormDto) -> Self {
        Self {
            id: form.id,
            code: form.sku,
            description: form.description,
            comment: None,
            product_ref: form.product_ref,
            option_name: form.option_name,
            price_delta: form.price_delta,
            inventory: Inventory {
                count: form.inventory_count,
                safety_stock: form.safety_stock,
            },
        }
    }
}
