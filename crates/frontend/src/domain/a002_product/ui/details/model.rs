use crate::shared::api_utils::api_base;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::{Product, ProductDto};
use contracts::domain::a003_variant::Variant;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

/// Загрузить товар по ID
pub async fn fetch_by_id(id: &str) -> Result<Product, String> {
    let url = format!("{}/api/products/{}", api_base(), id);
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

    response.json::<Product>().await.map_err(|e| format!("{e}"))
}

/// Сохранить товар (создать или обновить)
pub async fn save_form(dto: &ProductDto) -> Result<(), String> {
    let url = format!("{}/api/products", api_base());
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

/// Варианты товара
pub async fn fetch_variants(product_id: &str) -> Result<Vec<Variant>, String> {
    let url = format!("{}/api/products/{}/variants", api_base(), product_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Variant>>()
        .await
        .map_err(|e| format!("{e}"))
}

/// Список (id, название) категорий для селекта
pub async fn fetch_category_options() -> Result<Vec<(String, String)>, String> {
    let url = format!("{}/api/categories", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let categories: Vec<Category> = response.json().await.map_err(|e| format!("{e}"))?;
    Ok(categories
        .into_iter()
        .map(|c| (c.base.id.as_string(), c.base.description))
        .collect())
}

/// DTO для работы с формой (используется в ViewModel)
#[derive(Clone, Debug)]
pub struct ProductFormDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub comment: String,
    pub category_ref: Option<String>,
    pub brand: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub is_published: bool,
    pub thumbnail_url: String,
}

impl Default for ProductFormDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            name: String::new(),
            comment: String::new(),
            category_ref: None,
            brand: String::new(),
            price: 0.0,
            sale_price: None,
            is_published: false,
            thumbnail_url: String::new(),
        }
    }
}

impl From<Product> for ProductFormDto {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.base.id.as_string()),
            code: Some(p.base.code),
            name: p.base.description,
            comment: p.base.comment.unwrap_or_default(),
            category_ref: p.category_ref,
            brand: p.brand.unwrap_or_default(),
            price: p.price,
            sale_price: p.sale_price,
            is_published: p.is_published,
            thumbnail_url: p.thumbnail_url.unwrap_or_default(),
        }
    }
}

impl From<ProductFormDto> for ProductDto {
    fn from(form: ProductFormDto) -> Self {
        Self {
            id: form.id,
            code: form.code,
            description: form.name,
            comment: if form.comment.trim().is_empty() {
                None
            } else {
                Some(form.comment)
            },
            category_ref: form.category_ref,
            brand: if form.brand.trim().is_empty() {
                None
            } else {
                Some(form.brand)
            },
            price: form.price,
            sale_price: form.sale_price,
            is_published: form.is_published,
            thumbnail_url: if form.thumbnail_url.trim().is_empty() {
                None
            } else {
                Some(form.thumbnail_url)
            },
        }
    }
}
