use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога
///
/// `base.description` — название товара, `base.code` — артикул.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// ID категории (ссылка на a001_category)
    #[serde(rename = "categoryRef")]
    pub category_ref: Option<String>,

    /// Бренд товара
    pub brand: Option<String>,

    /// Базовая цена
    pub price: f64,

    /// Цена со скидкой (если идёт акция)
    #[serde(rename = "salePrice")]
    pub sale_price: Option<f64>,

    /// Опубликован ли товар на витрине
    #[serde(rename = "isPublished")]
    pub is_published: bool,

    /// URL миниатюры
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,

    /// Дата публикации на витрине
    #[serde(rename = "releasedAt")]
    pub released_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Product {
    /// Актуальная цена с учётом скидки
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO для создания/обновления товара через REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    /// None при создании новой записи
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "categoryRef")]
    pub category_ref: Option<String>,
    pub brand: Option<String>,
    pub price: f64,
    #[serde(rename = "salePrice")]
    pub sale_price: Option<f64>,
    #[serde(rename = "isPublished")]
    pub is_published: bool,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
}

/// Запрос массовой публикации/снятия с публикации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPublishRequest {
    pub ids: Vec<String>,
    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_prefers_sale() {
        let mut product = Product {
            base: BaseAggregate::new(
                ProductId::new_v4(),
                "PRD-001".to_string(),
                "Кроссовки".to_string(),
            ),
            category_ref: None,
            brand: None,
            price: 100.0,
            sale_price: Some(80.0),
            is_published: true,
            thumbnail_url: None,
            released_at: None,
        };
        assert_eq!(product.effective_price(), 80.0);

        product.sale_price = None;
        assert_eq!(product.effective_price(), 100.0);
    }
}
