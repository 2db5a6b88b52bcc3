use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор варианта товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantId(pub Uuid);

impl VariantId {
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

impl AggregateId for VariantId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VariantId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Вложенные структуры
// ============================================================================

/// Остатки по варианту
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Доступное количество
    pub count: i32,
    /// Страховой запас, ниже которого вариант считается заканчивающимся
    #[serde(rename = "safetyStock")]
    pub safety_stock: i32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            count: 0,
            safety_stock: 0,
        }
    }
}

/// Тип медиа-вложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Медиа-вложение варианта (изображение или видео)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub url: String,
    pub kind: MediaKind,
    /// Порядок отображения в галерее
    pub position: i32,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Вариант товара — покупаемая конфигурация (цена/остатки/медиа)
///
/// `base.code` — SKU варианта.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    #[serde(flatten)]
    pub base: BaseAggregate<VariantId>,

    /// ID товара-владельца (ссылка на a002_product)
    #[serde(rename = "productRef")]
    pub product_ref: String,

    /// Название опции ("Красный / XL")
    #[serde(rename = "optionName")]
    pub option_name: String,

    /// Надбавка к базовой цене товара
    #[serde(rename = "priceDelta")]
    pub price_delta: f64,

    /// Остатки
    pub inventory: Inventory,

    /// Галерея медиа
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Variant {
    /// Есть ли вариант в наличии
    pub fn in_stock(&self) -> bool {
        self.inventory.count > 0
    }
}

impl AggregateRoot for Variant {
    type Id = VariantId;

    fn id(&self) -> VariantId {
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
        "a003"
    }

    fn collection_name() -> &'static str {
        "variant"
    }

    fn element_name() -> &'static str {
        "Вариант"
    }

    fn list_name() -> &'static str {
        "Варианты"
    }
}

/// Распродан ли товар целиком: варианты загружены, и ни один не в наличии.
///
/// Значение производное и нигде не сохраняется — пересчитывается по
/// загруженным строкам.
pub fn all_sold_out(variants: &[Variant]) -> bool {
    !variants.is_empty() && variants.iter().all(|v| !v.in_stock())
}

// ============================================================================
// DTO
// ============================================================================

/// DTO для создания/обновления варианта через REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantDto {
    /// None при создании новой записи
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "productRef")]
    pub product_ref: String,
    #[serde(rename = "optionName")]
    pub option_name: String,
    #[serde(rename = "priceDelta")]
    pub price_delta: f64,
    pub inventory: Inventory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(count: i32) -> Variant {
        Variant {
            base: BaseAggregate::new(
                VariantId::new_v4(),
                "SKU-1".to_string(),
                "Вариант".to_string(),
            ),
            product_ref: "p1".to_string(),
            option_name: "Красный / XL".to_string(),
            price_delta: 0.0,
            inventory: Inventory {
                count,
                safety_stock: 0,
            },
            media: Vec::new(),
        }
    }

    #[test]
    fn sold_out_requires_loaded_variants() {
        // Нет загруженных вариантов — признак не вычисляется
        assert!(!all_sold_out(&[]));
    }

    #[test]
    fn sold_out_when_every_variant_is_empty() {
        assert!(all_sold_out(&[variant(0), variant(0)]));
        assert!(!all_sold_out(&[variant(0), variant(3)]));
    }

    #[test]
    fn media_kind_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&MediaKind::Image).unwrap(),
            "\"image\""
        );
        let kind: MediaKind = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(kind, MediaKind::Video);
    }
}
