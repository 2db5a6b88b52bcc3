use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор слота витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurationSlotId(pub Uuid);

impl CurationSlotId {
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

impl AggregateId for CurationSlotId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CurationSlotId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Слот витрины — место опубликованного товара в клиентской выдаче
///
/// Витрина (curation) — это подмножество опубликованных товаров,
/// упорядоченное руками контент-менеджера.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationSlot {
    #[serde(flatten)]
    pub base: BaseAggregate<CurationSlotId>,

    /// ID товара (ссылка на a002_product)
    #[serde(rename = "productRef")]
    pub product_ref: String,

    /// Название товара на момент курирования (денормализация бэкенда)
    #[serde(rename = "productName")]
    pub product_name: String,

    /// Заголовок, показываемый на витрине вместо названия товара
    pub headline: Option<String>,

    /// Позиция в выдаче (0 — первый)
    pub position: i32,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl AggregateRoot for CurationSlot {
    type Id = CurationSlotId;

    fn id(&self) -> CurationSlotId {
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
        "a007"
    }

    fn collection_name() -> &'static str {
        "curation"
    }

    fn element_name() -> &'static str {
        "Слот витрины"
    }

    fn list_name() -> &'static str {
        "Витрина"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO для создания/обновления слота
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationSlotDto {
    pub id: Option<String>,
    #[serde(rename = "productRef")]
    pub product_ref: String,
    pub headline: Option<String>,
    pub position: i32,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Массовое включение/выключение слотов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkActiveRequest {
    pub ids: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
