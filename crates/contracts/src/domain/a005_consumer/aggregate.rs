use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор покупателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsumerId(pub Uuid);

impl ConsumerId {
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

impl AggregateId for ConsumerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ConsumerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Покупатель (конечный клиент магазина)
///
/// `base.description` — отображаемое имя.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumer {
    #[serde(flatten)]
    pub base: BaseAggregate<ConsumerId>,

    pub email: String,

    pub phone: Option<String>,

    /// Активна ли учётная запись
    #[serde(rename = "isActive")]
    pub is_active: bool,

    /// Дата регистрации
    #[serde(rename = "signedUpAt")]
    pub signed_up_at: chrono::DateTime<chrono::Utc>,

    /// Количество заказов (считает бэкенд)
    #[serde(rename = "orderCount")]
    pub order_count: i32,
}

impl AggregateRoot for Consumer {
    type Id = ConsumerId;

    fn id(&self) -> ConsumerId {
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
        "a005"
    }

    fn collection_name() -> &'static str {
        "consumer"
    }

    fn element_name() -> &'static str {
        "Покупатель"
    }

    fn list_name() -> &'static str {
        "Покупатели"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Массовая смена статуса учётных записей — один сетевой вызов,
/// батчинг на стороне сервера.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusRequest {
    pub ids: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
