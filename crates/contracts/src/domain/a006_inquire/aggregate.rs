use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор вопроса покупателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InquireId(pub Uuid);

impl InquireId {
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

impl AggregateId for InquireId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InquireId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Вопрос покупателя о товаре
///
/// Может быть «разрешён» привязкой к товару/варианту, о котором шла речь
/// (после этого вопрос показывается на карточке товара).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquire {
    #[serde(flatten)]
    pub base: BaseAggregate<InquireId>,

    /// ID автора (ссылка на a005_consumer)
    #[serde(rename = "authorRef")]
    pub author_ref: String,

    /// Имя автора на момент создания
    #[serde(rename = "authorName")]
    pub author_name: String,

    /// Текст вопроса
    pub body: String,

    #[serde(rename = "isAnswered")]
    pub is_answered: bool,

    /// Текст ответа оператора
    pub answer: Option<String>,

    #[serde(rename = "answeredAt")]
    pub answered_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Товар, к которому привязан вопрос (ссылка на a002_product)
    #[serde(rename = "productRef")]
    pub product_ref: Option<String>,

    /// Вариант, к которому привязан вопрос (ссылка на a003_variant)
    #[serde(rename = "variantRef")]
    pub variant_ref: Option<String>,
}

impl Inquire {
    /// Привязан ли вопрос к товару
    pub fn is_resolved(&self) -> bool {
        self.product_ref.is_some()
    }
}

impl AggregateRoot for Inquire {
    type Id = InquireId;

    fn id(&self) -> InquireId {
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
        "a006"
    }

    fn collection_name() -> &'static str {
        "inquire"
    }

    fn element_name() -> &'static str {
        "Вопрос покупателя"
    }

    fn list_name() -> &'static str {
        "Вопросы покупателей"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Ответ оператора на вопрос
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

/// Привязка вопроса к товару/варианту
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    #[serde(rename = "productRef")]
    pub product_ref: String,
    #[serde(rename = "variantRef")]
    pub variant_ref: Option<String>,
}
