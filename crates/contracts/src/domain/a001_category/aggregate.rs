use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
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

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория каталога товаров
///
/// `base.description` — отображаемое название категории.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    /// ID родительской категории (None для корневых)
    #[serde(rename = "parentRef")]
    pub parent_ref: Option<String>,

    /// Глубина вложенности (0 для корневых)
    pub depth: i32,

    /// Порядок отображения среди соседей
    pub position: i32,

    /// Видна ли категория на витрине
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO для создания/обновления категории через REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    /// None при создании новой записи
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "parentRef")]
    pub parent_ref: Option<String>,
    pub position: i32,
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
}
