use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор видео
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(pub Uuid);

impl VideoId {
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

impl AggregateId for VideoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VideoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Видео-контент витрины
///
/// `base.description` — заголовок видео.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(flatten)]
    pub base: BaseAggregate<VideoId>,

    /// Ссылка на видео (внешний хостинг)
    pub url: String,

    /// Товар, к которому относится ролик (ссылка на a002_product)
    #[serde(rename = "productRef")]
    pub product_ref: Option<String>,

    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

impl AggregateRoot for Video {
    type Id = VideoId;

    fn id(&self) -> VideoId {
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
        "a008"
    }

    fn collection_name() -> &'static str {
        "video"
    }

    fn element_name() -> &'static str {
        "Видео"
    }

    fn list_name() -> &'static str {
        "Видео"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO для создания/обновления видео
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDto {
    pub id: Option<String>,
    pub description: String,
    pub url: String,
    #[serde(rename = "productRef")]
    pub product_ref: Option<String>,
    #[serde(rename = "isPublished")]
    pub is_published: bool,
}
