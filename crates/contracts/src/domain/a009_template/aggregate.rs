use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор шаблона витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

impl TemplateId {
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

impl AggregateId for TemplateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TemplateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Шаблон страницы витрины
///
/// `sections` — JSON-описание блоков страницы; его структурой владеет
/// витринный рендерер, бэк-офис хранит и редактирует его как есть.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    #[serde(flatten)]
    pub base: BaseAggregate<TemplateId>,

    /// Тип раскладки ("main", "event", "collection")
    #[serde(rename = "layoutKind")]
    pub layout_kind: String,

    /// Блоки страницы как есть
    pub sections: serde_json::Value,

    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

impl Template {
    /// Разобрать отредактированный в UI текст секций.
    ///
    /// Секции должны быть JSON-массивом блоков.
    pub fn parse_sections(raw: &str) -> anyhow::Result<serde_json::Value> {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("sections is not valid JSON")?;
        anyhow::ensure!(value.is_array(), "sections must be a JSON array");
        Ok(value)
    }
}

impl AggregateRoot for Template {
    type Id = TemplateId;

    fn id(&self) -> TemplateId {
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
        "a009"
    }

    fn collection_name() -> &'static str {
        "template"
    }

    fn element_name() -> &'static str {
        "Шаблон"
    }

    fn list_name() -> &'static str {
        "Шаблоны"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO для сохранения шаблона
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDto {
    pub id: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "layoutKind")]
    pub layout_kind: String,
    pub sections: serde_json::Value,
    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sections_accepts_array() {
        let value = Template::parse_sections(r#"[{"kind":"banner","mediaRef":"m1"}]"#).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn parse_sections_rejects_non_array() {
        assert!(Template::parse_sections(r#"{"kind":"banner"}"#).is_err());
        assert!(Template::parse_sections("not json").is_err());
    }
}
