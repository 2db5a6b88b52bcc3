use crate::shared::api_utils::api_base;
use contracts::domain::a009_template::{Template, TemplateDto};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

/// Загрузить шаблон по ID или известному коду ("main")
pub async fn fetch_by_id(id: &str) -> Result<Template, String> {
    let url = format!("{}/api/templates/{}", api_base(), id);
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

    response
        .json::<Template>()
        .await
        .map_err(|e| format!("{e}"))
}

/// Сохранить шаблон
pub async fn save_form(dto: &TemplateDto) -> Result<(), String> {
    let url = format!("{}/api/templates", api_base());
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

/// DTO для работы с формой (используется в ViewModel)
#[derive(Clone, Debug, Default)]
pub struct TemplateFormDto {
    pub id: Option<String>,
    pub name: String,
    pub layout_kind: String,
    /// Секции как текст — правится в textarea, парсится при сохранении
    pub sections_raw: String,
    pub is_published: bool,
}

impl From<Template> for TemplateFormDto {
    fn from(t: Template) -> Self {
        Self {
            id: Some(t.base.id.as_string()),
            name: t.base.description,
            layout_kind: t.layout_kind,
            sections_raw: serde_json::to_string_pretty(&t.sections).unwrap_or_default(),
            is_published: t.is_published,
        }
    }
}
