use super::model::{self, TemplateFormDto};
use contracts::domain::a009_template::{Template, TemplateDto};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel для редактора шаблона витрины
#[derive(Clone)]
pub struct TemplateDetailsVm {
    pub form: RwSignal<TemplateFormDto>,
    pub error: RwSignal<Option<String>>,
}

impl TemplateDetailsVm {
    pub fn new(id: String) -> Self {
        let vm = Self {
            form: RwSignal::new(TemplateFormDto::default()),
            error: RwSignal::new(None),
        };
        vm.load(id);
        vm
    }

    /// Загрузить данные с сервера
    pub fn load(&self, id: String) {
        let form = self.form;
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(template) => form.set(TemplateFormDto::from(template)),
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    /// Проверить форму и собрать DTO.
    ///
    /// Секции редактируются как текст, поэтому разбор JSON — часть валидации.
    fn build_dto(form: &TemplateFormDto) -> Result<TemplateDto, String> {
        if form.name.trim().is_empty() {
            return Err("Название обязательно для заполнения".to_string());
        }
        let sections =
            Template::parse_sections(&form.sections_raw).map_err(|e| format!("Секции: {e}"))?;
        Ok(TemplateDto {
            id: form.id.clone(),
            description: form.name.clone(),
            comment: None,
            layout_kind: form.layout_kind.clone(),
            sections,
            is_published: form.is_published,
        })
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::build_dto(&self.form.get()).is_ok()
    }

    /// Сохранить данные на сервер
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        let dto = match Self::build_dto(&current) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let on_saved_cb = on_saved.clone();
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&dto).await {
                Ok(()) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_dto_validates_name_and_sections() {
        let mut form = TemplateFormDto {
            name: "Главная".to_string(),
            layout_kind: "main".to_string(),
            sections_raw: r#"[{"kind":"banner"}]"#.to_string(),
            ..TemplateFormDto::default()
        };
        assert!(TemplateDetailsVm::build_dto(&form).is_ok());

        form.sections_raw = "{}".to_string();
        assert!(TemplateDetailsVm::build_dto(&form).is_err());

        form.sections_raw = "broken".to_string();
        assert!(TemplateDetailsVm::build_dto(&form).is_err());

        form.sections_raw = "[]".to_string();
        form.name = " ".to_string();
        assert!(TemplateDetailsVm::build_dto(&form).is_err());
    }
}
