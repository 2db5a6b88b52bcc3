use super::model::{self, MediaAddRequest, VariantFormDto};
use contracts::domain::a003_variant::{Media, MediaKind};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel для карточки варианта
#[derive(Clone)]
pub struct VariantDetailsVm {
    pub form: RwSignal<VariantFormDto>,
    pub media: RwSignal<Vec<Media>>,
    pub error: RwSignal<Option<String>>,
}

impl VariantDetailsVm {
    pub fn new(id: String) -> Self {
        let vm = Self {
            form: RwSignal::new(VariantFormDto::default()),
            media: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        };
        vm.load(id);
        vm
    }

    /// Валидация формы
    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    fn validate_form(dto: &VariantFormDto) -> Result<(), &'static str> {
        if dto.option_name.trim().is_empty() {
            return Err("Название опции обязательно для заполнения");
        }
        if dto.inventory_count < 0 {
            return Err("Остаток не может быть отрицательным");
        }
        if dto.safety_stock < 0 {
            return Err("Страховой запас не может быть отрицательным");
        }
        Ok(())
    }

    /// Загрузить данные с сервера
    pub fn load(&self, id: String) {
        let form = self.form;
        let media = self.media;
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(variant) => {
                    media.set(variant.media.clone());
                    form.set(VariantFormDto::from(variant));
                }
                Err(e) => {
                    error.set(Some(format!("Ошибка загрузки: {}", e)));
                }
            }
        });
    }

    /// Сохранить данные на сервер
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let dto = current.into();
        let on_saved_cb = on_saved.clone();
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&dto).await {
                Ok(()) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Добавить медиа (url + тип)
    pub fn add_media_command(&self, url: String, kind: MediaKind) {
        let variant_id = match self.form.get_untracked().id {
            Some(id) => id,
            None => return,
        };

        let position = self.media.with_untracked(|m| m.len() as i32);
        let media = self.media;
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            let request = MediaAddRequest {
                url,
                kind,
                position,
            };
            match model::add_media(&variant_id, &request).await {
                Ok(added) => media.update(|items| items.push(added)),
                Err(e) => error.set(Some(format!("Ошибка добавления медиа: {}", e))),
            }
        });
    }

    /// Удалить медиа
    pub fn remove_media_command(&self, media_id: String) {
        let variant_id = match self.form.get_untracked().id {
            Some(id) => id,
            None => return,
        };

        let media = self.media;
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::remove_media(&variant_id, &media_id).await {
                Ok(()) => media.update(|items| items.retain(|m| m.id != media_id)),
                Err(e) => error.set(Some(format!("Ошибка удаления медиа: {}", e))),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_enforces_numeric_minimums() {
        let mut dto = VariantFormDto {
            option_name: "Красный / XL".to_string(),
            ..VariantFormDto::default()
        };
        assert!(VariantDetailsVm::validate_form(&dto).is_ok());

        dto.inventory_count = -1;
        assert!(VariantDetailsVm::validate_form(&dto).is_err());

        dto.inventory_count = 10;
        dto.safety_stock = -5;
        assert!(VariantDetailsVm::validate_form(&dto).is_err());

        dto.safety_stock = 2;
        assert!(VariantDetailsVm::validate_form(&dto).is_ok());

        dto.option_name = String::new();
        assert!(VariantDetailsVm::validate_form(&dto).is_err());
    }
}
