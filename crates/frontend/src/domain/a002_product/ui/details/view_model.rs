use super::model::{self, ProductFormDto};
use contracts::domain::a003_variant::Variant;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel для карточки товара
#[derive(Clone)]
pub struct ProductDetailsVm {
    pub form: RwSignal<ProductFormDto>,
    pub error: RwSignal<Option<String>>,
    pub variants: RwSignal<Vec<Variant>>,
    pub categories: RwSignal<Vec<(String, String)>>,
}

impl ProductDetailsVm {
    pub fn new(id: Option<String>) -> Self {
        let vm = Self {
            form: RwSignal::new(ProductFormDto::default()),
            error: RwSignal::new(None),
            variants: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
        };

        if let Some(id) = id {
            vm.load(id);
        }
        vm.load_categories();

        vm
    }

    /// Режим редактирования (есть ID)
    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    /// Валидация формы
    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    fn validate_form(dto: &ProductFormDto) -> Result<(), &'static str> {
        if dto.name.trim().is_empty() {
            return Err("Название обязательно для заполнения");
        }
        if dto.price < 0.0 {
            return Err("Цена не может быть отрицательной");
        }
        if let Some(sale) = dto.sale_price {
            if sale < 0.0 {
                return Err("Цена со скидкой не может быть отрицательной");
            }
            if sale > dto.price {
                return Err("Цена со скидкой не может превышать базовую");
            }
        }
        Ok(())
    }

    /// Загрузить данные с сервера
    pub fn load(&self, id: String) {
        let form = self.form;
        let error = self.error;
        let variants = self.variants;

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(product) => {
                    form.set(ProductFormDto::from(product));

                    // Варианты подгружаются после карточки
                    match model::fetch_variants(&id).await {
                        Ok(list) => variants.set(list),
                        Err(e) => error.set(Some(format!("Ошибка загрузки вариантов: {}", e))),
                    }
                }
                Err(e) => {
                    error.set(Some(format!("Ошибка загрузки: {}", e)));
                }
            }
        });
    }

    fn load_categories(&self) {
        let categories = self.categories;
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_category_options().await {
                Ok(options) => categories.set(options),
                Err(e) => error.set(Some(format!("Ошибка загрузки категорий: {}", e))),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_requires_name_and_sane_prices() {
        let mut dto = ProductFormDto {
            name: "Кроссовки".to_string(),
            price: 100.0,
            ..ProductFormDto::default()
        };
        assert!(ProductDetailsVm::validate_form(&dto).is_ok());

        dto.name = "  ".to_string();
        assert!(ProductDetailsVm::validate_form(&dto).is_err());

        dto.name = "Кроссовки".to_string();
        dto.sale_price = Some(150.0);
        assert!(ProductDetailsVm::validate_form(&dto).is_err());

        dto.sale_price = Some(80.0);
        assert!(ProductDetailsVm::validate_form(&dto).is_ok());
    }
}
