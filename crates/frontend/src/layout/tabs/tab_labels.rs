//! Заголовки вкладок по ключу.
//!
//! Detail-вкладки обновляют заголовок сами после загрузки данных
//! (`update_tab_title`), здесь только стартовые подписи.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_category" => "Категории",
        "a002_product" => "Товары",
        "a004_order" => "Заказы",
        "a005_consumer" => "Покупатели",
        "a006_inquire" => "Вопросы покупателей",
        "a007_curation" => "Витрина",
        "a008_video" => "Видео",
        k if k.starts_with("a001_category_detail_") => "Категория",
        k if k.starts_with("a002_product_detail_") => "Товар",
        k if k.starts_with("a003_variant_detail_") => "Вариант",
        k if k.starts_with("a004_order_detail_") => "Заказ",
        k if k.starts_with("a009_template_detail_") => "Шаблон",
        _ => "Вкладка",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keys_have_labels() {
        assert_eq!(tab_label_for_key("a002_product"), "Товары");
        assert_eq!(tab_label_for_key("a007_curation"), "Витрина");
    }

    #[test]
    fn detail_keys_match_by_prefix() {
        assert_eq!(
            tab_label_for_key("a004_order_detail_0f8f1b32"),
            "Заказ"
        );
        assert_eq!(tab_label_for_key("a002_product_detail_new"), "Товар");
    }

    #[test]
    fn unknown_keys_fall_back() {
        assert_eq!(tab_label_for_key("nope"), "Вкладка");
    }
}
