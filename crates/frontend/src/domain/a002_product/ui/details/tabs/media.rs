use super::super::view_model::ProductDetailsVm;
use contracts::domain::a003_variant::MediaKind;
use leptos::prelude::*;

/// Галерея медиа по всем вариантам (read-only; правится в карточке варианта)
#[component]
pub fn MediaTab(vm: ProductDetailsVm) -> impl IntoView {
    let variants = vm.variants;

    view! {
        <div style="padding: var(--spacing-md);">
            {move || {
                let mut media: Vec<_> = variants
                    .get()
                    .into_iter()
                    .flat_map(|v| {
                        let option_name = v.option_name.clone();
                        v.media
                            .into_iter()
                            .map(move |m| (option_name.clone(), m))
                            .collect::<Vec<_>>()
                    })
                    .collect();
                media.sort_by_key(|(_, m)| m.position);

                if media.is_empty() {
                    view! { <div class="placeholder">{"Медиа не загружены"}</div> }.into_any()
                } else {
                    view! {
                        <div style="display: flex; flex-wrap: wrap; gap: 12px;">
                            {media.into_iter().map(|(option_name, m)| {
                                view! {
                                    <div class="media-card" style="width: 160px; border: 1px solid #ddd; border-radius: 4px; padding: 8px;">
                                        {match m.kind {
                                            MediaKind::Image => view! {
                                                <img src={m.url.clone()} style="width: 100%; height: 120px; object-fit: cover;" />
                                            }.into_any(),
                                            MediaKind::Video => view! {
                                                <div style="width: 100%; height: 120px; display: flex; align-items: center; justify-content: center; background: #000; color: #fff;">
                                                    {"▶ видео"}
                                                </div>
                                            }.into_any(),
                                        }}
                                        <div style="font-size: 12px; color: #666; margin-top: 4px;">{option_name}</div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
