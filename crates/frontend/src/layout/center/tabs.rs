//! Tab strip and tab pages of the central workspace.
//!
//! Страницы всех открытых вкладок остаются смонтированными (display:none у
//! неактивных) — состояние списков переживает переключение вкладок.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::render_tab_content;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabItem(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tab_for_active = tab.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(&tab_for_active.key));

    let tab_for_click = tab.clone();
    let on_click = move |_| tabs_store.activate_tab(&tab_for_click.key);

    let tab_for_close = tab.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&tab_for_close.key);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{move || {
                let key = tab.key.clone();
                tabs_store
                    .opened
                    .get()
                    .into_iter()
                    .find(|t| t.key == key)
                    .map(|t| t.title)
                    .unwrap_or_default()
            }}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Контент одной вкладки: создаётся при открытии, живёт до закрытия
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || tabs_store.active.get().as_deref() == Some(&tab_key_for_active_check);

    let content = render_tab_content(&tab.key, tabs_store);

    view! {
        <div
            class="tab-page"
            class:hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabItem tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! {
                            <TabPage tab=tab tabs_store=tabs_store />
                        }
                    }
                />
            </div>
        </div>
    }
}
