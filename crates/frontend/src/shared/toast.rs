use leptos::prelude::*;

/// Сколько миллисекунд тост висит на экране
const TOAST_TIMEOUT_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Сервис для централизованного показа уведомлений
///
/// Ошибки API показываются одинаково плоско: короткое сообщение без
/// классификации и без повторов — пользователь сам решает, что делать.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Показать сообщение об успехе
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Показать сообщение об ошибке
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|items| {
            items.push(Toast { id, kind, message });
        });

        // Автоскрытие
        let toasts = self.toasts;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            toasts.update(|items| {
                items.retain(|t| t.id != id);
            });
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|items| {
            items.retain(|t| t.id != id);
        });
    }
}

/// Возвращает ToastService из контекста
pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Контейнер тостов — монтируется один раз в корне приложения
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();
    let toasts = service.toasts;

    view! {
        <div style="position: fixed; bottom: 16px; right: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px;">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let background = match toast.kind {
                        ToastKind::Success => "#2e7d32",
                        ToastKind::Error => "#c62828",
                    };
                    view! {
                        <div
                            style=format!(
                                "background: {}; color: white; padding: 10px 14px; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); cursor: pointer; max-width: 360px;",
                                background
                            )
                            on:click=move |_| service.dismiss(id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
