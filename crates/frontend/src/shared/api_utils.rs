//! Построение URL для запросов к REST API бэк-офиса.

/// База API: протокол и хост берутся из адресной строки, порт бэкенда — 3000.
///
/// "http://localhost:3000", "https://shop.example.com:3000" и т.п.
/// Пустая строка, если window недоступен (SSR/тесты).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}
