//! Контракты между фронтендом и REST API бэк-офиса.
//!
//! Типы в этом crate зеркалируют JSON-ресурсы, которыми владеет внешний
//! backend-сервис. Фронтенд не управляет их жизненным циклом — только
//! отображает полученные фрагменты и отправляет отредактированные обратно.

pub mod domain;
pub mod system;
