//! Общие типы витрины: каталог, корзина, разделы страницы, конфигурация.
//!
//! Крейт не зависит от браузера, поэтому вся бизнес-логика витрины
//! тестируется обычным `cargo test -p contracts`.

pub mod domain;
pub mod enums;
pub mod shared;
