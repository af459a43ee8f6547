use crate::layout::global_context::StorefrontContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::{load_config, StoreConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Статический контент витрины; при ошибке показываем минимальный набор
    let config = load_config().unwrap_or_else(|e| {
        log::error!("storefront config rejected, using defaults: {:#}", e);
        StoreConfig::default()
    });
    log::info!("storefront '{}' started", config.store.name);
    provide_context(config);

    // Корзина, выбранная категория и раздел живут в одном контексте
    provide_context(StorefrontContext::new());

    view! {
        <AppRoutes />
    }
}
