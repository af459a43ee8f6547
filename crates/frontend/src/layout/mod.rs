pub mod footer;
pub mod global_context;
pub mod header;

use crate::domain::a003_cart::ui::drawer::CartDrawer;
use global_context::use_storefront;
use leptos::prelude::*;
use web_sys::window;

/// Каркас страницы.
///
/// ```text
/// +------------------------------------------+
/// |  Header (логотип, навигация, корзина)     |
/// +------------------------------------------+
/// |  Content (текущий раздел)                 |
/// +------------------------------------------+
/// |  Footer                                   |
/// +------------------------------------------+
///   CartDrawer поверх страницы
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_storefront();

    // Пока корзина открыта, страница под ней не прокручивается
    Effect::new(move |_| {
        let open = ctx.cart_open.get();
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("data-cart-open", if open { "true" } else { "false" });
        }
    });

    view! {
        <div class="app-layout">
            <header::Header />

            <main class="app-main">
                {move || content()}
            </main>

            <footer::Footer />

            <CartDrawer />
        </div>
    }
}
