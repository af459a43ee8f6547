use super::line::CartLine;
use crate::layout::global_context::use_storefront;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::price_tag::PriceTag;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon_sized;
use contracts::domain::a003_cart::aggregate::CartItem;
use leptos::prelude::*;

/// Корзина в боковой панели
#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_storefront();

    // Оформление заказа не реализовано: кнопка только фиксирует намерение
    let on_checkout = Callback::new(move |_| {
        log::info!(
            "checkout requested: {} items, total {}",
            ctx.total_items.get_untracked(),
            ctx.total_price.get_untracked()
        );
    });

    view! {
        <Drawer
            title="Корзина"
            open=ctx.cart_open
            on_close=Callback::new(move |_| ctx.close_cart())
        >
            <Show
                when=move || ctx.cart.with(|cart| !cart.is_empty())
                fallback=|| view! {
                    <div class="cart-empty">
                        <span class="cart-empty__icon">{icon_sized("shopping-cart", 48)}</span>
                        <p>"Корзина пуста"</p>
                    </div>
                }
            >
                <div class="cart-lines">
                    <For
                        each=move || ctx.cart.with(|cart| cart.items().to_vec())
                        key=|item| item.id()
                        children=|item: CartItem| view! { <CartLine item=item /> }
                    />
                </div>
                <hr class="separator" />
                <div class="cart-summary">
                    <div class="cart-summary__total">
                        <span>"Итого:"</span>
                        <PriceTag amount=ctx.total_price class="cart-summary__value" />
                    </div>
                    <Button class="cart-summary__checkout" on_click=on_checkout>
                        "Оформить заказ"
                    </Button>
                </div>
            </Show>
        </Drawer>
    }
}
