use crate::layout::global_context::use_storefront;
use crate::shared::components::price_tag::PriceTag;
use crate::shared::icons::icon_sized;
use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a003_cart::aggregate::CartItem;
use leptos::prelude::*;

/// Строка корзины: товар, цена, −/количество/+ и удаление.
///
/// Количество читается из корзины по `id`, поэтому строка не пересоздаётся
/// при каждом нажатии «+».
#[component]
pub fn CartLine(item: CartItem) -> impl IntoView {
    let ctx = use_storefront();
    let id: ProductId = item.id();
    let quantity = Memo::new(move |_| {
        ctx.cart
            .with(|cart| cart.get(id).map(|i| i.quantity).unwrap_or_default())
    });

    view! {
        <div class="cart-line">
            <img class="cart-line__image" src=item.product.image.clone() alt=item.product.name.clone() />
            <div class="cart-line__body">
                <h4 class="cart-line__title">{item.product.name.clone()}</h4>
                <PriceTag amount=u64::from(item.price().amount()) class="cart-line__price" />
                <div class="cart-line__controls">
                    <button
                        class="button button--outline button--icon-sm"
                        aria-label="Уменьшить"
                        on:click=move |_| ctx.update_quantity(id, quantity.get_untracked().saturating_sub(1))
                    >
                        {icon_sized("minus", 14)}
                    </button>
                    <span class="cart-line__quantity">{move || quantity.get()}</span>
                    <button
                        class="button button--outline button--icon-sm"
                        aria-label="Увеличить"
                        on:click=move |_| ctx.update_quantity(id, quantity.get_untracked() + 1)
                    >
                        {icon_sized("plus", 14)}
                    </button>
                    <button
                        class="button button--ghost button--icon-sm cart-line__remove"
                        aria-label="Удалить"
                        on:click=move |_| ctx.remove_from_cart(id)
                    >
                        {icon_sized("trash", 14)}
                    </button>
                </div>
            </div>
        </div>
    }
}
