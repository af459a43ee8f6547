//! Цена товара или суммы корзины
//!
//! ```text
//! <PriceTag amount=u64::from(product.price.amount()) />
//! <PriceTag amount=ctx.total_price class="cart-total__value" />
//! ```

use contracts::shared::format::format_amount;
use leptos::prelude::*;

/// Форматирует сумму в рублях с разделителем тысяч (`15 900 ₽`)
#[component]
pub fn PriceTag(
    /// Сумма в рублях
    #[prop(into)]
    amount: Signal<u64>,
    /// Дополнительные CSS-классы
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span class=format!("price {}", class.unwrap_or_default())>
            {move || format_amount(amount.get())}
        </span>
    }
}
