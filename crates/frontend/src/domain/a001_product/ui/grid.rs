use crate::layout::global_context::use_storefront;
use crate::shared::components::price_tag::PriceTag;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon_sized;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

/// Сетка товаров текущей категории
#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <div class="product-grid">
            <For
                each=move || ctx.filtered_products.get()
                key=|product| product.id
                children=move |product: Product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_storefront();
    let price = u64::from(product.price.amount());
    let description = product.description.clone();

    let on_add = {
        let product = product.clone();
        Callback::new(move |_| ctx.add_to_cart(&product))
    };

    view! {
        <article class="product-card" data-product-id=product.to_string_id()>
            <div class="product-card__media">
                <img
                    class="product-card__image"
                    src=product.image.clone()
                    alt=product.name.clone()
                    loading="lazy"
                />
                <div class="product-card__shade"></div>
            </div>
            <div class="product-card__body">
                <h3 class="product-card__title">{product.name.clone()}</h3>
                {description.map(|text| view! { <p class="product-card__description">{text}</p> })}
                <div class="product-card__footer">
                    <PriceTag amount=price class="product-card__price" />
                    <Button size="sm" on_click=on_add>
                        {icon_sized("shopping-cart", 16)}
                        "В корзину"
                    </Button>
                </div>
            </div>
        </article>
    }
}
