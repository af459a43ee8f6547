use crate::domain::a001_product::ui::grid::ProductGrid;
use crate::domain::a002_category::ui::selector::CategorySelector;
use crate::layout::global_context::use_storefront;
use leptos::prelude::*;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <section class="section section--tinted">
            <div class="container">
                <h3 class="section__title">"Категории товаров"</h3>
                <CategorySelector />
                <p class="section__hint">
                    {move || format!("Найдено товаров: {}", ctx.filtered_products.with(Vec::len))}
                </p>
                <ProductGrid />
            </div>
        </section>
    }
}
