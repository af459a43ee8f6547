use crate::layout::global_context::use_storefront;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon_sized;
use contracts::domain::a001_product::catalog::{categories, count_in};
use leptos::prelude::*;

/// Плитки категорий на главной. Клик открывает каталог с этим фильтром.
#[component]
pub fn CategoryCards() -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <div class="category-cards">
            {categories().iter().map(|category| {
                let filter = category.filter;
                let count = count_in(filter);
                view! {
                    <button
                        type="button"
                        class="category-card"
                        style=format!("--accent: {}", category.color)
                        on:click=move |_| ctx.open_category(filter)
                    >
                        <span class="category-card__icon">{icon_sized(&category.icon, 32)}</span>
                        <span class="category-card__label">{category.label.clone()}</span>
                        <Badge variant="muted">{format!("{} шт.", count)}</Badge>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
