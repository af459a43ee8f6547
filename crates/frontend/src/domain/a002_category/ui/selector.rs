use crate::layout::global_context::use_storefront;
use crate::shared::icons::icon_sized;
use contracts::domain::a001_product::catalog::categories;
use leptos::prelude::*;

/// Кнопки фильтра над сеткой товаров
#[component]
pub fn CategorySelector() -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <div class="category-selector" role="tablist">
            {categories().iter().map(|category| {
                let filter = category.filter;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class="button category-selector__item"
                        class:is-active=move || ctx.is_active_category(filter)
                        aria-selected=move || ctx.is_active_category(filter).to_string()
                        on:click=move |_| ctx.select_category(filter)
                    >
                        {icon_sized(&category.icon, 18)}
                        <span>{category.label.clone()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
