use crate::domain::a002_category::ui::cards::CategoryCards;
use crate::layout::global_context::use_storefront;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::enums::section::Section;
use contracts::shared::config::StoreConfig;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_storefront();
    let config = use_context::<StoreConfig>().expect("StoreConfig context not found");
    let hero = config.hero;

    view! {
        <section class="hero">
            <div class="hero__glow"></div>
            <div class="container hero__content">
                <h2 class="hero__title">{hero.title}</h2>
                <p class="hero__lead">{hero.lead}</p>
                <ul class="hero__features">
                    {hero.features.into_iter().map(|feature| view! {
                        <li class="hero__feature">
                            <span class="hero__check">{icon("check")}</span>
                            <span>{feature}</span>
                        </li>
                    }).collect_view()}
                </ul>
                <Button on_click=Callback::new(move |_| ctx.navigate(Section::Catalog))>
                    "Перейти в каталог"
                </Button>
            </div>
        </section>

        <section class="section section--tinted">
            <div class="container">
                <h3 class="section__title">"Категории товаров"</h3>
                <CategoryCards />
            </div>
        </section>
    }
}
