use crate::layout::global_context::use_storefront;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::{icon, icon_sized};
use contracts::enums::section::Section;
use contracts::shared::config::StoreConfig;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_storefront();
    let config = use_context::<StoreConfig>().expect("StoreConfig context not found");

    view! {
        <header data-zone="header" class="header">
            <nav class="header__content container">
                <button class="header__brand" on:click=move |_| ctx.navigate(Section::Home)>
                    <span class="header__logo">{icon_sized("flame", 36)}</span>
                    <span class="header__titles">
                        <span class="header__title">{config.store.name.clone()}</span>
                        <span class="header__tagline">{config.store.tagline.clone()}</span>
                    </span>
                </button>

                <ul class="header__nav">
                    {Section::all().into_iter().map(|section| {
                        view! {
                            <li>
                                <a
                                    href="#"
                                    class="header__link"
                                    class:is-active=move || ctx.is_active_section(section)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(section);
                                    }
                                >
                                    {section.display_name()}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <div class="header__actions">
                    <Button
                        variant="outline"
                        size="icon"
                        class="header__cart"
                        aria_label="Корзина"
                        on_click=Callback::new(move |_| ctx.open_cart())
                    >
                        {icon("shopping-cart")}
                        <Show when=move || { ctx.total_items.get() > 0 }>
                            <Badge variant="accent" class="header__cart-badge">
                                {move || ctx.total_items.get()}
                            </Badge>
                        </Show>
                    </Button>
                </div>
            </nav>
        </header>
    }
}
