use crate::layout::global_context::use_storefront;
use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::catalog::CatalogPage;
use crate::pages::contacts::ContactsPage;
use crate::pages::home::HomePage;
use contracts::enums::section::Section;
use leptos::prelude::*;

/// Разделы переключаются сигналом, без URL: ссылки на разделы не нужны
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <Shell
            content=move || {
                match ctx.section.get() {
                    Section::Home => view! { <HomePage /> }.into_any(),
                    Section::Catalog => view! { <CatalogPage /> }.into_any(),
                    Section::About => view! { <AboutPage /> }.into_any(),
                    Section::Contacts => view! { <ContactsPage /> }.into_any(),
                }
            }
        />
    }
}
