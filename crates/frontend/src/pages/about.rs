use contracts::shared::config::StoreConfig;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig context not found");
    let about = config.about;

    view! {
        <section class="section">
            <div class="container container--narrow">
                <h3 class="section__title">{about.title}</h3>
                {about.paragraphs.into_iter().map(|text| view! {
                    <p class="section__text">{text}</p>
                }).collect_view()}
            </div>
        </section>
    }
}
