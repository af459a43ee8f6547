use crate::shared::icons::icon;
use contracts::shared::config::StoreConfig;
use leptos::prelude::*;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig context not found");
    let contacts = config.contacts;

    view! {
        <section class="section">
            <div class="container container--narrow">
                <h3 class="section__title">"Контакты"</h3>
                <div class="contacts-grid">
                    <div class="contacts-card">
                        <h4 class="contacts-card__title">"Связаться с нами"</h4>
                        <a class="contacts-card__row" href=contacts.tel_href()>
                            {icon("phone")}
                            <span>{contacts.phone.clone()}</span>
                        </a>
                        <a class="contacts-card__row" href=contacts.mailto_href()>
                            {icon("mail")}
                            <span>{contacts.email.clone()}</span>
                        </a>
                        <div class="contacts-card__row">
                            {icon("map-pin")}
                            <span>{contacts.address.clone()}</span>
                        </div>
                    </div>

                    <div class="contacts-card">
                        <h4 class="contacts-card__title">"Режим работы"</h4>
                        {config.hours.into_iter().map(|line| view! {
                            <div class="contacts-card__row">
                                {icon("clock")}
                                <span>{format!("{}: {}", line.days, line.time)}</span>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="contacts-card">
                        <h4 class="contacts-card__title">"Мы в сети"</h4>
                        {config.links.into_iter().map(|link| view! {
                            <a
                                class="contacts-card__row"
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {icon(&link.icon)}
                                <span>{link.label}</span>
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
