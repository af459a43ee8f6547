use crate::shared::icons::icon_sized;
use contracts::shared::config::StoreConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig context not found");
    let contacts = config.contacts;

    view! {
        <footer data-zone="footer" class="footer">
            <div class="container footer__grid">
                <div>
                    <div class="footer__brand">
                        {icon_sized("flame", 24)}
                        <span>{config.store.name}</span>
                    </div>
                    <p class="footer__note">{config.store.footer_note}</p>
                </div>

                <div>
                    <h4 class="footer__heading">"Контакты"</h4>
                    <a class="footer__row" href=contacts.tel_href()>
                        {icon_sized("phone", 16)}
                        <span>{contacts.phone.clone()}</span>
                    </a>
                    <a class="footer__row" href=contacts.mailto_href()>
                        {icon_sized("mail", 16)}
                        <span>{contacts.email.clone()}</span>
                    </a>
                    <div class="footer__row">
                        {icon_sized("map-pin", 16)}
                        <span>{contacts.address.clone()}</span>
                    </div>
                </div>

                <div>
                    <h4 class="footer__heading">"Режим работы"</h4>
                    {config.hours.into_iter().map(|line| view! {
                        <p class="footer__row">{format!("{}: {}", line.days, line.time)}</p>
                    }).collect_view()}
                    <div class="footer__links">
                        {config.links.into_iter().map(|link| view! {
                            <a
                                class="footer__link"
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                            >
                                {icon_sized(&link.icon, 18)}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <hr class="separator container" />

            <p class="footer__copyright">{config.store.copyright}</p>
        </footer>
    }
}
