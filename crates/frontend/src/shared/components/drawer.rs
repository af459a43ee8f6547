use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Боковая панель поверх страницы.
///
/// Смонтирована всегда, видимость управляется классом `is-open`, поэтому
/// обработчик Escape регистрируется один раз на всё время жизни страницы.
#[component]
pub fn Drawer(
    /// Заголовок панели
    title: &'static str,
    /// Открыта ли панель
    #[prop(into)]
    open: Signal<bool>,
    /// Callback when drawer should close
    on_close: Callback<()>,
    /// Содержимое панели
    children: ChildrenFn,
) -> impl IntoView {
    let _escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });

    // Prevent click propagation from drawer content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="drawer-overlay"
            class:is-open=move || open.get()
            on:click=move |_| on_close.run(())
        >
            <aside
                class="drawer"
                class:is-open=move || open.get()
                role="dialog"
                aria-label=title
                on:click=stop_propagation
            >
                <div class="drawer__header">
                    <h2 class="drawer__title">{title}</h2>
                    <button
                        class="button button--ghost button--icon drawer__close"
                        aria-label="Закрыть"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="drawer__body">
                    {children()}
                </div>
            </aside>
        </div>
    }
}
