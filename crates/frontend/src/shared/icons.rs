use leptos::prelude::*;

/// Иконка 20×20 по имени
pub fn icon(name: &str) -> AnyView {
    icon_sized(name, 20)
}

/// Иконка заданного размера. Неизвестное имя даёт пустую рамку того же
/// размера, чтобы не ломать вёрстку.
pub fn icon_sized(name: &str, size: u32) -> AnyView {
    let size = size.to_string();
    view! {
        <svg
            class="icon"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph(name)}
        </svg>
    }
    .into_any()
}

fn glyph(name: &str) -> Option<AnyView> {
    let view = match name {
        "store" => view! {
            <path d="m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"/>
            <path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"/>
            <path d="M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4"/>
            <path d="M2 7h20"/>
            <path d="M22 7v3a2 2 0 0 1-2 2a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 16 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 12 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 8 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 4 12a2 2 0 0 1-2-2V7"/>
        }.into_any(),
        "flame" => view! {
            <path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>
        }.into_any(),
        "package" => view! {
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
            <path d="M3.27 6.96 12 12l8.73-5.04"/>
            <path d="M12 22V12"/>
        }.into_any(),
        "zap" => view! {
            <path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z"/>
        }.into_any(),
        "circle" => view! {
            <circle cx="12" cy="12" r="10"/>
        }.into_any(),
        "droplets" => view! {
            <path d="M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z"/>
            <path d="M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97"/>
        }.into_any(),
        "shopping-cart" => view! {
            <circle cx="9" cy="21" r="1"/>
            <circle cx="20" cy="21" r="1"/>
            <path d="M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6"/>
        }.into_any(),
        "minus" => view! {
            <path d="M5 12h14"/>
        }.into_any(),
        "plus" => view! {
            <path d="M5 12h14"/>
            <path d="M12 5v14"/>
        }.into_any(),
        "trash" => view! {
            <path d="M3 6h18"/>
            <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/>
            <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>
            <path d="M10 11v6"/>
            <path d="M14 11v6"/>
        }.into_any(),
        "check" => view! {
            <path d="M20 6 9 17l-5-5"/>
        }.into_any(),
        "phone" => view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z"/>
        }.into_any(),
        "mail" => view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="m22 7-10 6L2 7"/>
        }.into_any(),
        "map-pin" => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/>
            <circle cx="12" cy="10" r="3"/>
        }.into_any(),
        "clock" => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 6v6l4 2"/>
        }.into_any(),
        "send" => view! {
            <path d="m22 2-7 20-4-9-9-4z"/>
            <path d="M22 2 11 13"/>
        }.into_any(),
        "instagram" => view! {
            <rect x="2" y="2" width="20" height="20" rx="5"/>
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>
            <path d="M17.5 6.5h.01"/>
        }.into_any(),
        "x" => view! {
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        }.into_any(),
        _ => return None,
    };
    Some(view)
}
