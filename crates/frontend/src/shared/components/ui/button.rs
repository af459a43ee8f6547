use leptos::prelude::*;

/// Button component with variants (primary, outline, ghost) and sizes (md, sm, icon)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", or "ghost"
    #[prop(optional)]
    variant: Option<&'static str>,
    /// Button size: "md" (default), "sm" or "icon"
    #[prop(optional)]
    size: Option<&'static str>,
    /// Additional CSS classes
    #[prop(optional)]
    class: Option<&'static str>,
    /// Accessible label for icon-only buttons
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = match variant.unwrap_or("primary") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let size_class = match size.unwrap_or("md") {
        "sm" => "button--sm",
        "icon" => "button--icon",
        _ => "",
    };

    view! {
        <button
            type="button"
            class=format!("button {} {} {}", variant_class, size_class, class.unwrap_or_default())
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
