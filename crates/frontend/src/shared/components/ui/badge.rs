use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "accent", "muted", "neutral" (default)
    #[prop(optional)]
    variant: Option<&'static str>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    let variant_class = match variant.unwrap_or("neutral") {
        "accent" => "badge--accent",
        "muted" => "badge--muted",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {} {}", variant_class, class.unwrap_or_default())>
            {children()}
        </span>
    }
}
