use dioxus::prelude::*;

/// Pulsing placeholder block shown while content loads.
#[component]
pub fn Skeleton(
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("aria-busy", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if let Some(text) = label {
                span { class: "skeleton-label", "{text}" }
            }
        }
    }
}
