use dioxus::prelude::*;

/// Title row of a page with optional trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if let Some(sub) = subtitle {
                    p { class: "page-subtitle", "{sub}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
