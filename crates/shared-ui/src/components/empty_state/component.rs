use dioxus::prelude::*;

/// Muted placeholder shown where a list has nothing to display.
#[component]
pub fn EmptyState(message: String, #[props(default)] children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            p { class: "empty-state-message", "{message}" }
            {children}
        }
    }
}
