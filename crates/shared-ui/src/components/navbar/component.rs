use dioxus::prelude::*;

/// Top bar of the content area.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar", {children} }
    }
}

#[component]
pub fn NavbarTitle(children: Element) -> Element {
    rsx! {
        span { class: "navbar-title", {children} }
    }
}

/// Pushes following navbar items to the right edge.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
