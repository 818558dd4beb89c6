use dioxus::prelude::*;

/// Vertical list of label/value rows.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One label/value row inside a `DetailList`.
///
/// Plain text goes in `value`; rich content (badges, coloured text) goes in
/// children, which take precedence.
#[component]
pub fn DetailItem(
    label: String,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    "{value}"
                }
            }
        }
    }
}

/// Titled block within a detail view.
#[component]
pub fn DetailSection(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "detail-section",
            h4 { class: "detail-section-title", "{title}" }
            {children}
        }
    }
}
