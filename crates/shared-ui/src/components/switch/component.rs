use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// Toggle switch; used for the dark-mode control.
#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "toggle-switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "toggle-switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}
