use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdStar;
use dioxus_free_icons::Icon;

/// Fill state of each star for a `value` out of `max`.
pub fn star_fill(value: u8, max: u8) -> Vec<bool> {
    (1..=max).map(|i| i <= value).collect()
}

/// Row of clickable stars. Read-only stars ignore clicks.
#[component]
pub fn StarRating(
    value: u8,
    #[props(default = 5)] max: u8,
    #[props(default = false)] readonly: bool,
    #[props(default)] on_change: EventHandler<u8>,
) -> Element {
    let stars = star_fill(value, max);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "star-rating",
            role: "radiogroup",
            "aria-label": "Rating",
            "data-readonly": if readonly { "true" } else { "false" },
            for (i, filled) in stars.into_iter().enumerate() {
                button {
                    key: "{i}",
                    class: "star",
                    r#type: "button",
                    role: "radio",
                    "aria-checked": if filled { "true" } else { "false" },
                    "aria-label": "{i + 1} of {max}",
                    "data-filled": if filled { "true" } else { "false" },
                    disabled: readonly,
                    onclick: move |_| {
                        if !readonly {
                            on_change.call(i as u8 + 1);
                        }
                    },
                    Icon::<LdStar> { icon: LdStar, width: 22, height: 22 }
                }
            }
        }
    }
}
