use dioxus::prelude::*;

/// Colour tone for badges. Maps onto the status palette.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Outline,
}

impl BadgeTone {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
            BadgeTone::Outline => "outline",
        }
    }

    /// Tone for a status colour name (`green`, `yellow`, `red`).
    pub fn from_color(color: &str) -> Self {
        match color {
            "green" => BadgeTone::Success,
            "yellow" => BadgeTone::Warning,
            "red" => BadgeTone::Danger,
            _ => BadgeTone::Neutral,
        }
    }
}

/// Inline pill for statuses and short labels.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
