use dioxus::prelude::*;
use shared_types::{area_url, embed_url, AppConfig, GeoState, GeocodeClient, ResolveGeneration};
use shared_ui::Skeleton;

/// Map for a free-text address.
///
/// Every address change starts a new lookup; a result only applies if no
/// newer lookup started in the meantime.
#[component]
pub fn MapWidget(address: String, #[props(default)] compact: bool) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<GeocodeClient>();
    let mut state = use_signal(|| GeoState::Loading);
    let mut generation = use_signal(ResolveGeneration::default);

    use_effect(use_reactive((&address,), move |(address,)| {
        let ticket = generation.with_mut(|g| g.next());
        state.set(GeoState::Loading);
        let client = client.clone();
        spawn(async move {
            let resolved = client.resolve(&address).await;
            if generation.peek().is_current(ticket) {
                state.set(resolved);
            } else {
                tracing::debug!(address = %address, "Discarding superseded geocoding result");
            }
        });
    }));

    let zoom = config.map.zoom;
    let size = if compact { "compact" } else { "full" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./map_widget.css") }
        figure { class: "map-widget", "data-size": size,
            match state() {
                GeoState::Loading => rsx! {
                    div { class: "map-frame map-loading",
                        iframe {
                            src: area_url(config.map.default_center(), zoom),
                            title: "Map loading",
                            tabindex: -1,
                            "aria-hidden": "true",
                        }
                        Skeleton { class: "map-overlay", label: "Loading map...".to_string() }
                    }
                },
                GeoState::Error(message) => rsx! {
                    div { class: "map-frame map-error", role: "alert", "{message}" }
                },
                GeoState::Ready(point) => rsx! {
                    div { class: "map-frame",
                        iframe {
                            src: embed_url(point, zoom),
                            title: "Map of {address}",
                            loading: "lazy",
                        }
                    }
                    figcaption { class: "map-caption", "{address}" }
                },
            }
        }
    }
}
