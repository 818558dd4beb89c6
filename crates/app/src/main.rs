use dioxus::prelude::*;
use shared_types::GeocodeClient;
use shared_ui::theme::{ThemeSeed, ThemeState};
use shared_ui::ToastProvider;

mod backend;
mod components;
mod config;
mod format_helpers;
mod routes;
mod upload;

use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_HORIZON: Asset = asset!("/assets/themes/horizon.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::load_config();

    use_context_provider(|| config.clone());
    use_context_provider(|| GeocodeClient::new(&config.geocoding));
    use_context_provider(backend::Backend::logging);
    use_context_provider(|| ThemeState {
        is_dark: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_HORIZON }
        ThemeSeed {}
        ToastProvider {
            Router::<Route> {}
        }
    }
}
