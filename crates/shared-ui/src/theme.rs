use dioxus::prelude::*;

const STORAGE_KEY: &str = "horizon-theme";
const LIGHT: &str = "horizon";
const DARK: &str = "horizon-dark";

/// `data-theme` value for the requested mode.
pub fn resolve(is_dark: bool) -> &'static str {
    if is_dark {
        DARK
    } else {
        LIGHT
    }
}

/// Whether a persisted `data-theme` value selects dark mode.
///
/// A missing entry, or one left behind by an older build, reads as light.
pub fn is_dark_theme(stored: Option<&str>) -> bool {
    stored.map(str::trim) == Some(DARK)
}

/// Dark-mode signal shared through context by the layouts.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn apply(&self) {
        set_theme(resolve(*self.is_dark.read()));
    }
}

/// Restores the persisted theme on startup and syncs [`ThemeState`] with
/// it, so the dark-mode switch matches the page after a reload.
/// Mount once near the root, below the `ThemeState` provider.
#[component]
pub fn ThemeSeed() -> Element {
    let mut theme: ThemeState = use_context();

    use_effect(move || {
        spawn(async move {
            let stored = document::eval(&format!(
                r#"
                var theme = null;
                try {{ theme = window.localStorage.getItem('{STORAGE_KEY}'); }} catch(e) {{}}
                document.documentElement.setAttribute(
                    'data-theme', theme === '{DARK}' ? '{DARK}' : '{LIGHT}');
                return theme;
                "#,
            ))
            .join::<Option<String>>()
            .await
            .unwrap_or(None);

            theme.is_dark.set(is_dark_theme(stored.as_deref()));
        });
    });

    rsx! {}
}

/// Apply `theme` to the document root and remember it.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.documentElement.setAttribute('data-theme', '{theme}');
            try {{ window.localStorage.setItem('{STORAGE_KEY}', '{theme}'); }} catch(e) {{}}
        }})();
        "#,
    ));
}
