use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTruck;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::routes::Route;

/// Static sign-in form. There is no authentication; submitting opens the
/// fleet dashboard.
#[component]
pub fn SignIn() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let nav = navigator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sign_in.css") }
        div { class: "sign-in",
            div { class: "sign-in-brand",
                Icon::<LdTruck> { icon: LdTruck, width: 32, height: 32 }
                span { "Horizon Deliveries" }
            }
            Card {
                CardHeader {
                    CardTitle { "Sign in" }
                    CardDescription { "Use your dispatcher account to manage today's deliveries." }
                }
                CardContent {
                    form {
                        class: "sign-in-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            tracing::info!(email = %email.peek(), "Sign-in submitted");
                            nav.push(Route::Marketplace {});
                        },
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "dispatch@example.com",
                            value: email(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button { variant: ButtonVariant::Primary, kind: "submit", "Sign in" }
                    }
                    p { class: "sign-in-alt",
                        "Delivering today? "
                        Link { to: Route::DriverDashboard {}, "Open the driver view" }
                    }
                }
            }
        }
    }
}
