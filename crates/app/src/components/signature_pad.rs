use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdEraser, LdPencil, LdSave};
use dioxus_free_icons::Icon;
use shared_types::{DeliverySession, Point};
use shared_ui::{Button, ButtonSize, ButtonVariant, EmptyState};

fn to_point(coords: dioxus::html::geometry::ElementPoint) -> Point {
    Point {
        x: coords.x,
        y: coords.y,
    }
}

/// Signature capture for one session.
///
/// `on_save` fires after the user asks to commit the drawing; the parent
/// owns the commit so it can report it to the backend.
#[component]
pub fn SignaturePadView(
    session: Signal<DeliverySession>,
    on_save: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    let snapshot = session.read();
    let read_only = snapshot.is_read_only();
    let signing = snapshot.is_signing();
    let committed = snapshot.signature().map(|s| s.data_url.clone());
    let download = snapshot.signature_download();
    let pad = snapshot.pad();
    let (width, height) = (pad.width(), pad.height());
    let paths: Vec<String> = pad
        .strokes()
        .iter()
        .filter(|s| !s.points.is_empty())
        .map(|s| s.path_data())
        .collect();
    drop(snapshot);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./signature_pad.css") }
        div { class: "signature",
            if signing {
                svg {
                    class: "signature-surface",
                    width: "{width}",
                    height: "{height}",
                    view_box: "0 0 {width} {height}",
                    onpointerdown: move |evt| {
                        session.write().pen_down(to_point(evt.element_coordinates()));
                    },
                    onpointermove: move |evt| {
                        if session.peek().pad().is_drawing() {
                            session.write().pen_move(to_point(evt.element_coordinates()));
                        }
                    },
                    onpointerup: move |_| session.write().pen_up(),
                    onpointerleave: move |_| session.write().pen_up(),
                    for (i, d) in paths.into_iter().enumerate() {
                        path { key: "{i}", d: "{d}", class: "signature-stroke" }
                    }
                }
                p { class: "signature-hint", "Sign inside the box." }
            } else if let Some(url) = committed {
                img { class: "signature-image", src: "{url}", alt: "Customer signature" }
            } else {
                EmptyState { message: "No signature captured yet." }
            }

            if !read_only {
                div { class: "signature-actions",
                    if signing {
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            onclick: move |_| on_save.call(()),
                            Icon::<LdSave> { icon: LdSave, width: 14, height: 14 }
                            "Save"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| {
                                session.write().begin_signature();
                            },
                            Icon::<LdPencil> { icon: LdPencil, width: 14, height: 14 }
                            "Sign"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_clear.call(()),
                        Icon::<LdEraser> { icon: LdEraser, width: 14, height: 14 }
                        "Clear"
                    }
                    if let Some(file) = download {
                        a {
                            class: "signature-download",
                            href: "{file.data_url}",
                            download: "{file.file_name}",
                            Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                            "Download"
                        }
                    }
                }
            }
        }
    }
}
