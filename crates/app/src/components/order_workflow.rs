use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCamera, LdCheck, LdPlay, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{
    AppConfig, DeliveryBackend, DeliverySession, DeliveryStatus, OrderRecord, TransitionOutcome,
    MAX_RATING,
};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, DetailItem, DetailList,
    DetailSection, DialogClose, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    EmptyState, NoticeDialog, StarRating, ToastOptions,
};

use crate::backend::use_backend;
use crate::components::map_widget::MapWidget;
use crate::components::signature_pad::SignaturePadView;
use crate::format_helpers::{format_distance, format_eta, order_title};
use crate::upload::upload_photos;

pub const NO_PHOTOS_MESSAGE: &str =
    "No photos attached yet. Add photos to document this delivery.";

/// Forward an applied transition to the backend.
fn report(backend: &Rc<dyn DeliveryBackend>, outcome: &TransitionOutcome) -> bool {
    match outcome.applied() {
        Some(change) => {
            tracing::info!(
                order = %change.order_id,
                from = change.from.label(),
                to = change.to.label(),
                "Delivery status changed"
            );
            backend.report_status_change(&change.order_id, change.to);
            true
        }
        None => false,
    }
}

/// Modal hosting the workflow for the selected order.
///
/// Each opened order gets a fresh session; closing discards it.
#[component]
pub fn OrderWorkflowDialog(order: Option<OrderRecord>, on_close: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let open = order.is_some();

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |v: bool| {
                if !v {
                    on_close.call(());
                }
            },
            DialogContent {
                if let Some(order) = order {
                    OrderWorkflow {
                        key: "{order.order_id}",
                        order: order,
                        with_signature_and_rating: config.features.signature_and_rating,
                        on_close: on_close,
                    }
                }
            }
        }
    }
}

/// Detail view and delivery workflow for one order.
#[component]
pub fn OrderWorkflow(
    order: OrderRecord,
    with_signature_and_rating: bool,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_context::<AppConfig>();
    let backend = use_backend();
    let toast = use_toast();
    let mut session =
        use_signal(|| DeliverySession::open(order.clone(), with_signature_and_rating));
    let mut uploads_in_flight = use_signal(|| 0u32);
    let mut notice = use_signal(|| None::<String>);

    let order_id = order.order_id.clone();
    let max_photo_bytes = config.upload.max_photo_bytes;

    let on_start = {
        let backend = backend.clone();
        move |_: MouseEvent| {
            let outcome = session.write().start_delivery();
            if report(&backend, &outcome) {
                toast.info("Delivery started".to_string(), ToastOptions::new());
            }
        }
    };

    let on_complete = {
        let backend = backend.clone();
        move |_: MouseEvent| {
            let result = session.write().complete_delivery();
            match result {
                Ok(outcome) => {
                    if report(&backend, &outcome) {
                        toast.success("Delivery completed".to_string(), ToastOptions::new());
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Finalize rejected");
                    notice.set(Some(e.user_message()));
                }
            }
        }
    };

    let on_files = {
        let backend = backend.clone();
        let order_id = order_id.clone();
        move |evt: FormEvent| {
            let files = evt.files();
            if files.is_empty() || session.peek().is_read_only() {
                return;
            }
            *uploads_in_flight.write() += 1;
            let backend = backend.clone();
            let order_id = order_id.clone();
            spawn(async move {
                let outcomes = upload_photos(files, max_photo_bytes).await;
                let batch = session.write().attach_photos(outcomes);
                *uploads_in_flight.write() -= 1;

                if !batch.attached.is_empty() {
                    let photos = session.peek().photos_by_id(&batch.attached);
                    backend.persist_photos(&order_id, &photos);
                }
                if !batch.skipped.is_empty() {
                    let names: Vec<&str> =
                        batch.skipped.iter().map(|(name, _)| name.as_str()).collect();
                    toast.error(
                        format!("Skipped {}: {}", names.len(), names.join(", ")),
                        ToastOptions::new(),
                    );
                }
            });
        }
    };

    let on_save_signature = {
        let backend = backend.clone();
        let order_id = order_id.clone();
        move |_: ()| {
            let saved = session.write().save_signature().map(|s| s.cloned());
            match saved {
                Ok(Some(signature)) => {
                    backend.persist_signature(&order_id, &signature);
                    toast.success("Signature saved".to_string(), ToastOptions::new());
                }
                Ok(None) => {}
                Err(e) => notice.set(Some(e.user_message())),
            }
        }
    };

    let on_rate = move |stars: u8| {
        if let Err(e) = session.write().set_rating(stars) {
            tracing::warn!(error = %e, stars, "Rating rejected");
        }
    };

    let current = session.read();
    let status = current.status();
    let read_only = current.is_read_only();
    let can_start = current.can_start();
    let can_complete = current.can_complete();
    let rating = current.rating();
    let photos = current.photos().to_vec();
    drop(current);
    let uploading = uploads_in_flight() > 0;
    let tone = BadgeTone::from_color(status.color().as_str());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./order_workflow.css") }
        div { class: "order-workflow",
            DialogClose { on_close: move |_| on_close.call(()) }
            DialogTitle { "{order_title(&order.order_id)}" }
            DialogDescription { "{order.customer_name} · {order.address}" }

            div { class: "order-workflow-grid",
                div { class: "order-workflow-main",
                    DetailSection { title: "Delivery details",
                        DetailList {
                            DetailItem { label: "Status",
                                Badge { tone: tone, "{status.label()}" }
                            }
                            DetailItem { label: "Customer", value: order.customer_name.clone() }
                            DetailItem { label: "Address", value: order.address.clone() }
                            DetailItem { label: "Distance", value: format_distance(order.distance_km) }
                            DetailItem { label: "Estimated time", value: format_eta(order.estimated_minutes()) }
                        }
                    }
                    DetailSection { title: "Instructions",
                        p { class: "order-instructions", "{order.instructions_or_default()}" }
                    }
                    DetailSection { title: "Location",
                        MapWidget { address: order.address.clone() }
                    }
                }

                div { class: "order-workflow-side",
                    DetailSection { title: "Photos",
                        if !read_only {
                            label { class: "photo-picker",
                                Icon::<LdCamera> { icon: LdCamera, width: 16, height: 16 }
                                span { "Add photos" }
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    multiple: true,
                                    onchange: on_files,
                                }
                            }
                        }
                        if uploading {
                            p { class: "photo-uploading", role: "status", "Uploading photos..." }
                        }
                        if photos.is_empty() {
                            EmptyState { message: NO_PHOTOS_MESSAGE.to_string() }
                        } else {
                            div { class: "photo-grid",
                                for photo in photos {
                                    figure { key: "{photo.id}", class: "photo",
                                        img {
                                            src: "{photo.display_url}",
                                            alt: "{photo.name}",
                                            title: "{photo.captured_label()}",
                                        }
                                        figcaption { class: "photo-time", "{photo.captured_label()}" }
                                        if !read_only {
                                            button {
                                                class: "photo-remove",
                                                r#type: "button",
                                                "aria-label": "Remove {photo.name}",
                                                onclick: {
                                                    let id = photo.id.clone();
                                                    move |_| {
                                                        session.write().remove_photo(&id);
                                                    }
                                                },
                                                Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if with_signature_and_rating {
                        DetailSection { title: "Customer rating",
                            StarRating {
                                value: rating,
                                max: MAX_RATING,
                                readonly: read_only,
                                on_change: on_rate,
                            }
                        }
                        DetailSection { title: "Signature",
                            SignaturePadView {
                                session: session,
                                on_save: on_save_signature,
                                on_clear: move |_| {
                                    session.write().clear_signature();
                                },
                            }
                        }
                    }
                }
            }

            div { class: "order-workflow-actions",
                if status == DeliveryStatus::Completed {
                    span { class: "order-complete-note", "This delivery is complete." }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: !can_start,
                    onclick: on_start,
                    Icon::<LdPlay> { icon: LdPlay, width: 16, height: 16 }
                    "Start Delivery"
                }
                Button {
                    variant: ButtonVariant::Success,
                    size: ButtonSize::Medium,
                    disabled: !can_complete,
                    onclick: on_complete,
                    Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 }
                    "Finalize Delivery"
                }
            }

            NoticeDialog {
                title: "Cannot finish yet",
                message: notice(),
                on_dismiss: move |_| notice.set(None),
            }
        }
    }
}
