use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, DeliveryBackend, DeliverySession, DeliveryStatus, OrderId, Point,
    PHOTO_REQUIRED_MESSAGE,
};

use crate::common::{order, photo, rejected, BackendCall, RecordingBackend};

/// Drive the session the way the detail view does: apply, then report.
fn start(session: &mut DeliverySession, backend: &RecordingBackend) {
    if let Some(change) = session.start_delivery().applied() {
        backend.report_status_change(&change.order_id, change.to);
    }
}

fn complete(session: &mut DeliverySession, backend: &RecordingBackend) -> Result<(), String> {
    let outcome = session.complete_delivery().map_err(|e| e.user_message())?;
    if let Some(change) = outcome.applied() {
        backend.report_status_change(&change.order_id, change.to);
    }
    Ok(())
}

fn sign(session: &mut DeliverySession) {
    session.begin_signature();
    session.pen_down(Point { x: 10.0, y: 10.0 });
    session.pen_move(Point { x: 60.0, y: 40.0 });
    session.pen_move(Point { x: 120.0, y: 20.0 });
    session.pen_up();
}

#[test]
fn full_delivery_reports_each_step() {
    let backend = RecordingBackend::default();
    let mut session = DeliverySession::open(order(1001, DeliveryStatus::Pending, "Olivia", 9.0), true);

    start(&mut session, &backend);
    assert_eq!(session.status(), DeliveryStatus::InProgress);

    let batch = session.attach_photos(vec![photo("door.jpg"), photo("parcel.jpg")]);
    backend.persist_photos(&OrderId::Number(1001), &session.photos_by_id(&batch.attached));

    session.set_rating(4).expect("valid rating");
    sign(&mut session);
    let signature = session.save_signature().expect("signature").cloned();
    backend.persist_signature(&OrderId::Number(1001), signature.as_ref().expect("saved"));

    complete(&mut session, &backend).expect("completes");
    assert_eq!(session.status(), DeliveryStatus::Completed);

    assert_eq!(
        *backend.calls.borrow(),
        vec![
            BackendCall::Status(OrderId::Number(1001), DeliveryStatus::InProgress),
            BackendCall::Photos(
                OrderId::Number(1001),
                vec!["door.jpg".to_string(), "parcel.jpg".to_string()]
            ),
            BackendCall::Signature(OrderId::Number(1001)),
            BackendCall::Status(OrderId::Number(1001), DeliveryStatus::Completed),
        ]
    );
}

#[test]
fn finalize_without_photos_is_blocked() {
    let backend = RecordingBackend::default();
    let mut session =
        DeliverySession::open(order(1002, DeliveryStatus::InProgress, "Bruno", 7.0), true);

    let err = complete(&mut session, &backend).unwrap_err();
    assert_eq!(err, PHOTO_REQUIRED_MESSAGE);
    assert_eq!(session.status(), DeliveryStatus::InProgress);
    assert!(backend.calls.borrow().is_empty());
}

#[test]
fn removing_the_last_photo_blocks_finalize_again() {
    let mut session =
        DeliverySession::open(order(1002, DeliveryStatus::InProgress, "Bruno", 7.0), false);
    let batch = session.attach_photos(vec![photo("only.jpg")]);
    assert!(session.remove_photo(&batch.attached[0]));

    let err = session.complete_delivery().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
}

#[test]
fn finalize_from_pending_requires_start() {
    let mut session =
        DeliverySession::open(order(1004, DeliveryStatus::Pending, "Patrick", 14.0), false);
    session.attach_photos(vec![photo("a.jpg")]);

    let err = session.complete_delivery().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidTransition);
    assert_eq!(session.status(), DeliveryStatus::Pending);
}

#[test]
fn completed_order_opens_read_only() {
    let backend = RecordingBackend::default();
    let mut session =
        DeliverySession::open(order(1003, DeliveryStatus::Completed, "Antonie", 29.0), true);

    assert!(session.is_read_only());
    assert!(!session.can_start());
    assert!(!session.can_complete());

    start(&mut session, &backend);
    complete(&mut session, &backend).expect("no-op on completed");
    let batch = session.attach_photos(vec![photo("late.jpg")]);
    assert!(batch.attached.is_empty());
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(session.set_rating(5), Ok(false));
    assert!(!session.begin_signature());

    assert_eq!(session.status(), DeliveryStatus::Completed);
    assert!(session.photos().is_empty());
    assert_eq!(session.rating(), 0);
    assert!(backend.calls.borrow().is_empty());
}

#[test]
fn upload_finishing_after_completion_is_dropped() {
    let mut session =
        DeliverySession::open(order(1006, DeliveryStatus::InProgress, "Grace", 25.0), true);
    session.attach_photos(vec![photo("first.jpg")]);
    session.complete_delivery().expect("completes");

    let late = session.attach_photos(vec![photo("second.jpg")]);
    assert!(late.attached.is_empty());
    assert_eq!(session.photos().len(), 1);
}

#[test]
fn mixed_batch_keeps_successes_in_order() {
    let mut session =
        DeliverySession::open(order(1010, DeliveryStatus::InProgress, "Sofia", 4.8), false);
    let batch = session.attach_photos(vec![
        photo("1.jpg"),
        rejected("notes.txt"),
        photo("2.jpg"),
    ]);

    let names: Vec<&str> = session.photos().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["1.jpg", "2.jpg"]);
    assert_eq!(
        batch.skipped,
        vec![("notes.txt".to_string(), "not an image".to_string())]
    );
}

#[test]
fn without_capability_rating_and_signature_are_inert() {
    let mut session =
        DeliverySession::open(order(1005, DeliveryStatus::InProgress, "William", 11.0), false);

    assert_eq!(session.set_rating(3), Ok(false));
    sign(&mut session);
    assert!(!session.is_signing());
    assert_eq!(session.save_signature(), Ok(None));
    assert!(session.signature_download().is_none());

    session.attach_photos(vec![photo("door.jpg")]);
    session.complete_delivery().expect("photos are enough");
    assert_eq!(session.status(), DeliveryStatus::Completed);
}

#[test]
fn rating_out_of_range_is_rejected() {
    let mut session =
        DeliverySession::open(order(1008, DeliveryStatus::InProgress, "Ana", 6.2), true);
    session.set_rating(2).expect("valid");

    assert_eq!(session.set_rating(0).unwrap_err().kind, AppErrorKind::ValidationError);
    assert_eq!(session.set_rating(6).unwrap_err().kind, AppErrorKind::ValidationError);
    assert_eq!(session.rating(), 2);
}

#[test]
fn signature_download_is_named_after_order() {
    let mut session =
        DeliverySession::open(order(1009, DeliveryStatus::InProgress, "Liam", 2.0), true);
    sign(&mut session);
    session.save_signature().expect("saved");

    let file = session.signature_download().expect("download");
    assert_eq!(file.file_name, "signature-1009.svg");
    assert!(file.data_url.starts_with("data:image/svg+xml;base64,"));

    assert!(session.clear_signature());
    assert!(session.signature().is_none());
    assert!(session.signature_download().is_none());
}

#[test]
fn empty_signature_cannot_be_saved() {
    let mut session =
        DeliverySession::open(order(1011, DeliveryStatus::Pending, "Noah", 5.0), true);
    session.begin_signature();

    let err = session.save_signature().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(session.is_signing());
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Start,
    Complete,
    Attach,
    Remove,
}

const ACTIONS: [Action; 4] = [Action::Start, Action::Complete, Action::Attach, Action::Remove];

/// Every sequence of `ACTIONS` with length `0..=max_len`.
fn action_sequences(max_len: usize) -> Vec<Vec<Action>> {
    let mut all = vec![Vec::new()];
    let mut frontier: Vec<Vec<Action>> = vec![Vec::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                ACTIONS.into_iter().map(move |action| {
                    let mut next = prefix.clone();
                    next.push(action);
                    next
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn status_never_moves_backward_for_any_action_sequence() {
    let sequences = action_sequences(6);
    assert_eq!(sequences.len(), 1 + 4 + 16 + 64 + 256 + 1024 + 4096);

    for initial in [
        DeliveryStatus::Pending,
        DeliveryStatus::InProgress,
        DeliveryStatus::Completed,
    ] {
        for sequence in &sequences {
            let mut session = DeliverySession::open(order(1, initial, "Mia", 3.0), true);
            for (step, action) in sequence.iter().enumerate() {
                let before = session.status();
                let photos_before = session.photos().len();
                match action {
                    Action::Start => {
                        if let Some(change) = session.start_delivery().applied() {
                            assert!(change.from < change.to);
                        }
                    }
                    Action::Complete => match session.complete_delivery() {
                        Ok(outcome) => {
                            if let Some(change) = outcome.applied() {
                                assert_eq!(change.to, DeliveryStatus::Completed);
                                assert!(photos_before > 0, "{sequence:?} completed with no photos");
                            }
                        }
                        Err(_) => {
                            assert_eq!(session.status(), before);
                            assert_eq!(session.photos().len(), photos_before);
                        }
                    },
                    Action::Attach => {
                        session.attach_photos(vec![photo(&format!("{step}.jpg"))]);
                    }
                    Action::Remove => {
                        if let Some(id) = session.photos().first().map(|p| p.id.clone()) {
                            session.remove_photo(&id);
                        }
                    }
                }

                let after = session.status();
                assert!(after >= before, "{initial:?} {sequence:?}: {before:?} -> {after:?}");
                if after == DeliveryStatus::Completed && before != DeliveryStatus::Completed {
                    assert!(!session.photos().is_empty(), "{sequence:?} completed with no photos");
                }
                if before == DeliveryStatus::Completed {
                    assert_eq!(session.photos().len(), photos_before);
                }
            }
        }
    }
}
