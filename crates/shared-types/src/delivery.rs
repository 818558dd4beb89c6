//! Per-order delivery session: the working state a driver mutates while an
//! order is open in the detail view.
//!
//! A session is created from an [`OrderRecord`] and discarded when the view
//! closes; nothing here is persisted. Status only moves forward
//! (`Pending -> InProgress -> Completed`) and `Completed` freezes photos,
//! signature and rating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::order::{DeliveryStatus, OrderId, OrderRecord};
use crate::signature::{Point, SignaturePad};

/// Shown when finalizing without any photo attached.
pub const PHOTO_REQUIRED_MESSAGE: &str =
    "Please add at least one photo before finalizing the delivery.";

/// Shown when saving an empty signature pad.
pub const EMPTY_SIGNATURE_MESSAGE: &str = "Draw a signature before saving it.";

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// A photo attached to the delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    /// Original file name, used as alt text.
    pub name: String,
    /// Transient reference the browser can display (object or data URL).
    pub display_url: String,
    pub captured_at: DateTime<Utc>,
}

impl Photo {
    /// Capture time as shown on the photo overlay, e.g. "Oct 19, 2026 9:35 PM".
    pub fn captured_label(&self) -> String {
        self.captured_at.format("%b %-d, %Y %-I:%M %p").to_string()
    }
}

/// Result of uploading one file.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Success { name: String, display_url: String },
    Failure { name: String, reason: String },
}

/// What happened to a batch handed to [`DeliverySession::attach_photos`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachReport {
    /// Ids of the photos appended, in order.
    pub attached: Vec<String>,
    /// `(file name, reason)` for every skipped file.
    pub skipped: Vec<(String, String)>,
}

/// The committed signature image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub data_url: String,
    pub captured_at: DateTime<Utc>,
}

/// A file ready to be downloaded by the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureDownload {
    pub file_name: String,
    pub data_url: String,
}

/// A status change that was actually applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub order_id: OrderId,
    pub from: DeliveryStatus,
    pub to: DeliveryStatus,
}

/// Result of a guarded transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    Applied(StatusChange),
    /// The guard did not allow the transition; nothing changed.
    Unchanged,
}

impl TransitionOutcome {
    pub fn applied(&self) -> Option<&StatusChange> {
        match self {
            TransitionOutcome::Applied(change) => Some(change),
            TransitionOutcome::Unchanged => None,
        }
    }
}

/// Collaborator notified of workflow side effects.
///
/// No transport is defined; implementations may log, queue, or call a real
/// order-management service.
pub trait DeliveryBackend {
    fn report_status_change(&self, order_id: &OrderId, status: DeliveryStatus);
    fn persist_photos(&self, order_id: &OrderId, photos: &[Photo]);
    fn persist_signature(&self, order_id: &OrderId, signature: &Signature);
}

/// Mutable per-session state for one opened order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySession {
    order: OrderRecord,
    status: DeliveryStatus,
    photos: Vec<Photo>,
    signature: Option<Signature>,
    rating: u8,
    with_signature_and_rating: bool,
    signing: bool,
    pad: SignaturePad,
}

impl DeliverySession {
    /// Open a session for `order`, starting from its stored status.
    pub fn open(order: OrderRecord, with_signature_and_rating: bool) -> Self {
        Self {
            status: order.status,
            order,
            photos: Vec::new(),
            signature: None,
            rating: 0,
            with_signature_and_rating,
            signing: false,
            pad: SignaturePad::default(),
        }
    }

    pub fn order(&self) -> &OrderRecord {
        &self.order
    }

    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Star rating, `0` meaning unrated.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn with_signature_and_rating(&self) -> bool {
        self.with_signature_and_rating
    }

    pub fn is_signing(&self) -> bool {
        self.signing
    }

    pub fn pad(&self) -> &SignaturePad {
        &self.pad
    }

    /// Photos, signature and rating are frozen once completed.
    pub fn is_read_only(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn can_start(&self) -> bool {
        self.status == DeliveryStatus::Pending
    }

    pub fn can_complete(&self) -> bool {
        self.status == DeliveryStatus::InProgress
    }

    fn extras_editable(&self) -> bool {
        self.with_signature_and_rating && !self.is_read_only()
    }

    // ── Photos ──────────────────────────────────────────────────────

    /// Append every successful upload in order; failures are skipped.
    ///
    /// Once the session is completed the whole batch is dropped, which also
    /// covers uploads that finish after the delivery was finalized.
    pub fn attach_photos(&mut self, uploads: Vec<UploadOutcome>) -> AttachReport {
        let mut report = AttachReport::default();
        if self.is_read_only() {
            report.skipped = uploads
                .into_iter()
                .map(|u| match u {
                    UploadOutcome::Success { name, .. } | UploadOutcome::Failure { name, .. } => {
                        (name, "delivery already completed".to_string())
                    }
                })
                .collect();
            return report;
        }

        for upload in uploads {
            match upload {
                UploadOutcome::Success { name, display_url } => {
                    let photo = Photo {
                        id: Uuid::new_v4().to_string(),
                        name,
                        display_url,
                        captured_at: Utc::now(),
                    };
                    report.attached.push(photo.id.clone());
                    self.photos.push(photo);
                }
                UploadOutcome::Failure { name, reason } => report.skipped.push((name, reason)),
            }
        }
        report
    }

    /// Remove the photo with `id`. Returns whether anything was removed.
    pub fn remove_photo(&mut self, id: &str) -> bool {
        if self.is_read_only() {
            return false;
        }
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        self.photos.len() != before
    }

    /// Photos with the given ids, in session order.
    pub fn photos_by_id(&self, ids: &[String]) -> Vec<Photo> {
        self.photos
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }

    // ── Status ──────────────────────────────────────────────────────

    fn transition(&mut self, to: DeliveryStatus) -> TransitionOutcome {
        let change = StatusChange {
            order_id: self.order.order_id.clone(),
            from: self.status,
            to,
        };
        self.status = to;
        if to.is_terminal() {
            self.signing = false;
            self.pad.end_stroke();
        }
        TransitionOutcome::Applied(change)
    }

    /// `Pending -> InProgress`. A no-op from any other state.
    pub fn start_delivery(&mut self) -> TransitionOutcome {
        if self.can_start() {
            self.transition(DeliveryStatus::InProgress)
        } else {
            TransitionOutcome::Unchanged
        }
    }

    /// `InProgress -> Completed`, provided at least one photo is attached.
    ///
    /// Already-completed sessions are left alone. Both rejections leave the
    /// session untouched.
    pub fn complete_delivery(&mut self) -> Result<TransitionOutcome, AppError> {
        if self.status.is_terminal() {
            return Ok(TransitionOutcome::Unchanged);
        }
        if self.photos.is_empty() {
            return Err(AppError::validation(PHOTO_REQUIRED_MESSAGE));
        }
        if !self.can_complete() {
            return Err(AppError::invalid_transition(
                "Start the delivery before finalizing it.",
            ));
        }
        Ok(self.transition(DeliveryStatus::Completed))
    }

    // ── Rating ──────────────────────────────────────────────────────

    /// Overwrite the rating with `stars` (1..=5). Returns whether it changed.
    pub fn set_rating(&mut self, stars: u8) -> Result<bool, AppError> {
        if !self.extras_editable() {
            return Ok(false);
        }
        if !(1..=MAX_RATING).contains(&stars) {
            return Err(AppError::validation(format!(
                "Rating must be between 1 and {MAX_RATING}."
            )));
        }
        let changed = self.rating != stars;
        self.rating = stars;
        Ok(changed)
    }

    // ── Signature ───────────────────────────────────────────────────

    /// Enter signature mode. Returns whether the session is now signing.
    pub fn begin_signature(&mut self) -> bool {
        if self.extras_editable() {
            self.signing = true;
        }
        self.signing
    }

    pub fn pen_down(&mut self, p: Point) {
        if self.signing && self.extras_editable() {
            self.pad.begin_stroke(p);
        }
    }

    pub fn pen_move(&mut self, p: Point) {
        if self.signing && self.extras_editable() {
            self.pad.extend_stroke(p);
        }
    }

    pub fn pen_up(&mut self) {
        self.pad.end_stroke();
    }

    /// Commit the current drawing as the session's signature and leave
    /// signature mode. Any earlier signature is replaced and the pad is
    /// wiped, so the next signing starts from a blank surface.
    pub fn save_signature(&mut self) -> Result<Option<&Signature>, AppError> {
        if !self.signing || !self.extras_editable() {
            return Ok(None);
        }
        if self.pad.is_empty() {
            return Err(AppError::validation(EMPTY_SIGNATURE_MESSAGE));
        }
        self.pad.end_stroke();
        let data_url = self.pad.to_data_url();
        self.pad.clear();
        self.signature = Some(Signature {
            data_url,
            captured_at: Utc::now(),
        });
        self.signing = false;
        Ok(self.signature.as_ref())
    }

    /// Erase the drawing surface and drop any committed signature.
    pub fn clear_signature(&mut self) -> bool {
        if !self.extras_editable() {
            return false;
        }
        self.pad.clear();
        self.signature = None;
        true
    }

    /// The committed signature as a downloadable file.
    pub fn signature_download(&self) -> Option<SignatureDownload> {
        if !self.extras_editable() {
            return None;
        }
        self.signature.as_ref().map(|sig| SignatureDownload {
            file_name: format!("signature-{}.svg", self.order.order_id),
            data_url: sig.data_url.clone(),
        })
    }
}
