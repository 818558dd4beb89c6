use base64::Engine;
use dioxus::html::FileData;
use shared_types::UploadOutcome;

/// MIME type for a photo file name; unknown extensions are rejected.
pub fn image_mime(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "tif" | "tiff" => Some("image/tiff"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// MIME type to embed for an uploaded photo.
///
/// The content type reported by the picker wins when present, and any
/// `image/*` type is accepted. Only files without one are judged by their
/// extension.
pub fn photo_mime(name: &str, content_type: Option<&str>) -> Option<String> {
    let reported = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty());

    match reported {
        Some(mime) => {
            let subtype = mime.strip_prefix("image/")?;
            let valid = !subtype.is_empty()
                && subtype
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
            valid.then_some(mime)
        }
        None => image_mime(name).map(str::to_string),
    }
}

/// Validate one file's bytes and turn them into a displayable data URL.
pub fn encode_photo(
    name: String,
    content_type: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> UploadOutcome {
    if bytes.is_empty() {
        return UploadOutcome::Failure {
            name,
            reason: "file is empty".to_string(),
        };
    }
    if bytes.len() > max_bytes {
        return UploadOutcome::Failure {
            reason: format!("file is larger than {} bytes", max_bytes),
            name,
        };
    }
    let Some(mime) = photo_mime(&name, content_type) else {
        return UploadOutcome::Failure {
            name,
            reason: "not a supported image type".to_string(),
        };
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    UploadOutcome::Success {
        display_url: format!("data:{mime};base64,{encoded}"),
        name,
    }
}

/// Read every selected file. Each file yields its own outcome, so one bad
/// file never sinks the batch.
pub async fn upload_photos(files: Vec<FileData>, max_bytes: usize) -> Vec<UploadOutcome> {
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let name = file.name();
        let content_type = file.content_type();
        let outcome = match file.read_bytes().await {
            Ok(bytes) => encode_photo(name, content_type.as_deref(), &bytes, max_bytes),
            Err(e) => UploadOutcome::Failure {
                name,
                reason: format!("could not read file: {e}"),
            },
        };
        if let UploadOutcome::Failure { name, reason } = &outcome {
            tracing::warn!(file = %name, %reason, "Skipping photo");
        }
        outcomes.push(outcome);
    }
    outcomes
}
