//! Record construction.
//!
//! Turns form input into stored records: assigns ids, stamps the report
//! date, and encodes an optional photo into an inline `data:` URL.
//!
//! Encoding is the one asynchronous step of the board. Callers await
//! [`encode_image`] and only then build the [`FoundItem`], so a record
//! never exists with a half-read image.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Datelike, Local};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{FoundItem, FoundReport, LostItem, LostReport, Record};

/// An image encoded as a `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data_url: String,
}

impl EncodedImage {
    /// Encode raw bytes with the given MIME type.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        Self {
            data_url: format!("data:{mime};base64,{}", BASE64.encode(bytes)),
        }
    }

    /// The full data URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.data_url
    }

    /// MIME type between `data:` and `;base64`.
    #[must_use]
    pub fn mime(&self) -> &str {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.data_url
    }
}

/// Read an image file and encode it inline.
///
/// The MIME type is guessed from the file extension, falling back to
/// `application/octet-stream`.
///
/// # Errors
///
/// Returns [`Error::ImageRead`] if the file cannot be read.
pub async fn encode_image(path: &Path) -> Result<EncodedImage> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| Error::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    debug!(path = %path.display(), bytes = bytes.len(), mime = %mime, "image encoded");
    Ok(EncodedImage::from_bytes(&bytes, mime.essence_str()))
}

/// Pick an id for a new record.
///
/// Uses the wall-clock milliseconds, bumped past the largest existing id
/// when the clock would collide with (or fall behind) it.
#[must_use]
pub fn next_id(now_millis: i64, existing: impl IntoIterator<Item = i64>) -> i64 {
    match existing.into_iter().max() {
        Some(max) if max >= now_millis => max.saturating_add(1),
        _ => now_millis,
    }
}

/// Human-readable report date, e.g. `1/9/2024`.
#[must_use]
pub fn display_date(now: &DateTime<Local>) -> String {
    format!("{}/{}/{}", now.month(), now.day(), now.year())
}

/// Build a lost item, assigning an id unique within `existing`.
#[must_use]
pub fn new_lost(report: LostReport, existing: &[LostItem], now: &DateTime<Local>) -> LostItem {
    let id = next_id(now.timestamp_millis(), existing.iter().map(Record::id));
    LostItem::from_report(report, id, display_date(now))
}

/// Build a found item from form input and an already-encoded image.
#[must_use]
pub fn new_found(
    report: FoundReport,
    image: Option<EncodedImage>,
    existing: &[FoundItem],
    now: &DateTime<Local>,
) -> FoundItem {
    let id = next_id(now.timestamp_millis(), existing.iter().map(Record::id));
    let image_base64 = image.map(EncodedImage::into_string).unwrap_or_default();
    FoundItem::from_report(report, image_base64, id, display_date(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 9, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_next_id_uses_clock_when_free() {
        assert_eq!(next_id(1_000, [1, 2, 3]), 1_000);
        assert_eq!(next_id(1_000, []), 1_000);
    }

    #[test]
    fn test_next_id_bumps_past_collision() {
        assert_eq!(next_id(1_000, [1_000]), 1_001);
        assert_eq!(next_id(1_000, [999, 1_005]), 1_006);
    }

    #[test]
    fn test_next_id_saturates_at_max() {
        assert_eq!(next_id(1_000, [i64::MAX]), i64::MAX);
    }

    #[test]
    fn test_display_date_has_no_padding() {
        assert_eq!(display_date(&fixed_now()), "1/9/2024");
    }

    #[test]
    fn test_rapid_lost_reports_get_distinct_ids() {
        let now = fixed_now();
        let mut items = Vec::new();
        for name in ["Wallet", "Phone", "Keys"] {
            let report = LostReport {
                item_name: name.to_string(),
                ..LostReport::default()
            };
            let item = new_lost(report, &items, &now);
            items.push(item);
        }

        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids[1], ids[0] + 1);
        assert_eq!(ids[2], ids[0] + 2);
    }

    #[test]
    fn test_new_found_without_image_has_empty_payload() {
        let report = FoundReport {
            item_name: "Keys".to_string(),
            found_date: "2024-01-02".to_string(),
            found_location: "Gym".to_string(),
            finder_contact: "555-0101".to_string(),
            description: None,
        };
        let item = new_found(report, None, &[], &fixed_now());

        assert_eq!(item.image_base64, "");
        assert_eq!(item.date_reported, "1/9/2024");
        assert_eq!(item.id, fixed_now().timestamp_millis());
    }

    #[test]
    fn test_encoded_image_data_url() {
        let image = EncodedImage::from_bytes(b"hello", "image/png");
        assert_eq!(image.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.mime(), "image/png");
    }

    #[tokio::test]
    async fn test_encode_image_guesses_mime() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keys.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

        let image = encode_image(&path).await.unwrap();
        assert_eq!(image.mime(), "image/jpeg");
        assert_eq!(image.as_str(), "data:image/jpeg;base64,/9j/");
    }

    #[tokio::test]
    async fn test_encode_image_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("photo.zzz-unknown");
        std::fs::write(&path, b"x").unwrap();

        let image = encode_image(&path).await.unwrap();
        assert_eq!(image.mime(), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_encode_image_missing_file() {
        let err = encode_image(Path::new("/nonexistent/photo.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ImageRead { .. }));
    }
}
