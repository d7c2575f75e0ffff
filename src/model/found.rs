//! Found item model.

use serde::{Deserialize, Serialize};

use super::{Collection, ItemStatus, Record, non_blank};

/// Raw input of the "report found item" form (the image travels separately).
#[derive(Debug, Clone, Default)]
pub struct FoundReport {
    pub item_name: String,
    pub found_date: String,
    pub found_location: String,
    pub finder_contact: String,
    pub description: Option<String>,
}

/// A found item waiting for its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItem {
    pub id: i64,
    pub item_name: String,
    pub found_date: String,
    pub found_location: String,
    pub finder_contact: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Inline `data:` URL of the photo, empty when none was attached
    #[serde(default)]
    pub image_base64: String,

    /// Always `found`
    pub status: ItemStatus,
    pub date_reported: String,
}

impl FoundItem {
    /// Build a record from form input, an encoded image payload (empty for none),
    /// an assigned id and a report date.
    #[must_use]
    pub fn from_report(
        report: FoundReport,
        image_base64: String,
        id: i64,
        date_reported: String,
    ) -> Self {
        Self {
            id,
            item_name: report.item_name,
            found_date: report.found_date,
            found_location: report.found_location,
            finder_contact: report.finder_contact,
            description: non_blank(report.description),
            image_base64,
            status: ItemStatus::Found,
            date_reported,
        }
    }

    /// Whether a photo is attached.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_base64.is_empty()
    }
}

impl Record for FoundItem {
    const COLLECTION: Collection = Collection::Found;

    fn id(&self) -> i64 {
        self.id
    }

    fn item_name(&self) -> &str {
        &self.item_name
    }
}
