//! Lost item model.
//!
//! A lost item is reported by its owner and stays on the board until
//! someone marks it as found.

use serde::{Deserialize, Serialize};

use super::{Collection, ItemStatus, Record, non_blank};

/// Raw input of the "report lost item" form.
///
/// Nothing is validated here; empty text flows into the record as-is.
#[derive(Debug, Clone, Default)]
pub struct LostReport {
    pub item_name: String,
    pub lost_date: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// A lost item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItem {
    /// Time-derived identifier, unique within the lost collection
    pub id: i64,

    /// What was lost
    pub item_name: String,

    /// Date the item went missing (free text, usually `YYYY-MM-DD`)
    pub lost_date: String,

    /// Where it was last seen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Always `lost`
    pub status: ItemStatus,

    /// Display date the report was filed
    pub date_reported: String,
}

impl LostItem {
    /// Build a record from form input with an already-assigned id and report date.
    #[must_use]
    pub fn from_report(report: LostReport, id: i64, date_reported: String) -> Self {
        Self {
            id,
            item_name: report.item_name,
            lost_date: report.lost_date,
            location: non_blank(report.location),
            description: non_blank(report.description),
            status: ItemStatus::Lost,
            date_reported,
        }
    }
}

impl Record for LostItem {
    const COLLECTION: Collection = Collection::Lost;

    fn id(&self) -> i64 {
        self.id
    }

    fn item_name(&self) -> &str {
        &self.item_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_report_drops_blank_optionals() {
        let item = LostItem::from_report(
            LostReport {
                item_name: "Wallet".to_string(),
                lost_date: "2024-01-01".to_string(),
                location: Some("   ".to_string()),
                description: Some(String::new()),
            },
            7,
            "1/1/2024".to_string(),
        );

        assert_eq!(item.id, 7);
        assert_eq!(item.status, ItemStatus::Lost);
        assert!(item.location.is_none());
        assert!(item.description.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let item = LostItem::from_report(
            LostReport {
                item_name: "Wallet".to_string(),
                lost_date: "2024-01-01".to_string(),
                location: Some("Library".to_string()),
                description: None,
            },
            1,
            "1/1/2024".to_string(),
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["itemName"], "Wallet");
        assert_eq!(json["lostDate"], "2024-01-01");
        assert_eq!(json["location"], "Library");
        assert_eq!(json["status"], "lost");
        assert_eq!(json["dateReported"], "1/1/2024");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_reads_record_without_optionals() {
        let json = r#"{"id":5,"itemName":"Hat","lostDate":"2024-02-02","status":"lost","dateReported":"2/2/2024"}"#;
        let item: LostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_name, "Hat");
        assert!(item.location.is_none());
    }
}
