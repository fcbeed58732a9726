use crate::models::category::Category;
use serde::{Deserialize, Serialize};

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcuseRecord {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub icon: String,
}

impl ExcuseRecord {
    pub fn new(id: &str, text: &str, category: Category, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            category,
            icon: icon.to_string(),
        }
    }
}

/// A catalog record stamped with the instant it was shown.
///
/// Serialized flat: `{"id","text","category","icon","timestamp"}`,
/// with `timestamp` in Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: ExcuseRecord,
    #[serde(rename = "timestamp")]
    pub shown_at: i64,
}

impl HistoryEntry {
    pub fn new(record: ExcuseRecord, shown_at: i64) -> Self {
        Self { record, shown_at }
    }
}
