//! Bounded, newest-first history of shown excuses.

use crate::errors::{AppError, AppResult};
use crate::models::{ExcuseRecord, HistoryEntry};
use serde::{Deserialize, Serialize};

pub const MAX_HISTORY: usize = 5;

/// Deserialization goes through [`HistoryLog::from_entries`], so a decoded
/// log never exceeds the cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<HistoryEntry>", from = "Vec<HistoryEntry>")]
pub struct HistoryLog(Vec<HistoryEntry>);

impl From<Vec<HistoryEntry>> for HistoryLog {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<HistoryLog> for Vec<HistoryEntry> {
    fn from(log: HistoryLog) -> Self {
        log.0
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wrap entries already in newest-first order, dropping any beyond the cap.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY);
        Self(entries)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.0.first()
    }

    /// 1-based lookup, as shown in the history listing.
    pub fn nth(&self, position: usize) -> AppResult<&HistoryEntry> {
        position
            .checked_sub(1)
            .and_then(|i| self.0.get(i))
            .ok_or(AppError::InvalidIndex(position))
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::Other(e.to_string()))
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::PersistenceRead(e.to_string()))
    }
}

/// Prepend `record` shown at `now` (epoch millis) and cap the log.
///
/// A clock that steps backwards is clamped to the newest entry's
/// timestamp so the log stays non-increasing from head to tail.
pub fn record_selection(history: &HistoryLog, record: &ExcuseRecord, now: i64) -> HistoryLog {
    let shown_at = history
        .newest()
        .map_or(now, |newest| now.max(newest.shown_at));

    let mut entries = Vec::with_capacity(MAX_HISTORY);
    entries.push(HistoryEntry::new(record.clone(), shown_at));
    entries.extend(history.entries().iter().take(MAX_HISTORY - 1).cloned());

    HistoryLog(entries)
}

pub fn clear_history() -> HistoryLog {
    HistoryLog::new()
}
