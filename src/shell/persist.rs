//! Reading and writing calculator state through a `KeyValueStore`.
//!
//! History is stored as a JSON array of `"<expression> = <result>"`
//! strings. Loading never fails: anything unreadable degrades to an
//! empty log.

use super::storage::KeyValueStore;
use super::theme::Theme;
use crate::core::HistoryLog;
use tracing::warn;

/// Load the history log stored under `key`.
pub fn load_history<K: KeyValueStore + ?Sized>(
    store: &K,
    key: &str,
    capacity: usize,
) -> HistoryLog {
    let Some(raw) = store.get(key) else {
        return HistoryLog::with_capacity(capacity);
    };

    let rows: Vec<String> = match serde_json::from_str(&raw) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(key, error = %e, "stored history is not a list of strings, starting empty");
            return HistoryLog::with_capacity(capacity);
        }
    };

    HistoryLog::from_rows(&rows, capacity).unwrap_or_else(|e| {
        warn!(key, index = e.index, "stored history has malformed rows, starting empty");
        HistoryLog::with_capacity(capacity)
    })
}

/// Write the history log under `key`.
pub fn save_history<K: KeyValueStore + ?Sized>(store: &mut K, key: &str, log: &HistoryLog) {
    match serde_json::to_string(&log.to_rows()) {
        Ok(json) => store.set(key, &json),
        Err(e) => warn!(key, error = %e, "failed to serialize history"),
    }
}

/// Remove the persisted history.
pub fn erase_history<K: KeyValueStore + ?Sized>(store: &mut K, key: &str) {
    store.remove(key);
}

pub fn load_theme<K: KeyValueStore + ?Sized>(store: &K, key: &str) -> Theme {
    Theme::from_stored(store.get(key).as_deref())
}

pub fn save_theme<K: KeyValueStore + ?Sized>(store: &mut K, key: &str, theme: Theme) {
    store.set(key, theme.as_str());
}
