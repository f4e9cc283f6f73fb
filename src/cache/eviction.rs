//! Eviction Module
//!
//! Implements Least Recently Used victim selection for cache eviction.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Victim Selection ==
/// Returns the key of the least recently accessed entry.
///
/// Eviction order is derived from the access stamps already stored on the
/// entries, so no separate bookkeeping structure has to be kept in sync with
/// the map. The full scan only runs when an insert hits the capacity limit,
/// never on the read or overwrite path.
///
/// Ties on the access stamp are broken by the lexicographically smallest
/// key, making the choice deterministic.
///
/// # Returns
/// - `Some(key)` of the entry to evict
/// - `None` if the map is empty
pub fn select_victim(entries: &HashMap<String, CacheEntry>) -> Option<String> {
    entries
        .iter()
        .min_by(|(key_a, entry_a), (key_b, entry_b)| {
            entry_a
                .last_accessed
                .cmp(&entry_b.last_accessed)
                .then_with(|| key_a.cmp(key_b))
        })
        .map(|(key, _)| key.clone())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn entry_with_stamp(stamp: u64) -> CacheEntry {
        CacheEntry::new(json!("value"), Duration::from_secs(60), stamp)
    }

    #[test]
    fn test_select_victim_empty() {
        let entries = HashMap::new();
        assert_eq!(select_victim(&entries), None);
    }

    #[test]
    fn test_select_victim_single_entry() {
        let mut entries = HashMap::new();
        entries.insert("only".to_string(), entry_with_stamp(3));

        assert_eq!(select_victim(&entries), Some("only".to_string()));
    }

    #[test]
    fn test_select_victim_picks_smallest_stamp() {
        let mut entries = HashMap::new();
        entries.insert("a".to_string(), entry_with_stamp(5));
        entries.insert("b".to_string(), entry_with_stamp(2));
        entries.insert("c".to_string(), entry_with_stamp(9));

        assert_eq!(select_victim(&entries), Some("b".to_string()));
    }

    #[test]
    fn test_select_victim_ignores_insertion_order() {
        let mut entries = HashMap::new();
        entries.insert("later".to_string(), entry_with_stamp(1));
        entries.insert("earlier".to_string(), entry_with_stamp(7));

        // Only the stamp matters, not when the entry landed in the map
        assert_eq!(select_victim(&entries), Some("later".to_string()));
    }

    #[test]
    fn test_select_victim_breaks_ties_by_key() {
        let mut entries = HashMap::new();
        entries.insert("zebra".to_string(), entry_with_stamp(4));
        entries.insert("apple".to_string(), entry_with_stamp(4));
        entries.insert("mango".to_string(), entry_with_stamp(4));

        assert_eq!(select_victim(&entries), Some("apple".to_string()));
    }

    #[test]
    fn test_select_victim_after_touch() {
        let mut entries = HashMap::new();
        entries.insert("a".to_string(), entry_with_stamp(1));
        entries.insert("b".to_string(), entry_with_stamp(2));

        // Reading "a" makes it the most recent, so "b" becomes the victim
        if let Some(entry) = entries.get_mut("a") {
            entry.touch(3);
        }

        assert_eq!(select_victim(&entries), Some("b".to_string()));
    }
}
