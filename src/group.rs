use std::collections::BTreeMap;

use crate::record::WordRecord;

/// Bucket for headwords that do not start with an ASCII letter.
pub const CATCH_ALL: char = '#';

pub fn bucket_for(word: &str) -> char {
    match word.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => CATCH_ALL,
    }
}

/// Fold records into per-letter buckets, keeping source order inside each
/// bucket. Records without a non-empty string headword are dropped.
pub fn group_records(records: Vec<WordRecord>) -> BTreeMap<char, Vec<WordRecord>> {
    records.into_iter().fold(BTreeMap::new(), |mut groups, record| {
        let key = record.word().filter(|w| !w.is_empty()).map(bucket_for);
        if let Some(key) = key {
            groups.entry(key).or_default().push(record);
        }
        groups
    })
}

/// Emission order: letters ascending, the catch-all bucket last.
pub fn ordered_keys(groups: &BTreeMap<char, Vec<WordRecord>>) -> Vec<char> {
    let mut keys: Vec<char> = groups.keys().copied().collect();
    keys.sort_by_key(|k| (*k == CATCH_ALL, *k));
    keys
}
