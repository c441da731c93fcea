//! Key encoding utilities for `RocksDB`.
//!
//! This module provides functions for encoding and decoding keys used in
//! column families. Date index keys sort bytewise in calendar order, so a
//! prefix scan over `transactions_by_date` walks records date-ascending.

use chrono::{Datelike, NaiveDate};

use ledger_core::TransactionId;

/// Byte length of the date portion of an index key: year(4) + month(1) + day(1).
const DATE_PREFIX_LEN: usize = 6;

/// Byte length of a full date index key: date(6) + id(16).
pub const DATE_INDEX_KEY_LEN: usize = DATE_PREFIX_LEN + 16;

/// Create a primary transaction key from a transaction id.
#[must_use]
pub fn transaction_key(id: &TransactionId) -> Vec<u8> {
    id.to_bytes().to_vec()
}

/// Encode a year so that the big-endian bytes sort in numeric order.
///
/// Flipping the sign bit maps `i32::MIN..=i32::MAX` onto an unsigned range,
/// keeping pre-year-0 dates ordered correctly.
#[allow(clippy::cast_sign_loss)]
fn encode_year(year: i32) -> [u8; 4] {
    ((year as u32) ^ (1 << 31)).to_be_bytes()
}

/// Create a date index key.
///
/// Format: `year (4 bytes, order-preserving) || month (1 byte) || day (1 byte)
/// || transaction_id (16 bytes)`
///
/// Since ULIDs are time-ordered, records sharing a date sort by insertion.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // month and day always fit in a byte
pub fn date_index_key(date: NaiveDate, id: &TransactionId) -> Vec<u8> {
    let mut key = Vec::with_capacity(DATE_INDEX_KEY_LEN);
    key.extend_from_slice(&encode_year(date.year()));
    key.push(date.month() as u8);
    key.push(date.day() as u8);
    key.extend_from_slice(&id.to_bytes());
    key
}

/// Create a prefix for iterating all index entries of a year, optionally
/// narrowed to one month.
///
/// A month outside `1..=255` cannot appear in any key, so callers should
/// treat such filters as matching nothing rather than building a prefix.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn date_prefix(year: i32, month: Option<u32>) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(DATE_PREFIX_LEN);
    prefix.extend_from_slice(&encode_year(year));
    if let Some(month) = month {
        prefix.push(month as u8);
    }
    prefix
}

/// Extract the month byte from a date index key.
///
/// # Panics
///
/// Panics if the key is shorter than the date prefix.
#[must_use]
pub fn index_key_month(key: &[u8]) -> u8 {
    key[4]
}

/// Extract the transaction id from a date index key.
///
/// # Panics
///
/// Panics if the key is shorter than [`DATE_INDEX_KEY_LEN`].
#[must_use]
pub fn extract_transaction_id(key: &[u8]) -> TransactionId {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&key[DATE_PREFIX_LEN..DATE_INDEX_KEY_LEN]);
    TransactionId::from_bytes(bytes).expect("valid ULID bytes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn transaction_key_length() {
        let id = TransactionId::generate();
        let key = transaction_key(&id);
        assert_eq!(key.len(), 16);
    }

    #[test]
    fn date_index_key_format() {
        let id = TransactionId::generate();
        let key = date_index_key(date(2024, 3, 15), &id);

        assert_eq!(key.len(), DATE_INDEX_KEY_LEN);
        assert_eq!(index_key_month(&key), 3);
        assert_eq!(key[5], 15);
        assert_eq!(&key[6..], id.to_bytes());
    }

    #[test]
    fn extract_transaction_id_roundtrip() {
        let id = TransactionId::generate();
        let key = date_index_key(date(2024, 3, 15), &id);

        let extracted = extract_transaction_id(&key);
        assert_eq!(extracted, id);
    }

    #[test]
    fn keys_sort_in_calendar_order() {
        let id = TransactionId::generate();
        let ordered = [
            date(-44, 3, 15),
            date(1969, 12, 31),
            date(1970, 1, 1),
            date(2024, 3, 15),
            date(2024, 3, 16),
            date(2024, 4, 1),
            date(2025, 1, 1),
        ];

        let keys: Vec<_> = ordered.iter().map(|d| date_index_key(*d, &id)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn year_prefix_covers_whole_year() {
        let id = TransactionId::generate();
        let prefix = date_prefix(2024, None);

        assert!(date_index_key(date(2024, 1, 1), &id).starts_with(&prefix));
        assert!(date_index_key(date(2024, 12, 31), &id).starts_with(&prefix));
        assert!(!date_index_key(date(2023, 12, 31), &id).starts_with(&prefix));
    }

    #[test]
    fn month_prefix_narrows_to_one_month() {
        let id = TransactionId::generate();
        let prefix = date_prefix(2024, Some(3));

        assert!(date_index_key(date(2024, 3, 15), &id).starts_with(&prefix));
        assert!(!date_index_key(date(2024, 4, 15), &id).starts_with(&prefix));
        assert!(!date_index_key(date(2023, 3, 15), &id).starts_with(&prefix));
    }
}
