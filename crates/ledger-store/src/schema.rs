//! Database schema definitions and column families.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary transaction records, keyed by `transaction_id` (ULID).
    pub const TRANSACTIONS: &str = "transactions";

    /// Index: transactions by calendar date, keyed by `date || transaction_id`.
    /// Value is empty (index only).
    pub const TRANSACTIONS_BY_DATE: &str = "transactions_by_date";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::TRANSACTIONS, cf::TRANSACTIONS_BY_DATE]
}
