//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, Direction, IteratorMode,
    MultiThreaded, Options, WriteBatch,
};

use ledger_core::{PeriodFilter, Transaction, TransactionId, TransactionPatch};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path.as_ref(), cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(path = %path.as_ref().display(), "RocksDB store opened");

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Collect ids from the date index, in key (calendar) order.
    ///
    /// With a `prefix`, iteration starts there and stops at the first
    /// non-matching key; without one, the whole index is walked. The
    /// optional `month` check reads the month byte of each key, which is
    /// how month-only filters are pushed down without touching records.
    fn scan_index(&self, prefix: Option<&[u8]>, month: Option<u8>) -> Result<Vec<TransactionId>> {
        let cf_by_date = self.cf(cf::TRANSACTIONS_BY_DATE)?;

        let mode = prefix.map_or(IteratorMode::Start, |p| {
            IteratorMode::From(p, Direction::Forward)
        });

        let mut ids = Vec::new();
        for item in self.db.iterator_cf(&cf_by_date, mode) {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;

            if let Some(prefix) = prefix {
                if !key.starts_with(prefix) {
                    break;
                }
            }

            if let Some(month) = month {
                if keys::index_key_month(&key) != month {
                    continue;
                }
            }

            ids.push(keys::extract_transaction_id(&key));
        }

        Ok(ids)
    }
}

impl Store for RocksStore {
    fn put_transaction(&self, transaction: &Transaction) -> Result<()> {
        let cf_tx = self.cf(cf::TRANSACTIONS)?;
        let cf_by_date = self.cf(cf::TRANSACTIONS_BY_DATE)?;

        let tx_key = keys::transaction_key(&transaction.id);
        let date_key = keys::date_index_key(transaction.date, &transaction.id);
        let value = Self::serialize(transaction)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_tx, &tx_key, &value);
        batch.put_cf(&cf_by_date, &date_key, []); // Index entry (empty value)

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn get_transaction(&self, id: &TransactionId) -> Result<Option<Transaction>> {
        let cf = self.cf(cf::TRANSACTIONS)?;
        let key = keys::transaction_key(id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn list_transactions(&self, filter: &PeriodFilter) -> Result<Vec<Transaction>> {
        // A month that cannot appear in any index key matches nothing.
        let month = match filter.month {
            Some(m) => match u8::try_from(m) {
                Ok(m) if (1..=12).contains(&m) => Some(m),
                _ => return Ok(Vec::new()),
            },
            None => None,
        };

        let ids = match filter.year {
            // Year-bounded filters become a prefix scan; the month byte is
            // already part of the prefix when supplied.
            Some(year) => {
                let prefix = keys::date_prefix(year, filter.month);
                self.scan_index(Some(prefix.as_slice()), None)?
            }
            // Month-only and unbounded filters walk the whole index.
            None => self.scan_index(None, month)?,
        };

        let mut transactions = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(tx) = self.get_transaction(&id)? {
                transactions.push(tx);
            }
        }

        Ok(transactions)
    }

    fn update_transaction(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
    ) -> Result<Transaction> {
        let mut transaction = self.get_transaction(id)?.ok_or(StoreError::NotFound)?;
        let old_date = transaction.date;

        patch.apply(&mut transaction);
        transaction.updated_at = chrono::Utc::now();

        let cf_tx = self.cf(cf::TRANSACTIONS)?;
        let cf_by_date = self.cf(cf::TRANSACTIONS_BY_DATE)?;

        let tx_key = keys::transaction_key(id);
        let value = Self::serialize(&transaction)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_tx, &tx_key, &value);
        if transaction.date != old_date {
            batch.delete_cf(&cf_by_date, keys::date_index_key(old_date, id));
            batch.put_cf(&cf_by_date, keys::date_index_key(transaction.date, id), []);
        }

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(transaction)
    }

    fn delete_transaction(&self, id: &TransactionId) -> Result<()> {
        let transaction = self.get_transaction(id)?.ok_or(StoreError::NotFound)?;

        let cf_tx = self.cf(cf::TRANSACTIONS)?;
        let cf_by_date = self.cf(cf::TRANSACTIONS_BY_DATE)?;

        let mut batch = WriteBatch::default();
        batch.delete_cf(&cf_tx, keys::transaction_key(id));
        batch.delete_cf(&cf_by_date, keys::date_index_key(transaction.date, id));

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn transaction_count(&self) -> Result<u64> {
        let cf = self.cf(cf::TRANSACTIONS)?;

        let mut count = 0u64;
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            item.map_err(|e| StoreError::Database(e.to_string()))?;
            count += 1;
        }

        Ok(count)
    }
}
