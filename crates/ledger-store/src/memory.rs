//! In-memory storage implementation.
//!
//! `MemoryStore` implements the same contract as `RocksStore` (including
//! date-ascending list order) without touching disk, so core and service
//! logic can be tested against a fake.

use std::collections::HashMap;
use std::sync::Mutex;

use ledger_core::{PeriodFilter, Transaction, TransactionId, TransactionPatch};

use crate::error::{Result, StoreError};
use crate::Store;

/// In-memory storage backed by a mutex-held map.
#[derive(Default)]
pub struct MemoryStore {
    transactions: Mutex<HashMap<TransactionId, Transaction>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn put_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut map = self.transactions.lock().expect("transaction map poisoned");
        map.insert(transaction.id, transaction.clone());
        Ok(())
    }

    fn get_transaction(&self, id: &TransactionId) -> Result<Option<Transaction>> {
        let map = self.transactions.lock().expect("transaction map poisoned");
        Ok(map.get(id).cloned())
    }

    fn list_transactions(&self, filter: &PeriodFilter) -> Result<Vec<Transaction>> {
        let map = self.transactions.lock().expect("transaction map poisoned");
        let mut matching: Vec<Transaction> = map
            .values()
            .filter(|tx| filter.matches(tx.date))
            .cloned()
            .collect();
        // Same default order as the date index: date, then time-ordered id.
        matching.sort_by_key(|tx| (tx.date, tx.id));
        Ok(matching)
    }

    fn update_transaction(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
    ) -> Result<Transaction> {
        let mut map = self.transactions.lock().expect("transaction map poisoned");
        let transaction = map.get_mut(id).ok_or(StoreError::NotFound)?;
        patch.apply(transaction);
        transaction.updated_at = chrono::Utc::now();
        Ok(transaction.clone())
    }

    fn delete_transaction(&self, id: &TransactionId) -> Result<()> {
        let mut map = self.transactions.lock().expect("transaction map poisoned");
        map.remove(id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    fn transaction_count(&self) -> Result<u64> {
        let map = self.transactions.lock().expect("transaction map poisoned");
        Ok(map.len() as u64)
    }
}
