//! Financial aggregation over filtered transaction sets.
//!
//! The aggregator is pure: it folds over records the store has already
//! filtered. Summaries feed the balance endpoint; the monthly series feeds
//! the chart endpoint and is always gap-filled to 12 entries.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionKind};

/// Number of buckets in a monthly series.
pub const MONTHS_PER_YEAR: usize = 12;

/// Debit/credit totals and the derived balance over a transaction set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of amounts over debit records.
    pub total_debit: f64,

    /// Sum of amounts over credit records.
    pub total_credit: f64,

    /// `total_credit - total_debit`.
    pub balance: f64,
}

/// Debit/credit totals for one month of a year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Month number, 1 through 12.
    pub month: u32,

    /// Sum of debit amounts in this month.
    pub debit: f64,

    /// Sum of credit amounts in this month.
    pub credit: f64,
}

/// Compute debit/credit totals and the balance over `transactions`.
///
/// An empty set yields exactly `{0, 0, 0}`.
#[must_use]
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_debit = 0.0;
    let mut total_credit = 0.0;

    for tx in transactions {
        match tx.kind {
            TransactionKind::Debit => total_debit += tx.amount,
            TransactionKind::Credit => total_credit += tx.amount,
        }
    }

    Summary {
        total_debit,
        total_credit,
        balance: total_credit - total_debit,
    }
}

/// Bucket `transactions` by month component into exactly 12 entries.
///
/// The input is expected to be restricted to a single year already; only the
/// month component is consulted here. Months with no records appear with
/// zero totals, and the output is strictly ascending by month number.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // month indices are always < 12
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut debits = [0.0_f64; MONTHS_PER_YEAR];
    let mut credits = [0.0_f64; MONTHS_PER_YEAR];

    for tx in transactions {
        // month0() is 0-based and always < 12 for a valid NaiveDate.
        let bucket = tx.date.month0() as usize;
        match tx.kind {
            TransactionKind::Debit => debits[bucket] += tx.amount,
            TransactionKind::Credit => credits[bucket] += tx.amount,
        }
    }

    debits
        .iter()
        .zip(credits.iter())
        .enumerate()
        .map(|(i, (&debit, &credit))| MonthlyTotals {
            month: i as u32 + 1,
            debit,
            credit,
        })
        .collect()
}
