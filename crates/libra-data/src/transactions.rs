use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pagination::Pagination;

/// Number of rows in the latest transactions list
pub const LATEST_TRANSACTIONS_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TransactionStatus {
    Income,
    #[default]
    Cost,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Cost => "cost",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "cost" => Ok(Self::Cost),
            other => Err(format!("unknown transaction status: {}", other)),
        }
    }
}

/// A stored transaction. `amount` is in minor units and never negative;
/// `status` decides whether it counts as income or cost.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub member_id: String,
    pub amount: i64,
    pub status: TransactionStatus,
    pub accountant_book: String,
    pub class: String,
    pub sub_class: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
}

/// Filter for the most recent transactions
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestTransactions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestTransaction {
    pub id: String,
    /// Formatted currency
    pub amount: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub title: String,
    pub accountant_book: String,
}

/// Free text search over transactions, one page at a time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionSearch {
    pub query: String,
    pub page: u32,
}

impl TransactionSearch {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page)
    }
}

/// A transaction joined with its member, as shown in the transactions table
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TransactionsTableRow {
    pub id: String,
    pub amount: i64,
    pub date: NaiveDateTime,
    pub status: TransactionStatus,
    pub title: String,
    pub accountant_book: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip_str() {
        assert_eq!("income".parse::<TransactionStatus>(), Ok(TransactionStatus::Income));
        assert_eq!("cost".parse::<TransactionStatus>(), Ok(TransactionStatus::Cost));
        assert!("Income".parse::<TransactionStatus>().is_err());
        assert_eq!(TransactionStatus::Income.to_string(), "income");
    }

    #[test]
    fn test_search_clamps_page() {
        let search = TransactionSearch::new("rent", 0);
        assert_eq!(search.pagination().page, 1);
        assert_eq!(search.pagination().offset(), 0);
    }
}
