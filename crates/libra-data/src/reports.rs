use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Length of the rolling cost series, today included
pub const COST_SERIES_DAYS: i64 = 14;

/// Inclusive range of days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Scope of the dashboard cards: always one accountant book,
/// optionally limited to a period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardScope {
    pub accountant_book: String,
    pub period: Option<Period>,
}

impl CardScope {
    pub fn new(accountant_book: impl Into<String>) -> Self {
        Self {
            accountant_book: accountant_book.into(),
            period: None,
        }
    }

    /// Limit the scope to a period. Both ends are needed,
    /// a half open range leaves the scope unlimited.
    pub fn with_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.period = match (start, end) {
            (Some(start), Some(end)) => Some(Period { start, end }),
            _ => None,
        };
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub number_of_members: i64,
    pub number_of_transactions: i64,
    pub total_income: String,
    pub total_cost: String,
}

/// Trailing cost series for a book, ending at `until` (today if unset)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostSeries {
    pub accountant_book: String,
    pub until: Option<NaiveDate>,
}

impl CostSeries {
    pub fn new(accountant_book: impl Into<String>) -> Self {
        Self {
            accountant_book: accountant_book.into(),
            until: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct DailyCost {
    pub date: NaiveDate,
    pub total_cost: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_scope_needs_both_ends() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert!(CardScope::new("Club").with_range(d, None).period.is_none());
        assert!(CardScope::new("Club").with_range(None, d).period.is_none());
        let scope = CardScope::new("Club").with_range(d, d);
        assert_eq!(scope.period.map(|p| p.start), d);
    }
}
