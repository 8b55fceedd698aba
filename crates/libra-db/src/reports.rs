use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use libra_data::{
    datetime, formatting::format_currency, CardData, CardScope, CostSeries, DailyCost, Query,
    Result, Summarize, COST_SERIES_DAYS,
};

use crate::{results::failed, Connection};

/// Start a query over the transactions of a card scope
fn scoped<'q>(select: &str, scope: &'q CardScope) -> QueryBuilder<'q, Sqlite> {
    let mut qry = QueryBuilder::<Sqlite>::new(select);
    qry.push(" FROM transactions WHERE accountant_book = ")
        .push_bind(&scope.accountant_book);
    if let Some(period) = scope.period {
        qry.push(" AND DATE(date) BETWEEN ")
            .push_bind(period.start)
            .push(" AND ")
            .push_bind(period.end);
    }
    qry
}

#[async_trait]
impl Summarize<CardData> for Connection {
    type Scope = CardScope;

    async fn summarize(&self, scope: &Self::Scope) -> Result<CardData> {
        tracing::debug!(book = %scope.accountant_book, period = ?scope.period, "fetching card data");

        let mut count_qry = scoped("SELECT COUNT(*)", scope);
        let mut sums_qry = scoped(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN status = 'income' THEN amount ELSE 0 END), 0) AS income,
                COALESCE(SUM(CASE WHEN status = 'cost' THEN amount ELSE 0 END), 0) AS cost
            "#,
            scope,
        );

        let members = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
            .fetch_one(self.pool());
        let transactions = count_qry.build_query_scalar::<i64>().fetch_one(self.pool());
        let sums = sums_qry
            .build_query_as::<(i64, i64)>()
            .fetch_one(self.pool());

        // Independent queries, the first failure wins
        let (number_of_members, number_of_transactions, (income, cost)) =
            tokio::try_join!(members, transactions, sums).map_err(failed("failed to fetch card data"))?;

        Ok(CardData {
            number_of_members,
            number_of_transactions,
            total_income: format_currency(income),
            total_cost: format_currency(cost),
        })
    }
}

#[async_trait]
impl Query<DailyCost> for Connection {
    type Filter = CostSeries;

    async fn query(&self, filter: &Self::Filter) -> Result<Vec<DailyCost>> {
        let until = filter.until.unwrap_or_else(datetime::today);
        let first_day = datetime::trailing_days(until, COST_SERIES_DAYS)
            .first()
            .copied()
            .unwrap_or(until);

        sqlx::query_as(
            r#"
            WITH RECURSIVE dates(day) AS (
                SELECT DATE(?)
                UNION ALL
                SELECT DATE(day, '+1 day')
                FROM dates
                WHERE day < DATE(?)
            )
            SELECT
                dates.day AS date,
                COALESCE(SUM(CASE WHEN transactions.status = 'cost'
                    THEN transactions.amount ELSE 0 END), 0) AS total_cost
            FROM dates
            LEFT JOIN transactions
                ON DATE(transactions.date) = dates.day
                AND transactions.accountant_book = ?
            GROUP BY dates.day
            ORDER BY dates.day ASC
            "#,
        )
        .bind(first_day)
        .bind(until)
        .bind(&filter.accountant_book)
        .fetch_all(self.pool())
        .await
        .map_err(failed("failed to fetch last 14 days costs"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::connection;

    use libra_data::{Insert, Member, Transaction, TransactionStatus};

    fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, 30, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    async fn seed(db: &Connection, member: &Member, book: &str, amount: i64, status: TransactionStatus, date: NaiveDateTime) {
        db.insert(Transaction {
            member_id: member.id.clone(),
            amount,
            status,
            accountant_book: book.to_string(),
            date,
            ..Default::default()
        })
        .await
        .unwrap();
    }

    async fn seed_books(db: &Connection) {
        let amy = db
            .insert(Member {
                name: "Amy".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        db.insert(Member {
            name: "Ben".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

        seed(db, &amy, "Club", 10000, TransactionStatus::Income, at(day(1), 9)).await;
        seed(db, &amy, "Club", 2500, TransactionStatus::Cost, at(day(10), 23)).await;
        seed(db, &amy, "Club", 1200, TransactionStatus::Cost, at(day(20), 8)).await;
        seed(db, &amy, "Garden", 700, TransactionStatus::Cost, at(day(10), 12)).await;
    }

    #[tokio::test]
    async fn test_card_data_whole_book() {
        let (_handle, db) = connection::open_test().await;
        seed_books(&db).await;

        let cards: CardData = db.summarize(&CardScope::new("Club")).await.unwrap();
        assert_eq!(
            cards,
            CardData {
                number_of_members: 2,
                number_of_transactions: 3,
                total_income: "$100.00".to_string(),
                total_cost: "$37.00".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_card_data_period() {
        let (_handle, db) = connection::open_test().await;
        seed_books(&db).await;

        // Both ends are inclusive, late evening included
        let scope = CardScope::new("Club").with_range(Some(day(2)), Some(day(10)));
        let cards: CardData = db.summarize(&scope).await.unwrap();
        assert_eq!(cards.number_of_members, 2);
        assert_eq!(cards.number_of_transactions, 1);
        assert_eq!(cards.total_income, "$0.00");
        assert_eq!(cards.total_cost, "$25.00");
    }

    #[tokio::test]
    async fn test_card_data_empty_book() {
        let (_handle, db) = connection::open_test().await;
        seed_books(&db).await;

        let cards: CardData = db.summarize(&CardScope::new("Unknown")).await.unwrap();
        assert_eq!(cards.number_of_transactions, 0);
        assert_eq!(cards.total_income, "$0.00");
        assert_eq!(cards.total_cost, "$0.00");
    }

    #[tokio::test]
    async fn test_card_data_connection_failure() {
        let (_handle, db) = connection::open_test().await;
        db.close().await;

        let err = db.summarize(&CardScope::new("Club")).await.unwrap_err();
        assert!(matches!(err, libra_data::QueryError::ConnectionFailure { .. }), "{:?}", err);
        assert_eq!(err.to_string(), "failed to fetch card data: database unavailable");
    }

    #[tokio::test]
    async fn test_cost_series() {
        let (_handle, db) = connection::open_test().await;
        seed_books(&db).await;

        let series: Vec<DailyCost> = db
            .query(&CostSeries {
                accountant_book: "Club".to_string(),
                until: Some(day(14)),
            })
            .await
            .unwrap();

        let days: Vec<NaiveDate> = series.iter().map(|c| c.date).collect();
        assert_eq!(days, datetime::trailing_days(day(14), COST_SERIES_DAYS));
        assert_eq!(days[0], day(1));

        for cost in &series {
            let expected = if cost.date == day(10) { 2500 } else { 0 };
            assert_eq!(cost.total_cost, expected, "{}", cost.date);
        }
    }

    #[tokio::test]
    async fn test_cost_series_crosses_month_end() {
        let (_handle, db) = connection::open_test().await;
        seed_books(&db).await;

        let series: Vec<DailyCost> = db
            .query(&CostSeries {
                accountant_book: "Club".to_string(),
                until: Some(day(5)),
            })
            .await
            .unwrap();

        assert_eq!(series.len(), 14);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 2, 21).unwrap());
        assert_eq!(series[8].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(series[13].date, day(5));
        assert!(series.iter().all(|c| c.total_cost == 0));
    }

    #[tokio::test]
    async fn test_cost_series_defaults_to_today() {
        let (_handle, db) = connection::open_test().await;

        let series: Vec<DailyCost> = db.query(&CostSeries::new("Club")).await.unwrap();
        assert_eq!(series.len(), 14);
        assert_eq!(series[13].date, datetime::today());
        assert!(series.iter().all(|c| c.total_cost == 0));
    }
}
