use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};

use libra_data::{
    formatting::format_currency, pagination::total_pages, Delete, Insert, LatestTransaction,
    LatestTransactions, Paginate, Query, QueryError, Result, Retrieve, Transaction,
    TransactionSearch, TransactionsTableRow, Update, LATEST_TRANSACTIONS_LIMIT,
};

use crate::{
    results::{contains_pattern, failed, new_id},
    Connection,
};

/// Columns matched by the free text search
const SEARCH_COLUMNS: &[&str] = &[
    "members.name",
    "members.email",
    "CAST(transactions.amount AS TEXT)",
    "transactions.date",
    "transactions.status",
    "transactions.accountant_book",
    "transactions.class",
    "transactions.sub_class",
    "transactions.title",
    "transactions.description",
];

/// Append the search predicate. Rows and page counts share it.
fn push_search(qry: &mut QueryBuilder<'_, Sqlite>, query: &str) {
    let pattern = contains_pattern(query);
    qry.push(" WHERE (");
    for (i, column) in SEARCH_COLUMNS.iter().enumerate() {
        if i > 0 {
            qry.push(" OR ");
        }
        qry.push(*column)
            .push(" LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\'");
    }
    qry.push(")");
}

#[derive(Debug, FromRow)]
struct LatestRow {
    id: String,
    amount: i64,
    name: String,
    image_url: String,
    email: String,
    title: String,
    accountant_book: String,
}

impl From<LatestRow> for LatestTransaction {
    fn from(row: LatestRow) -> Self {
        LatestTransaction {
            id: row.id,
            amount: format_currency(row.amount),
            name: row.name,
            image_url: row.image_url,
            email: row.email,
            title: row.title,
            accountant_book: row.accountant_book,
        }
    }
}

#[async_trait]
impl Query<LatestTransaction> for Connection {
    type Filter = LatestTransactions;

    async fn query(&self, _filter: &Self::Filter) -> Result<Vec<LatestTransaction>> {
        let rows: Vec<LatestRow> = sqlx::query_as(
            r#"
            SELECT
                transactions.id,
                transactions.amount,
                transactions.title,
                transactions.accountant_book,
                members.name,
                members.image_url,
                members.email
            FROM transactions
            JOIN members ON transactions.member_id = members.id
            ORDER BY transactions.date DESC
            LIMIT ?
            "#,
        )
        .bind(LATEST_TRANSACTIONS_LIMIT)
        .fetch_all(self.pool())
        .await
        .map_err(failed("failed to fetch the latest transactions"))?;

        Ok(rows.into_iter().map(LatestTransaction::from).collect())
    }
}

#[async_trait]
impl Query<TransactionsTableRow> for Connection {
    type Filter = TransactionSearch;

    async fn query(&self, filter: &Self::Filter) -> Result<Vec<TransactionsTableRow>> {
        let page = filter.pagination();
        tracing::debug!(query = %filter.query, page = page.page, "fetching transactions");

        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                transactions.id,
                transactions.amount,
                transactions.date,
                transactions.status,
                transactions.title,
                transactions.accountant_book,
                members.name,
                members.email,
                members.image_url
            FROM transactions
            JOIN members ON transactions.member_id = members.id
            "#,
        );
        push_search(&mut qry, &filter.query);
        qry.push(" ORDER BY transactions.date DESC, transactions.id ASC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        qry.build_query_as()
            .fetch_all(self.pool())
            .await
            .map_err(failed("failed to fetch transactions"))
    }
}

#[async_trait]
impl Paginate<TransactionsTableRow> for Connection {
    type Filter = TransactionSearch;

    async fn pages(&self, filter: &Self::Filter) -> Result<u32> {
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT COUNT(*)
            FROM transactions
            JOIN members ON transactions.member_id = members.id
            "#,
        );
        push_search(&mut qry, &filter.query);

        let count: i64 = qry
            .build_query_scalar()
            .fetch_one(self.pool())
            .await
            .map_err(failed("failed to fetch total number of transactions"))?;
        Ok(total_pages(count))
    }
}

#[async_trait]
impl Retrieve<Transaction> for Connection {
    type Key = String;

    async fn retrieve(&self, id: Self::Key) -> Result<Option<Transaction>> {
        sqlx::query_as(
            r#"
            SELECT
                id,
                member_id,
                amount,
                status,
                accountant_book,
                class,
                sub_class,
                title,
                description,
                date
            FROM transactions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(failed("failed to fetch transaction"))
    }
}

#[async_trait]
impl Insert<Transaction> for Connection {
    async fn insert(&self, tx: Transaction) -> Result<Transaction> {
        let id = new_id(&tx.id);
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"INSERT INTO transactions (
                id,
                member_id,
                amount,
                status,
                accountant_book,
                class,
                sub_class,
                title,
                description,
                date
            ) VALUES (
            "#,
        );
        qry.separated(", ")
            .push_bind(&id)
            .push_bind(&tx.member_id)
            .push_bind(tx.amount)
            .push_bind(tx.status)
            .push_bind(&tx.accountant_book)
            .push_bind(&tx.class)
            .push_bind(&tx.sub_class)
            .push_bind(&tx.title)
            .push_bind(&tx.description)
            .push_bind(tx.date);
        qry.push(")")
            .build()
            .execute(self.pool())
            .await
            .map_err(failed("failed to create transaction"))?;

        let tx: Option<Transaction> = self.retrieve(id).await?;
        tx.ok_or_else(|| QueryError::not_found("transaction"))
    }
}

#[async_trait]
impl Update<Transaction> for Connection {
    async fn update(&self, tx: Transaction) -> Result<Transaction> {
        let result = QueryBuilder::<Sqlite>::new("UPDATE transactions SET")
            .push(" member_id = ")
            .push_bind(&tx.member_id)
            .push(", amount = ")
            .push_bind(tx.amount)
            .push(", status = ")
            .push_bind(tx.status)
            .push(", accountant_book = ")
            .push_bind(&tx.accountant_book)
            .push(", class = ")
            .push_bind(&tx.class)
            .push(", sub_class = ")
            .push_bind(&tx.sub_class)
            .push(", title = ")
            .push_bind(&tx.title)
            .push(", description = ")
            .push_bind(&tx.description)
            .push(", date = ")
            .push_bind(tx.date)
            .push(" WHERE id = ")
            .push_bind(&tx.id)
            .build()
            .execute(self.pool())
            .await
            .map_err(failed("failed to update transaction"))?;
        if result.rows_affected() == 0 {
            return Err(QueryError::not_found("transaction"));
        }

        let updated: Option<Transaction> = self.retrieve(tx.id).await?;
        updated.ok_or_else(|| QueryError::not_found("transaction"))
    }
}

#[async_trait]
impl Delete<Transaction> for Connection {
    async fn delete(&self, tx: Transaction) -> Result<()> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(&tx.id)
            .execute(self.pool())
            .await
            .map_err(failed("failed to delete transaction"))?;
        if result.rows_affected() == 0 {
            return Err(QueryError::not_found("transaction"));
        }
        Ok(())
    }
}
