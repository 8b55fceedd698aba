use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};

use libra_data::{
    formatting::format_currency, Insert, Member, MemberField, MemberFields, MemberSearch,
    MembersTableRow, Query, QueryError, Result, Retrieve, MEMBER_FIELDS_LIMIT,
};

use crate::{
    results::{contains_pattern, failed, new_id},
    Connection,
};

/// Aggregated member row before currency formatting
#[derive(Debug, FromRow)]
struct MemberTotals {
    id: String,
    name: String,
    email: String,
    image_url: String,
    total_transactions: i64,
    total_cost: i64,
    total_income: i64,
}

impl From<MemberTotals> for MembersTableRow {
    fn from(m: MemberTotals) -> Self {
        MembersTableRow {
            id: m.id,
            name: m.name,
            email: m.email,
            image_url: m.image_url,
            total_transactions: m.total_transactions,
            total_cost: format_currency(m.total_cost),
            total_income: format_currency(m.total_income),
        }
    }
}

#[async_trait]
impl Query<MemberField> for Connection {
    type Filter = MemberFields;

    async fn query(&self, _filter: &Self::Filter) -> Result<Vec<MemberField>> {
        sqlx::query_as(
            r#"
            SELECT
                id,
                name
            FROM members
            ORDER BY name ASC
            LIMIT ?
            "#,
        )
        .bind(MEMBER_FIELDS_LIMIT)
        .fetch_all(self.pool())
        .await
        .map_err(failed("failed to fetch all members"))
    }
}

#[async_trait]
impl Query<MembersTableRow> for Connection {
    type Filter = MemberSearch;

    async fn query(&self, filter: &Self::Filter) -> Result<Vec<MembersTableRow>> {
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                members.id,
                members.name,
                members.email,
                members.image_url,
                COUNT(transactions.id) AS total_transactions,
                COALESCE(SUM(CASE WHEN transactions.status = 'cost'
                    THEN transactions.amount ELSE 0 END), 0) AS total_cost,
                COALESCE(SUM(CASE WHEN transactions.status = 'income'
                    THEN transactions.amount ELSE 0 END), 0) AS total_income
            FROM members
            LEFT JOIN transactions ON members.id = transactions.member_id
            WHERE members.name LIKE "#,
        );
        qry.push_bind(contains_pattern(&filter.query))
            .push(
                r#" ESCAPE '\'
            GROUP BY members.id, members.name, members.email, members.image_url
            ORDER BY members.name ASC
            "#,
            );

        let members: Vec<MemberTotals> = qry
            .build_query_as()
            .fetch_all(self.pool())
            .await
            .map_err(failed("failed to fetch member table"))?;
        Ok(members.into_iter().map(MembersTableRow::from).collect())
    }
}

#[async_trait]
impl Retrieve<Member> for Connection {
    type Key = String;

    async fn retrieve(&self, id: Self::Key) -> Result<Option<Member>> {
        sqlx::query_as(
            r#"
            SELECT
                id,
                name,
                email,
                image_url
            FROM members
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(failed("failed to fetch member"))
    }
}

#[async_trait]
impl Insert<Member> for Connection {
    async fn insert(&self, member: Member) -> Result<Member> {
        let id = new_id(&member.id);
        let mut qry = QueryBuilder::<Sqlite>::new(
            "INSERT INTO members (id, name, email, image_url) VALUES (",
        );
        qry.separated(", ")
            .push_bind(&id)
            .push_bind(&member.name)
            .push_bind(&member.email)
            .push_bind(&member.image_url);
        qry.push(")")
            .build()
            .execute(self.pool())
            .await
            .map_err(failed("failed to create member"))?;

        let member: Option<Member> = self.retrieve(id).await?;
        member.ok_or_else(|| QueryError::not_found("member"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::connection;

    use libra_data::{Transaction, TransactionStatus};

    fn member(name: &str) -> Member {
        Member {
            name: name.to_string(),
            email: format!("{}@libra.test", name.to_lowercase()),
            image_url: format!("/members/{}.png", name.to_lowercase()),
            ..Member::default()
        }
    }

    #[tokio::test]
    async fn test_member_insert() {
        let (_handle, db) = connection::open_test().await;
        let m = db.insert(member("Delba")).await.unwrap();
        assert_eq!(m.id.len(), 36);
        assert_eq!(m.name, "Delba");
        assert_eq!(m.email, "delba@libra.test");
        assert_eq!(m.image_url, "/members/delba.png");

        let found: Option<Member> = db.retrieve(m.id.clone()).await.unwrap();
        assert_eq!(found, Some(m));

        let missing: Option<Member> = db.retrieve("missing-id".to_string()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_member_fields_capped_and_sorted() {
        let (_handle, db) = connection::open_test().await;
        for name in ["Mia", "Lee", "Kai", "Jo", "Ida", "Hal", "Gus", "Fay", "Eve", "Dan", "Cy", "Bo", "Al"] {
            db.insert(member(name)).await.unwrap();
        }

        let fields: Vec<MemberField> = db.query(&MemberFields).await.unwrap();
        assert_eq!(fields.len(), 10);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names[..3], ["Al", "Bo", "Cy"]);
        assert_eq!(names[9], "Jo");
    }

    #[tokio::test]
    async fn test_members_table_aggregates() {
        let (_handle, db) = connection::open_test().await;
        let amy = db.insert(member("Amy")).await.unwrap();
        let ben = db.insert(member("Ben")).await.unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        for (amount, status) in [
            (1500, TransactionStatus::Cost),
            (250, TransactionStatus::Cost),
            (10000, TransactionStatus::Income),
        ] {
            db.insert(Transaction {
                member_id: amy.id.clone(),
                amount,
                status,
                accountant_book: "Club".to_string(),
                date,
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let rows: Vec<MembersTableRow> = db.query(&MemberSearch::default()).await.unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].id, amy.id);
        assert_eq!(rows[0].total_transactions, 3);
        assert_eq!(rows[0].total_cost, "$17.50");
        assert_eq!(rows[0].total_income, "$100.00");

        // Members without transactions still show up
        assert_eq!(rows[1].id, ben.id);
        assert_eq!(rows[1].total_transactions, 0);
        assert_eq!(rows[1].total_cost, "$0.00");
        assert_eq!(rows[1].total_income, "$0.00");
    }

    #[tokio::test]
    async fn test_members_table_name_filter() {
        let (_handle, db) = connection::open_test().await;
        db.insert(member("Lee Robinson")).await.unwrap();
        db.insert(member("Michael Novotny")).await.unwrap();

        let rows: Vec<MembersTableRow> = db.query(&MemberSearch::new("rObIn")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Lee Robinson");

        let rows: Vec<MembersTableRow> = db.query(&MemberSearch::new("%")).await.unwrap();
        assert!(rows.is_empty());
    }
}
