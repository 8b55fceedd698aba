use axum::{
    extract::{Query as QueryParams, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use libra_data::{MemberSearch, MembersTableRow, Query};

use crate::{views, AppState, WebError};

#[derive(Debug, Default, Deserialize)]
pub struct MemberParams {
    pub query: Option<String>,
}

/// GET /dashboard/members
async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<MemberParams>,
) -> Result<Html<String>, WebError> {
    let search = MemberSearch::new(params.query.unwrap_or_default());
    let members: Vec<MembersTableRow> = state.db.query(&search).await?;
    Ok(Html(views::members::page(&search.query, &members)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard/members", get(list))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::NaiveDate;

    use libra_data::{Insert, Member, Transaction, TransactionStatus};

    use crate::routes::testing;

    #[tokio::test]
    async fn lists_members_with_totals() {
        let (_handle, db, app) = testing::app().await;
        let amy = db
            .insert(Member {
                name: "Amy Burns".to_string(),
                email: "amy@libra.test".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        db.insert(Member {
            name: "Ben Cole".to_string(),
            email: "ben@libra.test".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
        db.insert(Transaction {
            member_id: amy.id.clone(),
            amount: 250000,
            status: TransactionStatus::Income,
            accountant_book: "General".to_string(),
            title: "Grant".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            ..Default::default()
        })
        .await
        .unwrap();

        let (status, body) = testing::get(&app, "/dashboard/members").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<span>Amy Burns</span>"));
        assert!(body.contains("<span>Ben Cole</span>"));
        assert!(body.contains("<td>1</td>\n<td>$0.00</td>\n<td>$2,500.00</td>"));
        assert!(body.contains("<td>0</td>\n<td>$0.00</td>\n<td>$0.00</td>"));

        let (status, body) = testing::get(&app, "/dashboard/members?query=COLE").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("Amy Burns"));
        assert!(body.contains("<span>Ben Cole</span>"));
        assert!(body.contains(r#"value="COLE""#));
    }
}
