use axum::{
    extract::{Query as QueryParams, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use serde::Deserialize;

use libra_data::{
    CardData, CardScope, CostSeries, DailyCost, LatestTransaction, LatestTransactions, Query,
    Summarize,
};

use crate::{routes::parse_date, views, AppState, WebError};

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub book: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// GET /dashboard
async fn overview(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<DashboardParams>,
) -> Result<Html<String>, WebError> {
    let book = params
        .book
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| state.config.default_book.clone());
    let start = parse_date(params.start.as_deref(), "start")?;
    let end = parse_date(params.end.as_deref(), "end")?;
    let scope = CardScope::new(book.clone()).with_range(start, end);

    let data: CardData = state.db.summarize(&scope).await?;
    let costs: Vec<DailyCost> = state.db.query(&CostSeries::new(book)).await?;
    let latest: Vec<LatestTransaction> = state.db.query(&LatestTransactions).await?;

    Ok(Html(views::dashboard::page(&scope, &data, &costs, &latest)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/dashboard", get(overview))
}
