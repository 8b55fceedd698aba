use axum::{
    extract::{Path, Query as QueryParams, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use libra_data::{
    formatting::parse_currency, Delete, Insert, MemberField, MemberFields, Paginate, Query,
    Retrieve, Transaction, TransactionSearch, TransactionStatus, TransactionsTableRow, Update,
};

use crate::{views, AppState, WebError};

const LIST_PATH: &str = "/dashboard/transactions";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    /// Raw page number, anything unparsable means the first page
    pub page: Option<String>,
}

impl SearchParams {
    fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Submitted create or edit form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    pub member_id: String,
    pub amount: String,
    pub status: String,
    pub accountant_book: String,
    pub class: String,
    pub sub_class: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

impl TransactionForm {
    /// Validate the form into a transaction with the given id
    pub fn into_transaction(self, id: String) -> Result<Transaction, WebError> {
        let invalid = |msg: &str| WebError::Validation(msg.to_string());

        let member_id = self.member_id.trim().to_string();
        if member_id.is_empty() {
            return Err(invalid("Please select a member."));
        }
        let amount = parse_currency(&self.amount)
            .filter(|amount| *amount > 0)
            .ok_or_else(|| invalid("Please enter an amount greater than $0."))?;
        let status: TransactionStatus = self
            .status
            .parse()
            .map_err(|_| invalid("Please select a transaction status."))?;
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(invalid("Please enter a title."));
        }
        let accountant_book = self.accountant_book.trim().to_string();
        if accountant_book.is_empty() {
            return Err(invalid("Please enter an accountant book."));
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| invalid("Please enter a valid date."))?;
        let time = match self.time.trim() {
            "" => NaiveTime::MIN,
            time => NaiveTime::parse_from_str(time, "%H:%M")
                .map_err(|_| invalid("Please enter a valid time."))?,
        };

        Ok(Transaction {
            id,
            member_id,
            amount,
            status,
            accountant_book,
            class: self.class.trim().to_string(),
            sub_class: self.sub_class.trim().to_string(),
            title,
            description: self.description.trim().to_string(),
            date: date.and_time(time),
        })
    }
}

/// GET /dashboard/transactions
async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> Result<Html<String>, WebError> {
    let page = params.page();
    let search = TransactionSearch::new(params.query.unwrap_or_default(), page);
    let current = search.pagination().page;

    let rows: Vec<TransactionsTableRow> = state.db.query(&search).await?;
    let total_pages = Paginate::<TransactionsTableRow>::pages(&state.db, &search).await?;

    Ok(Html(views::transactions::page(&search.query, current, total_pages, &rows)))
}

/// GET /dashboard/transactions/create
async fn create_form(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let members: Vec<MemberField> = state.db.query(&MemberFields).await?;
    Ok(Html(views::transactions::form(
        "Create Transaction",
        LIST_PATH,
        &members,
        None,
        &state.config.default_book,
    )))
}

/// POST /dashboard/transactions
async fn create(
    State(state): State<AppState>,
    Form(form): Form<TransactionForm>,
) -> Result<Redirect, WebError> {
    let tx = form.into_transaction(String::new())?;
    let tx = state.db.insert(tx).await?;
    tracing::info!(id = %tx.id, "transaction created");
    Ok(Redirect::to(LIST_PATH))
}

/// GET /dashboard/transactions/{id}/edit
async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let tx: Option<Transaction> = state.db.retrieve(id).await?;
    let tx = tx.ok_or(WebError::NotFound { resource: "transaction" })?;
    let members: Vec<MemberField> = state.db.query(&MemberFields).await?;

    let action = format!("{}/{}/edit", LIST_PATH, urlencoding::encode(&tx.id));
    Ok(Html(views::transactions::form(
        "Edit Transaction",
        &action,
        &members,
        Some(&tx),
        &state.config.default_book,
    )))
}

/// POST /dashboard/transactions/{id}/edit
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<TransactionForm>,
) -> Result<Redirect, WebError> {
    let tx = form.into_transaction(id)?;
    let tx = state.db.update(tx).await?;
    tracing::info!(id = %tx.id, "transaction updated");
    Ok(Redirect::to(LIST_PATH))
}

/// POST /dashboard/transactions/{id}/delete
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, WebError> {
    state
        .db
        .delete(Transaction {
            id: id.clone(),
            ..Default::default()
        })
        .await?;
    tracing::info!(id = %id, "transaction deleted");
    Ok(Redirect::to(LIST_PATH))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(list).post(create))
        .route("/dashboard/transactions/create", get(create_form))
        .route("/dashboard/transactions/{id}/edit", get(edit_form).post(update))
        .route("/dashboard/transactions/{id}/delete", post(delete))
}
