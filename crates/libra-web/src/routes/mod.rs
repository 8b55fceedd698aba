//! Route handlers, one module per page group

pub mod dashboard;
pub mod health;
pub mod members;
pub mod transactions;

use chrono::NaiveDate;

use crate::WebError;

/// Parse an optional `YYYY-MM-DD` query value. Empty values count as unset.
pub(crate) fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, WebError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| WebError::Validation(format!("invalid {} date: {}", field, v))),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use libra_db::connection::{self, TestHandle};
    use libra_db::Connection;

    use crate::{build_router, AppState, ServerConfig};

    pub async fn app() -> (TestHandle, Connection, Router) {
        let (handle, db) = connection::open_test().await;
        let router = build_router(AppState::new(db.clone(), ServerConfig::default()));
        (handle, db, router)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String, Option<String>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get("location")
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), location)
    }

    pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body, _) = send(app, request).await;
        (status, body)
    }

    /// Post a urlencoded form, returns status, body and redirect location
    pub async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, String, Option<String>) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        send(app, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_dates() {
        assert_eq!(parse_date(None, "start").unwrap(), None);
        assert_eq!(parse_date(Some(""), "start").unwrap(), None);
        assert_eq!(
            parse_date(Some("2024-03-01"), "start").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(parse_date(Some("01/03/2024"), "start").is_err());
    }
}
