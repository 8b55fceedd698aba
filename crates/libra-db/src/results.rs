use libra_data::QueryError;

/// Log a driver error and turn it into a `QueryError` carrying `context`.
pub(crate) fn failed(context: &'static str) -> impl FnOnce(sqlx::Error) -> QueryError {
    move |err| {
        tracing::error!(error = %err, "{}", context);
        QueryError::from_sqlx(context, err)
    }
}

/// Wrap a search query for `LIKE ... ESCAPE '\'` as a literal
/// substring match.
pub(crate) fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Fresh id for rows inserted without one
pub(crate) fn new_id(id: &str) -> String {
    if id.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        id.to_string()
    }
}
