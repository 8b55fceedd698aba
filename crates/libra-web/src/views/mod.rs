//! HTML rendering
//!
//! Views are plain functions from fetched rows to markup. All user
//! supplied text goes through `escape`.

use std::fmt;

use axum::http::StatusCode;

pub mod dashboard;
pub mod members;
pub mod status;
pub mod transactions;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111827; background: #f9fafb; }
nav { display: flex; gap: 1.5rem; padding: 1rem 1.5rem; background: #1e3a8a; }
nav a { color: #fff; text-decoration: none; }
main { padding: 1.5rem; max-width: 72rem; margin: 0 auto; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { text-align: left; padding: 0.75rem; border-bottom: 1px solid #e5e7eb; white-space: nowrap; }
.avatar { border-radius: 9999px; vertical-align: middle; margin-right: 0.5rem; }
.card { background: #fff; border-radius: 0.5rem; padding: 1rem; margin-bottom: 0.5rem; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; }
.status { border-radius: 9999px; padding: 0.125rem 0.5rem; font-size: 0.75rem; }
.status-income { background: #22c55e; color: #fff; }
.status-cost { background: #f3f4f6; color: #6b7280; }
.actions { display: flex; justify-content: flex-end; gap: 0.5rem; }
.actions form { margin: 0; }
.bar { background: #3b82f6; height: 0.75rem; border-radius: 0.25rem; }
.pagination { display: flex; gap: 0.25rem; margin-top: 1.25rem; }
.pagination a, .pagination span { padding: 0.25rem 0.75rem; border: 1px solid #e5e7eb; }
.pagination .current { background: #2563eb; color: #fff; }
.error { color: #b91c1c; }
.mobile-only { display: block; }
.desktop-only { display: none; }
@media (min-width: 768px) {
    .mobile-only { display: none; }
    .desktop-only { display: table; }
}
"#;

/// HTML escaped text
pub struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

pub fn escape(text: &str) -> Escaped<'_> {
    Escaped(text)
}

/// Wrap a page body into the document with navigation
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Libra Dashboard</title>
<style>{style}</style>
</head>
<body>
<nav>
<a href="/dashboard">Home</a>
<a href="/dashboard/transactions">Transactions</a>
<a href="/dashboard/members">Members</a>
</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        style = STYLE,
        title = escape(title),
        body = body,
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &format!(
            r#"<p class="error">{}</p><p><a href="/dashboard">Go back</a></p>"#,
            escape(message)
        ),
    )
}
