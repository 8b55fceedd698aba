use libra_data::{
    formatting::format_currency, CardData, CardScope, DailyCost, LatestTransaction,
};

use super::escape;

fn card(title: &str, value: &str) -> String {
    format!(
        r#"<div class="card"><h3>{}</h3><p><strong>{}</strong></p></div>"#,
        title,
        escape(value)
    )
}

pub fn cards(data: &CardData) -> String {
    format!(
        r#"<div class="cards">{}{}{}{}</div>"#,
        card("Total Income", &data.total_income),
        card("Total Cost", &data.total_cost),
        card("Total Transactions", &data.number_of_transactions.to_string()),
        card("Total Members", &data.number_of_members.to_string()),
    )
}

/// Horizontal bars, one per day, scaled to the most expensive day
pub fn cost_chart(costs: &[DailyCost]) -> String {
    let max = costs.iter().map(|c| c.total_cost).max().unwrap_or(0).max(1);
    let mut rows = String::new();
    for cost in costs {
        let width = (i128::from(cost.total_cost.max(0)) * 100 / i128::from(max)).min(100);
        rows.push_str(&format!(
            r#"<tr><td>{}</td><td><div class="bar" style="width: {}%"></div></td><td>{}</td></tr>
"#,
            cost.date.format("%b %-d"),
            width,
            format_currency(cost.total_cost)
        ));
    }
    format!(
        r#"<div class="card"><h2>Costs, last {} days</h2><table class="chart">
{}</table></div>
"#,
        costs.len(),
        rows
    )
}

pub fn latest_transactions(latest: &[LatestTransaction]) -> String {
    let mut items = String::new();
    for tx in latest {
        items.push_str(&format!(
            r#"<li><img src="{image}" class="avatar" width="32" height="32" alt="{name}'s profile picture"><span>{name}</span> <small>{email}</small> <span>{title}</span> <small>{book}</small> <strong>{amount}</strong></li>
"#,
            image = escape(&tx.image_url),
            name = escape(&tx.name),
            email = escape(&tx.email),
            title = escape(&tx.title),
            book = escape(&tx.accountant_book),
            amount = escape(&tx.amount),
        ));
    }
    format!(
        r#"<div class="card"><h2>Latest Transactions</h2><ul class="latest">
{}</ul></div>
"#,
        items
    )
}

fn scope_form(scope: &CardScope) -> String {
    let (start, end) = match scope.period {
        Some(period) => (period.start.to_string(), period.end.to_string()),
        None => (String::new(), String::new()),
    };
    format!(
        r#"<form method="get" action="/dashboard">
<label>Accountant Book <input type="text" name="book" value="{}"></label>
<label>From <input type="date" name="start" value="{}"></label>
<label>To <input type="date" name="end" value="{}"></label>
<button type="submit">Apply</button>
</form>
"#,
        escape(&scope.accountant_book),
        start,
        end
    )
}

/// Dashboard overview for one accountant book
pub fn page(
    scope: &CardScope,
    data: &CardData,
    costs: &[DailyCost],
    latest: &[LatestTransaction],
) -> String {
    let body = format!(
        "{}{}{}{}",
        scope_form(scope),
        cards(data),
        cost_chart(costs),
        latest_transactions(latest)
    );
    super::layout("Dashboard", &body)
}
