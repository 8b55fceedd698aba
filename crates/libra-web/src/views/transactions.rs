use libra_data::{
    formatting::{format_currency, format_date_time_to_local, format_date_to_local},
    pagination::{generate_pagination, PageLink},
    MemberField, Transaction, TransactionStatus, TransactionsTableRow,
};

use super::{escape, status::status_badge};

fn avatar(image_url: &str, name: &str) -> String {
    format!(
        r#"<img src="{}" class="avatar" width="28" height="28" alt="{}'s profile picture">"#,
        escape(image_url),
        escape(name)
    )
}

fn update_button(id: &str) -> String {
    format!(
        r#"<a href="/dashboard/transactions/{}/edit" class="button">Edit</a>"#,
        urlencoding::encode(id)
    )
}

fn delete_button(id: &str) -> String {
    format!(
        r#"<form action="/dashboard/transactions/{}/delete" method="post"><button type="submit">Delete</button></form>"#,
        urlencoding::encode(id)
    )
}

/// One page of transactions, rendered twice: a card list for narrow
/// screens and a table for wide ones.
pub fn transactions_table(rows: &[TransactionsTableRow]) -> String {
    let mut cards = String::new();
    let mut table_rows = String::new();

    for tx in rows {
        let actions = format!(
            r#"<div class="actions">{}{}</div>"#,
            update_button(&tx.id),
            delete_button(&tx.id)
        );
        cards.push_str(&format!(
            r#"<div class="card">
<div>{avatar}<span>{name}</span></div>
<p>{title}</p>
{status}
<p><strong>{amount}</strong></p>
<p>{date}</p>
{actions}
</div>
"#,
            avatar = avatar(&tx.image_url, &tx.name),
            name = escape(&tx.name),
            title = escape(&tx.title),
            status = status_badge(tx.status),
            amount = format_currency(tx.amount),
            date = format_date_to_local(&tx.date),
            actions = actions,
        ));
        table_rows.push_str(&format!(
            r#"<tr>
<td>{avatar}<span>{name}</span></td>
<td>{amount}</td>
<td>{date}</td>
<td>{status}</td>
<td>{title}</td>
<td>{book}</td>
<td>{actions}</td>
</tr>
"#,
            avatar = avatar(&tx.image_url, &tx.name),
            name = escape(&tx.name),
            amount = format_currency(tx.amount),
            date = format_date_time_to_local(&tx.date),
            status = status_badge(tx.status),
            title = escape(&tx.title),
            book = escape(&tx.accountant_book),
            actions = actions,
        ));
    }

    format!(
        r#"<div class="transactions">
<div class="mobile-only">
{cards}</div>
<table class="desktop-only">
<thead>
<tr>
<th scope="col">Member</th>
<th scope="col">Amount</th>
<th scope="col">Date</th>
<th scope="col">Status</th>
<th scope="col">Title</th>
<th scope="col">Accountant Book</th>
<th scope="col"><span class="sr-only">Edit</span></th>
</tr>
</thead>
<tbody>
{table_rows}</tbody>
</table>
</div>
"#
    )
}

fn page_href(query: &str, page: u32) -> String {
    if query.is_empty() {
        format!("/dashboard/transactions?page={}", page)
    } else {
        format!(
            "/dashboard/transactions?query={}&page={}",
            urlencoding::encode(query),
            page
        )
    }
}

/// Pagination nav keeping the search query
pub fn pagination_nav(query: &str, current: u32, total: u32) -> String {
    if total == 0 {
        return String::new();
    }
    let mut links = String::new();
    if current > 1 {
        links.push_str(&format!(
            r#"<a href="{}" rel="prev">&larr;</a>"#,
            escape(&page_href(query, current - 1))
        ));
    }
    for link in generate_pagination(current, total) {
        match link {
            PageLink::Page(page) if page == current => {
                links.push_str(&format!(r#"<span class="current">{}</span>"#, page));
            }
            PageLink::Page(page) => {
                links.push_str(&format!(
                    r#"<a href="{}">{}</a>"#,
                    escape(&page_href(query, page)),
                    page
                ));
            }
            PageLink::Ellipsis => links.push_str("<span>...</span>"),
        }
    }
    if current < total {
        links.push_str(&format!(
            r#"<a href="{}" rel="next">&rarr;</a>"#,
            escape(&page_href(query, current + 1))
        ));
    }
    format!(r#"<nav class="pagination">{}</nav>"#, links)
}

fn search_form(query: &str) -> String {
    format!(
        r#"<form method="get" action="/dashboard/transactions">
<input type="search" name="query" value="{}" placeholder="Search transactions...">
<button type="submit">Search</button>
<a href="/dashboard/transactions/create" class="button">Create Transaction</a>
</form>
"#,
        escape(query)
    )
}

/// Transactions page: search, table, pagination
pub fn page(query: &str, current: u32, total_pages: u32, rows: &[TransactionsTableRow]) -> String {
    let body = format!(
        "{}{}{}",
        search_form(query),
        transactions_table(rows),
        pagination_nav(query, current, total_pages)
    );
    super::layout("Transactions", &body)
}

fn status_option(current: TransactionStatus, status: TransactionStatus, label: &str) -> String {
    let checked = if current == status { " checked" } else { "" };
    format!(
        r#"<label><input type="radio" name="status" value="{}"{}> {}</label>"#,
        status.as_str(),
        checked,
        label
    )
}

/// Create and edit form. `tx` pre-fills the fields when editing.
pub fn form(
    heading: &str,
    action: &str,
    members: &[MemberField],
    tx: Option<&Transaction>,
    default_book: &str,
) -> String {
    let empty = Transaction {
        accountant_book: default_book.to_string(),
        ..Default::default()
    };
    let tx = tx.unwrap_or(&empty);
    let editing = !tx.id.is_empty();

    let mut options = String::from(r#"<option value="">Select a member</option>"#);
    for member in members {
        let selected = if member.id == tx.member_id { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape(&member.id),
            selected,
            escape(&member.name)
        ));
    }

    let (amount, date, time) = if editing {
        (
            format!("{}.{:02}", tx.amount / 100, tx.amount % 100),
            tx.date.format("%Y-%m-%d").to_string(),
            tx.date.format("%H:%M").to_string(),
        )
    } else {
        (String::new(), String::new(), String::new())
    };

    let body = format!(
        r#"<form method="post" action="{action}">
<label>Member <select name="member_id">{options}</select></label>
<label>Amount (USD) <input type="text" name="amount" value="{amount}" placeholder="Enter USD amount"></label>
<fieldset><legend>Status</legend>{income}{cost}</fieldset>
<label>Title <input type="text" name="title" value="{title}"></label>
<label>Accountant Book <input type="text" name="accountant_book" value="{book}"></label>
<label>Class <input type="text" name="class" value="{class}"></label>
<label>Sub-class <input type="text" name="sub_class" value="{sub_class}"></label>
<label>Description <textarea name="description">{description}</textarea></label>
<label>Date <input type="date" name="date" value="{date}"></label>
<label>Time <input type="time" name="time" value="{time}"></label>
<a href="/dashboard/transactions">Cancel</a>
<button type="submit">{submit}</button>
</form>
"#,
        action = escape(action),
        options = options,
        amount = amount,
        income = status_option(tx.status, TransactionStatus::Income, "Income"),
        cost = status_option(tx.status, TransactionStatus::Cost, "Cost"),
        title = escape(&tx.title),
        book = escape(&tx.accountant_book),
        class = escape(&tx.class),
        sub_class = escape(&tx.sub_class),
        description = escape(&tx.description),
        date = date,
        time = time,
        submit = if editing { "Edit Transaction" } else { "Create Transaction" },
    );
    super::layout(heading, &body)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(id: &str, name: &str) -> TransactionsTableRow {
        TransactionsTableRow {
            id: id.to_string(),
            amount: 15795,
            date: NaiveDate::from_ymd_opt(2023, 12, 6)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
            status: TransactionStatus::Income,
            title: "Ticket <sale>".to_string(),
            accountant_book: "Club".to_string(),
            name: name.to_string(),
            email: "evil@libra.test".to_string(),
            image_url: "/members/evil.png".to_string(),
        }
    }

    #[test]
    fn renders_cards_and_table() {
        let html = transactions_table(&[row("a1", "Evil Rabbit"), row("b2", "Delba")]);

        assert_eq!(html.matches(r#"<div class="card">"#).count(), 2);
        assert_eq!(html.matches("<tr>").count(), 3);

        // Cards use the date, the table the date and time
        assert!(html.contains("<p>Dec 6, 2023</p>"));
        assert!(html.contains("<td>Dec 6, 2023, 9:15 AM</td>"));
        assert_eq!(html.matches("$157.95").count(), 4);
        assert!(html.contains("Ticket &lt;sale&gt;"));
        assert!(!html.contains("<sale>"));
        assert!(html.contains(r#"alt="Evil Rabbit's profile picture""#));
        assert!(html.contains(r#"href="/dashboard/transactions/a1/edit""#));
        assert!(html.contains(r#"action="/dashboard/transactions/b2/delete""#));
    }

    #[test]
    fn escapes_member_names() {
        let html = transactions_table(&[row("c3", "Amy O'Neil")]);
        assert!(html.contains(r#"alt="Amy O&#39;Neil's profile picture""#));
        assert!(html.contains("<span>Amy O&#39;Neil</span>"));
        assert!(!html.contains("Amy O'Neil"));
    }

    #[test]
    fn renders_empty_page() {
        let html = transactions_table(&[]);
        assert!(html.contains("<table"));
        assert!(!html.contains(r#"class="card""#));
    }

    #[test]
    fn pagination_keeps_query() {
        let nav = pagination_nav("rent & fees", 2, 3);
        assert!(nav.contains(r#"href="/dashboard/transactions?query=rent%20%26%20fees&amp;page=1""#));
        assert!(nav.contains(r#"<span class="current">2</span>"#));
        assert!(nav.contains(r#"rel="next""#));
        assert_eq!(pagination_nav("", 1, 0), "");
    }

    #[test]
    fn form_prefills_transaction() {
        let members = vec![
            MemberField { id: "m1".into(), name: "Amy".into() },
            MemberField { id: "m2".into(), name: "Ben".into() },
        ];
        let tx = Transaction {
            id: "t1".into(),
            member_id: "m2".into(),
            amount: 1205,
            status: TransactionStatus::Income,
            accountant_book: "Club".into(),
            title: "Refund".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 4)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap(),
            ..Default::default()
        };
        let html = form("Edit Transaction", "/dashboard/transactions/t1/edit", &members, Some(&tx), "General");
        assert!(html.contains(r#"<option value="m2" selected>Ben</option>"#));
        assert!(html.contains(r#"value="12.05""#));
        assert!(html.contains(r#"value="income" checked"#));
        assert!(html.contains(r#"value="2024-05-04""#));
        assert!(html.contains(r#"value="18:30""#));
        assert!(html.contains(r#"name="accountant_book" value="Club""#));

        let html = form("Create Transaction", "/dashboard/transactions", &members, None, "General");
        assert!(html.contains(r#"name="accountant_book" value="General""#));
        assert!(html.contains(r#"value="cost" checked"#));
        assert!(html.contains("Create Transaction</button>"));
    }
}
