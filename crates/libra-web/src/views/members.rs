use libra_data::MembersTableRow;

use super::escape;

fn search_form(query: &str) -> String {
    format!(
        r#"<form method="get" action="/dashboard/members">
<input type="search" name="query" value="{}" placeholder="Search members...">
<button type="submit">Search</button>
</form>
"#,
        escape(query)
    )
}

pub fn members_table(members: &[MembersTableRow]) -> String {
    let mut rows = String::new();
    for member in members {
        rows.push_str(&format!(
            r#"<tr>
<td><img src="{image}" class="avatar" width="28" height="28" alt="{name}'s profile picture"><span>{name}</span></td>
<td>{email}</td>
<td>{count}</td>
<td>{cost}</td>
<td>{income}</td>
</tr>
"#,
            image = escape(&member.image_url),
            name = escape(&member.name),
            email = escape(&member.email),
            count = member.total_transactions,
            cost = escape(&member.total_cost),
            income = escape(&member.total_income),
        ));
    }
    format!(
        r#"<table>
<thead>
<tr>
<th scope="col">Name</th>
<th scope="col">Email</th>
<th scope="col">Total Transactions</th>
<th scope="col">Total Cost</th>
<th scope="col">Total Income</th>
</tr>
</thead>
<tbody>
{rows}</tbody>
</table>
"#
    )
}

pub fn page(query: &str, members: &[MembersTableRow]) -> String {
    let body = format!("{}{}", search_form(query), members_table(members));
    super::layout("Members", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aggregates() {
        let html = members_table(&[MembersTableRow {
            id: "m1".into(),
            name: "Amy & Co".into(),
            email: "amy@libra.test".into(),
            image_url: "/members/amy.png".into(),
            total_transactions: 3,
            total_cost: "$17.50".into(),
            total_income: "$100.00".into(),
        }]);
        assert!(html.contains("<span>Amy &amp; Co</span>"));
        assert!(html.contains("<td>3</td>\n<td>$17.50</td>\n<td>$100.00</td>"));
    }
}
