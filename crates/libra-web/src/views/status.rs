use libra_data::TransactionStatus;

/// Colored badge for a transaction status
pub fn status_badge(status: TransactionStatus) -> String {
    let label = match status {
        TransactionStatus::Income => "Income",
        TransactionStatus::Cost => "Cost",
    };
    format!(
        r#"<span class="status status-{}">{}</span>"#,
        status.as_str(),
        label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_per_status() {
        assert_eq!(
            status_badge(TransactionStatus::Income),
            r#"<span class="status status-income">Income</span>"#
        );
        assert!(status_badge(TransactionStatus::Cost).contains("status-cost"));
    }
}
