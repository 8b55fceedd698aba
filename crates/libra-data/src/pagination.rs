//! Pagination math for the transactions table.

/// Fixed page size of the transactions table
pub const ITEMS_PER_PAGE: u32 = 6;

/// A 1-based page of `ITEMS_PER_PAGE` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    /// Page numbers below 1 are clamped to 1.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// SQL OFFSET
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * ITEMS_PER_PAGE as i64
    }

    /// SQL LIMIT
    pub fn limit(&self) -> i64 {
        ITEMS_PER_PAGE as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Number of pages needed for `count` rows
pub fn total_pages(count: i64) -> u32 {
    if count <= 0 {
        return 0;
    }
    let per_page = ITEMS_PER_PAGE as i64;
    ((count + per_page - 1) / per_page) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Page links for the pagination nav. Up to seven pages are listed in full,
/// longer ranges collapse around the current page.
pub fn generate_pagination(current: u32, total: u32) -> Vec<PageLink> {
    use PageLink::{Ellipsis, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        return vec![Page(1), Page(2), Page(3), Ellipsis, Page(total - 1), Page(total)];
    }
    if current >= total - 2 {
        return vec![Page(1), Page(2), Ellipsis, Page(total - 2), Page(total - 1), Page(total)];
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(total),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), 0);
        assert_eq!(Pagination::new(2).offset(), 6);
        assert_eq!(Pagination::new(5).offset(), 24);
        assert_eq!(Pagination::new(3).limit(), 6);
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0).page, 1);
        assert_eq!(Pagination::default().page, 1);
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn short_ranges_are_listed() {
        assert_eq!(generate_pagination(1, 0), vec![]);
        assert_eq!(generate_pagination(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(generate_pagination(1, 7).len(), 7);
    }

    #[test]
    fn long_ranges_collapse() {
        assert_eq!(
            generate_pagination(2, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            generate_pagination(9, 10),
            vec![Page(1), Page(2), Ellipsis, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            generate_pagination(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }
}
