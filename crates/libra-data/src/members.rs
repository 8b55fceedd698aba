use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cap for the member list used in selection widgets
pub const MEMBER_FIELDS_LIMIT: i64 = 10;

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Member id and name, for select boxes
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MemberField {
    pub id: String,
    pub name: String,
}

/// Filter for the capped, alphabetical member list
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberFields;

/// Case-insensitive name search for the members table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberSearch {
    pub query: String,
}

impl MemberSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// A member with transaction aggregates. Sums are display strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembersTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_transactions: i64,
    pub total_cost: String,
    pub total_income: String,
}
