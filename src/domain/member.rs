use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
    pub joined_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, message = "Member name is required."))]
    pub name: String,
    pub role: Option<String>,
    pub joined_date: NaiveDate,
}
