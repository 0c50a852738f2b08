use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Announcements posted per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: i64,
}

/// Events scheduled per calendar month ("YYYY-MM").
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MonthlyCount {
    pub month: String,
    pub count: i64,
}

/// Members per role. Empty or missing roles are reported as "Unassigned".
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoleCount {
    pub role: String,
    pub count: i64,
}
