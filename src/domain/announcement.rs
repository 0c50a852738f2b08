use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Announcements are immutable once posted; there is no update request type.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewAnnouncement {
    #[validate(length(min = 1, message = "Title and content cannot be empty."))]
    pub title: String,
    #[validate(length(min = 1, message = "Title and content cannot be empty."))]
    pub content: String,
}
