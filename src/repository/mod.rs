use async_trait::async_trait;

use crate::domain::*;
use crate::error::Result;

pub mod announcement_repository;
pub mod event_repository;
pub mod member_repository;
pub mod schema;

pub use announcement_repository::SqliteAnnouncementRepository;
pub use event_repository::SqliteEventRepository;
pub use member_repository::SqliteMemberRepository;

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, new: NewAnnouncement) -> Result<Announcement>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Announcement>>;
    /// All announcements, newest first.
    async fn list(&self) -> Result<Vec<Announcement>>;
    async fn count(&self) -> Result<i64>;
    /// Announcements posted per calendar day, oldest day first.
    async fn count_per_day(&self) -> Result<Vec<DailyCount>>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, new: NewEvent) -> Result<Event>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>>;
    /// All events ordered by date ascending.
    async fn list(&self) -> Result<Vec<Event>>;
    async fn count(&self) -> Result<i64>;
    /// Events scheduled per calendar month, earliest month first.
    async fn count_per_month(&self) -> Result<Vec<MonthlyCount>>;
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, new: NewMember) -> Result<Member>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Member>>;
    /// All members, most recently joined first.
    async fn list(&self) -> Result<Vec<Member>>;
    async fn count(&self) -> Result<i64>;
    /// Members per role, largest group first.
    async fn count_by_role(&self) -> Result<Vec<RoleCount>>;
}
