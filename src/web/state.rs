use std::sync::Arc;

use crate::{
    config::Settings,
    repository::{AnnouncementRepository, EventRepository, MemberRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub announcement_repo: Arc<dyn AnnouncementRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub member_repo: Arc<dyn MemberRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        announcement_repo: Arc<dyn AnnouncementRepository>,
        event_repo: Arc<dyn EventRepository>,
        member_repo: Arc<dyn MemberRepository>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            announcement_repo,
            event_repo,
            member_repo,
            settings,
        }
    }
}
