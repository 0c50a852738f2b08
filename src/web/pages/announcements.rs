use askama::Template;
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::NewAnnouncement,
    error::Result,
    web::{
        state::AppState,
        templates::{nav, HtmlTemplate, NavLink},
        Page,
    },
};

pub struct AnnouncementView {
    pub title: String,
    pub content: String,
    pub posted_on: String,
}

#[derive(Template)]
#[template(path = "announcements.html")]
pub struct AnnouncementsTemplate {
    pub nav: Vec<NavLink>,
    pub warning: String,
    pub announcements: Vec<AnnouncementView>,
}

async fn render(state: &AppState, warning: String) -> Result<AnnouncementsTemplate> {
    let announcements = state
        .announcement_repo
        .list()
        .await?
        .into_iter()
        .map(|a| AnnouncementView {
            title: a.title,
            content: a.content,
            posted_on: a.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(AnnouncementsTemplate {
        nav: nav(Page::Announcements),
        warning,
        announcements,
    })
}

pub async fn announcements_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(HtmlTemplate(render(&state, String::new()).await?))
}

#[derive(Debug, Deserialize)]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
}

pub async fn create_announcement(
    State(state): State<AppState>,
    Form(form): Form<AnnouncementForm>,
) -> Result<Response> {
    let new = NewAnnouncement {
        title: form.title.trim().to_string(),
        content: form.content.trim().to_string(),
    };

    if new.validate().is_err() {
        let template = render(&state, "Title and content cannot be empty.".to_string()).await?;
        return Ok(HtmlTemplate(template).into_response());
    }

    state.announcement_repo.create(new).await?;

    // Full re-render by refetch.
    Ok(Redirect::to(Page::Announcements.path()).into_response())
}
