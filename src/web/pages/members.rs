use askama::Template;
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use validator::Validate;

use super::{optional, or_dash};
use crate::{
    domain::NewMember,
    error::Result,
    web::{
        state::AppState,
        templates::{nav, HtmlTemplate, NavLink},
        Page,
    },
};

pub struct MemberView {
    pub name: String,
    pub role: String,
    pub joined: String,
}

#[derive(Template)]
#[template(path = "members.html")]
pub struct MembersTemplate {
    pub nav: Vec<NavLink>,
    pub warning: String,
    pub members: Vec<MemberView>,
}

async fn render(state: &AppState, warning: String) -> Result<MembersTemplate> {
    let members = state
        .member_repo
        .list()
        .await?
        .into_iter()
        .map(|m| MemberView {
            name: m.name,
            role: or_dash(m.role),
            joined: m.joined_date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(MembersTemplate {
        nav: nav(Page::Members),
        warning,
        members,
    })
}

pub async fn members_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(HtmlTemplate(render(&state, String::new()).await?))
}

#[derive(Debug, Deserialize)]
pub struct MemberForm {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub joined_date: String,
}

pub async fn create_member(
    State(state): State<AppState>,
    Form(form): Form<MemberForm>,
) -> Result<Response> {
    // Blank joined date defaults to today, matching the form widget.
    let joined_date = if form.joined_date.trim().is_empty() {
        Local::now().date_naive()
    } else {
        match NaiveDate::parse_from_str(form.joined_date.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                let template =
                    render(&state, "Joined date must be a valid calendar date.".to_string())
                        .await?;
                return Ok(HtmlTemplate(template).into_response());
            }
        }
    };

    let new = NewMember {
        name: form.name.trim().to_string(),
        role: optional(&form.role),
        joined_date,
    };

    if new.validate().is_err() {
        let template = render(&state, "Member name is required.".to_string()).await?;
        return Ok(HtmlTemplate(template).into_response());
    }

    state.member_repo.create(new).await?;

    Ok(Redirect::to(Page::Members.path()).into_response())
}
