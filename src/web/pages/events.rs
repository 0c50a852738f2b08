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
    domain::{Event, NewEvent},
    error::Result,
    web::{
        state::AppState,
        templates::{nav, HtmlTemplate, NavLink},
        Page,
    },
};

pub struct EventView {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub nav: Vec<NavLink>,
    pub warning: String,
    pub has_events: bool,
    pub upcoming: Vec<EventView>,
    pub past: Vec<EventView>,
}

fn event_view(event: Event) -> EventView {
    EventView {
        name: event.name,
        date: event.date.format("%Y-%m-%d").to_string(),
        time: or_dash(event.time),
        location: or_dash(event.location),
    }
}

/// Splits events into upcoming (date >= today) and past (date < today),
/// preserving the repository's ascending date order in both halves.
pub fn partition_events(events: Vec<Event>, today: NaiveDate) -> (Vec<Event>, Vec<Event>) {
    events.into_iter().partition(|e| e.date >= today)
}

async fn render(state: &AppState, warning: String) -> Result<EventsTemplate> {
    let events = state.event_repo.list().await?;
    let has_events = !events.is_empty();
    let (upcoming, past) = partition_events(events, Local::now().date_naive());

    Ok(EventsTemplate {
        nav: nav(Page::Events),
        warning,
        has_events,
        upcoming: upcoming.into_iter().map(event_view).collect(),
        past: past.into_iter().map(event_view).collect(),
    })
}

pub async fn events_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(HtmlTemplate(render(&state, String::new()).await?))
}

#[derive(Debug, Deserialize)]
pub struct EventForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

pub async fn create_event(
    State(state): State<AppState>,
    Form(form): Form<EventForm>,
) -> Result<Response> {
    let date = match NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            let template =
                render(&state, "Event date must be a valid calendar date.".to_string()).await?;
            return Ok(HtmlTemplate(template).into_response());
        }
    };

    let new = NewEvent {
        name: form.name.trim().to_string(),
        description: optional(&form.description),
        date,
        // Stored as entered; the dashboard makes no promise about time formats.
        time: optional(&form.time),
        location: optional(&form.location),
    };

    if new.validate().is_err() {
        let template = render(&state, "Event name is required.".to_string()).await?;
        return Ok(HtmlTemplate(template).into_response());
    }

    state.event_repo.create(new).await?;

    Ok(Redirect::to(Page::Events.path()).into_response())
}
