use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{
    error::Result,
    web::{
        charts,
        state::AppState,
        templates::{nav, HtmlTemplate, NavLink},
        Page,
    },
};

#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub nav: Vec<NavLink>,
    /// Empty string means no data; the template shows a placeholder instead.
    pub announcements_chart: String,
    pub events_chart: String,
    pub roles_chart: String,
}

pub async fn analytics_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let per_day = state.announcement_repo.count_per_day().await?;
    let announcements_chart = if per_day.is_empty() {
        String::new()
    } else {
        let series: Vec<(String, i64)> = per_day
            .into_iter()
            .map(|d| (d.day.format("%Y-%m-%d").to_string(), d.count))
            .collect();
        charts::bar_chart("Announcements per Day", &series)
    };

    let per_month = state.event_repo.count_per_month().await?;
    let events_chart = if per_month.is_empty() {
        String::new()
    } else {
        let series: Vec<(String, i64)> =
            per_month.into_iter().map(|m| (m.month, m.count)).collect();
        charts::line_chart("Events per Month", &series)
    };

    let by_role = state.member_repo.count_by_role().await?;
    let roles_chart = if by_role.is_empty() {
        String::new()
    } else {
        let series: Vec<(String, i64)> = by_role.into_iter().map(|r| (r.role, r.count)).collect();
        charts::pie_chart("Roles Breakdown", &series)
    };

    Ok(HtmlTemplate(AnalyticsTemplate {
        nav: nav(Page::Analytics),
        announcements_chart,
        events_chart,
        roles_chart,
    }))
}
