use askama::Template;
use axum::response::IntoResponse;
use chrono::Local;

use crate::web::{
    templates::{nav, HtmlTemplate, NavLink},
    Page,
};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: Vec<NavLink>,
    pub server_time: String,
}

pub async fn home_page() -> impl IntoResponse {
    let template = HomeTemplate {
        nav: nav(Page::Home),
        server_time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    HtmlTemplate(template)
}
