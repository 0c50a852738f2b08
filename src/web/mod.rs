pub mod charts;
pub mod pages;
pub mod state;
pub mod templates;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use state::AppState;

/// The five navigation destinations. Routing and the nav bar are both driven
/// off this enum rather than dispatching on page names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Announcements,
    Events,
    Members,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Announcements,
        Page::Events,
        Page::Members,
        Page::Analytics,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Announcements => "/announcements",
            Page::Events => "/events",
            Page::Members => "/members",
            Page::Analytics => "/analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Announcements => "Announcements",
            Page::Events => "Events",
            Page::Members => "Members",
            Page::Analytics => "Analytics",
        }
    }
}

pub fn create_web_routes(state: AppState) -> Router {
    let mut app = Router::new();

    for page in Page::ALL {
        app = match page {
            Page::Home => app.route(page.path(), get(pages::home::home_page)),
            Page::Announcements => app.route(
                page.path(),
                get(pages::announcements::announcements_page)
                    .post(pages::announcements::create_announcement),
            ),
            Page::Events => app.route(
                page.path(),
                get(pages::events::events_page).post(pages::events::create_event),
            ),
            Page::Members => app.route(
                page.path(),
                get(pages::members::members_page).post(pages::members::create_member),
            ),
            Page::Analytics => app.route(page.path(), get(pages::analytics::analytics_page)),
        };
    }

    app.with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
