pub mod analytics;
pub mod announcements;
pub mod events;
pub mod home;
pub mod members;

/// Trims a form field, mapping whitespace-only input to None.
fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Display stand-in for optional table cells.
fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "—".to_string())
}
