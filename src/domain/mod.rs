pub mod analytics;
pub mod announcement;
pub mod event;
pub mod member;

pub use analytics::*;
pub use announcement::*;
pub use event::*;
pub use member::*;
