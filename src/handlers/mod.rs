pub mod course_handlers;

use crate::providers::memory::InMemoryCourse;

/// Application state shared by all handlers.
pub struct AppState {
    pub store: InMemoryCourse,
    pub app_name: String,
    /// Site-wide conditional-availability switch.
    pub availability_enabled: bool,
}
