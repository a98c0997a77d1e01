use serde::{Deserialize, Serialize};

use super::ModuleId;

/// One course-module (activity) as seen by the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: ModuleId,
    /// Index of the owning section. Every activity belongs to exactly one.
    pub section: u32,
    /// Activity type tag ("forum", "quiz", "label", ...).
    pub mod_type: String,
    pub name: String,
    /// Link target; activities without a separate page (labels) have none.
    pub url: Option<String>,
    /// Rendered description shown on the course page.
    pub content: String,
    /// Decoration text placed after the activity link (e.g. unread counts).
    pub after_link: Option<String>,
    /// Extra markup appended after the edit actions while editing.
    pub after_edit_icons: Option<String>,
    pub visible: bool,
    /// Visibility AND availability for this user, as computed by the
    /// module-info provider.
    pub user_visible: bool,
    /// Explanation shown to users the activity is restricted for.
    pub available_info: Option<String>,
    pub indent: u32,
    /// Reachable by direct link but excluded from the normal listing;
    /// shown only to users who can manage it.
    pub stealth: bool,
}

impl CourseModule {
    /// Whether the activity appears on the course page at all: either the
    /// user can access it, or it was restricted in a way that leaves an
    /// explanation behind.
    pub fn is_visible_on_course_page(&self) -> bool {
        self.user_visible || self.has_available_info()
    }

    pub fn has_available_info(&self) -> bool {
        self.available_info.as_deref().is_some_and(|s| !s.is_empty())
    }
}
