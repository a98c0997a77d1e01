//! English UI strings for the course page, collected in one place so the
//! templates and view builders never hard-code user-facing text.

pub const PAGE_TITLE: &str = "Topic outline";

pub const SECTION0_NAME: &str = "General";
pub const SECTION_NAME: &str = "Topic";
pub const CURRENT_SECTION: &str = "This topic";

pub const EDIT_SECTION: &str = "Edit topic";
pub const DELETE_SECTION: &str = "Delete topic";
pub const HIDE_SECTION: &str = "Hide topic";
pub const SHOW_SECTION: &str = "Show topic";
pub const ADD_SECTIONS: &str = "Add topics";
pub const ADD_ACTIVITY: &str = "Add activity or resource";
pub const ORPHANED_ACTIVITIES: &str = "Orphaned activities";

pub const HIGHLIGHT: &str = "Highlight";
pub const HIGHLIGHT_OFF: &str = "Remove highlight";
pub const MARK_THIS_TOPIC: &str = "Highlight this topic as the current topic";
pub const MARKED_THIS_TOPIC: &str = "This topic is highlighted as the current topic";

pub const EDIT_ON: &str = "Turn editing on";
pub const EDIT_OFF: &str = "Turn editing off";

pub const HIDDEN_FROM_STUDENTS: &str = "Hidden from students";
pub const HIDDEN_ON_COURSE_PAGE: &str = "Available but not shown on course page";
pub const NOT_AVAILABLE: &str = "Not available";

pub const MOVE: &str = "Move";
pub const MOVE_HERE: &str = "Move here";
pub const YOUR_PROGRESS: &str = "Your progress";
