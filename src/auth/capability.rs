//! Capability codes checked while assembling the course page.
//!
//! A capability gates a view element (control, badge, stealth section), never
//! an error: a viewer without the capability simply does not get the element.

/// Edit course structure: stealth sections, "add topics" control.
pub const UPDATE_COURSE: &str = "course.update";
/// Toggle the course-level "current section" marker.
pub const SET_CURRENT_SECTION: &str = "course.setcurrentsection";
/// See activities that are hidden or restricted for students.
pub const VIEW_HIDDEN_ACTIVITIES: &str = "course.viewhiddenactivities";
/// See sections that are hidden for students.
pub const VIEW_HIDDEN_SECTIONS: &str = "course.viewhiddensections";
/// Add, move and edit activities.
pub const MANAGE_ACTIVITIES: &str = "course.manageactivities";

/// Wrapper around capability codes with a `has()` method, mirroring the
/// session permission set used elsewhere in the application.
#[derive(Debug, Clone, Default)]
pub struct Capabilities(pub Vec<String>);

impl Capabilities {
    pub fn has(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    pub fn from_csv(csv: &str) -> Self {
        let codes = csv
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Capabilities(codes)
    }
}
