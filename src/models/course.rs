use serde::{Deserialize, Serialize};

use super::CourseId;

/// How the course page is split across pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseDisplay {
    /// All sections on one page.
    SinglePage,
    /// One page per section; the course page lists section summaries.
    MultiPage,
}

/// What happens to sections a teacher has hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenSections {
    /// Shown as a collapsed "not available" placeholder.
    Collapsed,
    /// Left out of the page entirely.
    Invisible,
}

/// Course record as the formatter consumes it. Read-only input, resolved
/// fresh per page request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub full_name: String,
    pub display: CourseDisplay,
    /// Index of the highlighted ("current") section; 0 means none.
    pub marker: u32,
    pub hidden_sections: HiddenSections,
    /// Last configured section index. Sections beyond it are orphaned and
    /// only ever rendered as stealth sections.
    pub last_section: u32,
    /// Course-level completion tracking switch.
    pub completion_enabled: bool,
}

impl Course {
    pub fn is_section_current(&self, index: u32) -> bool {
        index != 0 && self.marker == index
    }
}
