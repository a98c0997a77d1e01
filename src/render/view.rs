//! Plain view records handed to the template layer. The formatter's output
//! ends here; templates only read these, never the domain model.

use serde::Serialize;

use crate::models::{CourseId, ModuleId};

/// The whole course page, sections in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoursePage {
    pub course_id: CourseId,
    pub course_name: String,
    pub editing: bool,
    /// Accessibility heading ("Topic outline").
    pub heading: String,
    pub edit_settings_url: String,
    pub enrol_users_url: String,
    pub edit_toggle: EditToggle,
    pub show_completion_help: bool,
    /// Present while an activity sits on the move clipboard.
    pub clipboard: Option<ClipboardView>,
    pub sections: Vec<SectionView>,
    /// "Add topics" control; editing mode with update capability only.
    pub add_sections: Option<Control>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditToggle {
    pub url: String,
    pub label: String,
    /// True when following the link turns editing on.
    pub turning_on: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipboardView {
    pub activity_name: String,
    pub cancel_url: String,
}

/// One entry in the section list. The variant decides the record shape:
/// a full header with activities, a summary stub, a hidden placeholder, or
/// an orphaned stealth section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SectionView {
    Full(SectionFull),
    Summary(SectionSummary),
    Hidden(SectionHidden),
    Stealth(SectionStealth),
}

impl SectionView {
    pub fn index(&self) -> u32 {
        match self {
            SectionView::Full(s) => s.header.index,
            SectionView::Summary(s) => s.index,
            SectionView::Hidden(s) => s.index,
            SectionView::Stealth(s) => s.index,
        }
    }

    pub fn as_full(&self) -> Option<&SectionFull> {
        match self {
            SectionView::Full(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_stealth(&self) -> Option<&SectionStealth> {
        match self {
            SectionView::Stealth(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_hidden_placeholder(&self) -> bool {
        matches!(self, SectionView::Hidden(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFull {
    pub header: SectionHeader,
    /// Absent when the section is not user-visible (header only).
    pub modules: Option<Vec<ActivityItem>>,
    pub add_activity: Option<Control>,
}

/// Summary-only record used on multi-page courses outside editing mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub index: u32,
    pub name: String,
    /// Link to the single-section page.
    pub url: String,
    pub current: bool,
    pub availability: Vec<AvailabilityNotice>,
    pub summary_html: String,
}

/// Placeholder for a section hidden by teacher action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHidden {
    pub index: u32,
    pub name: String,
}

/// Orphaned section shown to editing managers only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionStealth {
    pub index: u32,
    pub name: String,
    pub modules: Vec<ActivityItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHeader {
    pub index: u32,
    pub name: String,
    pub current: bool,
    /// Styled as hidden (dimmed) for viewers who can still see it.
    pub hidden: bool,
    /// Screen-reader marker text on the current section.
    pub current_label: Option<String>,
    /// Edit controls; empty outside editing mode.
    pub controls: Vec<Control>,
    pub availability: Vec<AvailabilityNotice>,
    pub summary_html: String,
}

/// A single action link (section control, activity edit action, move handle).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    /// Stable key other controls are merged around ("edit", "highlight", ...).
    pub key: String,
    pub url: String,
    pub icon: String,
    pub label: String,
    pub title: String,
    pub data_action: Option<String>,
}

/// Entry of an activity list: a real activity, or a "move here" target while
/// an activity is on the clipboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ActivityItem {
    Activity(ActivityView),
    MoveTarget(MoveTarget),
}

impl ActivityItem {
    pub fn as_activity(&self) -> Option<&ActivityView> {
        match self {
            ActivityItem::Activity(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_move_target(&self) -> bool {
        matches!(self, ActivityItem::MoveTarget(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveTarget {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub id: ModuleId,
    pub mod_type: String,
    pub indent: u32,
    /// Move handle; editing mode only.
    pub move_control: Option<Control>,
    /// Absent when the activity has no link target.
    pub name: Option<ActivityName>,
    /// Decoration after the link; only when a name is shown.
    pub after_link: Option<String>,
    /// Rendered description; only when there is no link target.
    pub content_without_link: Option<String>,
    /// CSS classes for text content (dimmed, stealth, ...).
    pub text_classes: String,
    /// Edit action menu; editing mode only.
    pub edit_actions: Vec<Control>,
    pub after_edit_icons: Option<String>,
    pub completion: CompletionBadge,
    pub availability: Vec<AvailabilityNotice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityName {
    pub url: String,
    pub title: String,
    /// Title editable inline while editing.
    pub inplace_editable: bool,
    pub link_classes: String,
}

/// Completion box next to an activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CompletionBadge {
    /// Tracking disabled, nothing rendered.
    None,
    /// Tracking disabled but the page is in editing mode: keep the column
    /// aligned with a filler.
    Filler,
    /// Editing mode: a static icon describing the tracking mode.
    Static(StaticBadge),
    /// Manual tracking: a checkbox bound to the toggle endpoint.
    ManualToggle(ManualToggle),
    /// Automatic tracking: a read-only checkbox.
    Auto(AutoBadge),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticBadge {
    pub icon: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualToggle {
    pub icon: String,
    pub alt: String,
    pub title: String,
    pub checked: bool,
    pub module_id: ModuleId,
    pub module_name: String,
    /// Wire code of the state posting the toggle switches to.
    pub new_state: u8,
    pub action_url: String,
    pub sesskey: String,
    /// Availability conditions read this state: no client-side toggling.
    pub prevent_js: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoBadge {
    pub icon: String,
    pub alt: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    /// The viewer cannot use the item; the text explains why.
    Restricted,
    /// Staff view of the complete condition set.
    FullInfo,
    /// Hidden by teacher action, visible to staff.
    HiddenFromStudents,
    /// Stealth item, listed for staff only.
    HiddenOnCoursePage,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Restricted => "isrestricted",
            NoticeKind::FullInfo => "isrestricted isfullinfo",
            NoticeKind::HiddenFromStudents => "ishidden",
            NoticeKind::HiddenOnCoursePage => "isstealth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityNotice {
    pub kind: NoticeKind,
    pub text: String,
}
