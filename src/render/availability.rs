use crate::auth::capability;
use crate::errors::AppError;
use crate::models::{Course, CourseModule, SectionInfo};
use crate::providers::Scope;
use crate::strings;

use super::context::RenderContext;
use super::formatter::CourseViewFormatter;
use super::view::*;

impl<'a> CourseViewFormatter<'a> {
    /// Availability notices for one activity: the restricted explanation for
    /// students, the hidden/stealth markers for staff, and the full
    /// condition description for staff when the availability subsystem is
    /// enabled. The full-information notice is emitted only when the module
    /// is visible or the page is in editing mode — never emitted-but-hidden.
    pub(crate) fn module_availability(
        &self,
        module: &CourseModule,
        section: &SectionInfo,
        ctx: &RenderContext,
    ) -> Result<Vec<AvailabilityNotice>, AppError> {
        let mut notices = Vec::new();
        if !module.is_visible_on_course_page() {
            return Ok(notices);
        }
        if !module.user_visible {
            // A student who may not use the activity but is allowed to see
            // why ("Available from ...").
            if let Some(info) = module.available_info.as_deref().filter(|s| !s.is_empty()) {
                notices.push(AvailabilityNotice {
                    kind: NoticeKind::Restricted,
                    text: info.to_string(),
                });
            }
            return Ok(notices);
        }
        let can_view_hidden =
            ctx.has_capability(capability::VIEW_HIDDEN_ACTIVITIES, Scope::Module(module.id));
        if can_view_hidden && !module.visible {
            // No marker when the whole section is hidden anyway.
            if section.visible {
                notices.push(AvailabilityNotice {
                    kind: NoticeKind::HiddenFromStudents,
                    text: strings::HIDDEN_FROM_STUDENTS.to_string(),
                });
            }
        } else if module.stealth {
            notices.push(AvailabilityNotice {
                kind: NoticeKind::HiddenOnCoursePage,
                text: strings::HIDDEN_ON_COURSE_PAGE.to_string(),
            });
        }
        if can_view_hidden
            && ctx.availability_enabled
            && (module.visible || ctx.editing)
        {
            if let Some(full) = self.availability.full_information(module)? {
                notices.push(AvailabilityNotice {
                    kind: NoticeKind::FullInfo,
                    text: full,
                });
            }
        }
        Ok(notices)
    }
}

/// Availability notices for a section header or summary record.
pub(crate) fn section_availability(
    course: &Course,
    section: &SectionInfo,
    ctx: &RenderContext,
) -> Vec<AvailabilityNotice> {
    let mut notices = Vec::new();
    if !section.visible {
        if section.index != 0
            && ctx.has_capability(capability::VIEW_HIDDEN_SECTIONS, Scope::Course(course.id))
        {
            notices.push(AvailabilityNotice {
                kind: NoticeKind::HiddenFromStudents,
                text: strings::HIDDEN_FROM_STUDENTS.to_string(),
            });
        }
    } else if !section.available && section.has_available_info() {
        notices.push(AvailabilityNotice {
            kind: NoticeKind::Restricted,
            text: section.available_info.clone().unwrap_or_default(),
        });
    }
    notices
}
