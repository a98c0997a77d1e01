use crate::auth::capability;
use crate::errors::AppError;
use crate::models::{CompletionInfo, Course, CourseDisplay, HiddenSections};
use crate::providers::{AvailabilityEvaluator, CompletionTracker, ModuleInfoProvider, Scope};
use crate::strings;

use super::context::RenderContext;
use super::section::{DefaultFormatControls, SectionControls};
use super::view::*;

static DEFAULT_CONTROLS: DefaultFormatControls = DefaultFormatControls;

/// Builds the course page view model from the collaborator seams.
pub struct CourseViewFormatter<'a> {
    pub(crate) modinfo: &'a dyn ModuleInfoProvider,
    pub(crate) completion: &'a dyn CompletionTracker,
    pub(crate) availability: &'a dyn AvailabilityEvaluator,
    pub(crate) controls: &'a dyn SectionControls,
}

impl<'a> CourseViewFormatter<'a> {
    pub fn new(
        modinfo: &'a dyn ModuleInfoProvider,
        completion: &'a dyn CompletionTracker,
        availability: &'a dyn AvailabilityEvaluator,
    ) -> Self {
        Self::with_controls(modinfo, completion, availability, &DEFAULT_CONTROLS)
    }

    /// Swap in a different section-control strategy (another course format).
    pub fn with_controls(
        modinfo: &'a dyn ModuleInfoProvider,
        completion: &'a dyn CompletionTracker,
        availability: &'a dyn AvailabilityEvaluator,
        controls: &'a dyn SectionControls,
    ) -> Self {
        CourseViewFormatter {
            modinfo,
            completion,
            availability,
            controls,
        }
    }

    /// One synchronous pass over the course: section 0 first, then the
    /// configured sections, then (while editing with update capability) the
    /// orphaned stealth sections and the "add topics" control.
    pub fn build_course_page(
        &self,
        course: &Course,
        ctx: &RenderContext,
    ) -> Result<CoursePage, AppError> {
        let section_infos = self.modinfo.sections(course, ctx.user)?;
        let mut completion_info = CompletionInfo::new(course, self.completion);
        let mut sections = Vec::new();

        for info in &section_infos {
            if info.index == 0 {
                // The general section is rendered a little differently than
                // the others: no placeholder, no summary-only form.
                let modules = self.modinfo.section_modules(course, 0, ctx.user)?;
                if !info.summary.is_empty() || !modules.is_empty() || ctx.editing {
                    sections.push(SectionView::Full(self.full_section(
                        course,
                        info,
                        &modules,
                        &mut completion_info,
                        ctx,
                    )?));
                }
                continue;
            }
            if info.index > course.last_section {
                // Activities in here are orphaned; the section is rendered
                // as stealth below.
                continue;
            }
            // Show the section if the user may access it, OR if it is not
            // available but there is explanatory text to display.
            let show = info.user_visible
                || (info.visible && !info.available && info.has_available_info());
            if !show {
                // Placeholder only when the section is hidden purely by
                // teacher action; the availability system hides its reason.
                if course.hidden_sections == HiddenSections::Collapsed && info.available {
                    sections.push(SectionView::Hidden(SectionHidden {
                        index: info.index,
                        name: info.display_name(),
                    }));
                }
                continue;
            }
            if !ctx.editing && course.display == CourseDisplay::MultiPage {
                sections.push(SectionView::Summary(self.section_summary(course, info, ctx)));
            } else {
                let modules = self.modinfo.section_modules(course, info.index, ctx.user)?;
                sections.push(SectionView::Full(self.full_section(
                    course,
                    info,
                    &modules,
                    &mut completion_info,
                    ctx,
                )?));
            }
        }

        let mut add_sections = None;
        if ctx.editing && ctx.has_capability(capability::UPDATE_COURSE, Scope::Course(course.id)) {
            for info in &section_infos {
                if info.index <= course.last_section {
                    continue;
                }
                let modules = self.modinfo.section_modules(course, info.index, ctx.user)?;
                if modules.is_empty() {
                    continue;
                }
                sections.push(SectionView::Stealth(self.stealth_section(
                    course,
                    info,
                    &modules,
                    &mut completion_info,
                    ctx,
                )?));
            }
            add_sections = Some(Control {
                key: "addsections".to_string(),
                url: format!(
                    "/course/{}/changenumsections?increase=1&sesskey={}",
                    course.id, ctx.sesskey
                ),
                icon: "t/add".to_string(),
                label: strings::ADD_SECTIONS.to_string(),
                title: strings::ADD_SECTIONS.to_string(),
                data_action: None,
            });
        }

        let edit_toggle = if ctx.editing {
            EditToggle {
                url: format!("{}?edit=off&sesskey={}", ctx.page_url, ctx.sesskey),
                label: strings::EDIT_OFF.to_string(),
                turning_on: false,
            }
        } else {
            EditToggle {
                url: format!("{}?edit=on&sesskey={}", ctx.page_url, ctx.sesskey),
                label: strings::EDIT_ON.to_string(),
                turning_on: true,
            }
        };

        let clipboard = ctx.moving().map(|moving| ClipboardView {
            activity_name: moving.name.clone(),
            cancel_url: format!("{}?cancelcopy=true&sesskey={}", ctx.page_url, ctx.sesskey),
        });

        Ok(CoursePage {
            course_id: course.id,
            course_name: course.full_name.clone(),
            editing: ctx.editing,
            heading: strings::PAGE_TITLE.to_string(),
            edit_settings_url: format!("/course/{}/edit", course.id),
            enrol_users_url: format!("/course/{}/participants", course.id),
            edit_toggle,
            show_completion_help: course.completion_enabled,
            clipboard,
            sections,
            add_sections,
        })
    }
}
