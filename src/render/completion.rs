use crate::errors::AppError;
use crate::models::{CompletionInfo, CompletionState, CompletionTracking, Course, CourseModule};

use super::context::RenderContext;
use super::formatter::CourseViewFormatter;
use super::view::*;

impl<'a> CourseViewFormatter<'a> {
    /// Completion box for one activity.
    ///
    /// Tracking disabled: a filler in editing mode (keeps the column
    /// aligned), otherwise nothing. Editing mode shows a static icon for the
    /// tracking mode; manual tracking binds a checkbox to the toggle
    /// endpoint; automatic tracking renders a read-only checkbox.
    pub(crate) fn completion_badge(
        &self,
        course: &Course,
        module: &CourseModule,
        completion: &mut CompletionInfo,
        ctx: &RenderContext,
    ) -> Result<CompletionBadge, AppError> {
        if !module.user_visible {
            return Ok(CompletionBadge::None);
        }
        let mode = completion.mode(module)?;
        if mode == CompletionTracking::None {
            return Ok(if ctx.editing {
                CompletionBadge::Filler
            } else {
                CompletionBadge::None
            });
        }
        if ctx.editing {
            let icon = if mode == CompletionTracking::Manual {
                "manual-enabled"
            } else {
                "auto-enabled"
            };
            return Ok(CompletionBadge::Static(StaticBadge {
                icon: icon.to_string(),
                alt: badge_alt(icon, &module.name),
            }));
        }
        let state = completion.state(ctx.user, module)?;
        if mode == CompletionTracking::Manual {
            let icon = match state {
                CompletionState::Incomplete => "manual-n",
                CompletionState::Complete => "manual-y",
                // Pass/fail states are only produced by automatic tracking;
                // nothing to render if one leaks through.
                _ => return Ok(CompletionBadge::None),
            };
            let new_state = if state == CompletionState::Complete {
                CompletionState::Incomplete
            } else {
                CompletionState::Complete
            };
            let prevent_js = ctx.availability_enabled
                && self.availability.completion_value_used(course, module.id)?;
            Ok(CompletionBadge::ManualToggle(ManualToggle {
                icon: icon.to_string(),
                alt: badge_alt(icon, &module.name),
                title: badge_title(icon, &module.name),
                checked: state == CompletionState::Complete,
                module_id: module.id,
                module_name: module.name.clone(),
                new_state: new_state.code(),
                action_url: format!("/course/{}/togglecompletion", course.id),
                sesskey: ctx.sesskey.clone(),
                prevent_js,
            }))
        } else {
            let icon = match state {
                CompletionState::Incomplete => "auto-n",
                CompletionState::Complete => "auto-y",
                CompletionState::CompletePass => "auto-pass",
                CompletionState::CompleteFail => "auto-fail",
            };
            Ok(CompletionBadge::Auto(AutoBadge {
                icon: icon.to_string(),
                alt: badge_alt(icon, &module.name),
                checked: matches!(
                    state,
                    CompletionState::Complete | CompletionState::CompletePass
                ),
            }))
        }
    }
}

fn badge_alt(icon: &str, name: &str) -> String {
    match icon {
        "manual-n" => format!("Not completed: {name}. Select to mark as complete."),
        "manual-y" => format!("Completed: {name}. Select to mark as not complete."),
        "auto-n" => format!("Not completed: {name}"),
        "auto-y" => format!("Completed: {name}"),
        "auto-pass" => format!("Completed: {name} (achieved pass grade)"),
        "auto-fail" => format!("Completed: {name} (did not achieve pass grade)"),
        "manual-enabled" => {
            format!("Students can manually mark the activity as complete: {name}")
        }
        "auto-enabled" => {
            format!("The system marks the activity as complete according to conditions: {name}")
        }
        _ => name.to_string(),
    }
}

fn badge_title(icon: &str, name: &str) -> String {
    match icon {
        "manual-n" => format!("Mark as complete: {name}"),
        "manual-y" => format!("Mark as not complete: {name}"),
        _ => name.to_string(),
    }
}
