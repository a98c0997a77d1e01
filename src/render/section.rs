use crate::auth::capability;
use crate::errors::AppError;
use crate::models::{CompletionInfo, Course, CourseModule, SectionInfo};
use crate::providers::Scope;
use crate::strings;

use super::availability::section_availability;
use super::context::RenderContext;
use super::formatter::CourseViewFormatter;
use super::view::*;

/// Override seam for per-format section edit controls.
///
/// The base list is shared by every course format; a format splices its own
/// controls in at a named insertion point instead of rebuilding the list.
pub trait SectionControls {
    /// Controls every course format offers on a section.
    fn base_controls(
        &self,
        course: &Course,
        section: &SectionInfo,
        ctx: &RenderContext,
    ) -> Vec<Control> {
        let mut controls = Vec::new();
        if !ctx.has_capability(capability::UPDATE_COURSE, Scope::Course(course.id)) {
            return controls;
        }
        controls.push(Control {
            key: "edit".to_string(),
            url: format!(
                "/course/{}/editsection?id={}&sesskey={}",
                course.id, section.id, ctx.sesskey
            ),
            icon: "t/edit".to_string(),
            label: strings::EDIT_SECTION.to_string(),
            title: strings::EDIT_SECTION.to_string(),
            data_action: None,
        });
        if section.index != 0 {
            if section.visible {
                controls.push(Control {
                    key: "visibility".to_string(),
                    url: format!(
                        "/course/{}?hide={}&sesskey={}",
                        course.id, section.index, ctx.sesskey
                    ),
                    icon: "t/hide".to_string(),
                    label: strings::HIDE_SECTION.to_string(),
                    title: strings::HIDE_SECTION.to_string(),
                    data_action: Some("hide".to_string()),
                });
            } else {
                controls.push(Control {
                    key: "visibility".to_string(),
                    url: format!(
                        "/course/{}?show={}&sesskey={}",
                        course.id, section.index, ctx.sesskey
                    ),
                    icon: "t/show".to_string(),
                    label: strings::SHOW_SECTION.to_string(),
                    title: strings::SHOW_SECTION.to_string(),
                    data_action: Some("show".to_string()),
                });
            }
            controls.push(Control {
                key: "delete".to_string(),
                url: format!(
                    "/course/{}/editsection?id={}&delete=1&sesskey={}",
                    course.id, section.id, ctx.sesskey
                ),
                icon: "t/delete".to_string(),
                label: strings::DELETE_SECTION.to_string(),
                title: strings::DELETE_SECTION.to_string(),
                data_action: None,
            });
        }
        controls
    }

    /// Format-specific controls, spliced in right after the "edit" entry.
    fn format_controls(
        &self,
        _course: &Course,
        _section: &SectionInfo,
        _ctx: &RenderContext,
    ) -> Vec<Control> {
        Vec::new()
    }

    /// Full control list in display order.
    fn section_edit_controls(
        &self,
        course: &Course,
        section: &SectionInfo,
        ctx: &RenderContext,
    ) -> Vec<Control> {
        merge_after_key(
            self.base_controls(course, section, ctx),
            self.format_controls(course, section, ctx),
            "edit",
        )
    }
}

/// The default format adds the section-highlight toggle.
pub struct DefaultFormatControls;

impl SectionControls for DefaultFormatControls {
    fn format_controls(
        &self,
        course: &Course,
        section: &SectionInfo,
        ctx: &RenderContext,
    ) -> Vec<Control> {
        // Never on the general section.
        if section.index == 0
            || !ctx.has_capability(capability::SET_CURRENT_SECTION, Scope::Course(course.id))
        {
            return Vec::new();
        }
        let control = if course.marker == section.index {
            Control {
                key: "highlight".to_string(),
                url: format!("/course/{}?marker=0&sesskey={}", course.id, ctx.sesskey),
                icon: "i/marked".to_string(),
                label: strings::HIGHLIGHT_OFF.to_string(),
                title: strings::MARKED_THIS_TOPIC.to_string(),
                data_action: Some("removemarker".to_string()),
            }
        } else {
            Control {
                key: "highlight".to_string(),
                url: format!(
                    "/course/{}?marker={}&sesskey={}",
                    course.id, section.index, ctx.sesskey
                ),
                icon: "i/marker".to_string(),
                label: strings::HIGHLIGHT.to_string(),
                title: strings::MARK_THIS_TOPIC.to_string(),
                data_action: Some("setmarker".to_string()),
            }
        };
        vec![control]
    }
}

/// Merge `extra` into `base` immediately after the control keyed `key`,
/// preserving base order. When no such key exists, `extra` goes first.
pub fn merge_after_key(base: Vec<Control>, extra: Vec<Control>, key: &str) -> Vec<Control> {
    if extra.is_empty() {
        return base;
    }
    if !base.iter().any(|c| c.key == key) {
        let mut merged = extra;
        merged.extend(base);
        return merged;
    }
    let mut merged = Vec::with_capacity(base.len() + extra.len());
    let mut extra = Some(extra);
    for control in base {
        let at_key = control.key == key;
        merged.push(control);
        if at_key {
            if let Some(extra) = extra.take() {
                merged.extend(extra);
            }
        }
    }
    merged
}

impl<'a> CourseViewFormatter<'a> {
    pub(crate) fn section_header(
        &self,
        course: &Course,
        info: &SectionInfo,
        ctx: &RenderContext,
    ) -> SectionHeader {
        let current = course.is_section_current(info.index);
        let controls = if ctx.editing {
            self.controls.section_edit_controls(course, info, ctx)
        } else {
            Vec::new()
        };
        SectionHeader {
            index: info.index,
            name: info.display_name(),
            current,
            hidden: info.index != 0 && !info.visible,
            current_label: current.then(|| strings::CURRENT_SECTION.to_string()),
            controls,
            availability: section_availability(course, info, ctx),
            summary_html: info.summary.clone(),
        }
    }

    pub(crate) fn full_section(
        &self,
        course: &Course,
        info: &SectionInfo,
        modules: &[CourseModule],
        completion: &mut CompletionInfo,
        ctx: &RenderContext,
    ) -> Result<SectionFull, AppError> {
        let header = self.section_header(course, info, ctx);
        // The general section always lists its activities; the others only
        // when the user may access the section itself.
        let include_modules = info.index == 0 || info.user_visible;
        let modules = if include_modules {
            Some(self.activity_list(course, info, modules, completion, ctx)?)
        } else {
            None
        };
        let add_activity = (include_modules
            && ctx.editing
            && ctx.has_capability(capability::MANAGE_ACTIVITIES, Scope::Course(course.id)))
        .then(|| Control {
            key: "addactivity".to_string(),
            url: format!(
                "/course/{}/modchooser?section={}&sesskey={}",
                course.id, info.index, ctx.sesskey
            ),
            icon: "t/add".to_string(),
            label: strings::ADD_ACTIVITY.to_string(),
            title: strings::ADD_ACTIVITY.to_string(),
            data_action: None,
        });
        Ok(SectionFull {
            header,
            modules,
            add_activity,
        })
    }

    pub(crate) fn section_summary(
        &self,
        course: &Course,
        info: &SectionInfo,
        ctx: &RenderContext,
    ) -> SectionSummary {
        SectionSummary {
            index: info.index,
            name: info.display_name(),
            url: format!("/course/{}/section/{}", course.id, info.index),
            current: course.is_section_current(info.index),
            availability: section_availability(course, info, ctx),
            summary_html: info.summary.clone(),
        }
    }

    pub(crate) fn stealth_section(
        &self,
        course: &Course,
        info: &SectionInfo,
        modules: &[CourseModule],
        completion: &mut CompletionInfo,
        ctx: &RenderContext,
    ) -> Result<SectionStealth, AppError> {
        Ok(SectionStealth {
            index: info.index,
            name: format!("{} (section {})", strings::ORPHANED_ACTIVITIES, info.index),
            modules: self.activity_list(course, info, modules, completion, ctx)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(key: &str) -> Control {
        Control {
            key: key.to_string(),
            url: format!("/{key}"),
            icon: String::new(),
            label: key.to_string(),
            title: key.to_string(),
            data_action: None,
        }
    }

    fn keys(controls: &[Control]) -> Vec<&str> {
        controls.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn merge_inserts_after_edit_key() {
        let base = vec![control("edit"), control("visibility"), control("delete")];
        let merged = merge_after_key(base, vec![control("highlight")], "edit");
        assert_eq!(keys(&merged), ["edit", "highlight", "visibility", "delete"]);
    }

    #[test]
    fn merge_prepends_without_edit_key() {
        let base = vec![control("visibility"), control("delete")];
        let merged = merge_after_key(base, vec![control("highlight")], "edit");
        assert_eq!(keys(&merged), ["highlight", "visibility", "delete"]);
    }

    #[test]
    fn merge_with_no_extras_keeps_base() {
        let base = vec![control("edit"), control("delete")];
        let merged = merge_after_key(base, Vec::new(), "edit");
        assert_eq!(keys(&merged), ["edit", "delete"]);
    }
}
