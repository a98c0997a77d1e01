use crate::auth::capability;
use crate::errors::AppError;
use crate::models::{CompletionInfo, Course, CourseModule, SectionInfo};
use crate::providers::Scope;
use crate::strings;

use super::context::RenderContext;
use super::formatter::CourseViewFormatter;
use super::view::*;

impl<'a> CourseViewFormatter<'a> {
    /// Activity list for one section, in provider order. While a move is in
    /// progress the moved activity is skipped and "move here" targets are
    /// interleaved before every remaining activity and at the end.
    pub(crate) fn activity_list(
        &self,
        course: &Course,
        section: &SectionInfo,
        modules: &[CourseModule],
        completion: &mut CompletionInfo,
        ctx: &RenderContext,
    ) -> Result<Vec<ActivityItem>, AppError> {
        let moving = ctx.moving();
        let mut items = Vec::new();
        for module in modules {
            if moving.is_some_and(|m| m.id == module.id) {
                continue;
            }
            let Some(view) = self.render_activity(course, module, section, completion, ctx)?
            else {
                continue;
            };
            if let Some(moving) = moving {
                items.push(ActivityItem::MoveTarget(MoveTarget {
                    url: format!(
                        "/course/{}/mod?moveto={}&sesskey={}",
                        course.id, module.id, ctx.sesskey
                    ),
                    title: format!("Move '{}' to this location", moving.name),
                }));
            }
            items.push(ActivityItem::Activity(view));
        }
        if let Some(moving) = moving {
            items.push(ActivityItem::MoveTarget(MoveTarget {
                url: format!(
                    "/course/{}/mod?movetosection={}&sesskey={}",
                    course.id, section.id, ctx.sesskey
                ),
                title: format!("Move '{}' to this location", moving.name),
            }));
        }
        Ok(items)
    }

    /// One activity record, or `None` when the activity does not appear on
    /// the course page at all (invisible and no explanation to show).
    pub(crate) fn render_activity(
        &self,
        course: &Course,
        module: &CourseModule,
        section: &SectionInfo,
        completion: &mut CompletionInfo,
        ctx: &RenderContext,
    ) -> Result<Option<ActivityView>, AppError> {
        if !module.is_visible_on_course_page() {
            return Ok(None);
        }
        let (link_classes, text_classes) = self.activity_classes(module, ctx)?;
        let name = module.url.as_ref().map(|url| ActivityName {
            url: url.clone(),
            title: module.name.clone(),
            inplace_editable: ctx.editing,
            link_classes,
        });
        let after_link = if name.is_some() {
            module.after_link.clone()
        } else {
            None
        };
        // Content with no link (labels) is displayed in place of the name.
        let content_without_link = (module.url.is_none() && !module.content.is_empty())
            .then(|| module.content.clone());
        let move_control = ctx.editing.then(|| Control {
            key: "move".to_string(),
            url: format!(
                "/course/{}/mod?copy={}&sesskey={}",
                course.id, module.id, ctx.sesskey
            ),
            icon: "i/dragdrop".to_string(),
            label: strings::MOVE.to_string(),
            title: format!("{} '{}'", strings::MOVE, module.name),
            data_action: None,
        });
        let edit_actions = if ctx.editing {
            self.module_edit_actions(course, module, ctx)
        } else {
            Vec::new()
        };
        let after_edit_icons = if ctx.editing {
            module.after_edit_icons.clone()
        } else {
            None
        };
        let completion = self.completion_badge(course, module, completion, ctx)?;
        let availability = self.module_availability(module, section, ctx)?;
        Ok(Some(ActivityView {
            id: module.id,
            mod_type: module.mod_type.clone(),
            indent: module.indent,
            move_control,
            name,
            after_link,
            content_without_link,
            text_classes,
            edit_actions,
            after_edit_icons,
            completion,
            availability,
        }))
    }

    /// CSS classes for the activity name and content. Items the viewer can
    /// access but students cannot are dimmed; stealth items get their own
    /// marker class.
    fn activity_classes(
        &self,
        module: &CourseModule,
        ctx: &RenderContext,
    ) -> Result<(String, String), AppError> {
        let mut link_classes = String::new();
        let mut text_classes = String::new();
        if module.user_visible {
            let conditionally_hidden =
                ctx.availability_enabled && !self.availability.available_for_all(module)?;
            let accessible_but_dim = (!module.visible || conditionally_hidden)
                && ctx.has_capability(
                    capability::VIEW_HIDDEN_ACTIVITIES,
                    Scope::Module(module.id),
                );
            if accessible_but_dim {
                link_classes.push_str(" dimmed");
                text_classes.push_str(" dimmed_text");
                if conditionally_hidden {
                    link_classes.push_str(" conditionalhidden");
                    text_classes.push_str(" conditionalhidden");
                }
            }
            if module.stealth {
                link_classes.push_str(" stealth");
                text_classes.push_str(" stealth");
            }
        } else {
            link_classes.push_str(" dimmed");
            text_classes.push_str(" dimmed dimmed_text");
        }
        Ok((link_classes, text_classes))
    }

    fn module_edit_actions(
        &self,
        course: &Course,
        module: &CourseModule,
        ctx: &RenderContext,
    ) -> Vec<Control> {
        if !ctx.has_capability(capability::MANAGE_ACTIVITIES, Scope::Module(module.id)) {
            return Vec::new();
        }
        let base = format!("/course/{}/mod", course.id);
        let sesskey = &ctx.sesskey;
        let mut actions = vec![Control {
            key: "update".to_string(),
            url: format!("{base}?update={}&sesskey={sesskey}", module.id),
            icon: "t/edit".to_string(),
            label: "Edit settings".to_string(),
            title: "Edit settings".to_string(),
            data_action: None,
        }];
        if module.indent > 0 {
            actions.push(Control {
                key: "moveleft".to_string(),
                url: format!("{base}?id={}&indent=-1&sesskey={sesskey}", module.id),
                icon: "t/left".to_string(),
                label: "Move left".to_string(),
                title: "Move left".to_string(),
                data_action: Some("moveleft".to_string()),
            });
        }
        actions.push(Control {
            key: "moveright".to_string(),
            url: format!("{base}?id={}&indent=1&sesskey={sesskey}", module.id),
            icon: "t/right".to_string(),
            label: "Move right".to_string(),
            title: "Move right".to_string(),
            data_action: Some("moveright".to_string()),
        });
        if module.visible {
            actions.push(Control {
                key: "hide".to_string(),
                url: format!("{base}?hide={}&sesskey={sesskey}", module.id),
                icon: "t/hide".to_string(),
                label: "Hide".to_string(),
                title: "Hide".to_string(),
                data_action: Some("hide".to_string()),
            });
        } else {
            actions.push(Control {
                key: "show".to_string(),
                url: format!("{base}?show={}&sesskey={sesskey}", module.id),
                icon: "t/show".to_string(),
                label: "Show".to_string(),
                title: "Show".to_string(),
                data_action: Some("show".to_string()),
            });
        }
        actions.push(Control {
            key: "duplicate".to_string(),
            url: format!("{base}?duplicate={}&sesskey={sesskey}", module.id),
            icon: "t/copy".to_string(),
            label: "Duplicate".to_string(),
            title: "Duplicate".to_string(),
            data_action: Some("duplicate".to_string()),
        });
        actions.push(Control {
            key: "delete".to_string(),
            url: format!("{base}?delete={}&sesskey={sesskey}", module.id),
            icon: "t/delete".to_string(),
            label: "Delete".to_string(),
            title: "Delete".to_string(),
            data_action: Some("delete".to_string()),
        });
        actions
    }
}
