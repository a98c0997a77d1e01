use askama::Template;

use crate::render::view::*;

#[derive(Template)]
#[template(path = "course/page.html")]
pub struct CoursePageTemplate {
    pub app_name: String,
    pub page: CoursePage,
}
