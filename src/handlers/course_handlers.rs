use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::{session, sesskey};
use crate::errors::{render, AppError};
use crate::render::{CourseViewFormatter, MovingActivity, RenderContext};
use crate::templates_structs::CoursePageTemplate;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub edit: Option<String>,
    pub sesskey: Option<String>,
}

/// Redirect the landing page to the seeded course.
pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("/course/{}", state.store.course().id)))
        .finish()
}

/// The course page itself.
pub async fn view(
    path: web::Path<i64>,
    query: web::Query<ViewQuery>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let course_id = path.into_inner();
    let store = &state.store;
    let course = store.course();
    if course.id != course_id {
        return Err(AppError::NotFound);
    }

    let key = sesskey::get_or_create(&session);

    // Edit-mode toggle; a bad or missing session key ignores the request
    // rather than failing the page.
    if let Some(edit) = query.edit.as_deref() {
        if query
            .sesskey
            .as_deref()
            .is_some_and(|submitted| sesskey::validate(&session, submitted))
        {
            session::set_editing(&session, edit == "on");
        }
    }
    let editing = session::is_editing(&session);

    let user = session::get_user_id(&session).unwrap_or(store.default_user());
    let moving = session::moving_activity(&session).and_then(|id| {
        store.module_name(id).map(|name| MovingActivity {
            id,
            name: name.to_string(),
        })
    });

    let ctx = RenderContext {
        user,
        editing,
        sesskey: key,
        caps: store,
        availability_enabled: state.availability_enabled,
        moving,
        page_url: format!("/course/{}", course.id),
    };
    let formatter = CourseViewFormatter::new(store, store, store);
    let page = formatter.build_course_page(course, &ctx)?;

    let tmpl = CoursePageTemplate {
        app_name: state.app_name.clone(),
        page,
    };
    render(tmpl)
}
