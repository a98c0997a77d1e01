//! Shared fixtures for course page formatter tests.
//!
//! Every test builds an `InMemoryCourse`, tweaks its records, and runs the
//! formatter through `build_page`. Two well-known users exist: a manager
//! holding every course capability and a student holding none.

#![allow(dead_code)]

use courseview::models::{Course, CourseDisplay, HiddenSections, UserId};
use courseview::providers::memory::{InMemoryCourse, SectionRecord};
use courseview::render::view::{ActivityItem, ActivityView, CoursePage, SectionFull};
use courseview::render::{CourseViewFormatter, MovingActivity, RenderContext};

pub const TEACHER: UserId = 1;
pub const STUDENT: UserId = 101;

pub const ALL_CAPS: &str = "course.update,course.setcurrentsection,\
course.viewhiddenactivities,course.viewhiddensections,course.manageactivities";

pub fn base_course(last_section: u32) -> Course {
    Course {
        id: 7,
        full_name: "Systems Programming 101".to_string(),
        display: CourseDisplay::SinglePage,
        marker: 0,
        hidden_sections: HiddenSections::Collapsed,
        last_section,
        completion_enabled: true,
    }
}

/// Store with the manager/student grants and no sections yet.
pub fn empty_store(course: Course) -> InMemoryCourse {
    let mut store = InMemoryCourse::new(course, STUDENT);
    store.grant(TEACHER, ALL_CAPS);
    store.grant(STUDENT, "");
    store
}

/// General section with a summary, so it renders outside editing mode too.
pub fn general_section() -> SectionRecord {
    let mut section = SectionRecord::new(0, "");
    section.summary = "<p>Welcome to the course.</p>".to_string();
    section
}

/// Store with a summarised section 0 plus sections `1..=last_section` named
/// "Week n", all visible and available.
pub fn base_store(last_section: u32) -> InMemoryCourse {
    let mut store = empty_store(base_course(last_section));
    store.add_section(general_section());
    for index in 1..=last_section {
        store.add_section(SectionRecord::new(index, &format!("Week {index}")));
    }
    store
}

pub fn build_page(store: &InMemoryCourse, user: UserId, editing: bool) -> CoursePage {
    build_page_moving(store, user, editing, None)
}

pub fn build_page_moving(
    store: &InMemoryCourse,
    user: UserId,
    editing: bool,
    moving: Option<MovingActivity>,
) -> CoursePage {
    let course = store.course();
    let ctx = RenderContext {
        user,
        editing,
        sesskey: "testkey".to_string(),
        caps: store,
        availability_enabled: true,
        moving,
        page_url: format!("/course/{}", course.id),
    };
    CourseViewFormatter::new(store, store, store)
        .build_course_page(course, &ctx)
        .expect("build_course_page")
}

/// The full record for a section index; panics when it is not rendered full.
pub fn full_section(page: &CoursePage, index: u32) -> &SectionFull {
    page.sections
        .iter()
        .find(|s| s.index() == index)
        .and_then(|s| s.as_full())
        .unwrap_or_else(|| panic!("no full section record for index {index}"))
}

/// Real activities of a full section, move targets filtered out.
pub fn section_activities(page: &CoursePage, index: u32) -> Vec<&ActivityView> {
    full_section(page, index)
        .modules
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(ActivityItem::as_activity)
        .collect()
}
