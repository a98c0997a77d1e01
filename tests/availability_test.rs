//! Availability notice tests for activities and section headers.

mod common;

use common::*;
use courseview::providers::memory::{AvailabilityRule, ModuleRecord, SectionRecord};
use courseview::render::view::NoticeKind;

#[test]
fn student_sees_the_restriction_explanation() {
    let mut store = base_store(1);
    let mut restricted = ModuleRecord::new(11, 1, "quiz", "Ownership quiz");
    restricted.available = false;
    restricted.available_info = Some("Available from 1 September 2026".to_string());
    store.add_module(restricted);

    let page = build_page(&store, STUDENT, false);
    let activities = section_activities(&page, 1);
    assert_eq!(activities[0].availability.len(), 1);
    assert_eq!(activities[0].availability[0].kind, NoticeKind::Restricted);
    assert_eq!(
        activities[0].availability[0].text,
        "Available from 1 September 2026"
    );

    println!("[PASS] student_sees_the_restriction_explanation");
}

#[test]
fn manager_sees_hidden_marker_in_visible_section() {
    let mut store = base_store(1);
    let mut hidden = ModuleRecord::new(11, 1, "page", "Draft notes");
    hidden.visible = false;
    store.add_module(hidden);

    let page = build_page(&store, TEACHER, false);
    let activities = section_activities(&page, 1);
    assert!(activities[0]
        .availability
        .iter()
        .any(|n| n.kind == NoticeKind::HiddenFromStudents));

    println!("[PASS] manager_sees_hidden_marker_in_visible_section");
}

#[test]
fn no_hidden_marker_when_the_whole_section_is_hidden() {
    let mut store = empty_store(base_course(2));
    store.add_section(general_section());
    store.add_section(SectionRecord::new(1, "Week 1"));
    let mut hidden_section = SectionRecord::new(2, "Week 2");
    hidden_section.visible = false;
    store.add_section(hidden_section);
    let mut hidden_module = ModuleRecord::new(11, 2, "page", "Draft notes");
    hidden_module.visible = false;
    store.add_module(hidden_module);

    let page = build_page(&store, TEACHER, false);
    let activities = section_activities(&page, 2);
    assert!(activities[0]
        .availability
        .iter()
        .all(|n| n.kind != NoticeKind::HiddenFromStudents));

    println!("[PASS] no_hidden_marker_when_the_whole_section_is_hidden");
}

#[test]
fn stealth_module_gets_its_own_marker() {
    let mut store = base_store(1);
    let mut stealth = ModuleRecord::new(11, 1, "resource", "Legacy slides");
    stealth.stealth = true;
    store.add_module(stealth);

    let page = build_page(&store, TEACHER, false);
    let activities = section_activities(&page, 1);
    assert!(activities[0]
        .availability
        .iter()
        .any(|n| n.kind == NoticeKind::HiddenOnCoursePage));

    println!("[PASS] stealth_module_gets_its_own_marker");
}

#[test]
fn full_condition_info_for_managers_on_visible_modules() {
    let mut store = base_store(1);
    store.add_module(ModuleRecord::new(11, 1, "quiz", "Ownership quiz"));
    store.restrict(
        11,
        AvailabilityRule::GradeAbove {
            item: "Midterm".to_string(),
            percent: 60,
        },
    );

    // Managers get the full description.
    let page = build_page(&store, TEACHER, false);
    let activities = section_activities(&page, 1);
    let full = activities[0]
        .availability
        .iter()
        .find(|n| n.kind == NoticeKind::FullInfo)
        .expect("full info notice");
    assert_eq!(
        full.text,
        "Not available unless: You achieve at least 60% in Midterm"
    );

    // Students never do.
    let page = build_page(&store, STUDENT, false);
    let activities = section_activities(&page, 1);
    assert!(activities[0]
        .availability
        .iter()
        .all(|n| n.kind != NoticeKind::FullInfo));

    println!("[PASS] full_condition_info_for_managers_on_visible_modules");
}

#[test]
fn full_info_on_hidden_modules_requires_editing() {
    // Resolved open question: the notice is emitted only when the module is
    // visible or the page is in editing mode, never emitted-then-hidden.
    let mut store = base_store(1);
    let mut hidden = ModuleRecord::new(11, 1, "quiz", "Ownership quiz");
    hidden.visible = false;
    store.add_module(hidden);
    store.restrict(
        11,
        AvailabilityRule::GroupMember {
            group: "Lab group A".to_string(),
        },
    );

    let page = build_page(&store, TEACHER, false);
    let activities = section_activities(&page, 1);
    assert!(activities[0]
        .availability
        .iter()
        .all(|n| n.kind != NoticeKind::FullInfo));

    let page = build_page(&store, TEACHER, true);
    let activities = section_activities(&page, 1);
    assert!(activities[0]
        .availability
        .iter()
        .any(|n| n.kind == NoticeKind::FullInfo));

    println!("[PASS] full_info_on_hidden_modules_requires_editing");
}

#[test]
fn date_rule_formats_a_readable_description() {
    let mut store = base_store(1);
    store.add_module(ModuleRecord::new(11, 1, "quiz", "Ownership quiz"));
    store.restrict(
        11,
        AvailabilityRule::FromDate(
            chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        ),
    );

    let page = build_page(&store, TEACHER, false);
    let activities = section_activities(&page, 1);
    let full = activities[0]
        .availability
        .iter()
        .find(|n| n.kind == NoticeKind::FullInfo)
        .expect("full info notice");
    assert_eq!(
        full.text,
        "Not available unless: It is on or after 1 September 2026"
    );

    println!("[PASS] date_rule_formats_a_readable_description");
}

#[test]
fn hidden_section_header_is_marked_for_managers() {
    let mut store = empty_store(base_course(1));
    store.add_section(general_section());
    let mut hidden = SectionRecord::new(1, "Week 1");
    hidden.visible = false;
    store.add_section(hidden);

    let page = build_page(&store, TEACHER, false);
    let header = &full_section(&page, 1).header;
    assert!(header.hidden);
    assert!(header
        .availability
        .iter()
        .any(|n| n.kind == NoticeKind::HiddenFromStudents));

    println!("[PASS] hidden_section_header_is_marked_for_managers");
}
