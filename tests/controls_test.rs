//! Section edit-control tests: base list, highlight splice, capabilities.

mod common;

use common::*;
use courseview::providers::memory::SectionRecord;

fn control_keys(page: &courseview::render::view::CoursePage, index: u32) -> Vec<String> {
    full_section(page, index)
        .header
        .controls
        .iter()
        .map(|c| c.key.clone())
        .collect()
}

#[test]
fn highlight_is_spliced_right_after_edit() {
    let store = base_store(2);

    let page = build_page(&store, TEACHER, true);
    assert_eq!(
        control_keys(&page, 1),
        ["edit", "highlight", "visibility", "delete"]
    );

    println!("[PASS] highlight_is_spliced_right_after_edit");
}

#[test]
fn general_section_never_gets_a_highlight() {
    let store = base_store(1);

    let page = build_page(&store, TEACHER, true);
    assert_eq!(control_keys(&page, 0), ["edit"]);

    println!("[PASS] general_section_never_gets_a_highlight");
}

#[test]
fn highlight_alone_is_prepended_without_a_base_list() {
    // A user who may set the marker but not update the course has no base
    // controls; the format control leads the list on its own.
    let mut store = base_store(1);
    let marker_only = 55;
    store.grant(marker_only, "course.setcurrentsection");

    let page = build_page(&store, marker_only, true);
    assert_eq!(control_keys(&page, 1), ["highlight"]);

    println!("[PASS] highlight_alone_is_prepended_without_a_base_list");
}

#[test]
fn marker_state_decides_the_toggle_direction() {
    let mut course = base_course(2);
    course.marker = 2;
    let mut store = empty_store(course);
    store.add_section(general_section());
    store.add_section(SectionRecord::new(1, "Week 1"));
    store.add_section(SectionRecord::new(2, "Week 2"));

    let page = build_page(&store, TEACHER, true);

    let set = full_section(&page, 1)
        .header
        .controls
        .iter()
        .find(|c| c.key == "highlight")
        .unwrap();
    assert!(set.url.contains("marker=1"));
    assert_eq!(set.data_action.as_deref(), Some("setmarker"));
    assert_eq!(set.label, "Highlight");

    let unset = full_section(&page, 2)
        .header
        .controls
        .iter()
        .find(|c| c.key == "highlight")
        .unwrap();
    assert!(unset.url.contains("marker=0"));
    assert_eq!(unset.data_action.as_deref(), Some("removemarker"));
    assert_eq!(unset.label, "Remove highlight");

    println!("[PASS] marker_state_decides_the_toggle_direction");
}

#[test]
fn visibility_toggle_follows_section_state() {
    let mut store = empty_store(base_course(2));
    store.add_section(general_section());
    store.add_section(SectionRecord::new(1, "Week 1"));
    let mut hidden = SectionRecord::new(2, "Week 2");
    hidden.visible = false;
    store.add_section(hidden);

    let page = build_page(&store, TEACHER, true);

    let visible_toggle = full_section(&page, 1)
        .header
        .controls
        .iter()
        .find(|c| c.key == "visibility")
        .unwrap();
    assert!(visible_toggle.url.contains("hide=1"));
    assert_eq!(visible_toggle.label, "Hide topic");

    let hidden_toggle = full_section(&page, 2)
        .header
        .controls
        .iter()
        .find(|c| c.key == "visibility")
        .unwrap();
    assert!(hidden_toggle.url.contains("show=2"));
    assert_eq!(hidden_toggle.label, "Show topic");

    println!("[PASS] visibility_toggle_follows_section_state");
}

#[test]
fn no_controls_outside_editing_mode() {
    let store = base_store(2);

    let page = build_page(&store, TEACHER, false);
    assert!(control_keys(&page, 1).is_empty());

    println!("[PASS] no_controls_outside_editing_mode");
}
