//! End-to-end page tests: seeded store, real handler, rendered HTML.

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{test, web, App};
use regex::Regex;

use courseview::handlers::{self, AppState};
use courseview::providers::memory::InMemoryCourse;

const SEED: &str = include_str!("../data/seed/course.json");

fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState {
        store: InMemoryCourse::from_seed(SEED).expect("seed parses"),
        app_name: "Courseview".to_string(),
        availability_enabled: true,
    })
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .wrap(SessionMiddleware::builder(
                    CookieSessionStore::default(),
                    Key::generate(),
                )
                .cookie_secure(false)
                .build())
                .app_data(app_state())
                .route("/", web::get().to(handlers::course_handlers::home))
                .route(
                    "/course/{id}",
                    web::get().to(handlers::course_handlers::view),
                ),
        )
        .await
    };
}

async fn body_of<B>(resp: actix_web::dev::ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[actix_web::test]
async fn course_page_renders_seeded_sections() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/course/7").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let html = body_of(resp).await;
    assert!(html.contains("Systems Programming 101"));
    assert!(html.contains("Getting started"));
    assert!(html.contains("Memory and ownership"));
    // Default viewer is the student: no editing artifacts.
    assert!(html.contains("Turn editing on"));
    assert!(!html.contains("Turn editing off"));
    // The hidden "Concurrency" section collapses to a placeholder.
    assert!(html.contains("Not available"));
    assert!(!html.contains("/mod/resource/view?id=16"));
    // Orphaned section only exists for editing managers.
    assert!(!html.contains("Retired assignment"));

    println!("[PASS] course_page_renders_seeded_sections");
}

#[actix_web::test]
async fn unknown_course_is_a_404() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/course/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    println!("[PASS] unknown_course_is_a_404");
}

#[actix_web::test]
async fn edit_toggle_requires_a_valid_session_key() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/course/7?edit=on&sesskey=bogus")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let html = body_of(resp).await;
    assert!(html.contains("Turn editing on"));
    assert!(!html.contains("Turn editing off"));

    println!("[PASS] edit_toggle_requires_a_valid_session_key");
}

#[actix_web::test]
async fn edit_toggle_works_with_the_session_key() {
    let app = test_app!();

    // First request mints the session key; pick it out of the toggle link.
    let req = test::TestRequest::get().uri("/course/7").to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = resp
        .response()
        .cookies()
        .next()
        .expect("session cookie")
        .into_owned();
    let html = body_of(resp).await;
    let re = Regex::new(r"edit=on&amp;sesskey=([0-9a-f]{64})").unwrap();
    let key = re.captures(&html).expect("toggle link")[1].to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/course/7?edit=on&sesskey={key}"))
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let html = body_of(resp).await;
    assert!(html.contains("Turn editing off"));

    println!("[PASS] edit_toggle_works_with_the_session_key");
}

#[actix_web::test]
async fn root_redirects_to_the_seeded_course() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/course/7"
    );

    println!("[PASS] root_redirects_to_the_seeded_course");
}
