use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, middleware, web, App, HttpServer};

use courseview::handlers::{self, AppState};
use courseview::providers::memory::InMemoryCourse;

const COURSE_SEED: &str = include_str!("../data/seed/course.json");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let store = InMemoryCourse::from_seed(COURSE_SEED).expect("Bad course seed JSON");
    log::info!(
        "Seeded course {} \"{}\"",
        store.course().id,
        store.course().full_name
    );

    let state = web::Data::new(AppState {
        store,
        app_name: "Courseview".to_string(),
        availability_enabled: true,
    });

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!("Starting server at http://127.0.0.1:8080");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .route("/", web::get().to(handlers::course_handlers::home))
            .route(
                "/course/{id}",
                web::get().to(handlers::course_handlers::view),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
