// src/web/mod.rs
//! Rocket front end serving the guidance flow as HTML pages

pub mod html;
pub mod pages;
pub mod session;
pub mod types;

pub use session::SessionProfileStore;
pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Request, Rocket, State};
use tracing::info;

use crate::config::AppConfig;
use crate::views::upload::MAX_RESUME_BYTES;

#[get("/")]
pub fn index() -> RawHtml<String> {
    RawHtml(html::home_page())
}

#[get("/upload")]
pub fn upload_form() -> RawHtml<String> {
    RawHtml(html::upload_page(None))
}

#[post("/upload", data = "<form>")]
pub async fn upload(
    mut form: Form<ResumeForm<'_>>,
    jar: &CookieJar<'_>,
    state: &State<WebState>,
) -> PageResponse {
    pages::upload_handler(&mut form, jar, state).await
}

#[get("/quiz?<answers>")]
pub fn quiz(answers: Option<&str>) -> PageResponse {
    pages::quiz_handler(answers)
}

#[post("/quiz", data = "<form>")]
pub fn quiz_submit(
    form: Form<QuizForm>,
    jar: &CookieJar<'_>,
    state: &State<WebState>,
) -> PageResponse {
    pages::quiz_submit_handler(form.into_inner(), jar, state)
}

#[get("/dashboard")]
pub async fn dashboard(jar: &CookieJar<'_>, state: &State<WebState>) -> RawHtml<String> {
    RawHtml(pages::dashboard_handler(jar, state).await)
}

#[post("/reset")]
pub fn reset(jar: &CookieJar<'_>, state: &State<WebState>) -> PageResponse {
    pages::reset_handler(jar, state)
}

#[get("/admin?<filter>")]
pub async fn admin(filter: Option<String>, state: &State<WebState>) -> RawHtml<String> {
    RawHtml(pages::admin_handler(filter, state).await)
}

#[get("/health")]
pub fn health() -> Json<&'static str> {
    Json("OK")
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> RawHtml<String> {
    RawHtml(html::not_found_page(request.uri().path().as_str()))
}

#[rocket::catch(500)]
pub fn internal_error() -> RawHtml<String> {
    RawHtml(html::error_page("Internal server error"))
}

/// Assemble the application. The admin listing is only mounted when enabled.
pub fn build_rocket(config: &AppConfig) -> Result<Rocket<Build>> {
    let client = config.service_client()?;

    let limits = Limits::default()
        .limit("file", MAX_RESUME_BYTES.bytes())
        .limit("data-form", (MAX_RESUME_BYTES + 1024 * 1024).bytes());
    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("limits", limits));

    let mut rocket = rocket::custom(figment)
        .manage(WebState {
            client,
            sessions_dir: config.sessions_dir(),
        })
        .mount(
            "/",
            routes![
                index,
                upload_form,
                upload,
                quiz,
                quiz_submit,
                dashboard,
                reset,
                health
            ],
        )
        .register("/", catchers![not_found, internal_error]);

    if config.admin_enabled {
        rocket = rocket.mount("/", routes![admin]);
    }

    Ok(rocket)
}

pub async fn start_web_server(config: AppConfig) -> Result<()> {
    info!("Starting career guidance web front end");
    info!("Recommendation service: {}", config.api_base_url);
    info!("Server: http://0.0.0.0:{}", config.port);
    info!("Session profiles: {}", config.sessions_dir().display());
    if config.admin_enabled {
        info!("Admin listing mounted at /admin");
    }

    build_rocket(&config)?
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
