// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::Responder;
use std::path::PathBuf;

use crate::core::ServiceClient;
use crate::views::Route;

pub struct WebState {
    pub client: ServiceClient,
    pub sessions_dir: PathBuf,
}

#[derive(FromForm)]
pub struct ResumeForm<'f> {
    pub resume: TempFile<'f>,
}

#[derive(FromForm)]
pub struct QuizForm {
    /// Answers confirmed on earlier questions, e.g. `IN`
    pub answers: Option<String>,
    pub choice: Option<String>,
}

#[derive(Responder)]
pub enum PageResponse {
    Page(RawHtml<String>),
    Redirect(Redirect),
}

impl PageResponse {
    pub fn page(html: String) -> Self {
        PageResponse::Page(RawHtml(html))
    }

    pub fn redirect(route: Route) -> Self {
        PageResponse::Redirect(Redirect::to(route.path()))
    }
}
