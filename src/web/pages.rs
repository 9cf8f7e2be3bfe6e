// src/web/pages.rs
//! Handlers behind the page routes

use anyhow::{Context, Result};
use rocket::fs::TempFile;
use rocket::http::CookieJar;
use tracing::{error, info, warn};

use super::html;
use super::session::SessionProfileStore;
use super::types::{PageResponse, QuizForm, ResumeForm, WebState};
use crate::core::ProfileStore;
use crate::error::{GuideError, QuizError};
use crate::quiz::{QuizEngine, QuizState};
use crate::types::resume::PDF_MEDIA_TYPE;
use crate::types::ResumeFile;
use crate::views::{AdminView, RecommendationView, ResumeSubmission, Route};

async fn read_resume(file: &mut TempFile<'_>) -> Result<ResumeFile> {
    let media_type = file
        .content_type()
        .map(|ct| ct.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    // The sanitized name has no extension
    let stem = file.name().unwrap_or("resume").to_string();
    let file_name = if media_type.starts_with(PDF_MEDIA_TYPE) {
        format!("{}.pdf", stem)
    } else {
        stem
    };

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));
    let content = match file.copy_to(&temp_path).await {
        Ok(()) => tokio::fs::read(&temp_path)
            .await
            .context("Failed to read uploaded file"),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to save uploaded file")),
    };
    // A failed copy can leave a partial file behind
    let _ = tokio::fs::remove_file(&temp_path).await;
    let content = content?;

    Ok(ResumeFile::new(file_name, media_type, content))
}

pub async fn upload_handler(
    form: &mut ResumeForm<'_>,
    jar: &CookieJar<'_>,
    state: &WebState,
) -> PageResponse {
    let store = SessionProfileStore::open(jar, &state.sessions_dir);
    let mut submission = ResumeSubmission::new(&state.client, &store);

    if has_selected_file(&form.resume) {
        let resume = match read_resume(&mut form.resume).await {
            Ok(resume) => resume,
            Err(e) => {
                error!("Failed to process uploaded resume: {:#}", e);
                return PageResponse::page(html::upload_page(Some(
                    "Failed to process uploaded file",
                )));
            }
        };

        if let Err(e) = submission.select(resume) {
            return PageResponse::page(html::upload_page(Some(&e.to_string())));
        }
    }

    match submission.submit().await {
        Ok(outcome) => PageResponse::redirect(outcome.next),
        Err(e) => PageResponse::page(html::upload_page(Some(&e.to_string()))),
    }
}

// An empty file input still posts a part, with no file name and no content
fn has_selected_file(file: &TempFile<'_>) -> bool {
    file.name().is_some() || file.len() > 0
}

fn resume_quiz(confirmed: &str) -> QuizEngine {
    QuizEngine::resume(confirmed).unwrap_or_else(|e| {
        warn!("Restarting quiz, could not replay answers {:?}: {}", confirmed, e);
        QuizEngine::new()
    })
}

pub fn quiz_handler(answers: Option<&str>) -> PageResponse {
    let engine = resume_quiz(answers.unwrap_or_default());
    PageResponse::page(html::quiz_page(&engine, None))
}

pub fn quiz_submit_handler(form: QuizForm, jar: &CookieJar<'_>, state: &WebState) -> PageResponse {
    let mut engine = resume_quiz(form.answers.as_deref().unwrap_or_default());

    if let Some(choice) = form.choice.as_deref() {
        let mut letters = choice.chars();
        let selected = match (letters.next(), letters.next()) {
            (Some(value), None) => engine.select(value),
            _ => Err(QuizError::InvalidOption {
                question: engine.current_question().map(|q| q.id).unwrap_or_default(),
                value: choice.to_string(),
            }),
        };
        if let Err(e) = selected {
            return PageResponse::page(html::quiz_page(&engine, Some(&e.to_string())));
        }
    }

    let advanced = engine.advance().map(|quiz_state| quiz_state.clone());
    let quiz_state = match advanced {
        Ok(quiz_state) => quiz_state,
        Err(e) => return PageResponse::page(html::quiz_page(&engine, Some(&e.to_string()))),
    };

    match quiz_state {
        QuizState::Answering(_) => PageResponse::page(html::quiz_page(&engine, None)),
        QuizState::Complete(personality) => {
            let store = SessionProfileStore::open(jar, &state.sessions_dir);
            match engine.finish(&store) {
                Ok(next) => {
                    info!("Stored personality type {}", personality);
                    PageResponse::redirect(next)
                }
                Err(e) => failure_page(&engine, e),
            }
        }
    }
}

// Validation problems stay on the quiz page, anything else gets the error page
fn failure_page(engine: &QuizEngine, error: GuideError) -> PageResponse {
    if error.is_recoverable() {
        PageResponse::page(html::quiz_page(engine, Some(&error.to_string())))
    } else {
        error!("Failed to store personality type: {}", error);
        PageResponse::page(html::error_page(&error.to_string()))
    }
}

pub async fn dashboard_handler(jar: &CookieJar<'_>, state: &WebState) -> String {
    let store = SessionProfileStore::open(jar, &state.sessions_dir);
    let view = RecommendationView::activate(&state.client, &store).await;
    html::dashboard_page(&view)
}

pub fn reset_handler(jar: &CookieJar<'_>, state: &WebState) -> PageResponse {
    let store = SessionProfileStore::open(jar, &state.sessions_dir);
    if let Err(e) = store.clear() {
        error!("Failed to reset profile: {}", e);
    }
    PageResponse::redirect(Route::Home)
}

pub async fn admin_handler(filter: Option<String>, state: &WebState) -> String {
    let mut view = AdminView::activate(&state.client).await;
    if let Some(filter) = filter {
        view.set_filter(filter);
    }
    html::admin_page(&view)
}
