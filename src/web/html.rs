// src/web/html.rs
//! Server-rendered HTML for each page

use std::fmt::Write;

use crate::quiz::{QuizEngine, QUESTIONS};
use crate::types::CareerPath;
use crate::views::{home, summary_line, AdminState, AdminView, RecommendationState, RecommendationView, Route};

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, active: Option<Route>, body: &str) -> String {
    let nav = Route::NAVIGATION
        .iter()
        .map(|route| {
            let class = if Some(*route) == active { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"{}\"{}>{}</a>",
                route.path(),
                class,
                escape(route.label())
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title} | {app}</title></head>\n\
         <body>\n<header><a href=\"/\"><strong>{app}</strong></a> <nav>{nav}</nav></header>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
        app = escape(home::APP_NAME),
        nav = nav,
        body = body
    )
}

fn error_alert(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            "<div class=\"alert error\" role=\"alert\"><strong>Error</strong> {}</div>\n",
            escape(message)
        ),
        None => String::new(),
    }
}

pub fn home_page() -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(home::HEADLINE));
    let _ = writeln!(body, "<p>{}</p>", escape(home::TAGLINE));
    let _ = writeln!(
        body,
        "<p><a class=\"button\" href=\"{}\">{}</a></p>",
        home::START_ROUTE.path(),
        escape(home::CALL_TO_ACTION)
    );
    let _ = writeln!(body, "<h2>How It Works</h2>\n<section class=\"features\">");
    for feature in home::FEATURES.iter() {
        let _ = writeln!(
            body,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape(feature.title),
            escape(feature.description)
        );
    }
    let _ = writeln!(body, "</section>");
    layout("Home", Some(Route::Home), &body)
}

pub fn upload_page(error: Option<&str>) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Upload Your Resume</h1>");
    let _ = writeln!(
        body,
        "<p>Upload your resume in PDF format to analyze your skills and experience</p>"
    );
    body.push_str(&error_alert(error));
    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"{}\" enctype=\"multipart/form-data\">\n\
         <label for=\"resume\">Select Resume (PDF)</label>\n\
         <input id=\"resume\" type=\"file\" name=\"resume\" accept=\".pdf,application/pdf\">\n\
         <small>Only PDF files are accepted</small>\n\
         <button type=\"submit\">Upload Resume</button>\n</form>",
        Route::Upload.path()
    );
    layout("Upload Resume", Some(Route::Upload), &body)
}

pub fn quiz_page(engine: &QuizEngine, error: Option<&str>) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Personality Assessment</h1>");

    let (index, question) = match (engine.current_index(), engine.current_question()) {
        (Some(index), Some(question)) => (index, question),
        _ => {
            let _ = writeln!(body, "<p>Assessment complete.</p>");
            return layout("Personality Quiz", Some(Route::Quiz), &body);
        }
    };

    let _ = writeln!(
        body,
        "<p>Question {} of {}</p>\n<progress value=\"{}\" max=\"100\"></progress>",
        index + 1,
        QUESTIONS.len(),
        engine.progress_percent()
    );
    body.push_str(&error_alert(error));
    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"{}\">\n<input type=\"hidden\" name=\"answers\" value=\"{}\">\n<fieldset><legend>{}</legend>",
        Route::Quiz.path(),
        escape(&engine.confirmed()),
        escape(question.text)
    );
    for option in question.options.iter() {
        let checked = if engine.current_answer() == Some(option.value) { " checked" } else { "" };
        let _ = writeln!(
            body,
            "<label><input type=\"radio\" name=\"choice\" value=\"{}\"{}> {}</label>",
            option.value,
            checked,
            escape(option.text)
        );
    }
    let label = if index + 1 == QUESTIONS.len() { "Finish" } else { "Next" };
    let _ = writeln!(body, "</fieldset>\n<button type=\"submit\">{}</button>\n</form>", label);

    layout("Personality Quiz", Some(Route::Quiz), &body)
}

fn career_card(path: &CareerPath) -> String {
    let score = path.display_score();
    let mut card = String::new();
    let _ = writeln!(card, "<article class=\"career-path\">\n<h2>{}</h2>", escape(&path.title));
    let _ = writeln!(
        card,
        "<p>Match Score: {}%</p>\n<progress value=\"{}\" max=\"100\"></progress>",
        score, score
    );
    let _ = writeln!(card, "<p>{}</p>", escape(&path.description));
    let _ = writeln!(card, "<h3>Required Skills</h3>\n<p class=\"badges\">");
    for skill in &path.required_skills {
        let _ = writeln!(card, "<span class=\"badge\">{}</span>", escape(skill));
    }
    let _ = writeln!(card, "</p>\n<h3>Learning Resources</h3>\n<ul>");
    for resource in &path.learning_resources {
        let _ = writeln!(card, "<li>{}</li>", escape(resource));
    }
    let _ = writeln!(card, "</ul>\n</article>");
    card
}

pub fn dashboard_page(view: &RecommendationView) -> String {
    let mut body = String::new();

    match view.state() {
        RecommendationState::Failed(message) => {
            let _ = writeln!(
                body,
                "<div class=\"alert error\" role=\"alert\"><h2>Error Loading Recommendations</h2><p>{}</p></div>",
                escape(message)
            );
        }
        RecommendationState::Loading => {
            let _ = writeln!(body, "<p>Loading recommendations...</p>");
        }
        RecommendationState::Loaded(paths) => {
            let _ = writeln!(body, "<h1>Your Career Dashboard</h1>");
            let _ = writeln!(
                body,
                "<p>Based on your skills and preferences, here are your personalized career recommendations</p>"
            );
            if let Some(personality) = view.personality_type() {
                let _ = writeln!(
                    body,
                    "<p>Personality type: <strong>{}</strong></p>",
                    escape(personality.as_str())
                );
            }
            for path in paths {
                body.push_str(&career_card(path));
            }
            let _ = writeln!(
                body,
                "<form method=\"post\" action=\"/reset\"><button type=\"submit\">Start over</button></form>"
            );
        }
    }

    layout("Dashboard", Some(Route::Dashboard), &body)
}

pub fn admin_page(view: &AdminView) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Student Profiles</h1>");

    match view.state() {
        AdminState::Loading => {
            let _ = writeln!(body, "<p>Loading student data...</p>");
        }
        AdminState::Failed(message) => {
            let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(message));
        }
        AdminState::Loaded(_) => {
            let _ = writeln!(
                body,
                "<form method=\"get\" action=\"/admin\"><input type=\"search\" name=\"filter\" value=\"{}\" placeholder=\"Filter by personality type or skills...\"></form>",
                escape(view.filter())
            );
            let _ = writeln!(
                body,
                "<table>\n<thead><tr><th>Personality Type</th><th>Skills</th><th>Top Career Paths</th><th>Created At</th></tr></thead>\n<tbody>"
            );
            let rows = view.rows();
            for row in &rows {
                let skills = row
                    .skills
                    .iter()
                    .map(|skill| format!("<span class=\"badge\">{}</span>", escape(skill)))
                    .collect::<String>();
                let paths = row
                    .top_paths
                    .iter()
                    .map(|(title, percent)| format!("<div>{} ({}%)</div>", escape(title), percent))
                    .collect::<String>();
                let _ = writeln!(
                    body,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&row.personality_type),
                    skills,
                    paths,
                    escape(&row.created)
                );
            }
            let _ = writeln!(body, "</tbody>\n</table>");
            let _ = writeln!(
                body,
                "<p class=\"summary\">{}</p>",
                summary_line(rows.len(), view.total())
            );
        }
    }

    layout("Admin", None, &body)
}

pub fn not_found_page(path: &str) -> String {
    let body = format!(
        "<h1>Page not found</h1>\n<p>Nothing lives at {}.</p>\n<p><a href=\"/\">Back to the start</a></p>\n",
        escape(path)
    );
    layout("Not found", None, &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!("<h1>Something went wrong</h1>\n{}", error_alert(Some(message)));
    layout("Error", None, &body)
}
