// src/render.rs
//! Plain-text rendering of the views for the terminal

use std::fmt::Write;

use crate::quiz::Question;
use crate::types::CareerPath;
use crate::views::{home, summary_line, RecommendationState, RecommendationView, StudentRow};

const BAR_WIDTH: usize = 20;

/// Percentage bar such as `[##########----------]  50%`
pub fn score_bar(score: u8) -> String {
    let filled = (usize::from(score) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        score
    )
}

pub fn badges(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("[{}]", item))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn landing() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", home::HEADLINE);
    let _ = writeln!(out, "{}\n", home::TAGLINE);
    for feature in home::FEATURES.iter() {
        let _ = writeln!(out, "  * {}: {}", feature.title, feature.description);
    }
    out
}

pub fn question(question: &Question, index: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Question {} of {}", index + 1, total);
    let _ = writeln!(out, "{}", question.text);
    for (number, option) in question.options.iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", number + 1, option.text);
    }
    out
}

pub fn career_path(path: &CareerPath) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", path.title);
    let _ = writeln!(out, "  Match Score: {}", score_bar(path.display_score()));
    if !path.description.is_empty() {
        let _ = writeln!(out, "  {}", path.description);
    }
    if !path.required_skills.is_empty() {
        let _ = writeln!(out, "  Required Skills: {}", badges(&path.required_skills));
    }
    if !path.learning_resources.is_empty() {
        let _ = writeln!(out, "  Learning Resources:");
        for resource in &path.learning_resources {
            let _ = writeln!(out, "    - {}", resource);
        }
    }
    out
}

pub fn dashboard(view: &RecommendationView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Your Career Dashboard");
    if let Some(personality) = view.personality_type() {
        let _ = writeln!(out, "Personality type: {}", personality);
    }

    match view.state() {
        RecommendationState::Loading => {
            let _ = writeln!(out, "Loading recommendations...");
        }
        RecommendationState::Failed(message) => {
            let _ = writeln!(out, "Error Loading Recommendations");
            let _ = writeln!(out, "{}", message);
        }
        RecommendationState::Loaded(paths) if paths.is_empty() => {
            let _ = writeln!(out, "No career paths matched your profile yet.");
        }
        RecommendationState::Loaded(paths) => {
            for path in paths {
                let _ = writeln!(out);
                out.push_str(&career_path(path));
            }
        }
    }
    out
}

pub fn student_table(rows: &[StudentRow], total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<6} {:<30} {:<40} {:<10}",
        "ID", "Type", "Skills", "Top Career Paths", "Created"
    );
    let _ = writeln!(out, "{}", "-".repeat(102));

    for row in rows {
        let paths = row
            .top_paths
            .iter()
            .map(|(title, percent)| format!("{} ({}%)", title, percent))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{:<12} {:<6} {:<30} {:<40} {:<10}",
            row.id,
            row.personality_type,
            row.skills.join(", "),
            paths,
            row.created
        );
    }

    if rows.is_empty() {
        let _ = writeln!(out, "No students match the current filter.");
    }
    let _ = writeln!(out, "\n{}", summary_line(rows.len(), total));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0), "[--------------------]   0%");
        assert_eq!(score_bar(50), "[##########----------]  50%");
        assert_eq!(score_bar(100), "[####################] 100%");
    }

    #[test]
    fn test_career_path_lists_skills_and_resources() {
        let text = career_path(&CareerPath {
            title: "Backend Developer".to_string(),
            description: "Builds services".to_string(),
            match_score: 72.0,
            required_skills: vec!["Rust".to_string(), "SQL".to_string()],
            learning_resources: vec!["The Rust Book".to_string()],
        });

        assert!(text.contains("Match Score: [##############------]  72%"));
        assert!(text.contains("Required Skills: [Rust] [SQL]"));
        assert!(text.contains("    - The Rust Book"));
    }

    #[test]
    fn test_empty_student_table() {
        let table = student_table(&[], 4);
        assert!(table.contains("No students match"));
        assert!(table.contains("Showing 0 of 4 students"));
    }
}
