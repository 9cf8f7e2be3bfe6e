// src/views/admin.rs
//! Read-only listing of stored student profiles with a client-side filter

use tracing::{error, info};

use crate::core::ServiceClient;
use crate::types::StudentProfile;

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load student data. Please try again.";
pub const MAX_PATHS_PER_STUDENT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum AdminState {
    Loading,
    Loaded(Vec<StudentProfile>),
    Failed(String),
}

/// One table row, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub id: String,
    pub personality_type: String,
    pub skills: Vec<String>,
    /// Title and rounded percentage of the leading career paths
    pub top_paths: Vec<(String, i64)>,
    pub created: String,
}

impl From<&StudentProfile> for StudentRow {
    fn from(student: &StudentProfile) -> Self {
        Self {
            id: student.id.clone(),
            personality_type: student.personality_type.clone(),
            skills: student.skills.clone(),
            top_paths: student
                .career_paths
                .iter()
                .take(MAX_PATHS_PER_STUDENT)
                .map(|path| (path.title.clone(), path.percent()))
                .collect(),
            created: student.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Case-insensitive substring match against the personality type or any skill
pub fn matches_filter(student: &StudentProfile, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    student.personality_type.to_lowercase().contains(&needle)
        || student
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

#[derive(Debug)]
pub struct AdminView {
    state: AdminState,
    filter: String,
}

impl Default for AdminView {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminView {
    pub fn new() -> Self {
        Self {
            state: AdminState::Loading,
            filter: String::new(),
        }
    }

    pub async fn activate(client: &ServiceClient) -> Self {
        let mut view = Self::new();
        view.load(client).await;
        view
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Fetch once on mount
    pub async fn load(&mut self, client: &ServiceClient) {
        if self.state != AdminState::Loading {
            return;
        }

        self.state = match client.list_students().await {
            Ok(students) => {
                info!("Loaded {} student profiles", students.len());
                AdminState::Loaded(students)
            }
            Err(e) => {
                error!("Error fetching students: {}", e);
                AdminState::Failed(LOAD_FAILURE_MESSAGE.to_string())
            }
        };
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Students matching the current filter, recomputed over the full list
    pub fn filtered(&self) -> Vec<&StudentProfile> {
        match &self.state {
            AdminState::Loaded(students) => students
                .iter()
                .filter(|student| matches_filter(student, &self.filter))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn rows(&self) -> Vec<StudentRow> {
        self.filtered().into_iter().map(StudentRow::from).collect()
    }

    /// Number of loaded students, ignoring the filter
    pub fn total(&self) -> usize {
        match &self.state {
            AdminState::Loaded(students) => students.len(),
            _ => 0,
        }
    }
}

/// Footer under the student table, e.g. `Showing 1 of 2 students`
pub fn summary_line(shown: usize, total: usize) -> String {
    format!("Showing {} of {} students", shown, total)
}
