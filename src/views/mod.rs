// src/views/mod.rs
//! Page-level state for each step of the guidance flow, independent of how it is rendered

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod routes;
pub mod upload;

pub use admin::{summary_line, AdminState, AdminView, StudentRow};
pub use dashboard::{RecommendationState, RecommendationView};
pub use home::{FeatureCard, FEATURES};
pub use routes::Route;
pub use upload::{ResumeSubmission, UploadOutcome};
