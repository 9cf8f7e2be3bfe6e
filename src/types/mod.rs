// src/types/mod.rs
//! Wire and domain types shared by the views and the service client

pub mod career;
pub mod resume;
pub mod response;

pub use career::{CareerPath, CareerPathScore, StudentProfile};
pub use resume::ResumeFile;
pub use response::{RecommendationRequest, RecommendationResponse, UploadResponse};
