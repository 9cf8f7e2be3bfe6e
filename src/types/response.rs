use serde::{Deserialize, Serialize};

use crate::types::career::CareerPath;

// ===== Service Request/Response Types =====

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<CareerPath>,
}
