// src/core/service_client.rs
//! HTTP client for the resume analysis and career recommendation service

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, trace};

use crate::error::ServiceError;
use crate::types::{
    CareerPath, RecommendationRequest, RecommendationResponse, ResumeFile, StudentProfile,
    UploadResponse,
};

const UPLOAD_ENDPOINT: &str = "/api/upload";
const RECOMMENDATIONS_ENDPOINT: &str = "/api/recommendations";
const ADMIN_STUDENTS_ENDPOINT: &str = "/api/admin/students";

const RESUME_FIELD: &str = "resume";

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client. Without a timeout the transport defaults apply.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send a resume as multipart field `resume`, receive the extracted skills
    pub async fn upload_resume(&self, resume: &ResumeFile) -> Result<Vec<String>, ServiceError> {
        let url = self.url(UPLOAD_ENDPOINT);

        let part = Part::bytes(resume.content.clone())
            .file_name(resume.file_name.clone())
            .mime_str(&resume.media_type)?;
        let form = Form::new().part(RESUME_FIELD, part);

        info!(
            "Uploading resume {} ({} bytes) to {}",
            resume.file_name,
            resume.size(),
            url
        );

        let response = self.client.post(&url).multipart(form).send().await?;
        let upload: UploadResponse = Self::decode(response, "resume upload").await?;

        info!("Resume analysis returned {} skills", upload.skills.len());
        Ok(upload.skills)
    }

    pub async fn recommendations(&self, skills: &[String]) -> Result<Vec<CareerPath>, ServiceError> {
        let payload = RecommendationRequest {
            skills: skills.to_vec(),
        };
        let response: RecommendationResponse =
            self.post_json(RECOMMENDATIONS_ENDPOINT, &payload).await?;

        info!(
            "Received {} career recommendations for {} skills",
            response.recommendations.len(),
            skills.len()
        );
        Ok(response.recommendations)
    }

    pub async fn list_students(&self) -> Result<Vec<StudentProfile>, ServiceError> {
        self.get(ADMIN_STUDENTS_ENDPOINT).await
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ServiceError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("POST {}", url);

        let response = self.client.post(&url).json(payload).send().await?;
        Self::decode(response, endpoint).await
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> Result<R, ServiceError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::decode(response, endpoint).await
    }

    async fn decode<R>(response: Response, what: &str) -> Result<R, ServiceError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        trace!("Response status for {}: {}", what, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Service error response for {}: {} {}", what, status, body);
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse {} response: {}. Raw response: {}", what, e, body);
            ServiceError::Decode(e)
        })
    }
}
