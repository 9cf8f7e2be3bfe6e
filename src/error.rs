// src/error.rs
//! Error kinds surfaced by the guidance flow

use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the recommendation service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Service returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse service response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Persisted profile could not be read or written
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u64, supported: u32 },

    #[error("Failed to access profile store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please select a file first")]
    NoFileSelected,

    #[error("Please upload a PDF file")]
    InvalidFileType { received: String },

    #[error("File size exceeds 10MB limit")]
    FileTooLarge { size: u64 },

    #[error("An upload is already in progress")]
    Busy,

    #[error("Failed to upload resume")]
    Failed { reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Please select an answer before proceeding")]
    Unanswered { index: usize },

    #[error("'{value}' is not an option for question {question}")]
    InvalidOption { question: u32, value: String },

    #[error("The assessment is already complete")]
    AlreadyComplete,

    #[error("The assessment is not complete yet")]
    Incomplete,

    #[error("'{0}' is not a valid personality type")]
    InvalidPersonalityType(String),
}

/// Anything a front end may have to show the user
#[derive(Debug, Error)]
pub enum GuideError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl GuideError {
    /// Validation failures the user can fix in place
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GuideError::Quiz(_)
                | GuideError::Upload(UploadError::NoFileSelected)
                | GuideError::Upload(UploadError::InvalidFileType { .. })
                | GuideError::Upload(UploadError::FileTooLarge { .. })
                | GuideError::Upload(UploadError::Busy)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            UploadError::InvalidFileType {
                received: "image/png".to_string()
            }
            .to_string(),
            "Please upload a PDF file"
        );
        assert_eq!(
            QuizError::Unanswered { index: 2 }.to_string(),
            "Please select an answer before proceeding"
        );
        assert_eq!(
            UploadError::Failed {
                reason: "boom".to_string()
            }
            .to_string(),
            "Failed to upload resume"
        );
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(GuideError::from(QuizError::Unanswered { index: 0 }).is_recoverable());
        assert!(GuideError::from(UploadError::NoFileSelected).is_recoverable());
        assert!(!GuideError::from(UploadError::Failed {
            reason: "timeout".to_string()
        })
        .is_recoverable());
        assert!(!GuideError::from(StoreError::UnsupportedSchema {
            found: 9,
            supported: 1
        })
        .is_recoverable());
    }
}
