// src/types/resume.rs
use anyhow::{Context, Result};
use std::path::Path;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A user-selected resume with its declared media type
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub media_type: String,
    pub content: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            content,
        }
    }

    /// Read a resume from disk. Without an explicit media type one is guessed from the extension.
    pub async fn from_path(path: &Path, media_type: Option<&str>) -> Result<Self> {
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();

        let media_type = media_type
            .map(str::to_string)
            .unwrap_or_else(|| guess_media_type(&file_name).to_string());

        Ok(Self::new(file_name, media_type, content))
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type
            .split(';')
            .next()
            .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
            .unwrap_or(false)
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

pub fn guess_media_type(file_name: &str) -> &'static str {
    match get_file_extension(file_name).as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
