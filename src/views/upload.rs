// src/views/upload.rs
//! Resume selection, validation and submission

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

use super::routes::Route;
use crate::core::{ProfileStore, ServiceClient};
use crate::error::UploadError;
use crate::types::ResumeFile;

pub const MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub skills: Vec<String>,
    pub next: Route,
}

/// One resume submission form. At most one request is in flight at a time.
pub struct ResumeSubmission<'a, S: ?Sized> {
    client: &'a ServiceClient,
    store: &'a S,
    selected: Option<ResumeFile>,
    busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<'a, S> ResumeSubmission<'a, S>
where
    S: ProfileStore + ?Sized,
{
    pub fn new(client: &'a ServiceClient, store: &'a S) -> Self {
        Self {
            client,
            store,
            selected: None,
            busy: AtomicBool::new(false),
        }
    }

    /// Accept a file if it is a PDF within the size limit. A rejected file clears the selection.
    pub fn select(&mut self, file: ResumeFile) -> Result<(), UploadError> {
        if !file.is_pdf() {
            warn!(
                "Rejected resume {} with media type {}",
                file.file_name, file.media_type
            );
            self.selected = None;
            return Err(UploadError::InvalidFileType {
                received: file.media_type,
            });
        }

        if file.size() > MAX_RESUME_BYTES {
            warn!("Rejected resume {} of {} bytes", file.file_name, file.size());
            self.selected = None;
            return Err(UploadError::FileTooLarge { size: file.size() });
        }

        self.selected = Some(file);
        Ok(())
    }

    pub fn selected(&self) -> Option<&ResumeFile> {
        self.selected.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<BusyGuard<'_>, UploadError> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(UploadError::Busy);
        }
        Ok(BusyGuard(&self.busy))
    }

    /// Upload the selected resume, persist the returned skills and move on to the quiz
    pub async fn submit(&self) -> Result<UploadOutcome, UploadError> {
        let resume = self.selected.as_ref().ok_or(UploadError::NoFileSelected)?;
        let _busy = self.begin()?;

        let skills = self.client.upload_resume(resume).await.map_err(|e| {
            error!("Resume upload failed: {}", e);
            UploadError::Failed {
                reason: e.to_string(),
            }
        })?;

        self.store.save_skills(&skills)?;
        info!("Stored {} skills from {}", skills.len(), resume.file_name);

        Ok(UploadOutcome {
            skills,
            next: Route::Quiz,
        })
    }
}
