// src/lib.rs
//! Career guidance flow: resume upload, personality assessment and career
//! recommendations, with a web and a command line front end over one core.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod quiz;
pub mod render;
pub mod types;
pub mod views;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::core::{FileProfileStore, MemoryProfileStore, ProfileStore, ServiceClient};
pub use crate::error::{GuideError, QuizError, ServiceError, StoreError, UploadError};
pub use crate::quiz::{PersonalityType, QuizEngine, QuizState, QUESTIONS};
