// src/core/profile_store.rs
//! Persisted client profile handed from the upload and quiz steps to the dashboard

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::quiz::PersonalityType;

pub const PROFILE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub schema_version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_type: Option<String>,
}

impl Default for StoredProfile {
    fn default() -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            skills: None,
            personality_type: None,
        }
    }
}

impl StoredProfile {
    /// Decode stored JSON leniently. Unreadable fields are dropped, unversioned
    /// documents (the old `skills` / `personalityType` keys) are upgraded, and
    /// only a schema newer than ours is an error.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let document: Value = match serde_json::from_str(raw) {
            Ok(Value::Object(map)) => Value::Object(map),
            Ok(_) | Err(_) => {
                warn!("Stored profile is not a JSON object, starting from an empty profile");
                return Ok(Self::default());
            }
        };

        let version = document
            .get("schema_version")
            .and_then(Value::as_u64)
            .unwrap_or(0);

        if version > u64::from(PROFILE_SCHEMA_VERSION) {
            return Err(StoreError::UnsupportedSchema {
                found: version,
                supported: PROFILE_SCHEMA_VERSION,
            });
        }

        if version < u64::from(PROFILE_SCHEMA_VERSION) {
            debug!("Upgrading stored profile from schema version {}", version);
        }

        let personality_type = document
            .get("personality_type")
            .or_else(|| document.get("personalityType"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            skills: document.get("skills").and_then(decode_skills),
            personality_type,
        })
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

// Skills are a JSON array of strings; older writers stored that array JSON-encoded inside a string.
fn decode_skills(value: &Value) -> Option<Vec<String>> {
    let decoded = match value {
        Value::String(encoded) => serde_json::from_str::<Vec<String>>(encoded),
        other => serde_json::from_value::<Vec<String>>(other.clone()),
    };

    match decoded {
        Ok(skills) => Some(skills),
        Err(e) => {
            warn!("Ignoring malformed stored skills: {}", e);
            None
        }
    }
}

/// Key-value persistence for the profile. Implementors only move raw JSON in and out.
pub trait ProfileStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError>;

    fn write_raw(&self, contents: &str) -> Result<(), StoreError>;

    fn load(&self) -> Result<StoredProfile, StoreError> {
        match self.read_raw()? {
            Some(raw) => StoredProfile::from_json(&raw),
            None => Ok(StoredProfile::default()),
        }
    }

    fn save(&self, profile: &StoredProfile) -> Result<(), StoreError> {
        self.write_raw(&profile.to_json()?)
    }

    fn save_skills(&self, skills: &[String]) -> Result<(), StoreError> {
        let mut profile = self.load()?;
        profile.skills = Some(skills.to_vec());
        self.save(&profile)
    }

    fn save_personality_type(&self, personality: &PersonalityType) -> Result<(), StoreError> {
        let mut profile = self.load()?;
        profile.personality_type = Some(personality.to_string());
        self.save(&profile)
    }

    /// Stored skills, or an empty list when none were saved
    fn skills(&self) -> Result<Vec<String>, StoreError> {
        match self.load()?.skills {
            Some(skills) => Ok(skills),
            None => {
                warn!("No skills stored in profile, continuing with an empty list");
                Ok(Vec::new())
            }
        }
    }

    fn personality_type(&self) -> Result<Option<PersonalityType>, StoreError> {
        let stored = self.load()?.personality_type;
        Ok(stored.and_then(|code| match PersonalityType::parse(&code) {
            Ok(personality) => Some(personality),
            Err(e) => {
                warn!("Ignoring stored personality type: {}", e);
                None
            }
        }))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.save(&StoredProfile::default())
    }
}

/// JSON file on disk, used by the command line front end
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProfileStore for FileProfileStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write_raw(&self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Write next to the target and rename so readers never see a partial file
        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, contents).map_err(|e| self.io_error(e))?;
        std::fs::rename(&staging, &self.path).map_err(|e| self.io_error(e))?;

        debug!("Written profile: {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    slot: Mutex<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        let slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone())
    }

    fn write_raw(&self, contents: &str) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(contents.to_string());
        Ok(())
    }
}
