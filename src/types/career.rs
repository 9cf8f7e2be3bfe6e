// src/types/career.rs
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A career suggestion as ranked by the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Server-computed relevance, 0 to 100
    pub match_score: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub learning_resources: Vec<String>,
}

impl CareerPath {
    /// Score clamped to the displayable 0..=100 range
    pub fn display_score(&self) -> u8 {
        self.match_score.clamp(0.0, 100.0).round() as u8
    }
}

/// Career path summary stored with a student, scored 0.0 to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPathScore {
    pub title: String,
    pub match_score: f64,
}

impl CareerPathScore {
    pub fn percent(&self) -> i64 {
        (self.match_score * 100.0).round() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub personality_type: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career_paths: Vec<CareerPathScore>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

// The admin endpoint emits either RFC 3339 or naive ISO timestamps; naive ones are UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_path_uses_camel_case() {
        let path: CareerPath = serde_json::from_value(serde_json::json!({
            "title": "Data Engineer",
            "description": "Builds pipelines",
            "matchScore": 87,
            "requiredSkills": ["Python", "SQL"],
            "learningResources": ["Designing Data-Intensive Applications"]
        }))
        .unwrap();

        assert_eq!(path.display_score(), 87);
        assert_eq!(path.required_skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_display_score_is_clamped() {
        let path = CareerPath {
            title: "Outlier".to_string(),
            description: String::new(),
            match_score: 140.2,
            required_skills: vec![],
            learning_resources: vec![],
        };
        assert_eq!(path.display_score(), 100);
    }

    #[test]
    fn test_student_profile_accepts_mongo_id_and_naive_timestamp() {
        let student: StudentProfile = serde_json::from_value(serde_json::json!({
            "_id": "65f1",
            "personality_type": "ENFP",
            "skills": ["Go"],
            "career_paths": [{"title": "SRE", "match_score": 0.456}],
            "created_at": "2024-03-01T10:15:00.123456"
        }))
        .unwrap();

        assert_eq!(student.id, "65f1");
        assert_eq!(student.career_paths[0].percent(), 46);
        assert_eq!(student.created_at.format("%Y-%m-%d").to_string(), "2024-03-01");
    }

    #[test]
    fn test_student_profile_rejects_garbage_timestamp() {
        let result: Result<StudentProfile, _> = serde_json::from_value(serde_json::json!({
            "id": "1",
            "personality_type": "ISTJ",
            "created_at": "yesterday"
        }));
        assert!(result.is_err());
    }
}
