// src/views/home.rs
//! Landing page copy

use super::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const APP_NAME: &str = "Career Compass";
pub const HEADLINE: &str = "Discover Your Perfect Career Path";
pub const TAGLINE: &str =
    "Career Compass analyzes your skills, personality, and goals to help you find the ideal career path.";
pub const CALL_TO_ACTION: &str = "Get Started";
pub const START_ROUTE: Route = Route::Upload;

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "Resume Analysis",
        description: "Upload your resume and get instant feedback on your skills and experience.",
    },
    FeatureCard {
        title: "Personality Assessment",
        description: "Take our MBTI-style quiz to understand your work preferences and strengths.",
    },
    FeatureCard {
        title: "Smart Recommendations",
        description: "Get personalized career recommendations based on your profile and preferences.",
    },
    FeatureCard {
        title: "Learning Paths",
        description: "Access curated learning resources to develop skills for your target career.",
    },
];
