// src/views/routes.rs
use std::fmt;

/// User-facing pages, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Upload,
    Quiz,
    Dashboard,
}

impl Route {
    pub const NAVIGATION: [Route; 4] = [Route::Home, Route::Upload, Route::Quiz, Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Upload => "/upload",
            Route::Quiz => "/quiz",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Upload => "Upload Resume",
            Route::Quiz => "Personality Quiz",
            Route::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_paths_are_distinct() {
        let mut paths: Vec<&str> = Route::NAVIGATION.iter().map(|route| route.path()).collect();
        paths.dedup();
        assert_eq!(paths.len(), Route::NAVIGATION.len());
        assert_eq!(Route::Quiz.to_string(), "/quiz");
        assert_eq!(Route::Upload.label(), "Upload Resume");
    }
}
