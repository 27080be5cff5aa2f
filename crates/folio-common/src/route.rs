use serde::{Deserialize, Serialize};

/// The closed set of navigable paths.
///
/// Matching is strict literal equality on the path string: no prefix
/// matching, no trailing-slash normalization, no case folding. `/about/`
/// and `/About` are rejected on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    About,
    Projects,
    Experiences,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::About,
        Route::Projects,
        Route::Experiences,
        Route::Contact,
        Route::Home,
    ];

    /// Strict literal match against the allow-list.
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/projects" => Some(Route::Projects),
            "/experiences" => Some(Route::Experiences),
            "/contact" => Some(Route::Contact),
            _ => None,
        }
    }

    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Experiences => "/experiences",
            Route::Contact => "/contact",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}
