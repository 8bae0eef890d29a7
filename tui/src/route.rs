use std::fmt;

/// In-app routes: `/` and `/game/{slug}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Game(String),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Route::Home;
        }

        let slug = trimmed
            .strip_prefix("/game/")
            .or_else(|| trimmed.strip_prefix("game/"))
            .map(|s| s.trim_end_matches('/'));

        match slug {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                match urlencoding::decode(slug) {
                    Ok(decoded) => Route::Game(decoded.into_owned()),
                    Err(_) => Route::NotFound(trimmed.to_string()),
                }
            }
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn game(slug: impl Into<String>) -> Self {
        Route::Game(slug.into())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Game(slug) => write!(f, "/game/{}", urlencoding::encode(slug)),
            Route::NotFound(path) => f.write_str(path),
        }
    }
}
