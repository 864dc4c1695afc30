//! Router
//!
//! Maps request paths to page views. Every path resolves to exactly one
//! [`AppRoute`]; anything unmatched becomes [`AppRoute::NotFound`].

/// Admin path prefix. Deliberately absent from navigation.
pub const ADMIN_PATH: &str = "/mukesh";

pub const HOME_PATH: &str = "/";
pub const SEARCH_PATH: &str = "/search";
pub const NOTE_PATH: &str = "/note/:id";
pub const CONTRIBUTIONS_PATH: &str = "/contributions";
pub const ABOUT_PATH: &str = "/about";

/// Page views reachable by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Search,
    Note(String),
    Contributions,
    About,
    Admin,
    NotFound,
}

impl AppRoute {
    /// Resolve a path. Query strings, fragments and a trailing slash are
    /// ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');
        let first = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        match (first, rest.as_slice()) {
            ("", []) => AppRoute::Home,
            ("search", []) => AppRoute::Search,
            ("note", [id]) if !id.is_empty() => {
                let id = urlencoding::decode(id)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| id.to_string());
                AppRoute::Note(id)
            }
            ("contributions", []) => AppRoute::Contributions,
            ("about", []) => AppRoute::About,
            (admin, _) if admin == &ADMIN_PATH[1..] => AppRoute::Admin,
            _ => AppRoute::NotFound,
        }
    }

    /// Canonical path for links. `NotFound` has no path of its own and maps
    /// to home.
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home | AppRoute::NotFound => HOME_PATH.to_string(),
            AppRoute::Search => SEARCH_PATH.to_string(),
            AppRoute::Note(id) => format!("/note/{}", urlencoding::encode(id)),
            AppRoute::Contributions => CONTRIBUTIONS_PATH.to_string(),
            AppRoute::About => ABOUT_PATH.to_string(),
            AppRoute::Admin => ADMIN_PATH.to_string(),
        }
    }

    /// Whether the route appears in public navigation
    pub fn is_listed(&self) -> bool {
        !matches!(self, AppRoute::Admin | AppRoute::NotFound)
    }
}
