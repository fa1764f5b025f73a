//! Route table for the single-page app.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` hands every location to `app_routes().resolve`, runs `guard`
//! on the winning entry, then builds that entry's view. Views are plain
//! constructors, so no page is built until it is navigated to.
//!
//! DESIGN
//! ======
//! Order matters: the first entry whose pattern matches wins, which is why a
//! catch-all must come last. Patterns use `:name` for one segment and a
//! trailing `*name` for the rest of the path (possibly empty).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::LazyLock;

use leptos::prelude::*;

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, not_found::NotFoundPage, privacy::PrivacyPage, terms::TermsPage,
};

/// Where the guard sends visitors who may not enter a route.
pub const AUTH_REDIRECT: &str = "/";

/// Metadata read by the navigation guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

/// One path-to-view mapping.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    /// Builds the page; only called when the route is entered.
    pub view: fn() -> AnyView,
    pub meta: RouteMeta,
}

impl RouteEntry {
    pub const fn new(path: &'static str, view: fn() -> AnyView) -> Self {
        Self {
            path,
            view,
            meta: RouteMeta { requires_auth: false },
        }
    }

    #[must_use]
    pub const fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("invalid route pattern `{path}`: {reason}")]
    InvalidPattern { path: &'static str, reason: &'static str },
    #[error("wildcard must be the last segment in `{path}`")]
    WildcardNotLast { path: &'static str },
    #[error("catch-all route `{path}` must be the last entry")]
    CatchAllNotLast { path: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
    Wildcard(&'static str),
}

impl Segment {
    fn parse(segment: &'static str) -> Self {
        if let Some(name) = segment.strip_prefix(':') {
            Self::Param(name)
        } else if let Some(name) = segment.strip_prefix('*') {
            Self::Wildcard(name)
        } else {
            Self::Static(segment)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PathPattern {
    segments: Vec<Segment>,
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|segment| !segment.is_empty())
}

impl PathPattern {
    fn parse(path: &'static str) -> Result<Self, RouteTableError> {
        if !path.starts_with('/') {
            return Err(RouteTableError::InvalidPattern {
                path,
                reason: "must start with `/`",
            });
        }
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match Segment::parse(segment) {
                Segment::Param("") | Segment::Wildcard("") => Err(RouteTableError::InvalidPattern {
                    path,
                    reason: "parameter needs a name",
                }),
                segment => Ok(segment),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let wildcard = segments.iter().position(|s| matches!(s, Segment::Wildcard(_)));
        if wildcard.is_some_and(|at| at + 1 != segments.len()) {
            return Err(RouteTableError::WildcardNotLast { path });
        }
        Ok(Self { segments })
    }

    /// Matches every path.
    fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    fn matches(&self, path: &str) -> Option<Vec<(&'static str, String)>> {
        let mut parts = split_path(path);
        let mut params = Vec::new();
        for segment in &self.segments {
            match *segment {
                Segment::Static(expected) => {
                    if parts.next()? != expected {
                        return None;
                    }
                }
                Segment::Param(name) => params.push((name, parts.next()?.to_owned())),
                Segment::Wildcard(name) => {
                    let rest = parts.by_ref().collect::<Vec<_>>().join("/");
                    params.push((name, rest));
                }
            }
        }
        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

/// Entry chosen for a path, with captured parameters.
#[derive(Clone, Debug)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

/// Ordered, immutable list of routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<(RouteEntry, PathPattern)>,
}

impl RouteTable {
    /// # Errors
    ///
    /// Returns an error if a pattern is malformed, a wildcard is not the last
    /// segment of its pattern, or a catch-all entry is followed by others.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let count = entries.len();
        let mut routes = Vec::with_capacity(count);
        for (index, entry) in entries.into_iter().enumerate() {
            let pattern = PathPattern::parse(entry.path)?;
            if pattern.is_catch_all() && index + 1 != count {
                return Err(RouteTableError::CatchAllNotLast { path: entry.path });
            }
            routes.push((entry, pattern));
        }
        Ok(Self { routes })
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().map(|(entry, _)| entry)
    }

    /// First entry matching `path`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|(entry, pattern)| {
            pattern.matches(path).map(|params| RouteMatch { entry, params })
        })
    }

    /// Every entry matching `path`, in table order.
    pub fn matching<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a RouteEntry> {
        self.routes
            .iter()
            .filter(move |(_, pattern)| pattern.matches(path).is_some())
            .map(|(entry, _)| entry)
    }
}

/// Decision taken before entering a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Proceed,
    Redirect(&'static str),
}

/// Navigation guard: routes flagged `requires_auth` are only entered when
/// `is_authenticated` says so. The check is not consulted for open routes.
pub fn guard(entry: &RouteEntry, is_authenticated: impl FnOnce() -> bool) -> Admission {
    if entry.meta.requires_auth && !is_authenticated() {
        Admission::Redirect(AUTH_REDIRECT)
    } else {
        Admission::Proceed
    }
}

fn app_entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", || view! { <HomePage/> }.into_any()),
        RouteEntry::new("/dashboard", || view! { <DashboardPage/> }.into_any()).requires_auth(),
        RouteEntry::new("/privacy", || view! { <PrivacyPage/> }.into_any()),
        RouteEntry::new("/terms", || view! { <TermsPage/> }.into_any()),
        // Catch-all for 404; must stay last.
        RouteEntry::new("/*path", || view! { <NotFoundPage/> }.into_any()),
    ]
}

static APP_ROUTES: LazyLock<RouteTable> =
    LazyLock::new(|| RouteTable::new(app_entries()).expect("built-in route table is valid"));

/// The application's routes.
pub fn app_routes() -> &'static RouteTable {
    &APP_ROUTES
}
