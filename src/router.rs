//! Route guard
//!
//! Every CLI command maps to an application route. Before a command runs, the
//! guard decides from the route and the presence of a session token whether
//! it may proceed or must be redirected.

/// Where unauthenticated users are sent
pub const LANDING: &str = "/";

/// Where authenticated users are sent
pub const DASHBOARD: &str = "/dashboard";

const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/booking"];

const AUTH_ROUTES: &[&str] = &["/", "/login", "/register"];

/// Paths the guard never inspects; matched against the text after the leading `/`
const UNGUARDED_PREFIXES: &[&str] = &["api", "_next/static", "_next/image", "favicon.ico"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

impl RouteDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p))
}

pub fn is_auth_route(path: &str) -> bool {
    AUTH_ROUTES.contains(&path)
}

fn is_unguarded(path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    UNGUARDED_PREFIXES.iter().any(|p| rest.starts_with(p))
}

/// Decide whether `path` may be visited
pub fn guard(path: &str, has_token: bool) -> RouteDecision {
    if is_unguarded(path) {
        return RouteDecision::Allow;
    }
    if is_protected(path) && !has_token {
        return RouteDecision::Redirect(LANDING);
    }
    if is_auth_route(path) && has_token {
        return RouteDecision::Redirect(DASHBOARD);
    }
    RouteDecision::Allow
}
