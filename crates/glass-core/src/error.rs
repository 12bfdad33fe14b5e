//! Error types for route table construction and navigation.
//!
//! - [`RouteError`] - invalid patterns, table conflicts, reverse-routing failures
//! - [`NavigationError`] - navigations that cannot settle on a destination

use thiserror::Error;

/// Errors raised while compiling the route table or building URLs from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Pattern exceeds the configured length limit.
    #[error("pattern `{pattern}` exceeds the maximum length of {max} bytes")]
    PatternTooLong { pattern: String, max: usize },
    /// Pattern has more segments than allowed.
    #[error("pattern `{pattern}` has more than {max} segments")]
    TooManySegments { pattern: String, max: usize },
    /// Top-level pattern does not start with `/`.
    #[error("pattern `{0}` must start with '/'")]
    NotAbsolute(String),
    /// Pattern syntax could not be compiled.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    /// Two entries share a route name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),
    /// No route carries the requested name.
    #[error("unknown route name `{0}`")]
    UnknownName(String),
    /// A required param was not supplied when building a URL.
    #[error("missing param `{param}` for pattern `{pattern}`")]
    MissingParam { pattern: String, param: String },
    /// Redirect target is not an absolute path.
    #[error("redirect `{redirect}` on `{pattern}` must be an absolute path")]
    InvalidRedirect { pattern: String, redirect: String },
}

/// Errors raised while settling a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No record matches and the table has no catch-all.
    #[error("no route matches `{0}`")]
    NoMatch(String),
    /// Redirects and guards kept bouncing the navigation around.
    #[error("navigation to `{path}` exceeded {hops} redirects")]
    RedirectLoop { path: String, hops: usize },
}
