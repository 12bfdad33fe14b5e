//! Client-side routing.
//!
//! A route table is declared as a tree of [`RouteEntry`] values and compiled
//! once into a [`Router`]:
//!
//! - child paths are joined onto their parent unless they start with `/`,
//!   in which case they resolve at the root but keep the parent as layout
//! - records are ranked by pattern specificity, so declaration order only
//!   breaks ties (a catch-all may be declared anywhere)
//! - [`Router::navigate`] follows record redirects, then runs guards

mod guard;
mod pattern;
mod router;

use std::fmt;
use std::sync::Arc;

pub use guard::{GuardDecision, NavigationGuard, SharedKeyGuard};
pub use pattern::{PathPattern, Params, compare_scores};
pub use router::{Navigation, ResolvedRoute, RouteRecord, Router};

use crate::routes::View;

/// Declarative binding from a URL pattern to a view.
#[derive(Clone)]
pub struct RouteEntry {
    path: &'static str,
    name: Option<&'static str>,
    view: View,
    redirect: Option<&'static str>,
    children: Vec<RouteEntry>,
    guard: Option<Arc<dyn NavigationGuard>>,
    props: bool,
}

impl RouteEntry {
    /// Unnamed entry.
    pub fn new(path: &'static str, view: View) -> Self {
        Self {
            path,
            name: None,
            view,
            redirect: None,
            children: Vec::new(),
            guard: None,
            props: false,
        }
    }

    /// Entry reachable by name through [`Router::href`].
    pub fn named(name: &'static str, path: &'static str, view: View) -> Self {
        Self {
            name: Some(name),
            ..Self::new(path, view)
        }
    }

    /// Redirect to an absolute path when this entry itself is matched.
    pub fn with_redirect(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }

    pub fn with_children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }

    pub fn with_guard(mut self, guard: impl NavigationGuard + 'static) -> Self {
        self.guard = Some(Arc::new(guard));
        self
    }

    /// Forward path params to the view as inputs.
    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("view", &self.view)
            .field("redirect", &self.redirect)
            .field("children", &self.children)
            .field("has_guard", &self.guard.is_some())
            .field("props", &self.props)
            .finish()
    }
}
