//! Route record compilation, resolution and navigation.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::pattern::{Params, PathPattern, compare_scores};
use super::{GuardDecision, NavigationGuard, RouteEntry};
use crate::config::MAX_REDIRECTS;
use crate::error::{NavigationError, RouteError};
use crate::location::{Location, Query};
use crate::routes::View;

// ============================================================================
// RouteRecord
// ============================================================================

/// A flattened, compiled [`RouteEntry`].
pub struct RouteRecord {
    name: Option<&'static str>,
    view: View,
    pattern: PathPattern,
    score: Vec<i32>,
    matched: Vec<View>,
    redirect: Option<&'static str>,
    guards: Vec<Arc<dyn NavigationGuard>>,
    props: bool,
}

impl RouteRecord {
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Full pattern, parent paths included.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl fmt::Debug for RouteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRecord")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("matched", &self.matched)
            .field("redirect", &self.redirect)
            .field("guards", &self.guards.len())
            .field("props", &self.props)
            .finish()
    }
}

/// Join a child path onto its parent's full path.
fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        return child.to_string();
    }
    let parent = parent.trim_end_matches('/');
    if child.is_empty() {
        return if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        };
    }
    format!("{}/{}", parent, child)
}

/// Flatten an entry tree depth-first, parents before children.
fn flatten(
    entry: &RouteEntry,
    parent: Option<(&str, &[View], &[Arc<dyn NavigationGuard>])>,
    out: &mut Vec<RouteRecord>,
) -> Result<(), RouteError> {
    let (full_path, mut matched, mut guards) = match parent {
        Some((parent_path, views, guards)) => (
            join_path(parent_path, entry.path),
            views.to_vec(),
            guards.to_vec(),
        ),
        None => (entry.path.to_string(), Vec::new(), Vec::new()),
    };

    if let Some(redirect) = entry.redirect
        && !redirect.starts_with('/')
    {
        return Err(RouteError::InvalidRedirect {
            pattern: full_path,
            redirect: redirect.to_string(),
        });
    }

    let pattern = PathPattern::new(&full_path)?;
    matched.push(entry.view);
    if let Some(guard) = &entry.guard {
        guards.push(Arc::clone(guard));
    }

    out.push(RouteRecord {
        name: entry.name,
        view: entry.view,
        score: pattern.score(),
        pattern,
        matched: matched.clone(),
        redirect: entry.redirect,
        guards: guards.clone(),
        props: entry.props,
    });

    for child in &entry.children {
        flatten(
            child,
            Some((full_path.as_str(), matched.as_slice(), guards.as_slice())),
            out,
        )?;
    }
    Ok(())
}

// ============================================================================
// ResolvedRoute
// ============================================================================

/// A location matched against the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Name of the matched record.
    pub name: Option<&'static str>,
    /// View of the matched record.
    pub view: View,
    /// Full pattern of the matched record.
    pub pattern: String,
    /// Requested path (still percent-encoded).
    pub path: String,
    /// Decoded path params.
    pub params: Params,
    pub query: Query,
    /// Layout chain, outermost first, ending with `view`.
    pub matched: Vec<View>,
    /// Whether params are forwarded to the view as inputs.
    pub props: bool,
    record: usize,
}

impl ResolvedRoute {
    /// Location this route was resolved from.
    pub fn location(&self) -> Location {
        Location {
            path: self.path.clone(),
            query: self.query.clone(),
        }
    }

    /// Path params, when the record forwards them to its view.
    pub fn view_props(&self) -> Option<&Params> {
        self.props.then_some(&self.params)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// Result of a settled navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Where the navigation ended up.
    pub route: ResolvedRoute,
    /// The originally requested location, when redirects changed it.
    pub redirected_from: Option<Location>,
}

impl Navigation {
    pub fn is_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Compiled, ranked route table.
pub struct Router {
    records: Vec<RouteRecord>,
}

impl Router {
    /// Compile a route table.
    ///
    /// Fails on invalid patterns or redirects and on duplicate names.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut records = Vec::new();
        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(RouteError::NotAbsolute(entry.path.to_string()));
            }
            flatten(entry, None, &mut records)?;
        }

        let mut names = HashSet::new();
        for name in records.iter().filter_map(|r| r.name) {
            if !names.insert(name) {
                return Err(RouteError::DuplicateName(name.to_string()));
            }
        }

        // Stable: equal scores keep declaration order.
        records.sort_by(|a, b| compare_scores(&a.score, &b.score));

        Ok(Self { records })
    }

    /// Records in ranking order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.records.iter().find(|r| r.name == Some(name))
    }

    /// Match a location against the highest-ranked record.
    ///
    /// Returns `None` only when the table has no catch-all.
    pub fn resolve(&self, location: &Location) -> Option<ResolvedRoute> {
        self.records
            .iter()
            .enumerate()
            .find_map(|(index, record)| {
                record.pattern.matches(&location.path).map(|params| ResolvedRoute {
                    name: record.name,
                    view: record.view,
                    pattern: record.pattern.as_str().to_string(),
                    path: location.path.clone(),
                    params,
                    query: location.query.clone(),
                    matched: record.matched.clone(),
                    props: record.props,
                    record: index,
                })
            })
    }

    /// Resolve `to`, follow redirects and run guards.
    ///
    /// A record redirect keeps the requested query unless the target has its
    /// own; a guard redirect starts a fresh navigation.
    pub fn navigate(
        &self,
        to: &Location,
        from: Option<&ResolvedRoute>,
    ) -> Result<Navigation, NavigationError> {
        let mut target = to.clone();

        for _ in 0..=MAX_REDIRECTS {
            let route = self
                .resolve(&target)
                .ok_or_else(|| NavigationError::NoMatch(target.to_string()))?;
            let record = &self.records[route.record];

            if let Some(redirect) = record.redirect {
                let next = Location::parse(redirect);
                target = if redirect.contains('?') {
                    next
                } else {
                    next.with_query(target.query)
                };
                continue;
            }

            let decision = record
                .guards
                .iter()
                .map(|guard| guard.check(&route, from))
                .find(|decision| *decision != GuardDecision::Proceed);

            match decision {
                Some(GuardDecision::Redirect(path)) => target = Location::parse(&path),
                _ => {
                    let redirected_from = (route.location() != *to).then(|| to.clone());
                    return Ok(Navigation {
                        route,
                        redirected_from,
                    });
                }
            }
        }

        Err(NavigationError::RedirectLoop {
            path: to.to_string(),
            hops: MAX_REDIRECTS,
        })
    }

    /// Build the URL of a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        self.by_name(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?
            .pattern
            .build(params)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.records.iter().map(|r| r.pattern.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::SharedKeyGuard;

    fn nav(router: &Router, path: &str) -> Navigation {
        router.navigate(&Location::parse(path), None).unwrap()
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/dashboard", "home"), "/dashboard/home");
        assert_eq!(join_path("/dashboard/", "home"), "/dashboard/home");
        assert_eq!(join_path("/", "home"), "/home");
        assert_eq!(join_path("/dashboard", ""), "/dashboard");
        assert_eq!(join_path("/dashboard", "/product/:id"), "/product/:id");
    }

    #[test]
    fn test_catch_all_declared_first_still_ranks_last() {
        let router = Router::new(vec![
            RouteEntry::named("not_found", "/:pathMatch(.*)*", View::NotFound),
            RouteEntry::named("login", "/login", View::CustomerLogin),
        ])
        .unwrap();

        assert_eq!(nav(&router, "/login").route.view, View::CustomerLogin);
        assert_eq!(nav(&router, "/elsewhere").route.view, View::NotFound);
    }

    #[test]
    fn test_equal_scores_keep_declaration_order() {
        let router = Router::new(vec![
            RouteEntry::named("first", "/items/:a", View::Home),
            RouteEntry::named("second", "/items/:b", View::Doors),
        ])
        .unwrap();
        assert_eq!(nav(&router, "/items/1").route.name, Some("first"));
    }

    #[test]
    fn test_no_match_without_catch_all() {
        let router = Router::new(vec![RouteEntry::new("/", View::WelcomePage)]).unwrap();
        assert_eq!(router.resolve(&Location::parse("/missing")), None);
        assert_eq!(
            router.navigate(&Location::parse("/missing"), None),
            Err(NavigationError::NoMatch("/missing".to_string()))
        );
    }

    #[test]
    fn test_redirect_keeps_query() {
        let router = Router::new(vec![
            RouteEntry::new("/admin", View::AdminDashboard)
                .with_redirect("/admin/dashboard")
                .with_children(vec![RouteEntry::new("dashboard", View::MainDashboard)]),
        ])
        .unwrap();

        let navigation = nav(&router, "/admin?tab=sales");
        assert_eq!(navigation.route.path, "/admin/dashboard");
        assert_eq!(navigation.route.query.get("tab"), Some("sales"));
        assert_eq!(
            navigation.redirected_from,
            Some(Location::parse("/admin?tab=sales"))
        );
        assert_eq!(
            navigation.route.matched,
            vec![View::AdminDashboard, View::MainDashboard]
        );
    }

    #[test]
    fn test_guard_redirect_drops_query() {
        let router = Router::new(vec![
            RouteEntry::new("/", View::WelcomePage),
            RouteEntry::new("/secret", View::AdminLogin)
                .with_guard(SharedKeyGuard::new("key", "open-sesame", "/")),
        ])
        .unwrap();

        let allowed = nav(&router, "/secret?key=open-sesame");
        assert_eq!(allowed.route.view, View::AdminLogin);
        assert!(!allowed.is_redirected());

        let denied = nav(&router, "/secret?key=nope");
        assert_eq!(denied.route.view, View::WelcomePage);
        assert!(denied.route.query.is_empty());
        assert!(denied.is_redirected());

        let repeated = nav(&router, "/secret?key=open-sesame&key=open-sesame");
        assert_eq!(repeated.route.view, View::WelcomePage);
    }

    #[test]
    fn test_parent_guard_applies_to_children() {
        let router = Router::new(vec![
            RouteEntry::new("/", View::WelcomePage),
            RouteEntry::new("/admin", View::AdminDashboard)
                .with_guard(|_: &ResolvedRoute, _: Option<&ResolvedRoute>| {
                    GuardDecision::Redirect("/".to_string())
                })
                .with_children(vec![RouteEntry::new("orders", View::OrderManagement)]),
        ])
        .unwrap();

        assert_eq!(nav(&router, "/admin/orders").route.view, View::WelcomePage);
    }

    #[test]
    fn test_guard_sees_previous_route() {
        let router = Router::new(vec![
            RouteEntry::named("home", "/", View::WelcomePage),
            RouteEntry::named("login", "/login", View::CustomerLogin).with_guard(
                |_: &ResolvedRoute, from: Option<&ResolvedRoute>| match from {
                    Some(prev) if prev.name == Some("home") => GuardDecision::Proceed,
                    _ => GuardDecision::Redirect("/".to_string()),
                },
            ),
        ])
        .unwrap();

        let home = nav(&router, "/").route;
        assert_eq!(nav(&router, "/login").route.view, View::WelcomePage);
        let from_home = router
            .navigate(&Location::parse("/login"), Some(&home))
            .unwrap();
        assert_eq!(from_home.route.view, View::CustomerLogin);
    }

    #[test]
    fn test_redirect_loop_is_reported() {
        let router = Router::new(vec![
            RouteEntry::new("/a", View::Home).with_redirect("/b"),
            RouteEntry::new("/b", View::Doors).with_redirect("/a"),
        ])
        .unwrap();

        assert_eq!(
            router.navigate(&Location::parse("/a"), None),
            Err(NavigationError::RedirectLoop {
                path: "/a".to_string(),
                hops: MAX_REDIRECTS,
            })
        );
    }

    #[test]
    fn test_guard_redirect_loop_is_reported() {
        let router = Router::new(vec![
            RouteEntry::new("/a", View::Home).with_guard(
                |_: &ResolvedRoute, _: Option<&ResolvedRoute>| {
                    GuardDecision::Redirect("/a".to_string())
                },
            ),
        ])
        .unwrap();

        assert_eq!(
            router.navigate(&Location::parse("/a"), None),
            Err(NavigationError::RedirectLoop {
                path: "/a".to_string(),
                hops: MAX_REDIRECTS,
            })
        );
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Router::new(vec![
                RouteEntry::named("home", "/", View::WelcomePage),
                RouteEntry::named("home", "/home", View::Home),
            ])
            .unwrap_err(),
            RouteError::DuplicateName("home".to_string())
        );
        assert_eq!(
            Router::new(vec![RouteEntry::new("login", View::CustomerLogin)]).unwrap_err(),
            RouteError::NotAbsolute("login".to_string())
        );
        assert!(matches!(
            Router::new(vec![RouteEntry::new("/a", View::Home).with_redirect("b")]),
            Err(RouteError::InvalidRedirect { .. })
        ));
    }

    #[test]
    fn test_href() {
        let router = Router::new(vec![
            RouteEntry::named("update", "/products/update/:id", View::AddUpdateProduct)
                .with_props(),
        ])
        .unwrap();

        let params: Params = [("id", "42")].into_iter().collect();
        assert_eq!(router.href("update", &params).unwrap(), "/products/update/42");
        assert_eq!(
            router.href("missing", &params),
            Err(RouteError::UnknownName("missing".to_string()))
        );
    }
}
