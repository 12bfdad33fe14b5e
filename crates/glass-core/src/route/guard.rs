//! Navigation guards evaluated before a route is entered.

use std::fmt;

use super::ResolvedRoute;

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the requested route.
    Proceed,
    /// Abort and navigate to the given path instead.
    Redirect(String),
}

/// Predicate run before entering a route.
///
/// Guards are synchronous and single-shot. Any
/// `Fn(&ResolvedRoute, Option<&ResolvedRoute>) -> GuardDecision` closure is
/// a guard.
pub trait NavigationGuard: Send + Sync {
    /// Decide whether navigation from `from` (absent on first load) to `to`
    /// may proceed.
    fn check(&self, to: &ResolvedRoute, from: Option<&ResolvedRoute>) -> GuardDecision;
}

impl<F> NavigationGuard for F
where
    F: Fn(&ResolvedRoute, Option<&ResolvedRoute>) -> GuardDecision + Send + Sync,
{
    fn check(&self, to: &ResolvedRoute, from: Option<&ResolvedRoute>) -> GuardDecision {
        self(to, from)
    }
}

/// Admits a navigation only when a query param carries a shared key.
///
/// The key is compared as plain text and ships with the client, so this
/// hides a page rather than protecting it. Anything else (missing param,
/// wrong value, repeated param) is redirected.
#[derive(Clone)]
pub struct SharedKeyGuard {
    param: String,
    key: String,
    redirect_to: String,
}

impl SharedKeyGuard {
    pub fn new(
        param: impl Into<String>,
        key: impl Into<String>,
        redirect_to: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            key: key.into(),
            redirect_to: redirect_to.into(),
        }
    }
}

impl fmt::Debug for SharedKeyGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedKeyGuard")
            .field("param", &self.param)
            .field("redirect_to", &self.redirect_to)
            .finish_non_exhaustive()
    }
}

impl NavigationGuard for SharedKeyGuard {
    fn check(&self, to: &ResolvedRoute, _from: Option<&ResolvedRoute>) -> GuardDecision {
        match to.query.get_all(&self.param).as_slice() {
            [value] if *value == self.key => GuardDecision::Proceed,
            _ => GuardDecision::Redirect(self.redirect_to.clone()),
        }
    }
}
