//! Routing and shared UI state for the glass storefront.
//!
//! This crate has no browser dependencies so it can be tested natively:
//! - [`route`] - path patterns, route records, guards and the [`Router`]
//! - [`routes`] - the application route table and its [`View`]s
//! - [`location`] - request locations and query strings
//! - [`product`] / [`selection`] - product details and the detail-modal state

pub mod config;
pub mod error;
pub mod location;
pub mod product;
pub mod route;
pub mod routes;
pub mod selection;

pub use error::{NavigationError, RouteError};
pub use location::{Location, Query};
pub use product::ProductDetails;
pub use route::{
    GuardDecision, Navigation, NavigationGuard, Params, PathPattern, ResolvedRoute, RouteEntry,
    Router, SharedKeyGuard,
};
pub use routes::{View, build_router, route_table};
pub use selection::ModalState;
