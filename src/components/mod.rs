//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`link`] - History-aware links
//! - [`modal`] - Product-detail modal driven by the selection store
//! - [`pages`] - One component per routed view
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod link;
pub mod modal;
pub mod pages;
pub mod router;

pub use link::RouterLink;
pub use router::{AppRouter, RouteContext};
