//! Utility modules for browser APIs.
//!
//! - [`dom`] - window access, history manipulation, document title

pub mod dom;
