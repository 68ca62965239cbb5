//! Web layer for the browser-based page.
//!
//! Renders the guitarist picker, bar charts and insight server-side with
//! Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
