//! Bar chart rendering for tier and category distributions.
//!
//! [`bar`] computes the layout (widths, percentages, labels); the HTML page
//! template and [`terminal`] draw it.

pub mod bar;
pub mod terminal;

pub use bar::{Bar, BarChart, category_chart, category_color, tier_chart, tier_color};
