//! Proportional bar layout.

use crate::domain::entities::{CategoryDistribution, Tier, TierDistribution};

/// Bars narrower than this (in percent) do not show their count inside.
pub const COUNT_LABEL_MIN_WIDTH: f64 = 15.0;

const DEFAULT_COLOR: &str = "#7aa2f7";

/// One labeled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: u32,
    /// Share of the chart total, 0 when the total is 0.
    pub percentage: f64,
    /// Width relative to the largest bar, 0..=100.
    pub width: f64,
    pub color: &'static str,
    pub css_class: String,
    pub label: String,
}

impl Bar {
    pub fn show_count(&self) -> bool {
        self.width > COUNT_LABEL_MIN_WIDTH
    }

    /// Width as a CSS value, e.g. `62.5%`.
    pub fn width_css(&self) -> String {
        format!("{}%", round1(self.width))
    }
}

/// A set of bars sharing one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub total: u32,
    pub max: u32,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percent_text(value: u32, total: u32) -> String {
    if total == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", f64::from(value) / f64::from(total) * 100.0)
    }
}

fn scaled(value: u32, of: u32) -> f64 {
    if of == 0 {
        0.0
    } else {
        f64::from(value) / f64::from(of) * 100.0
    }
}

pub fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Beginner => "#6fcf97",
        Tier::Intermediate => "#f2c94c",
        Tier::Advanced => "#eb5757",
    }
}

pub fn category_color(category: &str) -> &'static str {
    match category {
        "Foundational" => "#6fcf97",
        "Expressive" => "#f2c94c",
        "Advanced" => "#eb5757",
        "Textural" => "#bb86fc",
        "Harmonic" => "#56ccf2",
        "Rhythmic" => "#ff6b6b",
        _ => DEFAULT_COLOR,
    }
}

/// Lays out one bar per tier, in tier order.
pub fn tier_chart(distribution: &TierDistribution) -> BarChart {
    let entries = distribution.entries();
    let total = distribution.total();
    let max = entries.iter().map(|(_, v)| *v).max().unwrap_or(0);

    let bars = entries
        .into_iter()
        .map(|(tier, value)| Bar {
            name: tier.to_string(),
            value,
            percentage: scaled(value, total),
            width: scaled(value, max),
            color: tier_color(tier),
            css_class: format!("bar-{}", tier.as_str().to_lowercase()),
            label: format!("{tier} ({value} techniques, {}%)", percent_text(value, total)),
        })
        .collect();

    BarChart { bars, total, max }
}

/// Lays out one bar per category, largest first; ties keep name order.
pub fn category_chart(categories: &CategoryDistribution) -> BarChart {
    let mut entries: Vec<(&String, u32)> = categories.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let total = entries.iter().map(|(_, v)| v).sum();
    let max = entries.first().map(|(_, v)| *v).unwrap_or(0);

    let bars = entries
        .into_iter()
        .map(|(category, value)| Bar {
            name: category.clone(),
            value,
            percentage: scaled(value, total),
            width: scaled(value, max),
            color: category_color(category),
            css_class: "bar-category".to_string(),
            label: format!("{category} ({value}, {}%)", percent_text(value, total)),
        })
        .collect();

    BarChart { bars, total, max }
}
