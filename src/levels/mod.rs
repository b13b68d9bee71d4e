//! Comparison tiers, filter-scope resolution and level-compare metrics

use crate::data::Row;
use crate::filters::{concrete, GlobalFilter};
use serde::{Deserialize, Serialize};

/// One aggregation tier of the brand / franchisee / store hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Brand,
    Franchisee,
    Store,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Brand => "brand",
            Level::Franchisee => "franchisee",
            Level::Store => "store",
        }
    }
}

/// Ordered set of tiers to display for the current selection.
///
/// Always contains brand; one of exactly three values is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveLevels {
    pub active: Vec<Level>,
}

impl ActiveLevels {
    pub fn contains(&self, level: Level) -> bool {
        self.active.contains(&level)
    }
}

/// Resolve the tiers to display from the selected global filter.
///
/// A concrete store widens the comparison to all three tiers; a concrete
/// franchise (without a store) to brand + franchisee; anything else is a
/// brand-only view. Total over its input, no validation of id consistency.
pub fn active_levels(filters: &GlobalFilter) -> ActiveLevels {
    let has_store = concrete(&filters.store_id).is_some();
    let has_franchise = !has_store && concrete(&filters.franchise_id).is_some();

    if has_store {
        return ActiveLevels {
            active: vec![Level::Brand, Level::Franchisee, Level::Store],
        };
    }
    if has_franchise {
        return ActiveLevels {
            active: vec![Level::Brand, Level::Franchisee],
        };
    }
    ActiveLevels {
        active: vec![Level::Brand],
    }
}

/// Human-readable explanation of the current comparison scope.
pub fn scope_label(levels: &ActiveLevels) -> &'static str {
    if levels.contains(Level::Store) {
        return "Store vs Franchise vs Brand comparisons for the selected store.";
    }
    if levels.contains(Level::Franchisee) {
        return "Franchise vs Brand view. Select a store to see store-level comparisons.";
    }
    "Brand-level view. Narrow down by franchise or store to see deeper comparisons."
}

/// One KPI expressed at all three aggregation tiers.
///
/// All three values are always carried; the client renders only the columns
/// in the active level set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCompareMetric {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub brand_value: f64,
    pub franchisee_value: f64,
    pub store_value: f64,
}

impl LevelCompareMetric {
    /// Build a metric row from a `*_level_compare` snapshot row.
    pub fn from_row(row: &Row<'_>) -> Self {
        let unit = row.get("unit").unwrap_or_default();
        Self {
            id: row.get("metric_id").unwrap_or_default().to_string(),
            label: row.get("metric_label").unwrap_or_default().to_string(),
            unit: if unit.is_empty() {
                None
            } else {
                Some(unit.to_string())
            },
            brand_value: row.number("brand_value"),
            franchisee_value: row.number("franchisee_value"),
            store_value: row.number("store_value"),
        }
    }

    pub fn value_at(&self, level: Level) -> f64 {
        match level {
            Level::Brand => self.brand_value,
            Level::Franchisee => self.franchisee_value,
            Level::Store => self.store_value,
        }
    }

    /// Values for the active tiers only, in tier order. Inactive tiers stay
    /// present on the metric; they are just not selected here.
    pub fn visible_values(&self, levels: &ActiveLevels) -> Vec<(Level, f64)> {
        levels
            .active
            .iter()
            .map(|&level| (level, self.value_at(level)))
            .collect()
    }
}

/// Measurement unit attached to a level-compare metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    Percent,
    Dollars,
    Minutes,
    #[default]
    Plain,
}

impl Unit {
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some("%") => Unit::Percent,
            Some("$") => Unit::Dollars,
            Some("mins") => Unit::Minutes,
            _ => Unit::Plain,
        }
    }
}

/// Display width for minute values: `12.5m` in chips, `12.5 mins` in cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Compact,
    Full,
}

/// Unit-aware value formatting shared by the comparison widgets.
pub fn format_value(value: f64, unit: Unit, style: ValueStyle) -> String {
    match unit {
        Unit::Percent => format!("{:.1}%", value),
        Unit::Dollars => format!("${:.2}", value),
        Unit::Minutes => match style {
            ValueStyle::Compact => format!("{:.1}m", value),
            ValueStyle::Full => format!("{:.1} mins", value),
        },
        Unit::Plain => format!("{:.1}", value),
    }
}

/// Signed delta formatting: `+`/U+2212 prefix and the absolute value, with
/// percentage deltas expressed in points (`pp`).
pub fn format_delta(delta: f64, unit: Unit) -> String {
    let sign = if delta >= 0.0 { "+" } else { "\u{2212}" };
    let magnitude = delta.abs();
    match unit {
        Unit::Percent => format!("{}{:.1}pp", sign, magnitude),
        Unit::Dollars => format!("{}${:.2}", sign, magnitude),
        Unit::Minutes => format!("{}{:.1}m", sign, magnitude),
        Unit::Plain => format!("{}{:.1}", sign, magnitude),
    }
}

/// Direction glyph used alongside formatted deltas.
pub fn delta_arrow(delta: f64) -> &'static str {
    if delta >= 0.0 {
        "▲"
    } else {
        "▼"
    }
}
