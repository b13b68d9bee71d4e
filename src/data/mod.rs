//! CSV snapshot store
//!
//! One named table per dashboard section, loaded once at startup and shared
//! immutably across requests. Every aggregation recomputes from these
//! tables; there is no caching layer.

pub mod record;
pub mod table;

pub use record::CallRecord;
pub use table::{cast_cell, Row, Table};

use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::info;

type LoadError = Box<dyn std::error::Error + Send + Sync>;

/// All dashboard snapshots, parsed and held in memory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    pub loaded_at: DateTime<Utc>,

    pub overview_hourly: Table,
    pub overview_store: Table,
    pub overview_level_compare: Table,

    pub journey_policy_hourly: Table,
    pub journey_policy_store: Table,
    pub journey_policy_level_compare: Table,

    pub sales_upsell_hourly: Table,
    pub sales_upsell_store: Table,
    pub sales_upsell_items_greeting: Table,
    pub sales_upsell_items_cart: Table,
    pub sales_upsell_items_upsize: Table,
    pub sales_upsell_level_compare: Table,

    pub friendliness_hourly: Table,
    pub friendliness_store: Table,
    pub friendliness_distribution: Table,
    pub friendliness_level_compare: Table,

    pub alerts_hourly: Table,
    pub alerts_calls: Table,
    pub alerts_level_compare: Table,

    pub explore_calls: Table,

    /// `explore_calls` rows lifted into typed records for segment filtering.
    pub calls: Vec<CallRecord>,
}

impl SnapshotStore {
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let load = |name: &str| -> Result<Table, LoadError> {
            Table::load(&dir.join(name))
        };

        let explore_calls = load("explore_calls.csv")?;
        let calls = explore_calls
            .iter()
            .map(|row| CallRecord::from_row(&row))
            .collect::<Vec<_>>();

        let store = Self {
            loaded_at: Utc::now(),

            overview_hourly: load("overview_hourly.csv")?,
            overview_store: load("overview_store.csv")?,
            overview_level_compare: load("overview_level_compare.csv")?,

            journey_policy_hourly: load("journey_policy_hourly.csv")?,
            journey_policy_store: load("journey_policy_store.csv")?,
            journey_policy_level_compare: load("journey_policy_level_compare.csv")?,

            sales_upsell_hourly: load("sales_upsell_hourly.csv")?,
            sales_upsell_store: load("sales_upsell_store.csv")?,
            sales_upsell_items_greeting: load("sales_upsell_items_greeting.csv")?,
            sales_upsell_items_cart: load("sales_upsell_items_cart.csv")?,
            sales_upsell_items_upsize: load("sales_upsell_items_upsize.csv")?,
            sales_upsell_level_compare: load("sales_upsell_level_compare.csv")?,

            friendliness_hourly: load("friendliness_hourly.csv")?,
            friendliness_store: load("friendliness_store.csv")?,
            friendliness_distribution: load("friendliness_distribution.csv")?,
            friendliness_level_compare: load("friendliness_level_compare.csv")?,

            alerts_hourly: load("alerts_hourly.csv")?,
            alerts_calls: load("alerts_calls.csv")?,
            alerts_level_compare: load("alerts_level_compare.csv")?,

            explore_calls,
            calls,
        };

        info!(
            dir = %dir.display(),
            calls = store.calls.len(),
            "Loaded CSV snapshots"
        );

        Ok(store)
    }
}
