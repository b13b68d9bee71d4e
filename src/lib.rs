//! Callsight — franchise call-performance analytics API
//!
//! Loads static CSV snapshots of call data at startup and serves aggregated
//! dashboard metrics (call volume, policy adherence, upsell, friendliness,
//! alerts) as JSON over HTTP.

pub mod compare;
pub mod config;
pub mod core;
pub mod data;
pub mod filters;
pub mod levels;
pub mod logging;
pub mod metrics;
pub mod sections;
