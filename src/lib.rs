//! chart-adapter: turns localized chart descriptions into renderer options.
//!
//! A chart request pairs a [`core::ChartDefinition`] (type, titles, axes)
//! with [`core::ChartData`] (typed schema plus rows). The [`api`] layer
//! dispatches on the chart type and produces ECharts-shaped
//! [`api::ChartOptions`], flattened to a generic JSON document at the edge.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use api::{ChartAdapter, ChartOptions, ChartRequest, convert, convert_json_str};
pub use error::{ChartError, ChartResult};
