//! Chart description data model: what to draw and the rows to draw it from.

pub mod data;
pub mod definition;
pub mod localized;
pub mod types;

pub use data::{Cell, ChartData, Field, Row, Schema};
pub use definition::{Axis, ChartDefinition, License};
pub use localized::{FALLBACK_LOCALE, LocalizedText, resolve_localized};
pub use types::{ChartType, FieldDataType};
