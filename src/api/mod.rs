//! Conversion engine: chart-type dispatch, the per-type strategies and the
//! request/options documents around them.

mod adapter;
mod batch;
pub mod category_series;
mod json_contract;
pub mod options;
pub mod pie_series;

pub use adapter::{ChartAdapter, ConversionStrategy, convert};
pub use batch::convert_batch;
pub use category_series::CategoryStyle;
pub use json_contract::{ChartRequest, convert_json_str};
pub use options::{
    AreaStyle, AxisKind, AxisOptions, ChartOptions, LabelOptions, MarkerSymbol, RoseType,
    SeriesKind, SeriesOptions, SeriesPoint, TitleOptions,
};
pub use pie_series::PIE_SERIES_NAME;
