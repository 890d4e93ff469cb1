use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("invalid chart document: {0}")]
    Decode(String),

    #[error("unsupported chart type: {0}")]
    UnsupportedChartType(String),

    #[error("failed to serialize chart options: {0}")]
    Serialize(String),

    #[error("failed to read `{path}`: {message}")]
    Io { path: String, message: String },
}
