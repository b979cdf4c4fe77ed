use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart size: {size}")]
    InvalidSize { size: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
