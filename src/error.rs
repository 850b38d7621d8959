use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("feature index {index} out of range for {len} features")]
    FeatureIndexOutOfRange { index: usize, len: usize },

    #[error("editor has been torn down")]
    TornDown,
}
