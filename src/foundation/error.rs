pub type WaveformResult<T> = Result<T, WaveformError>;

#[derive(thiserror::Error, Debug)]
pub enum WaveformError {
    #[error(
        "sample out of range: channel {channel} offset {offset} (total_samples={total_samples}, channels={channel_count})"
    )]
    OutOfRange {
        channel: u16,
        offset: u64,
        total_samples: u64,
        channel_count: u16,
    },

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveformError {
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InternalInvariantViolation(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
