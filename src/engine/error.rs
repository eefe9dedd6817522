use chrono::NaiveDate;

use super::store::StoreError;

#[derive(Debug)]
pub enum EngineError {
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
        reason: &'static str,
    },
    LimitExceeded(&'static str),
    Store(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidRange { start, end, reason } => {
                write!(f, "invalid range [{start}, {end}]: {reason}")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            EngineError::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        EngineError::Store(e)
    }
}
