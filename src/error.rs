use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("malformed timeline payload: {0}")]
    MalformedPayload(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("backend rejected request with status {status}")]
    BackendStatus { status: u16 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
