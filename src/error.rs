#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("unrecognized event context")]
    UnrecognizedEvent,
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

pub type Result<T> = std::result::Result<T, Error>;
