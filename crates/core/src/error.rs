use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("lesson payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
