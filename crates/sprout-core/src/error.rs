use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveStateError {
    #[error("saved instance state is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("saved instance state must be a JSON object")]
    NotAnObject,
}
