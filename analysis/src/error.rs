#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Decoding match JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Match record is not a JSON object")]
    NotAnObject,
}
