use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Decode error: {0}")]
    Decode(String),
}
