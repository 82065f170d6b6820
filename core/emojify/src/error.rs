use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmojifyError {
    #[error("source image dimensions are zero")]
    ZeroDimensions,

    #[error("failed to load emoji asset '{name}': {reason}")]
    AssetLoad { name: &'static str, reason: String },

    #[error("failed to load face detection model: {0}")]
    ModelLoad(String),
}
