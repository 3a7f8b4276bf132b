use thiserror::Error;

#[derive(Error, Debug)]
pub enum VideolensError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: &'static str },

    #[error("Collection name must not be empty")]
    EmptyCollectionName,

    #[error("Failed to create collection '{name}': {reason}")]
    CollectionCreateFailed { name: String, reason: String },

    #[error("Upload failed for {url}: {reason}")]
    UploadFailed { url: String, reason: String },

    #[error("Indexing failed for {video_name}: {reason}")]
    IndexingFailed { video_name: String, reason: String },

    #[error("Answer generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, VideolensError>;
