use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("a template named '{0}' already exists")]
    TemplateExists(String),

    #[error("template not found: {0}")]
    TemplateNotFound(Uuid),

    #[error("missing required field: {0}")]
    MissingField(String),
}
