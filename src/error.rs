use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoesisError {
    #[error("Duplicate task node: {0}")]
    DuplicateNode(String),

    #[error("Task node not found: {0}")]
    NodeNotFound(String),

    #[error("Duplicate agent name: {0}")]
    DuplicateAgent(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NoesisError>;
