use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid step '{command}': {reason}")]
    InvalidStep { command: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HookError>;
