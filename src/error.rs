use thiserror::Error;

/// Any failure to obtain a field from the interactive input.
#[derive(Debug, Error)]
pub enum PromptFailure {
    #[error("{0}")]
    Terminal(#[from] requestty::ErrorKind),

    #[error("input stream closed before '{0}' was supplied")]
    Closed(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("prompt returned a non-text answer for '{0}'")]
    Unexpected(String),
}

#[derive(Debug, Error)]
pub enum CredpromptError {
    #[error("Error [Prompt]: {0}")]
    Prompt(#[from] PromptFailure),

    #[error("Error [Serde YAML]: {0}")]
    SerdeYAML(#[from] serde_yaml::Error),

    #[error("Error: {0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, CredpromptError>;
