use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Messages database not found at {path}")]
    DatabaseNotFound { path: String },

    #[error("Command `{program}` exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Message source panicked: {message}")]
    SourcePanicked { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, ProbeError>;
