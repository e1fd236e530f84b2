use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZodGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema parse error at {path}: {msg}")]
    ParseError {
        path: String,
        msg:  String,
    },

    #[error("Invalid export name \"{0}\"")]
    InvalidName(String),
}
