use thiserror::Error;

#[derive(Error, Debug)]
pub enum RichPrintError {
    #[error("Output error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, RichPrintError>;
