use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid unicode escape on line {line}")]
    InvalidEscape { line: usize },
}
