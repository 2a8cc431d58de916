use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bootskin operations
#[derive(Error, Diagnostic, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(bootskin::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bootskin::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(bootskin::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Argument error: {message}")]
    #[diagnostic(code(bootskin::args))]
    Args {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(bootskin::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl ThemeError {
    /// Wrap an I/O failure with the path it happened on.
    pub fn io(path: impl Into<std::path::PathBuf>, context: &str, err: impl std::fmt::Display) -> Self {
        ThemeError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
