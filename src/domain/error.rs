use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Malformed {schema} row at line {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        schema: &'static str,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = err.kind();
        let msg = err.to_string();
        // Readers that already know the failure pass an AppError through io.
        match err.into_inner().map(|inner| inner.downcast::<AppError>()) {
            Some(Ok(app_err)) => *app_err,
            // The Shift_JIS reader reports undecodable bytes as InvalidData.
            _ if kind == std::io::ErrorKind::InvalidData => AppError::DecodeError(msg),
            _ => AppError::IoError(msg),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        let msg = err.to_string();
        let line = err.position().map(|p| p.line());
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => AppError::from(io_err),
            _ => match line {
                Some(line) => AppError::ParseError(format!("line {}: {}", line, msg)),
                None => AppError::ParseError(msg),
            },
        }
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
