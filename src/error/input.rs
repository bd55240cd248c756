use std::path::PathBuf;
use thiserror::Error;

/// Problems with a call-site dump produced by a front-end.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("malformed call-site dump '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported call-site dump format '{format}'")]
    UnsupportedFormat { format: String },
}

impl InputError {
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}
