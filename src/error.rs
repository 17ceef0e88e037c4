use std::path::PathBuf;
use thiserror::Error;

use crate::shape::Kind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input is not valid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON object at the top level, found {found}")]
    MalformedInput { found: Kind },

    #[error("invalid configuration ({path}): {message}")]
    Config { path: String, message: String },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("jq filter failed: {message}")]
    Jq { message: String },
}

impl Error {
    pub fn malformed(found: Kind) -> Self {
        Self::MalformedInput { found }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn jq(message: impl Into<String>) -> Self {
        Self::Jq { message: message.into() }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidJson { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_message_leaves_os_error_to_source() {
        let err = Error::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "failed to access /tmp/missing.json");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("no such file"));
    }

    #[test]
    fn malformed_names_the_kind() {
        assert_eq!(
            Error::malformed(Kind::String).to_string(),
            "expected a JSON object at the top level, found string",
        );
    }
}
