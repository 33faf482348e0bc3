// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
    Document(DocumentError),
}

/// Failures while fetching a remote image.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The request could not be sent or the connection dropped.
    Network(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The body exceeded the allowed image size.
    TooLarge(u64),

    /// The body was empty.
    Empty,
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "error-fetch-network",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::TooLarge(_) => "error-fetch-too-large",
            FetchError::Empty => "error-fetch-empty",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status: {}", code),
            FetchError::TooLarge(size) => write!(f, "Image too large: {} bytes", size),
            FetchError::Empty => write!(f, "Empty response body"),
        }
    }
}

/// Failures while exporting a bundled document.
#[derive(Debug, Clone)]
pub enum DocumentError {
    /// The source file is not present in the documents directory.
    NotFound(String),

    /// No documents directory could be resolved on this platform.
    NoDirectory,

    /// Copying to the destination failed.
    CopyFailed(String),
}

impl DocumentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::NotFound(_) => "notification-document-missing",
            DocumentError::NoDirectory => "notification-document-no-directory",
            DocumentError::CopyFailed(_) => "notification-document-copy-error",
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotFound(name) => write!(f, "Document not found: {}", name),
            DocumentError::NoDirectory => write!(f, "No documents directory available"),
            DocumentError::CopyFailed(msg) => write!(f, "Copy failed: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Fetch(e) => e.i18n_key(),
            Error::Document(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<DocumentError> for Error {
    fn from(err: DocumentError) -> Self {
        Error::Document(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Fetch(FetchError::Status(status.as_u16())),
            None => Error::Fetch(FetchError::Network(err.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= nope");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn fetch_error_display_includes_status() {
        let err: Error = FetchError::Status(404).into();
        assert_eq!(format!("{}", err), "Fetch Error: HTTP status: 404");
    }

    #[test]
    fn fetch_error_i18n_keys() {
        assert_eq!(
            FetchError::Network("x".into()).i18n_key(),
            "error-fetch-network"
        );
        assert_eq!(FetchError::Status(500).i18n_key(), "error-fetch-status");
        assert_eq!(FetchError::Empty.i18n_key(), "error-fetch-empty");
    }

    #[test]
    fn document_error_keys_reach_top_level() {
        let err: Error = DocumentError::NotFound("Resume.pdf".into()).into();
        assert_eq!(err.i18n_key(), "notification-document-missing");
        assert!(format!("{}", err).contains("Resume.pdf"));
    }
}
