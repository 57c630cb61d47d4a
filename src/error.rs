// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Most failures in the viewer are deliberately silent at the UI level (a
//! rejected manifest removes the widget, a failed search shows nothing), so
//! these errors mostly travel inside messages and end up in the log.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP Error: {0}")]
    Http(String),

    /// Response body could not be decoded.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// The engine dropped an asset before it ever became available.
    #[error("Asset {index} will never become available")]
    AssetUnavailable { index: isize },
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
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
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
    fn json_error_becomes_decode_variant() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn asset_unavailable_names_the_index() {
        let err = Error::AssetUnavailable { index: 4 };
        assert!(err.to_string().contains('4'));
    }
}
