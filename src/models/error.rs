use std::fmt;

use crate::types::RecordIndex;

#[derive(Debug)]
pub enum Error {
    /// A record field held something other than text or a missing marker.
    MalformedField {
        record_index: RecordIndex,
        field: String,
        found: String,
    },
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedField {
                record_index,
                field,
                found,
            } => write!(
                f,
                "Malformed Field: record {} has an unreadable `{}` value ({})",
                record_index, field, found
            ),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::JsonError(err) => write!(f, "JSON Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            Error::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}
