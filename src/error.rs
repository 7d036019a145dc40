//! Error types for svgpdf library.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for svgpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during SVG to PDF conversion.
///
/// Every error is terminal for the current conversion run.
#[derive(Error, Debug)]
pub enum Error {
    /// The SVG source could not be opened.
    #[error("Error opening SVG file {}: {source}", path.display())]
    SourceOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// I/O error while reading an already opened source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as SVG.
    #[error("Unknown file format: not an SVG document")]
    UnknownFormat,

    /// Malformed XML or an SVG structure that cannot be decoded.
    #[error("Error decoding SVG: {0}")]
    Decode(String),

    /// An element was appended before any page exists.
    #[error("No active page: add a page before appending content")]
    NoActivePage,

    /// The document was finalized and can no longer be mutated.
    #[error("Document is finalized and cannot be modified")]
    Finalized,

    /// Serialization was requested before the document was finalized.
    #[error("Document must be finalized before serialization")]
    NotFinalized,

    /// The PDF destination could not be written.
    #[error("Error writing PDF {}: {source}", path.display())]
    DestinationWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error rendering an auxiliary output (conversion report).
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opening or reading the SVG source
    Open,
    /// Decoding the XML into SVG records
    Decode,
    /// Building pages and content streams
    Build,
    /// Serializing and writing the PDF
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Open => "open",
            Stage::Decode => "decode",
            Stage::Build => "build",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

impl Error {
    /// The pipeline stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            Error::SourceOpen { .. } | Error::Io(_) => Stage::Open,
            Error::UnknownFormat | Error::Decode(_) => Stage::Decode,
            Error::NoActivePage | Error::Finalized => Stage::Build,
            Error::NotFinalized | Error::DestinationWrite { .. } | Error::Render(_) => {
                Stage::Write
            }
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoActivePage;
        assert_eq!(
            err.to_string(),
            "No active page: add a page before appending content"
        );

        let err = Error::SourceOpen {
            path: PathBuf::from("missing.svg"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "Error opening SVG file missing.svg: file not found"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.stage(), Stage::Open);
    }

    #[test]
    fn test_xml_error_conversion() {
        let xml_err = roxmltree::Document::parse("<svg>").unwrap_err();
        let err: Error = xml_err.into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.stage(), Stage::Decode);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Error::Finalized.stage().to_string(), "build");
        assert_eq!(Error::NotFinalized.stage().to_string(), "write");
        assert_eq!(Error::UnknownFormat.stage().to_string(), "decode");
    }
}
