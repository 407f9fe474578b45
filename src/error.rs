/// Error taxonomy for the analysis workflow
///
/// All variants carry plain strings so the types stay `Clone` and can
/// travel inside iced messages. Failure causes are distinguished for
/// diagnostics only; the user sees a single notification for all of them.
use thiserror::Error;

/// Failures of one analysis round-trip, caught at the controller boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// The request never reached the server, or no response arrived
    /// (includes client-side timeouts).
    #[error("could not reach the analysis service: {0}")]
    Transport(String),

    /// The server responded with a non-success HTTP status.
    #[error("analysis service returned HTTP {0}")]
    Http(u16),

    /// The server responded 2xx but the body does not match the schema.
    #[error("could not decode the analysis response: {0}")]
    Decode(String),
}

/// Failures while reading or recognizing a selected image file.
///
/// The baseline web client had no error path here; an unreadable file
/// simply left a broken preview. We surface it like an analysis failure
/// and keep the previously current image so the user can retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngestionError {
    #[error("could not read the selected file: {0}")]
    Unreadable(String),

    #[error("the selected file is not a recognized image format")]
    UnrecognizedFormat,
}
