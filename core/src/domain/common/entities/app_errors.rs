use thiserror::Error;

/// Error taxonomy of the analysis pipeline. `MissingCredential` is fatal and
/// only surfaces at startup; everything else is recoverable and reported
/// inline to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("no model credential is configured")]
    MissingCredential,

    #[error("could not decode image: {0}")]
    ImageDecodeError(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("invalid input")]
    Invalid,
}
