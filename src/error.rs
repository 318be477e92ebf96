//! Error kinds raised by the theory tables, the prompt data source and platform facilities.

use derive_more::Display;

// -------------------------------------------------------------------------------------------------

/// Errors produced by songsmith.
///
/// Lookup misses (`UnknownNote`, `UnknownKey`) are recoverable: callers usually fall back to an
/// unfiltered or empty result. `DataUnavailable` disables the writing exercise and `Platform`
/// errors are logged and degrade the affected facility only.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Error {
    #[display("unknown note '{name}'")]
    UnknownNote { name: String },
    #[display("unknown key '{name}'")]
    UnknownKey { name: String },
    #[display("prompt data unavailable: {reason}")]
    DataUnavailable { reason: String },
    #[display("{facility} unavailable: {reason}")]
    Platform {
        facility: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn data_unavailable<S: ToString>(reason: S) -> Self {
        Self::DataUnavailable {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn platform<S: ToString>(facility: &'static str, reason: S) -> Self {
        Self::Platform {
            facility,
            reason: reason.to_string(),
        }
    }
}

impl std::error::Error for Error {}

// --------------------------------------------------------------------------------------------------
