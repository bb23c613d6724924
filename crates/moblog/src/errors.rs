//! Error types for moblog calls.
//!
//! [`MoblogError`] is what every client operation returns. Each variant names
//! the stage that failed: reading the upload file, the remote call itself, or
//! narrowing the reply. Nothing here is retried or recovered locally.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Procedure, ResultShape, ValueKind};

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Failures reported by a [`crate::Transport`] implementation.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum TransportError {
    /// The service could not be reached or the connection dropped mid-call.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },

    /// The service answered with a fault instead of a result.
    #[error("Remote fault {code}: {message}")]
    Fault {
        /// Service-defined fault code.
        code: i32,
        /// Service-provided fault description.
        message: String,
    },

    /// The reply could not be decoded into a [`crate::Value`].
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of what could not be decoded.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Coercion errors
// ---------------------------------------------------------------------------

/// The reply did not have the shape the procedure documents.
///
/// This is a contract violation by the service, not a caller error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{procedure} returned {found} where {expected} was expected")]
pub struct CoercionError {
    /// Procedure whose reply was being narrowed.
    pub procedure: Procedure,
    /// Shape the procedure documents.
    pub expected: ResultShape,
    /// Kind of value actually found (for lists, the offending element).
    pub found: ValueKind,
}

// ---------------------------------------------------------------------------
// Call errors
// ---------------------------------------------------------------------------

/// Errors returned by a moblog client operation.
#[derive(Debug, Error)]
pub enum MoblogError {
    /// The file to upload could not be opened or read in full.
    ///
    /// No remote call is made when this occurs.
    #[error("Failed to read upload file '{}': {source}", path.display())]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The remote call failed.
    #[error("Call to {procedure} failed: {source}")]
    Transport {
        /// Procedure that was being invoked.
        procedure: Procedure,
        /// Failure reported by the transport.
        #[source]
        source: TransportError,
    },

    /// The reply could not be narrowed to the procedure's result shape.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_stage() {
        let err = MoblogError::Transport {
            procedure: Procedure::EntryDelete,
            source: TransportError::Fault {
                code: 4,
                message: "bad api key".into(),
            },
        };
        assert_eq!(err.to_string(), "Call to ta.Entry.Delete failed: Remote fault 4: bad api key");

        let err = MoblogError::from(CoercionError {
            procedure: Procedure::GetMyMoblogs,
            expected: ResultShape::Records,
            found: ValueKind::Text,
        });
        assert_eq!(
            err.to_string(),
            "ta.Moblog.GetMyMoblogs returned text where list of records was expected"
        );
    }
}
