//! The transport port.
//!
//! The client never encodes requests for the wire itself. It hands a
//! procedure identifier and an ordered parameter list to a [`Transport`] and
//! gets back an untyped [`Value`]. Implementations own connection handling,
//! serialization, timeouts and fault decoding; the service listens at
//! [`crate::DEFAULT_ENDPOINT`] unless configured otherwise.

use async_trait::async_trait;

use crate::{Param, TransportError, Value};

/// Performs one remote procedure call.
///
/// Object-safe so clients can hold an `Arc<dyn Transport>`. Implementations
/// must be safe to call concurrently from several tasks; the client adds no
/// locking of its own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invokes `procedure` with `params` in the given order.
    ///
    /// # Invariants
    /// - `params` is sent exactly as given: no reordering, padding or trimming.
    /// - A fault reported by the service is returned as
    ///   [`TransportError::Fault`], never as an `Ok` value.
    async fn invoke(&self, procedure: &str, params: &[Param]) -> Result<Value, TransportError>;
}
