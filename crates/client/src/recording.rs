//! An in-memory transport for tests.
//!
//! [`RecordingTransport`] records every call it receives and answers from a
//! queue of scripted replies. It lets callers check the exact parameter list a
//! client operation produces without a network.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use moblog::{Param, Transport, TransportError, Value};

/// One call as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Wire identifier of the procedure.
    pub procedure: String,
    /// Parameters in the order received.
    pub params: Vec<Param>,
}

/// Records calls and replies from a scripted queue.
///
/// When the queue is empty, calls fail with [`TransportError::Connection`].
#[derive(Debug, Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

// Every critical section is a single push, pop or clone; poisoned locks are
// recovered.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingTransport {
    /// Creates a transport with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, value: impl Into<Value>) -> Self {
        self.push(Ok(value.into()));
        self
    }

    /// Queues a fault reply.
    pub fn with_fault(self, code: i32, message: impl Into<String>) -> Self {
        self.push(Err(TransportError::Fault {
            code,
            message: message.into(),
        }));
        self
    }

    /// Queues a reply or failure.
    pub fn push(&self, reply: Result<Value, TransportError>) {
        lock(&self.replies).push_back(reply);
    }

    /// Returns every call received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Returns the most recent call.
    pub fn last_call(&self) -> Option<RecordedCall> {
        lock(&self.calls).last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn invoke(&self, procedure: &str, params: &[Param]) -> Result<Value, TransportError> {
        lock(&self.calls).push(RecordedCall {
            procedure: procedure.to_owned(),
            params: params.to_vec(),
        });

        lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection {
                    message: format!("no scripted reply for {procedure}"),
                })
            })
    }
}
