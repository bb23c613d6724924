//! Typed client for the moblog RPC service.
//!
//! [`Client`] exposes one async operation per remote procedure. Each operation
//! builds its parameter list with [`moblog::Catalog`], hands it to the injected
//! [`moblog::Transport`], and narrows the reply with [`moblog::coerce`].
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** This crate sequences calls between the domain
//! rules in [`moblog`] and a transport supplied by the caller. The only I/O it
//! performs itself is reading upload files (see [`payload`]).
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use client::{Client, RecordingTransport};
//! use moblog::Credentials;
//!
//! # async fn run() -> Result<(), moblog::MoblogError> {
//! let transport = Arc::new(RecordingTransport::new().with_reply("1234"));
//! let client = Client::new(Credentials::new("api-key", "login", "password"), transport);
//!
//! let id = client.change_title(42, "Summer trip").await?;
//! assert_eq!(id.parse_i32(), Some(1234));
//! # Ok(())
//! # }
//! ```

mod client;
pub mod payload;
pub mod recording;

pub use client::Client;
pub use payload::{read_payload, READ_CHUNK_SIZE};
pub use recording::{RecordedCall, RecordingTransport};
