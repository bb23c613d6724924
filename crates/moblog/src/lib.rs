//! Domain layer of the moblog RPC client.
//!
//! This crate decides *what* goes on the wire and *how* replies are read back:
//! the credential-first parameter lists of every remote procedure, the base64
//! payload of uploads, and the narrowing of untyped replies into typed
//! results. It defines the [`Transport`] port but never performs I/O itself.
//!
//! ## Architectural Layer
//!
//! **Domain logic + port definitions.** The `client` crate sequences a call
//! through [`Catalog`], a [`Transport`] and [`coerce`]; transports are
//! supplied by the embedding application.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Numeric id newtypes (`MoblogId`, `ListId`, etc.) and `CallId` |
//! | [`types`] | Request values: `Param`, flags, `Payload` |
//! | [`value`] | Reply values: `Value`, `Record`, `ReturnedId` |
//! | [`procedure`] | The procedure catalog and wire identifiers |
//! | [`calls`] | `Credentials`, `CallBuilder`, `Call` |
//! | [`catalog`] | One call constructor per procedure |
//! | [`coerce`] | Reply narrowing |
//! | [`transport`] | The `Transport` port |
//! | [`errors`] | Error types |

pub mod calls;
pub mod catalog;
pub mod coerce;
pub mod errors;
pub mod identifiers;
pub mod procedure;
pub mod transport;
pub mod types;
pub mod value;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use calls::{Call, CallBuilder, Credentials, CREDENTIAL_PARAMS};
pub use catalog::Catalog;
pub use errors::{CoercionError, MoblogError, TransportError};
pub use identifiers::{CallId, CategoryId, EntryId, GraphicId, LayoutId, ListId, MoblogId};
pub use procedure::{Procedure, ResultShape, DEFAULT_ENDPOINT};
pub use transport::Transport;
pub use types::{AllowComments, ApprovalType, Param, Payload};
pub use value::{fields, Opaque, Record, ReturnedId, Value, ValueKind};
