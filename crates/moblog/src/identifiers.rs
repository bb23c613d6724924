//! Newtype domain identifiers.
//!
//! Every remote entity that the moblog service addresses by number is
//! represented as a distinct newtype wrapping the service's 32-bit integer.
//! This prevents accidentally passing (for example) a [`ListId`] where a
//! [`MoblogId`] belongs, even though both travel as plain integers on the wire.
//!
//! Each identifier implements `From<i32>`, so every operation that accepts
//! `impl Into<MoblogId>` takes a bare integer or the newtype interchangeably
//! and builds the same parameter list for both.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for i32-wrapped newtypes (service-assigned integers).
// Generates: struct (Copy), new(), as_i32(), Display, From<i32>.
// ---------------------------------------------------------------------------
macro_rules! i32_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier from a raw integer.
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: service-integer-backed
// ---------------------------------------------------------------------------

i32_id! {
    /// Identifies one of the caller's moblogs.
    MoblogId
}

i32_id! {
    /// Identifies an entry (image or movie post) within a moblog.
    ///
    /// `0` asks the service to create a new entry.
    EntryId
}

i32_id! {
    /// Identifies a favorites list or a bookmark list.
    ///
    /// `0` asks the service to create a new list, or (for favorites
    /// assignment) selects the built-in "My Favorites" list.
    ListId
}

i32_id! {
    /// Identifies the category an entry is filed under. The service default is `0`.
    CategoryId
}

i32_id! {
    /// Identifies a graphic set in the service's template library.
    GraphicId
}

i32_id! {
    /// Identifies a layout in the service's template library.
    LayoutId
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single remote call made by a client.
///
/// Generated fresh for every call and recorded on its tracing span, so the
/// dispatch, reply and failure events of one call can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(Uuid);

impl CallId {
    /// Generates a new random call identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
