//! Command implementations, one module per service area.
//!
//! Each command maps its arguments onto one [`moblog::Catalog`] constructor.

pub mod bookmarks;
pub mod entry;
pub mod favorites;
pub mod moblog;
pub mod template;
