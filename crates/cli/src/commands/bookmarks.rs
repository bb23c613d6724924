//! Bookmark list commands.

use clap::Subcommand;
use moblog::{Call, Catalog};

/// Bookmark lists.
#[derive(Subcommand)]
pub enum BookmarksCommand {
    /// Create (list 0) or rename a bookmark list.
    Update {
        /// List ID.
        list_id: i32,
        /// List title.
        title: String,
    },

    /// Show a bookmark list on a moblog.
    Assign {
        /// Moblog ID.
        moblog_id: i32,
        /// List ID.
        list_id: i32,
    },

    /// Remove a bookmark list from a moblog.
    Unassign {
        /// Moblog ID.
        moblog_id: i32,
        /// List ID.
        list_id: i32,
    },

    /// Delete a bookmark list.
    Delete {
        /// List ID.
        list_id: i32,
    },

    /// Add a URL to a bookmark list.
    AddUrl {
        /// List ID.
        list_id: i32,
        /// Full URL.
        url: String,
    },

    /// Remove a URL from a bookmark list.
    RemoveUrl {
        /// List ID.
        list_id: i32,
        /// URL to remove.
        url: String,
    },
}

impl BookmarksCommand {
    pub fn build(self, catalog: &Catalog<'_>) -> Call {
        match self {
            Self::Update { list_id, title } => catalog.bookmarks_update(list_id, &title),
            Self::Assign { moblog_id, list_id } => catalog.bookmarks_assign(moblog_id, list_id),
            Self::Unassign { moblog_id, list_id } => catalog.bookmarks_unassign(moblog_id, list_id),
            Self::Delete { list_id } => catalog.bookmarks_delete(list_id),
            Self::AddUrl { list_id, url } => catalog.bookmarks_update_url(list_id, &url),
            Self::RemoveUrl { list_id, url } => catalog.bookmarks_remove_url(list_id, &url),
        }
    }
}
