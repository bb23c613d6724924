//! Favorites list commands.

use clap::Subcommand;
use moblog::{Call, Catalog};

/// Favorites lists.
#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// Create (list 0) or rename a favorites list.
    Update {
        /// List ID.
        list_id: i32,
        /// List title.
        title: String,
    },

    /// Delete a moblog from a favorites list.
    Delete {
        /// List ID.
        list_id: i32,
        /// URL of the moblog.
        moblog_url: String,
    },

    /// Show a favorites list on a moblog (list 0 is "My Favorites").
    Assign {
        /// Moblog ID.
        moblog_id: i32,
        /// List ID.
        list_id: i32,
    },

    /// Add a moblog to a favorites list.
    AddMoblog {
        /// List ID.
        list_id: i32,
        /// URL of the moblog.
        moblog_url: String,
    },

    /// Remove a moblog from a favorites list.
    RemoveMoblog {
        /// List ID.
        list_id: i32,
        /// URL of the moblog.
        moblog_url: String,
    },
}

impl FavoritesCommand {
    pub fn build(self, catalog: &Catalog<'_>) -> Call {
        match self {
            Self::Update { list_id, title } => catalog.favorites_update(list_id, &title),
            Self::Delete { list_id, moblog_url } => catalog.favorites_delete(list_id, &moblog_url),
            Self::Assign { moblog_id, list_id } => catalog.favorites_assign(moblog_id, list_id),
            Self::AddMoblog { list_id, moblog_url } => {
                catalog.favorites_add_moblog(list_id, &moblog_url)
            }
            Self::RemoveMoblog { list_id, moblog_url } => {
                catalog.favorites_remove_moblog(list_id, &moblog_url)
            }
        }
    }
}
