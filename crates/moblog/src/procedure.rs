//! The fixed catalog of remote procedures.
//!
//! Each [`Procedure`] maps one-to-one to the wire identifier the service
//! dispatches on. The identifiers must be reproduced byte-for-byte.

use serde::{Deserialize, Serialize};

/// Default endpoint of the moblog RPC service, for transport implementations.
pub const DEFAULT_ENDPOINT: &str = "http://xml.api.textamerica.com";

/// The shape a procedure's response is narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// A list of records, in service order.
    Records,
    /// A single identifier, returned as text.
    Identifier,
    /// A literal status token such as `"OK"`.
    Status,
    /// Undocumented result; handed back unchanged.
    Passthrough,
}

impl std::fmt::Display for ResultShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Records => "list of records",
            Self::Identifier => "identifier text",
            Self::Status => "status text",
            Self::Passthrough => "any value",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------

/// A remote procedure exposed by the moblog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Procedure {
    GetMyMoblogs,
    GetCommunityMoblogs,
    MoblogUpdate,
    MoblogChangeTitle,
    MoblogChangeText,
    MoblogChangeDomain,
    MoblogChangeSecretWord,
    EntryUpdate,
    EntryDelete,
    KeywordsAdd,
    FavoritesUpdate,
    FavoritesDelete,
    FavoritesAssign,
    FavoritesAddMoblog,
    FavoritesRemoveMoblog,
    BookmarksUpdate,
    BookmarksAssign,
    BookmarksUnassign,
    BookmarksDelete,
    BookmarksUpdateUrl,
    BookmarksRemoveUrl,
    TemplateUpdateSection,
    TemplateSetTemplate,
}

impl Procedure {
    /// Every procedure, in catalog order.
    pub const ALL: [Procedure; 23] = [
        Self::GetMyMoblogs,
        Self::GetCommunityMoblogs,
        Self::MoblogUpdate,
        Self::MoblogChangeTitle,
        Self::MoblogChangeText,
        Self::MoblogChangeDomain,
        Self::MoblogChangeSecretWord,
        Self::EntryUpdate,
        Self::EntryDelete,
        Self::KeywordsAdd,
        Self::FavoritesUpdate,
        Self::FavoritesDelete,
        Self::FavoritesAssign,
        Self::FavoritesAddMoblog,
        Self::FavoritesRemoveMoblog,
        Self::BookmarksUpdate,
        Self::BookmarksAssign,
        Self::BookmarksUnassign,
        Self::BookmarksDelete,
        Self::BookmarksUpdateUrl,
        Self::BookmarksRemoveUrl,
        Self::TemplateUpdateSection,
        Self::TemplateSetTemplate,
    ];

    /// Returns the identifier the service dispatches on.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::GetMyMoblogs => "ta.Moblog.GetMyMoblogs",
            Self::GetCommunityMoblogs => "ta.Moblog.GetCommunityMoblogs",
            Self::MoblogUpdate => "ta.Moblog.Update",
            Self::MoblogChangeTitle => "ta.Moblog.ChangeTitle",
            Self::MoblogChangeText => "ta.Moblog.ChangeText",
            Self::MoblogChangeDomain => "ta.Moblog.ChangeDomain",
            Self::MoblogChangeSecretWord => "ta.Moblog.ChangeSecretWord",
            Self::EntryUpdate => "ta.Entry.Update",
            Self::EntryDelete => "ta.Entry.Delete",
            Self::KeywordsAdd => "ta.Keywords.Add",
            Self::FavoritesUpdate => "ta.Favorites.Update",
            Self::FavoritesDelete => "ta.Favorites.Delete",
            Self::FavoritesAssign => "ta.Favorites.Assign",
            Self::FavoritesAddMoblog => "ta.Favorites.AddMoblog",
            Self::FavoritesRemoveMoblog => "ta.Favorites.RemoveMoblog",
            Self::BookmarksUpdate => "ta.Bookmarks.Update",
            Self::BookmarksAssign => "ta.Bookmarks.Assign",
            Self::BookmarksUnassign => "ta.Bookmarks.UnAssign",
            Self::BookmarksDelete => "ta.Bookmarks.Delete",
            Self::BookmarksUpdateUrl => "ta.Bookmarks.UpdateURL",
            Self::BookmarksRemoveUrl => "ta.Bookmarks.RemoveURL",
            Self::TemplateUpdateSection => "ta.Template.UpdateSection",
            Self::TemplateSetTemplate => "ta.Template.SetTemplate",
        }
    }

    /// Returns the shape this procedure's response is narrowed to.
    pub fn result_shape(self) -> ResultShape {
        match self {
            Self::GetMyMoblogs | Self::GetCommunityMoblogs => ResultShape::Records,

            Self::MoblogUpdate
            | Self::MoblogChangeTitle
            | Self::MoblogChangeText
            | Self::MoblogChangeDomain
            | Self::MoblogChangeSecretWord
            | Self::EntryUpdate
            | Self::BookmarksUpdate => ResultShape::Identifier,

            Self::EntryDelete
            | Self::KeywordsAdd
            | Self::BookmarksAssign
            | Self::TemplateUpdateSection
            | Self::TemplateSetTemplate => ResultShape::Status,

            // No documented result shape.
            Self::FavoritesUpdate
            | Self::FavoritesDelete
            | Self::FavoritesAssign
            | Self::FavoritesAddMoblog
            | Self::FavoritesRemoveMoblog
            | Self::BookmarksUnassign
            | Self::BookmarksDelete
            | Self::BookmarksUpdateUrl
            | Self::BookmarksRemoveUrl => ResultShape::Passthrough,
        }
    }

    /// Looks up a procedure by its wire identifier.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.wire_name() == name)
    }
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<_> = Procedure::ALL.iter().map(|p| p.wire_name()).collect();
        assert_eq!(names.len(), Procedure::ALL.len());
    }

    #[test]
    fn wire_names_round_trip() {
        for procedure in Procedure::ALL {
            assert_eq!(Procedure::from_wire_name(procedure.wire_name()), Some(procedure));
        }
        assert_eq!(Procedure::from_wire_name("ta.Moblog.Nope"), None);
    }

    #[test]
    fn wire_names_keep_service_capitalization() {
        assert_eq!(Procedure::BookmarksUnassign.wire_name(), "ta.Bookmarks.UnAssign");
        assert_eq!(Procedure::BookmarksUpdateUrl.wire_name(), "ta.Bookmarks.UpdateURL");
        assert_eq!(Procedure::MoblogUpdate.to_string(), "ta.Moblog.Update");
    }

    #[test]
    fn undocumented_results_are_passed_through() {
        let passthrough: Vec<_> = Procedure::ALL
            .into_iter()
            .filter(|p| p.result_shape() == ResultShape::Passthrough)
            .map(Procedure::wire_name)
            .collect();

        assert_eq!(passthrough.len(), 9);
        assert_eq!(
            passthrough.iter().filter(|name| name.starts_with("ta.Favorites.")).count(),
            5
        );
        for name in [
            "ta.Bookmarks.UnAssign",
            "ta.Bookmarks.Delete",
            "ta.Bookmarks.UpdateURL",
            "ta.Bookmarks.RemoveURL",
        ] {
            assert!(passthrough.contains(&name), "{name}");
        }
        assert_eq!(Procedure::BookmarksUpdate.result_shape(), ResultShape::Identifier);
        assert_eq!(Procedure::BookmarksAssign.result_shape(), ResultShape::Status);
    }
}
