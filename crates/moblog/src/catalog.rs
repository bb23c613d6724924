//! One call constructor per remote procedure.
//!
//! [`Catalog`] encodes the argument order of every procedure. It performs no
//! I/O: uploads take an already-encoded [`Payload`]. Identifier arguments take
//! `impl Into<Id>`, so `catalog.change_title(42, "T")` and
//! `catalog.change_title(MoblogId::new(42), "T")` build the same call.

use crate::{
    AllowComments, ApprovalType, Call, CategoryId, Credentials, EntryId, GraphicId, LayoutId,
    ListId, MoblogId, Payload, Procedure,
};

/// Builds calls for the whole procedure catalog with one set of credentials.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    credentials: &'a Credentials,
}

impl<'a> Catalog<'a> {
    /// Creates a catalog that authenticates with `credentials`.
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    // -----------------------------------------------------------------------
    // Moblogs
    // -----------------------------------------------------------------------

    /// `ta.Moblog.GetMyMoblogs`: the caller's moblogs.
    pub fn get_my_moblogs(&self) -> Call {
        self.credentials.call(Procedure::GetMyMoblogs).build()
    }

    /// `ta.Moblog.GetCommunityMoblogs`: community moblogs, optionally filtered.
    ///
    /// `which` selects the listing: unset or empty for the 30 most recent, a
    /// number for that many most recent, a date for moblogs created on or after
    /// it, or `"all"`. It is left out of the call entirely when unset or empty.
    pub fn get_community_moblogs(&self, which: Option<&str>) -> Call {
        self.credentials
            .call(Procedure::GetCommunityMoblogs)
            .optional_text(which)
            .build()
    }

    /// `ta.Moblog.Update`: replaces a moblog's settings.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        moblog_id: impl Into<MoblogId>,
        domain: &str,
        secret_word: &str,
        title: &str,
        description: &str,
        approval_type: impl Into<ApprovalType>,
        allow_comments: impl Into<AllowComments>,
    ) -> Call {
        self.credentials
            .call(Procedure::MoblogUpdate)
            .int(moblog_id.into().as_i32())
            .text(domain)
            .text(secret_word)
            .text(title)
            .text(description)
            .text(approval_type.into().as_str())
            .text(allow_comments.into().as_str())
            .build()
    }

    /// `ta.Moblog.ChangeTitle`.
    pub fn change_title(&self, moblog_id: impl Into<MoblogId>, title: &str) -> Call {
        self.moblog_text(Procedure::MoblogChangeTitle, moblog_id.into(), title)
    }

    /// `ta.Moblog.ChangeText`: the description shown on the moblog.
    pub fn change_text(&self, moblog_id: impl Into<MoblogId>, text: &str) -> Call {
        self.moblog_text(Procedure::MoblogChangeText, moblog_id.into(), text)
    }

    /// `ta.Moblog.ChangeDomain`.
    pub fn change_domain(&self, moblog_id: impl Into<MoblogId>, domain: &str) -> Call {
        self.moblog_text(Procedure::MoblogChangeDomain, moblog_id.into(), domain)
    }

    /// `ta.Moblog.ChangeSecretWord`: the word in the moblog's posting address.
    pub fn change_secret_word(&self, moblog_id: impl Into<MoblogId>, secret_word: &str) -> Call {
        self.moblog_text(Procedure::MoblogChangeSecretWord, moblog_id.into(), secret_word)
    }

    // -----------------------------------------------------------------------
    // Entries and keywords
    // -----------------------------------------------------------------------

    /// `ta.Entry.Update`: creates (`entry_id` 0) or replaces an entry.
    ///
    /// The encoded file and its type tag (`"JPG"`, `"JPEG"`, `"MP4"`, `"3GP"`,
    /// `"3G2"`, `"MOV"`) are always the last two parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn entry_update(
        &self,
        moblog_id: impl Into<MoblogId>,
        entry_id: impl Into<EntryId>,
        title: &str,
        text: &str,
        category_id: impl Into<CategoryId>,
        image: Payload,
        file_type: &str,
    ) -> Call {
        self.credentials
            .call(Procedure::EntryUpdate)
            .int(moblog_id.into().as_i32())
            .int(entry_id.into().as_i32())
            .text(title)
            .text(text)
            .int(category_id.into().as_i32())
            .payload(image)
            .text(file_type)
            .build()
    }

    /// `ta.Entry.Delete`.
    pub fn entry_delete(
        &self,
        moblog_id: impl Into<MoblogId>,
        entry_id: impl Into<EntryId>,
    ) -> Call {
        self.credentials
            .call(Procedure::EntryDelete)
            .int(moblog_id.into().as_i32())
            .int(entry_id.into().as_i32())
            .build()
    }

    /// `ta.Keywords.Add`: comma-separated keywords for an entry.
    pub fn add_keywords(&self, entry_id: impl Into<EntryId>, keywords: &str) -> Call {
        self.credentials
            .call(Procedure::KeywordsAdd)
            .int(entry_id.into().as_i32())
            .text(keywords)
            .build()
    }

    // -----------------------------------------------------------------------
    // Favorites
    // -----------------------------------------------------------------------

    /// `ta.Favorites.Update`: creates (`list_id` 0) or renames a favorites list.
    pub fn favorites_update(&self, list_id: impl Into<ListId>, title: &str) -> Call {
        self.list_text(Procedure::FavoritesUpdate, list_id.into(), title)
    }

    /// `ta.Favorites.Delete`.
    pub fn favorites_delete(&self, list_id: impl Into<ListId>, moblog_url: &str) -> Call {
        self.list_text(Procedure::FavoritesDelete, list_id.into(), moblog_url)
    }

    /// `ta.Favorites.Assign`: shows a favorites list on a moblog.
    pub fn favorites_assign(
        &self,
        moblog_id: impl Into<MoblogId>,
        list_id: impl Into<ListId>,
    ) -> Call {
        self.moblog_list(Procedure::FavoritesAssign, moblog_id.into(), list_id.into())
    }

    /// `ta.Favorites.AddMoblog`.
    pub fn favorites_add_moblog(&self, list_id: impl Into<ListId>, moblog_url: &str) -> Call {
        self.list_text(Procedure::FavoritesAddMoblog, list_id.into(), moblog_url)
    }

    /// `ta.Favorites.RemoveMoblog`.
    pub fn favorites_remove_moblog(&self, list_id: impl Into<ListId>, moblog_url: &str) -> Call {
        self.list_text(Procedure::FavoritesRemoveMoblog, list_id.into(), moblog_url)
    }

    // -----------------------------------------------------------------------
    // Bookmarks
    // -----------------------------------------------------------------------

    /// `ta.Bookmarks.Update`: creates (`list_id` 0) or renames a bookmark list.
    pub fn bookmarks_update(&self, list_id: impl Into<ListId>, title: &str) -> Call {
        self.list_text(Procedure::BookmarksUpdate, list_id.into(), title)
    }

    /// `ta.Bookmarks.Assign`.
    pub fn bookmarks_assign(
        &self,
        moblog_id: impl Into<MoblogId>,
        list_id: impl Into<ListId>,
    ) -> Call {
        self.moblog_list(Procedure::BookmarksAssign, moblog_id.into(), list_id.into())
    }

    /// `ta.Bookmarks.UnAssign`.
    pub fn bookmarks_unassign(
        &self,
        moblog_id: impl Into<MoblogId>,
        list_id: impl Into<ListId>,
    ) -> Call {
        self.moblog_list(Procedure::BookmarksUnassign, moblog_id.into(), list_id.into())
    }

    /// `ta.Bookmarks.Delete`.
    pub fn bookmarks_delete(&self, list_id: impl Into<ListId>) -> Call {
        self.credentials
            .call(Procedure::BookmarksDelete)
            .int(list_id.into().as_i32())
            .build()
    }

    /// `ta.Bookmarks.UpdateURL`: adds a URL to a bookmark list.
    pub fn bookmarks_update_url(&self, list_id: impl Into<ListId>, url: &str) -> Call {
        self.list_text(Procedure::BookmarksUpdateUrl, list_id.into(), url)
    }

    /// `ta.Bookmarks.RemoveURL`.
    pub fn bookmarks_remove_url(&self, list_id: impl Into<ListId>, url: &str) -> Call {
        self.list_text(Procedure::BookmarksRemoveUrl, list_id.into(), url)
    }

    // -----------------------------------------------------------------------
    // Templates
    // -----------------------------------------------------------------------

    /// `ta.Template.UpdateSection`: replaces one section's HTML.
    ///
    /// Sections known to the service: `"header"`, `"footer"`, `"frontpage"`,
    /// `"details"`, `"entry"`, `"comment"`, `"result"`.
    pub fn template_update_section(
        &self,
        moblog_id: impl Into<MoblogId>,
        section_id: &str,
        html_code: &str,
    ) -> Call {
        self.credentials
            .call(Procedure::TemplateUpdateSection)
            .int(moblog_id.into().as_i32())
            .text(section_id)
            .text(html_code)
            .build()
    }

    /// `ta.Template.SetTemplate`: applies a library graphic set and layout.
    pub fn set_template(
        &self,
        moblog_id: impl Into<MoblogId>,
        graphic_id: impl Into<GraphicId>,
        layout_id: impl Into<LayoutId>,
    ) -> Call {
        self.credentials
            .call(Procedure::TemplateSetTemplate)
            .int(moblog_id.into().as_i32())
            .int(graphic_id.into().as_i32())
            .int(layout_id.into().as_i32())
            .build()
    }

    // -----------------------------------------------------------------------

    fn moblog_text(&self, procedure: Procedure, moblog_id: MoblogId, value: &str) -> Call {
        self.credentials
            .call(procedure)
            .int(moblog_id.as_i32())
            .text(value)
            .build()
    }

    fn list_text(&self, procedure: Procedure, list_id: ListId, value: &str) -> Call {
        self.credentials
            .call(procedure)
            .int(list_id.as_i32())
            .text(value)
            .build()
    }

    fn moblog_list(&self, procedure: Procedure, moblog_id: MoblogId, list_id: ListId) -> Call {
        self.credentials
            .call(procedure)
            .int(moblog_id.as_i32())
            .int(list_id.as_i32())
            .build()
    }
}
