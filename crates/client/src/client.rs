//! The typed moblog client.

use std::path::Path;
use std::sync::Arc;

use moblog::{
    coerce, AllowComments, ApprovalType, Call, CallId, Catalog, CategoryId, CoercionError,
    Credentials, EntryId, GraphicId, LayoutId, ListId, MoblogError, MoblogId, Record, ReturnedId,
    Transport, Value,
};
use tracing::Instrument;

use crate::payload::read_payload;

/// Authenticated access to every procedure of the moblog service.
///
/// Holds the credential triple and a shared transport; nothing else. Cloning
/// is cheap and clones may be used from several tasks at once, provided the
/// transport supports concurrent calls.
#[derive(Clone)]
pub struct Client {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client that authenticates every call with `credentials`.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// The credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Call constructors bound to this client's credentials.
    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.credentials)
    }

    // -----------------------------------------------------------------------
    // Moblogs
    // -----------------------------------------------------------------------

    /// Lists the caller's moblogs (`title`, `MoblogID`, `url`).
    pub async fn get_my_moblogs(&self) -> Result<Vec<Record>, MoblogError> {
        let call = self.catalog().get_my_moblogs();
        self.records(call).await
    }

    /// Lists community moblogs (`title`, `MoblogID`, `url`, `postTo`).
    ///
    /// See [`Catalog::get_community_moblogs`] for the meaning of `which`.
    pub async fn get_community_moblogs(
        &self,
        which: Option<&str>,
    ) -> Result<Vec<Record>, MoblogError> {
        let call = self.catalog().get_community_moblogs(which);
        self.records(call).await
    }

    /// Replaces a moblog's settings; returns the moblog id.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        moblog_id: impl Into<MoblogId>,
        domain: &str,
        secret_word: &str,
        title: &str,
        description: &str,
        approval_type: impl Into<ApprovalType>,
        allow_comments: impl Into<AllowComments>,
    ) -> Result<ReturnedId, MoblogError> {
        let call = self.catalog().update(
            moblog_id,
            domain,
            secret_word,
            title,
            description,
            approval_type,
            allow_comments,
        );
        self.identifier(call).await
    }

    /// Changes a moblog's title; returns the moblog id.
    pub async fn change_title(
        &self,
        moblog_id: impl Into<MoblogId>,
        title: &str,
    ) -> Result<ReturnedId, MoblogError> {
        let call = self.catalog().change_title(moblog_id, title);
        self.identifier(call).await
    }

    /// Changes a moblog's description; returns the moblog id.
    pub async fn change_text(
        &self,
        moblog_id: impl Into<MoblogId>,
        text: &str,
    ) -> Result<ReturnedId, MoblogError> {
        let call = self.catalog().change_text(moblog_id, text);
        self.identifier(call).await
    }

    /// Changes a moblog's domain name; returns the moblog id.
    pub async fn change_domain(
        &self,
        moblog_id: impl Into<MoblogId>,
        domain: &str,
    ) -> Result<ReturnedId, MoblogError> {
        let call = self.catalog().change_domain(moblog_id, domain);
        self.identifier(call).await
    }

    /// Changes a moblog's secret word; returns the moblog id.
    pub async fn change_secret_word(
        &self,
        moblog_id: impl Into<MoblogId>,
        secret_word: &str,
    ) -> Result<ReturnedId, MoblogError> {
        let call = self.catalog().change_secret_word(moblog_id, secret_word);
        self.identifier(call).await
    }

    // -----------------------------------------------------------------------
    // Entries and keywords
    // -----------------------------------------------------------------------

    /// Uploads the file at `image` as a new (`entry_id` 0) or replacement
    /// entry; returns the entry id.
    ///
    /// The file is read and encoded before anything is sent. If it cannot be
    /// read the call fails with [`MoblogError::Io`] and no remote call is made.
    #[allow(clippy::too_many_arguments)]
    pub async fn entry_update(
        &self,
        moblog_id: impl Into<MoblogId>,
        entry_id: impl Into<EntryId>,
        title: &str,
        text: &str,
        category_id: impl Into<CategoryId>,
        image: impl AsRef<Path>,
        file_type: &str,
    ) -> Result<ReturnedId, MoblogError> {
        let payload = read_payload(image).await?;
        let call = self
            .catalog()
            .entry_update(moblog_id, entry_id, title, text, category_id, payload, file_type);
        self.identifier(call).await
    }

    /// Deletes an entry; returns the service's status token (`"OK"`).
    pub async fn entry_delete(
        &self,
        moblog_id: impl Into<MoblogId>,
        entry_id: impl Into<EntryId>,
    ) -> Result<String, MoblogError> {
        let call = self.catalog().entry_delete(moblog_id, entry_id);
        self.status(call).await
    }

    /// Adds comma-separated keywords to an entry.
    pub async fn add_keywords(
        &self,
        entry_id: impl Into<EntryId>,
        keywords: &str,
    ) -> Result<String, MoblogError> {
        let call = self.catalog().add_keywords(entry_id, keywords);
        self.status(call).await
    }

    // -----------------------------------------------------------------------
    // Favorites (undocumented replies, returned as-is)
    // -----------------------------------------------------------------------

    /// Creates (`list_id` 0) or renames a favorites list.
    pub async fn favorites_update(
        &self,
        list_id: impl Into<ListId>,
        title: &str,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().favorites_update(list_id, title);
        self.passthrough(call).await
    }

    /// Removes a moblog from a favorites list.
    pub async fn favorites_delete(
        &self,
        list_id: impl Into<ListId>,
        moblog_url: &str,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().favorites_delete(list_id, moblog_url);
        self.passthrough(call).await
    }

    /// Shows a favorites list on a moblog (`list_id` 0 is "My Favorites").
    pub async fn favorites_assign(
        &self,
        moblog_id: impl Into<MoblogId>,
        list_id: impl Into<ListId>,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().favorites_assign(moblog_id, list_id);
        self.passthrough(call).await
    }

    /// Adds a moblog to a favorites list.
    pub async fn favorites_add_moblog(
        &self,
        list_id: impl Into<ListId>,
        moblog_url: &str,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().favorites_add_moblog(list_id, moblog_url);
        self.passthrough(call).await
    }

    /// Removes a moblog from a favorites list.
    pub async fn favorites_remove_moblog(
        &self,
        list_id: impl Into<ListId>,
        moblog_url: &str,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().favorites_remove_moblog(list_id, moblog_url);
        self.passthrough(call).await
    }

    // -----------------------------------------------------------------------
    // Bookmarks (only update and assign document their replies)
    // -----------------------------------------------------------------------

    /// Creates (`list_id` 0) or renames a bookmark list; returns the list id.
    pub async fn bookmarks_update(
        &self,
        list_id: impl Into<ListId>,
        title: &str,
    ) -> Result<ReturnedId, MoblogError> {
        let call = self.catalog().bookmarks_update(list_id, title);
        self.identifier(call).await
    }

    /// Shows a bookmark list on a moblog.
    pub async fn bookmarks_assign(
        &self,
        moblog_id: impl Into<MoblogId>,
        list_id: impl Into<ListId>,
    ) -> Result<String, MoblogError> {
        let call = self.catalog().bookmarks_assign(moblog_id, list_id);
        self.status(call).await
    }

    /// Removes a bookmark list from a moblog.
    pub async fn bookmarks_unassign(
        &self,
        moblog_id: impl Into<MoblogId>,
        list_id: impl Into<ListId>,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().bookmarks_unassign(moblog_id, list_id);
        self.passthrough(call).await
    }

    /// Deletes a bookmark list.
    pub async fn bookmarks_delete(&self, list_id: impl Into<ListId>) -> Result<Value, MoblogError> {
        let call = self.catalog().bookmarks_delete(list_id);
        self.passthrough(call).await
    }

    /// Adds a URL to a bookmark list.
    pub async fn bookmarks_update_url(
        &self,
        list_id: impl Into<ListId>,
        url: &str,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().bookmarks_update_url(list_id, url);
        self.passthrough(call).await
    }

    /// Removes a URL from a bookmark list.
    pub async fn bookmarks_remove_url(
        &self,
        list_id: impl Into<ListId>,
        url: &str,
    ) -> Result<Value, MoblogError> {
        let call = self.catalog().bookmarks_remove_url(list_id, url);
        self.passthrough(call).await
    }

    // -----------------------------------------------------------------------
    // Templates
    // -----------------------------------------------------------------------

    /// Replaces the HTML of one template section.
    pub async fn template_update_section(
        &self,
        moblog_id: impl Into<MoblogId>,
        section_id: &str,
        html_code: &str,
    ) -> Result<String, MoblogError> {
        let call = self.catalog().template_update_section(moblog_id, section_id, html_code);
        self.status(call).await
    }

    /// Applies a graphic set and layout from the template library.
    pub async fn set_template(
        &self,
        moblog_id: impl Into<MoblogId>,
        graphic_id: impl Into<GraphicId>,
        layout_id: impl Into<LayoutId>,
    ) -> Result<String, MoblogError> {
        let call = self.catalog().set_template(moblog_id, graphic_id, layout_id);
        self.status(call).await
    }

    // -----------------------------------------------------------------------
    // Dispatch and coercion
    // -----------------------------------------------------------------------

    /// Sends a built call and returns the untyped reply.
    pub async fn execute(&self, call: Call) -> Result<Value, MoblogError> {
        let procedure = call.procedure();
        let span = tracing::debug_span!(
            "moblog_call",
            call_id = %CallId::new_random(),
            procedure = procedure.wire_name(),
            arity = call.arity()
        );

        async {
            tracing::debug!("dispatching call");
            match self.transport.invoke(procedure.wire_name(), call.params()).await {
                Ok(value) => {
                    tracing::debug!(reply = %value.kind(), "received reply");
                    Ok(value)
                }
                Err(source) => {
                    tracing::warn!(error = %source, "remote call failed");
                    Err(MoblogError::Transport { procedure, source })
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn records(&self, call: Call) -> Result<Vec<Record>, MoblogError> {
        let procedure = call.procedure();
        let value = self.execute(call).await?;
        coerce::records(procedure, value).map_err(coercion_failed)
    }

    async fn identifier(&self, call: Call) -> Result<ReturnedId, MoblogError> {
        let procedure = call.procedure();
        let value = self.execute(call).await?;
        coerce::identifier(procedure, value).map_err(coercion_failed)
    }

    async fn status(&self, call: Call) -> Result<String, MoblogError> {
        let procedure = call.procedure();
        let value = self.execute(call).await?;
        coerce::status(procedure, value).map_err(coercion_failed)
    }

    async fn passthrough(&self, call: Call) -> Result<Value, MoblogError> {
        self.execute(call).await.map(coerce::passthrough)
    }
}

fn coercion_failed(err: CoercionError) -> MoblogError {
    tracing::warn!(
        procedure = %err.procedure,
        expected = %err.expected,
        found = %err.found,
        "reply did not match the documented shape"
    );
    MoblogError::Coercion(err)
}
