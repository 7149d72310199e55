//! Catalog context and rebuild sequencing.
//!
//! `Catalog` is an explicit context value owned by the caller and passed
//! into every operation; there is no global lookup. All operations run on
//! a single cooperative dispatch thread. Teardown is two-phase:
//! `mark_for_destruction` is cheap and synchronous, `finalize` is meant to
//! be scheduled for the next dispatch turn so no in-flight callback ever
//! observes a half-destroyed context.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{CatalogSettings, SettingsManager};
use crate::error::{Result, SettingsResult};
use crate::models::{CatalogRow, GroupHierarchy, Layout, ProfileRecord};
use crate::prompt::{Confirmation, UserPrompt};
use crate::quickconnect;
use crate::sort::{SortColumn, SortDirection};
use crate::status::{NoOpStatusReporter, StatusReporter};
use crate::store::ProfileStore;
use crate::view_state::ViewState;

use super::model::CatalogModel;

/// Opens sessions for profile records handed to it
///
/// Connection launching itself is external; the catalog only iterates the
/// selected rows and hands each loaded record over.
pub trait ConnectionLauncher {
    /// Opens a session for the given profile
    fn open(&mut self, profile: &ProfileRecord);
}

/// The catalog context: store access, durable settings, and live view state
pub struct Catalog<S: ProfileStore> {
    store: S,
    settings: CatalogSettings,
    settings_manager: Option<SettingsManager>,
    status: Box<dyn StatusReporter>,
    model: CatalogModel,
    query: String,
    selected: Option<String>,
    expanded: HashSet<String>,
    item_count: usize,
    prompting: bool,
    reload_deferred: bool,
    defunct: bool,
}

impl<S: ProfileStore> Catalog<S> {
    /// Creates a catalog over the given store with explicit settings
    ///
    /// The model starts empty; call [`reload`](Self::reload) to populate
    /// it. The expansion set starts from the persisted paths.
    #[must_use]
    pub fn new(store: S, settings: CatalogSettings) -> Self {
        let expanded = settings.expanded_group_paths.clone();
        let layout = settings.layout;
        Self {
            store,
            settings,
            settings_manager: None,
            status: Box::new(NoOpStatusReporter::new()),
            model: CatalogModel::empty(layout),
            query: String::new(),
            selected: None,
            expanded,
            item_count: 0,
            prompting: false,
            reload_deferred: false,
            defunct: false,
        }
    }

    /// Creates a catalog whose settings load from and persist through the
    /// given manager
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed.
    pub fn with_settings_manager(store: S, manager: SettingsManager) -> Result<Self> {
        let settings = manager.load_settings()?;
        let mut catalog = Self::new(store, settings);
        catalog.settings_manager = Some(manager);
        Ok(catalog)
    }

    /// Replaces the status reporter the catalog publishes to
    pub fn set_status_reporter(&mut self, reporter: Box<dyn StatusReporter>) {
        self.status = reporter;
    }

    // ========== Accessors ==========

    /// Returns the profile store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the profile store mutably, for host-driven edits
    ///
    /// Call [`reload`](Self::reload) afterwards to pick the changes up.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns the current durable settings
    pub const fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Returns the live query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the identity of the selected profile row, if any
    #[must_use]
    pub fn selected_identity(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Returns the currently expanded folder paths
    pub const fn expanded_paths(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Returns the number of profiles found by the last reload
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the configured layout
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.settings.layout
    }

    /// Returns the layout the model is actually presented in
    ///
    /// A live query temporarily forces the tree presentation into a flat
    /// list; clearing the query drops the override.
    #[must_use]
    pub fn effective_layout(&self) -> Layout {
        if self.settings.layout == Layout::Tree && !self.query.is_empty() {
            Layout::List
        } else {
            self.settings.layout
        }
    }

    /// Returns the filtered, sorted row sequence for rendering
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&CatalogRow> {
        self.model.visible_rows(
            &self.query,
            self.settings.sort_column,
            self.settings.sort_direction,
        )
    }

    // ========== Rebuild entry points ==========

    /// Performs a full reload
    ///
    /// Captures the view state, fetches profiles and hierarchy from the
    /// store, rebuilds the row model, and restores expansion and selection
    /// against the new sequence. Enumeration failure is not fatal: the
    /// catalog degrades to an empty view with a zero-row published count.
    ///
    /// A reload requested while a user prompt is outstanding is deferred
    /// until the prompt returns; a reload on a context marked for
    /// destruction is a no-op.
    pub fn reload(&mut self) {
        if self.defunct {
            return;
        }
        if self.prompting {
            self.reload_deferred = true;
            return;
        }

        let state = self.capture_state();

        let profiles = match self.store.enumerate() {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!(error = %e, "profile enumeration failed, showing empty catalog");
                Vec::new()
            }
        };

        let layout = self.effective_layout();
        let hierarchy = if layout == Layout::Tree {
            self.store.group_hierarchy()
        } else {
            GroupHierarchy::new()
        };

        self.item_count = profiles.len();
        self.model = CatalogModel::build(layout, &hierarchy, &profiles);

        let outcome = state.restore(&self.visible_rows());
        if layout == Layout::Tree {
            self.expanded = outcome.expanded;
        }
        // Under the list presentation the stored expansion set is kept
        // untouched so a later tree rebuild can still restore it.
        self.selected = outcome.selected;

        debug!(items = self.item_count, query = %self.query, "catalog reloaded");
        self.publish_item_count();
    }

    /// Applies a query change over the existing model
    ///
    /// The lightweight path: filter and sort are re-evaluated on demand and
    /// only the selection is reconciled; rows and folders have not
    /// changed, so expansion state is untouched. When the query flips the
    /// tree presentation into its flat override (or back), the model shape
    /// changes and a full reload runs instead.
    pub fn set_query(&mut self, text: impl Into<String>) {
        if self.defunct {
            return;
        }
        let previous_layout = self.effective_layout();
        self.query = text.into();

        if self.effective_layout() == previous_layout {
            let retained = self
                .visible_rows()
                .iter()
                .find_map(|row| match row.identity() {
                    Some(id) if Some(id) == self.selected.as_deref() => Some(id.to_string()),
                    _ => None,
                });
            self.selected = retained;
            debug!(query = %self.query, "catalog re-filtered");
        } else {
            self.reload();
        }
    }

    // ========== View preferences ==========

    /// Changes the sort column and direction, persisting write-through
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written; the
    /// in-memory ordering changes regardless.
    pub fn set_sort(
        &mut self,
        column: SortColumn,
        direction: SortDirection,
    ) -> SettingsResult<()> {
        if self.defunct {
            return Ok(());
        }
        self.settings.sort_column = column;
        self.settings.sort_direction = direction;
        self.persist_settings()
    }

    /// Switches the catalog layout
    ///
    /// The query is cleared on a layout switch, dropping any list
    /// override, and the model is rebuilt.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn set_layout(&mut self, layout: Layout) -> SettingsResult<()> {
        if self.defunct || self.settings.layout == layout {
            return Ok(());
        }
        self.settings.layout = layout;
        self.query.clear();
        let result = self.persist_settings();
        self.reload();
        result
    }

    // ========== Selection and expansion ==========

    /// Selects the profile row with the given identity
    ///
    /// Selecting an identity absent from the visible sequence clears the
    /// selection. A successful selection publishes `name (filename)` to
    /// the status surface.
    pub fn select(&mut self, identity: Option<&str>) {
        if self.defunct {
            return;
        }
        let description = identity.and_then(|wanted| {
            self.visible_rows().iter().find_map(|row| match row {
                CatalogRow::Profile(p) if p.record.filename == wanted => Some((
                    p.record.filename.clone(),
                    format!("{} ({})", p.record.name, p.record.filename),
                )),
                _ => None,
            })
        });
        match description {
            Some((filename, text)) => {
                self.selected = Some(filename);
                self.status.publish(&text);
            }
            None => self.selected = None,
        }
    }

    /// Clears the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Expands or collapses the folder with the given full path
    pub fn set_expanded(&mut self, full_path: &str, expanded: bool) {
        if self.defunct {
            return;
        }
        if expanded {
            self.expanded.insert(full_path.to_string());
        } else {
            self.expanded.remove(full_path);
        }
    }

    /// Expands every folder in the model
    pub fn expand_all(&mut self) {
        if self.defunct {
            return;
        }
        self.expanded = self
            .model
            .rows()
            .iter()
            .filter_map(|row| match row {
                CatalogRow::Folder(f) => Some(f.full_path.clone()),
                CatalogRow::Profile(_) => None,
            })
            .collect();
    }

    /// Collapses every folder
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    // ========== Quick connect ==========

    /// Builds an ephemeral profile for the quick-connect affordance
    ///
    /// The chosen protocol is persisted as the default for the next quick
    /// connect before the server string is validated, mirroring the
    /// surface behavior this replaces.
    ///
    /// # Errors
    ///
    /// Returns an error when the server string is empty or contains a
    /// path separator.
    pub fn quick_connect(&mut self, raw_server: &str, protocol: &str) -> Result<ProfileRecord> {
        if protocol != self.settings.last_quick_connect_protocol {
            self.settings.last_quick_connect_protocol = protocol.to_string();
            if let Err(e) = self.persist_settings() {
                warn!(error = %e, "failed to persist quick connect protocol");
            }
        }
        Ok(quickconnect::ephemeral_profile(raw_server, protocol)?)
    }

    // ========== Row operations ==========

    /// Deletes the selected profile after a confirmation prompt
    ///
    /// Declining the prompt leaves the store untouched. The selection is
    /// cleared either way.
    pub fn delete_selected(&mut self, prompt: &dyn UserPrompt) {
        if self.defunct {
            return;
        }
        let Some(filename) = self.selected.clone() else {
            return;
        };
        let name = self
            .store
            .load(&filename)
            .map_or_else(|_| filename.clone(), |record| record.name);

        if self.ask(prompt, &format!("Are you sure you want to delete “{name}”?"))
            == Confirmation::Yes
        {
            if let Err(e) = self.store.delete(&filename) {
                warn!(error = %e, "failed to delete profile");
            }
            self.reload();
        }
        self.selected = None;
        self.run_deferred();
    }

    /// Deletes a multi-selection of profiles after one confirmation
    ///
    /// Rows are processed in the given order. If a row fails to read back,
    /// a single warning is surfaced and the batch aborts immediately:
    /// already-deleted rows stay deleted, the failing row and everything
    /// after it are left untouched.
    pub fn delete_batch(&mut self, identities: &[String], prompt: &dyn UserPrompt) {
        if self.defunct {
            return;
        }
        if self.ask(prompt, "Are you sure you want to delete the selected profiles?")
            != Confirmation::Yes
        {
            self.run_deferred();
            return;
        }

        for filename in identities {
            let result = match self.store.load(filename) {
                Ok(_) => self.store.delete(filename),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                warn!(error = %e, "batch delete aborted");
                self.warn_user(prompt, "Failed to delete profiles!");
                self.clear_selection();
                self.run_deferred();
                return;
            }
            self.reload();
        }
        self.clear_selection();
        self.run_deferred();
    }

    /// Opens a session for every profile in a multi-selection
    ///
    /// Rows are processed in the given order. If a row fails to read back,
    /// a single warning is surfaced and the batch aborts immediately;
    /// sessions already opened stay open.
    pub fn connect_batch(
        &mut self,
        identities: &[String],
        launcher: &mut dyn ConnectionLauncher,
        prompt: &dyn UserPrompt,
    ) {
        if self.defunct {
            return;
        }
        for filename in identities {
            match self.store.load(filename) {
                Ok(record) => launcher.open(&record),
                Err(e) => {
                    warn!(error = %e, "batch connect aborted");
                    self.warn_user(prompt, "Failed to load profiles!");
                    self.clear_selection();
                    self.run_deferred();
                    return;
                }
            }
        }
        self.clear_selection();
        self.run_deferred();
    }

    // ========== Teardown ==========

    /// First phase of teardown: persist state and disable the context
    ///
    /// Saves the sort order and expansion set write-through and marks the
    /// context defunct: every subsequent operation becomes a no-op. Cheap
    /// and synchronous, safe to call from any event handler.
    pub fn mark_for_destruction(&mut self) {
        if self.defunct {
            return;
        }
        self.settings.expanded_group_paths = self.expanded.clone();
        if let Err(e) = self.persist_settings() {
            warn!(error = %e, "failed to persist settings before destruction");
        }
        self.defunct = true;
    }

    /// Returns true once the context has been marked for destruction
    #[must_use]
    pub const fn is_marked_for_destruction(&self) -> bool {
        self.defunct
    }

    /// Second phase of teardown: consume the context
    ///
    /// Callers must schedule this for the next dispatch turn rather than
    /// run it inside the handler that triggered the teardown, so no live
    /// callback into the same context observes it mid-destruction. Returns
    /// the store to the caller.
    #[must_use]
    pub fn finalize(self) -> S {
        self.store
    }

    // ========== Internals ==========

    fn capture_state(&self) -> ViewState {
        ViewState::capture(
            self.settings.sort_column,
            self.settings.sort_direction,
            self.expanded.clone(),
            self.selected.clone(),
            self.query.clone(),
        )
    }

    fn publish_item_count(&self) {
        let message = if self.item_count == 1 {
            "Total 1 item.".to_string()
        } else {
            format!("Total {} items.", self.item_count)
        };
        self.status.publish(&message);
    }

    fn persist_settings(&self) -> SettingsResult<()> {
        match &self.settings_manager {
            Some(manager) => manager.save_settings(&self.settings),
            None => Ok(()),
        }
    }

    /// Runs a blocking confirmation; rebuilds requested meanwhile defer
    fn ask(&mut self, prompt: &dyn UserPrompt, message: &str) -> Confirmation {
        self.prompting = true;
        let answer = prompt.confirm(message);
        self.prompting = false;
        answer
    }

    fn warn_user(&mut self, prompt: &dyn UserPrompt, message: &str) {
        self.prompting = true;
        prompt.warn(message);
        self.prompting = false;
    }

    fn run_deferred(&mut self) {
        if self.reload_deferred {
            self.reload_deferred = false;
            self.reload();
        }
    }
}
