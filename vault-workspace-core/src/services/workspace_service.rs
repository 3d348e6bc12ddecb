//! Resource workspace state controller

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{WorkspaceError, WorkspaceResult};
use crate::types::{
    DetailFocus, Folder, NavigationState, Resource, ResourceFilter, ResourceSorter, RouteParams,
    Selection, SortProperty, ViewState, WorkspaceConfig, WorkspaceLocation, WorkspaceRoute,
};

use super::ServiceContext;

/// Resource workspace state controller.
///
/// Owns the active filter, sort order, multi-selection, detail focus and
/// scroll target over a cached copy of the externally owned resource
/// list, and keeps them synchronized with router navigation.
///
/// Single writer: every mutation goes through the handlers below, and
/// each handler installs a fully built [`ViewState`] in one assignment.
/// The resource and folder lists themselves are owned by the background
/// worker; this service only caches the last snapshots the host fed it.
pub struct WorkspaceService {
    ctx: Arc<ServiceContext>,
    config: WorkspaceConfig,
    /// Last known snapshot of the externally owned resource list
    resources: Vec<Resource>,
    /// Last known snapshot of the externally owned folder list
    folders: Vec<Folder>,
    /// Key of the last location this service synchronized with
    last_location_key: Option<String>,
    state: ViewState,
}

impl WorkspaceService {
    /// Creates the workspace controller with empty caches and the
    /// default view state.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, config: WorkspaceConfig) -> Self {
        Self {
            ctx,
            config,
            resources: Vec::new(),
            folders: Vec::new(),
            last_location_key: None,
            state: ViewState::default(),
        }
    }

    // ===== Read accessors =====

    /// The whole current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Active search filter.
    #[must_use]
    pub fn filter(&self) -> &ResourceFilter {
        &self.state.filter
    }

    /// Resources matching the active filter, in sort order.
    #[must_use]
    pub fn filtered_resources(&self) -> &[Resource] {
        &self.state.filtered_resources
    }

    /// Current sort order.
    #[must_use]
    pub fn sorter(&self) -> ResourceSorter {
        self.state.sorter
    }

    /// Current multi-selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// Detail side panel focus.
    #[must_use]
    pub fn details(&self) -> &DetailFocus {
        &self.state.details
    }

    /// Whether the detail panel stays open.
    #[must_use]
    pub fn details_locked(&self) -> bool {
        self.state.details_locked
    }

    /// Takes the pending scroll-into-view target, clearing it.
    pub fn take_scroll_target(&mut self) -> Option<String> {
        self.state.scroll_target.take()
    }

    // ===== Startup =====

    /// Asks the background worker to refresh the local folder and
    /// resource storages.
    ///
    /// Fire-and-forget: failures are logged, never propagated. The
    /// refreshed lists come back through [`Self::handle_folders_changed`]
    /// and [`Self::handle_resources_changed`].
    pub async fn populate(&self) {
        let (folders, resources) = futures::future::join(
            self.ctx.background_port.refresh_folders(),
            self.ctx.background_port.refresh_resources(),
        )
        .await;
        if let Err(e) = folders {
            log::warn!("Folder refresh request failed: {e}");
        }
        if let Err(e) = resources {
            log::warn!("Resource refresh request failed: {e}");
        }
    }

    // ===== External list changes =====

    /// Handles a new snapshot of the externally owned resource list.
    ///
    /// Change is detected by id-set equality only: any added or removed
    /// id replaces the cache and re-runs the active filter and sort.
    /// In-place field edits keep the id set identical and are not
    /// detected; hosts that rewrite fields call [`Self::refresh_search`]
    /// themselves.
    pub fn handle_resources_changed(&mut self, resources: Vec<Resource>) {
        let cached: HashSet<&str> = self.resources.iter().map(|r| r.id.as_str()).collect();
        let incoming: HashSet<&str> = resources.iter().map(|r| r.id.as_str()).collect();
        if cached == incoming {
            return;
        }
        log::info!(
            "Resource list changed: {} -> {} entries",
            cached.len(),
            incoming.len()
        );
        self.resources = resources;
        self.refresh_search();
    }

    /// Handles a new snapshot of the externally owned folder list.
    pub fn handle_folders_changed(&mut self, folders: Vec<Folder>) {
        self.folders = folders;
    }

    /// Re-runs the active filter and sort over the cached list.
    pub fn refresh_search(&mut self) {
        let filter = self.state.filter.clone();
        self.search(filter);
    }

    // ===== Search and sort =====

    /// Applies the given filter over the cached resource list, re-sorts,
    /// and installs the next view state.
    ///
    /// The selection is intersected with the new filtered list so it can
    /// never reference an invisible resource.
    pub fn search(&mut self, filter: ResourceFilter) {
        let Some(mut filtered) = filter.apply(&self.resources) else {
            // ResourceFilter::None leaves the current view untouched.
            return;
        };
        // RecentlyModified owns its ordering; every other filter follows
        // the current sorter.
        if !matches!(filter, ResourceFilter::RecentlyModified) {
            self.state.sorter.sort(&mut filtered);
        }
        log::debug!(
            "Search {}: {} of {} resources",
            filter.kind(),
            filtered.len(),
            self.resources.len()
        );

        let mut next = self.state.clone();
        next.filter = filter;
        next.filtered_resources = filtered;
        next.selection.retain_in(&next.filtered_resources);
        self.state = next;
    }

    /// Toggles the sort order onto the given property and re-sorts the
    /// filtered list.
    pub fn sort_by(&mut self, property: SortProperty) {
        let mut next = self.state.clone();
        next.sorter.toggle(property);
        next.sorter.sort(&mut next.filtered_resources);
        self.state = next;
    }

    // ===== Selection =====

    /// Single-click selection: selects the resource, or clears the
    /// selection when it was the sole selected one.
    pub async fn select(&mut self, resource: Resource) -> WorkspaceResult<()> {
        let mut next = self.state.clone();
        next.selection.select(resource);
        next.details = details_for(&next.selection);
        self.state = next;
        self.redirect_after_selection().await
    }

    /// Ctrl-click selection: toggles the resource's membership.
    pub async fn select_multiple(&mut self, resource: Resource) -> WorkspaceResult<()> {
        let mut next = self.state.clone();
        next.selection.select_multiple(resource);
        next.details = details_for(&next.selection);
        self.state = next;
        self.redirect_after_selection().await
    }

    /// Shift-click selection: selects the contiguous slice between the
    /// anchor and the given resource.
    pub async fn select_range(&mut self, resource: Resource) -> WorkspaceResult<()> {
        let mut next = self.state.clone();
        next.selection
            .select_range(resource, &next.filtered_resources);
        next.details = details_for(&next.selection);
        self.state = next;
        self.redirect_after_selection().await
    }

    /// Selects the whole filtered list.
    pub async fn select_all(&mut self) -> WorkspaceResult<()> {
        let mut next = self.state.clone();
        next.selection.select_all(&next.filtered_resources);
        next.details = details_for(&next.selection);
        self.state = next;
        self.redirect_after_selection().await
    }

    /// Clears the selection.
    pub async fn unselect_all(&mut self) -> WorkspaceResult<()> {
        let mut next = self.state.clone();
        next.selection.clear();
        next.details = details_for(&next.selection);
        self.state = next;
        self.redirect_after_selection().await
    }

    /// Post-selection redirect rule: exactly one selected resource leads
    /// to its detail route, anything else back to the list with the
    /// active filter attached as navigation state.
    async fn redirect_after_selection(&self) -> WorkspaceResult<()> {
        let base = &self.config.route_base;
        match self.state.selection.sole() {
            Some(resource) => {
                let route = WorkspaceRoute::PasswordView {
                    resource_id: resource.id.clone(),
                };
                self.ctx.navigator.push(&route.to_path(base), None).await
            }
            None => {
                let state = NavigationState {
                    filter: self.state.filter.clone(),
                };
                self.ctx
                    .navigator
                    .push(&WorkspaceRoute::Passwords.to_path(base), Some(state))
                    .await
            }
        }
    }

    // ===== Detail panel =====

    /// Toggles whether the detail panel stays open. Closing it clears
    /// the current focus.
    pub fn toggle_detail_lock(&mut self) {
        let mut next = self.state.clone();
        next.details_locked = !next.details_locked;
        if !next.details_locked {
            next.details = DetailFocus::None;
        }
        self.state = next;
    }

    // ===== Route synchronization =====

    /// Synchronizes the view state with a router location change.
    ///
    /// Runs when the location key differs from the last synchronized one,
    /// and once at first load while the filter is still
    /// [`ResourceFilter::None`].
    pub async fn handle_route_change(
        &mut self,
        location: &WorkspaceLocation,
        params: &RouteParams,
    ) {
        let location_changed = self.last_location_key.as_deref() != Some(location.key.as_str());
        let first_load = matches!(self.state.filter, ResourceFilter::None);
        if !location_changed && !first_load {
            return;
        }
        self.last_location_key = Some(location.key.clone());
        self.handle_folder_route(params).await;
        self.handle_resource_route(location, params).await;
    }

    /// Folder view route, e.g. `/app/folders/view/{filterByFolderId}`.
    async fn handle_folder_route(&mut self, params: &RouteParams) {
        let Some(folder_id) = params.filter_by_folder_id.as_deref() else {
            return;
        };
        if let Some(folder) = self.folders.iter().find(|f| f.id == folder_id).cloned() {
            self.search(ResourceFilter::Folder(folder.clone()));
            let mut next = self.state.clone();
            next.details = DetailFocus::Folder(folder);
            self.state = next;
        } else {
            log::warn!("{}", WorkspaceError::FolderNotFound(folder_id.to_string()));
            self.ctx
                .feedback
                .display_error("The folder does not exist anymore.")
                .await;
        }
    }

    /// Passwords route, with or without a selected resource id.
    async fn handle_resource_route(
        &mut self,
        location: &WorkspaceLocation,
        params: &RouteParams,
    ) {
        if !location.is_passwords_route() {
            return;
        }
        match params.selected_resource_id.as_deref() {
            // Password detail view, e.g. reached through the address bar.
            Some(resource_id) => self.handle_single_resource_route(resource_id).await,
            // Plain passwords list.
            None => self.handle_all_resources_route(location),
        }
    }

    /// Detail route for one resource: select it, scroll it into view and
    /// focus the detail panel on it. An id absent from the cache surfaces
    /// a user-visible error and falls back to the all view.
    async fn handle_single_resource_route(&mut self, resource_id: &str) {
        if let Some(resource) = self.resources.iter().find(|r| r.id == resource_id).cloned() {
            if matches!(self.state.filter, ResourceFilter::None) {
                self.search(ResourceFilter::All);
            }
            let mut next = self.state.clone();
            next.selection.replace(resource.clone());
            next.details = DetailFocus::Resource(resource.clone());
            next.scroll_target = Some(resource.id);
            self.state = next;
        } else {
            log::warn!(
                "{}",
                WorkspaceError::ResourceNotFound(resource_id.to_string())
            );
            self.ctx
                .feedback
                .display_error("The resource does not exist anymore.")
                .await;
            self.search(ResourceFilter::All);
            let mut next = self.state.clone();
            next.details = DetailFocus::None;
            self.state = next;
        }
    }

    /// Passwords list route: apply the filter carried as navigation
    /// state, defaulting to the all view, and clear the detail focus.
    fn handle_all_resources_route(&mut self, location: &WorkspaceLocation) {
        let filter = location.filter.clone().unwrap_or(ResourceFilter::All);
        self.search(filter);
        let mut next = self.state.clone();
        next.details = DetailFocus::None;
        self.state = next;
    }
}

/// Detail focus rule shared by every selection mutation: the sole
/// selected resource is focused, anything else clears the panel.
fn details_for(selection: &Selection) -> DetailFocus {
    match selection.sole() {
        Some(resource) => DetailFocus::Resource(resource.clone()),
        None => DetailFocus::None,
    }
}
