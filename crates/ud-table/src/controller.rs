use crate::{
    Notifier, Page, Severity, SortDirection, SortKey, TableViewState, clamp_page, filter, paginate,
    sort, total_pages,
};

use log::debug;
use ud_client::{ClientResult, UserStore};
use ud_core::{NewUser, Role, User, UserUpdate, assign_display_indices};

/// Single source of truth for the user table.
///
/// Owns the last-fetched base record set and the [`TableViewState`], runs
/// the filter -> sort -> paginate pipeline (always whole, always in that
/// order) on every input change, and mediates mutations against the
/// [`UserStore`]. Mutations are applied optimistically to the local set and
/// then reconciled by one authoritative refresh; a failed mutation leaves
/// the table exactly as it was.
///
/// Execution is single-threaded event-at-a-time; the only overlap possible
/// is between in-flight fetches, handled by the sequence guard in
/// [`apply_fetch`](Self::apply_fetch).
pub struct TableController<S, N> {
    store: S,
    notifier: N,
    base: Vec<User>,
    view: TableViewState,
    /// Filtered+sorted set (pre-pagination); what exports consume.
    filtered: Vec<User>,
    page: Page,
    next_seq: u64,
    applied_seq: u64,
    pending_fetches: usize,
    last_fetch_error: Option<String>,
}

impl<S: UserStore, N: Notifier> TableController<S, N> {
    pub fn new(store: S, notifier: N, page_size: usize) -> Self {
        Self {
            store,
            notifier,
            base: Vec::new(),
            view: TableViewState::with_page_size(page_size),
            filtered: Vec::new(),
            page: Page::empty(),
            next_seq: 0,
            applied_seq: 0,
            pending_fetches: 0,
            last_fetch_error: None,
        }
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    pub fn view(&self) -> &TableViewState {
        &self.view
    }

    /// The last-applied authoritative record set, in fetch order.
    pub fn base_records(&self) -> &[User] {
        &self.base
    }

    /// The filtered+sorted set without pagination - the export set.
    pub fn filtered_records(&self) -> &[User] {
        &self.filtered
    }

    pub fn visible_page(&self) -> &Page {
        &self.page
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    pub fn last_fetch_error(&self) -> Option<&str> {
        self.last_fetch_error.as_deref()
    }

    // =========================================================================
    // View-state events
    // =========================================================================

    /// Search text changed: back to page 1, full recompute.
    pub fn set_search_text(&mut self, text: &str) {
        self.view.search_text = text.to_string();
        self.view.current_page = 1;
        self.recompute();
    }

    /// Role filter changed: back to page 1, full recompute.
    pub fn set_role_filter(&mut self, role: Option<Role>) {
        self.view.role_filter = role;
        self.view.current_page = 1;
        self.recompute();
    }

    /// Column-header click: same column flips direction, a new column starts
    /// ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view.sort = match self.view.sort {
            Some((current, direction)) if current == key => Some((key, direction.flipped())),
            _ => Some((key, SortDirection::Asc)),
        };
        self.recompute();
    }

    /// Change the page size; the current page re-clamps during recompute.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.view.page_size = page_size.max(1);
        self.recompute();
    }

    /// Jump to a page; out-of-range requests clamp into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        self.view.current_page = page;
        self.recompute();
    }

    // =========================================================================
    // Fetch / refresh
    // =========================================================================

    /// Start a fetch, returning its sequence number. Pair with
    /// [`apply_fetch`](Self::apply_fetch) once the response arrives.
    pub fn begin_fetch(&mut self) -> u64 {
        self.next_seq += 1;
        self.pending_fetches += 1;
        self.next_seq
    }

    /// Apply a completed fetch.
    ///
    /// The most recently completed fetch wins, except that a straggler from
    /// a superseded request never overwrites data a newer request already
    /// applied. Returns true when the result became the new base set.
    ///
    /// On success the view state is kept as-is (search/sort/page survive a
    /// refresh) and display indices are reassigned in fetch order. On error
    /// the previous base set stays untouched.
    pub fn apply_fetch(&mut self, seq: u64, result: ClientResult<Vec<User>>) -> ClientResult<bool> {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);

        let mut records = match result {
            Ok(records) => records,
            Err(err) => {
                self.last_fetch_error = Some(err.to_string());
                self.notifier
                    .notify(Severity::Error, &format!("Failed to load users: {err}"));
                return Err(err);
            }
        };

        if seq < self.applied_seq {
            debug!(
                "Discarding stale fetch result (seq {} < applied {})",
                seq, self.applied_seq
            );
            return Ok(false);
        }

        self.applied_seq = seq;
        self.last_fetch_error = None;
        assign_display_indices(&mut records);
        self.base = records;
        self.recompute();

        Ok(true)
    }

    /// Fetch the collection and apply it (subject to the staleness guard).
    pub async fn refresh(&mut self) -> ClientResult<bool> {
        let seq = self.begin_fetch();
        let result = self.store.fetch_users().await;
        self.apply_fetch(seq, result)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Delete a user: optimistic local removal on success, then one
    /// authoritative refresh. On failure nothing local changes, though a
    /// not-found (the record vanished underneath us) still reconciles via
    /// refresh.
    pub async fn delete_user(&mut self, id: &str) -> ClientResult<()> {
        match self.store.delete_user(id).await {
            Ok(()) => {
                self.base.retain(|user| user.id != id);
                self.recompute();
                self.notifier.notify(Severity::Info, "User deleted");
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to delete user: {err}"));
                if err.is_not_found() {
                    let _ = self.refresh().await;
                }
                Err(err)
            }
        }
    }

    /// Create a user: optimistic local append on success, then one
    /// authoritative refresh. A conflict (duplicate username/email) changes
    /// nothing locally.
    pub async fn create_user(&mut self, new_user: &NewUser) -> ClientResult<User> {
        match self.store.create_user(new_user).await {
            Ok(mut created) => {
                created.display_index = self.base.len() as u32 + 1;
                self.base.push(created.clone());
                self.recompute();
                self.notifier.notify(Severity::Info, "User created");
                let _ = self.refresh().await;
                Ok(created)
            }
            Err(err) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to create user: {err}"));
                Err(err)
            }
        }
    }

    /// Update a user: optimistic local patch on success, then one
    /// authoritative refresh.
    pub async fn update_user(&mut self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        match self.store.update_user(id, update).await {
            Ok(updated) => {
                if let Some(slot) = self.base.iter_mut().find(|user| user.id == id) {
                    let display_index = slot.display_index;
                    *slot = updated.clone();
                    slot.display_index = display_index;
                }
                self.recompute();
                self.notifier.notify(Severity::Info, "User updated");
                let _ = self.refresh().await;
                Ok(updated)
            }
            Err(err) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to update user: {err}"));
                if err.is_not_found() {
                    let _ = self.refresh().await;
                }
                Err(err)
            }
        }
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Recompute filter -> sort -> paginate over the base set. Always the
    /// whole pipeline, never a partial pass, so displayed counts stay
    /// consistent with the active filters.
    fn recompute(&mut self) {
        let filtered = filter(
            &self.base,
            &self.view.search_text,
            self.view.role_filter.as_ref(),
        );

        self.filtered = match self.view.sort {
            Some((key, direction)) => sort(&filtered, key, direction),
            None => filtered,
        };

        self.view.current_page = clamp_page(
            self.view.current_page,
            total_pages(self.filtered.len(), self.view.page_size),
        );
        self.page = paginate(&self.filtered, self.view.page_size, self.view.current_page);

        debug!(
            "Pipeline: {} base -> {} filtered -> page {}/{} ({} rows)",
            self.base.len(),
            self.filtered.len(),
            self.view.current_page,
            self.page.total_pages,
            self.page.records.len()
        );
    }
}
