//! Application state management for hangar.
//!
//! This module contains the core `App` struct that owns all application
//! state: the current catalog page, the selected ship, the pilot cache and
//! the coordination of background fetch tasks. The UI only reads the
//! snapshot produced by [`App::snapshot`] and calls the intent methods.

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::api::ApiClient;
use crate::cache::PilotCache;
use crate::config::Config;
use crate::models::{Page, Pilot, Starship, StarshipPageResponse};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// A page fetch and a pilot fan-out settle as one message each, so even a
/// busy session stays far below this.
const CHANNEL_BUFFER_SIZE: usize = 32;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    Quitting,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Result types from background fetch tasks.
///
/// Each spawned fetch task sends exactly one of these through the MPSC
/// channel when it settles, success or failure. The reducer in
/// [`App::apply`] is the only place that mutates catalog state.
enum FetchResult {
    /// A catalog page fetched successfully (requested page number, payload)
    Page(u32, StarshipPageResponse),
    /// A catalog page fetch failed (requested page number, message)
    PageFailed(u32, String),
    /// All pilots of one ship resolved, in locator order
    Pilots(String, Vec<Pilot>),
    /// At least one pilot fetch for the ship failed; nothing was resolved
    PilotsFailed(String, String),
}

// ============================================================================
// View State
// ============================================================================

/// Render-ready snapshot composed from the current application state.
/// The presentation layer reads this each frame and nothing else.
#[derive(Debug)]
pub struct ViewSnapshot<'a> {
    pub ships: &'a [Starship],
    pub page_number: u32,
    pub selected_ship: Option<&'a str>,
    /// Pilots for the selected ship; `None` is the "no data" placeholder
    /// (no selection, resolution pending or failed, or an empty crew).
    pub selected_pilots: Option<&'a [Pilot]>,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    pub loading: bool,
    pub status: Option<&'a str>,
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub api: ApiClient,

    // UI state
    pub state: AppState,
    /// Cursor position in the ship list; presentation state, distinct from
    /// the selection.
    pub cursor: usize,

    // Catalog state
    page: Option<Page>,
    /// Page number of a navigation currently in flight. Results for any
    /// other number are stale and discarded.
    requested_page: Option<u32>,
    selected_ship: Option<String>,
    pilots: PilotCache,

    /// Number of fetch tasks in flight. Loading while non-zero; each task
    /// settles exactly once, so the counter cannot drift.
    pending_fetches: usize,

    // Background task channel
    fetch_rx: mpsc::Receiver<FetchResult>,
    fetch_tx: mpsc::Sender<FetchResult>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api = ApiClient::new(config.base_url())?;
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            config,
            api,

            state: AppState::Normal,
            cursor: 0,

            page: None,
            requested_page: None,
            selected_ship: None,
            pilots: PilotCache::new(),

            pending_fetches: 0,

            fetch_rx: rx,
            fetch_tx: tx,

            status_message: None,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    /// Resolved pilot lists, keyed by ship name.
    pub fn pilot_cache(&self) -> &PilotCache {
        &self.pilots
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Request a catalog page in the background.
    ///
    /// The selection is cleared immediately (it is only meaningful within
    /// its page) while the rendered page stays untouched until the new one
    /// arrives; a failed fetch leaves the previous page on screen.
    pub fn load_page(&mut self, number: u32) {
        if self.requested_page.is_some() {
            debug!(number, "Page navigation already in flight, ignoring");
            return;
        }

        self.deselect();
        self.requested_page = Some(number);
        self.pending_fetches += 1;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();

        tokio::spawn(async move {
            let result = match api.fetch_starships(number).await {
                Ok(payload) => FetchResult::Page(number, payload),
                Err(e) => FetchResult::PageFailed(number, e.to_string()),
            };
            Self::send_result(&tx, result).await;
        });
    }

    /// Move to the next page. No-op while loading or without a next cursor.
    pub fn next_page(&mut self) {
        if self.is_loading() {
            return;
        }
        let target = match &self.page {
            Some(page) if page.has_next => page.number + 1,
            _ => return,
        };
        self.load_page(target);
    }

    /// Move to the previous page. No-op while loading or on the first page.
    pub fn previous_page(&mut self) {
        if self.is_loading() {
            return;
        }
        let target = match &self.page {
            Some(page) if page.has_previous && page.number > 1 => page.number - 1,
            _ => return,
        };
        self.load_page(target);
    }

    /// Re-request the currently rendered page, or the first page before any
    /// page has loaded. Recovery path after a failed load.
    pub fn reload(&mut self) {
        if self.is_loading() {
            return;
        }
        let number = self.page.as_ref().map(|p| p.number).unwrap_or(1);
        self.load_page(number);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a ship and lazily resolve its pilots.
    ///
    /// The selection updates immediately, even while a resolution is
    /// pending. A fetch set is started only when the ship is neither cached
    /// nor already resolving; re-selecting a still-resolving ship attaches
    /// to the pending resolution instead of fanning out again.
    pub fn select(&mut self, ship: &Starship) {
        self.selected_ship = Some(ship.name.clone());

        if !self.pilots.begin(&ship.name) {
            debug!(ship = %ship.name, "Pilots cached or resolving, no fetch");
            return;
        }
        self.pending_fetches += 1;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        let name = ship.name.clone();
        let urls = ship.pilots.clone();

        tokio::spawn(async move {
            // Fan out one fetch per pilot URL and let every fetch settle.
            // The resolved list keeps the order of the URLs; any failure
            // fails the whole resolution.
            let results = join_all(urls.iter().map(|url| api.fetch_pilot(url))).await;
            let result = match results.into_iter().collect::<Result<Vec<_>, _>>() {
                Ok(pilots) => FetchResult::Pilots(name, pilots),
                Err(e) => FetchResult::PilotsFailed(name, e.to_string()),
            };
            Self::send_result(&tx, result).await;
        });
    }

    /// Clear the selection. Runs implicitly on every page navigation.
    pub fn deselect(&mut self) {
        self.selected_ship = None;
    }

    /// Select the ship under the list cursor, if any.
    pub fn select_under_cursor(&mut self) {
        let ship = self
            .page
            .as_ref()
            .and_then(|page| page.ships.get(self.cursor))
            .cloned();
        if let Some(ship) = ship {
            self.select(&ship);
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.page.as_ref().map(|p| p.ships.len()).unwrap_or(0);
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    // =========================================================================
    // Background Task Results
    // =========================================================================

    /// Helper to send fetch results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<FetchResult>, result: FetchResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send fetch result - channel closed");
        }
    }

    /// Drain completed background fetches and apply them.
    /// Called once per event-loop tick.
    pub fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.fetch_rx.try_recv() {
            results.push(result);
        }
        for result in results {
            self.apply(result);
        }
    }

    /// Wait until every in-flight fetch has settled and been applied.
    /// Used by headless consumers and tests for deterministic settling.
    pub async fn wait_until_idle(&mut self) {
        while self.pending_fetches > 0 {
            let result = self.fetch_rx.recv().await;
            match result {
                Some(result) => self.apply(result),
                None => break,
            }
        }
    }

    /// Apply a single settled fetch to the store.
    ///
    /// The pending counter is decremented on every settle, success or
    /// failure, so the loading flag tracks the true number of in-flight
    /// operations.
    fn apply(&mut self, result: FetchResult) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);

        match result {
            FetchResult::Page(number, payload) => {
                if self.requested_page != Some(number) {
                    debug!(number, "Discarding stale page result");
                    return;
                }
                debug!(number, ships = payload.results.len(), "Page loaded");
                self.requested_page = None;
                self.status_message = None;
                self.cursor = 0;
                self.page = Some(Page::from_response(number, payload));
            }
            FetchResult::PageFailed(number, message) => {
                error!(number, error = %message, "Page fetch failed");
                if self.requested_page == Some(number) {
                    self.requested_page = None;
                }
                self.status_message = Some(format!("Failed to load page {}", number));
            }
            FetchResult::Pilots(ship, pilots) => {
                debug!(ship = %ship, count = pilots.len(), "Pilots resolved");
                // The write happens even if the selection or page has moved
                // on; the cache is keyed by ship name, so a late result is
                // simply a warm entry for the next visit.
                self.pilots.complete(ship, pilots);
            }
            FetchResult::PilotsFailed(ship, message) => {
                warn!(ship = %ship, error = %message, "Pilot resolution failed");
                self.pilots.abandon(&ship);
                self.status_message = Some(format!("Failed to load pilots for {}", ship));
            }
        }
    }

    // =========================================================================
    // View State
    // =========================================================================

    /// Compose the render-ready snapshot. Pure read, no I/O.
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        let loading = self.is_loading();
        let selected_ship = self.selected_ship.as_deref();
        let selected_pilots = selected_ship
            .and_then(|name| self.pilots.get(name))
            .filter(|pilots| !pilots.is_empty());

        ViewSnapshot {
            ships: self
                .page
                .as_ref()
                .map(|p| p.ships.as_slice())
                .unwrap_or(&[]),
            page_number: self.page.as_ref().map(|p| p.number).unwrap_or(1),
            selected_ship,
            selected_pilots,
            can_go_next: self.page.as_ref().map(|p| p.has_next).unwrap_or(false) && !loading,
            can_go_previous: self.page.as_ref().map(|p| p.has_previous).unwrap_or(false)
                && !loading,
            loading,
            status: self.status_message.as_deref(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
