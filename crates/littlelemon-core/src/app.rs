//! Application state management for Little Lemon.
//!
//! `App` owns the local store, the menu cache and the menu sync driver. A
//! shell calls into it from its UI thread and renders what it returns;
//! nothing here draws.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::api::MenuClient;
use crate::cache::{CategoryFilter, MenuCache, MenuQuery};
use crate::config::Config;
use crate::models::{Dish, UserProfile};
use crate::store::{LocalStore, RegistrationError, Session};
use crate::sync::{MenuSync, SyncOutcome};

/// Category chips of the menu screen: (label, selector value).
pub const MENU_CATEGORIES: [(&str, &str); 4] = [
    ("All", "all"),
    ("Starters", "starters"),
    ("Mains", "mains"),
    ("Desserts", "desserts"),
];

/// Where the app opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Home,
}

pub struct App {
    pub config: Config,
    session: Session,
    cache: MenuCache,
    sync: MenuSync,
    menu_query: MenuQuery,
}

impl App {
    /// Open the app from the on-disk config and environment.
    pub fn open() -> Result<Self> {
        let config = match Config::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };
        Self::new(config)
    }

    /// Create an app instance, opening the stores in the configured data
    /// directory.
    pub fn new(config: Config) -> Result<Self> {
        let data_dir = config.data_dir()?;
        debug!(?data_dir, "Data directory configured");

        let session = Session::new(LocalStore::open(&data_dir)?);
        let cache = MenuCache::open(&data_dir)?;
        let client = MenuClient::new(config.menu_url.clone(), config.request_timeout())?;
        let sync = MenuSync::new(client, config.clear_policy);

        Ok(Self {
            config,
            session,
            cache,
            sync,
            menu_query: MenuQuery::default(),
        })
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Screen to show on launch: a logged-in user skips onboarding.
    pub fn start_screen(&self) -> Screen {
        if self.session.is_logged_in() {
            Screen::Home
        } else {
            Screen::Onboarding
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), RegistrationError> {
        self.session
            .register(&UserProfile::new(first_name, last_name, email))
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()
    }

    pub fn profile(&self) -> UserProfile {
        self.session.profile()
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// The menu screen became visible: refresh from the remote menu.
    /// Must be called from within a Tokio runtime.
    pub fn on_menu_appear(&mut self) {
        self.sync.start(&mut self.cache);
    }

    /// Apply finished syncs. Call this from the UI loop.
    pub fn check_background_tasks(&mut self) -> Option<SyncOutcome> {
        self.sync.check_background_tasks(&mut self.cache)
    }

    /// Wait for the sync in flight and apply it.
    pub async fn wait_for_sync(&mut self) -> Option<SyncOutcome> {
        self.sync.wait(&mut self.cache).await
    }

    pub fn is_syncing(&self) -> bool {
        self.sync.is_syncing()
    }

    pub fn last_sync_outcome(&self) -> Option<&SyncOutcome> {
        self.sync.last_outcome()
    }

    pub fn set_search(&mut self, text: &str) {
        self.menu_query.search = text.to_string();
    }

    pub fn select_category(&mut self, value: &str) {
        self.menu_query.category = CategoryFilter::parse(value);
    }

    pub fn menu_query(&self) -> &MenuQuery {
        &self.menu_query
    }

    /// Rows for the menu list under the current search and category.
    pub fn visible_dishes(&self) -> Vec<Dish> {
        self.cache.query(&self.menu_query)
    }

    pub fn menu_cache(&self) -> &MenuCache {
        &self.cache
    }

    /// "Updated 5m ago" style text for the menu header.
    pub fn last_updated(&self) -> String {
        self.cache.age_display()
    }

    /// Stop background work before the process exits.
    pub fn shutdown(&mut self) {
        self.sync.cancel();
        info!("Little Lemon shutting down");
    }
}
