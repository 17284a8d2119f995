//! Shared runtime context for the virtual zoo service.
//!
//! Holds the global application context (settings, database handle, role
//! cache, mailer) plus the logger, permission checker, and mail delivery
//! seam used across the web layer.

mod logger;
pub mod mailer;
pub mod perm;

pub use logger::Logger;
pub use mailer::{LogMailer, Mailer, OutboundMail};

use moka::future::Cache;
use once_cell::sync::OnceCell;
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use zoo_error::{init::InitContextError, ZooResult};
use zoo_models::{enums::common::Role, settings::Settings};

static APP_CONTEXT: OnceCell<ZooAppContext> = OnceCell::new();

const ROLE_CACHE_CAPACITY: u64 = 10_000;
const ROLE_CACHE_TTL_SECS: u64 = 300;

/// Global application context.
///
/// Initialized once at startup after the database is ready, then read from
/// anywhere via [`ZooAppContext::instance`].
pub struct ZooAppContext {
    settings: Settings,
    db: DatabaseConnection,
    /// user id -> role, refreshed on expiry
    role_cache: Cache<i32, Role>,
    mailer: Arc<dyn Mailer>,
}

impl ZooAppContext {
    #[inline]
    pub fn instance() -> ZooResult<&'static ZooAppContext, InitContextError> {
        APP_CONTEXT
            .get()
            .ok_or_else(|| InitContextError::NotInitialized("application context".to_string()))
    }

    /// Initializes the global application context.
    ///
    /// # Arguments
    /// * `settings` - Loaded application settings
    /// * `db` - An open database connection with migrations applied
    /// * `mailer` - Outbound mail delivery implementation
    ///
    /// # Returns
    /// * `ZooResult<()>` - Ok on first call, error if already initialized.
    pub fn init(
        settings: Settings,
        db: DatabaseConnection,
        mailer: Arc<dyn Mailer>,
    ) -> ZooResult<(), InitContextError> {
        let ctx = ZooAppContext {
            settings,
            db,
            role_cache: Cache::builder()
                .max_capacity(ROLE_CACHE_CAPACITY)
                .time_to_live(Duration::from_secs(ROLE_CACHE_TTL_SECS))
                .build(),
            mailer,
        };
        APP_CONTEXT
            .set(ctx)
            .map_err(|_| InitContextError::AlreadyInitialized)
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    #[inline]
    pub fn role_cache(&self) -> &Cache<i32, Role> {
        &self.role_cache
    }

    #[inline]
    pub fn mailer(&self) -> Arc<dyn Mailer> {
        Arc::clone(&self.mailer)
    }
}
