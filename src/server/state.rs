//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for verifying bearer tokens issued by the identity provider
//! - Length of the default public statistics window

use sea_orm::DatabaseConnection;

use crate::server::service::auth::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds a small decoding key and validation settings
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies bearer tokens and extracts identity claims.
    pub token_service: TokenService,

    /// Number of days after today covered by public statistics when no window is given.
    pub public_stats_window_days: i64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_service` - Bearer token verifier
    /// - `public_stats_window_days` - Default public statistics window length
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        token_service: TokenService,
        public_stats_window_days: i64,
    ) -> Self {
        Self {
            db,
            token_service,
            public_stats_window_days,
        }
    }
}
