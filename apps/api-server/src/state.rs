//! Application state - shared across all handlers.

use std::sync::Arc;

use tracker_core::ports::{JobRepository, UserRepository};
use tracker_core::{AuthService, JobService};
use tracker_infra::database::DatabaseConnections;
use tracker_infra::{
    Argon2PasswordService, InMemoryJobRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService,
};

#[cfg(feature = "postgres")]
use tracker_infra::database::{PostgresJobRepository, PostgresUserRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub jobs: JobService,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state, falling back to in-memory storage when
    /// no database is configured or reachable.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let users = Arc::new(PostgresUserRepository::new(conn.main.clone()));
                        let jobs = Arc::new(PostgresJobRepository::new(conn.main.clone()));
                        tracing::info!("Application state initialized (postgres)");
                        return Self::build(users, jobs, config.jwt.clone(), Some(conn));
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory(config.jwt.clone())
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self::build(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryJobRepository::new()),
            jwt,
            None,
        )
    }

    fn build(
        users: Arc<dyn UserRepository>,
        jobs: Arc<dyn JobRepository>,
        jwt: JwtConfig,
        db: Option<Arc<DatabaseConnections>>,
    ) -> Self {
        let auth = AuthService::new(
            users,
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtTokenService::new(jwt)),
        );

        Self {
            auth,
            jobs: JobService::new(jobs),
            db,
        }
    }
}
