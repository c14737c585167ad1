use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;
use sqlx::{postgres::{PgConnectOptions, PgPoolOptions}, sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::supervisor::Supervisor;
use crate::domain::services::auth_service::AuthService;
use crate::infra::email::http_email_service::HttpEmailService;
use crate::infra::repositories::{
    postgres_manager_repo::PostgresManagerRepo, postgres_participant_repo::PostgresParticipantRepo,
    postgres_private_event_repo::PostgresPrivateEventRepo, postgres_public_event_repo::PostgresPublicEventRepo,
    postgres_report_repo::PostgresReportRepo, postgres_supervisor_repo::PostgresSupervisorRepo,
    sqlite_manager_repo::SqliteManagerRepo, sqlite_participant_repo::SqliteParticipantRepo,
    sqlite_private_event_repo::SqlitePrivateEventRepo, sqlite_public_event_repo::SqlitePublicEventRepo,
    sqlite_report_repo::SqliteReportRepo, sqlite_supervisor_repo::SqliteSupervisorRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let email_service = Arc::new(HttpEmailService::new(
        config.mail_service_url.clone(),
        config.mail_service_token.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(config));

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            participant_repo: Arc::new(PostgresParticipantRepo::new(pool.clone())),
            private_event_repo: Arc::new(PostgresPrivateEventRepo::new(pool.clone())),
            manager_repo: Arc::new(PostgresManagerRepo::new(pool.clone())),
            supervisor_repo: Arc::new(PostgresSupervisorRepo::new(pool.clone())),
            public_event_repo: Arc::new(PostgresPublicEventRepo::new(pool.clone())),
            report_repo: Arc::new(PostgresReportRepo::new(pool)),
            auth_service,
            email_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            participant_repo: Arc::new(SqliteParticipantRepo::new(pool.clone())),
            private_event_repo: Arc::new(SqlitePrivateEventRepo::new(pool.clone())),
            manager_repo: Arc::new(SqliteManagerRepo::new(pool.clone())),
            supervisor_repo: Arc::new(SqliteSupervisorRepo::new(pool.clone())),
            public_event_repo: Arc::new(SqlitePublicEventRepo::new(pool.clone())),
            report_repo: Arc::new(SqliteReportRepo::new(pool)),
            auth_service,
            email_service,
        }
    };

    seed_supervisor(&state).await;
    state
}

/// First supervisor account comes from the environment; without one the
/// manager-approval flow has no operator.
async fn seed_supervisor(state: &AppState) {
    let (Some(email), Some(password)) = (
        state.config.supervisor_email.clone(),
        state.config.supervisor_password.clone(),
    ) else {
        return;
    };

    let existing = state.supervisor_repo.find_by_email(&email).await
        .expect("Failed to look up seed supervisor");
    if existing.is_some() {
        return;
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("Failed to hash seed supervisor password")
        .to_string();

    let supervisor = Supervisor::new("admin".to_string(), email, password_hash);
    state.supervisor_repo.create(&supervisor).await
        .expect("Failed to seed supervisor");

    info!("Seeded supervisor account: {}", supervisor.id);
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
