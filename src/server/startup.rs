use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// The pool is bounded by `DB_MAX_CONNECTIONS`; every read batch holds one connection for
/// the duration of its transaction, so the pool size caps the number of concurrent batches.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!(
        max_connections = config.max_connections,
        strategy = ?config.aggregation.strategy,
        step_timeout_ms = config.aggregation.step_timeout.as_millis() as u64,
        "database ready"
    );

    Ok(db)
}
