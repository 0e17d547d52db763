use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

use haulbot_core::config::DatabaseConfig;

pub type DbPool = sqlx::SqlitePool;

/// Opens the SQLite pool described by the effective config. WAL and a
/// busy timeout keep concurrent quote appends from tripping over each
/// other; zero-valued settings are clamped rather than rejected.
pub async fn connect(database: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(database.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(database.timeout_secs.max(1)))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA foreign_keys = ON").execute(&mut *conn).await?;
                sqlx::query("PRAGMA journal_mode = WAL").execute(&mut *conn).await?;
                sqlx::query("PRAGMA busy_timeout = 5000").execute(&mut *conn).await?;
                Ok(())
            })
        })
        .connect(&database.url)
        .await
}

#[cfg(test)]
mod tests {
    use haulbot_core::config::DatabaseConfig;

    use super::connect;

    #[tokio::test]
    async fn connects_from_database_config() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            timeout_secs: 30,
        };
        let pool = connect(&config).await.expect("connect");
        assert!(!pool.is_closed());
    }

    #[tokio::test]
    async fn zero_settings_are_clamped_not_rejected() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 0,
            timeout_secs: 0,
        };
        connect(&config).await.expect("clamped pool settings still connect");
    }
}
