use sqlx::{Connection, PgConnection};

use crate::core::config::DatabaseConfig;
use crate::core::error::DatabaseError;

/// Open a single short-lived connection. There is no pool.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, DatabaseError> {
    PgConnection::connect_with(&config.connect_options())
        .await
        .map_err(DatabaseError::Connect)
}

/// Close a connection, logging instead of failing.
pub async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("Failed to close database connection cleanly: {:?}", e);
    }
}

/// Apply the bundled schema over one connection.
pub async fn run_migrations(config: &DatabaseConfig) -> Result<(), DatabaseError> {
    let mut conn = connect(config).await?;
    let result = sqlx::migrate!("./migrations").run(&mut conn).await;
    close(conn).await;
    result.map_err(DatabaseError::from)
}
