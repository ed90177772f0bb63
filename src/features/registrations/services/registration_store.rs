use async_trait::async_trait;
use sqlx::{Executor, PgConnection, Statement};

use crate::core::config::DatabaseConfig;
use crate::core::database;
use crate::core::error::DatabaseError;
use crate::features::registrations::models::Registration;

/// Both values are bound as text parameters, never spliced into the SQL.
pub const INSERT_REGISTRATION_SQL: &str = "INSERT INTO data (firstname, email) VALUES ($1, $2)";

/// Persistence seam for registrations
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Persist exactly one row for the given registration.
    async fn insert(&self, registration: &Registration) -> Result<(), DatabaseError>;
}

/// PostgreSQL store opening a fresh connection for each insert
pub struct PgRegistrationStore {
    config: DatabaseConfig,
}

impl PgRegistrationStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RegistrationStore for PgRegistrationStore {
    async fn insert(&self, registration: &Registration) -> Result<(), DatabaseError> {
        let mut conn = database::connect(&self.config).await?;
        let result = insert_with(&mut conn, registration).await;
        database::close(conn).await;
        result
    }
}

async fn insert_with(
    conn: &mut PgConnection,
    registration: &Registration,
) -> Result<(), DatabaseError> {
    let statement = (&mut *conn)
        .prepare(INSERT_REGISTRATION_SQL)
        .await
        .map_err(DatabaseError::Prepare)?;

    statement
        .query()
        .bind(registration.full_name.as_str())
        .bind(registration.email.as_str())
        .execute(&mut *conn)
        .await
        .map_err(DatabaseError::Execute)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Connection;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            // Nothing listens on the tcpmux port in test environments
            port: 1,
            username: "intel".to_string(),
            password: "secret".to_string(),
            database_name: "intel".to_string(),
            require_ssl: false,
            run_migrations: false,
        }
    }

    #[test]
    fn test_insert_sql_uses_placeholders() {
        assert!(INSERT_REGISTRATION_SQL.contains("($1, $2)"));
        assert!(!INSERT_REGISTRATION_SQL.contains('\''));
    }

    #[tokio::test]
    async fn test_unreachable_database_reports_connect_error() {
        let store = PgRegistrationStore::new(unreachable_config());
        let registration = Registration {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let err = store.insert(&registration).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Connect(_)));
    }

    /// Needs a reachable PostgreSQL in `DATABASE_URL` with the `data` table.
    #[tokio::test]
    #[ignore]
    async fn test_injection_payload_stored_verbatim() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let mut conn = PgConnection::connect(&url).await.unwrap();
        sqlx::migrate!("./migrations").run(&mut conn).await.unwrap();

        let payload = format!("' OR '1'='1 {}", uuid::Uuid::now_v7());
        let registration = Registration {
            full_name: payload.clone(),
            email: "robert'); DROP TABLE data;--@example.com".to_string(),
        };

        insert_with(&mut conn, &registration).await.unwrap();

        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT firstname, email FROM data WHERE firstname = $1")
                .bind(&payload)
                .fetch_all(&mut conn)
                .await
                .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, registration.full_name);
        assert_eq!(rows[0].1, registration.email);
    }
}
