#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use crate::core::config::SiteConfig;
#[cfg(test)]
use crate::core::error::DatabaseError;
#[cfg(test)]
use crate::core::router::build_router;
#[cfg(test)]
use crate::features::registrations::models::Registration;
#[cfg(test)]
use crate::features::registrations::services::{RegistrationService, RegistrationStore};

#[cfg(test)]
pub fn test_site() -> SiteConfig {
    SiteConfig {
        server_software: "abc-registration-test".to_string(),
    }
}

/// Step of the insert at which [`InMemoryRegistrationStore::failing`] breaks
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStep {
    Connect,
    Prepare,
    Execute,
}

#[cfg(test)]
impl FailureStep {
    fn error(self) -> DatabaseError {
        match self {
            FailureStep::Connect => DatabaseError::Connect(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
            FailureStep::Prepare => DatabaseError::Prepare(sqlx::Error::Protocol(
                "relation \"data\" does not exist".into(),
            )),
            FailureStep::Execute => {
                DatabaseError::Execute(sqlx::Error::Protocol("value too long for column".into()))
            }
        }
    }
}

/// Store keeping rows in memory, optionally failing every insert
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryRegistrationStore {
    rows: Mutex<Vec<Registration>>,
    attempts: AtomicUsize,
    fail: Option<FailureStep>,
}

#[cfg(test)]
impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every insert fails at the given step
    pub fn failing(step: FailureStep) -> Self {
        Self {
            fail: Some(step),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Registration> {
        self.rows.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn insert(&self, registration: &Registration) -> Result<(), DatabaseError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(step) = self.fail {
            return Err(step.error());
        }

        self.rows.lock().unwrap().push(registration.clone());
        Ok(())
    }
}

/// Full application router served in-process over the given store
#[cfg(test)]
pub fn test_server(store: Arc<InMemoryRegistrationStore>) -> TestServer {
    let service = Arc::new(RegistrationService::new(store, test_site()));
    TestServer::new(build_router(service)).expect("Failed to build test server")
}
