use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::ServiceError;

/// One account is hard-wired to fail login, so the storefront's error states
/// can be demonstrated without a backend.
const BLOCKED_EMAIL: &str = "blocked@velora.example";

const MIN_PASSWORD_LEN: usize = 8;

/// A fake session returned by the mock login/register flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: Uuid,
    pub display_name: String,
    pub email: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

/// Simulated authentication for the storefront.
///
/// There is no user table and no credential check: every action sleeps for
/// the configured delay and then returns a canned outcome. Nothing here
/// reads or writes the catalog.
#[derive(Clone, Debug)]
pub struct MockAuthService {
    delay: Duration,
}

impl MockAuthService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.simulated_delay())
    }

    /// Simulate a login round-trip.
    ///
    /// Succeeds for any well-formed credentials except the blocked demo
    /// account. The display name is derived from the email local part, which
    /// is all the storefront header needs.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ServiceError> {
        validate_email(email)?;
        if password.is_empty() {
            return Err(ServiceError::validation("password must not be empty"));
        }

        tokio::time::sleep(self.delay).await;

        if email == BLOCKED_EMAIL {
            warn!(email, "login rejected for blocked demo account");
            return Err(ServiceError::auth("invalid email or password"));
        }

        let display_name = email
            .split('@')
            .next()
            .unwrap_or(email)
            .to_string();
        let session = issue_session(display_name, email);
        info!(user_id = %session.user_id, "login simulated");
        Ok(session)
    }

    /// Simulate account creation. Always succeeds once the input passes the
    /// same checks the signup form applies client-side.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ServiceError> {
        if display_name.trim().is_empty() {
            return Err(ServiceError::validation("name must not be empty"));
        }
        validate_email(email)?;
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        tokio::time::sleep(self.delay).await;

        let session = issue_session(display_name.trim().to_string(), email);
        info!(user_id = %session.user_id, "registration simulated");
        Ok(session)
    }
}

fn validate_email(email: &str) -> Result<(), ServiceError> {
    let well_formed = email.contains('@') && !email.starts_with('@') && !email.ends_with('@');
    if well_formed {
        Ok(())
    } else {
        Err(ServiceError::validation("email address is malformed"))
    }
}

fn issue_session(display_name: String, email: &str) -> AuthSession {
    AuthSession {
        user_id: Uuid::new_v4(),
        display_name,
        email: email.to_string(),
        token: Uuid::new_v4().simple().to_string(),
        issued_at: Utc::now(),
    }
}
