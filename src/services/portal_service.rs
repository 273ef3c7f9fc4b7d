use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::{password, TokenError, TokenService};
use crate::database::manager::DatabaseError;
use crate::database::models::{District, DistrictFields, State, StateStats};
use crate::database::repository::Repository;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid user")]
    UnknownUser,
    #[error("Invalid password")]
    BadPassword,
    #[error("{0} Not Found")]
    NotFound(&'static str),
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error(transparent)]
    Database(DatabaseError),
}

impl From<DatabaseError> for ServiceError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { resource, .. } => ServiceError::NotFound(resource),
            other => ServiceError::Database(other),
        }
    }
}

/// Login plus the guarded state/district operations.
///
/// Holds no per-request state; every call goes straight to the store.
#[derive(Clone)]
pub struct PortalService {
    repository: Repository,
    tokens: TokenService,
}

impl PortalService {
    pub fn new(repository: Repository, tokens: TokenService) -> Self {
        Self { repository, tokens }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Check credentials and issue a session token.
    pub async fn login(&self, username: &str, plaintext: &str) -> Result<String, ServiceError> {
        let user = self
            .repository
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!("Login rejected: unknown user '{}'", username);
                ServiceError::UnknownUser
            })?;

        // bcrypt is deliberately slow; keep it off the async workers.
        let plaintext = plaintext.to_string();
        let stored_hash = user.password_hash;
        let verified = tokio::task::spawn_blocking(move || password::verify(&plaintext, &stored_hash))
            .await
            .map_err(|e| ServiceError::Internal(format!("password check aborted: {}", e)))?;

        if !verified {
            warn!("Login rejected: bad password for '{}'", username);
            return Err(ServiceError::BadPassword);
        }

        let token = self.tokens.issue(&user.username)?;
        info!("User '{}' logged in", user.username);
        Ok(token)
    }

    pub async fn list_states(&self) -> Result<Vec<State>, ServiceError> {
        Ok(self.repository.list_states().await?)
    }

    pub async fn get_state(&self, state_id: i64) -> Result<State, ServiceError> {
        self.repository
            .find_state(state_id)
            .await?
            .ok_or(ServiceError::NotFound("State"))
    }

    pub async fn create_district(&self, fields: &DistrictFields) -> Result<i64, ServiceError> {
        Ok(self.repository.insert_district(fields).await?)
    }

    pub async fn get_district(&self, district_id: i64) -> Result<District, ServiceError> {
        self.repository
            .find_district(district_id)
            .await?
            .ok_or(ServiceError::NotFound("District"))
    }

    pub async fn update_district(
        &self,
        district_id: i64,
        fields: &DistrictFields,
    ) -> Result<(), ServiceError> {
        Ok(self.repository.update_district(district_id, fields).await?)
    }

    /// Idempotent: removing an absent district succeeds.
    pub async fn delete_district(&self, district_id: i64) -> Result<(), ServiceError> {
        if !self.repository.delete_district(district_id).await? {
            debug!("Delete of district {} matched no rows", district_id);
        }
        Ok(())
    }

    pub async fn state_stats(&self, state_id: i64) -> Result<StateStats, ServiceError> {
        Ok(self.repository.state_stats(state_id).await?)
    }
}
