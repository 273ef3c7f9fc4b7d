use crate::auth::{password, TokenService};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, Repository};
use crate::services::PortalService;

const FIXTURE_SCHEMA: &str = include_str!("../../tests/fixtures/schema.sql");

/// In-memory store with the fixture schema, seed rows and one login user.
pub struct TestContext {
    config: AppConfig,
    database: DatabaseManager,
}

impl TestContext {
    pub const USERNAME: &'static str = "christopher_phillips";
    pub const PASSWORD: &'static str = "christy@123";
    pub const JWT_SECRET: &'static str = "unit-test-secret";

    pub async fn new() -> anyhow::Result<Self> {
        let config = AppConfig::for_tests(Self::JWT_SECRET);
        let database = DatabaseManager::connect(&config.database).await?;

        sqlx::query(FIXTURE_SCHEMA).execute(database.pool()).await?;

        let password_hash = password::hash(Self::PASSWORD, 4)?;
        sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
            .bind(Self::USERNAME)
            .bind(password_hash)
            .execute(database.pool())
            .await?;

        Ok(Self { config, database })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.database
    }

    pub fn repository(&self) -> Repository {
        Repository::new(self.database.pool().clone())
    }

    pub fn tokens(&self) -> TokenService {
        TokenService::new(Self::JWT_SECRET, None).expect("test secret is non-empty")
    }

    pub fn service(&self) -> PortalService {
        PortalService::new(self.repository(), self.tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn contexts_are_isolated() {
        let first = TestContext::new().await.unwrap();
        let second = TestContext::new().await.unwrap();

        first.repository().delete_district(1).await.unwrap();
        assert!(second.repository().find_district(1).await.unwrap().is_some());
    }
}
