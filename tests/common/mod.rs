use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use covid19_portal_api::auth::{password, TokenService};
use covid19_portal_api::config::AppConfig;
use covid19_portal_api::database::{DatabaseManager, Repository};
use covid19_portal_api::services::PortalService;
use covid19_portal_api::{app, AppState};

const FIXTURE_SCHEMA: &str = include_str!("../fixtures/schema.sql");

pub const USERNAME: &str = "christopher_phillips";
pub const PASSWORD: &str = "christy@123";
pub const JWT_SECRET: &str = "integration-test-secret";

/// One server per test: its own port, its own in-memory store.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in as the fixture user and return the token.
    pub async fn login(&self) -> Result<String> {
        let res = self
            .client
            .post(self.url("/login/"))
            .json(&serde_json::json!({ "username": USERNAME, "password": PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

        let body = res.json::<serde_json::Value>().await?;
        body["jwtToken"]
            .as_str()
            .map(str::to_string)
            .context("login response has no jwtToken")
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    let config = AppConfig::for_tests(JWT_SECRET);

    let database = DatabaseManager::connect(&config.database).await?;
    sqlx::query(FIXTURE_SCHEMA).execute(database.pool()).await?;
    sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
        .bind(USERNAME)
        .bind(password::hash(PASSWORD, 4)?)
        .execute(database.pool())
        .await?;

    let tokens = TokenService::from_config(&config.security)?;
    let service = PortalService::new(Repository::new(database.pool().clone()), tokens);
    let router = app(AppState::new(service, database), &config);

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let server = TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    };
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
