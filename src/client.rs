// src/client.rs
//! Shared backend client for the dashboard: fixed base origin, automatic
//! bearer-token attachment on every request, and a settable/clearable admin
//! token persisted under one well-known storage key. The client enforces no
//! token expiry; the backend decides when a token stops working.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const ENV_BASE_URL: &str = "API_BASE_URL";

/// Storage key for the admin token; also the file name inside the state dir.
pub const TOKEN_STORAGE_KEY: &str = "adminToken";
pub const ENV_STATE_DIR: &str = "API_STATE_DIR";
const DEFAULT_STATE_DIR: &str = ".state";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    token_path: PathBuf,
}

impl ApiClient {
    /// Client for a fixed base origin. Any token persisted by a previous run
    /// is picked up immediately.
    pub fn new(base_url: impl Into<String>) -> Self {
        let dir = std::env::var(ENV_STATE_DIR).unwrap_or_else(|_| DEFAULT_STATE_DIR.to_string());
        Self::with_state_dir(base_url, PathBuf::from(dir))
    }

    /// Base origin from `API_BASE_URL`, falling back to the local backend.
    pub fn from_env() -> Self {
        let base = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn with_state_dir(base_url: impl Into<String>, state_dir: PathBuf) -> Self {
        let token_path = state_dir.join(TOKEN_STORAGE_KEY);
        let token = fs::read_to_string(&token_path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RwLock::new(token),
            token_path,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// Set on admin login. Persisted so a restarted dashboard stays logged in.
    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
        if let Some(parent) = self.token_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&self.token_path, token) {
            warn!(target: "client", error = %e, "failed to persist admin token");
        }
    }

    /// Cleared on logout; also removes the persisted copy.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
        if self.token_path.exists() {
            if let Err(e) = fs::remove_file(&self.token_path) {
                warn!(target: "client", error = %e, "failed to remove persisted admin token");
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_auth(&self, rb: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(t) => rb.bearer_auth(t),
            None => rb,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let resp = self
            .apply_auth(self.http.get(self.url(path)))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<T>().await?)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let resp = self
            .apply_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<T>().await?)
    }
}
