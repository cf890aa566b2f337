use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::api::models::{Comment, Post, User};

/// Base URL of the remote read-only service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Read operations the view layer needs. All four degrade to an
/// empty-result sentinel on failure; callers treat "no data" as a normal
/// outcome, not an error.
#[async_trait]
pub trait PostDirectory: Send + Sync {
    /// All known users.
    async fn list_users(&self) -> Vec<User>;

    /// All posts owned by one user.
    async fn user_posts(&self, user_id: u64) -> Vec<Post>;

    /// One user by id, or `None` when unknown or unreachable.
    async fn get_user(&self, user_id: u64) -> Option<User>;

    /// All comments on one post.
    async fn post_comments(&self, post_id: u64) -> Vec<Comment>;
}

/// HTTP client for the JSONPlaceholder service. No caching, no retries.
pub struct PlaceholderClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlaceholderClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json::<T>().await?)
    }
}

impl Default for PlaceholderClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostDirectory for PlaceholderClient {
    async fn list_users(&self) -> Vec<User> {
        match self.fetch_json("users").await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to fetch users: {}", e);
                Vec::new()
            }
        }
    }

    async fn user_posts(&self, user_id: u64) -> Vec<Post> {
        match self.fetch_json(&format!("posts?userId={}", user_id)).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!("Failed to fetch posts for user {}: {}", user_id, e);
                Vec::new()
            }
        }
    }

    async fn get_user(&self, user_id: u64) -> Option<User> {
        match self.fetch_json(&format!("users/{}", user_id)).await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Failed to fetch user {}: {}", user_id, e);
                None
            }
        }
    }

    async fn post_comments(&self, post_id: u64) -> Vec<Comment> {
        match self
            .fetch_json(&format!("comments?postId={}", post_id))
            .await
        {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!("Failed to fetch comments for post {}: {}", post_id, e);
                Vec::new()
            }
        }
    }
}
