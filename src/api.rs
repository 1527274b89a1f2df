//! Remote API Bindings
//!
//! HTTP wrappers for the todo service endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::models::Todo;

/// Default endpoint of the todo service
pub const API_URL: &str = "http://localhost:3001/api/todos";

/// The one failure mode of the remote layer: the call did not succeed.
/// Covers network errors, non-success statuses, and undecodable bodies.
#[derive(Debug, Error)]
#[error("remote call failed: {0}")]
pub struct ApiError(pub String);

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
pub struct TaskBody<'a> {
    pub task: &'a str,
}

/// Remote operations of the todo service
#[async_trait(?Send)]
pub trait TodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;
    async fn create(&self, task: &str) -> Result<Todo, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
    async fn toggle_complete(&self, id: &str) -> Result<(), ApiError>;
    async fn edit(&self, id: &str, task: &str) -> Result<(), ApiError>;
}

/// reqwest-backed client for the todo service
#[derive(Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let todos = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(todos)
    }

    async fn create(&self, task: &str) -> Result<Todo, ApiError> {
        let todo = self
            .client
            .post(&self.base_url)
            .json(&TaskBody { task })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(todo)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn toggle_complete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .put(self.url(&format!("/complete/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn edit(&self, id: &str, task: &str) -> Result<(), ApiError> {
        self.client
            .put(self.url(&format!("/edit/{id}")))
            .json(&TaskBody { task })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
