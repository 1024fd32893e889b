//! # HTTP client for the users collection
//!
//! [`HttpUserStore`] implements [`store::UserStore`] over the backend's REST
//! resource with `reqwest` (backed by `fetch` in the browser).
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list | `GET {base}` |
//! | create | `POST {base}` with a JSON user body (no id) |
//! | update | `PUT {base}/{id}` with a JSON user body |
//! | delete | `DELETE {base}/{id}` |
//!
//! Any non-2xx status fails the call with [`FetchError::Status`]; error
//! bodies are not parsed.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{FetchError, Operation, User, UserId, UserStore};

use crate::config::ApiConfig;

/// REST-backed user store.
#[derive(Clone, Debug)]
pub struct HttpUserStore {
    base_url: String,
    client: Client,
}

impl PartialEq for HttpUserStore {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpUserStore {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            client: Client::new(),
        }
    }

    fn collection(&self, method: Method) -> RequestBuilder {
        self.client.request(method, &self.base_url)
    }

    fn item(&self, method: Method, id: UserId) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.base_url, id))
    }

    /// Send a request and fail on any non-success status.
    async fn execute(&self, req: RequestBuilder, operation: Operation) -> Result<Response, FetchError> {
        let response = req.send().await.map_err(|e| FetchError::Transport {
            operation,
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered {} for {}", response.url(), status, operation);
            return Err(FetchError::Status {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        operation: Operation,
    ) -> Result<T, FetchError> {
        let response = self.execute(req, operation).await?;
        response.json().await.map_err(|e| FetchError::Decode {
            operation,
            message: e.to_string(),
        })
    }
}

impl UserStore for HttpUserStore {
    async fn list(&self) -> Result<Vec<User>, FetchError> {
        let req = self.collection(Method::GET);
        self.execute_json(req, Operation::List).await
    }

    async fn create(&self, user: &User) -> Result<User, FetchError> {
        let body = User { id: None, ..user.clone() };
        let req = self.collection(Method::POST).json(&body);
        self.execute_json(req, Operation::Create).await
    }

    async fn update(&self, id: UserId, user: &User) -> Result<User, FetchError> {
        let req = self.item(Method::PUT, id).json(user);
        self.execute_json(req, Operation::Update).await
    }

    async fn delete(&self, id: UserId) -> Result<(), FetchError> {
        let req = self.item(Method::DELETE, id);
        self.execute(req, Operation::Delete).await?;
        Ok(())
    }
}
