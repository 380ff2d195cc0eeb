use crate::client::wire::{CreateUserBody, FailureEnvelope, UserEnvelope, UserListEnvelope};
use crate::{ClientError, ClientResult, RegistryApi};

use ur_core::User;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

/// HTTP client for the ur-server REST API
pub struct RegistryClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl RegistryClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method) -> reqwest::RequestBuilder {
        // Both operations live at the server root
        self.client.request(method, format!("{}/", self.base_url))
    }

    /// Execute request, mapping non-2xx bodies to `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<FailureEnvelope>(&body)
                .ok()
                .and_then(|f| f.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RegistryApi for RegistryClient {
    async fn list_users(&self) -> ClientResult<Vec<User>> {
        let envelope: UserListEnvelope = self.execute(self.request(Method::GET)).await?;
        if !envelope.success {
            return Err(ClientError::api_error(200, "Server reported failure".into()));
        }

        Ok(envelope.users.into_iter().map(User::from).collect())
    }

    async fn create_user(&self, name: &str, email: &str) -> ClientResult<User> {
        let req = self
            .request(Method::POST)
            .json(&CreateUserBody { name, email });
        let envelope: UserEnvelope = self.execute(req).await?;
        if !envelope.success {
            return Err(ClientError::api_error(201, "Server reported failure".into()));
        }

        Ok(envelope.user.into())
    }
}
