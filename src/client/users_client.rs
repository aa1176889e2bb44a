use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Response;
use serde::de::DeserializeOwned;

use super::api::UsersApi;
use crate::constants::{DEFAULT_TIMEOUT_SECS, USERS_PATH};
use crate::error::{UsersError, UsersResult};
use crate::logging::log_debug;
use crate::models::{Envelope, ErrorBody, NewUser, User, UserId};

pub struct UsersClient {
    client: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: impl Into<String>) -> UsersResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> UsersResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    fn member_url(&self, id: UserId) -> String {
        format!("{}{}/{}", self.base_url, USERS_PATH, id)
    }

    async fn check_status(response: Response) -> UsersResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| text.trim().to_string());

        if detail.is_empty() {
            Err(UsersError::ApiError(format!("HTTP error: {}", status)))
        } else {
            Err(UsersError::ApiError(format!("HTTP error: {}: {}", status, detail)))
        }
    }

    async fn read_data<T: DeserializeOwned>(response: Response) -> UsersResult<Option<T>> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        if let Some(message) = &envelope.message {
            log_debug(&format!("Service replied: {}", message));
        }
        Ok(envelope.data)
    }

    async fn read_record(response: Response, action: &str) -> UsersResult<User> {
        Self::read_data(response)
            .await?
            .ok_or_else(|| UsersError::ApiError(format!("{} but no data returned", action)))
    }
}

#[async_trait]
impl UsersApi for UsersClient {
    async fn list_users(&self) -> UsersResult<Vec<User>> {
        let response = self.client.get(self.collection_url()).send().await?;
        // An empty table is reported as `"data": null`
        let users: Option<Vec<User>> = Self::read_data(response).await?;
        Ok(users.unwrap_or_default())
    }

    async fn get_user(&self, id: UserId) -> UsersResult<User> {
        let response = self.client.get(self.member_url(id)).send().await?;
        Self::read_record(response, "Fetched user").await
    }

    async fn create_user(&self, new_user: &NewUser) -> UsersResult<User> {
        let response = self
            .client
            .post(self.collection_url())
            .json(new_user)
            .send()
            .await?;
        Self::read_record(response, "Created user").await
    }

    async fn update_user(&self, id: UserId, changes: &NewUser) -> UsersResult<User> {
        let response = self
            .client
            .put(self.member_url(id))
            .json(changes)
            .send()
            .await?;
        Self::read_record(response, "Updated user").await
    }

    async fn delete_user(&self, id: UserId) -> UsersResult<()> {
        let response = self.client.delete(self.member_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
