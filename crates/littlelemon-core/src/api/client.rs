use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::models::MenuList;

use super::ApiError;

/// Client for the menu endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct MenuClient {
    client: Client,
    menu_url: String,
}

impl MenuClient {
    pub fn new(menu_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            menu_url: menu_url.into(),
        })
    }

    pub fn menu_url(&self) -> &str {
        &self.menu_url
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Fetch the raw menu document.
    async fn fetch_menu_body(&self) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(&self.menu_url).send().await?;
        let response = Self::check_response(response).await?;
        let body = response.bytes().await?;
        debug!(url = %self.menu_url, bytes = body.len(), "Menu document received");
        Ok(body.to_vec())
    }

    /// Fetch and strictly decode the menu document.
    pub async fn fetch_menu(&self) -> Result<MenuList, ApiError> {
        let body = self.fetch_menu_body().await?;
        Ok(MenuList::from_slice(&body)?)
    }
}
