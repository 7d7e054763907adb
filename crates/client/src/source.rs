//! Where the listing view gets its characters from.

use async_trait::async_trait;
use reqwest::StatusCode;
use smashlore_core::character::Character;
use smashlore_core::types::CharacterId;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// A read-only source of characters.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch every character, in the order the source returns them.
    async fn fetch_all(&self) -> Result<Vec<Character>, ClientError>;

    /// Fetch a single character. Absence is `Ok(None)`.
    async fn fetch_by_id(&self, id: CharacterId) -> Result<Option<Character>, ClientError>;
}

/// [`CharacterSource`] backed by the catalog HTTP API.
///
/// Responses are decoded straight into [`Character`], so every record the
/// client holds has passed the same validation as on the server.
pub struct HttpCharacterSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCharacterSource {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn characters_url(&self) -> String {
        format!("{}/api/v1/characters", self.base_url)
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn fetch_all(&self) -> Result<Vec<Character>, ClientError> {
        let url = self.characters_url();
        tracing::debug!(%url, "Fetching all characters");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn fetch_by_id(&self, id: CharacterId) -> Result<Option<Character>, ClientError> {
        let url = format!("{}/{id}", self.characters_url());
        tracing::debug!(%url, "Fetching character");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status().as_u16()));
        }
        Ok(Some(response.json().await?))
    }
}
