//! Notion export integration.
//!
//! A thin client over the Notion REST API: one page per exported prompt,
//! created sequentially, failing the whole batch on the first upstream
//! error. The integration is disabled entirely unless both credentials
//! are configured.

use promptvault_core::error::CoreError;
use promptvault_db::models::prompt::Prompt;
use serde_json::json;

use crate::config::NotionConfig;

/// Notion REST API endpoint for page creation.
const PAGES_URL: &str = "https://api.notion.com/v1/pages";

/// Notion API version header value.
const NOTION_VERSION: &str = "2022-06-28";

/// Client for exporting prompts to a Notion database.
pub struct NotionClient {
    http: reqwest::Client,
    config: NotionConfig,
}

impl NotionClient {
    pub fn new(config: NotionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create one Notion page per prompt. Returns the number of pages
    /// created; the first upstream failure aborts the batch.
    pub async fn export_prompts(&self, prompts: &[Prompt]) -> Result<usize, CoreError> {
        let mut exported = 0;

        for prompt in prompts {
            self.create_page(prompt).await?;
            exported += 1;
        }

        Ok(exported)
    }

    /// Create a single page titled after the prompt, with the prompt text
    /// as a paragraph block.
    async fn create_page(&self, prompt: &Prompt) -> Result<(), CoreError> {
        let body = json!({
            "parent": { "database_id": self.config.database_id },
            "properties": {
                "Name": {
                    "title": [{ "text": { "content": prompt.title } }]
                }
            },
            "children": [{
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{ "type": "text", "text": { "content": prompt.text } }]
                }
            }]
        });

        let response = self
            .http
            .post(PAGES_URL)
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::Dependency(format!("Notion request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(CoreError::Dependency(format!(
                "Notion rejected page creation: {}",
                response.status()
            )));
        }

        Ok(())
    }
}
