use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use super::types::{
    AnalyzeRequest, AnalyzeResponse, NewPrompt, OptimizeRequest, OptimizeResponse, PromptRecord,
    PromptUpdate,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not build HTTP client: {0}")]
    Build(reqwest::Error),
}

/// Blocking client for the prompt API. Each operation is a direct
/// request/response pass-through; callers decide what to do with failures.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Build)?;

        // Trailing slashes would produce `//prompts` URLs
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /prompts`
    pub fn fetch_all(&self) -> Result<Vec<PromptRecord>, ApiError> {
        let records = self
            .http
            .get(self.url("/prompts"))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(records)
    }

    /// `POST /prompts`
    pub fn create(&self, prompt: &NewPrompt) -> Result<PromptRecord, ApiError> {
        let record = self
            .http
            .post(self.url("/prompts"))
            .json(prompt)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(record)
    }

    /// `PUT /prompts/{id}`
    pub fn update(&self, id: &str, update: &PromptUpdate) -> Result<PromptRecord, ApiError> {
        let record = self
            .http
            .put(self.url(&format!("/prompts/{}", id)))
            .json(update)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(record)
    }

    /// `DELETE /prompts/{id}`
    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http
            .delete(self.url(&format!("/prompts/{}", id)))
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `POST /ai/optimize`
    pub fn optimize(&self, prompt: &str) -> Result<OptimizeResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/ai/optimize"))
            .json(&OptimizeRequest {
                prompt: prompt.to_string(),
            })
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response)
    }

    /// `POST /ai/analyze`
    pub fn analyze(&self, prompts: Vec<String>) -> Result<AnalyzeResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/ai/analyze"))
            .json(&AnalyzeRequest { prompts })
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client =
            ApiClient::new("http://localhost:5005/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5005/api");
    }
}
