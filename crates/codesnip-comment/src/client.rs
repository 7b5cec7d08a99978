use serde::{Deserialize, Serialize};

use crate::{CodeAnnotator, CommentError};

#[derive(Clone)]
pub struct CommentServiceClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl CommentServiceClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Check if the comment service is reachable
    pub async fn check_connection(&self) -> Result<(), CommentError> {
        self.client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()
            .map_err(CommentError::Network)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CodeAnnotator for CommentServiceClient {
    async fn annotate(&self, instruction: &str, code: &str) -> Result<String, CommentError> {
        let request = CommentRequest {
            instruction: instruction.to_owned(),
            code: code.to_owned(),
        };

        let mut builder = self.client.post(&self.base_url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response: CommentResponse = builder.send().await?.json().await?;
        response.into_result()
    }
}

#[derive(Serialize)]
struct CommentRequest {
    instruction: String,
    code: String,
}

#[derive(Deserialize)]
struct CommentResponse {
    result: Option<String>,
    error: Option<String>,
}

impl CommentResponse {
    fn into_result(self) -> Result<String, CommentError> {
        if let Some(error) = self.error {
            return Err(CommentError::Api(error));
        }

        self.result
            .ok_or_else(|| CommentError::Api("service returned null result".to_string()))
    }
}
