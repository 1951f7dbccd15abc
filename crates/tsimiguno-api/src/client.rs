//! HTTP client for the word-evaluation service

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::error::ApiError;
use crate::Result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch the next batch of candidate words.
    pub async fn candidates(&self, credential: &str) -> Result<Vec<String>> {
        let url = self.endpoint("candidates")?;

        tracing::debug!(url = %url, "Fetching candidates");

        let response = self
            .http
            .get(url)
            .bearer_auth(credential)
            .send()
            .await?;

        let words = Self::expect_ok(response)?.json::<Vec<String>>().await?;

        tracing::debug!(count = words.len(), "Received candidates");

        Ok(words)
    }

    /// Submit the word→score map. The server folds the scores into the
    /// user's preference model and answers with the next batch.
    pub async fn evaluate(
        &self,
        credential: &str,
        scores: &HashMap<String, f64>,
    ) -> Result<Vec<String>> {
        let url = self.endpoint("eval")?;

        tracing::debug!(url = %url, count = scores.len(), "Submitting evaluation");

        let response = self
            .http
            .post(url)
            .bearer_auth(credential)
            .json(scores)
            .send()
            .await?;

        let words = Self::expect_ok(response)?.json::<Vec<String>>().await?;

        tracing::debug!(count = words.len(), "Received next candidates");

        Ok(words)
    }

    /// Fetch the words the user marked as favorites.
    pub async fn favorites(&self, credential: &str) -> Result<Vec<String>> {
        let url = self.endpoint("favorites")?;

        tracing::debug!(url = %url, "Fetching favorites");

        let response = self
            .http
            .get(url)
            .bearer_auth(credential)
            .send()
            .await?;

        Ok(Self::expect_ok(response)?.json::<Vec<String>>().await?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status => {
                tracing::warn!(status = %status, url = %response.url(), "Request rejected");
                Err(ApiError::Status(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Url::parse("http://localhost:8000/").unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        let client = client();

        assert_eq!(
            client.endpoint("candidates").unwrap().as_str(),
            "http://localhost:8000/candidates"
        );
        assert_eq!(
            client.endpoint("eval").unwrap().as_str(),
            "http://localhost:8000/eval"
        );
        assert_eq!(
            client.endpoint("favorites").unwrap().as_str(),
            "http://localhost:8000/favorites"
        );
    }

    #[test]
    fn test_evaluation_payload_shape() {
        let mut scores = HashMap::new();
        scores.insert("あか".to_string(), 1.0);
        scores.insert("みどり".to_string(), -0.7);

        let body = serde_json::to_value(&scores).unwrap();
        assert_eq!(body["あか"], 1.0);
        assert_eq!(body["みどり"], -0.7);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::Unauthorized.to_string(),
            "Credential rejected by the server"
        );
        assert_eq!(
            ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR).to_string(),
            "Unexpected response status: 500 Internal Server Error"
        );
    }
}
