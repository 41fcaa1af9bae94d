//! HTTP client for the SurveyX REST API

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Method, RequestBuilder, Response};
use std::time::Duration;

use super::models::{
    AnalyticsRecord, LoginRequest, LoginResponse, MessageResponse, NewResponse, PublicSurvey,
    Question, QuestionUpsert, ResponseRow, SignupRequest, Survey, SurveyUpsert,
};

/// Thin client over the SurveyX backend. One method per endpoint; no
/// retries, no caching — every failure is reported to the caller as-is.
#[derive(Clone)]
pub struct SurveyClient {
    base_url: String,
    http_client: reqwest::Client,
    bearer_token: Option<String>,
}

impl SurveyClient {
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("surveyx-cli/0.1")
            .build()
            .expect("Failed to build HTTP client");

        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            bearer_token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let mut request = self.http_client.request(method, &url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Turn a non-2xx response into an error carrying the server-provided
    /// `message` field when the body is JSON, else a generic status line.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        debug!("API error ({}): {}", status, message);
        anyhow::bail!(message)
    }

    // --- auth ---

    pub async fn signup(&self, body: &SignupRequest) -> Result<MessageResponse> {
        let response = self
            .request(Method::POST, "/api/auth/signup")
            .json(body)
            .send()
            .await
            .context("Failed to reach the server")?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .request(Method::POST, "/api/auth/login")
            .json(body)
            .send()
            .await
            .context("Failed to reach the server")?;
        Ok(Self::check(response).await?.json().await?)
    }

    // --- surveys ---

    pub async fn list_surveys(&self) -> Result<Vec<Survey>> {
        let response = self.request(Method::GET, "/api/surveys").send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get_survey(&self, survey_id: i64) -> Result<Survey> {
        let path = format!("/api/surveys/{}", survey_id);
        let response = self.request(Method::GET, &path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_survey(&self, body: &SurveyUpsert) -> Result<Survey> {
        let response = self
            .request(Method::POST, "/api/surveys")
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_survey(&self, survey_id: i64, body: &SurveyUpsert) -> Result<Survey> {
        let path = format!("/api/surveys/{}", survey_id);
        let response = self.request(Method::PUT, &path).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_survey(&self, survey_id: i64) -> Result<()> {
        let path = format!("/api/surveys/{}", survey_id);
        let response = self.request(Method::DELETE, &path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Transition a draft survey to `active`, generating its shareable link.
    pub async fn publish_survey(&self, survey_id: i64) -> Result<Survey> {
        let path = format!("/api/surveys/{}/publish", survey_id);
        let response = self.request(Method::PUT, &path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Public endpoint: resolve a shareable link to its survey and ordered
    /// questions. Requires no authentication.
    pub async fn get_survey_by_link(&self, link: &str) -> Result<PublicSurvey> {
        let path = format!("/survey/api/{}", urlencoding::encode(link));
        let response = self.request(Method::GET, &path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    // --- questions ---

    pub async fn list_questions(&self, survey_id: i64) -> Result<Vec<Question>> {
        let path = format!("/api/questions/survey/{}", survey_id);
        let response = self.request(Method::GET, &path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_question(&self, body: &QuestionUpsert) -> Result<Question> {
        let response = self
            .request(Method::POST, "/api/questions")
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_question(&self, question_id: i64, body: &QuestionUpsert) -> Result<Question> {
        let path = format!("/api/questions/{}", question_id);
        let response = self.request(Method::PUT, &path).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<()> {
        let path = format!("/api/questions/{}", question_id);
        let response = self.request(Method::DELETE, &path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    // --- responses ---

    pub async fn list_responses(&self, survey_id: i64) -> Result<Vec<ResponseRow>> {
        let path = format!("/api/responses/survey/{}", survey_id);
        let response = self.request(Method::GET, &path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Submit a respondent's batch of answers. Public, like the link lookup.
    pub async fn submit_responses(&self, survey_id: i64, items: &[NewResponse]) -> Result<()> {
        let path = format!("/api/responses/survey/{}", survey_id);
        let response = self.request(Method::POST, &path).json(items).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    // --- analytics ---

    pub async fn get_analytics(&self, survey_id: i64) -> Result<AnalyticsRecord> {
        let path = format!("/api/analytics/survey/{}", survey_id);
        let response = self.request(Method::GET, &path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn generate_analytics(&self, survey_id: i64) -> Result<AnalyticsRecord> {
        let path = format!("/api/analytics/survey/{}", survey_id);
        let response = self.request(Method::POST, &path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = SurveyClient::new("http://localhost:8080/", None);
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
