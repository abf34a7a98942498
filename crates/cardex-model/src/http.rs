//! HTTP adapter for a hosted NER model.
//!
//! The hosted endpoint accepts `POST { "text": ... }` and answers
//! `{ "tokens": [ { "text", "tag", "start", "end" }, ... ] }`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ModelError, ModelLoader, NerModel, NerToken, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    tokens: Vec<NerToken>,
}

/// NER model served over HTTP.
pub struct HttpModel {
    client: reqwest::Client,
    endpoint: String,
    bearer: Option<String>,
}

impl HttpModel {
    /// Create an adapter for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ModelError::Init(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            bearer: None,
        })
    }

    /// Attach a bearer token to every request.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

#[async_trait]
impl NerModel for HttpModel {
    async fn predict(&self, text: &str) -> Result<Vec<NerToken>> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { text });

        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::Request(format!(
                "endpoint returned {status}"
            )));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        debug!("model returned {} tokens", body.tokens.len());
        Ok(body.tokens)
    }
}

/// Loader that builds an `HttpModel` and warms the endpoint up once.
///
/// The hosted model loads its weights on the first request; issuing an empty
/// warm-up prediction here keeps that cost inside initialization, where every
/// concurrent caller awaits it exactly once.
pub struct HttpModelLoader {
    endpoint: String,
    bearer: Option<String>,
}

impl HttpModelLoader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            bearer: None,
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

#[async_trait]
impl ModelLoader for HttpModelLoader {
    async fn load(&self) -> Result<Arc<dyn NerModel>> {
        let mut model = HttpModel::new(&self.endpoint)?;
        if let Some(token) = &self.bearer {
            model = model.with_bearer(token.clone());
        }

        if let Err(e) = model.predict("").await {
            warn!("model warm-up failed: {e}");
            return Err(ModelError::NotReady(e.to_string()));
        }

        Ok(Arc::new(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_response_decodes_token_contract() {
        let body = r###"{"tokens":[{"text":"##zadeh","tag":"I-PER","start":5,"end":10}]}"###;
        let parsed: PredictResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.tokens,
            vec![NerToken::new("##zadeh", "I-PER", 5, 10)]
        );
    }

    #[test]
    fn test_predict_response_rejects_missing_fields() {
        let body = r#"{"tokens":[{"text":"Ali","start":0,"end":3}]}"#;
        assert!(serde_json::from_str::<PredictResponse>(body).is_err());
    }
}
