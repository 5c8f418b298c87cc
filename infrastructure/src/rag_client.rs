use domain::{
    BackendError, ClientResult, RagBackend, RagResponse, SelectedFile, UploadPreview,
    ValidationError,
};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::telemetry::Telemetry;
use std::sync::Arc;

use crate::config::Config;

const INDEX_PATH: &str = "/rag/index";
const QUERY_PATH: &str = "/rag/query";
const UPLOAD_PATH: &str = "/rag/upload";

/// HTTP gateway to the RAG service. Every call is a single attempt.
#[derive(Clone)]
pub struct RagClient {
    client: Arc<Client>,
    base_url: String,
}

impl RagClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let timer = Telemetry::new();
        tracing::debug!(%url, "sending request");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "request failed");
                BackendError::Transport(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "backend returned an error status");
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let decoded = decode_body(&text).map_err(|e| {
            tracing::warn!(%url, error = %e, "could not use response body");
            e
        })?;
        tracing::info!(%url, elapsed_ms = timer.elapsed_ms() as u64, "request completed");
        Ok(decoded)
    }
}

/// Decodes a success body, turning `{"error": "..."}` replies into
/// `BackendError::Rejected`.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, BackendError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(BackendError::Rejected(message.to_string()));
    }

    serde_json::from_value(value).map_err(|e| BackendError::InvalidResponse(e.to_string()))
}

fn mime_for(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

fn text_form(field: &'static str, value: &str) -> ClientResult<Form> {
    if value.is_empty() {
        return Err(ValidationError::EmptyInput.into());
    }
    Ok(Form::new().text(field, value.to_string()))
}

impl RagBackend for RagClient {
    async fn submit_index(&self, content: &str) -> ClientResult<RagResponse> {
        let form = text_form("content", content)?;
        self.post_form(INDEX_PATH, form).await
    }

    async fn submit_query(&self, query: &str) -> ClientResult<RagResponse> {
        let form = text_form("query", query)?;
        self.post_form(QUERY_PATH, form).await
    }

    async fn submit_upload(&self, file: &SelectedFile) -> ClientResult<UploadPreview> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(mime_for(&file.name))
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let preview: UploadPreview = self.post_form(UPLOAD_PATH, form).await?;
        preview.validate().map_err(|reason| {
            tracing::warn!(file = %file.name, %reason, "upload preview rejected");
            BackendError::InvalidResponse(reason)
        })?;
        Ok(preview)
    }
}
