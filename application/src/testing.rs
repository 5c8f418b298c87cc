use domain::{
    BackendError, ClientResult, RagBackend, RagResponse, SelectedFile, UploadPreview,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Index(String),
    Query(String),
    Upload(String),
}

/// In-memory backend that records every call and answers deterministically.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    calls: Arc<Mutex<Vec<Call>>>,
    failure: Arc<Mutex<Option<BackendError>>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedBackend {
    /// Calls block until `release()` is invoked.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn fail_next(&self, err: BackendError) {
        *self.failure.lock() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.lock().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let failure = self.failure.lock().take();
        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl RagBackend for ScriptedBackend {
    async fn submit_index(&self, content: &str) -> ClientResult<RagResponse> {
        self.record(Call::Index(content.to_string())).await?;
        Ok(RagResponse {
            answer: Some(format!("index:{}", content)),
            context_used: None,
        })
    }

    async fn submit_query(&self, query: &str) -> ClientResult<RagResponse> {
        self.record(Call::Query(query.to_string())).await?;
        Ok(RagResponse {
            answer: Some(format!("query:{}", query)),
            context_used: Some(vec!["ctx".to_string()]),
        })
    }

    async fn submit_upload(&self, file: &SelectedFile) -> ClientResult<UploadPreview> {
        self.record(Call::Upload(file.name.clone())).await?;
        let sample_chunks = if file.is_empty() {
            vec![]
        } else {
            vec![String::from_utf8_lossy(&file.bytes).into_owned()]
        };
        Ok(UploadPreview {
            filename: file.name.clone(),
            total_chunks: sample_chunks.len() as u64,
            sample_chunks,
        })
    }
}
