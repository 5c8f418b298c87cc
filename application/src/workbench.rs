use domain::{
    QueryIntent, RagBackend, RagResponse, SelectedFile, Submission, UploadPreview,
};

use crate::query_flow::QueryFlow;
use crate::upload_flow::UploadFlow;

/// Owns both flows and whatever they last published.
///
/// The displayed answer and preview change only when a flow resolves;
/// failures leave them untouched.
pub struct Workbench<B> {
    query: QueryFlow<B>,
    upload: UploadFlow<B>,
    answer: Option<RagResponse>,
    preview: Option<UploadPreview>,
}

impl<B: RagBackend + Clone> Workbench<B> {
    pub fn new(backend: B) -> Self {
        Self {
            query: QueryFlow::new(backend.clone()),
            upload: UploadFlow::new(backend),
            answer: None,
            preview: None,
        }
    }
}

impl<B: RagBackend> Workbench<B> {
    pub fn query_flow(&self) -> &QueryFlow<B> {
        &self.query
    }

    pub fn upload_flow(&self) -> &UploadFlow<B> {
        &self.upload
    }

    pub fn answer(&self) -> Option<&RagResponse> {
        self.answer.as_ref()
    }

    pub fn preview(&self) -> Option<&UploadPreview> {
        self.preview.as_ref()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.query.set_input(text);
    }

    pub fn set_intent(&self, intent: QueryIntent) {
        self.query.set_intent(intent);
    }

    pub fn select_file(&self, file: Option<SelectedFile>) {
        self.upload.select_file(file);
    }

    pub async fn submit_text(&mut self) -> Submission<RagResponse> {
        let outcome = self.query.submit().await;
        if let Submission::Resolved(response) = &outcome {
            self.answer = Some(response.clone());
        }
        outcome
    }

    pub async fn submit_upload(&mut self) -> Submission<UploadPreview> {
        let outcome = self.upload.submit().await;
        if let Submission::Resolved(preview) = &outcome {
            self.preview = Some(preview.clone());
        }
        outcome
    }
}
