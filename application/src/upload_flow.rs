use domain::{
    ClientError, RagBackend, RequestState, SelectedFile, SkipReason, Submission, UploadPreview,
    ValidationError,
};
use parking_lot::Mutex;

struct UploadState {
    file: Option<SelectedFile>,
    request: RequestState<UploadPreview>,
}

/// Upload a document and get back how the backend would chunk it.
pub struct UploadFlow<B> {
    backend: B,
    state: Mutex<UploadState>,
}

impl<B: RagBackend> UploadFlow<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(UploadState {
                file: None,
                request: RequestState::Idle,
            }),
        }
    }

    /// Replaces the selection and clears a previous failure.
    pub fn select_file(&self, file: Option<SelectedFile>) {
        let mut state = self.state.lock();
        state.file = file;
        if matches!(state.request, RequestState::Failed(_)) {
            state.request = RequestState::Idle;
        }
    }

    pub fn selected_name(&self) -> Option<String> {
        self.state.lock().file.as_ref().map(|f| f.name.clone())
    }

    pub fn request_state(&self) -> RequestState<UploadPreview> {
        self.state.lock().request.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.lock().request.is_in_flight()
    }

    /// The message to show while the flow sits in `Failed`.
    pub fn error_message(&self) -> Option<String> {
        self.state.lock().request.error().map(Self::failure_message)
    }

    /// Name of the still-selected file whose last upload failed, if any.
    pub fn retryable_file(&self) -> Option<String> {
        let state = self.state.lock();
        match (&state.request, &state.file) {
            (RequestState::Failed(_), Some(file)) => Some(file.name.clone()),
            _ => None,
        }
    }

    pub async fn submit(&self) -> Submission<UploadPreview> {
        let file = {
            let mut state = self.state.lock();
            if state.request.is_in_flight() {
                tracing::debug!("upload ignored, request already in flight");
                return Submission::Skipped(SkipReason::Busy);
            }
            let Some(file) = state.file.clone() else {
                return Submission::Skipped(SkipReason::Invalid(ValidationError::NoFileSelected));
            };
            state.request = RequestState::InFlight;
            file
        };

        tracing::debug!(file = %file.name, bytes = file.len(), "uploading file");
        let result = self.backend.submit_upload(&file).await;

        let mut state = self.state.lock();
        match result {
            Ok(preview) => {
                state.request = RequestState::Resolved(preview.clone());
                Submission::Resolved(preview)
            }
            Err(err) => {
                tracing::warn!(file = %file.name, error = %err, "upload failed");
                state.request = RequestState::Failed(err.clone());
                Submission::Failed(err)
            }
        }
    }

    pub fn failure_message(err: &ClientError) -> String {
        format!("Upload failed: {}", err)
    }
}
