use domain::{
    ClientError, QueryIntent, RagBackend, RagResponse, RequestState, SkipReason, Submission,
    ValidationError,
};
use parking_lot::Mutex;

struct QueryState {
    input: String,
    intent: QueryIntent,
    request: RequestState<RagResponse>,
}

/// Ask-or-index form: one text box, one mode switch, one request at a time.
pub struct QueryFlow<B> {
    backend: B,
    state: Mutex<QueryState>,
}

impl<B: RagBackend> QueryFlow<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(QueryState {
                input: String::new(),
                intent: QueryIntent::default(),
                request: RequestState::Idle,
            }),
        }
    }

    pub fn input(&self) -> String {
        self.state.lock().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state.lock().input = text.into();
    }

    pub fn intent(&self) -> QueryIntent {
        self.state.lock().intent
    }

    /// Changes where the next `submit()` goes. The text and any request
    /// already running are left alone.
    pub fn set_intent(&self, intent: QueryIntent) {
        self.state.lock().intent = intent;
    }

    pub fn request_state(&self) -> RequestState<RagResponse> {
        self.state.lock().request.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.lock().request.is_in_flight()
    }

    /// Sends the current text to the query or index endpoint.
    ///
    /// Does nothing when the text is empty or a request is already running.
    /// The intent is read once, when the request starts.
    pub async fn submit(&self) -> Submission<RagResponse> {
        let (text, intent) = {
            let mut state = self.state.lock();
            if state.request.is_in_flight() {
                tracing::debug!("submit ignored, request already in flight");
                return Submission::Skipped(SkipReason::Busy);
            }
            if state.input.is_empty() {
                return Submission::Skipped(SkipReason::Invalid(ValidationError::EmptyInput));
            }
            state.request = RequestState::InFlight;
            (state.input.clone(), state.intent)
        };

        tracing::debug!(%intent, chars = text.chars().count(), "submitting text");
        let result = match intent {
            QueryIntent::Query => self.backend.submit_query(&text).await,
            QueryIntent::Index => self.backend.submit_index(&text).await,
        };

        let mut state = self.state.lock();
        match result {
            Ok(response) => {
                state.request = RequestState::Resolved(response.clone());
                Submission::Resolved(response)
            }
            Err(err) => {
                tracing::warn!(%intent, error = %err, "text submission failed");
                state.request = RequestState::Failed(err.clone());
                Submission::Failed(err)
            }
        }
    }

    /// Message shown to the user when a submission fails.
    pub fn failure_message(err: &ClientError) -> String {
        format!("Error: {}", err)
    }
}
