pub mod backend;
pub mod error;
pub mod models;
pub mod request_state;

pub use backend::RagBackend;
pub use error::{BackendError, ClientError, ClientResult, ValidationError};
pub use models::{QueryIntent, RagResponse, SelectedFile, UploadPreview};
pub use request_state::{RequestState, SkipReason, Submission};
