use crate::error::ClientResult;
use crate::models::{RagResponse, SelectedFile, UploadPreview};

/// The three operations the RAG service exposes to this client.
pub trait RagBackend {
    fn submit_index(
        &self,
        content: &str,
    ) -> impl std::future::Future<Output = ClientResult<RagResponse>> + Send;

    fn submit_query(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = ClientResult<RagResponse>> + Send;

    fn submit_upload(
        &self,
        file: &SelectedFile,
    ) -> impl std::future::Future<Output = ClientResult<UploadPreview>> + Send;
}
