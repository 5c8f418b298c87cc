use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer and retrieved passages returned by the query and index endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_used: Option<Vec<String>>,
}

impl RagResponse {
    /// The answer text, or `None` when the backend produced none.
    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.is_empty())
    }

    /// Retrieved passages in the order the backend returned them.
    pub fn context(&self) -> &[String] {
        self.context_used.as_deref().unwrap_or_default()
    }
}

/// How the backend would split an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPreview {
    pub filename: String,
    pub total_chunks: u64,
    pub sample_chunks: Vec<String>,
}

impl UploadPreview {
    /// Checks the shape a preview must have before it can be displayed.
    pub fn validate(&self) -> Result<(), String> {
        if self.filename.is_empty() {
            return Err("preview has an empty filename".to_string());
        }
        if self.sample_chunks.len() as u64 > self.total_chunks {
            return Err(format!(
                "preview lists {} sample chunks but only {} total",
                self.sample_chunks.len(),
                self.total_chunks
            ));
        }
        Ok(())
    }
}

/// Which backend operation the current input text goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryIntent {
    #[default]
    Query,
    Index,
}

impl QueryIntent {
    pub fn toggled(self) -> Self {
        match self {
            QueryIntent::Query => QueryIntent::Index,
            QueryIntent::Index => QueryIntent::Query,
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryIntent::Query => f.write_str("Ask"),
            QueryIntent::Index => f.write_str("Index"),
        }
    }
}

/// A document picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Keep file contents out of debug output and logs.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
