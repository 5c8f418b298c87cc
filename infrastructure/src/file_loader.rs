use anyhow::Context;
use domain::SelectedFile;
use shared::types::Result;
use std::path::Path;

/// Reads a document from disk for the upload flow.
pub async fn load_selected_file(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .with_context(|| format!("{} has no usable file name", path.display()))?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(SelectedFile::new(name, bytes))
}

/// Reads a text file whose whole content is to be indexed.
pub async fn load_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
