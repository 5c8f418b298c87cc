use dialoguer::Confirm;
use crate::types::Result;

/// Warning shown before a file the backend is likely to refuse.
pub fn unsupported_upload_warning(name: &str) -> String {
    format!("{} is not a .pdf or .txt file; the backend may reject it.", name)
}

/// Asks whether to upload `name` anyway. Enter means no, and a closed
/// terminal reads as no rather than an error.
pub fn confirm_unsupported_upload(name: &str) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(format!("Upload {} anyway?", name))
        .default(false)
        .show_default(true)
        .interact_opt()?;
    Ok(answer.unwrap_or(false))
}
