//! Text rendering of published results. Nothing here mutates what it shows.

use application::Workbench;
use colored::Colorize;
use domain::{RagBackend, RagResponse, UploadPreview};
use shared::utils::truncate_chars;

pub const NO_ANSWER_PLACEHOLDER: &str = "No answer provided";

/// Renders an answer card, or `None` when nothing has been published yet.
pub fn render_answer(result: Option<&RagResponse>) -> Option<String> {
    let result = result?;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Answer".green().bold()));
    out.push_str(result.answer_text().unwrap_or(NO_ANSWER_PLACEHOLDER));
    out.push('\n');

    let context = result.context();
    if !context.is_empty() {
        out.push_str(&format!("\n{}\n", "Context used".cyan().bold()));
        for (i, passage) in context.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, passage));
        }
    }
    Some(out)
}

/// Renders a chunk preview; sample chunks are cut to `max_chars` characters.
pub fn render_preview(preview: Option<&UploadPreview>, max_chars: usize) -> Option<String> {
    let preview = preview?;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "File Preview".green().bold()));
    out.push_str(&format!("Filename: {}\n", preview.filename));
    out.push_str(&format!("Total Chunks: {}\n", preview.total_chunks));

    if !preview.sample_chunks.is_empty() {
        out.push_str(&format!("\n{}\n", "Sample Chunks".cyan().bold()));
        for (i, chunk) in preview.sample_chunks.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, truncate_chars(chunk, max_chars)));
        }
    }
    Some(out)
}

/// Everything the workbench currently displays, answer first.
pub fn render_workbench<B: RagBackend>(bench: &Workbench<B>, max_chars: usize) -> Option<String> {
    let sections: Vec<String> = [
        render_answer(bench.answer()),
        render_preview(bench.preview(), max_chars),
    ]
    .into_iter()
    .flatten()
    .collect();

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n"))
    }
}
