use application::{QueryFlow, UploadFlow, Workbench};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use domain::{ClientError, QueryIntent, RagResponse, SkipReason, Submission, UploadPreview};
use infrastructure::config::Config;
use infrastructure::file_loader::{load_selected_file, load_text};
use infrastructure::rag_client::RagClient;
use shared::confirmation::{confirm_unsupported_upload, unsupported_upload_warning};
use shared::types::Result;
use shared::utils::{is_supported_file, truncate_chars};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::render::{render_answer, render_preview, render_workbench};

#[derive(Parser, Debug)]
#[command(name = "ragpad")]
#[command(about = "Ask questions, index text and preview document chunking against a RAG backend")]
pub struct Cli {
    /// Backend base URL (overrides RAG_API_BASE)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log requests at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask a question about previously indexed content
    Ask {
        #[arg(trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Send text to be chunked and indexed
    Index {
        /// Read the text to index from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Upload a .pdf or .txt file and preview how it will be chunked
    Upload {
        path: PathBuf,

        /// Do not ask before uploading other file types
        #[arg(short, long)]
        yes: bool,
    },

    /// Menu-driven session (the default)
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuItem {
    EditText,
    Submit,
    SwitchMode,
    Upload,
    RetryUpload(String),
    Quit,
}

/// Menu entries; `retry` names a file whose last upload failed and which
/// can be sent again without picking it anew.
fn menu_items(retry: Option<String>) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem::EditText,
        MenuItem::Submit,
        MenuItem::SwitchMode,
        MenuItem::Upload,
    ];
    if let Some(name) = retry {
        items.push(MenuItem::RetryUpload(name));
    }
    items.push(MenuItem::Quit);
    items
}

pub struct CliApp {
    config: Config,
    bench: Workbench<RagClient>,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        let client = RagClient::from_config(&config);
        Self {
            bench: Workbench::new(client),
            config,
        }
    }

    pub async fn run(&mut self, command: Option<Command>) -> Result<ExitCode> {
        tracing::debug!(api_base = %self.config.api_base, "starting");
        match command {
            Some(Command::Ask { question }) => self.handle_ask(&question.join(" ")).await,
            Some(Command::Index { file, text }) => {
                self.handle_index(file.as_deref(), &text.join(" ")).await
            }
            Some(Command::Upload { path, yes }) => self.handle_upload(&path, yes).await,
            Some(Command::Interactive) | None => self.handle_interactive().await,
        }
    }

    async fn handle_ask(&mut self, question: &str) -> Result<ExitCode> {
        let question = if question.trim().is_empty() {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("Question")
                .interact_text()?
        } else {
            question.to_string()
        };
        self.bench.set_intent(QueryIntent::Query);
        self.bench.set_input(question);
        Ok(self.submit_text_once().await)
    }

    async fn handle_index(&mut self, file: Option<&Path>, text: &str) -> Result<ExitCode> {
        let content = match file {
            Some(path) => load_text(path).await?,
            None => text.to_string(),
        };
        self.bench.set_intent(QueryIntent::Index);
        self.bench.set_input(content);
        Ok(self.submit_text_once().await)
    }

    async fn handle_upload(&mut self, path: &Path, yes: bool) -> Result<ExitCode> {
        if !self.select_upload(path, yes).await? {
            return Ok(ExitCode::SUCCESS);
        }
        eprintln!("Uploading...");
        let outcome = self.bench.submit_upload().await;
        Ok(self.report_upload(outcome))
    }

    async fn submit_text_once(&mut self) -> ExitCode {
        eprintln!("{}", processing_label(self.bench.query_flow().intent()));
        let outcome = self.bench.submit_text().await;
        self.report_text(outcome)
    }

    /// Loads `path` into the upload flow. Returns `false` when the user
    /// declines to upload an unsupported file type.
    async fn select_upload(&mut self, path: &Path, yes: bool) -> Result<bool> {
        let file = load_selected_file(path).await?;
        if !is_supported_file(&file.name) {
            println!("{}", unsupported_upload_warning(&file.name).yellow());
            if !yes && !confirm_unsupported_upload(&file.name)? {
                println!("{}", "Upload cancelled.".yellow());
                return Ok(false);
            }
        }
        self.bench.select_file(Some(file));
        Ok(true)
    }

    fn report_text(&self, outcome: Submission<RagResponse>) -> ExitCode {
        match outcome {
            Submission::Resolved(response) => {
                if let Some(card) = render_answer(Some(&response)) {
                    println!("{}", card);
                }
                ExitCode::SUCCESS
            }
            Submission::Failed(err) => {
                println!("{}", QueryFlow::<RagClient>::failure_message(&err).red().bold());
                ExitCode::FAILURE
            }
            Submission::Skipped(reason) => {
                print_skip(&reason);
                ExitCode::FAILURE
            }
        }
    }

    fn report_upload(&self, outcome: Submission<UploadPreview>) -> ExitCode {
        match outcome {
            Submission::Resolved(preview) => {
                if let Some(card) = render_preview(Some(&preview), self.config.preview_chars) {
                    println!("{}", card);
                }
                ExitCode::SUCCESS
            }
            Submission::Failed(err) => {
                println!("{}", UploadFlow::<RagClient>::failure_message(&err).red().bold());
                ExitCode::FAILURE
            }
            Submission::Skipped(reason) => {
                print_skip(&reason);
                ExitCode::FAILURE
            }
        }
    }

    async fn handle_interactive(&mut self) -> Result<ExitCode> {
        println!("{}", "RAG playground. Ask questions or index your own text.".bold());
        println!("Backend: {}", self.config.api_base.cyan());

        loop {
            let flow = self.bench.query_flow();
            let intent = flow.intent();
            let input = flow.input();
            let summary = if input.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                truncate_chars(&input, 60)
            };
            println!("\n{} {}   {} {}", "Mode:".bold(), intent, "Text:".bold(), summary);

            let items = menu_items(self.bench.upload_flow().retryable_file());
            let labels: Vec<String> = items.iter().map(|item| menu_label(item, intent)).collect();
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()?;

            match &items[choice] {
                MenuItem::EditText => {
                    let text: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(input_prompt(intent))
                        .with_initial_text(input)
                        .allow_empty(true)
                        .interact_text()?;
                    self.bench.set_input(text);
                }
                MenuItem::Submit => {
                    eprintln!("{}", processing_label(intent));
                    let outcome = self.bench.submit_text().await;
                    self.show_outcome(&outcome, QueryFlow::<RagClient>::failure_message);
                }
                MenuItem::SwitchMode => self.bench.set_intent(intent.toggled()),
                MenuItem::Upload => {
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt("File to upload (.pdf or .txt)")
                        .interact_text()?;
                    match self.select_upload(Path::new(path.trim()), false).await {
                        Ok(true) => {
                            eprintln!("Uploading...");
                            let outcome = self.bench.submit_upload().await;
                            self.show_outcome(&outcome, UploadFlow::<RagClient>::failure_message);
                        }
                        Ok(false) => {}
                        Err(err) => println!("{} {:#}", "Error:".red().bold(), err),
                    }
                }
                MenuItem::RetryUpload(name) => {
                    eprintln!("Retrying upload of {}...", name);
                    let outcome = self.bench.submit_upload().await;
                    self.show_outcome(&outcome, UploadFlow::<RagClient>::failure_message);
                }
                MenuItem::Quit => break,
            }
        }
        Ok(ExitCode::SUCCESS)
    }

    /// Prints the alert for a failed submission, then whatever is on display.
    /// A failure never removes the previous result.
    fn show_outcome<T>(&self, outcome: &Submission<T>, failure_message: fn(&ClientError) -> String) {
        match outcome {
            Submission::Skipped(reason) => {
                print_skip(reason);
                return;
            }
            Submission::Failed(err) => println!("{}", failure_message(err).red().bold()),
            Submission::Resolved(_) => {}
        }
        if let Some(screen) = render_workbench(&self.bench, self.config.preview_chars) {
            println!("\n{}", screen);
        }
    }
}

fn menu_label(item: &MenuItem, intent: QueryIntent) -> String {
    match item {
        MenuItem::EditText => "Edit text".to_string(),
        MenuItem::Submit => match intent {
            QueryIntent::Query => "Ask Question".to_string(),
            QueryIntent::Index => "Index Content".to_string(),
        },
        MenuItem::SwitchMode => format!("Switch mode to {}", intent.toggled()),
        MenuItem::Upload => "Upload & Preview a file".to_string(),
        MenuItem::RetryUpload(name) => format!("Retry upload of {}", name),
        MenuItem::Quit => "Quit".to_string(),
    }
}

fn input_prompt(intent: QueryIntent) -> &'static str {
    match intent {
        QueryIntent::Query => "Ask something about your indexed data",
        QueryIntent::Index => "Paste or write content to index",
    }
}

fn processing_label(intent: QueryIntent) -> &'static str {
    match intent {
        QueryIntent::Query => "Querying...",
        QueryIntent::Index => "Indexing...",
    }
}

fn print_skip(reason: &SkipReason) {
    let message = match reason {
        SkipReason::Invalid(err) => format!("Nothing sent: {}.", err),
        SkipReason::Busy => "A request is already in flight.".to_string(),
    };
    println!("{}", message.yellow());
}
