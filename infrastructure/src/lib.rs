pub mod config;
pub mod file_loader;
pub mod rag_client;
