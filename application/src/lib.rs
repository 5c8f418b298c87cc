pub mod query_flow;
pub mod upload_flow;
pub mod workbench;

#[cfg(test)]
mod testing;

pub use query_flow::QueryFlow;
pub use upload_flow::UploadFlow;
pub use workbench::Workbench;
