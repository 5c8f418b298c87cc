use dotenvy::dotenv;
use std::env;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub preview_chars: usize,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("RAG_API_BASE")
            .or_else(|| lookup("VITE_API_BASE"))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let preview_chars = lookup("PREVIEW_CHARS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PREVIEW_CHARS);

        Self {
            api_base: normalize_base(&api_base),
            preview_chars,
        }
    }

    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.filter(|b| !b.trim().is_empty()) {
            self.api_base = normalize_base(base);
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
