use crate::error::MenuError;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PDF_PATH: &str = "SD Menu.pdf";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub pdf_path: PathBuf,
    pub model: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub bind_addr: String,
    pub json_mode: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, MenuError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Only `GOOGLE_API_KEY` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MenuError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("GOOGLE_API_KEY").ok_or(MenuError::MissingApiKey)?;

        let request_timeout = match get("COMPLETION_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(MenuError::InvalidConfig(format!(
                        "COMPLETION_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    )))
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let json_mode = match get("GEMINI_JSON_MODE") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                MenuError::InvalidConfig(format!("GEMINI_JSON_MODE is not a boolean: {raw:?}"))
            })?,
            None => true,
        };

        Ok(Self {
            api_key,
            pdf_path: get("MENU_PDF_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_PATH)),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            request_timeout,
            bind_addr: get("MENU_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            json_mode,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("pdf_path", &self.pdf_path)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("json_mode", &self.json_mode)
            .finish()
    }
}
