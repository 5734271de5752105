use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;

use axum::http::HeaderValue;

use crate::error::ConfigError;

/// Env file read from the working directory by [`Settings::load`].
pub const ENV_FILE: &str = ".env";

pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const API_V1_STR: &str = "API_V1_STR";
pub const BACKEND_CORS_ORIGINS: &str = "BACKEND_CORS_ORIGINS";
pub const ENVIRONMENT: &str = "ENVIRONMENT";
pub const DEBUG: &str = "DEBUG";
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";

/// Application settings. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_name: String,
    /// Prefix for versioned API paths, e.g. `/api/v1`. Empty or starting with `/`.
    pub api_v1_str: String,
    /// Origins allowed by the CORS policy. A `*` entry mirrors any origin.
    pub backend_cors_origins: Vec<String>,
    pub environment: String,
    pub debug: bool,
    pub listen_addr: SocketAddr,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: "FastAPI Template".to_string(),
            api_v1_str: "/api/v1".to_string(),
            backend_cors_origins: vec![
                "http://localhost:3000".to_string(), // React
                "http://localhost:8080".to_string(), // Vue
                "http://localhost:4200".to_string(), // Angular
            ],
            environment: "development".to_string(),
            debug: true,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

impl Settings {
    /// Load from the process environment, falling back to `./.env`, then defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(ENV_FILE)
    }

    /// Like [`Settings::load`] with an explicit env file. A missing file is ignored.
    ///
    /// The file is only read, the process environment is left untouched.
    pub fn load_from(env_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file_vars = read_env_file(env_file.as_ref())?;
        Self::from_lookup(layered(|key| std::env::var(key).ok(), &file_vars))
    }

    /// Build settings from an arbitrary key lookup. Keys are matched exactly.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_v1_str = match lookup(API_V1_STR) {
            Some(raw) => parse_prefix(&raw)?,
            None => defaults.api_v1_str,
        };
        let backend_cors_origins = match lookup(BACKEND_CORS_ORIGINS) {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.backend_cors_origins,
        };
        let debug = match lookup(DEBUG) {
            Some(raw) => parse_bool(DEBUG, &raw)?,
            None => defaults.debug,
        };
        let listen_addr = match lookup(LISTEN_ADDR) {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::invalid(LISTEN_ADDR, &raw, format!("{e}")))?,
            None => defaults.listen_addr,
        };

        Ok(Self {
            project_name: lookup(PROJECT_NAME).unwrap_or(defaults.project_name),
            api_v1_str,
            backend_cors_origins,
            environment: lookup(ENVIRONMENT).unwrap_or(defaults.environment),
            debug,
            listen_addr,
        })
    }

    /// Path of the generated OpenAPI document.
    pub fn openapi_url(&self) -> String {
        format!("{}/openapi.json", self.api_v1_str.trim_end_matches('/'))
    }
}

/// Environment first, then env file entries.
fn layered<'a, E>(
    env: E,
    file_vars: &'a HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a
where
    E: Fn(&str) -> Option<String> + 'a,
{
    move |key| env(key).or_else(|| file_vars.get(key).cloned())
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let env_file_err = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => return Err(env_file_err(e)),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(env_file_err)?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, raw, "expected a boolean")),
    }
}

fn parse_prefix(raw: &str) -> Result<String, ConfigError> {
    let prefix = raw.trim();
    if !prefix.is_empty() && !prefix.starts_with('/') {
        return Err(ConfigError::invalid(
            API_V1_STR,
            raw,
            "path prefix must start with '/'",
        ));
    }
    // The prefix becomes part of a static route; route syntax would make it a pattern.
    if let Some(c) = prefix
        .chars()
        .find(|c| matches!(c, '{' | '}' | '*' | '?' | '#') || c.is_whitespace())
    {
        return Err(ConfigError::invalid(
            API_V1_STR,
            raw,
            format!("path prefix must not contain {c:?}"),
        ));
    }
    Ok(prefix.to_string())
}

/// Accepts a JSON array of strings or a comma-separated list.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = raw.trim();
    let entries: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|e| {
            ConfigError::invalid(
                BACKEND_CORS_ORIGINS,
                raw,
                format!("expected a JSON array of strings: {e}"),
            )
        })?
    } else {
        trimmed.split(',').map(String::from).collect()
    };
    let origins: Vec<String> = entries
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if let Some(bad) = origins.iter().find(|o| HeaderValue::from_str(o).is_err()) {
        return Err(ConfigError::invalid(
            BACKEND_CORS_ORIGINS,
            raw,
            format!("origin {bad:?} is not a valid header value"),
        ));
    }
    Ok(origins)
}
