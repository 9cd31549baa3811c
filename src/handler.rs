use lambda_runtime::Error;
use serde::Deserialize;
use std::env;
use tracing::info;

// Invocation payload. `name` is part of the wire contract but the greeting
// does not depend on it; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub name: Option<String>,
}

// Per-function configuration, built once at cold start and injected into the
// handler instead of read as ambient global state.
#[derive(Debug, Clone, Default)]
pub struct HandlerConfig {
    label: String,
}

impl HandlerConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    // A missing APP_ENV means an empty label, never an error.
    pub fn from_env() -> Self {
        Self::new(env::var("APP_ENV").unwrap_or_default())
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// Single-puzzle handler.
// TODO: replace the greeting with actual puzzle generation once the generator lands.
pub async fn generate_sudoku(
    config: &HandlerConfig,
    _request: GenerateRequest,
) -> Result<String, Error> {
    info!("handling generate sudoku invocation");
    Ok(format!(
        "{}: Welcome to Generate Sudoku Handler!",
        config.label
    ))
}

// Batch handler. Same contract as generate_sudoku until batch generation exists.
pub async fn generate_batch_sudoku(
    config: &HandlerConfig,
    _request: GenerateRequest,
) -> Result<String, Error> {
    info!("handling generate batch sudoku invocation");
    Ok(format!(
        "{}: Welcome to Generate Batch Sudoku Handler!",
        config.label
    ))
}
