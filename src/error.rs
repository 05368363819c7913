use std::fmt;

use thiserror::Error;

/// A single error entry from a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQlError {
    pub message: String,
    /// Error code from the `extensions` object, if the server sent one
    pub code: Option<String>,
    /// Dotted response path (e.g. `draftOrderCreate.order`)
    pub path: Option<String>,
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (at {})", path)?;
        }
        Ok(())
    }
}

fn join_errors(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum DashnavError {
    #[error("invalid quick search mode '{0}'")]
    InvalidMode(String),

    #[error("invalid order number '{0}'")]
    InvalidOrderNumber(String),

    #[error("no action numbered {0}")]
    ActionNotFound(usize),

    #[error("quick search is closed; use :open first")]
    PaletteClosed,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("GraphQL errors: {}", join_errors(.errors))]
    GraphQlErrors {
        errors: Vec<GraphQlError>,
        partial_data: bool,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DashnavError>;
