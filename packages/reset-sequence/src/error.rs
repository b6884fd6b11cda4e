use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve an app/model pair to a table
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No installed app with label '{app_label}'.")]
    AppNotFound { app_label: String },

    #[error("App '{app_label}' doesn't have a '{model_name}' model.")]
    ModelNotFound {
        app_label: String,
        model_name: String,
    },

    #[error("Catalog lookup failed: {0}")]
    Catalog(#[source] sqlx::Error),
}

/// Errors that abort the reset-sequence command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Model {app_label}.{model_name} not found.")]
    Lookup {
        app_label: String,
        model_name: String,
        #[source]
        source: LookupError,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors raised while loading a model manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read model manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Model {app_label}.{model_name} is registered more than once")]
    Duplicate {
        app_label: String,
        model_name: String,
    },

    #[error("Invalid model entry: {0}")]
    Invalid(String),
}
