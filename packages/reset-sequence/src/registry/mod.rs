//! Schema registry: maps an (app label, model name) pair to a physical table
//!
//! # Implementations
//!
//! - [`ModelRegistry`] - in-memory, built from a TOML model manifest
//! - [`CatalogRegistry`] - derives the conventional table name and checks it
//!   exists in the live database catalog
//!
//! Model names are matched case-insensitively; app labels are matched exactly.

mod catalog;
mod manifest;

pub use catalog::CatalogRegistry;
pub use manifest::ModelRegistry;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::LookupError;

/// Primary-key column assumed when none is registered
pub const DEFAULT_PK_COLUMN: &str = "id";

/// A resolved table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    pub app_label: String,
    /// Model name as registered (original casing)
    pub model_name: String,
    /// Physical table name
    pub db_table: String,
    pub pk_column: String,
}

impl TableDescriptor {
    pub fn new(
        app_label: impl Into<String>,
        model_name: impl Into<String>,
        db_table: impl Into<String>,
        pk_column: impl Into<String>,
    ) -> Self {
        Self {
            app_label: app_label.into(),
            model_name: model_name.into(),
            db_table: db_table.into(),
            pk_column: pk_column.into(),
        }
    }

    /// Descriptor using the conventional `{app_label}_{model_name lowercased}`
    /// table name and an `id` primary key
    pub fn conventional(app_label: &str, model_name: &str) -> Self {
        Self::new(
            app_label,
            model_name,
            conventional_table_name(app_label, model_name),
            DEFAULT_PK_COLUMN,
        )
    }
}

/// Table name an ORM assigns a model when none is set explicitly
pub fn conventional_table_name(app_label: &str, model_name: &str) -> String {
    format!("{}_{}", app_label, model_name.to_lowercase())
}

#[async_trait]
pub trait BaseSchemaRegistry: Send + Sync {
    /// Resolve an app/model pair to its table
    async fn lookup(&self, app_label: &str, model_name: &str)
        -> Result<TableDescriptor, LookupError>;
}
