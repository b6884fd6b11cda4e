//! TOML model manifest
//!
//! ```toml
//! [[models]]
//! app_label = "funds"
//! model_name = "FundCategoryType"
//!
//! [[models]]
//! app_label = "legacy"
//! model_name = "Account"
//! db_table = "accounts"
//! pk_column = "account_id"
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::{conventional_table_name, BaseSchemaRegistry, TableDescriptor, DEFAULT_PK_COLUMN};
use crate::error::{LookupError, ManifestError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelEntry {
    app_label: String,
    model_name: String,
    db_table: Option<String>,
    pk_column: Option<String>,
}

impl ModelEntry {
    fn into_descriptor(self) -> Result<TableDescriptor, ManifestError> {
        if self.app_label.trim().is_empty() {
            return Err(ManifestError::Invalid("app_label must not be empty".into()));
        }
        if self.model_name.trim().is_empty() {
            return Err(ManifestError::Invalid(format!(
                "model_name must not be empty (app '{}')",
                self.app_label
            )));
        }

        let db_table = match self.db_table {
            Some(t) if t.trim().is_empty() => {
                return Err(ManifestError::Invalid(format!(
                    "db_table must not be empty for {}.{}",
                    self.app_label, self.model_name
                )));
            }
            Some(t) => t,
            None => conventional_table_name(&self.app_label, &self.model_name),
        };

        let pk_column = match self.pk_column {
            Some(c) if c.trim().is_empty() => {
                return Err(ManifestError::Invalid(format!(
                    "pk_column must not be empty for {}.{}",
                    self.app_label, self.model_name
                )));
            }
            Some(c) => c,
            None => DEFAULT_PK_COLUMN.to_string(),
        };

        Ok(TableDescriptor {
            app_label: self.app_label,
            model_name: self.model_name,
            db_table,
            pk_column,
        })
    }
}

/// In-memory registry keyed by app label, then lowercased model name
#[derive(Debug, Default)]
pub struct ModelRegistry {
    apps: HashMap<String, HashMap<String, TableDescriptor>>,
}

impl ModelRegistry {
    /// Build a registry from already-resolved descriptors
    pub fn from_entries(
        entries: impl IntoIterator<Item = TableDescriptor>,
    ) -> Result<Self, ManifestError> {
        let mut apps: HashMap<String, HashMap<String, TableDescriptor>> = HashMap::new();

        for table in entries {
            let models = apps.entry(table.app_label.clone()).or_default();
            let key = table.model_name.to_lowercase();
            if models.contains_key(&key) {
                return Err(ManifestError::Duplicate {
                    app_label: table.app_label,
                    model_name: table.model_name,
                });
            }
            models.insert(key, table);
        }

        Ok(Self { apps })
    }

    /// Parse a manifest from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = toml::from_str(content)?;
        let entries = manifest
            .models
            .into_iter()
            .map(ModelEntry::into_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Load a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            models = registry.len(),
            "Loaded model manifest"
        );
        Ok(registry)
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.apps.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, app_label: &str, model_name: &str) -> Result<&TableDescriptor, LookupError> {
        let models = self
            .apps
            .get(app_label)
            .ok_or_else(|| LookupError::AppNotFound {
                app_label: app_label.to_string(),
            })?;

        models
            .get(&model_name.to_lowercase())
            .ok_or_else(|| LookupError::ModelNotFound {
                app_label: app_label.to_string(),
                model_name: model_name.to_string(),
            })
    }
}

#[async_trait]
impl BaseSchemaRegistry for ModelRegistry {
    async fn lookup(
        &self,
        app_label: &str,
        model_name: &str,
    ) -> Result<TableDescriptor, LookupError> {
        self.get(app_label, model_name).cloned()
    }
}
