use async_trait::async_trait;
use sqlx::PgPool;

use super::{BaseSchemaRegistry, TableDescriptor};
use crate::error::LookupError;
use crate::sql::quote_ident;

/// Registry backed by the database catalog.
///
/// Used when no model manifest is configured. A model resolves to its
/// conventional table name (`{app_label}_{model_name lowercased}`, primary key
/// `id`) if and only if that relation exists.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    pool: PgPool,
}

impl CatalogRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseSchemaRegistry for CatalogRegistry {
    async fn lookup(
        &self,
        app_label: &str,
        model_name: &str,
    ) -> Result<TableDescriptor, LookupError> {
        let not_found = || LookupError::ModelNotFound {
            app_label: app_label.to_string(),
            model_name: model_name.to_string(),
        };

        if app_label.is_empty() || model_name.is_empty() {
            return Err(not_found());
        }

        let table = TableDescriptor::conventional(app_label, model_name);

        let relation: Option<String> = sqlx::query_scalar("SELECT to_regclass($1)::text")
            .bind(quote_ident(&table.db_table))
            .fetch_one(&self.pool)
            .await
            .map_err(LookupError::Catalog)?;

        match relation {
            Some(_) => Ok(table),
            None => Err(not_found()),
        }
    }
}
