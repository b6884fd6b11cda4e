//! The reset-sequence command handler
//!
//! Runs, in order:
//!
//! 1. Resolve the app/model pair to a table. Failure aborts before any write.
//! 2. If ids were given, delete the matching rows. Zero matches is reported
//!    but is not an error.
//! 3. Unless `delete_only` is set, move the primary-key sequence to
//!    `COALESCE(MAX(pk), 1) + 1`. A primary key that owns no sequence is
//!    reported and skipped.
//!
//! Steps 2 and 3 are separate statements with no shared transaction. A reset
//! failure after a successful delete leaves the delete in place.

use serde::Serialize;

use crate::error::CommandError;
use crate::registry::{BaseSchemaRegistry, TableDescriptor};
use crate::store::BaseTableStore;

/// Message reported when neither a delete nor a reset ran
pub const NO_ACTION_MESSAGE: &str = "No action performed.";

/// Inputs to a single run
#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    pub app_label: String,
    pub model_name: String,
    /// Primary keys to delete; empty means no deletion
    pub delete_ids: Vec<i64>,
    /// Skip the sequence reset
    pub delete_only: bool,
}

/// An effect the command performed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Deleted { count: u64, ids: Vec<i64> },
    NoMatchingRows { ids: Vec<i64> },
    SequenceReset { next_value: i64 },
    NoSequence { column: String },
}

impl Action {
    /// Human-readable status line for this action
    pub fn message(&self, table: &str) -> String {
        match self {
            Action::Deleted { count, ids } => {
                format!("Deleted {count} row(s) with id(s) {ids:?} from {table}.")
            }
            Action::NoMatchingRows { ids } => {
                format!("No row(s) with id(s) {ids:?} found in {table}.")
            }
            Action::SequenceReset { .. } => {
                format!("Sequence reset for {table} successfully.")
            }
            Action::NoSequence { column } => {
                format!("No sequence owned by {table}.{column}; nothing to reset.")
            }
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub table: TableDescriptor,
    pub actions: Vec<Action>,
}

impl CommandReport {
    /// True when neither a delete nor a reset was attempted
    pub fn is_noop(&self) -> bool {
        self.actions.is_empty()
    }

    /// Value the next insert will receive, if the sequence was reset
    pub fn next_value(&self) -> Option<i64> {
        self.actions.iter().find_map(|a| match a {
            Action::SequenceReset { next_value } => Some(*next_value),
            _ => None,
        })
    }

    /// Rows removed by this run
    pub fn deleted_count(&self) -> u64 {
        self.actions
            .iter()
            .map(|a| match a {
                Action::Deleted { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }

    /// Status lines in the order the actions happened
    pub fn messages(&self) -> Vec<String> {
        if self.is_noop() {
            return vec![NO_ACTION_MESSAGE.to_string()];
        }
        self.actions
            .iter()
            .map(|a| a.message(&self.table.db_table))
            .collect()
    }
}

/// Execute the command against an explicit registry and store
pub async fn run<R, S>(
    registry: &R,
    store: &S,
    options: &ResetOptions,
) -> Result<CommandReport, CommandError>
where
    R: BaseSchemaRegistry + ?Sized,
    S: BaseTableStore + ?Sized,
{
    let table = registry
        .lookup(&options.app_label, &options.model_name)
        .await
        .map_err(|source| CommandError::Lookup {
            app_label: options.app_label.clone(),
            model_name: options.model_name.clone(),
            source,
        })?;

    tracing::debug!(
        app_label = %table.app_label,
        model_name = %table.model_name,
        table = %table.db_table,
        pk = %table.pk_column,
        "Resolved model"
    );

    let mut actions = Vec::new();

    if !options.delete_ids.is_empty() {
        let ids = options.delete_ids.clone();
        let count = store.delete_rows(&table, &ids).await?;
        tracing::info!(table = %table.db_table, requested = ids.len(), count, "Deleted rows");

        if count > 0 {
            actions.push(Action::Deleted { count, ids });
        } else {
            actions.push(Action::NoMatchingRows { ids });
        }
    }

    if !options.delete_only {
        match store.reset_sequence(&table).await? {
            Some(next_value) => {
                tracing::info!(table = %table.db_table, next_value, "Sequence reset");
                actions.push(Action::SequenceReset { next_value });
            }
            None => {
                tracing::warn!(
                    table = %table.db_table,
                    column = %table.pk_column,
                    "Primary key owns no sequence"
                );
                actions.push(Action::NoSequence {
                    column: table.pk_column.clone(),
                });
            }
        }
    }

    Ok(CommandReport { table, actions })
}
