// TestDependencies - mock implementations for testing
//
// Provides an in-memory table store that can stand in for PgTableStore.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use crate::registry::TableDescriptor;
use crate::store::BaseTableStore;

/// A call captured by [`MockTableStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    DeleteRows { table: String, ids: Vec<i64> },
    ResetSequence { table: String },
}

/// In-memory store holding one table's primary keys.
///
/// Deletion removes matching keys; a reset reports `COALESCE(MAX, 1) + 1`
/// like the real statement does.
pub struct MockTableStore {
    rows: Arc<Mutex<BTreeSet<i64>>>,
    has_sequence: bool,
    fail_with: Option<String>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl MockTableStore {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(BTreeSet::new())),
            has_sequence: true,
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed the table with existing primary keys
    pub fn with_rows(self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.rows.lock().unwrap().extend(ids);
        self
    }

    /// Simulate a primary key that owns no sequence
    pub fn without_sequence(mut self) -> Self {
        self.has_sequence = false;
        self
    }

    /// Make every call fail with a database error
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn rows(&self) -> Vec<i64> {
        self.rows.lock().unwrap().iter().copied().collect()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), sqlx::Error> {
        match &self.fail_with {
            Some(message) => Err(sqlx::Error::Protocol(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockTableStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseTableStore for MockTableStore {
    async fn delete_rows(&self, table: &TableDescriptor, ids: &[i64]) -> Result<u64, sqlx::Error> {
        self.calls.lock().unwrap().push(StoreCall::DeleteRows {
            table: table.db_table.clone(),
            ids: ids.to_vec(),
        });
        self.check_failure()?;

        let mut rows = self.rows.lock().unwrap();
        let targets: BTreeSet<i64> = ids.iter().copied().collect();
        let deleted = targets.iter().filter(|id| rows.remove(*id)).count();
        Ok(deleted as u64)
    }

    async fn reset_sequence(&self, table: &TableDescriptor) -> Result<Option<i64>, sqlx::Error> {
        self.calls.lock().unwrap().push(StoreCall::ResetSequence {
            table: table.db_table.clone(),
        });
        self.check_failure()?;

        if !self.has_sequence {
            return Ok(None);
        }

        let max = self.rows.lock().unwrap().iter().next_back().copied();
        Ok(Some(max.unwrap_or(1) + 1))
    }
}
