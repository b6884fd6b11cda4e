// Primary-key sequence maintenance - Core
//
// Resolves an app/model pair to its table, optionally deletes rows by id,
// and resets the table's serial sequence past the current maximum id.

pub mod command;
pub mod config;
pub mod error;
pub mod output;
pub mod registry;
pub mod sql;
pub mod store;
pub mod test_dependencies;

pub use command::{run, Action, CommandReport, ResetOptions};
pub use config::*;
pub use error::{CommandError, LookupError, ManifestError};
pub use registry::{BaseSchemaRegistry, CatalogRegistry, ModelRegistry, TableDescriptor};
pub use store::{BaseTableStore, PgTableStore};
