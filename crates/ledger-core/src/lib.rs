//! Bud Ledger Core
//!
//! Layered architecture:
//! - domain: work items and the persisted state
//! - repository: key-value storage the snapshot is written to
//! - ledger: the store (mutate → persist)
//! - view: pure projection of the state into tables and totals
//! - snapshot / report / catalog: import and export formats

mod error;

pub mod catalog;
pub mod config;
pub mod domain;
pub mod ledger;
pub mod report;
pub mod repository;
pub mod snapshot;
pub mod view;

pub use catalog::{CatalogEntry, ImportMode, ImportSummary};
pub use config::LedgerConfig;
pub use domain::{AppState, Field, Partition, WorkItem};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use repository::{KeyValueStore, MemoryStore};
#[cfg(feature = "sqlite")]
pub use repository::SqliteStore;
pub use snapshot::Snapshot;
pub use view::{GroupView, LedgerView, Totals, ViewFilter};
