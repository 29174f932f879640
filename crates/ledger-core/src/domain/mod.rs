//! Domain Layer
//!
//! Work items, partitions and the persisted application state.
//! This layer has NO storage or UI dependencies (except serde for serialization).

mod work_item;
mod state;

pub use work_item::{parse_number, Field, Partition, WorkItem};
pub use state::AppState;
