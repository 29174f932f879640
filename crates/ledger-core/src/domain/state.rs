//! Application State
//!
//! Everything that is persisted: both partitions, the group collapse map
//! and the theme flag.

use std::collections::BTreeMap;

use super::work_item::{Partition, WorkItem};
use crate::error::{LedgerError, LedgerResult};

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Repair partition, in display order
    pub repair_rows: Vec<WorkItem>,
    /// Build partition, in display order
    pub build_rows: Vec<WorkItem>,
    /// Category label -> collapsed
    pub collapsed_groups: BTreeMap<String, bool>,
    /// Dark theme enabled
    pub is_dark_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, partition: Partition) -> &[WorkItem] {
        match partition {
            Partition::Repair => &self.repair_rows,
            Partition::Build => &self.build_rows,
        }
    }

    pub fn rows_mut(&mut self, partition: Partition) -> &mut Vec<WorkItem> {
        match partition {
            Partition::Repair => &mut self.repair_rows,
            Partition::Build => &mut self.build_rows,
        }
    }

    /// Repair rows followed by build rows
    pub fn all_rows(&self) -> impl Iterator<Item = &WorkItem> {
        self.repair_rows.iter().chain(self.build_rows.iter())
    }

    /// Completed rows across both partitions, repair first
    pub fn done_rows(&self) -> impl Iterator<Item = &WorkItem> {
        self.all_rows().filter(|row| row.done)
    }

    pub fn len(&self) -> usize {
        self.repair_rows.len() + self.build_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a row by id in either partition
    pub fn find(&self, id: u64) -> Option<&WorkItem> {
        self.all_rows().find(|row| row.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut WorkItem> {
        self.repair_rows
            .iter_mut()
            .chain(self.build_rows.iter_mut())
            .find(|row| row.id == id)
    }

    /// Next identifier: max existing id + 1, or 1 on an empty state
    pub fn next_id(&self) -> LedgerResult<u64> {
        let max = self.all_rows().map(|row| row.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(LedgerError::IdsExhausted)
    }

    /// Make every row's `source` name the partition that holds it
    pub fn align_sources(&mut self) {
        for row in self.repair_rows.iter_mut() {
            row.source = Partition::Repair;
        }
        for row in self.build_rows.iter_mut() {
            row.source = Partition::Build;
        }
    }

    pub fn is_collapsed(&self, category: &str) -> bool {
        self.collapsed_groups.get(category).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, source: Partition) -> WorkItem {
        WorkItem::new(id, &format!("Work {}", id), "Різне", "шт", source)
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(AppState::new().next_id().unwrap(), 1);
    }

    #[test]
    fn test_next_id_spans_partitions() {
        let mut state = AppState::new();
        state.repair_rows.push(item(3, Partition::Repair));
        state.build_rows.push(item(9, Partition::Build));
        state.repair_rows.push(item(5, Partition::Repair));
        assert_eq!(state.next_id().unwrap(), 10);
    }

    #[test]
    fn test_next_id_past_u32_range() {
        let mut state = AppState::new();
        state.repair_rows.push(item(u32::MAX as u64, Partition::Repair));
        assert_eq!(state.next_id().unwrap(), 4_294_967_296);

        state.build_rows.push(item(u64::MAX, Partition::Build));
        assert!(matches!(state.next_id(), Err(LedgerError::IdsExhausted)));
    }

    #[test]
    fn test_align_sources_follows_partition() {
        let mut state = AppState::new();
        state.repair_rows.push(item(1, Partition::Build));
        state.build_rows.push(item(2, Partition::Repair));

        state.align_sources();
        assert_eq!(state.repair_rows[0].source, Partition::Repair);
        assert_eq!(state.build_rows[0].source, Partition::Build);
    }

    #[test]
    fn test_find_mut_searches_both_partitions() {
        let mut state = AppState::new();
        state.repair_rows.push(item(1, Partition::Repair));
        state.build_rows.push(item(2, Partition::Build));

        state.find_mut(2).unwrap().done = true;
        assert!(state.find(2).unwrap().done);
        assert!(state.find(42).is_none());
        assert_eq!(state.done_rows().count(), 1);
    }
}
