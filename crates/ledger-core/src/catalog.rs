//! Seed Catalog
//!
//! A static price list that can be bulk-imported into the ledger.

use serde::{Deserialize, Serialize};

use crate::domain::{Partition, WorkItem};
use crate::error::{LedgerError, LedgerResult};

const SEED_CATALOG: &str = include_str!("../data/catalog.json");

/// Candidate row from a catalog
///
/// Catalog ids, quantities and completion flags are not trusted, so they are
/// not read at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub work: String,
    #[serde(rename = "type", default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub source: Partition,
}

/// How catalog rows are merged into the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Keep existing rows, add catalog rows at the end of each partition
    Append,
    /// Drop both partitions and use the catalog rows only
    Replace,
}

/// Outcome of a catalog import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub repair: usize,
    pub build: usize,
    /// Id given to the first imported row
    pub first_id: u64,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.repair + self.build
    }
}

/// The catalog bundled with the crate
pub fn seed_catalog() -> LedgerResult<Vec<CatalogEntry>> {
    parse_catalog(SEED_CATALOG)
}

pub fn parse_catalog(json: &str) -> LedgerResult<Vec<CatalogEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Turn catalog entries into pending work items.
///
/// Ids are handed out sequentially from `start_id`: repair-bound entries
/// first, then build-bound ones, each in catalog order. Fails with
/// [`LedgerError::IdsExhausted`] rather than wrapping past `u64::MAX`.
pub fn prepare(entries: &[CatalogEntry], start_id: u64) -> LedgerResult<(Vec<WorkItem>, Vec<WorkItem>)> {
    let mut next_id = Some(start_id);
    let mut repair = Vec::new();
    let mut build = Vec::new();

    for partition in [Partition::Repair, Partition::Build] {
        for entry in entries.iter().filter(|entry| entry.source == partition) {
            let id = next_id.ok_or(LedgerError::IdsExhausted)?;
            next_id = id.checked_add(1);

            let mut item = WorkItem::new(id, &entry.work, &entry.category, &entry.unit, partition);
            item.price = entry.price;
            match partition {
                Partition::Repair => repair.push(item),
                Partition::Build => build.push(item),
            }
        }
    }

    Ok((repair, build))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_parses() {
        let entries = seed_catalog().unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().any(|e| e.source == Partition::Build));
        assert!(entries.iter().any(|e| e.source == Partition::Repair));
        assert!(entries.iter().all(|e| e.price >= 0.0));
    }

    #[test]
    fn test_untrusted_fields_ignored() {
        let entries = parse_catalog(
            r#"[{"id":99,"work":"Демонтаж","type":"Підготовка","unit":"м2","price":80,"qty":5,"done":true}]"#,
        )
        .unwrap();
        let (repair, build) = prepare(&entries, 1).unwrap();
        assert!(build.is_empty());
        assert_eq!(repair.len(), 1);
        assert_eq!(repair[0].id, 1);
        assert_eq!(repair[0].qty, 0.0);
        assert!(!repair[0].done);
        assert_eq!(repair[0].price, 80.0);
    }

    #[test]
    fn test_prepare_assigns_repair_then_build() {
        let entries = parse_catalog(
            r#"[
                {"work":"A","type":"X","source":"build"},
                {"work":"B","type":"X"},
                {"work":"C","type":"X","source":"build"},
                {"work":"D","type":"X","source":"repair"}
            ]"#,
        )
        .unwrap();
        let (repair, build) = prepare(&entries, 6).unwrap();

        let repair_ids: Vec<_> = repair.iter().map(|r| (r.work.as_str(), r.id)).collect();
        let build_ids: Vec<_> = build.iter().map(|r| (r.work.as_str(), r.id)).collect();
        assert_eq!(repair_ids, vec![("B", 6), ("D", 7)]);
        assert_eq!(build_ids, vec![("A", 8), ("C", 9)]);
        assert!(build.iter().all(|r| r.source == Partition::Build));
    }

    #[test]
    fn test_prepare_stops_at_id_limit() {
        let entries = parse_catalog(r#"[{"work":"A"},{"work":"B","source":"build"}]"#).unwrap();

        let (repair, build) = prepare(&entries, u64::MAX - 1).unwrap();
        assert_eq!(repair[0].id, u64::MAX - 1);
        assert_eq!(build[0].id, u64::MAX);

        assert!(matches!(prepare(&entries, u64::MAX), Err(LedgerError::IdsExhausted)));
    }
}
