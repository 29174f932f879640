//! Repository Integration Tests
//!
//! Key-value backends, and the ledger persisting through them.

#[cfg(test)]
mod tests {
    use crate::config::LedgerConfig;
    use crate::domain::{Field, Partition};
    use crate::ledger::Ledger;
    use crate::repository::{KeyValueStore, MemoryStore};

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_custom_storage_key() {
        let config = LedgerConfig {
            storage_key: "other_key".to_string(),
            ..LedgerConfig::default()
        };
        let mut ledger = Ledger::open(MemoryStore::new(), config);
        ledger.add(Partition::Repair).unwrap();

        assert!(ledger.store().get("other_key").unwrap().is_some());
        assert!(ledger.store().get("bud_app_v5").unwrap().is_none());
    }

    #[cfg(feature = "sqlite")]
    mod sqlite {
        use super::*;
        use crate::repository::SqliteStore;

        #[test]
        fn test_set_get_remove() {
            let mut store = SqliteStore::open_in_memory().expect("Failed to open test DB");
            assert_eq!(store.get("k").unwrap(), None);
            assert_eq!(store.updated_at("k").unwrap(), None);

            store.set("k", "one").unwrap();
            store.set("k", "two").unwrap();
            assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
            assert!(store.updated_at("k").unwrap().is_some());

            store.remove("k").unwrap();
            assert_eq!(store.get("k").unwrap(), None);
        }

        #[test]
        fn test_ledger_survives_reopen() {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("data").join("ledger.db");

            {
                let store = SqliteStore::open(&path).expect("Failed to open DB");
                let mut ledger = Ledger::open(store, LedgerConfig::default());
                let id = ledger.add(Partition::Build).unwrap();
                ledger.update(id, Field::Price, "1300").unwrap();
                ledger.update(id, Field::Qty, "2.5").unwrap();
                ledger.toggle_group("Стіни").unwrap();
            }

            let store = SqliteStore::open(&path).expect("Failed to reopen DB");
            let ledger = Ledger::open(store, LedgerConfig::default());
            let row = ledger.find(1).expect("row persisted");
            assert_eq!(row.source, Partition::Build);
            assert_eq!(row.line_total(), 3250.0);
            assert!(ledger.state().is_collapsed("Стіни"));
        }
    }
}
