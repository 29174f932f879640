//! Ledger Store
//!
//! Owns the application state and the storage it is persisted to.
//! Every mutation writes the full snapshot before returning.

use chrono::{NaiveDate, Utc};
use log::{debug, error, info, warn};

use crate::catalog::{self, CatalogEntry, ImportMode, ImportSummary};
use crate::config::LedgerConfig;
use crate::domain::{AppState, Field, Partition, WorkItem};
use crate::error::LedgerResult;
use crate::report;
use crate::repository::KeyValueStore;
use crate::snapshot::{self, Snapshot};
use crate::view::{self, LedgerView, ViewFilter};

pub struct Ledger<S> {
    state: AppState,
    store: S,
    config: LedgerConfig,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load the stored snapshot, or start empty.
    ///
    /// An unreadable snapshot is logged and ignored; it will be overwritten
    /// by the next mutation.
    pub fn open(store: S, config: LedgerConfig) -> Self {
        let state = match load_state(&store, &config.storage_key) {
            Ok(Some(state)) => {
                info!("Loaded {} rows from '{}'", state.len(), config.storage_key);
                state
            }
            Ok(None) => AppState::new(),
            Err(e) => {
                error!("Failed to load snapshot '{}': {}", config.storage_key, e);
                AppState::new()
            }
        };
        Self { state, store, config }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================
    // Queries
    // ========================

    pub fn all_rows(&self) -> impl Iterator<Item = &WorkItem> {
        self.state.all_rows()
    }

    pub fn done_rows(&self) -> impl Iterator<Item = &WorkItem> {
        self.state.done_rows()
    }

    pub fn find(&self, id: u64) -> Option<&WorkItem> {
        self.state.find(id)
    }

    pub fn next_id(&self) -> LedgerResult<u64> {
        self.state.next_id()
    }

    pub fn render(&self, filter: &ViewFilter) -> LedgerView {
        view::render(&self.state, filter, &self.config.default_category)
    }

    // ========================
    // Persistence
    // ========================

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(&self.state, Utc::now())
    }

    /// Overwrite the stored snapshot with the current state
    pub fn save(&mut self) -> LedgerResult<()> {
        let json = self.snapshot().to_json()?;
        self.store.set(&self.config.storage_key, &json).map_err(|e| {
            warn!("Failed to persist snapshot: {}", e);
            e
        })
    }

    /// Backup file name and pretty JSON content
    pub fn backup(&self, today: NaiveDate) -> LedgerResult<(String, String)> {
        let name = snapshot::backup_file_name(&self.config.backup_prefix, today);
        Ok((name, self.snapshot().to_pretty_json()?))
    }

    /// CSV estimate of completed items
    pub fn report(&self) -> LedgerResult<String> {
        report::csv_report(self.state.done_rows())
    }

    // ========================
    // Mutations
    // ========================

    /// Prepend a placeholder row to `partition` and return its id
    pub fn add(&mut self, partition: Partition) -> LedgerResult<u64> {
        let id = self.state.next_id()?;
        let placeholder = &self.config.placeholder;
        let item = WorkItem::new(id, &placeholder.work, &placeholder.category, &placeholder.unit, partition);
        self.state.rows_mut(partition).insert(0, item);
        debug!("Added row {} to {}", id, partition.as_str());
        self.save()?;
        Ok(id)
    }

    /// Remove a row. Returns `false` (and writes nothing) if it is not in `partition`.
    pub fn delete(&mut self, id: u64, partition: Partition) -> LedgerResult<bool> {
        let rows = self.state.rows_mut(partition);
        let Some(index) = rows.iter().position(|row| row.id == id) else {
            return Ok(false);
        };
        rows.remove(index);
        debug!("Deleted row {} from {}", id, partition.as_str());
        self.save()?;
        Ok(true)
    }

    /// Edit one field of the row with `id` in either partition
    pub fn update(&mut self, id: u64, field: Field, value: &str) -> LedgerResult<bool> {
        let Some(row) = self.state.find_mut(id) else {
            return Ok(false);
        };
        row.apply(field, value);
        debug!("Updated row {} {:?}", id, field);
        self.save()?;
        Ok(true)
    }

    /// Flip the completion flag of the row with `id` in `partition`
    pub fn toggle_done(&mut self, id: u64, partition: Partition) -> LedgerResult<bool> {
        let Some(row) = self.state.rows_mut(partition).iter_mut().find(|row| row.id == id) else {
            return Ok(false);
        };
        row.done = !row.done;
        debug!("Row {} done={}", id, row.done);
        self.save()?;
        Ok(true)
    }

    /// Flip one group's collapsed flag and return the new value
    pub fn toggle_group(&mut self, category: &str) -> LedgerResult<bool> {
        let collapsed = !self.state.is_collapsed(category);
        self.state.collapsed_groups.insert(category.to_string(), collapsed);
        self.save()?;
        Ok(collapsed)
    }

    /// Flip dark mode and return the new value
    pub fn toggle_theme(&mut self) -> LedgerResult<bool> {
        self.state.is_dark_mode = !self.state.is_dark_mode;
        self.save()?;
        Ok(self.state.is_dark_mode)
    }

    /// Merge catalog entries as fresh pending rows.
    ///
    /// Ids continue from the current maximum in both modes.
    pub fn import_catalog(&mut self, entries: &[CatalogEntry], mode: ImportMode) -> LedgerResult<ImportSummary> {
        let first_id = self.state.next_id()?;
        let (repair, build) = catalog::prepare(entries, first_id)?;
        let summary = ImportSummary {
            repair: repair.len(),
            build: build.len(),
            first_id,
        };

        match mode {
            ImportMode::Append => {
                self.state.repair_rows.extend(repair);
                self.state.build_rows.extend(build);
            }
            ImportMode::Replace => {
                self.state.repair_rows = repair;
                self.state.build_rows = build;
            }
        }

        info!("Imported {} catalog rows ({:?}) starting at id {}", summary.total(), mode, first_id);
        self.save()?;
        Ok(summary)
    }

    /// Replace rows and group flags with a backup.
    ///
    /// The theme is only taken over when the backup records one. Each row's
    /// `source` is reset to the partition it was restored into.
    pub fn restore(&mut self, backup: Snapshot) {
        self.state.repair_rows = backup.repair_rows;
        self.state.build_rows = backup.build_rows;
        self.state.align_sources();
        self.state.collapsed_groups = backup.collapsed_groups;
        if let Some(dark) = backup.is_dark_mode {
            self.state.is_dark_mode = dark;
        }
    }

    /// Parse a backup file and restore it.
    ///
    /// On a parse error the current state is left untouched.
    pub fn restore_from_json(&mut self, json: &str) -> LedgerResult<()> {
        let backup = Snapshot::parse_backup(json).map_err(|e| {
            warn!("Rejected backup: {}", e);
            e
        })?;
        self.restore(backup);
        info!("Restored {} rows from backup", self.state.len());
        self.save()
    }
}

fn load_state<S: KeyValueStore>(store: &S, key: &str) -> LedgerResult<Option<AppState>> {
    let Some(json) = store.get(key)? else {
        return Ok(None);
    };
    Ok(Snapshot::parse(&json)?.map(Snapshot::into_state))
}
