//! Snapshot Codec
//!
//! The JSON document the whole state is persisted, backed up and restored as.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{AppState, WorkItem};
use crate::error::{LedgerError, LedgerResult};

/// Wire shape of the persisted state
///
/// Every field tolerates being absent or `null`. A row that cannot be read
/// (say, a fractional or negative id) is dropped on its own; the rest of
/// the document still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "readable_rows")]
    pub repair_rows: Vec<WorkItem>,
    #[serde(default, deserialize_with = "readable_rows")]
    pub build_rows: Vec<WorkItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collapsed_groups: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dark_mode: Option<bool>,
    /// RFC 3339 UTC timestamp of the write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn readable_rows<'de, D>(deserializer: D) -> Result<Vec<WorkItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = null_as_default(deserializer)?;
    let total = raw.len();
    let rows: Vec<WorkItem> = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<WorkItem>(value) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("Skipping unreadable row: {}", e);
                None
            }
        })
        .collect();
    if rows.len() < total {
        warn!("Kept {} of {} rows", rows.len(), total);
    }
    Ok(rows)
}

impl Snapshot {
    pub fn from_state(state: &AppState, saved_at: DateTime<Utc>) -> Self {
        Self {
            repair_rows: state.repair_rows.clone(),
            build_rows: state.build_rows.clone(),
            collapsed_groups: state.collapsed_groups.clone(),
            is_dark_mode: Some(state.is_dark_mode),
            last_saved: Some(saved_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    pub fn into_state(self) -> AppState {
        let mut state = AppState {
            repair_rows: self.repair_rows,
            build_rows: self.build_rows,
            collapsed_groups: self.collapsed_groups,
            is_dark_mode: self.is_dark_mode.unwrap_or(false),
        };
        state.align_sources();
        state
    }

    /// Compact form, used for the persisted copy
    pub fn to_json(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented form, used for backup files
    pub fn to_pretty_json(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a persisted snapshot. A literal `null` yields `None`.
    pub fn parse(json: &str) -> LedgerResult<Option<Self>> {
        Ok(serde_json::from_str::<Option<Self>>(json)?)
    }

    /// Parse a user-supplied backup file.
    ///
    /// Valid JSON without a non-null `repairRows` is rejected as not being a backup.
    pub fn parse_backup(json: &str) -> LedgerResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        match value.get("repairRows") {
            Some(rows) if !rows.is_null() => Ok(serde_json::from_value(value)?),
            _ => Err(LedgerError::InvalidBackup),
        }
    }
}

/// `bud_backup_2026-10-18.json`
pub fn backup_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}{}.json", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Partition;
    use chrono::TimeZone;

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        let mut tiles = WorkItem::new(1, "Укладання плитки", "Підлога", "м2", Partition::Repair);
        tiles.price = 450.0;
        tiles.qty = 12.0;
        state.repair_rows.push(tiles);
        state.build_rows.push(WorkItem::new(2, "Кладка цегли", "Стіни", "м3", Partition::Build));
        state.collapsed_groups.insert("Стіни".to_string(), true);
        state.is_dark_mode = true;
        state
    }

    #[test]
    fn test_wire_field_names() {
        let saved_at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let json = Snapshot::from_state(&sample_state(), saved_at).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["repairRows"].is_array());
        assert!(value["buildRows"].is_array());
        assert_eq!(value["collapsedGroups"]["Стіни"], true);
        assert_eq!(value["isDarkMode"], true);
        assert_eq!(value["lastSaved"], "2026-10-18T09:30:00.000Z");
    }

    #[test]
    fn test_state_round_trip() {
        let state = sample_state();
        let json = Snapshot::from_state(&state, Utc::now()).to_pretty_json().unwrap();
        let restored = Snapshot::parse_backup(&json).unwrap().into_state();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_parse_tolerates_missing_and_null_fields() {
        let snapshot = Snapshot::parse(r#"{"repairRows":null,"collapsedGroups":{}}"#).unwrap().unwrap();
        let state = snapshot.into_state();
        assert!(state.is_empty());
        assert!(!state.is_dark_mode);

        assert_eq!(Snapshot::parse("null").unwrap(), None);
    }

    #[test]
    fn test_unreadable_rows_are_dropped_alone() {
        let snapshot = Snapshot::parse(
            r#"{"repairRows":[{"id":2.5,"work":"half"},{"id":5000000000,"work":"big"},"junk",{"id":2,"work":"keep me"}],
                "buildRows":[{"id":-1},{"id":7,"work":"Кладка"}]}"#,
        )
        .unwrap()
        .unwrap();

        let repair: Vec<_> = snapshot.repair_rows.iter().map(|r| (r.id, r.work.as_str())).collect();
        assert_eq!(repair, vec![(5_000_000_000, "big"), (2, "keep me")]);
        assert_eq!(snapshot.build_rows.len(), 1);
        assert_eq!(snapshot.build_rows[0].id, 7);
    }

    #[test]
    fn test_into_state_aligns_sources() {
        let snapshot = Snapshot::parse(r#"{"repairRows":[{"id":1,"source":"build"}],"buildRows":[{"id":2}]}"#)
            .unwrap()
            .unwrap();
        let state = snapshot.into_state();
        assert_eq!(state.repair_rows[0].source, Partition::Repair);
        assert_eq!(state.build_rows[0].source, Partition::Build);
    }

    #[test]
    fn test_parse_backup_requires_repair_rows() {
        assert!(matches!(
            Snapshot::parse_backup(r#"{"buildRows":[]}"#),
            Err(LedgerError::InvalidBackup)
        ));
        assert!(matches!(
            Snapshot::parse_backup(r#"{"repairRows":null}"#),
            Err(LedgerError::InvalidBackup)
        ));
        assert!(matches!(Snapshot::parse_backup("{not json"), Err(LedgerError::Json(_))));

        let backup = Snapshot::parse_backup(r#"{"repairRows":[]}"#).unwrap();
        assert!(backup.build_rows.is_empty());
        assert_eq!(backup.is_dark_mode, None);
    }

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(backup_file_name("bud_backup_", date), "bud_backup_2026-10-18.json");
    }
}
