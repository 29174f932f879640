//! Ledger Configuration
//!
//! Storage key, labels and file names. Every field has a default, so a host
//! may override only what it needs from JSON.

use serde::{Deserialize, Serialize};

/// Values given to a freshly added row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholder {
    pub work: String,
    pub category: String,
    pub unit: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            work: "Нова робота".to_string(),
            category: "Різне".to_string(),
            unit: "шт".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Key the snapshot is stored under
    pub storage_key: String,
    /// Group label for rows with an empty category
    pub default_category: String,
    pub placeholder: Placeholder,
    /// Backup file name prefix, followed by the ISO date
    pub backup_prefix: String,
    pub report_file_name: String,
    /// Currency suffix for formatted sums
    pub currency: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage_key: "bud_app_v5".to_string(),
            default_category: "Інше".to_string(),
            placeholder: Placeholder::default(),
            backup_prefix: "bud_backup_".to_string(),
            report_file_name: "koshtorys.csv".to_string(),
            currency: "₴".to_string(),
        }
    }
}

impl LedgerConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `1234.5` -> `"1234.50 ₴"`
    pub fn format_money(&self, amount: f64) -> String {
        format!("{:.2} {}", amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = LedgerConfig::from_json(r#"{"storage_key":"test_key","currency":"UAH"}"#).unwrap();
        assert_eq!(config.storage_key, "test_key");
        assert_eq!(config.currency, "UAH");
        assert_eq!(config.default_category, "Інше");
        assert_eq!(config.placeholder, Placeholder::default());
    }

    #[test]
    fn test_format_money() {
        let config = LedgerConfig::default();
        assert_eq!(config.format_money(200.0), "200.00 ₴");
        assert_eq!(config.format_money(1234.5), "1234.50 ₴");
    }
}
