//! Work Item Entity
//!
//! One ledger row: a unit of billable repair or construction work.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Top-level grouping of work items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Partition {
    /// Repair works
    #[default]
    Repair,
    /// Construction works
    Build,
}

impl Partition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Repair => "repair",
            Partition::Build => "build",
        }
    }

    /// Anything that is not exactly "build" belongs to repair.
    pub fn from_str(s: &str) -> Self {
        match s {
            "build" => Partition::Build,
            _ => Partition::Repair,
        }
    }

    /// Section label used in the CSV report
    pub fn section_label(&self) -> &'static str {
        match self {
            Partition::Repair => "Ремонт",
            Partition::Build => "Буд",
        }
    }
}

impl Serialize for Partition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Partition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Partition::from_str(&s)).unwrap_or_default())
    }
}

/// Editable fields of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Work,
    Type,
    Unit,
    Price,
    Qty,
}

/// A single ledger row
///
/// Field names on the wire follow the persisted snapshot format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier across both partitions
    #[serde(default)]
    pub id: u64,
    /// Description of the work
    #[serde(default)]
    pub work: String,
    /// Category label (rows are grouped by it)
    #[serde(rename = "type", default)]
    pub category: String,
    /// Unit label ("м2", "шт", ...)
    #[serde(default)]
    pub unit: String,
    /// Price per unit
    #[serde(default)]
    pub price: f64,
    /// Quantity
    #[serde(default)]
    pub qty: f64,
    /// Completion status
    #[serde(default)]
    pub done: bool,
    /// Partition the row lives in
    #[serde(default)]
    pub source: Partition,
}

impl WorkItem {
    /// Create a pending item with zero price and quantity
    pub fn new(id: u64, work: &str, category: &str, unit: &str, source: Partition) -> Self {
        Self {
            id,
            work: work.to_string(),
            category: category.to_string(),
            unit: unit.to_string(),
            price: 0.0,
            qty: 0.0,
            done: false,
            source,
        }
    }

    /// price × quantity
    pub fn line_total(&self) -> f64 {
        self.price * self.qty
    }

    /// Apply a raw text edit to one field.
    ///
    /// Numeric fields are coerced with [`parse_number`], text fields are trimmed.
    pub fn apply(&mut self, field: Field, value: &str) {
        match field {
            Field::Work => self.work = value.trim().to_string(),
            Field::Type => self.category = value.trim().to_string(),
            Field::Unit => self.unit = value.trim().to_string(),
            Field::Price => self.price = parse_number(value),
            Field::Qty => self.qty = parse_number(value),
        }
    }
}

/// Lenient number parsing for user input.
///
/// Reads the longest numeric prefix (so "12.5 м2" is 12.5). Text without a
/// numeric prefix, non-finite values and negatives all become 0.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !matches!(c, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..end];

    let value = (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let mut item = WorkItem::new(1, "Штукатурка", "Стіни", "м2", Partition::Repair);
        item.price = 100.0;
        item.qty = 2.5;
        assert_eq!(item.line_total(), 250.0);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  12.5 м2"), 12.5);
        assert_eq!(parse_number("1.5.3"), 1.5);
        assert_eq!(parse_number("1e2"), 100.0);
        assert_eq!(parse_number("1e"), 1.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("12,5"), 12.0);
    }

    #[test]
    fn test_parse_number_coerces_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("-5"), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }

    #[test]
    fn test_apply_trims_text_fields() {
        let mut item = WorkItem::new(1, "old", "old", "шт", Partition::Build);
        item.apply(Field::Work, "  Заливка фундаменту  ");
        item.apply(Field::Type, " Фундамент");
        item.apply(Field::Qty, "3");
        assert_eq!(item.work, "Заливка фундаменту");
        assert_eq!(item.category, "Фундамент");
        assert_eq!(item.qty, 3.0);
    }

    #[test]
    fn test_partition_wire_format() {
        assert_eq!(Partition::from_str("build"), Partition::Build);
        assert_eq!(Partition::from_str("repair"), Partition::Repair);
        assert_eq!(Partition::from_str("anything"), Partition::Repair);

        let item: WorkItem = serde_json::from_str(
            r#"{"id":3,"work":"Покрівля","type":"Дах","unit":"м2","price":10,"qty":1,"done":true,"source":"build"}"#,
        )
        .unwrap();
        assert_eq!(item.source, Partition::Build);
        assert_eq!(item.category, "Дах");
        assert!(item.done);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["source"], "build");
        assert_eq!(json["type"], "Дах");
    }

    #[test]
    fn test_missing_fields_default() {
        let item: WorkItem = serde_json::from_str(r#"{"id":7,"source":null}"#).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.source, Partition::Repair);
        assert_eq!(item.price, 0.0);
        assert!(!item.done);
    }
}
