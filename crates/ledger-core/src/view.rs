//! View Projection
//!
//! Pure function from (state, filters) to the tables and totals the UI shows.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{AppState, Partition, WorkItem};

/// Active search and category filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Case-insensitive substring of description or category; empty = all
    pub search: String,
    /// Exact category; empty = all
    pub category: String,
}

impl ViewFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    pub fn matches(&self, item: &WorkItem) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || item.work.to_lowercase().contains(&needle)
            || item.category.to_lowercase().contains(&needle);
        let matches_category = self.category.is_empty() || item.category == self.category;
        matches_search && matches_category
    }
}

/// One category group of a pending table
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    /// Group label (the default bucket for rows without a category)
    pub category: String,
    pub collapsed: bool,
    /// Rows in store order
    pub rows: Vec<WorkItem>,
}

impl GroupView {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Rows to draw under the header; none when collapsed
    pub fn visible_rows(&self) -> &[WorkItem] {
        if self.collapsed {
            &[]
        } else {
            &self.rows
        }
    }
}

/// Aggregate figures
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// Σ price×qty over completed items
    pub done_sum: f64,
    /// Σ price×qty over pending items with qty > 0
    pub plan_sum: f64,
    pub done_count: usize,
}

/// Everything the UI renders from one state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerView {
    /// All completed items, unaffected by filters
    pub done: Vec<WorkItem>,
    pub repair: Vec<GroupView>,
    pub build: Vec<GroupView>,
    pub totals: Totals,
    /// Distinct non-empty categories, sorted
    pub categories: Vec<String>,
    /// Category filter after the rebuild: kept if still offered, else ""
    pub category_filter: String,
}

impl LedgerView {
    pub fn groups(&self, partition: Partition) -> &[GroupView] {
        match partition {
            Partition::Repair => &self.repair,
            Partition::Build => &self.build,
        }
    }
}

/// Project `state` through `filter`.
///
/// `default_category` labels the group of rows whose category is empty.
pub fn render(state: &AppState, filter: &ViewFilter, default_category: &str) -> LedgerView {
    let done: Vec<WorkItem> = state.done_rows().cloned().collect();

    let pending_groups = |partition: Partition| {
        group_rows(
            state.rows(partition).iter().filter(|row| !row.done && filter.matches(row)),
            state,
            default_category,
        )
    };
    let repair = pending_groups(Partition::Repair);
    let build = pending_groups(Partition::Build);

    let totals = Totals {
        done_sum: done.iter().map(WorkItem::line_total).sum(),
        plan_sum: state
            .all_rows()
            .filter(|row| !row.done && row.qty > 0.0)
            .map(WorkItem::line_total)
            .sum(),
        done_count: done.len(),
    };

    let categories: Vec<String> = state
        .all_rows()
        .filter(|row| !row.category.is_empty())
        .map(|row| row.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let category_filter = if categories.contains(&filter.category) {
        filter.category.clone()
    } else {
        String::new()
    };

    LedgerView {
        done,
        repair,
        build,
        totals,
        categories,
        category_filter,
    }
}

fn group_rows<'a>(
    rows: impl Iterator<Item = &'a WorkItem>,
    state: &AppState,
    default_category: &str,
) -> Vec<GroupView> {
    let mut groups: BTreeMap<String, Vec<WorkItem>> = BTreeMap::new();
    for row in rows {
        let label = if row.category.is_empty() {
            default_category
        } else {
            row.category.as_str()
        };
        groups.entry(label.to_string()).or_default().push(row.clone());
    }

    groups
        .into_iter()
        .map(|(category, rows)| GroupView {
            collapsed: state.is_collapsed(&category),
            category,
            rows,
        })
        .collect()
}
