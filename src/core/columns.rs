//! Header-to-field resolution.
//!
//! basketball-reference headers expose a `data-stat` key and a display label
//! that share one lookup space, and columns move between seasons. Resolution
//! is two-phase: index every label once, then resolve each [`StatField`]
//! through its ordered alias list. A field with no matching alias is simply
//! absent from the [`ColumnMap`].

use crate::domain::model::{Cell, HeaderCell};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Rank,
    Games,
    FgPct,
    Fg2,
    Fg2a,
    Fg3,
    Fg3a,
    DunkPct,
    Dunks,
}

impl StatField {
    /// Fields read from the season totals table.
    pub const TOTALS: [StatField; 7] = [
        StatField::Rank,
        StatField::Games,
        StatField::FgPct,
        StatField::Fg2,
        StatField::Fg2a,
        StatField::Fg3,
        StatField::Fg3a,
    ];

    /// Fields read from the season shooting table.
    pub const SHOOTING: [StatField; 2] = [StatField::DunkPct, StatField::Dunks];

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            StatField::Rank => &["rank", "Rk", "#"],
            StatField::Games => &["g", "G", "games"],
            StatField::FgPct => &["fg_pct", "FG%"],
            StatField::Fg2 => &["fg2", "2P"],
            StatField::Fg2a => &["fg2a", "2PA"],
            StatField::Fg3 => &["fg3", "3P"],
            StatField::Fg3a => &["fg3a", "3PA"],
            StatField::DunkPct => &["dunk_pct", "Dunk%", "Dunks %FGA"],
            StatField::Dunks => &["dunk", "Dunks", "Dunks #"],
        }
    }

    pub fn key(self) -> &'static str {
        self.aliases()[0]
    }
}

/// Every header label (machine key and display text) mapped to its column.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    labels: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn build(header: &[HeaderCell]) -> Self {
        let mut labels = HashMap::new();
        for (idx, cell) in header.iter().enumerate() {
            if let Some(key) = cell.key.as_deref().filter(|k| !k.is_empty()) {
                labels.insert(key.to_string(), idx);
            }
            let text = cell.text.trim();
            if !text.is_empty() {
                labels.insert(text.to_string(), idx);
            }
        }
        Self { labels }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: HashMap<StatField, usize>,
}

impl ColumnMap {
    pub fn resolve(header: &[HeaderCell], fields: &[StatField]) -> Self {
        let index = HeaderIndex::build(header);
        let columns = fields
            .iter()
            .filter_map(|&field| {
                field
                    .aliases()
                    .iter()
                    .find_map(|alias| index.get(alias))
                    .map(|idx| (field, idx))
            })
            .collect();
        Self { columns }
    }

    pub fn index(&self, field: StatField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// The row's cell for `field`; `None` when unresolved or past the row end.
    pub fn cell<'r>(&self, row: &'r [Cell], field: StatField) -> Option<&'r Cell> {
        self.index(field).and_then(|idx| row.get(idx))
    }

    pub fn missing(&self, fields: &[StatField]) -> Vec<StatField> {
        fields
            .iter()
            .copied()
            .filter(|field| !self.columns.contains_key(field))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
