use crate::core::columns::{ColumnMap, StatField};
use crate::core::extract::{parse_u32, player_name};
use crate::domain::model::{PriorEntry, RawTable};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

const NAME_SUFFIXES: [&str; 5] = ["Jr", "Sr", "II", "III", "IV"];

/// Name form used to match players across seasons: no periods or commas,
/// no trailing generational suffix, single-spaced.
pub fn canonical_name(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !matches!(c, '.' | ',')).collect();
    let mut tokens: Vec<&str> = stripped.split_whitespace().collect();
    if tokens.last().is_some_and(|last| NAME_SUFFIXES.contains(last)) {
        tokens.pop();
    }
    tokens.join(" ")
}

/// Previous-season totals keyed by player name.
#[derive(Debug, Clone, Default)]
pub struct PriorIndex {
    by_name: HashMap<String, PriorEntry>,
    by_canonical: HashMap<String, PriorEntry>,
}

impl PriorIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Indexes every player row of the prior-season table. The table's
    /// columns are resolved on their own since layouts drift between years.
    pub fn build(table: &RawTable) -> Self {
        let columns = ColumnMap::resolve(&table.header, &StatField::TOTALS);
        let mut index = Self::default();

        for row in &table.rows {
            let Ok(name) = player_name(row) else {
                continue;
            };
            let count = |field| parse_u32(row, &columns, field).unwrap_or(0);
            let entry = PriorEntry {
                rank: parse_u32(row, &columns, StatField::Rank),
                games: count(StatField::Games),
                fg2_made: count(StatField::Fg2),
                fg2_att: count(StatField::Fg2a),
                fg3_made: count(StatField::Fg3),
                fg3_att: count(StatField::Fg3a),
            };
            match index.by_canonical.entry(canonical_name(name)) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(slot) => tracing::debug!(
                    "Prior-season name {} collides with an earlier player on canonical key {}, keeping the first",
                    name,
                    slot.key()
                ),
            }
            index.by_name.insert(name.to_string(), entry);
        }

        tracing::debug!("Indexed {} prior-season players", index.by_name.len());
        index
    }

    /// Exact name first, then the canonical form of `name`.
    pub fn lookup(&self, name: &str) -> Option<&PriorEntry> {
        if let Some(entry) = self.by_name.get(name) {
            return Some(entry);
        }
        let canonical = canonical_name(name);
        self.by_name
            .get(&canonical)
            .or_else(|| self.by_canonical.get(&canonical))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
