use crate::core::aggregate::aggregate;
use crate::core::columns::{ColumnMap, StatField};
use crate::core::extract::{extract_player, Extraction, SkipReason};
use crate::core::prior::PriorIndex;
use crate::core::reconcile::{ReconcileMode, Reconciler, DEFAULT_MIN_GAMES};
use crate::domain::model::{Outcome, PlayerRecord, RawTable, ReportOutcome};
use crate::utils::error::{ReportError, Result};
use std::collections::HashMap;

/// A live scrape with this many players or fewer is treated as broken.
pub const DEFAULT_MIN_PLAYERS: usize = 101;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub min_games: u32,
    pub min_players: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            min_games: DEFAULT_MIN_GAMES,
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }
}

/// Extracts every player row of the current-season table.
pub fn extract_players(table: &RawTable) -> Vec<PlayerRecord> {
    let columns = ColumnMap::resolve(&table.header, &StatField::TOTALS);
    let missing = columns.missing(&StatField::TOTALS);
    if !missing.is_empty() {
        tracing::debug!(
            "Unresolved columns (treated as zero): {:?}",
            missing.iter().map(|f| f.key()).collect::<Vec<_>>()
        );
    }

    let mut skipped: HashMap<SkipReason, usize> = HashMap::new();
    let mut players = Vec::new();
    for row in &table.rows {
        match extract_player(row, &columns) {
            Extraction::Player(player) => players.push(player),
            Extraction::Skip(reason) => {
                tracing::trace!("Skipping row: {:?}", reason);
                *skipped.entry(reason).or_default() += 1;
            }
        }
    }

    tracing::debug!(
        "Extracted {} players from {} rows (skipped: {:?})",
        players.len(),
        table.rows.len(),
        skipped
    );
    players
}

/// Runs the whole normalization core: extract, reconcile against the prior
/// season, rank and order.
///
/// A missing current table, or one without a header, is an error. Too few
/// extracted players is not: it comes back as [`Outcome::Insufficient`] so
/// the caller can pick a fallback.
pub fn build_report(
    current: Option<&RawTable>,
    prior: Option<&RawTable>,
    settings: &ReportSettings,
) -> Result<ReportOutcome> {
    let current = current.ok_or_else(|| ReportError::MissingTableError {
        season: "current".to_string(),
    })?;
    if current.header.is_empty() {
        return Err(ReportError::MissingHeaderError {
            season: "current".to_string(),
        });
    }

    let prior_index = match prior {
        Some(table) if !table.header.is_empty() => PriorIndex::build(table),
        Some(_) => {
            tracing::warn!("Prior-season table has no header; blending disabled");
            PriorIndex::empty()
        }
        None => {
            tracing::info!("No prior-season table; blending disabled");
            PriorIndex::empty()
        }
    };

    let players = extract_players(current);
    if players.len() < settings.min_players {
        tracing::warn!(
            "Only {} players extracted (need {})",
            players.len(),
            settings.min_players
        );
        return Ok(Outcome::Insufficient {
            extracted: players.len(),
            required: settings.min_players,
        });
    }

    let reconciler = Reconciler::new(&prior_index, settings.min_games);
    let profiles: Vec<_> = players.iter().map(|p| reconciler.reconcile(p)).collect();
    let blended = profiles
        .iter()
        .filter(|p| p.mode == ReconcileMode::Blended)
        .count();
    tracing::info!(
        "Reconciled {} players ({} blended with the prior season)",
        profiles.len(),
        blended
    );

    Ok(Outcome::Data(aggregate(profiles)))
}
