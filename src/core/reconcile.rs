//! Per-player shooting metrics.
//!
//! Players with a small current-season sample are blended with their prior
//! season: raw counts are averaged elementwise and every percentage is
//! recomputed from the averages. Everyone else is reported straight from
//! the current table.

use crate::core::prior::PriorIndex;
use crate::domain::model::{FirstMade, PlayerRecord, PriorEntry};
use crate::domain::team::Team;
use thiserror::Error;

/// Below this many games the current season alone is considered too noisy.
pub const DEFAULT_MIN_GAMES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileMode {
    Direct,
    Blended,
}

/// Reconciled metrics for one player, rounded for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotProfile {
    pub name: String,
    pub team: Team,
    pub rank: Option<u32>,
    pub fg_pct: f64,
    pub two_pct: f64,
    pub three_pct: f64,
    pub made2_likelihood_pct: f64,
    pub first_made_weighted: FirstMade,
    pub mode: ReconcileMode,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendError {
    #[error("current {field} is not a finite number: {value}")]
    NonFiniteCount { field: &'static str, value: f64 },
}

/// Rounds to `places` decimals, exact halves to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

fn ratio(made: f64, attempts: f64) -> f64 {
    if attempts > 0.0 {
        made / attempts
    } else {
        0.0
    }
}

fn made2_likelihood(made2: f64, made3: f64) -> f64 {
    let total = made2 + made3;
    if total > 0.0 {
        made2 / total * 100.0
    } else {
        0.0
    }
}

fn rounded_count(field: &'static str, value: f64) -> Result<f64, BlendError> {
    if value.is_finite() {
        Ok(value.round_ties_even())
    } else {
        Err(BlendError::NonFiniteCount { field, value })
    }
}

/// Current-season metrics only. FG% is the table's own value, not a ratio
/// of the made/attempt columns.
pub fn direct(player: &PlayerRecord) -> ShotProfile {
    if !(0.0..=1.0).contains(&player.fg_pct) {
        tracing::debug!(
            "FG% out of range for {}: {}",
            player.name,
            player.fg_pct
        );
    }
    ShotProfile {
        name: player.name.clone(),
        team: player.team,
        rank: player.rank,
        fg_pct: round_to(player.fg_pct, 3),
        two_pct: round_to(ratio(player.fg2_made, player.fg2_att), 3),
        three_pct: round_to(ratio(player.fg3_made, player.fg3_att), 3),
        made2_likelihood_pct: round_to(made2_likelihood(player.fg2_made, player.fg3_made), 1),
        first_made_weighted: FirstMade::from_counts(player.fg2_made, player.fg3_made, false),
        mode: ReconcileMode::Direct,
    }
}

/// Averages current and prior raw counts and recomputes every metric.
pub fn blend(player: &PlayerRecord, prior: &PriorEntry) -> Result<ShotProfile, BlendError> {
    let fg2 = rounded_count("fg2", player.fg2_made)?;
    let fg2a = rounded_count("fg2a", player.fg2_att)?;
    let fg3 = rounded_count("fg3", player.fg3_made)?;
    let fg3a = rounded_count("fg3a", player.fg3_att)?;

    let avg_fg2 = (fg2 + f64::from(prior.fg2_made)) / 2.0;
    let avg_fg2a = (fg2a + f64::from(prior.fg2_att)) / 2.0;
    let avg_fg3 = (fg3 + f64::from(prior.fg3_made)) / 2.0;
    let avg_fg3a = (fg3a + f64::from(prior.fg3_att)) / 2.0;

    let total_att = avg_fg2a + avg_fg3a;
    let fg_pct = if total_att > 0.0 {
        (avg_fg2 + avg_fg3) / total_att
    } else {
        player.fg_pct
    };

    let rank = match (player.rank, prior.rank) {
        (Some(current), Some(previous)) => Some(current.min(previous)),
        (current, previous) => current.or(previous),
    };

    Ok(ShotProfile {
        name: player.name.clone(),
        team: player.team,
        rank,
        fg_pct: round_to(fg_pct, 3),
        two_pct: round_to(ratio(avg_fg2, avg_fg2a), 3),
        three_pct: round_to(ratio(avg_fg3, avg_fg3a), 3),
        made2_likelihood_pct: round_to(made2_likelihood(avg_fg2, avg_fg3), 1),
        first_made_weighted: FirstMade::from_counts(avg_fg2, avg_fg3, true),
        mode: ReconcileMode::Blended,
    })
}

pub struct Reconciler<'a> {
    prior: &'a PriorIndex,
    min_games: u32,
}

impl<'a> Reconciler<'a> {
    pub fn new(prior: &'a PriorIndex, min_games: u32) -> Self {
        Self { prior, min_games }
    }

    pub fn reconcile(&self, player: &PlayerRecord) -> ShotProfile {
        if player.games >= self.min_games {
            return direct(player);
        }
        let Some(prior) = self.prior.lookup(&player.name).filter(|p| p.games > 0) else {
            return direct(player);
        };
        match blend(player, prior) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::debug!("Blending skipped for {}: {}", player.name, e);
                direct(player)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Cell, HeaderCell, RawTable, ShotLean};

    fn player(games: u32, counts: [f64; 4]) -> PlayerRecord {
        PlayerRecord {
            name: "Test Player".to_string(),
            team: Team::Mil,
            rank: Some(250),
            games,
            fg_pct: 0.375,
            fg2_made: counts[0],
            fg2_att: counts[1],
            fg3_made: counts[2],
            fg3_att: counts[3],
        }
    }

    fn prior_index(name: &str, rank: &str, games: &str, counts: [&str; 4]) -> PriorIndex {
        let header = ["Rk", "Player", "G", "2P", "2PA", "3P", "3PA"]
            .iter()
            .map(|t| HeaderCell::new(None, *t))
            .collect();
        let mut row = vec![
            Cell::new(rank),
            Cell::with_link(name, "/players/t/test01.html"),
            Cell::new(games),
        ];
        row.extend(counts.iter().map(|c| Cell::new(*c)));
        PriorIndex::build(&RawTable {
            header,
            rows: vec![row],
        })
    }

    #[test]
    fn test_direct_mode_metrics() {
        let profile = direct(&player(40, [200.0, 400.0, 100.0, 300.0]));
        assert_eq!(profile.mode, ReconcileMode::Direct);
        assert_eq!(profile.fg_pct, 0.375);
        assert_eq!(profile.two_pct, 0.5);
        assert_eq!(profile.three_pct, 0.333);
        assert_eq!(profile.made2_likelihood_pct, 66.7);
        assert_eq!(profile.first_made_weighted.to_string(), "Made 2");
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        let profile = direct(&player(40, [1.0, 16.0, 15.0, 16.0]));
        assert_eq!(profile.two_pct, 0.062);
        assert_eq!(profile.three_pct, 0.938);
        assert_eq!(profile.made2_likelihood_pct, 6.2);

        let profile = direct(&player(40, [5.0, 16.0, 9.0, 16.0]));
        assert_eq!(profile.two_pct, 0.312);
        assert_eq!(profile.three_pct, 0.562);

        assert_eq!(round_to(31.25, 1), 31.2);
        assert_eq!(round_to(0.4375, 3), 0.438);
    }

    #[test]
    fn test_direct_mode_passes_out_of_range_fg_pct_through() {
        let mut bad = player(40, [200.0, 400.0, 100.0, 300.0]);
        bad.fg_pct = 1.5;
        assert_eq!(direct(&bad).fg_pct, 1.5);
    }

    #[test]
    fn test_direct_mode_zero_attempts() {
        let profile = direct(&player(3, [0.0, 0.0, 0.0, 0.0]));
        assert_eq!(profile.two_pct, 0.0);
        assert_eq!(profile.three_pct, 0.0);
        assert_eq!(profile.made2_likelihood_pct, 0.0);
        assert_eq!(profile.first_made_weighted.lean, ShotLean::Tied);
    }

    #[test]
    fn test_blended_example() {
        let current = player(8, [2.0, 5.0, 1.0, 3.0]);
        let prior = PriorEntry {
            rank: Some(120),
            games: 70,
            fg2_made: 100,
            fg2_att: 200,
            fg3_made: 50,
            fg3_att: 150,
        };
        let profile = blend(&current, &prior).unwrap();

        assert_eq!(profile.mode, ReconcileMode::Blended);
        assert_eq!(profile.two_pct, 0.498);
        assert_eq!(profile.three_pct, 0.333);
        assert_eq!(profile.fg_pct, 0.427);
        assert_eq!(profile.made2_likelihood_pct, 66.7);
        assert_eq!(profile.first_made_weighted.to_string(), "Made 2 (Avg)");
        assert_eq!(profile.rank, Some(120));
    }

    #[test]
    fn test_blend_rank_resolution() {
        let prior = PriorEntry {
            rank: None,
            games: 10,
            fg2_made: 10,
            fg2_att: 20,
            fg3_made: 0,
            fg3_att: 0,
        };
        let mut current = player(2, [1.0, 2.0, 0.0, 1.0]);
        assert_eq!(blend(&current, &prior).unwrap().rank, Some(250));

        current.rank = None;
        assert_eq!(blend(&current, &prior).unwrap().rank, None);

        let ranked_prior = PriorEntry {
            rank: Some(30),
            ..prior
        };
        assert_eq!(blend(&current, &ranked_prior).unwrap().rank, Some(30));
    }

    #[test]
    fn test_blend_zero_attempts_keeps_table_fg_pct() {
        let prior = PriorEntry {
            games: 5,
            ..PriorEntry::default()
        };
        let profile = blend(&player(1, [0.0, 0.0, 0.0, 0.0]), &prior).unwrap();
        assert_eq!(profile.fg_pct, 0.375);
        assert_eq!(profile.first_made_weighted.to_string(), "Tied (Avg)");
    }

    #[test]
    fn test_blend_rounds_current_counts_half_to_even() {
        let prior = PriorEntry {
            games: 60,
            fg2_made: 0,
            fg2_att: 4,
            fg3_made: 0,
            fg3_att: 0,
            rank: None,
        };
        // 2.5 rounds to 2, so avg_fg2 = 1.0 and avg_fg2a = 4.0.
        let profile = blend(&player(4, [2.5, 4.0, 0.0, 0.0]), &prior).unwrap();
        assert_eq!(profile.two_pct, 0.25);
    }

    #[test]
    fn test_blend_rejects_non_finite_counts() {
        let prior = PriorEntry {
            games: 60,
            ..PriorEntry::default()
        };
        let err = blend(&player(4, [f64::INFINITY, 4.0, 0.0, 0.0]), &prior).unwrap_err();
        assert!(matches!(err, BlendError::NonFiniteCount { field: "fg2", .. }));
    }

    #[test]
    fn test_reconciler_blends_low_sample_with_prior() {
        let index = prior_index("Test Player", "120", "70", ["100", "200", "50", "150"]);
        let reconciler = Reconciler::new(&index, DEFAULT_MIN_GAMES);
        let profile = reconciler.reconcile(&player(8, [2.0, 5.0, 1.0, 3.0]));
        assert_eq!(profile.mode, ReconcileMode::Blended);
        assert_eq!(profile.fg_pct, 0.427);
    }

    #[test]
    fn test_reconciler_direct_at_or_above_threshold() {
        let index = prior_index("Test Player", "120", "70", ["100", "200", "50", "150"]);
        let reconciler = Reconciler::new(&index, DEFAULT_MIN_GAMES);
        for games in [15, 16, 82] {
            let current = player(games, [2.0, 5.0, 1.0, 3.0]);
            assert_eq!(reconciler.reconcile(&current), direct(&current));
        }
    }

    #[test]
    fn test_reconciler_direct_without_usable_prior() {
        let no_match = prior_index("Someone Else", "1", "70", ["100", "200", "50", "150"]);
        let no_games = prior_index("Test Player", "1", "0", ["100", "200", "50", "150"]);
        let empty = PriorIndex::empty();
        let current = player(8, [2.0, 5.0, 1.0, 3.0]);

        for index in [&no_match, &no_games, &empty] {
            let reconciler = Reconciler::new(index, DEFAULT_MIN_GAMES);
            assert_eq!(reconciler.reconcile(&current), direct(&current));
        }
    }

    #[test]
    fn test_reconciler_falls_back_when_blend_fails() {
        let index = prior_index("Test Player", "120", "70", ["100", "200", "50", "150"]);
        let reconciler = Reconciler::new(&index, DEFAULT_MIN_GAMES);
        let current = player(8, [f64::NAN, 5.0, 1.0, 3.0]);
        let profile = reconciler.reconcile(&current);
        assert_eq!(profile.mode, ReconcileMode::Direct);
        assert_eq!(profile.fg_pct, 0.375);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let index = prior_index("Test Player", "120", "70", ["100", "200", "50", "150"]);
        let reconciler = Reconciler::new(&index, DEFAULT_MIN_GAMES);
        let current = player(8, [2.0, 5.0, 1.0, 3.0]);
        assert_eq!(reconciler.reconcile(&current), reconciler.reconcile(&current));
    }
}
