use crate::core::columns::{ColumnMap, StatField};
use crate::core::extract::{parse_f64, parse_u32, player_name, team_of};
use crate::core::reconcile::round_to;
use crate::domain::model::{Outcome, RawTable};
use crate::domain::team::Team;
use crate::utils::error::{ReportError, Result};
use serde::Serialize;

/// Dunk volume for one player, from the season shooting page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DunkRecord {
    pub name: String,
    pub team: Team,
    /// Share of field-goal attempts that were dunks.
    pub dunk_pct_fga: f64,
    pub dunks: u32,
}

pub type DunkOutcome = Outcome<DunkRecord>;

pub fn extract_dunk_stats(table: Option<&RawTable>, min_players: usize) -> Result<DunkOutcome> {
    let table = table.ok_or_else(|| ReportError::MissingTableError {
        season: "shooting".to_string(),
    })?;
    let columns = ColumnMap::resolve(&table.header, &StatField::SHOOTING);
    tracing::debug!(
        "Shooting columns: dunk_pct={:?} dunks={:?}",
        columns.index(StatField::DunkPct),
        columns.index(StatField::Dunks)
    );

    let records: Vec<DunkRecord> = table
        .rows
        .iter()
        .filter_map(|row| {
            let name = player_name(row).ok()?;
            let team = team_of(row)?;
            Some(DunkRecord {
                name: name.to_string(),
                team,
                dunk_pct_fga: round_to(
                    parse_f64(row, &columns, StatField::DunkPct).unwrap_or(0.0),
                    3,
                ),
                dunks: parse_u32(row, &columns, StatField::Dunks).unwrap_or(0),
            })
        })
        .collect();

    tracing::info!("Extracted dunk stats for {} players", records.len());
    Ok(Outcome::from_extracted(records, min_players))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Cell, HeaderCell};

    fn table() -> RawTable {
        let header = [
            (Some("ranker"), "Rk"),
            (Some("name_display"), "Player"),
            (Some("team_name_abbr"), "Team"),
            (Some("pct_fga_dunk"), "Dunks %FGA"),
            (Some("fg_dunk"), "Dunks #"),
        ]
        .iter()
        .map(|(k, t)| HeaderCell::new(*k, *t))
        .collect();
        let rows = vec![
            vec![
                Cell::new("1"),
                Cell::with_link("Giannis Antetokounmpo", "/players/a/antetgi01.html"),
                Cell::new("MIL"),
                Cell::new(".2214"),
                Cell::new("140"),
            ],
            vec![
                Cell::new("2"),
                Cell::with_link("Kevin Durant", "/players/d/duranke01.html"),
                Cell::new("PHO"),
                Cell::new(""),
                Cell::new("?"),
            ],
            vec![Cell::new("Rk"), Cell::new("Player"), Cell::new("Team")],
        ];
        RawTable { header, rows }
    }

    #[test]
    fn test_extracts_dunk_rows() {
        let Outcome::Data(records) = extract_dunk_stats(Some(&table()), 2).unwrap() else {
            panic!("expected data");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].dunk_pct_fga, 0.221);
        assert_eq!(records[0].dunks, 140);
        assert_eq!(records[1].team, Team::Phx);
        assert_eq!(records[1].dunk_pct_fga, 0.0);
        assert_eq!(records[1].dunks, 0);
    }

    #[test]
    fn test_insufficient_and_missing() {
        let outcome = extract_dunk_stats(Some(&table()), 101).unwrap();
        assert_eq!(
            outcome,
            Outcome::Insufficient {
                extracted: 2,
                required: 101
            }
        );
        assert!(extract_dunk_stats(None, 1).is_err());
    }
}
