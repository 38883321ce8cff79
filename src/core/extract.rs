use crate::core::columns::{ColumnMap, StatField};
use crate::domain::model::{Cell, PlayerRecord};
use crate::domain::team::Team;

/// Only the leading cells can hold the player's profile link.
const NAME_SCAN_CELLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    EmptyRow,
    NoPlayerLink,
    NumericName,
    NoTeam,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Player(PlayerRecord),
    Skip(SkipReason),
}

/// Name of the first player-profile link among the leading cells.
///
/// Subtotal rows, repeated header rows and league-average rows carry no
/// profile link and are rejected here.
pub fn player_name(row: &[Cell]) -> Result<&str, SkipReason> {
    if row.is_empty() {
        return Err(SkipReason::EmptyRow);
    }
    let name = row
        .iter()
        .take(NAME_SCAN_CELLS)
        .find_map(Cell::player_ref)
        .filter(|name| !name.is_empty())
        .ok_or(SkipReason::NoPlayerLink)?;
    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(SkipReason::NumericName);
    }
    Ok(name)
}

/// First cell whose text is a team code.
pub fn team_of(row: &[Cell]) -> Option<Team> {
    row.iter().find_map(|cell| Team::from_code(cell.text.trim()))
}

pub fn parse_f64(row: &[Cell], columns: &ColumnMap, field: StatField) -> Option<f64> {
    let text = columns.cell(row, field)?.text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

pub fn parse_u32(row: &[Cell], columns: &ColumnMap, field: StatField) -> Option<u32> {
    let text = columns.cell(row, field)?.text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Extracts a current-season player row. Bad numeric cells default to zero
/// (or no rank); only a missing name or team drops the row.
pub fn extract_player(row: &[Cell], columns: &ColumnMap) -> Extraction {
    let name = match player_name(row) {
        Ok(name) => name,
        Err(reason) => return Extraction::Skip(reason),
    };
    let Some(team) = team_of(row) else {
        return Extraction::Skip(SkipReason::NoTeam);
    };

    let count = |field| parse_f64(row, columns, field).unwrap_or(0.0);

    Extraction::Player(PlayerRecord {
        name: name.to_string(),
        team,
        rank: parse_u32(row, columns, StatField::Rank),
        games: parse_u32(row, columns, StatField::Games).unwrap_or(0),
        fg_pct: count(StatField::FgPct),
        fg2_made: count(StatField::Fg2),
        fg2_att: count(StatField::Fg2a),
        fg3_made: count(StatField::Fg3),
        fg3_att: count(StatField::Fg3a),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HeaderCell;

    fn columns() -> ColumnMap {
        let header: Vec<HeaderCell> = [
            "Rk", "Player", "Age", "Team", "G", "FG%", "2P", "2PA", "3P", "3PA",
        ]
        .iter()
        .map(|t| HeaderCell::new(None, *t))
        .collect();
        ColumnMap::resolve(&header, &StatField::TOTALS)
    }

    fn row(name: &str, team: &str, stats: &[&str]) -> Vec<Cell> {
        let mut cells = vec![
            Cell::new(stats[0]),
            Cell::with_link(name, "/players/x/xxxxx01.html"),
            Cell::new("27"),
            Cell::with_link(team, format!("/teams/{}/2026.html", team)),
        ];
        cells.extend(stats[1..].iter().map(|s| Cell::new(*s)));
        cells
    }

    #[test]
    fn test_extracts_player_row() {
        let cells = row(
            "Jayson Tatum",
            "BOS",
            &["3", "40", ".485", "300", "560", "120", "320"],
        );
        let Extraction::Player(player) = extract_player(&cells, &columns()) else {
            panic!("expected a player");
        };
        assert_eq!(player.name, "Jayson Tatum");
        assert_eq!(player.team, Team::Bos);
        assert_eq!(player.rank, Some(3));
        assert_eq!(player.games, 40);
        assert_eq!(player.fg_pct, 0.485);
        assert_eq!(player.fg2_made, 300.0);
        assert_eq!(player.fg3_att, 320.0);
    }

    #[test]
    fn test_rows_without_player_link_are_skipped() {
        let header_row: Vec<Cell> = ["Rk", "Player", "Age", "Team"]
            .iter()
            .map(|t| Cell::new(*t))
            .collect();
        assert_eq!(
            extract_player(&header_row, &columns()),
            Extraction::Skip(SkipReason::NoPlayerLink)
        );
        assert_eq!(
            extract_player(&[], &columns()),
            Extraction::Skip(SkipReason::EmptyRow)
        );
    }

    #[test]
    fn test_link_beyond_fourth_cell_is_ignored() {
        let mut cells: Vec<Cell> = (0..4).map(|i| Cell::new(i.to_string())).collect();
        cells.push(Cell::with_link("Late Link", "/players/l/late01.html"));
        cells.push(Cell::new("BOS"));
        assert_eq!(player_name(&cells), Err(SkipReason::NoPlayerLink));
    }

    #[test]
    fn test_numeric_name_is_skipped() {
        let cells = row("42", "BOS", &["1", "10", ".5", "1", "2", "0", "0"]);
        assert_eq!(
            extract_player(&cells, &columns()),
            Extraction::Skip(SkipReason::NumericName)
        );
    }

    #[test]
    fn test_row_without_team_is_skipped() {
        let cells = row("Traded Guy", "2TM", &["7", "50", ".45", "1", "2", "0", "0"]);
        assert_eq!(
            extract_player(&cells, &columns()),
            Extraction::Skip(SkipReason::NoTeam)
        );
    }

    #[test]
    fn test_legacy_team_code_is_canonical() {
        let cells = row("Devin Booker", "PHO", &["9", "44", ".47", "250", "480", "130", "360"]);
        let Extraction::Player(player) = extract_player(&cells, &columns()) else {
            panic!("expected a player");
        };
        assert_eq!(player.team, Team::Phx);
    }

    #[test]
    fn test_bad_numeric_fields_default_without_dropping_row() {
        let cells = row("Rookie", "SAS", &["", "x", "", "n/a", "12", "", "3"]);
        let Extraction::Player(player) = extract_player(&cells, &columns()) else {
            panic!("expected a player");
        };
        assert_eq!(player.rank, None);
        assert_eq!(player.games, 0);
        assert_eq!(player.fg_pct, 0.0);
        assert_eq!(player.fg2_made, 0.0);
        assert_eq!(player.fg2_att, 12.0);
        assert_eq!(player.fg3_made, 0.0);
        assert_eq!(player.fg3_att, 3.0);
    }

    #[test]
    fn test_short_row_defaults_missing_columns() {
        let cells = vec![
            Cell::new("5"),
            Cell::with_link("Short Row", "/players/s/short01.html"),
            Cell::new("22"),
            Cell::new("UTA"),
        ];
        let Extraction::Player(player) = extract_player(&cells, &columns()) else {
            panic!("expected a player");
        };
        assert_eq!(player.rank, Some(5));
        assert_eq!(player.games, 0);
        assert_eq!(player.fg3_att, 0.0);
    }
}
