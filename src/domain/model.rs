use crate::domain::team::Team;
use serde::{Serialize, Serializer};
use std::fmt;

const PLAYER_PROFILE_PATH: &str = "/players/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// One `<th>`/`<td>` of a scraped table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub link: Option<Link>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn with_link(text: impl Into<String>, href: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            link: Some(Link {
                href: href.into(),
                text: text.clone(),
            }),
            text,
        }
    }

    /// Link text of an embedded player-profile reference, if any.
    pub fn player_ref(&self) -> Option<&str> {
        self.link
            .as_ref()
            .filter(|link| link.href.contains(PLAYER_PROFILE_PATH))
            .map(|link| link.text.trim())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCell {
    /// Machine-readable column key (`data-stat` on basketball-reference).
    pub key: Option<String>,
    pub text: String,
}

impl HeaderCell {
    pub fn new(key: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            key: key.map(str::to_string),
            text: text.into(),
        }
    }
}

pub type RawRow = Vec<Cell>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<RawRow>,
}

/// Parsed pages for one run. The prior season is optional enrichment.
#[derive(Debug, Clone, Default)]
pub struct SeasonTables {
    pub current: Option<RawTable>,
    pub prior: Option<RawTable>,
}

/// Current-season player row before reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: Team,
    pub rank: Option<u32>,
    pub games: u32,
    pub fg_pct: f64,
    pub fg2_made: f64,
    pub fg2_att: f64,
    pub fg3_made: f64,
    pub fg3_att: f64,
}

/// Previous-season totals for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorEntry {
    pub rank: Option<u32>,
    pub games: u32,
    pub fg2_made: u32,
    pub fg2_att: u32,
    pub fg3_made: u32,
    pub fg3_att: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotLean {
    Made2,
    Made3,
    Tied,
}

/// Which shot type a player is more likely to make first, weighted by
/// made counts. `averaged` marks values derived from blended seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstMade {
    pub lean: ShotLean,
    pub averaged: bool,
}

impl FirstMade {
    pub fn from_counts(made2: f64, made3: f64, averaged: bool) -> Self {
        let lean = if made2 > made3 {
            ShotLean::Made2
        } else if made3 > made2 {
            ShotLean::Made3
        } else {
            ShotLean::Tied
        };
        Self { lean, averaged }
    }
}

impl fmt::Display for FirstMade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.lean {
            ShotLean::Made2 => "Made 2",
            ShotLean::Made3 => "Made 3",
            ShotLean::Tied => "Tied",
        };
        if self.averaged {
            write!(f, "{} (Avg)", label)
        } else {
            f.write_str(label)
        }
    }
}

impl Serialize for FirstMade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Final per-player row handed to the renderer. Field names are the
/// JSON keys the report script reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    pub name: String,
    pub team: Team,
    pub rank: Option<u32>,
    pub fg_pct: f64,
    pub two_pct: f64,
    pub three_pct: f64,
    pub made2_likelihood_pct: f64,
    pub first_made_weighted: FirstMade,
    pub team_rank: usize,
    pub team_total_players: usize,
}

/// Result of a core run: usable data, or too few players survived
/// extraction for the caller to trust the scrape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Data(Vec<T>),
    Insufficient { extracted: usize, required: usize },
}

impl<T> Outcome<T> {
    /// `Data` when at least `required` items survived, else `Insufficient`.
    pub fn from_extracted(items: Vec<T>, required: usize) -> Self {
        if items.len() < required {
            Outcome::Insufficient {
                extracted: items.len(),
                required,
            }
        } else {
            Outcome::Data(items)
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Outcome::Insufficient { .. })
    }
}

pub type ReportOutcome = Outcome<ReportRecord>;
