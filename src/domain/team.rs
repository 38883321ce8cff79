use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 30 franchise codes used by basketball-reference.
///
/// Variants are declared in code order so the derived `Ord` sorts teams
/// alphabetically by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Team {
    Atl,
    Bos,
    Brk,
    Chi,
    Cho,
    Cle,
    Dal,
    Den,
    Det,
    Gsw,
    Hou,
    Ind,
    Lac,
    Lal,
    Mem,
    Mia,
    Mil,
    Min,
    Nop,
    Nyk,
    Okc,
    Orl,
    Phi,
    #[serde(alias = "PHO")]
    Phx,
    Por,
    Sac,
    Sas,
    Tor,
    Uta,
    Was,
}

impl Team {
    pub const ALL: [Team; 30] = [
        Team::Atl,
        Team::Bos,
        Team::Brk,
        Team::Chi,
        Team::Cho,
        Team::Cle,
        Team::Dal,
        Team::Den,
        Team::Det,
        Team::Gsw,
        Team::Hou,
        Team::Ind,
        Team::Lac,
        Team::Lal,
        Team::Mem,
        Team::Mia,
        Team::Mil,
        Team::Min,
        Team::Nop,
        Team::Nyk,
        Team::Okc,
        Team::Orl,
        Team::Phi,
        Team::Phx,
        Team::Por,
        Team::Sac,
        Team::Sas,
        Team::Tor,
        Team::Uta,
        Team::Was,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Team::Atl => "ATL",
            Team::Bos => "BOS",
            Team::Brk => "BRK",
            Team::Chi => "CHI",
            Team::Cho => "CHO",
            Team::Cle => "CLE",
            Team::Dal => "DAL",
            Team::Den => "DEN",
            Team::Det => "DET",
            Team::Gsw => "GSW",
            Team::Hou => "HOU",
            Team::Ind => "IND",
            Team::Lac => "LAC",
            Team::Lal => "LAL",
            Team::Mem => "MEM",
            Team::Mia => "MIA",
            Team::Mil => "MIL",
            Team::Min => "MIN",
            Team::Nop => "NOP",
            Team::Nyk => "NYK",
            Team::Okc => "OKC",
            Team::Orl => "ORL",
            Team::Phi => "PHI",
            Team::Phx => "PHX",
            Team::Por => "POR",
            Team::Sac => "SAC",
            Team::Sas => "SAS",
            Team::Tor => "TOR",
            Team::Uta => "UTA",
            Team::Was => "WAS",
        }
    }

    /// Maps a cell's text to a team. This is the only place the legacy
    /// `PHO` code is folded into `PHX`.
    pub fn from_code(code: &str) -> Option<Team> {
        if code == "PHO" {
            return Some(Team::Phx);
        }
        Team::ALL.iter().copied().find(|team| team.code() == code)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Team::from_code(s).ok_or_else(|| format!("unknown team code: {}", s))
    }
}
