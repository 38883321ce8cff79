//! Bundled fallback roster, used by the CLI when a live scrape is unusable.
//!
//! Seed rows only carry percentages, so the first-make label compares 2P%
//! against 3P% and the made-2 likelihood is left at zero.

use crate::core::aggregate::aggregate;
use crate::core::reconcile::{ReconcileMode, ShotProfile};
use crate::domain::model::{FirstMade, ReportRecord};
use crate::domain::team::Team;

const SEED_ROSTER: &[(&str, Team, f64, f64, f64)] = &[
    ("Trae Young", Team::Atl, 0.435, 0.420, 0.350),
    ("Clint Capela", Team::Atl, 0.665, 0.675, 0.000),
    ("Bogdan Bogdanovic", Team::Atl, 0.465, 0.410, 0.395),
    ("Jayson Tatum", Team::Bos, 0.485, 0.540, 0.375),
    ("Jrue Holiday", Team::Bos, 0.440, 0.480, 0.340),
    ("Derrick White", Team::Bos, 0.460, 0.510, 0.380),
    ("Cameron Thomas", Team::Brk, 0.445, 0.460, 0.360),
    ("Mikal Bridges", Team::Brk, 0.475, 0.500, 0.395),
    ("LaMelo Ball", Team::Cho, 0.415, 0.430, 0.330),
    ("Brandon Miller", Team::Cho, 0.440, 0.450, 0.370),
    ("Zach LaVine", Team::Chi, 0.450, 0.470, 0.375),
    ("Nikola Vucevic", Team::Chi, 0.530, 0.580, 0.300),
    ("Donovan Mitchell", Team::Cle, 0.460, 0.480, 0.380),
    ("Evan Mobley", Team::Cle, 0.540, 0.585, 0.250),
    ("Luka Doncic", Team::Dal, 0.470, 0.505, 0.385),
    ("Kyrie Irving", Team::Dal, 0.445, 0.450, 0.440),
    ("Tim Hardaway Jr.", Team::Dal, 0.380, 0.390, 0.360),
    ("P.J. Washington", Team::Dal, 0.420, 0.460, 0.380),
    ("Nikola Jokic", Team::Den, 0.580, 0.630, 0.350),
    ("Jamal Murray", Team::Den, 0.480, 0.520, 0.410),
    ("Cade Cunningham", Team::Det, 0.450, 0.490, 0.355),
    ("Jalen Duren", Team::Det, 0.610, 0.625, 0.000),
    ("Stephen Curry", Team::Gsw, 0.455, 0.520, 0.410),
    ("Draymond Green", Team::Gsw, 0.490, 0.560, 0.330),
    ("Alperen Sengun", Team::Hou, 0.530, 0.560, 0.300),
    ("Jalen Green", Team::Hou, 0.420, 0.480, 0.330),
    ("Tyrese Haliburton", Team::Ind, 0.475, 0.530, 0.375),
    ("Pascal Siakam", Team::Ind, 0.525, 0.575, 0.385),
    ("Kawhi Leonard", Team::Lac, 0.510, 0.540, 0.410),
    ("James Harden", Team::Lac, 0.425, 0.480, 0.355),
    ("LeBron James", Team::Lal, 0.520, 0.590, 0.385),
    ("Anthony Davis", Team::Lal, 0.555, 0.580, 0.270),
    ("Ja Morant", Team::Mem, 0.460, 0.500, 0.310),
    ("Jaren Jackson Jr.", Team::Mem, 0.475, 0.520, 0.340),
    ("Bam Adebayo", Team::Mia, 0.520, 0.530, 0.330),
    ("Tyler Herro", Team::Mia, 0.445, 0.490, 0.385),
    ("Giannis Antetokounmpo", Team::Mil, 0.610, 0.650, 0.280),
    ("Damian Lillard", Team::Mil, 0.430, 0.490, 0.360),
    ("Anthony Edwards", Team::Min, 0.445, 0.480, 0.370),
    ("Rudy Gobert", Team::Min, 0.660, 0.665, 0.000),
    ("Zion Williamson", Team::Nop, 0.570, 0.590, 0.330),
    ("CJ McCollum", Team::Nop, 0.445, 0.480, 0.390),
    ("Jalen Brunson", Team::Nyk, 0.480, 0.520, 0.400),
    ("Karl-Anthony Towns", Team::Nyk, 0.500, 0.540, 0.410),
    ("Shai Gilgeous-Alexander", Team::Okc, 0.535, 0.570, 0.350),
    ("Chet Holmgren", Team::Okc, 0.530, 0.620, 0.370),
    ("Paolo Banchero", Team::Orl, 0.455, 0.500, 0.340),
    ("Franz Wagner", Team::Orl, 0.480, 0.540, 0.300),
    ("Joel Embiid", Team::Phi, 0.530, 0.560, 0.380),
    ("Tyrese Maxey", Team::Phi, 0.450, 0.490, 0.370),
    ("Devin Booker", Team::Phx, 0.490, 0.530, 0.360),
    ("Kevin Durant", Team::Phx, 0.525, 0.560, 0.415),
    ("Anfernee Simons", Team::Por, 0.430, 0.470, 0.385),
    ("Deandre Ayton", Team::Por, 0.570, 0.580, 0.000),
    ("Domantas Sabonis", Team::Sac, 0.590, 0.610, 0.370),
    ("De'Aaron Fox", Team::Sac, 0.465, 0.520, 0.330),
    ("Victor Wembanyama", Team::Sas, 0.465, 0.540, 0.325),
    ("Devin Vassell", Team::Sas, 0.445, 0.490, 0.370),
    ("Scottie Barnes", Team::Tor, 0.475, 0.530, 0.340),
    ("RJ Barrett", Team::Tor, 0.470, 0.520, 0.350),
    ("Lauri Markkanen", Team::Uta, 0.480, 0.560, 0.390),
    ("Collin Sexton", Team::Uta, 0.480, 0.520, 0.390),
    ("Jordan Poole", Team::Was, 0.410, 0.460, 0.330),
    ("Kyle Kuzma", Team::Was, 0.455, 0.510, 0.330),
];

fn lean_by_percentage(two_pct: f64, three_pct: f64) -> FirstMade {
    FirstMade::from_counts(two_pct, three_pct, false)
}

/// The bundled roster, team-ranked and ordered like a live report.
pub fn seed_records() -> Vec<ReportRecord> {
    let profiles = SEED_ROSTER
        .iter()
        .map(|&(name, team, fg_pct, two_pct, three_pct)| ShotProfile {
            name: name.to_string(),
            team,
            rank: None,
            fg_pct,
            two_pct,
            three_pct,
            made2_likelihood_pct: 0.0,
            first_made_weighted: lean_by_percentage(two_pct, three_pct),
            mode: ReconcileMode::Direct,
        })
        .collect();
    aggregate(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_covers_every_team() {
        let records = seed_records();
        let teams: HashSet<Team> = records.iter().map(|r| r.team).collect();
        assert_eq!(teams.len(), Team::ALL.len());
    }

    #[test]
    fn test_seed_records_are_team_ranked() {
        let records = seed_records();
        let gobert = records.iter().find(|r| r.name == "Rudy Gobert").unwrap();
        assert_eq!(gobert.team_rank, 1);
        assert_eq!(gobert.team_total_players, 2);
        assert_eq!(gobert.first_made_weighted.to_string(), "Made 2");
        assert!(records.iter().all(|r| r.rank.is_none()));
    }

    #[test]
    fn test_seed_keeps_roster_order_without_ranks() {
        let records = seed_records();
        assert_eq!(records.first().map(|r| r.name.as_str()), Some("Trae Young"));
        assert_eq!(records.len(), SEED_ROSTER.len());
    }
}
