use crate::core::reconcile::ShotProfile;
use crate::domain::model::ReportRecord;
use crate::domain::team::Team;
use std::collections::BTreeMap;

/// Ranks players within their team by FG% (descending, ties in input
/// order) and orders the result by overall rank, unranked players last.
pub fn aggregate(profiles: Vec<ShotProfile>) -> Vec<ReportRecord> {
    let mut by_team: BTreeMap<Team, Vec<usize>> = BTreeMap::new();
    for (idx, profile) in profiles.iter().enumerate() {
        by_team.entry(profile.team).or_default().push(idx);
    }

    let mut team_ranks = vec![(0usize, 0usize); profiles.len()];
    for members in by_team.values_mut() {
        // sort_by is stable, so equal FG% keeps input order.
        members.sort_by(|&a, &b| profiles[b].fg_pct.total_cmp(&profiles[a].fg_pct));
        let total = members.len();
        for (position, &idx) in members.iter().enumerate() {
            team_ranks[idx] = (position + 1, total);
        }
    }

    let mut records: Vec<ReportRecord> = profiles
        .into_iter()
        .zip(team_ranks)
        .map(|(profile, (team_rank, team_total_players))| ReportRecord {
            name: profile.name,
            team: profile.team,
            rank: profile.rank,
            fg_pct: profile.fg_pct,
            two_pct: profile.two_pct,
            three_pct: profile.three_pct,
            made2_likelihood_pct: profile.made2_likelihood_pct,
            first_made_weighted: profile.first_made_weighted,
            team_rank,
            team_total_players,
        })
        .collect();

    order_by_rank(&mut records);
    records
}

pub fn order_by_rank(records: &mut [ReportRecord]) {
    records.sort_by_key(|record| (record.rank.is_none(), record.rank));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reconcile::ReconcileMode;
    use crate::domain::model::FirstMade;

    fn profile(name: &str, team: Team, rank: Option<u32>, fg_pct: f64) -> ShotProfile {
        ShotProfile {
            name: name.to_string(),
            team,
            rank,
            fg_pct,
            two_pct: 0.0,
            three_pct: 0.0,
            made2_likelihood_pct: 0.0,
            first_made_weighted: FirstMade::from_counts(1.0, 1.0, false),
            mode: ReconcileMode::Direct,
        }
    }

    fn find<'a>(records: &'a [ReportRecord], name: &str) -> &'a ReportRecord {
        records.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_team_rank_ties_keep_input_order() {
        let records = aggregate(vec![
            profile("First", Team::Den, Some(1), 0.50),
            profile("Second", Team::Den, Some(2), 0.50),
            profile("Third", Team::Den, Some(3), 0.40),
        ]);

        let ranks: Vec<usize> = records.iter().map(|r| r.team_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(records.iter().all(|r| r.team_total_players == 3));
    }

    #[test]
    fn test_team_ranks_are_per_team() {
        let records = aggregate(vec![
            profile("Low Bos", Team::Bos, Some(4), 0.41),
            profile("Only Lal", Team::Lal, Some(2), 0.38),
            profile("High Bos", Team::Bos, Some(9), 0.55),
        ]);

        assert_eq!(find(&records, "High Bos").team_rank, 1);
        assert_eq!(find(&records, "Low Bos").team_rank, 2);
        assert_eq!(find(&records, "Low Bos").team_total_players, 2);
        assert_eq!(find(&records, "Only Lal").team_rank, 1);
        assert_eq!(find(&records, "Only Lal").team_total_players, 1);
    }

    #[test]
    fn test_output_sorted_by_rank_with_unranked_last() {
        let records = aggregate(vec![
            profile("Unranked A", Team::Sac, None, 0.45),
            profile("Rank 1000", Team::Sac, Some(1000), 0.40),
            profile("Rank 3", Team::Tor, Some(3), 0.50),
            profile("Unranked B", Team::Tor, None, 0.44),
            profile("Rank 1", Team::Uta, Some(1), 0.47),
        ]);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Rank 1", "Rank 3", "Rank 1000", "Unranked A", "Unranked B"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let records = aggregate(vec![profile("Key Check", Team::Phx, None, 0.5)]);
        let value = serde_json::to_value(&records[0]).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "name",
            "team",
            "rank",
            "fg_pct",
            "two_pct",
            "three_pct",
            "made2_likelihood_pct",
            "first_made_weighted",
            "team_rank",
            "team_total_players",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(obj["team"], "PHX");
        assert!(obj["rank"].is_null());
        assert_eq!(obj["first_made_weighted"], "Tied");
    }
}
