//! Integration tests for the tournament lifecycle: roster, generation, scoring and persistence shape.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament_organizer::{
    generate_matches, record_result, MatchStatus, Score, Tournament, TournamentError,
    TournamentFormat, TournamentStatus,
};

fn tournament_with_teams(format: TournamentFormat, n: usize) -> Tournament {
    let mut t = Tournament::new("Copa", "football", format, n.max(2), 3).unwrap();
    for i in 1..=n {
        t.add_team(&format!("Team {i}")).unwrap();
    }
    t
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

#[test]
fn new_validates_settings() {
    assert_eq!(
        Tournament::new("  ", "football", TournamentFormat::Knockout, 8, 4),
        Err(TournamentError::EmptyName)
    );
    assert_eq!(
        Tournament::new("Cup", "football", TournamentFormat::Knockout, 1, 4),
        Err(TournamentError::NotEnoughParticipants)
    );
    assert_eq!(
        Tournament::new("Cup", "football", TournamentFormat::Groups, 8, 1),
        Err(TournamentError::InvalidGroupSize(1))
    );
    // Group size only matters for groups.
    assert!(Tournament::new("Cup", "football", TournamentFormat::Knockout, 8, 1).is_ok());
}

#[test]
fn new_tournament_starts_upcoming_and_empty() {
    let t = Tournament::new(" Spring Cup ", "", TournamentFormat::Mixed, 8, 4).unwrap();
    assert_eq!(t.name, "Spring Cup");
    assert_eq!(t.sport, "football");
    assert_eq!(t.status, TournamentStatus::Upcoming);
    assert!(t.teams.is_empty());
    assert!(t.matches.is_empty());
    assert!(t.winner.is_none());
    assert!(t.champion().is_none());
}

#[test]
fn add_team_trims_and_rejects_duplicates() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 0);
    t.add_team("  Lions ").unwrap();
    assert_eq!(t.teams, vec!["Lions".to_string()]);
    assert_eq!(
        t.add_team("LIONS"),
        Err(TournamentError::DuplicateParticipant("LIONS".to_string()))
    );
    assert_eq!(t.add_team("   "), Err(TournamentError::EmptyName));
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn remove_team_by_name() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 3);
    t.remove_team("team 2").unwrap();
    assert_eq!(t.teams, vec!["Team 1".to_string(), "Team 3".to_string()]);
    assert_eq!(
        t.remove_team("Team 9"),
        Err(TournamentError::ParticipantNotFound("Team 9".to_string()))
    );
}

#[test]
fn generate_needs_two_teams_and_leaves_state_untouched() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 1);
    assert_eq!(
        generate_matches(&mut t, &mut rng()),
        Err(TournamentError::NotEnoughParticipants)
    );
    assert_eq!(t.status, TournamentStatus::Upcoming);
    assert!(t.matches.is_empty());
}

#[test]
fn generate_starts_the_tournament_once() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 6);
    generate_matches(&mut t, &mut rng()).unwrap();
    assert_eq!(t.status, TournamentStatus::Active);
    assert_eq!(t.matches.len(), 5);

    assert_eq!(generate_matches(&mut t, &mut rng()), Err(TournamentError::InvalidState));
    assert_eq!(t.add_team("Late"), Err(TournamentError::InvalidState));
    assert_eq!(t.remove_team("Team 1"), Err(TournamentError::InvalidState));
}

#[test]
fn groups_use_the_configured_group_size() {
    let mut t = tournament_with_teams(TournamentFormat::Groups, 6);
    generate_matches(&mut t, &mut rng()).unwrap();
    assert_eq!(t.matches.len(), 6);
    assert_eq!(t.matches.by_group().len(), 2);
}

#[test]
fn scoring_before_generation_is_rejected() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 4);
    assert_eq!(
        record_result(&mut t, "match_r1_0", Score::new(1, 0)),
        Err(TournamentError::InvalidState)
    );
}

#[test]
fn deciding_the_final_completes_the_tournament() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 4);
    generate_matches(&mut t, &mut rng()).unwrap();

    record_result(&mut t, "match_r1_0", Score::new(3, 0)).unwrap();
    assert_eq!(t.status, TournamentStatus::Active);
    record_result(&mut t, "match_r1_1", Score::new(0, 3)).unwrap();
    assert_eq!(t.status, TournamentStatus::Active);

    let outcome = record_result(&mut t, "match_r2_0", Score::new(2, 1)).unwrap();
    let final_match = t.matches.get("match_r2_0").unwrap();
    assert_eq!(final_match.status, MatchStatus::Completed);
    assert_eq!(t.status, TournamentStatus::Completed);
    assert_eq!(t.winner, final_match.winner);
    assert_eq!(outcome.champion, final_match.winner);
    assert_eq!(t.champion(), final_match.winner.as_deref());
}

#[test]
fn final_corrected_to_a_draw_reopens_the_tournament() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 2);
    generate_matches(&mut t, &mut rng()).unwrap();
    record_result(&mut t, "match_r1_0", Score::new(1, 0)).unwrap();
    assert_eq!(t.status, TournamentStatus::Completed);

    record_result(&mut t, "match_r1_0", Score::new(1, 1)).unwrap();
    assert_eq!(t.status, TournamentStatus::Active);
    assert!(t.winner.is_none());
}

#[test]
fn groups_tournament_stays_active() {
    let mut t = tournament_with_teams(TournamentFormat::Groups, 3);
    generate_matches(&mut t, &mut rng()).unwrap();
    let ids: Vec<String> = t.matches.iter().map(|m| m.id.clone()).collect();
    for id in ids {
        record_result(&mut t, &id, Score::new(2, 0)).unwrap();
    }
    assert!(t.matches.iter().all(|m| m.is_completed()));
    assert_eq!(t.status, TournamentStatus::Active);
    assert!(t.winner.is_none());
}

#[test]
fn persisted_shape_uses_camel_case() {
    let mut t = tournament_with_teams(TournamentFormat::Knockout, 3);
    generate_matches(&mut t, &mut rng()).unwrap();
    let opener = t.matches.get("match_r1_1").unwrap().clone();
    record_result(&mut t, &opener.id, Score::new(1, 1)).unwrap();

    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["format"], "knockout");
    assert_eq!(json["status"], "active");
    assert_eq!(json["teamsPerGroup"], 3);
    assert_eq!(json["teamsCount"], 3);
    let first = &json["matches"][0];
    assert_eq!(first["id"], "match_r1_1");
    assert_eq!(first["status"], "in_progress");
    assert_eq!(first["nextMatchId"], "match_r2_0");
    assert_eq!(first["score1"], 1);
    assert!(first.get("team1").is_some());
    assert!(first.get("winner").is_none());
    assert!(first.get("group").is_none());

    let back: Tournament = serde_json::from_value(json).unwrap();
    assert_eq!(back, t);
}

#[test]
fn stored_match_ids_must_be_unique() {
    let t = tournament_with_teams(TournamentFormat::Groups, 2);
    let mut json = serde_json::to_value(&t).unwrap();
    let m = serde_json::json!({ "id": "m1", "team1": "Team 1", "team2": "Team 2" });
    json["matches"] = serde_json::json!([m.clone(), m]);
    assert!(serde_json::from_value::<Tournament>(json).is_err());
}
