use super::*;
use bracket_core::{Candidate, CandidateId, TournamentResult};

fn result_for(id: &str) -> TournamentResult {
    TournamentResult {
        winner: Candidate::new(id, "Winner", ""),
    }
}

fn sample_record() -> GameRecord {
    GameRecord {
        bracket_size: 2,
        winner: Candidate::new("7", "Bulgogi", "/img/7.jpg"),
        picks: vec![PickRecord {
            round: "Final".to_string(),
            stage: 2,
            winner: CandidateId::new("7"),
            loser: Some(CandidateId::new("3")),
        }],
        results_route: "/worldcup/game-page/result?winnerId=7".to_string(),
    }
}

#[test]
fn route_carries_winner_id() {
    let handoff = ResultHandoff::default();
    assert_eq!(
        handoff.route(&result_for("64f1c2")),
        "/worldcup/game-page/result?winnerId=64f1c2"
    );
}

#[test]
fn route_percent_encodes_the_id() {
    let handoff = ResultHandoff::new("/results");
    assert_eq!(
        handoff.route(&result_for("a b&c=d")),
        "/results?winnerId=a%20b%26c%3Dd"
    );
}

#[test]
fn report_lists_every_pick() {
    let report = sample_record().generate_report();
    assert!(report.contains("Recipe World-Cup (2 candidates)"));
    assert!(report.contains("Final"));
    assert!(report.contains("Winner: Bulgogi (7) after 1 picks"));
    assert!(report.contains("winnerId=7"));
}

#[test]
fn json_lists_winner_size_picks_and_route() {
    let json: serde_json::Value = serde_json::from_str(&sample_record().to_json().unwrap()).unwrap();

    assert_eq!(json["bracket_size"], 2);
    assert_eq!(json["winner"]["id"], "7");
    assert_eq!(json["winner"]["title"], "Bulgogi");
    assert_eq!(json["picks"].as_array().unwrap().len(), 1);
    assert_eq!(json["picks"][0]["loser"], "3");
    assert_eq!(json["results_route"], "/worldcup/game-page/result?winnerId=7");
}

#[test]
fn record_survives_a_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    let record = sample_record();

    record.save(&path).unwrap();
    assert_eq!(GameRecord::load(&path).unwrap(), record);
}
