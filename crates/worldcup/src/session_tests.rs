use super::*;
use crate::pickers::{PromptPicker, RandomPicker};
use bracket_core::{BracketError, BracketState, BracketView, Candidate, CandidateId, FirstPicker, Picker};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

fn numbered(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| Candidate::new(format!("r{i}"), format!("Recipe {i}"), ""))
        .collect()
}

/// Answers from a fixed list of ids, then gives up
struct ScriptedPicker {
    answers: std::vec::IntoIter<&'static str>,
}

impl ScriptedPicker {
    fn new(answers: Vec<&'static str>) -> Self {
        Self {
            answers: answers.into_iter(),
        }
    }
}

impl Picker for ScriptedPicker {
    fn choose(&mut self, _view: &BracketView<'_>) -> Option<CandidateId> {
        self.answers.next().map(CandidateId::from)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[test]
fn four_candidate_game_is_recorded() {
    let state = BracketState::from_ordered(
        ["A", "B", "C", "D"]
            .iter()
            .map(|id| Candidate::new(*id, format!("Recipe {id}"), ""))
            .collect(),
    )
    .unwrap();
    let mut picker = ScriptedPicker::new(vec!["A", "D", "A"]);

    let record = quick_game(state, &mut picker).unwrap();

    assert_eq!(record.bracket_size, 4);
    assert_eq!(record.winner.id.as_str(), "A");
    assert_eq!(record.total_picks(), 3);
    assert_eq!(record.results_route, "/worldcup/game-page/result?winnerId=A");

    let rounds: Vec<&str> = record.picks.iter().map(|p| p.round.as_str()).collect();
    assert_eq!(rounds, vec!["Round of 4 (1/2)", "Round of 4 (2/2)", "Final"]);
    assert_eq!(record.picks[1].loser, Some(CandidateId::new("C")));
}

#[test]
fn picker_giving_up_aborts_the_game() {
    let state = BracketState::from_ordered(numbered(4)).unwrap();
    let mut picker = ScriptedPicker::new(vec!["r0"]);

    let err = quick_game(state, &mut picker).unwrap_err();
    assert!(matches!(err, WorldcupError::Aborted));
}

#[test]
fn picking_an_undisplayed_candidate_fails() {
    let state = BracketState::from_ordered(numbered(4)).unwrap();
    let mut picker = ScriptedPicker::new(vec!["r3"]);

    let err = quick_game(state, &mut picker).unwrap_err();
    assert!(matches!(
        err,
        WorldcupError::Bracket(BracketError::InvalidTransition(_))
    ));
}

#[test]
fn play_shuffles_and_truncates_the_source() {
    let session = Session::new(SessionConfig {
        stage: 8,
        ..Default::default()
    });
    let pool = numbered(30);
    let record = session
        .play(&pool, &mut StdRng::seed_from_u64(11), &mut FirstPicker)
        .unwrap();

    assert_eq!(record.bracket_size, 8);
    assert_eq!(record.total_picks(), 7);
    assert!(pool.contains(&record.winner));
}

#[test]
fn play_reports_short_pools() {
    let session = Session::new(SessionConfig::default());
    let err = session
        .play(&numbered(10), &mut StdRng::seed_from_u64(1), &mut FirstPicker)
        .unwrap_err();
    assert!(matches!(
        err,
        WorldcupError::Bracket(BracketError::InsufficientCandidates {
            requested: 16,
            available: 10
        })
    ));
}

#[test]
fn single_finalist_game_takes_one_pick() {
    let state = BracketState::single_finalist(Candidate::new("E", "Recipe E", ""));
    let record = quick_game(state, &mut FirstPicker).unwrap();

    assert_eq!(record.total_picks(), 1);
    assert_eq!(record.picks[0].round, "Winner");
    assert_eq!(record.picks[0].loser, None);
    assert_eq!(record.winner.id.as_str(), "E");
}

#[test]
fn prompt_picker_reads_choices_and_skips_bad_input() {
    let state = BracketState::from_ordered(numbered(2)).unwrap();
    let input = Cursor::new("x\n3\n2\n");
    let mut output = Vec::new();

    let record = {
        let mut picker = PromptPicker::new(input, &mut output);
        quick_game(state, &mut picker).unwrap()
    };

    assert_eq!(record.winner.id.as_str(), "r1");
    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains("== Final =="));
    assert!(shown.contains("[1] Recipe 0"));
    assert!(shown.contains("Not a choice: \"x\""));
    assert!(shown.contains("Not a choice: \"3\""));
}

#[test]
fn prompt_picker_quits_on_q_or_eof() {
    for input in ["q\n", ""] {
        let state = BracketState::from_ordered(numbered(2)).unwrap();
        let mut picker = PromptPicker::new(Cursor::new(input), Vec::<u8>::new());
        let err = quick_game(state, &mut picker).unwrap_err();
        assert!(matches!(err, WorldcupError::Aborted));
    }
}

#[test]
fn random_picker_always_picks_a_displayed_candidate() {
    let state = BracketState::from_ordered(numbered(16)).unwrap();
    let mut picker = RandomPicker::new(StdRng::seed_from_u64(5));
    let record = quick_game(state, &mut picker).unwrap();

    assert_eq!(record.total_picks(), 15);
    for pick in &record.picks {
        assert_ne!(Some(&pick.winner), pick.loser.as_ref());
    }
}
