use super::*;
use crate::{Candidate, FirstPicker, Picker, SecondPicker};

fn numbered(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| Candidate::new(format!("r{i}"), format!("Recipe {i}"), ""))
        .collect()
}

fn play_out(bracket: &mut Bracket, picker: &mut dyn Picker) {
    while let Some(state) = bracket.state() {
        let chosen = picker.choose(&state.view()).unwrap();
        bracket.pick(&chosen).unwrap();
    }
}

#[test]
fn sixteen_candidates_finish_after_fifteen_picks() {
    let mut bracket = Bracket::new(BracketState::from_ordered(numbered(16)).unwrap());
    play_out(&mut bracket, &mut FirstPicker);

    assert!(bracket.is_finished());
    assert_eq!(bracket.total_picks(), 15);
    // First-offered always wins, so the very first candidate survives
    assert_eq!(bracket.result().unwrap().winner_id().as_str(), "r0");
}

#[test]
fn second_picker_crowns_the_last_candidate() {
    let mut bracket = Bracket::new(BracketState::from_ordered(numbered(8)).unwrap());
    play_out(&mut bracket, &mut SecondPicker);

    assert_eq!(bracket.total_picks(), 7);
    assert_eq!(bracket.result().unwrap().winner_id().as_str(), "r7");
}

#[test]
fn pick_after_terminal_is_rejected_and_result_kept() {
    let mut bracket = Bracket::new(BracketState::from_ordered(numbered(2)).unwrap());
    bracket.pick(&"r1".into()).unwrap();
    let result = bracket.result().cloned().unwrap();

    let err = bracket.pick(&"r0".into()).unwrap_err();
    assert!(matches!(err, BracketError::InvalidTransition(_)));
    assert_eq!(bracket.result(), Some(&result));
    assert_eq!(bracket.total_picks(), 1);
    assert_eq!(bracket.result().unwrap().winner_id().as_str(), "r1");
}

#[test]
fn rejected_pick_does_not_advance() {
    let mut bracket = Bracket::new(BracketState::from_ordered(numbered(4)).unwrap());
    let before = bracket.phase().clone();

    assert!(bracket.pick(&"r3".into()).is_err());
    assert_eq!(bracket.phase(), &before);
    assert_eq!(bracket.total_picks(), 0);
}

#[test]
fn single_finalist_game_takes_one_pick() {
    let finalist = Candidate::new("E", "Recipe E", "");
    let mut bracket = Bracket::new(BracketState::single_finalist(finalist));

    match bracket.pick(&"E".into()).unwrap() {
        Phase::Terminal(result) => assert_eq!(result.winner_id().as_str(), "E"),
        Phase::AwaitingPick(_) => panic!("single finalist should end the game"),
    }
    assert!(bracket.pick(&"E".into()).is_err());
}
