//! Every winning line, for both marks, through the rules and the engine.

use tictactoe::{Board, GameEngine, Line, Mark, MoveResult, Outcome, Position, Status};
use strum::IntoEnumIterator;
use tictactoe_engine::rules;

/// Picks filler cells for the losing mark: off the winning line and never
/// completing a line of its own.
fn filler(line: Line, count: usize) -> Vec<Position> {
    let mut board = Board::new();
    let mut picked = Vec::new();
    for pos in Position::ALL {
        if picked.len() == count {
            break;
        }
        if line.contains(pos) {
            continue;
        }
        let mut trial = board.clone();
        trial.place_mark(pos, Mark::X);
        if rules::check_winner(&trial).is_none() {
            board = trial;
            picked.push(pos);
        }
    }
    assert_eq!(picked.len(), count, "no safe filler for {line:?}");
    picked
}

#[test]
fn test_rules_find_every_line_for_both_marks() {
    for line in Line::ALL {
        for mark in Mark::iter() {
            let mut board = Board::new();
            for pos in line.positions() {
                board.place_mark(pos, mark);
            }
            assert_eq!(rules::winning_line(&board), Some((line, mark)));
            assert_eq!(rules::check_winner(&board), Some(mark));
            assert!(!rules::is_tie(&board));
        }
    }
}

#[test]
fn test_engine_declares_x_win_on_every_line() {
    for line in Line::ALL {
        let mut engine = GameEngine::new();
        engine.start(None, None);
        let xs = line.positions();
        let os = filler(line, 2);

        let sequence = [xs[0], os[0], xs[1], os[1], xs[2]];
        for (i, pos) in sequence.into_iter().enumerate() {
            assert_eq!(engine.play(pos), MoveResult::Accepted, "{line:?} move {i}");
        }
        assert_eq!(engine.status(), Status::Finished, "{line:?}");
        assert_eq!(engine.outcome(), Some(Outcome::Win(Mark::X)), "{line:?}");
        assert_eq!(engine.winning_line(), Some(line));
    }
}

#[test]
fn test_engine_declares_o_win_on_every_line() {
    for line in Line::ALL {
        let mut engine = GameEngine::new();
        engine.start(None, None);
        let os = line.positions();
        let xs = filler(line, 3);

        let sequence = [xs[0], os[0], xs[1], os[1], xs[2], os[2]];
        for (i, pos) in sequence.into_iter().enumerate() {
            assert_eq!(engine.play(pos), MoveResult::Accepted, "{line:?} move {i}");
        }
        assert_eq!(engine.outcome(), Some(Outcome::Win(Mark::O)), "{line:?}");
        assert_eq!(engine.winner().map(|p| *p.mark()), Some(Mark::O));
    }
}
