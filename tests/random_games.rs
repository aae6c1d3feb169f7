//! Invariants checked over many seeded random games.

use std::collections::HashSet;
use std::thread;

use go_rules::board::{Cell, Color};
use go_rules::config::GameConfig;
use go_rules::group::analyze;
use go_rules::playout::{max_game_len, play_random_game};
use go_rules::position::apply_move;
use go_rules::rules::is_legal;

fn config(size: usize) -> GameConfig {
    GameConfig { board_size: size, komi: 5.5 }
}

#[test]
fn test_history_tracks_every_move() {
    for seed in 0..10 {
        let record = play_random_game(&config(5), seed, max_game_len(5));
        assert_eq!(record.state.history().len(), record.moves.len());
        assert_eq!(record.state.history().last(), Some(&record.state.board.serialize()));
    }
}

#[test]
fn test_no_position_repeats_after_placement() {
    for seed in 0..10 {
        let record = play_random_game(&config(5), seed, max_game_len(5));
        let mut seen = HashSet::new();
        for ((_, mv), key) in record.moves.iter().zip(record.state.history()) {
            if !mv.is_pass() {
                assert!(!seen.contains(key), "seed {seed}: {mv} repeated a position");
            }
            seen.insert(key.clone());
        }
    }
}

#[test]
fn test_stone_accounting() {
    // Stones placed = stones on board + stones lost to the opponent.
    for seed in 0..10 {
        let record = play_random_game(&config(7), seed, max_game_len(7));
        let placed = |color: Color| {
            record
                .moves
                .iter()
                .filter(|(c, mv)| *c == color && !mv.is_pass())
                .count()
        };
        let board = &record.state.board;
        let caps = record.state.captures;
        assert_eq!(placed(Color::Black), board.count(Cell::Black) + caps.white as usize);
        assert_eq!(placed(Color::White), board.count(Cell::White) + caps.black as usize);
    }
}

#[test]
fn test_replay_is_legal_and_boards_stay_clean() {
    let record = play_random_game(&config(6), 99, max_game_len(6));
    let mut state = config(6).new_game();
    for &(color, mv) in &record.moves {
        assert!(is_legal(&state, mv, color), "{color} {mv} should be legal on replay");
        apply_move(&mut state, mv, color);

        let before = state.board.clone();
        for (r, c) in before.points() {
            if let Some(stone) = before.get(r, c).color() {
                let group = analyze(&state.board, r, c, stone);
                assert!(!group.is_captured(), "dead block left at ({r},{c})");
            }
        }
        assert_eq!(state.board, before);
    }
    assert_eq!(state.board, record.state.board);
}

#[test]
fn test_finished_games_have_a_winner() {
    for seed in 0..5 {
        let record = play_random_game(&config(5), seed, max_game_len(5));
        if record.result.over {
            let expected = if record.score > 0.0 { Color::Black } else { Color::White };
            assert_eq!(record.result.winner, Some(expected));
        }
    }
}

#[test]
fn test_independent_games_on_threads() {
    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| s.spawn(move || play_random_game(&config(5), seed, max_game_len(5))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (seed, record) in results.iter().enumerate() {
        let again = play_random_game(&config(5), seed as u64, max_game_len(5));
        assert_eq!(record.moves, again.moves);
    }
}
