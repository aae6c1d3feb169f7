//! Random playouts.
//!
//! Plays uniformly random legal moves until the game ends or a move limit
//! is hit. Useful for demos and for exercising the rules over many
//! positions; it is not a search.

use tracing::debug;

use crate::board::Color;
use crate::config::GameConfig;
use crate::position::{GameState, Move, apply_move};
use crate::rules::check_move;
use crate::score::{Terminal, compute_score, is_terminal};

/// Default move cap: three times the board area, to allow for captures
/// and refills.
pub fn max_game_len(size: usize) -> usize {
    size * size * 3
}

/// A finished (or capped) random game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<(Color, Move)>,
    pub state: GameState,
    pub result: Terminal,
    pub score: f64,
}

/// Pick a random legal placement for `color`, or pass if there is none.
pub fn random_legal_move(state: &GameState, color: Color, rng: &mut fastrand::Rng) -> Move {
    let mut candidates: Vec<Move> = state
        .board
        .points()
        .filter(|&(r, c)| state.board.get(r, c).is_empty())
        .map(Move::from)
        .collect();

    // Partial Fisher-Yates: stop at the first legal candidate.
    let n = candidates.len();
    for i in 0..n {
        let j = rng.usize(i..n);
        candidates.swap(i, j);
        if check_move(state, candidates[i], color).is_ok() {
            return candidates[i];
        }
    }
    Move::Pass
}

/// Play a seeded random game from an empty board, Black first.
pub fn play_random_game(config: &GameConfig, seed: u64, max_moves: usize) -> GameRecord {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut state = config.new_game();
    let mut color = Color::Black;
    let mut moves = Vec::new();
    let mut result = Terminal {
        winner: None,
        over: false,
    };

    while state.move_count() < max_moves {
        let mv = random_legal_move(&state, color, &mut rng);
        apply_move(&mut state, mv, color);
        moves.push((color, mv));
        result = is_terminal(&state, mv);
        if result.over {
            break;
        }
        color = color.opponent();
    }

    let score = compute_score(&state);
    debug!(seed, moves = moves.len(), score, over = result.over, "random game finished");
    GameRecord {
        moves,
        state,
        result,
        score,
    }
}
