//! go-rules: the rules of Go as a small, self-contained state machine.
//!
//! The crate validates and applies moves (captures, suicide, positional
//! superko), scores positions by area plus prisoners, and detects the end
//! of a game. It also exposes the hooks an external evaluator needs:
//! three-plane encoding, perspective flipping and flat action indices.
//!
//! ## Modules
//!
//! - [`board`] - Grid, colors and the canonical board key
//! - [`group`] - Block and liberty flood fill
//! - [`capture`] - Removal of blocks without liberties
//! - [`rules`] - Move legality
//! - [`position`] - Game state and move application
//! - [`score`] - Scoring and termination
//! - [`encode`] - Tensor encoding and action indices
//! - [`config`] - Board size and komi settings
//! - [`playout`] - Seeded random games
//! - [`constants`] - Defaults and rule thresholds
//!
//! ## Example
//!
//! ```
//! use go_rules::board::Color;
//! use go_rules::position::{apply_move, new_game, Move};
//! use go_rules::rules::is_legal;
//! use go_rules::score::{compute_score, is_terminal};
//!
//! let mut game = new_game(9, 5.5);
//! let mv = Move::Place(4, 4);
//! if is_legal(&game, mv, Color::Black) {
//!     apply_move(&mut game, mv, Color::Black);
//! }
//! assert!(!is_terminal(&game, mv).over);
//! assert_eq!(compute_score(&game), 1.0 - 5.5);
//! ```

pub mod board;
pub mod capture;
pub mod config;
pub mod constants;
pub mod encode;
pub mod group;
pub mod playout;
pub mod position;
pub mod rules;
pub mod score;
