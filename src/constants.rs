//! Game defaults and rule thresholds.
//!
//! Board size is chosen at runtime (see [`crate::config::GameConfig`]);
//! the values here are defaults and fixed rule parameters.

// =============================================================================
// Game Defaults
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Default komi (compensation points for White).
pub const DEFAULT_KOMI: f64 = 5.5;

/// Smallest supported board.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board. Vertex letters run out past 25 columns.
pub const MAX_BOARD_SIZE: usize = 25;

// =============================================================================
// Rule Parameters
// =============================================================================

/// The board counts as full once fewer than this many empty points remain.
///
/// This is a loose approximation, not a strict zero-empty check.
pub const FULL_BOARD_EMPTY_THRESHOLD: usize = 3;

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

// =============================================================================
// Encoding
// =============================================================================

/// Number of planes produced by [`crate::encode::encode`].
pub const ENCODED_PLANES: usize = 3;

/// Plane index for White stones.
pub const PLANE_WHITE: usize = 0;

/// Plane index for empty points.
pub const PLANE_EMPTY: usize = 1;

/// Plane index for Black stones.
pub const PLANE_BLACK: usize = 2;

// =============================================================================
// Board Text
// =============================================================================

/// Column letters used in vertex notation (no 'I').
pub const COLUMN_LETTERS: &[u8; MAX_BOARD_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Character for a Black stone in serialized boards and dumps.
pub const CHAR_BLACK: char = 'X';

/// Character for a White stone in serialized boards and dumps.
pub const CHAR_WHITE: char = 'O';

/// Character for an empty point in serialized boards and dumps.
pub const CHAR_EMPTY: char = '.';
