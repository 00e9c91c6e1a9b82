use crate::app::Ply;
use crate::record::Move;

/// Standard initial position, shown before any move has been played
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Returns the FEN to display after `ply` half-moves.
///
/// `ply` is bounded by the move count it was built from, so the lookup
/// always lands on a recorded move; the starting position is the fallback
/// for ply zero.
#[must_use]
pub fn position_at(moves: &[Move], ply: Ply) -> &str {
    ply.last_played()
        .and_then(|index| moves.get(index))
        .map_or(STARTING_FEN, |mv| mv.fen_after.as_str())
}
