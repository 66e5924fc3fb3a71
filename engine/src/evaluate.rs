/*
  Corvid, a chess engine kernel.
  Copyright (C) 2024 The Corvid Authors (see AUTHORS.md file)

  Corvid is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Corvid is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Static evaluation of a board: material balance plus piece-square tables,
//! reported from the perspective of the side to move.
//!
//! This is the default evaluator the search uses, but it is not privileged:
//! `search::search` takes an `Evaluator` function pointer as a parameter, so
//! any function matching that signature (e.g. a neural value head) can be
//! passed in its place without touching the search itself.

use corvid_base::{Board, Color, Eval};

use crate::{material, pst};

/// The signature every pluggable evaluator must match: a pure function from
/// board state to a centipawn score from the side-to-move's perspective.
pub type Evaluator = fn(&Board) -> Eval;

/// Evaluate `b` from White's perspective: positive favors White, negative
/// favors Black.
#[must_use]
pub fn white_perspective(b: &Board) -> Eval {
    material::evaluate(b) + pst::pst_evaluate(b)
}

/// Evaluate `b` from the perspective of the side to move, as the search
/// expects: positive always favors the player on move.
#[must_use]
pub fn evaluate(b: &Board) -> Eval {
    let score = white_perspective(b);
    match b.player {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_base::Board;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(evaluate(&Board::default()), Eval::DRAW);
    }

    #[test]
    fn mirrored_positions_negate() {
        let white_up_a_queen =
            Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let black_up_a_queen =
            Board::from_fen("3qk3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(
            white_perspective(&white_up_a_queen),
            -white_perspective(&black_up_a_queen)
        );
    }

    #[test]
    fn side_to_move_perspective_flips() {
        let b_white = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let b_black = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").unwrap();
        assert_eq!(evaluate(&b_white), -evaluate(&b_black));
    }
}
