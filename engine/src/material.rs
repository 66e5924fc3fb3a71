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

//! Material values for each piece.
//!
//! Every piece is assigned a fixed numeric value in centipawns, independent of
//! game phase: pawn 100, knight 300, bishop 350, rook 500, queen 1000, king
//! 10000. Unlike a tuned evaluator, these values never drift with tuning runs.

use corvid_base::{Board, Color, Eval, Move, Piece};

#[must_use]
/// Get the value of one piece by its type.
pub const fn value(pt: Piece) -> Eval {
    match pt {
        Piece::Pawn => Eval::centipawns(100),
        Piece::Knight => Eval::centipawns(300),
        Piece::Bishop => Eval::centipawns(350),
        Piece::Rook => Eval::centipawns(500),
        Piece::Queen => Eval::centipawns(1000),
        Piece::King => Eval::centipawns(10_000),
    }
}

#[must_use]
/// Compute the effect that a move will have on the total quantity of material,
/// from the perspective of the player making the move.
pub fn delta(b: &Board, m: Move) -> Eval {
    let capturee_type = if m.is_en_passant() {
        Some(Piece::Pawn)
    } else {
        b.type_at_square(m.to_square())
    };
    let mut gain = capturee_type.map_or(Eval::DRAW, value);

    if let Some(promote_type) = m.promote_type() {
        gain += value(promote_type);
        gain -= value(Piece::Pawn);
    }

    gain
}

#[must_use]
#[allow(clippy::cast_possible_wrap)]
/// Evaluate a position solely by the amount of material available, from
/// White's perspective.
pub fn evaluate(b: &Board) -> Eval {
    let mut score = Eval::DRAW;

    let white_occupancy = b[Color::White];
    let black_occupancy = b[Color::Black];

    for pt in Piece::ALL_TYPES {
        let pt_squares = b[pt];
        let white_diff =
            (white_occupancy & pt_squares).len() as i16 - (black_occupancy & pt_squares).len() as i16;
        score += value(pt) * white_diff;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_base::{
        movegen::{get_moves, is_legal, ALL},
        tag::NoTag,
        Snapshot,
    };

    fn delta_helper(fen: &str) {
        let mut b = Board::from_fen(fen).unwrap();
        let orig_eval = evaluate(&b);
        let mover = b.player;
        for (m, ()) in get_moves::<ALL, NoTag>(&b, &()) {
            if !is_legal(m, &b) {
                continue;
            }
            let delta = delta(&b, m);
            let expected = match mover {
                Color::White => orig_eval + delta,
                Color::Black => orig_eval - delta,
            };
            let snapshot: Snapshot = b.make_move(m);
            assert_eq!(evaluate(&b), expected);
            b.unmake_move(snapshot);
        }
    }

    #[test]
    fn delta_captures() {
        delta_helper("r1bq1b1r/ppp2kpp/2n5/3n4/2BPp3/2P5/PP3PPP/RNBQK2R b KQ d3 0 8");
    }

    #[test]
    fn delta_promotion() {
        delta_helper("r4bkr/pPpq2pp/2n1b3/3n4/2BPp3/2P5/1P3PPP/RNBQK2R w KQ - 1 13");
    }

    #[test]
    fn pawn_worth_hundred() {
        assert_eq!(value(Piece::Pawn), Eval::centipawns(100));
    }

    #[test]
    fn king_worth_ten_thousand() {
        assert_eq!(value(Piece::King), Eval::centipawns(10_000));
    }
}
