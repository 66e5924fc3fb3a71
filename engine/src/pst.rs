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

//! A module containing the information for Piece-Square Tables (PSTs). A PST
//! is given for both the early and endgame.

use corvid_base::{Board, Color, Eval, Move, Piece, Square};

/// A lookup table for piece-square values, not split by game phase. The outer
/// index is the type of the piece (in order of Pawn, Knight, Bishop, Rook,
/// Queen, and King) and the inner index is the square of the piece (from
/// White's point of view), starting with A1 as the first index, then
/// continuing on to B1, C1, and so on until H8 as index 63.
type Pst = [[Eval; 64]; Piece::NUM_TYPES];

/// A PST given in plain centipawns, before being lifted into `Eval`s.
type CentiPst = [[i16; 64]; Piece::NUM_TYPES];

/// Evaluate a board based on its PST value, from White's perspective.
/// `mirror(square)` for Black is implemented as `Square::opposite`, which
/// reflects a square across the board's horizontal midline.
pub fn pst_evaluate(board: &Board) -> Eval {
    let mut score = Eval::DRAW;

    for pt in Piece::ALL_TYPES {
        for sq in board[pt] & board[Color::White] {
            score += PST[pt as usize][sq as usize];
        }
        for sq in board[pt] & board[Color::Black] {
            let alt_sq = sq.opposite();
            score -= PST[pt as usize][alt_sq as usize];
        }
    }

    score
}

/// Get the difference in PST value which would be generated by making the
/// move `m` on `board`, from the perspective of the player making the move.
///
/// # Panics
///
/// `pst_delta` will panic if the given move is invalid.
pub fn pst_delta(board: &Board, m: Move) -> Eval {
    let from_sq = m.from_square();
    let to_sq = m.to_square();
    let mover_type = board.type_at_square(m.from_square()).unwrap();
    let mover_idx = mover_type as usize;
    let end_type = match m.promote_type() {
        Some(pt) => pt,
        None => mover_type,
    };
    let end_idx = end_type as usize;
    let (from_alt, to_alt) = match board.player {
        Color::White => (from_sq, to_sq),
        Color::Black => (from_sq.opposite(), to_sq.opposite()),
    };
    let (from_idx, to_idx) = (from_alt as usize, to_alt as usize);

    // you always lose the value of the square you moved from
    let mut delta = PST[end_idx][to_idx] - PST[mover_idx][from_idx];

    if board[!board.player].contains(m.to_square()) {
        // conventional capture
        let to_opposite_idx = to_alt.opposite() as usize;
        let capturee_idx = board.type_at_square(to_sq).unwrap() as usize;
        delta += PST[capturee_idx][to_opposite_idx];
    }

    if m.is_en_passant() {
        let to_opposite_idx = (to_alt - Color::White.pawn_direction()).opposite() as usize;
        delta += PST[Piece::Pawn as usize][to_opposite_idx];
    }

    if m.is_castle() {
        let is_queen_castle = to_sq.file() == 2;
        let (rook_from_idx, rook_to_idx) = match is_queen_castle {
            true => (Square::A1 as usize, Square::D1 as usize),
            false => (Square::H1 as usize, Square::F1 as usize),
        };

        delta += PST[Piece::Rook as usize][rook_to_idx] - PST[Piece::Rook as usize][rook_from_idx];
    }

    delta
}

/// Convert a table of plain centipawn values into a table of `Eval`s.
const fn expand_table(centi_table: CentiPst) -> Pst {
    let mut table = [[Eval::DRAW; 64]; Piece::NUM_TYPES];
    let mut piece_idx = 0;
    // I would use for-loops here, but those are unsupported in const fns.
    while piece_idx < Piece::NUM_TYPES {
        let mut sq_idx = 0;
        while sq_idx < 64 {
            table[piece_idx][sq_idx] = Eval::centipawns(centi_table[piece_idx][sq_idx]);
            sq_idx += 1;
        }
        piece_idx += 1;
    }
    table
}

#[rustfmt::skip] // rustfmt likes to throw a million newlines in this
/// The main piece-square table, indexed first by piece then by square (A1 =
/// 0, H8 = 63, White's point of view). Not split by game phase.
pub const PST: Pst = expand_table([
    [ // N
        -175, -29, -68, -52, -50, -52, -32, -95,
         -95, -67, -16,   0,  -7, -24, -39, -42,
         -44,  -7,  38,  13,  12,  41,   9, -45,
         -18, -17,  17,  14,  17,   6,   0, -10,
          -3,  17,  40,  59,  44,  71,  15,  33,
         -12,  32, -14,  68,  54, -15,  47,  23,
         -36, -20,  69, -12,  34,  35,  -4,  -9,
         -89, -56, -52, -40, -19, -93, -43,-108,
    ],
    [ // B
         -60, -19,  -3, -58, -56,  -8, -34, -62,
         -25,   5,   0,  -7,   2, -20,  24, -21,
          -6,   6,   1,  38,  32,  -8,  12, -14,
         -21, -17,  32,   8,   0,  25, -14,  -5,
           0,  15,  14,  24,  24,  16,  10,   3,
         -14,  11, -54,  22,  -1, -84,  44,  29,
         -36,  -8,  -4,-111, -86, -11, -32,  -3,
         -28, -44, -53, -53, -30,-105, -37,  -8,
    ],
    [ // R
         -36, -22,  -8,   2,  -4,  -3,  -8, -47,
         -47, -34, -26, -27, -32, -23, -19, -28,
         -31, -20, -22, -24, -30, -19,  -8, -24,
         -12, -15,  -8, -22, -24, -23, -26, -22,
          -8, -14,   5,  -2,  -6,  -2,  -3,  -5,
           1,  14,  14,  14,   2,  23,  28,  16,
          15,  25,  40,  35,  37,  44,  42,  33,
          -5,  22,  12,  -4,  -5, -22,  15,  19,
    ],
    [ // Q
         -40, -51, -47,  15, -33, -63,  -9, -30,
        -109, -62,  -4,  -2,  -7,  -7, -13,  -5,
         -46,  -2,  -7,  -2,  -5,  10,   2,  -8,
          -5, -21,   0,  26,   8,  -1,   5,   7,
         -20,  -7,   0,  30,  28,  35,  18,  48,
         -22,  -4,  24,  41,  65,  93, 114,  76,
         -29, -20,   8,  18,  35, 108,  63,  95,
          -6,  17,  25,  19,  52,  53,  44,  52,
    ],
    [ // P
          -1,  -9,  -9,  -1,  -4,  14,  -5, -10,
          -3,  14,  -1, -38,   2,  32,  34,  -3,
         -10,  -5,   0,  -9,   6, -12,   7, -10,
          -9,   0,  10,  33,  27,  -4, -10, -16,
          10,  14,  15,  24,  29,  17,  10,   7,
          41,  49,  30,  59,  50,  46,  51,  40,
          61,  58,  68, 104,  88,  71,  64,  46,
           3,  -2,  -8,  12, -11,  -5,  -1,   0,
    ],
    [ // K
         -44,  19,  22, -60,  -6, -58,  36, -30,
         -44, -19, -29, -36, -33, -15,  -4, -32,
         -45, -30, -20, -23, -14, -18, -18, -53,
         -46, -15,  -4,   0,   4,  -4, -12, -46,
         -18,  15,  27,  15,  21,  19,  15, -23,
         -19,  35,  29,  30,  26,  41,  41,   7,
         -18,  27,  34,  15,  25,  27,  47,  14,
         -38, -14, -19, -41, -25, -15,  32,  -2,
    ],
]);

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_base::{
        movegen::{get_moves, is_legal, ALL},
        tag::NoTag,
    };

    fn delta_helper(fen: &str) {
        let mut b = Board::from_fen(fen).unwrap();
        let orig = pst_evaluate(&b);
        let mover = b.player;
        for (m, ()) in get_moves::<ALL, NoTag>(&b, &()) {
            if !is_legal(m, &b) {
                continue;
            }
            let delta = pst_delta(&b, m);
            let expected = match mover {
                Color::White => orig + delta,
                Color::Black => orig - delta,
            };
            let snapshot = b.make_move(m);
            assert_eq!(pst_evaluate(&b), expected);
            b.unmake_move(snapshot);
        }
    }

    #[test]
    /// Test that adding deltas matches the same result as taking the PST value
    /// from scratch.
    fn test_pst_delta_equals_base_result() {
        delta_helper("r1bq1b1r/ppp2kpp/2n5/3np3/2B5/8/PPPP1PPP/RNBQK2R w KQ - 0 7");
    }

    #[test]
    fn test_delta_captures() {
        delta_helper("r1bq1b1r/ppp2kpp/2n5/3n4/2BPp3/2P5/PP3PPP/RNBQK2R b KQ d3 0 8");
    }

    #[test]
    fn test_delta_promotion() {
        delta_helper("r4bkr/pPpq2pp/2n1b3/3n4/2BPp3/2P5/1P3PPP/RNBQK2R w KQ - 1 13");
    }
}
