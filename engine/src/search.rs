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

//! Primary search algorithm.
//!
//! Corvid uses iterative-deepening, fail-hard alpha-beta search with a
//! principal-variation search refinement, late-move reductions, and a
//! quiescence search at the horizon. Move ordering draws on the previous
//! iteration's principal variation, MVV/LVA for captures, killer moves, and a
//! history table for quiet moves.

use std::sync::PoisonError;

use corvid_base::{
    movegen::{get_moves, ALL, CAPTURES},
    tag::NoTag,
    Board, Eval, Move, Piece,
};

use crate::{config::SearchConfig, evaluate::Evaluator, limit::SearchLimit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The types of errors which can occur during a search.
pub enum SearchError {
    /// The search was aborted because its limit expired.
    Timeout,
    /// The search failed because a lock was poisoned.
    Poison,
}

impl<T> From<PoisonError<T>> for SearchError {
    #[inline(always)]
    fn from(_: PoisonError<T>) -> Self {
        SearchError::Poison
    }
}

/// The result of performing a search: `Ok` carries the search's findings,
/// `Err` the reason it could not finish.
pub type SearchResult = Result<SearchInfo, SearchError>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Information about a completed search.
pub struct SearchInfo {
    /// The principal variation, best move first.
    pub pv: Vec<Move>,
    /// The evaluation of the position, from the root player's perspective.
    pub eval: Eval,
    /// The depth to which this search ran.
    pub depth: u8,
    /// Total nodes visited across the whole iterative-deepening run.
    pub nodes: u64,
}

/// Hard ceiling on recursion depth. Bounds the killer table and the stack
/// footprint of one search.
const MAX_PLY: usize = 64;

/// Run iterative deepening on `board` from depth `1` up to `config.depth`,
/// keeping the heuristic tables warm across iterations, and return the final
/// iteration's result. `evaluator` is invoked at every leaf in place of
/// `evaluate::evaluate`, so an alternative evaluator (e.g. a neural value
/// head) can be substituted without any other change to the search.
///
/// # Errors
///
/// Returns `Err` only if `limit` expires mid-iteration; the core does not
/// mandate resumable search (time management is out of scope), so the
/// partial iteration's findings are discarded.
pub fn search(
    board: &Board,
    config: &SearchConfig,
    limit: &SearchLimit,
    evaluator: Evaluator,
) -> SearchResult {
    let mut searcher = Searcher::new(config, limit, evaluator);
    let mut last_info = None;

    for depth in 1..=config.depth {
        let mut pv = Vec::new();
        let eval = searcher.negamax::<true>(*board, Eval::MIN, Eval::MAX, depth, 0, &mut pv)?;
        searcher.prev_pv = pv.clone();
        last_info = Some(SearchInfo {
            pv,
            eval,
            depth,
            nodes: searcher.nodes,
        });
    }

    last_info.ok_or(SearchError::Timeout)
}

/// Piece value rank for move ordering, least to most valuable: pawn 1,
/// knight 2, bishop 3, rook 4, queen 5, king 6. Distinct from `Piece`'s own
/// discriminant, which is ordered for promotion-packing instead.
const fn value_rank(p: Piece) -> i32 {
    match p {
        Piece::Pawn => 1,
        Piece::Knight => 2,
        Piece::Bishop => 3,
        Piece::Rook => 4,
        Piece::Queen => 5,
        Piece::King => 6,
    }
}

/// `mvv_lva = 100 * (6 - attacker) + 5 * victim + 5`, favoring capturing the
/// most valuable victim with the least valuable attacker.
fn mvv_lva(attacker: Piece, victim: Piece) -> i32 {
    100 * (6 - value_rank(attacker)) + 5 * value_rank(victim) + 5
}

/// Move-ordering scores, in descending priority. PV and capture scores are
/// high enough to always sort ahead of killers and history.
const SCORE_PV: i32 = 20_000;
const SCORE_CAPTURE_BASE: i32 = 10_000;
const SCORE_KILLER_1: i32 = 9_000;
const SCORE_KILLER_2: i32 = 8_000;

/// Holds the heuristic tables and counters threaded through one
/// iterative-deepening run. Killer and history tables persist across
/// iterations (successive iterations' cutoffs keep sharpening move order);
/// they are reset once per call to `search`, not per iteration.
struct Searcher<'a> {
    config: &'a SearchConfig,
    limit: &'a SearchLimit,
    evaluator: Evaluator,
    nodes: u64,
    nodes_since_limit_update: u64,
    /// `killers[ply][0 or 1]`.
    killers: Vec<[Option<Move>; 2]>,
    /// `history[piece][target square]`.
    history: [[i32; 64]; Piece::NUM_TYPES],
    /// The previous iteration's principal variation, consulted move-by-move
    /// while descending the still-current PV line.
    prev_pv: Vec<Move>,
}

impl<'a> Searcher<'a> {
    fn new(config: &'a SearchConfig, limit: &'a SearchLimit, evaluator: Evaluator) -> Self {
        Searcher {
            config,
            limit,
            evaluator,
            nodes: 0,
            nodes_since_limit_update: 0,
            killers: vec![[None, None]; MAX_PLY],
            history: [[0; 64]; Piece::NUM_TYPES],
            prev_pv: Vec::new(),
        }
    }

    #[inline]
    fn increment_nodes(&mut self) -> Result<(), SearchError> {
        self.nodes += 1;
        self.nodes_since_limit_update += 1;
        if self.nodes_since_limit_update >= self.config.limit_update_increment {
            self.limit.add_nodes(self.nodes_since_limit_update)?;
            self.nodes_since_limit_update = 0;
            if self.limit.is_over() {
                return Err(SearchError::Timeout);
            }
        }
        Ok(())
    }

    /// Score a move for ordering purposes at `ply`. `on_pv_line` is the move
    /// this ply's index into `prev_pv`, if the search is still following the
    /// previous iteration's PV down this exact path.
    fn score_move(&self, b: &Board, m: Move, ply: usize, on_pv_line: bool) -> i32 {
        if on_pv_line && self.prev_pv.get(ply) == Some(&m) {
            return SCORE_PV;
        }
        if b.is_move_capture(m) {
            let attacker = b.type_at_square(m.from_square()).unwrap_or(Piece::Pawn);
            let victim = if m.is_en_passant() {
                Piece::Pawn
            } else {
                b.type_at_square(m.to_square()).unwrap_or(Piece::Pawn)
            };
            return SCORE_CAPTURE_BASE + mvv_lva(attacker, victim);
        }
        if self.killers[ply][0] == Some(m) {
            return SCORE_KILLER_1;
        }
        if self.killers[ply][1] == Some(m) {
            return SCORE_KILLER_2;
        }
        let mover = b.type_at_square(m.from_square()).unwrap_or(Piece::Pawn);
        self.history[mover as usize][m.to_square() as usize]
    }

    /// Fail-hard negamax over `board`, returning the evaluation from the
    /// perspective of `board.player`. On return, `parent_line` holds the best
    /// continuation found from this node (empty if none improved alpha).
    #[allow(clippy::too_many_arguments)]
    fn negamax<const ON_PV: bool>(
        &mut self,
        mut board: Board,
        mut alpha: Eval,
        beta: Eval,
        depth: u8,
        ply: usize,
        parent_line: &mut Vec<Move>,
    ) -> Result<Eval, SearchError> {
        if depth == 0 {
            return self.quiescence(board, alpha, beta, ply);
        }
        if ply >= self.config.max_ply.min(MAX_PLY) {
            return Ok((self.evaluator)(&board));
        }

        self.increment_nodes()?;

        let in_check = !board.checkers.is_empty();
        let depth = if in_check { depth + 1 } else { depth };

        let moves = get_moves::<ALL, NoTag>(&board, &());
        let on_pv_line = ON_PV && ply < self.prev_pv.len();
        let mut scored: Vec<(Move, i32)> = moves
            .into_iter()
            .map(|(m, ())| (m, self.score_move(&board, m, ply, on_pv_line)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let mut moves_searched = 0usize;
        let mut found_pv = false;

        for (m, _) in scored {
            let is_capture = board.is_move_capture(m);
            let is_promotion = m.is_promotion();
            let mut line = Vec::new();

            // `get_moves` only ever returns legal moves (see the design
            // ledger), so every move here is safe to commit unconditionally.
            let snapshot = board.make_move(m);

            let score = if found_pv {
                let mut s = -self
                    .negamax::<false>(
                        board,
                        -alpha.step_forward() - Eval::centipawns(1),
                        -alpha.step_forward(),
                        depth - 1,
                        ply + 1,
                        &mut line,
                    )?
                    .step_back();
                if alpha < s && s < beta {
                    s = -self
                        .negamax::<false>(
                            board,
                            -beta.step_forward(),
                            -alpha.step_forward(),
                            depth - 1,
                            ply + 1,
                            &mut line,
                        )?
                        .step_back();
                }
                s
            } else if moves_searched == 0 {
                -self
                    .negamax::<ON_PV>(
                        board,
                        -beta.step_forward(),
                        -alpha.step_forward(),
                        depth - 1,
                        ply + 1,
                        &mut line,
                    )?
                    .step_back()
            } else {
                let try_lmr = moves_searched >= self.config.lmr_min_moves_searched
                    && depth >= self.config.lmr_min_depth
                    && !in_check
                    && !is_capture
                    && !is_promotion;
                let reduced_depth = if try_lmr { depth - 2 } else { depth - 1 };
                let mut s = -self
                    .negamax::<false>(
                        board,
                        -alpha.step_forward() - Eval::centipawns(1),
                        -alpha.step_forward(),
                        reduced_depth,
                        ply + 1,
                        &mut line,
                    )?
                    .step_back();
                if s > alpha && reduced_depth < depth - 1 {
                    s = -self
                        .negamax::<false>(
                            board,
                            -alpha.step_forward() - Eval::centipawns(1),
                            -alpha.step_forward(),
                            depth - 1,
                            ply + 1,
                            &mut line,
                        )?
                        .step_back();
                }
                if s > alpha && s < beta {
                    s = -self
                        .negamax::<false>(
                            board,
                            -beta.step_forward(),
                            -alpha.step_forward(),
                            depth - 1,
                            ply + 1,
                            &mut line,
                        )?
                        .step_back();
                }
                s
            };

            board.unmake_move(snapshot);
            moves_searched += 1;

            if score >= beta {
                if !is_capture && !is_promotion {
                    self.killers[ply][1] = self.killers[ply][0];
                    self.killers[ply][0] = Some(m);
                }
                return Ok(beta);
            }

            if score > alpha {
                if !is_capture && !is_promotion {
                    let mover = board.type_at_square(m.from_square()).unwrap_or(Piece::Pawn);
                    self.history[mover as usize][m.to_square() as usize] += i32::from(depth);
                }
                alpha = score;
                found_pv = true;
                parent_line.clear();
                parent_line.push(m);
                parent_line.extend(line);
            }
        }

        if moves_searched == 0 {
            return Ok(if in_check {
                -Eval::mate_in(u16::try_from(ply).unwrap_or(u16::MAX))
            } else {
                Eval::DRAW
            });
        }

        Ok(alpha)
    }

    /// Quiescence search: only captures are committed; the static evaluation
    /// of the position is the floor a capturing line must beat.
    fn quiescence(
        &mut self,
        mut board: Board,
        mut alpha: Eval,
        beta: Eval,
        ply: usize,
    ) -> Result<Eval, SearchError> {
        self.increment_nodes()?;

        let stand_pat = (self.evaluator)(&board);
        if stand_pat >= beta {
            return Ok(beta);
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
        if ply >= MAX_PLY - 1 {
            return Ok(alpha);
        }

        let mut moves = get_moves::<CAPTURES, NoTag>(&board, &());
        moves.sort_by_cached_key(|&(m, ())| {
            let attacker = board.type_at_square(m.from_square()).unwrap_or(Piece::Pawn);
            let victim = if m.is_en_passant() {
                Piece::Pawn
            } else {
                board.type_at_square(m.to_square()).unwrap_or(Piece::Pawn)
            };
            -mvv_lva(attacker, victim)
        });

        for (m, ()) in moves {
            let snapshot = board.make_move(m);
            let score = -self
                .quiescence(board, -beta.step_forward(), -alpha.step_forward(), ply + 1)?
                .step_back();
            board.unmake_move(snapshot);

            if score >= beta {
                return Ok(beta);
            }
            if score > alpha {
                alpha = score;
            }
        }

        Ok(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_base::Board;

    fn search_helper(fen: &str, depth: u8) -> SearchInfo {
        let board = Board::from_fen(fen).unwrap();
        let config = SearchConfig {
            depth,
            ..Default::default()
        };
        search(&board, &config, &SearchLimit::default(), crate::evaluate::evaluate).unwrap()
    }

    #[test]
    fn finds_mate_in_one() {
        let info = search_helper("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", 3);
        assert_eq!(info.pv[0].to_uci(), "a1a8");
        assert!(info.eval.is_mate());
    }

    #[test]
    fn prefers_queen_promotion() {
        let info = search_helper("6k1/5ppp/8/8/8/8/1P6/6K1 w - - 0 1", 4);
        assert!(info.pv[0].is_promotion());
        assert_eq!(info.pv[0].promote_type(), Some(Piece::Queen));
    }

    #[test]
    fn deterministic_across_runs() {
        let fen = "r1bq1b1r/ppp2kpp/2n5/3np3/2B5/8/PPPP1PPP/RNBQK2R w KQ - 0 7";
        let a = search_helper(fen, 4);
        let b = search_helper(fen, 4);
        assert_eq!(a.pv[0], b.pv[0]);
        assert_eq!(a.nodes, b.nodes);
    }

    #[test]
    fn avoids_stalemate_when_a_capture_wins() {
        // White to move; g6 stalemates Black, but Kxh7 wins a pawn cleanly.
        let info = search_helper("7k/7P/6K1/8/8/8/8/8 w - - 0 1", 4);
        assert_ne!(info.pv[0].to_uci(), "g6g6");
    }
}
