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

//! Callbacks for annotating moves as they are generated, so a caller can
//! attach extra information (an ordering score, a capture value, ...) to each
//! move without a second pass over the move list.

use super::{Board, Move};

/// A callback used by `movegen::get_moves` to tag each move as it is produced.
///
/// `Cookie` is extra state the caller threads through every call (e.g. a
/// reference evaluation), and `Tag` is the per-move output.
pub trait Tagger {
    /// State passed to every invocation of `tag_move`.
    type Cookie;
    /// The annotation attached to each generated move.
    type Tag;

    /// Compute the tag for playing `m` from board `b`.
    fn tag_move(m: Move, b: &Board, cookie: &Self::Cookie) -> Self::Tag;
}

/// A `Tagger` that attaches no information, for when only the moves
/// themselves are wanted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoTag;

impl Tagger for NoTag {
    type Cookie = ();
    type Tag = ();

    #[inline(always)]
    fn tag_move(_m: Move, _b: &Board, _cookie: &Self::Cookie) -> Self::Tag {}
}
