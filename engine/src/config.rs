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

//! Configuration knobs for a search.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for a search.
pub struct SearchConfig {
    /// The depth to which iterative deepening will run, inclusive.
    pub depth: u8,
    /// The maximum ply the recursion may reach; a hard stack-depth ceiling
    /// independent of the requested search depth (check extensions can push
    /// past `depth`).
    pub max_ply: usize,
    /// Minimum moves already searched at a node before late-move reduction is
    /// considered for the next one.
    pub lmr_min_moves_searched: usize,
    /// Minimum remaining depth before late-move reduction is considered.
    pub lmr_min_depth: u8,
    /// The number of nodes which have to be searched before it is worthwhile
    /// to update the search limit with this information.
    pub limit_update_increment: u64,
}

impl SearchConfig {
    #[must_use]
    pub fn new() -> SearchConfig {
        SearchConfig {
            depth: 6,
            max_ply: 64,
            lmr_min_moves_searched: 4,
            lmr_min_depth: 3,
            limit_update_increment: 100,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::new()
    }
}
