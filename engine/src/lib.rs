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

//! `corvid_engine` builds an evaluator and a search on top of the move
//! generation and board representation in `corvid_base`.

pub mod config;
pub mod evaluate;
pub mod limit;
pub mod material;
pub mod pst;
pub mod search;

pub use config::SearchConfig;
pub use evaluate::Evaluator;
pub use limit::SearchLimit;
pub use search::{search, SearchError, SearchInfo, SearchResult};
