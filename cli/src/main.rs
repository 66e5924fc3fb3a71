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

//! A line-oriented adapter exposing the Corvid kernel to a text-protocol
//! front-end. Each line of input is one command; each command produces one
//! or more lines of output on stdout.

use std::io::{self, BufRead, Write};

use corvid_base::Board;
use corvid_engine::{search, SearchConfig, SearchLimit};

const ENGINE_NAME: &str = "corvid";

const DEFAULT_DEPTH: u8 = 6;

/// Adapter state: the position under consideration, mutated by `new-game`
/// and `position`.
struct Session {
    board: Board,
}

impl Session {
    fn new() -> Session {
        Session {
            board: Board::default(),
        }
    }

    /// Handle one line of adapter input, writing any response to `out`.
    /// Returns `false` when the session should end.
    fn dispatch(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(true);
        };

        match command {
            "identify" => writeln!(out, "{ENGINE_NAME}")?,
            "is-ready" => writeln!(out, "ready")?,
            "new-game" => {
                self.board = Board::default();
                writeln!(out, "ok")?;
            }
            "position" => self.position(tokens, out)?,
            "go" => self.go(tokens, out)?,
            "quit" => return Ok(false),
            other => writeln!(out, "error: unrecognized command {other:?}")?,
        }

        Ok(true)
    }

    fn position<'a>(
        &mut self,
        mut tokens: impl Iterator<Item = &'a str>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let descriptor = match tokens.next() {
            Some("startpos") => Board::default(),
            Some("fen") => {
                let rest: Vec<&str> = tokens.by_ref().take_while(|&t| t != "moves").collect();
                match Board::from_fen(&rest.join(" ")) {
                    Ok(b) => b,
                    Err(e) => {
                        writeln!(out, "error: malformed position ({e})")?;
                        return Ok(());
                    }
                }
            }
            Some(other) => {
                writeln!(out, "error: unrecognized position descriptor {other:?}")?;
                return Ok(());
            }
            None => {
                writeln!(out, "error: missing position descriptor")?;
                return Ok(());
            }
        };

        let mut board = descriptor;
        // tokens is now positioned after the descriptor; if "moves" wasn't
        // consumed by take_while above (the startpos case), look for it here.
        let mut remaining: Vec<&str> = tokens.collect();
        if remaining.first() == Some(&"moves") {
            remaining.remove(0);
        }

        for mv in remaining {
            match corvid_base::Move::from_uci(mv, &board) {
                Ok(m) if corvid_base::movegen::is_legal(m, &board) => {
                    board.make_move(m);
                }
                Ok(_) => {
                    // Well-formed but not in the generated legal-move list
                    // (e.g. no piece on the source square): ignored.
                    writeln!(out, "error: malformed move {mv:?} (not a legal move)")?;
                }
                Err(e) => {
                    // A malformed move is ignored; the rest of the move list
                    // is still applied against the position as it stood.
                    writeln!(out, "error: malformed move {mv:?} ({e})")?;
                }
            }
        }

        self.board = board;
        writeln!(out, "ok")?;
        Ok(())
    }

    fn go<'a>(
        &mut self,
        mut tokens: impl Iterator<Item = &'a str>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let mut depth = DEFAULT_DEPTH;
        while let Some(tok) = tokens.next() {
            if tok == "depth" {
                if let Some(d) = tokens.next().and_then(|s| s.parse().ok()) {
                    depth = d;
                }
            }
        }

        let config = SearchConfig {
            depth,
            ..SearchConfig::default()
        };
        let limit = SearchLimit::new();

        match search(&self.board, &config, &limit, corvid_engine::evaluate::evaluate) {
            Ok(info) => match info.pv.first() {
                Some(best) => writeln!(
                    out,
                    "bestmove {} score {} depth {} nodes {}",
                    best.to_uci(),
                    info.eval,
                    info.depth,
                    info.nodes
                )?,
                None => writeln!(out, "bestmove none")?,
            },
            Err(_) => writeln!(out, "error: search aborted")?,
        }
        Ok(())
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = line?;
        if !session.dispatch(&line, &mut out)? {
            break;
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> String {
        let mut session = Session::new();
        let mut out = Vec::new();
        for line in lines {
            session.dispatch(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn identify_returns_engine_name() {
        assert_eq!(run(&["identify"]), format!("{ENGINE_NAME}\n"));
    }

    #[test]
    fn is_ready_acknowledges() {
        assert_eq!(run(&["is-ready"]), "ready\n");
    }

    #[test]
    fn new_game_resets_board() {
        assert_eq!(run(&["new-game"]), "ok\n");
    }

    #[test]
    fn position_rejects_malformed_fen() {
        let out = run(&["position fen not a real fen"]);
        assert!(out.contains("error"));
    }

    #[test]
    fn position_then_go_finds_a_move() {
        let out = run(&[
            "position startpos moves e2e4 e7e5",
            "go depth 2",
        ]);
        assert!(out.contains("bestmove"));
        assert!(!out.contains("bestmove none"));
    }

    #[test]
    fn quit_stops_the_session() {
        let mut session = Session::new();
        let mut out = Vec::new();
        assert!(session.dispatch("identify", &mut out).unwrap());
        assert!(!session.dispatch("quit", &mut out).unwrap());
    }
}
