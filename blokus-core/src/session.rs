//! Per-game state: one role, the last board seen, the pieces still in hand.
//!
//! ```text
//! turn 0:  parse board → opening move (no checks)
//! turn n:  parse board → anchors → search → placement | pass
//! pass sent or sentinel received → finished
//! ```

use crate::anchors::compute_anchors;
use crate::board::Board;
use crate::codec::{self, Move};
use crate::error::SessionError;
use crate::pieces::PieceSet;
use crate::search::{select_with_stats, SearchStats};
use crate::Player;

/// What happened during one call to `Session::respond`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TurnReport {
    /// Turn index of this reply (0 = opening).
    pub turn: u32,
    pub reply: Move,
    /// Anchor points found; zero on the opening turn.
    pub anchors: usize,
    /// Search counters; zero on the opening turn.
    pub stats: SearchStats,
}

/// Engine state for one game.
#[derive(Clone, Debug)]
pub struct Session {
    player: Player,
    board: Board,
    remaining: PieceSet,
    turn: u32,
    finished: bool,
}

impl Session {
    /// Fresh session: empty board, every piece in hand.
    pub fn new(player: Player) -> Session {
        Session {
            player,
            board: Board::new(),
            remaining: PieceSet::full(),
            turn: 0,
            finished: false,
        }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Board as of the last reply, including the committed placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn remaining(&self) -> PieceSet {
        self.remaining
    }

    /// Number of moves sent so far.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Mark the game over after the peer sent the sentinel.
    pub fn end(&mut self) {
        self.finished = true;
    }

    /// Handle one incoming message: the sentinel ends the session and
    /// yields None, anything else is treated as a board.
    pub fn receive(&mut self, message: &str) -> Result<Option<TurnReport>, SessionError> {
        if codec::is_no_move(message) {
            self.end();
            return Ok(None);
        }
        self.respond(message).map(Some)
    }

    /// Compute the reply to a wire board.
    ///
    /// The board replaces the session's grid before anything else, so a
    /// malformed board fails even on the opening turn. A pass finishes the
    /// session.
    pub fn respond(&mut self, raw_board: &str) -> Result<TurnReport, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        self.board = Board::parse(raw_board, self.player.mark())?;

        let turn = self.turn;
        let report = if turn == 0 {
            let opening = codec::opening_placement(self.player);
            self.board.commit(&opening.pattern(), opening.x as usize, opening.y as usize);
            self.remaining.remove(opening.piece);
            TurnReport {
                turn,
                reply: Move::Place(opening),
                anchors: 0,
                stats: SearchStats::default(),
            }
        } else {
            let anchors = compute_anchors(&self.board);
            let (best, stats) = select_with_stats(&self.board, self.remaining, &anchors, self.player);
            if let Some(placement) = best {
                self.board
                    .commit(&placement.pattern(), placement.x as usize, placement.y as usize);
                self.remaining.remove(placement.piece);
            } else {
                self.finished = true;
            }
            TurnReport {
                turn,
                reply: Move::from(best),
                anchors: anchors.len(),
                stats,
            }
        };

        self.turn += 1;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedBoardError;
    use crate::pieces::{PieceId, NUM_PIECES};
    use crate::search::Placement;
    use crate::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

    fn empty_wire() -> String {
        Board::new().render('o', 'x')
    }

    /// Wire board after both openings, from player one's side.
    fn after_openings() -> String {
        let mut board = Board::new();
        let one = codec::opening_placement(Player::One);
        let two = codec::opening_placement(Player::Two);
        board.commit(&one.pattern(), one.x as usize, one.y as usize);
        let mut other = Board::new();
        other.commit(&two.pattern(), two.x as usize, two.y as usize);
        for coord in Board::coords() {
            let (x, y) = (coord.x as usize, coord.y as usize);
            if other.cell(x, y) == Cell::Own {
                board.set(x, y, Cell::Other);
            }
        }
        board.render('o', 'x')
    }

    // ========== Opening ==========

    #[test]
    fn test_first_call_plays_opening() {
        let mut session = Session::new(Player::One);
        let report = session.respond(&empty_wire()).unwrap();
        assert_eq!(report.turn, 0);
        assert_eq!(report.reply.encode(), "U045");
        assert_eq!(session.turn(), 1);
        assert_eq!(session.remaining().len(), NUM_PIECES - 1);
        assert!(!session.remaining().contains(PieceId::U));
        assert_eq!(session.board().count(Cell::Own), 5);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_opening_player_two() {
        let mut session = Session::new(Player::Two);
        // Player one has already opened; from player two's side that is 'o'
        let report = session.respond(&after_openings().replace('x', ".")).unwrap();
        assert_eq!(report.reply.encode(), "U09A");
        assert_eq!(session.board().count(Cell::Other), 5);
        assert_eq!(session.board().count(Cell::Own), 5);
    }

    #[test]
    fn test_malformed_board_fails_opening() {
        let mut session = Session::new(Player::One);
        let err = session.respond("################").unwrap_err();
        assert_eq!(
            err,
            SessionError::MalformedBoard(MalformedBoardError::TooFewRows {
                expected: BOARD_HEIGHT + 2,
                found: 1,
            })
        );
        // Nothing was sent, so the opening is still pending
        assert_eq!(session.turn(), 0);
        assert_eq!(session.remaining(), PieceSet::full());
    }

    // ========== Search turns ==========

    #[test]
    fn test_second_turn_searches() {
        let mut session = Session::new(Player::One);
        session.respond(&empty_wire()).unwrap();
        let report = session.respond(&after_openings()).unwrap();
        assert_eq!(report.turn, 1);
        assert_eq!(report.reply.encode(), "T013");
        assert_eq!(report.anchors, 12);
        assert!(report.stats.legal > 0);
        assert!(!session.remaining().contains(PieceId::T));
        assert_eq!(session.remaining().len(), NUM_PIECES - 2);
        assert_eq!(session.board().count(Cell::Own), 10);
        assert_eq!(session.turn(), 2);
    }

    #[test]
    fn test_board_replaced_each_turn() {
        let mut session = Session::new(Player::One);
        session.respond(&empty_wire()).unwrap();
        // The server's board wins over the committed opening: no own cells, no anchors
        let report = session.respond(&empty_wire()).unwrap();
        assert_eq!(report.anchors, 0);
        assert_eq!(report.reply, Move::Pass);
    }

    #[test]
    fn test_blocked_board_passes_and_finishes() {
        let mut full = Board::new();
        for coord in Board::coords() {
            full.set(coord.x as usize, coord.y as usize, Cell::Other);
        }
        full.set(0, 0, Cell::Own);
        let raw = full.render('o', 'x');

        let mut session = Session::new(Player::One);
        session.respond(&empty_wire()).unwrap();
        let report = session.respond(&raw).unwrap();
        assert_eq!(report.reply, Move::Pass);
        assert_eq!(report.reply.encode(), codec::NO_MOVE);
        assert!(session.is_finished());
        assert_eq!(session.turn(), 2);
        assert_eq!(session.remaining().len(), NUM_PIECES - 1);

        assert_eq!(session.respond(&raw), Err(SessionError::Finished));
        assert_eq!(session.turn(), 2);
    }

    #[test]
    fn test_receive_sentinel_ends() {
        let mut session = Session::new(Player::Two);
        assert_eq!(session.receive("X000"), Ok(None));
        assert!(session.is_finished());
        assert_eq!(session.turn(), 0);
        assert_eq!(session.receive(&empty_wire()), Err(SessionError::Finished));
    }

    #[test]
    fn test_receive_board_replies() {
        let mut session = Session::new(Player::One);
        let report = session.receive(&empty_wire()).unwrap().unwrap();
        assert_eq!(report.reply.encode(), "U045");
    }

    // ========== Full games ==========

    /// Wire grid shared by both players: '.', 'o', 'x' or obstacle 'z'.
    struct Table {
        cells: [[char; BOARD_WIDTH]; BOARD_HEIGHT],
    }

    impl Table {
        fn render(&self) -> String {
            let border = "#".repeat(BOARD_WIDTH + 2);
            let mut lines = vec![border.clone()];
            for row in &self.cells {
                lines.push(format!("#{}#", row.iter().collect::<String>()));
            }
            lines.push(border);
            lines.join("\n")
        }

        fn is_mark(&self, x: usize, y: usize, mark: char) -> bool {
            self.cells[y][x] == mark
        }

        /// Stamp a placement, checking the placement rules against the grid.
        fn apply(&mut self, placement: &Placement, mark: char, opening: bool) {
            let cells: Vec<_> = placement.cells().collect();
            let mut touches_corner = false;
            for c in &cells {
                let (x, y) = (c.x as usize, c.y as usize);
                assert_eq!(self.cells[y][x], '.', "overwrote ({}, {})", x, y);
                for (nx, ny) in Board::orthogonal_neighbors(x, y) {
                    assert!(!self.is_mark(nx, ny, mark), "edge contact at ({}, {})", x, y);
                }
                touches_corner |= Board::diagonal_neighbors(x, y).any(|(nx, ny)| self.is_mark(nx, ny, mark));
            }
            assert!(opening || touches_corner, "{:?} floats free", placement);
            for c in cells {
                self.cells[c.y as usize][c.x as usize] = mark;
            }
        }
    }

    #[test]
    fn test_random_games_fuzz() {
        use rand::prelude::*;

        let mut rng = rand::rng();
        let reserved: Vec<_> = [Player::One, Player::Two]
            .into_iter()
            .flat_map(|p| codec::opening_placement(p).cells().collect::<Vec<_>>())
            .collect();

        for _ in 0..20 {
            let mut table = Table {
                cells: [['.'; BOARD_WIDTH]; BOARD_HEIGHT],
            };
            for coord in Board::coords() {
                if !reserved.contains(&coord) && rng.random_range(0..12) == 0 {
                    table.cells[coord.y as usize][coord.x as usize] = 'z';
                }
            }

            let mut sessions = [Session::new(Player::One), Session::new(Player::Two)];
            while sessions.iter().any(|s| !s.is_finished()) {
                for session in sessions.iter_mut().filter(|s| !s.is_finished()) {
                    let mark = session.player().mark();
                    let before = session.remaining().len();
                    let opening = session.turn() == 0;

                    let raw = table.render();
                    let report = session.respond(&raw).unwrap();
                    let token = report.reply.encode();

                    match Move::decode(&token).unwrap() {
                        Move::Place(placement) => {
                            table.apply(&placement, mark, opening);
                            assert_eq!(session.remaining().len(), before - 1);
                            assert!(!session.remaining().contains(placement.piece));
                            let seen = Board::parse(&table.render(), mark).unwrap();
                            assert_eq!(session.board(), &seen);
                        }
                        Move::Pass => {
                            assert!(session.is_finished());
                            assert_eq!(session.remaining().len(), before);
                        }
                    }
                }
            }

            for session in &sessions {
                // Opening plus at most one move per remaining piece, plus the pass
                assert!(session.turn() as usize <= NUM_PIECES + 1);
            }
        }
    }
}
