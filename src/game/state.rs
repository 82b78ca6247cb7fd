use super::board::{Board, Grid, WIDTH};
use super::player::{Player, Seat};
use crate::error::MoveError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Tie,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passed to the other player.
    Continue,
    /// The move ended the game.
    GameOver(GameOutcome),
}

/// A two-player session: the board, whose turn it is and how the game ended.
///
/// Moves are refused once [`Game::is_over`] returns true, until
/// [`Game::start_game`] is called again.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    turn: Seat,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a game on an empty board with `first` to move.
    pub fn new(first: Player, second: Player) -> Self {
        Game {
            players: [first, second],
            board: Board::new(),
            turn: Seat::First,
            outcome: None,
        }
    }

    /// Clear the board and hand the first move back to player 1.
    pub fn start_game(&mut self) {
        self.board.reset();
        self.turn = Seat::First;
        self.outcome = None;
        tracing::debug!(
            first = self.players[0].name(),
            second = self.players[1].name(),
            "game started"
        );
    }

    /// Drop the current player's disk into `column`.
    ///
    /// A refused move leaves the board and the turn untouched. A winning line
    /// takes precedence over a full board when one move produces both.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            tracing::debug!(column, "move refused, game is over");
            return Err(MoveError::GameOver);
        }

        let mover = self.turn;
        let marker = self.players[mover.index()].marker();
        let row = self.board.drop_disk(marker, column).inspect_err(|err| {
            tracing::debug!(%mover, column, %err, "move refused");
        })?;
        tracing::debug!(%mover, column, row, "move accepted");

        if self.board.has_connected_four(marker) {
            tracing::debug!(%mover, "connected four");
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            tracing::debug!("board full, tie");
            self.outcome = Some(GameOutcome::Tie);
        }

        match self.outcome {
            Some(outcome) => Ok(MoveOutcome::GameOver(outcome)),
            None => {
                self.turn = mover.other();
                Ok(MoveOutcome::Continue)
            }
        }
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The winning player, or `None` while in progress or after a tie.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(GameOutcome::Winner(seat)) => Some(self.player(seat)),
            _ => None,
        }
    }

    pub fn current_seat(&self) -> Seat {
        self.turn
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> Grid {
        self.board.snapshot()
    }

    /// Number of disks played since the last start.
    pub fn move_count(&self) -> usize {
        self.board.disk_count()
    }

    /// Columns that would accept a disk; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..WIDTH)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }
}
