//! Core Connect Four rules: board storage and win detection, players, and the
//! turn-by-turn game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Grid, Marker, HEIGHT, WIDTH};
pub use player::{Player, Seat};
pub use state::{Game, GameOutcome, MoveOutcome};
