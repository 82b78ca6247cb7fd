//! # Connect Four
//!
//! Rules engine for the two-player disk-drop game on a 6x7 grid, with a
//! line-based text client on top.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, turn state machine
//! - [`ui`]: Text rendering and the interactive client
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//!
//! ```
//! use connect_four::game::{Game, MoveOutcome, Player};
//!
//! let mut game = Game::new(Player::new("Emma", "Red"), Player::new("Rob", "Yellow"));
//! assert_eq!(game.play(0), Ok(MoveOutcome::Continue));
//! assert_eq!(game.current_player().name(), "Rob");
//! assert!(!game.is_over());
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
