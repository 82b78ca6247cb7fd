use std::io::{self, BufRead, Write};

use super::board_text::render_text;
use crate::config::{AppConfig, PlayerConfig};
use crate::error::MoveError;
use crate::game::{Game, GameOutcome, MoveOutcome, Player, WIDTH};

/// Line-oriented client: prompts on `output`, reads answers from `input`.
pub struct TextClient<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextClient<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TextClient { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Build both players, asking for any name the config leaves unset.
    pub fn read_players(&mut self, config: &AppConfig) -> io::Result<(Player, Player)> {
        let first = self.read_player(1, &config.first)?;
        let second = self.read_player(2, &config.second)?;
        Ok((first, second))
    }

    fn read_player(&mut self, number: usize, config: &PlayerConfig) -> io::Result<Player> {
        if config.name.is_some() {
            return Ok(config.to_player(""));
        }
        writeln!(self.output, "Enter Player {number}'s name:")?;
        let name = self.read_line()?;
        if name.is_empty() {
            return Ok(config.to_player(format!("Player {number}")));
        }
        Ok(config.to_player(name))
    }

    /// Play one game from a fresh board until it ends, then announce the result.
    pub fn run(&mut self, game: &mut Game) -> io::Result<GameOutcome> {
        game.start_game();
        writeln!(
            self.output,
            "Game started! {} will go first.",
            game.current_player().marker()
        )?;

        let outcome = loop {
            self.output
                .write_all(render_text(&game.board_snapshot()).as_bytes())?;
            writeln!(
                self.output,
                "{}'s turn! Enter column (1-{WIDTH}) to drop your disk:",
                game.current_player().name()
            )?;

            let line = self.read_line()?;
            let Some(column) = parse_column(&line) else {
                writeln!(
                    self.output,
                    "Invalid input. Please enter a valid column number (1-{WIDTH})."
                )?;
                continue;
            };

            match game.play(column) {
                Ok(MoveOutcome::Continue) => {}
                Ok(MoveOutcome::GameOver(outcome)) => break outcome,
                Err(MoveError::InvalidColumn { column }) => writeln!(
                    self.output,
                    "Invalid move! Column {} does not exist. Try again.",
                    column + 1
                )?,
                Err(MoveError::ColumnFull { column }) => writeln!(
                    self.output,
                    "Invalid move! Column {} is full. Try again.",
                    column + 1
                )?,
                Err(MoveError::GameOver) => {
                    writeln!(self.output, "Game is over!")?;
                    if let Some(outcome) = game.outcome() {
                        break outcome;
                    }
                }
            }
        };

        self.output
            .write_all(render_text(&game.board_snapshot()).as_bytes())?;
        match game.winner() {
            Some(winner) => {
                writeln!(self.output, "Congratulations, {}! You win!", winner.name())?
            }
            None => writeln!(self.output, "It's a tie!")?,
        }
        tracing::info!(?outcome, moves = game.move_count(), "game finished");

        Ok(outcome)
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

/// Convert a 1-based column answer into a board column index.
fn parse_column(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok()?.checked_sub(1)
}
