//! Text presentation: board rendering and the interactive line-based client
//! that drives a [`Game`](crate::game::Game) from a reader and a writer.

mod board_text;
mod client;

pub use board_text::render_text;
pub use client::TextClient;
