use std::fmt::Write;

use crate::game::{Grid, WIDTH};

/// Render a grid as text: a 1-based column header, then one line per row with
/// `-` for an empty cell and the marker's first character otherwise.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::new();

    for column in 0..WIDTH {
        let _ = write!(out, " {} ", column + 1);
    }
    out.push('\n');

    for row in grid {
        for cell in row {
            let symbol = cell.as_ref().map_or('-', |marker| marker.symbol());
            let _ = write!(out, " {symbol} ");
        }
        out.push('\n');
    }
    out.push('\n');

    out
}
