//! Miscellaneous project utilities.

use crate::{EDGE_LENGTH, NUM_SPACES};
use itertools::Itertools;
use std::fmt::{self, Formatter};

const COLUMN_LABELS: &str = "ABCDEFGH";

/// Write one symbol per square as a grid with lettered columns and numbered rows.
/// `symbols` must yield exactly 64 items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(symbols: T, f: &mut Formatter) -> fmt::Result {
    let symbols: Vec<char> = symbols.collect();
    if symbols.len() != NUM_SPACES {
        return Err(fmt::Error);
    }

    write!(f, "   {}", COLUMN_LABELS.chars().join(" "))?;
    for (row, cells) in symbols.chunks(EDGE_LENGTH).enumerate() {
        write!(f, "\n {} {}", row + 1, cells.iter().join(" "))?;
    }
    Ok(())
}
