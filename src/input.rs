//! Interactive coordinate input.
//!
//! Prompts are re-issued until both row and column fall inside the board,
//! so the core never sees an out-of-range coordinate.

use std::io::{BufRead, Write};

use log::debug;

use crate::board::{Board, Coord, InputError, Piece};

/// Read one trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, InputError> {
    write!(output, "{label} : ")?;
    output.flush()?;
    read_line(input)?.ok_or(InputError::Exhausted)
}

/// Parse raw components into a coordinate on a `size` board.
///
/// Negative or non-numeric components are rejected.
#[must_use]
pub fn parse_coord(row: &str, col: &str, size: usize) -> Option<Coord> {
    let row = row.trim().parse::<i64>().ok()?;
    let col = col.trim().parse::<i64>().ok()?;
    Coord::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?, size)
}

fn write_invalid<W: Write>(output: &mut W, size: usize) -> Result<(), InputError> {
    writeln!(output, "Invalid position")?;
    writeln!(
        output,
        "Please enter values between 0 and {}",
        size.saturating_sub(1)
    )?;
    Ok(())
}

/// Prompt for a row and column until both lie in `0..size`.
pub fn read_coord<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    size: usize,
) -> Result<Coord, InputError> {
    loop {
        let row = prompt(input, output, "row")?;
        let col = prompt(input, output, "col")?;
        if let Some(coord) = parse_coord(&row, &col, size) {
            return Ok(coord);
        }
        debug!("rejected coordinate ({row}, {col}) for size {size}");
        write_invalid(output, size)?;
    }
}

/// Place `piece` at `(row, col)`, prompting for a replacement position while
/// the given one is off the board.
pub fn place_with_retry<R: BufRead, W: Write>(
    board: &mut Board,
    row: i64,
    col: i64,
    piece: Piece,
    input: &mut R,
    output: &mut W,
) -> Result<Coord, InputError> {
    let size = board.size();
    let given = usize::try_from(row)
        .ok()
        .zip(usize::try_from(col).ok())
        .and_then(|(r, c)| Coord::new(r, c, size));

    let coord = match given {
        Some(coord) => coord,
        None => {
            write_invalid(output, size)?;
            read_coord(input, output, size)?
        }
    };
    board.place(coord, piece);
    Ok(coord)
}
