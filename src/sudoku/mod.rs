//! A 9×9 sudoku as a CNF problem.
//!
//! A cell takes a variable per candidate value, with the variable id encoding
//! the position: `line·100 + column·10 + value`, each component in 1..=9.
//! So variable 347 reads "the cell at line 3, column 4, holds 7".
//!
//! The constraints, per value and in clause id order:
//!
//! - For every line, no two columns share the value.
//! - For every column, no two lines share the value.
//! - For every square, no two cells (differing in both line and column) share
//!   the value.
//! - Every cell holds at least one value.
//! - No cell holds two values.
//!
//! Known cells arrive as a grid file listing one triplet per line, in any
//! order, and are added as unit clauses.

use std::io::BufRead;

use rand::Rng;

use crate::context::GenericContext;
use crate::db::keys::ClauseId;
use crate::misc::log::targets;
use crate::structures::literal::RawLiteral;
use crate::structures::valuation::Valuation;
use crate::types::err;

/// Cells per line, lines per grid, candidate values per cell.
pub const SIZE: u32 = 9;

/// Lines and columns per square.
pub const SQUARE_SIZE: u32 = 3;

/// A solved or partially-solved grid, by line then column; zero for no value.
pub type Grid = [[u32; SIZE as usize]; SIZE as usize];

/// The variable id of "the cell at (line, column) holds value".
pub fn cell_id(line: u32, column: u32, value: u32) -> u32 {
    line * 100 + column * 10 + value
}

/// Adds the constraints of an empty 9×9 sudoku to the context.
///
/// Returns the next free clause id.
pub fn generate_constraints<R: Rng + std::default::Default>(
    context: &mut GenericContext<R>,
) -> Result<ClauseId, err::Build> {
    log::debug!(target: targets::SUDOKU, "Generating sudoku constraints…");
    let mut clause_id = 1;

    for value in 1..=SIZE {
        for line in 1..=SIZE {
            generate_line_constraints(context, &mut clause_id, value, line)?;
            generate_column_constraints(context, &mut clause_id, value, line)?;
        }
        for square_line in 1..=SQUARE_SIZE {
            for square_column in 1..=SQUARE_SIZE {
                generate_square_constraints(
                    context,
                    &mut clause_id,
                    value,
                    square_line,
                    square_column,
                )?;
            }
        }
    }

    generate_values_per_cell(context, &mut clause_id)?;
    generate_unique_value_per_cell(context, &mut clause_id)?;

    Ok(clause_id)
}

/// Adds the known cells of a grid as unit clauses, numbering from the given id.
pub fn add_known_cells<R: Rng + std::default::Default>(
    context: &mut GenericContext<R>,
    cells: &[RawLiteral],
    mut clause_id: ClauseId,
) -> Result<ClauseId, err::Build> {
    for cell in cells {
        context.add_clause(clause_id, &[*cell])?;
        clause_id += 1;
    }
    Ok(clause_id)
}

/// Reads a grid file: one known-cell triplet per line, blank lines ignored.
pub fn load_grid(mut reader: impl BufRead) -> Result<Vec<RawLiteral>, err::Grid> {
    let mut cells = Vec::default();
    let mut buffer = String::with_capacity(64);
    let mut line_counter = 0;

    loop {
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::Grid::Line(line_counter)),
        }

        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            let id: u32 = trimmed.parse().map_err(|_| err::Grid::Cell(line_counter))?;

            let (line, column, value) = (id / 100, (id / 10) % 10, id % 10);
            let in_range = |c: u32| (1..=SIZE).contains(&c);
            if !(in_range(line) && in_range(column) && in_range(value)) {
                return Err(err::Grid::Cell(line_counter));
            }

            log::debug!(target: targets::SUDOKU, "Known cell: line {line}, column {column}, value {value}.");
            cells.push(RawLiteral::positive(id));
        }

        buffer.clear();
    }

    Ok(cells)
}

/// The solved grid named by a satisfiable valuation.
///
/// Positive literals name cell values; every cell must be named exactly once
/// for the grid to be complete.
pub fn grid_from_valuation(valuation: &Valuation) -> Result<Grid, err::Grid> {
    let mut grid: Grid = [[0; SIZE as usize]; SIZE as usize];
    let mut settled = 0;

    let in_range = |c: u32| (1..=SIZE).contains(&c);
    for literal in valuation.literals() {
        if literal.polarity() {
            let id = literal.id();
            let (line, column, value) = (id / 100, (id / 10) % 10, id % 10);
            if !(in_range(line) && in_range(column) && in_range(value)) {
                continue;
            }
            if grid[line as usize - 1][column as usize - 1] == 0 {
                settled += 1;
            }
            grid[line as usize - 1][column as usize - 1] = value;
        }
    }

    match settled {
        81 => Ok(grid),
        _ => Err(err::Grid::Incomplete),
    }
}

/// The grid as lines of digits, zero shown as a dot.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(256);
    for line in grid {
        for (column, value) in line.iter().enumerate() {
            if column > 0 {
                out.push(' ');
            }
            match value {
                0 => out.push('.'),
                v => out.push_str(&v.to_string()),
            }
        }
        out.push('\n');
    }
    out
}

/// For one value and one line: no two columns share the value.
fn generate_line_constraints<R: Rng + std::default::Default>(
    context: &mut GenericContext<R>,
    clause_id: &mut ClauseId,
    value: u32,
    line: u32,
) -> Result<(), err::Build> {
    for start_column in 1..=SIZE {
        for target_column in start_column + 1..=SIZE {
            context
                .new_clause(next(clause_id))
                .negative(cell_id(line, start_column, value))
                .negative(cell_id(line, target_column, value))
                .add()?;
        }
    }
    Ok(())
}

/// For one value and one column: no two lines share the value.
fn generate_column_constraints<R: Rng + std::default::Default>(
    context: &mut GenericContext<R>,
    clause_id: &mut ClauseId,
    value: u32,
    column: u32,
) -> Result<(), err::Build> {
    for start_line in 1..=SIZE {
        for target_line in start_line + 1..=SIZE {
            context
                .new_clause(next(clause_id))
                .negative(cell_id(start_line, column, value))
                .negative(cell_id(target_line, column, value))
                .add()?;
        }
    }
    Ok(())
}

/// For one value and one square: no two cells differing in both line and
/// column share the value.
///
/// Pairs on a shared line or column are already covered by the line and
/// column constraints.
fn generate_square_constraints<R: Rng + std::default::Default>(
    context: &mut GenericContext<R>,
    clause_id: &mut ClauseId,
    value: u32,
    square_line: u32,
    square_column: u32,
) -> Result<(), err::Build> {
    let line_offset = SQUARE_SIZE * (square_line - 1);
    let column_offset = SQUARE_SIZE * (square_column - 1);

    for line in 1..=SQUARE_SIZE {
        for column in 1..=SQUARE_SIZE {
            for target_line in line + 1..=SQUARE_SIZE {
                for target_column in 1..=SQUARE_SIZE {
                    if target_column == column {
                        continue;
                    }
                    context
                        .new_clause(next(clause_id))
                        .negative(cell_id(line + line_offset, column + column_offset, value))
                        .negative(cell_id(
                            target_line + line_offset,
                            target_column + column_offset,
                            value,
                        ))
                        .add()?;
                }
            }
        }
    }
    Ok(())
}

/// For every cell: one clause listing all nine positive candidates.
fn generate_values_per_cell<R: Rng + std::default::Default>(
    context: &mut GenericContext<R>,
    clause_id: &mut ClauseId,
) -> Result<(), err::Build> {
    for line in 1..=SIZE {
        for column in 1..=SIZE {
            let mut builder = context.new_clause(next(clause_id));
            for value in 1..=SIZE {
                builder = builder.positive(cell_id(line, column, value));
            }
            builder.add()?;
        }
    }
    Ok(())
}

/// For every cell and pair of distinct values: not both.
fn generate_unique_value_per_cell<R: Rng + std::default::Default>(
    context: &mut GenericContext<R>,
    clause_id: &mut ClauseId,
) -> Result<(), err::Build> {
    for value in 1..=SIZE {
        for target_value in value + 1..=SIZE {
            for line in 1..=SIZE {
                for column in 1..=SIZE {
                    context
                        .new_clause(next(clause_id))
                        .negative(cell_id(line, column, value))
                        .negative(cell_id(line, column, target_value))
                        .add()?;
                }
            }
        }
    }
    Ok(())
}

fn next(clause_id: &mut ClauseId) -> ClauseId {
    let id = *clause_id;
    *clause_id += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ids_encode_position() {
        assert_eq!(cell_id(3, 4, 7), 347);
        assert_eq!(cell_id(9, 9, 9), 999);
        assert_eq!(cell_id(1, 1, 1), 111);
    }

    #[test]
    fn grid_files_parse() {
        let file = "111\n946\n\n583\n";
        let cells = load_grid(file.as_bytes()).unwrap();
        assert_eq!(
            cells,
            vec![
                RawLiteral::positive(111),
                RawLiteral::positive(946),
                RawLiteral::positive(583),
            ]
        );

        assert_eq!(load_grid("101\n".as_bytes()), Err(err::Grid::Cell(1)));
        assert_eq!(load_grid("letters\n".as_bytes()), Err(err::Grid::Cell(1)));
    }
}
