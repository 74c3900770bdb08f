use heron_sat::{config::Config, context::Context, reports, sudoku};

/// The familiar example grid with a unique solution.
const PUZZLE: [[u32; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

const SOLUTION: [[u32; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

fn grid_file(puzzle: &[[u32; 9]; 9]) -> String {
    let mut out = String::new();
    for (line, values) in puzzle.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            if *value != 0 {
                out.push_str(
                    &sudoku::cell_id(line as u32 + 1, column as u32 + 1, *value).to_string(),
                );
                out.push('\n');
            }
        }
    }
    out
}

fn loaded_context(puzzle: &[[u32; 9]; 9]) -> Context {
    let mut the_context = Context::from_config(Config::default());
    let next_id = sudoku::generate_constraints(&mut the_context).unwrap();

    let cells = sudoku::load_grid(grid_file(puzzle).as_bytes()).unwrap();
    sudoku::add_known_cells(&mut the_context, &cells, next_id).unwrap();
    the_context
}

#[test]
fn the_known_grid_solves_to_its_unique_solution() {
    let mut the_context = loaded_context(&PUZZLE);

    assert!(the_context.solve().is_ok());
    assert_eq!(the_context.report(), reports::Solve::Satisfiable);

    // Exactly one positive literal per cell.
    let positive = the_context
        .valuation()
        .literals()
        .iter()
        .filter(|l| l.polarity())
        .count();
    assert_eq!(positive, 81);

    let grid = sudoku::grid_from_valuation(the_context.valuation()).unwrap();
    assert_eq!(grid, SOLUTION);

    // And the checker agrees with the valuation.
    let mut checker = loaded_context(&PUZZLE);
    assert!(checker
        .check_solution(the_context.valuation().literals())
        .unwrap());
}

#[test]
fn an_unsolvable_grid_reports_unsatisfiable() {
    // Two fives on one line.
    let mut contradiction = PUZZLE;
    contradiction[0][3] = 5;

    let mut the_context = loaded_context(&contradiction);
    assert!(the_context.solve().is_ok());
    assert_eq!(the_context.report(), reports::Solve::Unsatisfiable);
}

#[test]
fn grid_formatting_shows_holes_as_dots() {
    let mut grid: sudoku::Grid = [[0; 9]; 9];
    grid[0][0] = 5;
    let formatted = sudoku::format_grid(&grid);
    assert!(formatted.starts_with("5 . ."));
    assert_eq!(formatted.lines().count(), 9);
}
