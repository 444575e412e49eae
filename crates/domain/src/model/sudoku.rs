//! 9x9 sudoku grids and an exact-cover solver that enumerates every solution.
//!
//! Each placement of a digit in a cell satisfies four constraints: the cell
//! is filled, and the digit appears once in its box, row and column. The
//! solver repeatedly picks the open constraint with the fewest remaining
//! placements and backtracks iteratively over them.

use std::fmt;

use microbench_shared_kernel::{DomainError, DomainResult};

pub const CELLS: usize = 81;
const PLACEMENTS: usize = CELLS * 9;
const CONSTRAINTS: usize = CELLS * 4;

/// Added to a constraint's counter once a chosen placement satisfies it.
const COVERED: u8 = 0x80;
/// Larger than any open counter.
const NO_PICK: u8 = 10;

/// A 9x9 grid in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// `0` marks an empty cell.
    cells: [u8; CELLS],
}

impl Grid {
    /// Reads the first 81 bytes of `line`. `1` to `9` are givens; any other
    /// byte (`.`, `0`, `_`, ...) is an empty cell.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPuzzle` when `line` is shorter than 81 bytes.
    pub fn parse(line: &[u8]) -> DomainResult<Self> {
        let Some(digits) = line.get(..CELLS) else {
            return Err(DomainError::InvalidPuzzle {
                reason: format!("expected {CELLS} cells, got {}", line.len()),
            });
        };

        let mut cells = [0; CELLS];
        for (cell, &byte) in cells.iter_mut().zip(digits) {
            if (b'1'..=b'9').contains(&byte) {
                *cell = byte - b'0';
            }
        }
        Ok(Self { cells })
    }

    /// Digit at `index`, `None` when the cell is empty or out of range.
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied().filter(|&digit| digit != 0)
    }

    pub fn givens(&self) -> usize {
        self.cells.iter().filter(|&&digit| digit != 0).count()
    }

    pub fn is_complete(&self) -> bool {
        self.givens() == CELLS
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.cells {
            let symbol = if digit == 0 { '.' } else { char::from(b'0' + digit) };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Placement/constraint incidence tables, built once and shared by every solve.
#[derive(Debug, Clone)]
pub struct SudokuSolver {
    /// Placement `9 * cell + digit - 1` to its four constraints.
    constraints_of: Vec<[u16; 4]>,
    /// Constraint to the nine placements that satisfy it.
    placements_of: Vec<[u16; 9]>,
}

impl Default for SudokuSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SudokuSolver {
    pub fn new() -> Self {
        let mut constraints_of = Vec::with_capacity(PLACEMENTS);
        for row in 0..9u16 {
            for col in 0..9u16 {
                let boxed = row / 3 * 3 + col / 3;
                for digit in 0..9u16 {
                    constraints_of.push([
                        9 * row + col,
                        9 * boxed + digit + 81,
                        9 * row + digit + 162,
                        9 * col + digit + 243,
                    ]);
                }
            }
        }

        let mut placements_of = vec![[0u16; 9]; CONSTRAINTS];
        let mut filled = vec![0usize; CONSTRAINTS];
        for (placement, constraints) in constraints_of.iter().enumerate() {
            for &constraint in constraints {
                let constraint = usize::from(constraint);
                placements_of[constraint][filled[constraint]] = placement as u16;
                filled[constraint] += 1;
            }
        }

        Self { constraints_of, placements_of }
    }

    /// All solutions of `grid` in search order, stopping after `limit` when given.
    ///
    /// Contradictory givens yield no solutions. A nearly empty grid has an
    /// astronomical number of solutions, so callers should pass a limit for
    /// untrusted input.
    pub fn solve(&self, grid: &Grid, limit: Option<usize>) -> Vec<Grid> {
        let limit = limit.unwrap_or(usize::MAX);
        let mut solutions = Vec::new();
        if limit == 0 {
            return solutions;
        }

        let mut search = Search::new(self);
        for (cell, &digit) in grid.cells.iter().enumerate() {
            if digit == 0 {
                continue;
            }
            let placement = (9 * cell + usize::from(digit - 1)) as u16;
            if search.blocked[usize::from(placement)] != 0 {
                return solutions;
            }
            search.apply(placement, true);
        }

        let target = CELLS - grid.givens();
        let mut constraint_at = [0u16; CELLS];
        let mut choice_at: [Option<u8>; CELLS] = [None; CELLS];
        let mut depth = 0;
        let mut forward = true;
        let mut pick = Pick::NONE;

        loop {
            while depth < target {
                if forward {
                    if pick.remaining > 1 {
                        for (constraint, &remaining) in search.open.iter().enumerate() {
                            if remaining < pick.remaining {
                                pick = Pick { remaining, constraint: constraint as u16 };
                                if remaining <= 1 {
                                    break;
                                }
                            }
                        }
                    }
                    constraint_at[depth] = pick.constraint;
                    if pick.remaining == 0 || pick.remaining == NO_PICK {
                        // Dead end: some constraint can no longer be satisfied.
                        if depth == 0 {
                            return solutions;
                        }
                        depth -= 1;
                        forward = false;
                        continue;
                    }
                }

                let placements = &self.placements_of[usize::from(constraint_at[depth])];
                if !forward && let Some(k) = choice_at[depth] {
                    search.apply(placements[usize::from(k)], false);
                }
                let start = choice_at[depth].map_or(0, |k| k + 1);
                match (start..9).find(|&k| search.blocked[usize::from(placements[usize::from(k)])] == 0) {
                    Some(k) => {
                        pick = search.apply(placements[usize::from(k)], true);
                        choice_at[depth] = Some(k);
                        forward = true;
                        depth += 1;
                    }
                    None => {
                        choice_at[depth] = None;
                        if depth == 0 {
                            return solutions;
                        }
                        depth -= 1;
                        forward = false;
                    }
                }
            }

            let mut solved = *grid;
            for (&constraint, &choice) in constraint_at.iter().zip(&choice_at).take(depth) {
                if let Some(k) = choice {
                    let placement = usize::from(self.placements_of[usize::from(constraint)][usize::from(k)]);
                    solved.cells[placement / 9] = (placement % 9 + 1) as u8;
                }
            }
            solutions.push(solved);

            if solutions.len() >= limit || depth == 0 {
                return solutions;
            }
            depth -= 1;
            forward = false;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Pick {
    remaining: u8,
    constraint: u16,
}

impl Pick {
    const NONE: Pick = Pick { remaining: NO_PICK, constraint: 0 };
}

struct Search<'a> {
    solver: &'a SudokuSolver,
    /// Per placement, how many chosen placements conflict with it. Zero means available.
    blocked: [u8; PLACEMENTS],
    /// Per constraint, the number of available placements, plus `COVERED` once satisfied.
    open: [u8; CONSTRAINTS],
}

impl<'a> Search<'a> {
    fn new(solver: &'a SudokuSolver) -> Self {
        Self { solver, blocked: [0; PLACEMENTS], open: [9; CONSTRAINTS] }
    }

    /// Chooses (`select`) or withdraws a placement. When choosing, returns the
    /// tightest constraint among those whose counters dropped.
    fn apply(&mut self, placement: u16, select: bool) -> Pick {
        let solver = self.solver;
        let constraints = &solver.constraints_of[usize::from(placement)];
        let mut pick = Pick::NONE;

        for &constraint in constraints {
            let slot = &mut self.open[usize::from(constraint)];
            if select {
                *slot += COVERED;
            } else {
                *slot -= COVERED;
            }
        }

        for &constraint in constraints {
            for &other in &solver.placements_of[usize::from(constraint)] {
                let other = usize::from(other);
                if select {
                    self.blocked[other] += 1;
                    if self.blocked[other] == 1 {
                        for &touched in &solver.constraints_of[other] {
                            let slot = &mut self.open[usize::from(touched)];
                            *slot -= 1;
                            if *slot < pick.remaining {
                                pick = Pick { remaining: *slot, constraint: touched };
                            }
                        }
                    }
                } else {
                    self.blocked[other] -= 1;
                    if self.blocked[other] == 0 {
                        for &touched in &solver.constraints_of[other] {
                            self.open[usize::from(touched)] += 1;
                        }
                    }
                }
            }
        }
        pick
    }
}
