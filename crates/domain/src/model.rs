pub mod frequency;
pub mod matrix;
pub mod sudoku;

pub use frequency::{FrequencyReport, FrequencyTable};
pub use matrix::Matrix;
pub use sudoku::{Grid, SudokuSolver};
