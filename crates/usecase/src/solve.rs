use log::{debug, warn};
use microbench_domain::{
    config::SolveConfig,
    model::{Grid, SudokuSolver},
};
use microbench_ports::{
    lines::LineSink,
    records::{RecordEvent, RecordSource},
};
use microbench_shared_kernel::{ErrorContext, Result};

use crate::dto::SolvePuzzlesOutput;

/// Solves one puzzle per input line.
///
/// Each puzzle's solutions are written one per line, followed by an empty
/// line. Lines shorter than a full grid are skipped without output.
pub struct SolvePuzzles<'a> {
    source: &'a mut dyn RecordSource,
    sink: &'a mut dyn LineSink,
}

impl<'a> SolvePuzzles<'a> {
    pub fn new(source: &'a mut dyn RecordSource, sink: &'a mut dyn LineSink) -> Self {
        Self { source, sink }
    }

    /// # Errors
    ///
    /// Fails only when the sink cannot be written. Read errors end the input.
    pub fn run(&mut self, solver: &SudokuSolver, config: &SolveConfig) -> Result<SolvePuzzlesOutput> {
        let mut output = SolvePuzzlesOutput::default();
        let mut line_number = 0u64;

        loop {
            let line = match self.source.next_record() {
                Ok(RecordEvent::Record(line) | RecordEvent::Partial(line)) => line,
                Ok(RecordEvent::End) => break,
                Err(err) => {
                    warn!("input ended early after {line_number} lines: {err}");
                    break;
                }
            };
            line_number += 1;

            let grid = match Grid::parse(line) {
                Ok(grid) => grid,
                Err(err) => {
                    debug!("skipping line {line_number}: {err}");
                    output.lines_skipped += 1;
                    continue;
                }
            };
            output.puzzles_solved += 1;

            let solutions = solver.solve(&grid, config.limit);
            if solutions.is_empty() {
                debug!("puzzle on line {line_number} has no solution");
            }
            for solution in &solutions {
                self.sink.write_line(None, solution.to_string().as_bytes()).context("writing solution")?;
            }
            self.sink.write_line(None, b"").context("writing puzzle separator")?;
            output.solutions_found += solutions.len() as u64;
        }

        self.sink.flush().context("flushing solutions")?;
        debug!(
            "{} puzzles, {} solutions, {} lines skipped",
            output.puzzles_solved, output.solutions_found, output.lines_skipped
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use microbench_shared_kernel::{InfraResult, InfrastructureError};

    use super::*;

    const EASY: &str = "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const EASY_SOLVED: &str = "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
    const TWO_WAYS: &str = "4.3921.579.7345.21251876493548132976729564138136798245372689514814253769695417382";

    enum Step {
        Line(&'static str),
        Partial(&'static str),
        Fail,
    }

    struct ScriptedSource(VecDeque<Step>);

    impl RecordSource for ScriptedSource {
        fn next_record(&mut self) -> InfraResult<RecordEvent<'_>> {
            match self.0.pop_front() {
                Some(Step::Line(line)) => Ok(RecordEvent::Record(line.as_bytes())),
                Some(Step::Partial(line)) => Ok(RecordEvent::Partial(line.as_bytes())),
                Some(Step::Fail) => Err(InfrastructureError::InputRead {
                    source_name: "script".into(),
                    source: std::io::Error::other("unplugged"),
                }),
                None => Ok(RecordEvent::End),
            }
        }

        fn source_name(&self) -> &str {
            "script"
        }
    }

    #[derive(Default)]
    struct Lines(Vec<String>);

    impl LineSink for Lines {
        fn write_line(&mut self, _line_number: Option<u64>, line: &[u8]) -> InfraResult<()> {
            self.0.push(String::from_utf8_lossy(line).into_owned());
            Ok(())
        }

        fn flush(&mut self) -> InfraResult<()> {
            Ok(())
        }
    }

    fn run(steps: Vec<Step>, config: SolveConfig) -> (SolvePuzzlesOutput, Vec<String>) {
        let mut source = ScriptedSource(steps.into());
        let mut sink = Lines::default();
        let output = SolvePuzzles::new(&mut source, &mut sink).run(&SudokuSolver::new(), &config).unwrap();
        (output, sink.0)
    }

    #[test]
    fn each_puzzle_is_followed_by_blank_line() {
        let (output, lines) = run(
            vec![Step::Line(EASY), Step::Line("too short"), Step::Partial(TWO_WAYS)],
            SolveConfig::default(),
        );
        assert_eq!(
            lines,
            [
                EASY_SOLVED,
                "",
                "463921857987345621251876493548132976729564138136798245372689514814253769695417382",
                EASY_SOLVED,
                "",
            ]
        );
        assert_eq!(output, SolvePuzzlesOutput { puzzles_solved: 2, solutions_found: 3, lines_skipped: 1 });
    }

    #[test]
    fn limit_applies_per_puzzle() {
        let (output, lines) = run(vec![Step::Line(TWO_WAYS), Step::Line(TWO_WAYS)], SolveConfig { limit: Some(1) });
        assert_eq!(lines.len(), 4);
        assert_eq!(output.solutions_found, 2);
    }

    #[test]
    fn read_error_ends_input() {
        let (output, lines) = run(vec![Step::Line(EASY), Step::Fail, Step::Line(EASY)], SolveConfig::default());
        assert_eq!(output.puzzles_solved, 1);
        assert_eq!(lines, [EASY_SOLVED, ""]);
    }
}
