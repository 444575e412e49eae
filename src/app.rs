// src/app.rs
//! Wiring from parsed arguments to use cases and stdout.

use std::io;

use anyhow::Result;
use log::info;
use microbench_domain::{
    config::{CounterConfig, Delimiter, GenerateConfig, MatchConfig, MatmulConfig, SolveConfig},
    model::SudokuSolver,
    pattern::LinePattern,
};
use microbench_infra::{
    input::DelimitedReader,
    output::{LineWriter, ReportWriter, write_scalar},
};
use microbench_ports::records::RecordSource;
use microbench_usecase::{
    CountRecords, CountRecordsOutput, GenerateIntegers, MatchLines, MultiplyMatrices, SolvePuzzles,
};

use crate::cli::{FreqArgs, GenintArgs, MatmulArgs, PatmatchArgs, SudokuArgs};

pub fn run_freq(args: &FreqArgs) -> Result<()> {
    let config = CounterConfig::from(args);

    let output = match args.input_path() {
        Some(path) => {
            let mut reader = DelimitedReader::open(path, config.delimiter, config.keep_delimiter)?;
            count(&mut reader, &config)?
        }
        None => count(&mut DelimitedReader::stdin(config.delimiter, config.keep_delimiter), &config)?,
    };

    let mut sink = ReportWriter::new(io::stdout().lock(), config.format);
    output.publish(&mut sink, config.top)?;
    Ok(())
}

fn count(source: &mut dyn RecordSource, config: &CounterConfig) -> Result<CountRecordsOutput> {
    let output = CountRecords::new(source).run(config)?;
    info!("{} records, {} distinct", output.records_read, output.table.distinct());
    Ok(output)
}

pub fn run_matmul(args: &MatmulArgs) -> Result<()> {
    let config = MatmulConfig::from(args);
    let output = MultiplyMatrices::new(config).run()?;
    write_scalar(io::stdout().lock(), output.center())?;
    Ok(())
}

pub fn run_patmatch(args: &PatmatchArgs) -> Result<()> {
    let config = MatchConfig::from(args);
    let pattern = LinePattern::new(&config.pattern)?;
    let mut source = DelimitedReader::stdin(config.delimiter, false);
    let mut sink = LineWriter::new(io::stdout().lock(), config.delimiter.byte());
    let output = MatchLines::new(&mut source, &mut sink).run(&pattern, config.line_numbers)?;
    info!("{} of {} lines matched", output.lines_matched, output.lines_read);
    Ok(())
}

pub fn run_genint(args: &GenintArgs) -> Result<()> {
    let config = GenerateConfig::from(args);
    let mut sink = LineWriter::new(io::stdout().lock(), b'\n');
    GenerateIntegers::new(&mut sink).run(&config)?;
    Ok(())
}

pub fn run_sudoku(args: &SudokuArgs) -> Result<()> {
    let config = SolveConfig::from(args);
    let solver = SudokuSolver::new();
    let mut source = DelimitedReader::stdin(Delimiter::NEWLINE, false);
    let mut sink = LineWriter::new(io::stdout().lock(), b'\n');
    let output = SolvePuzzles::new(&mut source, &mut sink).run(&solver, &config)?;
    info!("{} puzzles, {} solutions", output.puzzles_solved, output.solutions_found);
    Ok(())
}
