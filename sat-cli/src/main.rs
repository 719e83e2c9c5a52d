mod dimacs;
mod error;
mod printer;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;
use sat_core::{
    solve_breadth_first_with, solve_depth_first_with, Chooser, FirstUndecided, FormulaStoreBuilder,
    MaxOccurPower, MaxOccurrenceLiteral, SatSolution,
};

use error::CliError;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DriverArg {
    Depth,
    Breadth,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ChooserArg {
    MaxOccurPower,
    FirstUndecided,
    MaxOccurrenceLiteral,
}

impl ChooserArg {
    fn build(self) -> Box<dyn Chooser> {
        match self {
            ChooserArg::MaxOccurPower => Box::new(MaxOccurPower),
            ChooserArg::FirstUndecided => Box::new(FirstUndecided),
            ChooserArg::MaxOccurrenceLiteral => Box::new(MaxOccurrenceLiteral),
        }
    }
}

/// A DPLL SAT solver: unit propagation, pure-literal elimination, and a
/// composite branching heuristic over a bitset search state.
#[derive(Parser, Debug)]
#[command(name = "satcore", version, about)]
struct Cli {
    /// DIMACS CNF input file
    problem: PathBuf,

    /// Where to write the assignment; standard output if omitted
    output: Option<PathBuf>,

    /// Search driver to use. The original source's `main` always runs the
    /// breadth-first frontier, so that remains the default here.
    #[arg(long, value_enum, default_value = "breadth")]
    driver: DriverArg,

    /// Branching heuristic to use
    #[arg(long, value_enum, default_value = "max-occur-power")]
    chooser: ChooserArg,
}

fn run(cli: &Cli) -> Result<SatSolution, CliError> {
    let file = File::open(&cli.problem).map_err(|source| CliError::Open {
        path: cli.problem.display().to_string(),
        source,
    })?;
    let parsed = dimacs::parse(BufReader::new(file))?;

    let mut builder = FormulaStoreBuilder::new(parsed.num_vars, parsed.num_clauses);
    for clause in parsed.clauses {
        builder.push_clause(clause).map_err(CliError::Solve)?;
    }
    let store = builder.build().map_err(CliError::Solve)?;

    let chooser = cli.chooser.build();
    let solution = match cli.driver {
        DriverArg::Depth => solve_depth_first_with(&store, chooser.as_ref()),
        DriverArg::Breadth => {
            solve_breadth_first_with(&store, chooser.as_ref()).map_err(CliError::Solve)?
        }
    };

    Ok(solution)
}

fn write_solution(cli: &Cli, solution: &SatSolution) -> Result<(), CliError> {
    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            printer::print_solution(&mut out, solution).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })?;
            out.flush().map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            printer::print_solution(&mut out, solution).map_err(|source| CliError::Write {
                path: "<stdout>".to_string(),
                source,
            })
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = run(&cli).and_then(|solution| write_solution(&cli, &solution));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
