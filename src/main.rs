use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

use cauchy::{
    Float, ODE, Problem,
    functions::{Growth, Linear, Rational, Zero},
    report::{Csv, Table},
    solve::{Dopri5Reference, compare, compare_parallel},
};

/// Compare Euler, midpoint and RK4 against an adaptive reference solution of
/// dy/dx = f(y, x), y(begin) = y0.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start of the interval
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    begin: Float,

    /// End of the interval
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    end: Float,

    /// Step size, negative to integrate backward
    #[arg(short = 'H', long, default_value_t = 0.1, allow_negative_numbers = true)]
    step: Float,

    /// Initial value y(begin)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    y0: Float,

    /// Right-hand side f(y, x)
    #[arg(short, long, value_enum, default_value_t = Rhs::Rational)]
    rhs: Rhs,

    /// Relative tolerance of the reference solver
    #[arg(long, default_value_t = 1e-10)]
    rtol: Float,

    /// Absolute tolerance of the reference solver
    #[arg(long, default_value_t = 1e-10)]
    atol: Float,

    /// Run the four integrations on separate threads
    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Rhs {
    /// (2 - x^2 - y^2) / (2 + x^2 + x y)
    Rational,
    /// x + y
    Linear,
    /// y
    Growth,
    /// 0
    Zero,
}

impl Rhs {
    fn function(self) -> &'static (dyn ODE + Sync) {
        match self {
            Rhs::Rational => &Rational,
            Rhs::Linear => &Linear,
            Rhs::Growth => &Growth,
            Rhs::Zero => &Zero,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Table,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = SimpleLogger::init(level, Config::default());

    let problem = Problem::builder()
        .begin(cli.begin)
        .end(cli.end)
        .step(cli.step)
        .y0(cli.y0)
        .build();
    let solver = Dopri5Reference::with_tolerances(cli.rtol, cli.atol);
    let f = cli.rhs.function();

    let result = if cli.parallel {
        compare_parallel(&problem, f, &solver)
    } else {
        compare(&problem, f, &solver)
    };

    match result {
        Ok(comparison) => {
            match cli.format {
                Format::Table => print!("{}", Table(&comparison)),
                Format::Csv => print!("{}", Csv(&comparison)),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
