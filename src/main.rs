use std::io::Read;
use std::path::PathBuf;

use basket_reach::{
    format_answer, parse_instance, solve_with_options, ExpansionOrder, Limits, MemoKind,
    SearchOptions, SolveError,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "basket_reach")]
#[command(about = "Decide whether some subset of items hits a target cost and weight exactly", long_about = None)]
struct Args {
    /// Read the instance from this file instead of stdin.
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Largest accepted item count.
    #[clap(long, default_value_t = basket_reach::limits::DEFAULT_N_MAX)]
    n_max: usize,

    /// Largest accepted target cost.
    #[clap(long, default_value_t = basket_reach::limits::DEFAULT_COST_MAX)]
    cost_max: usize,

    /// Largest accepted target weight.
    #[clap(long, default_value_t = basket_reach::limits::DEFAULT_WEIGHT_MAX)]
    weight_max: usize,

    #[clap(long, value_enum, default_value_t = OrderArg::SkipFirst)]
    order: OrderArg,

    #[clap(long, value_enum, default_value_t = MemoArg::Dense)]
    memo: MemoArg,

    /// Print search statistics to stderr.
    #[clap(long)]
    stats: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    SkipFirst,
    BuyFirst,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MemoArg {
    Dense,
    Sparse,
}

enum Failure {
    Io(std::io::Error),
    Solve(SolveError),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("basket_reach=warn")),
        )
        .init();

    match execute(Args::parse()) {
        Ok(answer) => {
            println!("{answer}");
            std::process::exit(exitcode::OK);
        }
        Err(Failure::Io(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(exitcode::IOERR);
        }
        Err(Failure::Solve(e)) => {
            eprintln!("Error: {e}");
            let code = match e {
                SolveError::CapacityExceeded { .. } => exitcode::CONFIG,
                SolveError::OutOfMemory { .. } => exitcode::OSERR,
                SolveError::InvalidInput(_) => exitcode::DATAERR,
            };
            std::process::exit(code);
        }
    }
}

fn execute(args: Args) -> Result<&'static str, Failure> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(Failure::Io)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(Failure::Io)?;
            buf
        }
    };

    let limits = Limits::new(args.n_max, args.cost_max, args.weight_max);
    let instance = parse_instance(&text, &limits).map_err(Failure::Solve)?;
    let options = SearchOptions {
        order: match args.order {
            OrderArg::SkipFirst => ExpansionOrder::SkipFirst,
            OrderArg::BuyFirst => ExpansionOrder::BuyFirst,
        },
        memo: match args.memo {
            MemoArg::Dense => MemoKind::Dense,
            MemoArg::Sparse => MemoKind::Sparse,
        },
    };
    let outcome = solve_with_options(&instance, options).map_err(Failure::Solve)?;
    if args.stats {
        let s = outcome.stats;
        eprintln!(
            "expanded {} | discarded {} | pushed {} | max stack {} | states {}",
            s.expanded,
            s.discarded,
            s.pushed,
            s.max_stack,
            instance.state_count()
        );
    }
    Ok(format_answer(outcome.reachable))
}
