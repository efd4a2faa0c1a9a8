use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gauss_solver::elimination::PivotMode;
use gauss_solver::tasks::TaskPlan;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding plik1.csv .. plik4.csv
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Solve a single file with this pivoting mode instead of the four tasks
    #[arg(short, long, value_enum, requires = "input")]
    pub mode: Option<PivotMode>,

    #[arg(short, long, requires = "mode")]
    pub input: Option<PathBuf>,
}

fn run_tasks(args: Args) -> Result<()> {
    let plan = match (args.mode, args.input) {
        (Some(mode), Some(input)) => TaskPlan::single(mode, input),
        _ => TaskPlan::standard(&args.data_dir),
    };
    let stdout = io::stdout();
    plan.run_all(&mut stdout.lock()).context("running tasks")
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_tasks(args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}
