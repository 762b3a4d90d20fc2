use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use maze_gen::{GeneratorKind, MazeConfig, StepDriver, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Backtracker,
    GrowingTree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ActiveCell {
    Random,
    Newest,
    Oldest,
}

impl From<ActiveCell> for Strategy {
    fn from(active: ActiveCell) -> Self {
        match active {
            ActiveCell::Random => Strategy::Random,
            ActiveCell::Newest => Strategy::Newest,
            ActiveCell::Oldest => Strategy::Oldest,
        }
    }
}

/// Grow a perfect maze and print it to the terminal.
#[derive(Debug, Parser)]
#[command(name = "maze-gen", version)]
struct Args {
    #[arg(long, default_value_t = 15)]
    width: usize,

    #[arg(long, default_value_t = 15)]
    height: usize,

    #[arg(long, value_enum, default_value_t = Algorithm::Backtracker)]
    algorithm: Algorithm,

    /// Active cell selection, growing tree only.
    #[arg(long, value_enum, default_value_t = ActiveCell::Newest)]
    strategy: ActiveCell,

    /// Fixed seed for a reproducible maze.
    #[arg(long)]
    seed: Option<u64>,

    /// Redraw the maze after every tick instead of only at the end.
    #[arg(long)]
    animate: bool,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    steps_per_tick: u64,

    #[arg(long, default_value_t = 30)]
    tick_ms: u64,
}

fn generator_kind(args: &Args) -> GeneratorKind {
    match args.algorithm {
        Algorithm::Backtracker => GeneratorKind::RecursiveBacktracker,
        Algorithm::GrowingTree => GeneratorKind::GrowingTree(args.strategy.into()),
    }
}

fn animate(driver: &mut StepDriver, steps_per_tick: usize, tick: Duration) -> anyhow::Result<()> {
    let stdout = std::io::stdout();

    while !driver.is_done() {
        driver.run_for_n_steps(steps_per_tick)?;

        let mut out = stdout.lock();
        // clear screen, cursor home
        write!(out, "\x1b[2J\x1b[H{}", driver.grid().render_ascii())?;
        writeln!(out, "steps: {}", driver.steps_taken())?;
        out.flush()?;
        drop(out);

        thread::sleep(tick);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = MazeConfig::new(args.width, args.height).with_algorithm(generator_kind(&args));
    config.seed = args.seed;

    let mut driver = config
        .build()
        .with_context(|| format!("cannot start a {}x{} maze", args.width, args.height))?;
    info!("generating with {:?}", driver.kind());

    if args.animate {
        let steps_per_tick = usize::try_from(args.steps_per_tick)?;
        animate(&mut driver, steps_per_tick, Duration::from_millis(args.tick_ms))?;
    } else {
        driver.run_to_completion()?;
        print!("{}", driver.grid().render_ascii());
    }

    println!(
        "{} cells, {} passages, {} steps",
        driver.grid().len(),
        driver.grid().passages().len(),
        driver.steps_taken()
    );

    Ok(())
}
