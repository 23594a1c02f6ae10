use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::{ArgAction, Parser};

use mazegen::{Maze, MazeConfig, MazeError, logging, render::TerminalAnimator};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Width of the maze in cells
    #[arg(default_value_t = 10)]
    width: usize,
    /// Height of the maze in cells
    #[arg(default_value_t = 10)]
    height: usize,
    /// Seed for reproducible mazes
    #[arg(short, long, env = "MAZEGEN_SEED")]
    seed: Option<u64>,
    /// Print every generation step, marking visited cells with 'V'
    #[arg(short, long, env = "MAZEGEN_DEBUG")]
    debug: bool,
    /// Redraw the maze in place while it is generated
    #[arg(short, long)]
    animate: bool,
    /// Pause between animation frames, in milliseconds
    #[arg(long, default_value_t = 10)]
    delay_ms: u64,
    /// Cell column of the entry in the top wall
    #[arg(long)]
    entry: Option<usize>,
    /// Cell column of the exit in the bottom wall
    #[arg(long)]
    exit: Option<usize>,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            debug: self.debug || self.animate,
            entry_column: self.entry,
            exit_column: self.exit,
        }
    }
}

fn run(args: &Args) -> Result<(), MazeError> {
    let config = args.config();
    let mut maze = if args.animate {
        let mut animator = TerminalAnimator::stdout(Duration::from_millis(args.delay_ms));
        let maze = Maze::with_observer(&config, &mut animator)?;
        animator.finish()?;
        println!();
        maze
    } else {
        Maze::from_config(&config)?
    };
    maze.display()
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = match logging::init(args.verbose, args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: cannot open log file: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
