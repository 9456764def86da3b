//! gridpath: find a path across a weighted obstacle grid in the terminal.
//!
//! ```bash
//! gridpath --width 40 --height 20 --algorithm astar --diagonal --animate
//! gridpath --load maze.txt --compare
//! ```

mod render;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridpath_core::Point;
use gridpath_map::{DEFAULT_MAZE_DENSITY, Grid, MazeConfig, MazeGen, PaintObserver, solve};
use gridpath_search::{AlgoResult, Algorithm};

use render::Screen;

#[derive(Parser, Debug)]
#[command(name = "gridpath", version)]
#[command(about = "Find a path across a weighted obstacle grid")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 20)]
    height: i32,

    /// Search algorithm: bfs, dijkstra or astar
    #[arg(short, long, default_value = "dijkstra")]
    algorithm: Algorithm,

    /// Allow diagonal moves
    #[arg(short, long)]
    diagonal: bool,

    /// Obstacle probability for the random maze (0 = open field)
    #[arg(long, default_value_t = DEFAULT_MAZE_DENSITY)]
    density: f64,

    /// Seed for the random maze
    #[arg(long)]
    seed: Option<u64>,

    /// Load the grid from a file instead of generating one
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Save the grid to a file before searching
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Run every algorithm and print a comparison table
    #[arg(long)]
    compare: bool,

    /// Redraw the grid while the search runs
    #[arg(long)]
    animate: bool,

    /// Delay between animation frames (milliseconds)
    #[arg(long, default_value_t = 30)]
    frame_ms: u64,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let grid = build_grid(&args)?;
    if let Some(path) = &args.save {
        fs::write(path, grid.serialize())?;
        log::info!("saved grid to {}", path.display());
    }

    if args.compare {
        compare(&grid);
        return Ok(());
    }

    let (result, mut shown) = run(&grid, &args)?;
    let path: Vec<Point> = result.path.iter().map(|&n| grid.point(n)).collect();
    shown.mark_path(&path);
    render::draw(&mut io::stdout(), &shown)?;
    report(args.algorithm, &result);
    Ok(())
}

fn build_grid(args: &Args) -> Result<Grid, Box<dyn std::error::Error>> {
    let mut grid = match &args.load {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let grid: Grid = text.trim_end_matches(['\r', '\n']).parse()?;
            log::info!(
                "loaded {}x{} grid from {}",
                grid.width(),
                grid.height(),
                path.display()
            );
            grid
        }
        None => {
            let seed = args.seed.unwrap_or_else(|| rand::rng().random());
            let mut grid = Grid::new(args.width, args.height);
            let config = MazeConfig {
                density: args.density,
            };
            let placed =
                MazeGen::with_config(StdRng::seed_from_u64(seed), config).generate(&mut grid);
            log::info!("maze seed {seed}: {placed} obstacles");
            grid
        }
    };
    grid.set_diagonals(args.diagonal);
    Ok(grid)
}

/// Search a snapshot of `grid` on a worker thread while painting progress
/// onto a display copy. Returns the result and the painted display.
fn run(grid: &Grid, args: &Args) -> Result<(AlgoResult, Grid), Box<dyn std::error::Error>> {
    let snapshot = grid.clone();
    let display = Arc::new(Mutex::new(grid.clone()));
    let mut observer = PaintObserver::new(Arc::clone(&display));
    let algorithm = args.algorithm;

    let worker = thread::spawn(move || {
        let result = algorithm.run(
            &snapshot,
            snapshot.source_node(),
            snapshot.destination_node(),
            &mut observer,
        );
        observer.finish();
        result
    });

    if args.animate {
        let mut screen = Screen::enter()?;
        let delay = Duration::from_millis(args.frame_ms);
        while !worker.is_finished() {
            {
                let shown = display.lock().unwrap_or_else(PoisonError::into_inner);
                screen.frame(&shown)?;
            }
            thread::sleep(delay);
        }
    }

    let result = worker.join().map_err(|_| "search thread panicked")?;
    let shown = display
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    Ok((result, shown))
}

fn report(algorithm: Algorithm, result: &AlgoResult) {
    if result.success {
        println!(
            "{algorithm}: cost {} over {} steps, {} nodes visited in {:?}",
            result.cost,
            result.hops(),
            result.visited,
            result.elapsed
        );
    } else {
        println!(
            "{algorithm}: no path, {} nodes visited in {:?}",
            result.visited, result.elapsed
        );
    }
}

fn compare(grid: &Grid) {
    println!("{grid}");
    println!(
        "{:<22} {:>8} {:>6} {:>8} {:>12}",
        "algorithm", "cost", "steps", "visited", "elapsed"
    );
    for algorithm in Algorithm::ALL {
        let sol = solve(grid, algorithm);
        let res = &sol.result;
        let (cost, steps) = if sol.success() {
            (res.cost.to_string(), res.hops().to_string())
        } else {
            ("-".to_string(), "-".to_string())
        };
        println!(
            "{:<22} {:>8} {:>6} {:>8} {:>12}",
            algorithm.to_string(),
            cost,
            steps,
            res.visited,
            format!("{:?}", res.elapsed)
        );
    }
}
