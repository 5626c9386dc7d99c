//! Command-line front end for the exact TSP solver: reads or generates a problem instance, runs
//! the branch-and-bound search, and reports the optimal tour and wall-clock time.

use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_core::Graph;

/// Exact branch-and-bound solver for the symmetric Travelling Salesperson Problem.
#[derive(Parser, Debug)]
#[command(name = "tsp-rs", about = "Exact TSP solver")]
struct Cli {
    /// Random seed (defaults to the current time of day in seconds)
    #[arg(short = 's')]
    seed: Option<u64>,

    /// Treat the problem file as a 2D Euclidean coordinate list
    #[arg(short = 'g')]
    geo: bool,

    /// Generate a random instance with this many cities instead of reading a file
    #[arg(short = 'k', default_value_t = 0)]
    random_count: usize,

    /// Grid size for random instances
    #[arg(short = 'b', default_value_t = 100)]
    grid_size: u32,

    /// Problem file
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.path.is_none() && cli.random_count == 0 {
        eprintln!("Must specify a problem file or use -k for random prob");
        print_usage();
        std::process::exit(1);
    }

    let seed = cli.seed.unwrap_or_else(default_seed);
    println!("Seed = {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let graph = match &cli.path {
        Some(path) => {
            println!("Problem name: {}", path.display());
            if cli.geo {
                println!("Geometric data");
            }
            println!("Reading problem file...");
            log::info!("reading problem file {}", path.display());
            if cli.geo {
                tsp_parser::read_geo(path)
            } else {
                tsp_parser::read_edge_list(path)
            }
            .with_context(|| format!("failed to read problem file {}", path.display()))?
        }
        None => {
            println!("Building random problem...");
            log::info!(
                "building random instance: {} cities, gridsize {}",
                cli.random_count,
                cli.grid_size
            );
            build_random_instance(cli.random_count, cli.grid_size, &mut rng)
        }
    };

    println!("Start to process!");
    log::info!(
        "optimum_tour: start on {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    let start = Instant::now();
    let tour = tsp_solvers::optimum_tour(&graph, &mut rng);
    let running_time = start.elapsed().as_secs_f64();
    println!("Finish!");
    log::info!("optimum_tour: finish in {running_time:.2}s");

    let tour_length: u64 = tour.iter().map(tsp_core::Edge::weight).sum();

    println!("Running Time: {running_time:.2} sec");
    println!("Optimal Tour: {:.2}", tour_length as f64);

    Ok(())
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn print_usage() {
    eprintln!("Usage: tsp-rs [-s seed] [-g] [-k count] [-b gridsize] [prob_file]");
    eprintln!("   -b d  gridsize d for random problems");
    eprintln!("   -g    prob_file has x-y coordinates");
    eprintln!("   -k d  generate problem with d cities");
    eprintln!("   -s d  random seed");
}

/// Generates `ncount` distinct integer lattice points in `[0, gridsize)^2` via rejection sampling
/// on collision, then builds the complete geometric graph over them.
fn build_random_instance(ncount: usize, gridsize: u32, rng: &mut impl Rng) -> Graph {
    let mut hit: Vec<Vec<u32>> = vec![Vec::new(); gridsize.max(1) as usize];
    let mut xs = Vec::with_capacity(ncount);
    let mut ys = Vec::with_capacity(ncount);

    for _ in 0..ncount {
        loop {
            let x = rng.random_range(0..gridsize.max(1));
            let y = rng.random_range(0..gridsize.max(1));
            if hit[x as usize].contains(&y) {
                continue;
            }
            hit[x as usize].push(y);
            xs.push(f64::from(x));
            ys.push(f64::from(y));
            break;
        }
    }

    Graph::new_from_coordinates(&xs, &ys).expect("xs and ys are always built with equal length")
}
