use anyhow::{ensure, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use routegrid_lib::{
    plan_route, render_grid, Cell, CongestionCost, CostProvider, DirectionSet, Error as LibError,
    Grid, PathSummary, RouteRequest, SearchAlgorithm, Terrain, TerrainDistribution, TrafficClient,
    TrafficConfig, UniformCost,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid route planning utilities")]
struct Cli {
    /// Grid rows.
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Grid columns.
    #[arg(long, default_value_t = 10)]
    cols: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route across a randomly generated grid.
    Route {
        /// Search algorithm to use.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Astar)]
        algorithm: AlgorithmArg,

        /// Seed for reproducible grid generation; random when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Override the obstacle sampling weight (0 disables obstacles).
        #[arg(long)]
        obstacle_weight: Option<f64>,

        /// Expand with the 8-connected neighbor set instead of 4-connected.
        #[arg(long)]
        diagonal: bool,
    },
    /// Plan a traffic-aware route from live congestion data.
    TrafficRoute {
        /// Origin as a "lat,lng" pair.
        #[arg(long)]
        origin: String,

        /// Destination as a "lat,lng" pair.
        #[arg(long)]
        destination: String,

        /// Flow endpoint of the traffic service.
        #[arg(long)]
        base_url: String,

        /// API key for the traffic service.
        #[arg(long)]
        api_key: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Astar,
    Bfs,
    Dfs,
}

impl From<AlgorithmArg> for SearchAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Astar => SearchAlgorithm::AStar,
            AlgorithmArg::Bfs => SearchAlgorithm::Bfs,
            AlgorithmArg::Dfs => SearchAlgorithm::Dfs,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    ensure!(cli.rows > 0 && cli.cols > 0, "grid must be at least 1x1");

    match cli.command {
        Command::Route {
            algorithm,
            seed,
            obstacle_weight,
            diagonal,
        } => handle_route(
            cli.rows,
            cli.cols,
            algorithm.into(),
            seed,
            obstacle_weight,
            diagonal,
        ),
        Command::TrafficRoute {
            origin,
            destination,
            base_url,
            api_key,
        } => handle_traffic_route(cli.rows, cli.cols, &origin, &destination, base_url, api_key),
    }
}

fn handle_route(
    rows: usize,
    cols: usize,
    algorithm: SearchAlgorithm,
    seed: Option<u64>,
    obstacle_weight: Option<f64>,
    diagonal: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "generating grid");

    let mut dist = TerrainDistribution::default();
    if let Some(weight) = obstacle_weight {
        ensure!(weight >= 0.0, "obstacle weight must be non-negative");
        dist.obstacle = weight;
    }

    let grid = Grid::random(rows, cols, &dist, &mut StdRng::seed_from_u64(seed));
    let directions = if diagonal {
        DirectionSet::Diagonal
    } else {
        DirectionSet::Cardinal
    };

    let request = RouteRequest {
        start: Cell::new(0, 0),
        goal: Cell::new(rows as i32 - 1, cols as i32 - 1),
        algorithm,
        directions,
    };

    report_plan(&grid, &request, &UniformCost::default())
}

fn handle_traffic_route(
    rows: usize,
    cols: usize,
    origin: &str,
    destination: &str,
    base_url: String,
    api_key: String,
) -> Result<()> {
    let client = TrafficClient::new(TrafficConfig::new(base_url, api_key))?;

    // Missing traffic data degrades to an open grid with uniform costs.
    let (grid, provider): (Grid, Box<dyn CostProvider>) =
        match client.fetch_congestion(origin, destination) {
            Some(map) => {
                let grid = Grid::from_congestion(rows, cols, &map);
                let costs = CongestionCost::from_congestion(&map, routegrid_lib::FALLBACK_COST);
                (grid, Box::new(costs))
            }
            None => {
                tracing::warn!("no congestion data available; assuming uniform costs");
                (
                    Grid::filled(rows, cols, Terrain::Free),
                    Box::new(UniformCost::default()),
                )
            }
        };

    let request = RouteRequest {
        start: Cell::new(0, 0),
        goal: Cell::new(rows as i32 - 1, cols as i32 - 1),
        algorithm: SearchAlgorithm::AStar,
        directions: DirectionSet::Diagonal,
    };

    report_plan(&grid, &request, provider.as_ref())
}

fn report_plan(grid: &Grid, request: &RouteRequest, provider: &dyn CostProvider) -> Result<()> {
    match plan_route(grid, request, provider) {
        Ok(plan) => {
            let summary = PathSummary::from_plan(&plan)?;
            print!("{}", summary.render_plain_text());
            println!();
            print!("{}", render_grid(grid, &plan.steps));
            Ok(())
        }
        Err(LibError::RouteNotFound { .. }) => {
            println!("No path found using {}.", request.algorithm);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
