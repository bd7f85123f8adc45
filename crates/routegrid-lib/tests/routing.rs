use routegrid_lib::{
    manhattan, plan_route, Cell, CongestionCost, DirectionSet, Error, Grid, RouteRequest,
    SearchAlgorithm, Terrain, UniformCost,
};

fn open_grid(rows: usize, cols: usize) -> Grid {
    Grid::filled(rows, cols, Terrain::Free)
}

/// 3x3 grid, all Free except the center.
fn center_obstacle_grid() -> Grid {
    let mut grid = open_grid(3, 3);
    grid.set_terrain(Cell::new(1, 1), Terrain::Obstacle).unwrap();
    grid
}

fn assert_valid_path(grid: &Grid, steps: &[Cell], start: Cell, goal: Cell, directions: DirectionSet) {
    assert_eq!(steps.first(), Some(&start), "path must begin at start");
    assert_eq!(steps.last(), Some(&goal), "path must end at goal");

    for pair in steps.windows(2) {
        let d_row = pair[1].row - pair[0].row;
        let d_col = pair[1].col - pair[0].col;
        assert!(
            directions.offsets().contains(&(d_row, d_col)),
            "step {:?} -> {:?} is not a configured direction",
            pair[0],
            pair[1]
        );
    }

    for step in steps {
        assert!(grid.is_passable(*step), "path crosses obstacle at {step:?}");
    }
}

#[test]
fn bfs_and_astar_agree_on_unweighted_length() {
    let grid = open_grid(5, 5);
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 4);
    let uniform = UniformCost::default();

    let bfs = plan_route(&grid, &RouteRequest::bfs(start, goal), &uniform).unwrap();
    let astar = plan_route(&grid, &RouteRequest::astar(start, goal), &uniform).unwrap();

    assert_eq!(bfs.hop_count(), 8);
    assert_eq!(astar.hop_count(), bfs.hop_count());
}

#[test]
fn strategies_route_around_the_center_obstacle() {
    let grid = center_obstacle_grid();
    let start = Cell::new(0, 0);
    let goal = Cell::new(2, 2);
    let uniform = UniformCost::default();

    for request in [
        RouteRequest::bfs(start, goal),
        RouteRequest::astar(start, goal),
        RouteRequest::dfs(start, goal),
    ] {
        let plan = plan_route(&grid, &request, &uniform).unwrap();
        assert_valid_path(&grid, &plan.steps, start, goal, DirectionSet::Cardinal);
        assert!(!plan.steps.contains(&Cell::new(1, 1)));
    }

    // BFS and A* must both find the Manhattan-optimal 5-cell detour.
    let bfs = plan_route(&grid, &RouteRequest::bfs(start, goal), &uniform).unwrap();
    let astar = plan_route(&grid, &RouteRequest::astar(start, goal), &uniform).unwrap();
    assert_eq!(bfs.steps.len(), 5);
    assert_eq!(astar.steps.len(), 5);
}

#[test]
fn coincident_endpoints_yield_a_single_cell_path() {
    let grid = open_grid(4, 4);
    let cell = Cell::new(2, 2);
    let uniform = UniformCost::default();

    for request in [
        RouteRequest::bfs(cell, cell),
        RouteRequest::astar(cell, cell),
        RouteRequest::dfs(cell, cell),
    ] {
        let plan = plan_route(&grid, &request, &uniform).unwrap();
        assert_eq!(plan.steps, vec![cell]);
        assert_eq!(plan.hop_count(), 0);
    }
}

#[test]
fn obstacle_wall_blocks_every_strategy() {
    let mut grid = open_grid(3, 3);
    for col in 0..3 {
        grid.set_terrain(Cell::new(1, col), Terrain::Obstacle).unwrap();
    }
    let start = Cell::new(0, 0);
    let goal = Cell::new(2, 2);
    let uniform = UniformCost::default();

    for request in [
        RouteRequest::bfs(start, goal),
        RouteRequest::astar(start, goal),
        RouteRequest::dfs(start, goal),
    ] {
        let error = plan_route(&grid, &request, &uniform).expect_err("wall blocks route");
        assert!(matches!(error, Error::RouteNotFound { .. }));
    }
}

#[test]
fn impassable_endpoint_is_route_not_found() {
    let grid = center_obstacle_grid();
    let uniform = UniformCost::default();

    let request = RouteRequest::astar(Cell::new(0, 0), Cell::new(1, 1));
    let error = plan_route(&grid, &request, &uniform).expect_err("goal is an obstacle");
    assert!(matches!(error, Error::RouteNotFound { .. }));
}

#[test]
fn out_of_bounds_endpoint_fails_fast() {
    let grid = open_grid(3, 3);
    let uniform = UniformCost::default();

    let request = RouteRequest::bfs(Cell::new(0, 0), Cell::new(5, 5));
    let error = plan_route(&grid, &request, &uniform).expect_err("goal outside grid");
    assert!(matches!(error, Error::OutOfBounds { .. }));

    let request = RouteRequest::bfs(Cell::new(-1, 0), Cell::new(2, 2));
    assert!(plan_route(&grid, &request, &uniform).is_err());
}

#[test]
fn astar_takes_the_cheaper_detour() {
    // Direct route (0,0)->(0,1)->(0,2) costs 5 + 1 = 6; the detour through
    // row 1 costs 1 per step, 4 total. A* must prefer total cost over hops.
    let grid = open_grid(2, 3);
    let start = Cell::new(0, 0);
    let goal = Cell::new(0, 2);

    let mut costs = CongestionCost::new(1.0);
    costs.insert(Cell::new(0, 1), 5.0);

    let astar = plan_route(&grid, &RouteRequest::astar(start, goal), &costs).unwrap();
    assert_eq!(astar.steps.len(), 5);
    assert!(!astar.steps.contains(&Cell::new(0, 1)));
    assert_valid_path(&grid, &astar.steps, start, goal, DirectionSet::Cardinal);

    // BFS ignores costs entirely and takes the congested direct route.
    let bfs = plan_route(&grid, &RouteRequest::bfs(start, goal), &costs).unwrap();
    assert_eq!(bfs.hop_count(), 2);
    assert!(bfs.steps.contains(&Cell::new(0, 1)));
}

#[test]
fn repeated_searches_are_deterministic() {
    let grid = center_obstacle_grid();
    let start = Cell::new(0, 0);
    let goal = Cell::new(2, 2);
    let uniform = UniformCost::default();

    for request in [
        RouteRequest::bfs(start, goal),
        RouteRequest::astar(start, goal),
        RouteRequest::dfs(start, goal),
        RouteRequest::astar(start, goal).with_directions(DirectionSet::Diagonal),
    ] {
        let first = plan_route(&grid, &request, &uniform).unwrap();
        let second = plan_route(&grid, &request, &uniform).unwrap();
        assert_eq!(first.steps, second.steps);
    }
}

#[test]
fn diagonal_astar_walks_the_diagonal() {
    let grid = open_grid(5, 5);
    let request = RouteRequest::astar(Cell::new(0, 0), Cell::new(4, 4))
        .with_directions(DirectionSet::Diagonal);

    let plan = plan_route(&grid, &request, &UniformCost::default()).unwrap();
    assert_eq!(plan.hop_count(), 4);
    assert_valid_path(
        &grid,
        &plan.steps,
        Cell::new(0, 0),
        Cell::new(4, 4),
        DirectionSet::Diagonal,
    );
}

#[test]
fn corner_cutting_between_blocked_cells_is_allowed() {
    let mut grid = open_grid(2, 2);
    grid.set_terrain(Cell::new(0, 1), Terrain::Obstacle).unwrap();
    grid.set_terrain(Cell::new(1, 0), Terrain::Obstacle).unwrap();

    let request = RouteRequest::astar(Cell::new(0, 0), Cell::new(1, 1))
        .with_directions(DirectionSet::Diagonal);
    let plan = plan_route(&grid, &request, &UniformCost::default()).unwrap();
    assert_eq!(plan.steps, vec![Cell::new(0, 0), Cell::new(1, 1)]);
}

#[test]
fn sub_unit_costs_still_produce_a_route() {
    // The Manhattan heuristic is only admissible for costs >= 1; cheaper
    // cells may cost the route optimality, but never a failure.
    let grid = open_grid(3, 3);
    let cheap = UniformCost::new(0.5);
    let plan = plan_route(
        &grid,
        &RouteRequest::astar(Cell::new(0, 0), Cell::new(2, 2)),
        &cheap,
    )
    .unwrap();
    assert_valid_path(
        &grid,
        &plan.steps,
        Cell::new(0, 0),
        Cell::new(2, 2),
        DirectionSet::Cardinal,
    );
}

#[test]
fn manhattan_distance_properties() {
    let a = Cell::new(1, 2);
    let b = Cell::new(4, -1);
    assert_eq!(manhattan(a, a), 0);
    assert_eq!(manhattan(a, b), 6);
    assert_eq!(manhattan(a, b), manhattan(b, a));
    assert!(manhattan(Cell::new(0, 0), Cell::new(-3, -4)) > 0);
}

#[test]
fn algorithm_names_render_for_display() {
    assert_eq!(SearchAlgorithm::Bfs.to_string(), "bfs");
    assert_eq!(SearchAlgorithm::Dfs.to_string(), "dfs");
    assert_eq!(SearchAlgorithm::AStar.to_string(), "astar");
}
