use robot_path::{Error, Map, TokenGrid};

#[test]
fn cells_are_conserved_on_success() {
    for grid_name in [
        "grid_zero_blocks.txt",
        "grid_one_block.txt",
        "grid_three_blocks.txt",
        "grid_maze_with_loops.txt",
    ] {
        let path = format!("testgrids/{}", grid_name);
        let map = robot_path::read_grid(&path, ',').unwrap();
        let report = robot_path::find_path(&path, ',').unwrap();

        assert_eq!(
            report.visited_n() + map.blocked_n() + report.unvisited_n(),
            map.cell_n(),
            "grid: {}",
            grid_name
        );
    }
}

#[test]
fn report_renders_visits_with_delimiter() {
    let map = Map::from_tokens(&TokenGrid::parse("A|0\n0|B", '|').unwrap()).unwrap();
    let visits = map.search().unwrap().reconstruct().unwrap();
    let report = robot_path::Report::new(&map, visits, '|');

    assert_eq!(report.visited_n(), 3);
    assert_eq!(report.unvisited_n(), 1);
    assert_eq!(
        report.to_string(),
        "The robot visited 3 squares moving from A to B inclusive.\n\
         The robot did not visit 1 unblocked squares.\n\
         The robot visited each square this many times: \n\
         1|0\n\
         1|1\n"
    );
}

#[test]
fn pipeline_errors_keep_their_kind() {
    let err = robot_path::find_path("testgrids/grid_impossible_blocked_end.txt", ',')
        .unwrap_err();
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::PathImpossible));

    let err = robot_path::find_path("testgrids/grid_two_starts.txt", ',').unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::DuplicateStart(_, _))
    ));

    let err = robot_path::read_grid("testgrids/nonexistent_file.txt", ',').unwrap_err();
    assert!(err.downcast_ref::<std::io::Error>().is_some());
}
