use seabattle::{Coordinate, GameError, Grid, Orientation, ShotResult, Vessel};

fn vessel(x: usize, y: usize, len: usize, orientation: Orientation) -> Vessel {
    Vessel::new(Coordinate::new(x, y), len, orientation).unwrap()
}

#[test]
fn test_sink_single_vessel() {
    let mut grid = Grid::new(10).unwrap();
    grid.place_vessel(vessel(0, 0, 4, Orientation::Horizontal))
        .unwrap();
    assert_eq!(grid.live_vessel_count(), 1);

    for x in 0..4 {
        assert!(grid.vessels()[0].is_alive());
        assert_eq!(
            grid.shot(Coordinate::new(x, 0)).unwrap(),
            ShotResult::Hit
        );
    }
    assert!(!grid.vessels()[0].is_alive());
    assert_eq!(grid.live_vessel_count(), 0);
}

#[test]
fn test_repeated_shot_rejected() {
    let mut grid = Grid::new(10).unwrap();
    grid.place_vessel(vessel(2, 2, 2, Orientation::Vertical))
        .unwrap();
    assert_eq!(grid.shot(Coordinate::new(2, 3)).unwrap(), ShotResult::Hit);
    assert_eq!(grid.fired_upon().len(), 1);
    assert!(matches!(
        grid.shot(Coordinate::new(2, 3)),
        Err(GameError::AlreadyTargeted)
    ));
    assert_eq!(grid.fired_upon().len(), 1);
    assert_eq!(grid.vessels()[0].health(), 1);
}

#[test]
fn test_out_of_bounds_shot_not_recorded() {
    let mut grid = Grid::new(10).unwrap();
    for target in [(10, 0), (0, 10), (15, 15)] {
        assert!(matches!(
            grid.shot(Coordinate::from(target)),
            Err(GameError::OutOfBounds)
        ));
    }
    assert!(grid.fired_upon().is_empty());
    assert_eq!(grid.shot(Coordinate::new(9, 9)).unwrap(), ShotResult::Miss);
}

#[test]
fn test_bounds_checked_before_repeat() {
    let mut grid = Grid::new(10).unwrap();
    assert!(matches!(
        grid.shot(Coordinate::new(10, 10)),
        Err(GameError::OutOfBounds)
    ));
    assert!(matches!(
        grid.shot(Coordinate::new(10, 10)),
        Err(GameError::OutOfBounds)
    ));
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut grid = Grid::new(10).unwrap();
    grid.place_vessel(vessel(0, 0, 3, Orientation::Horizontal))
        .unwrap();
    // diagonal contact
    assert!(matches!(
        grid.place_vessel(vessel(3, 1, 2, Orientation::Vertical)),
        Err(GameError::OverlapConflict)
    ));
    // one empty column between, margins still meet
    assert!(matches!(
        grid.place_vessel(vessel(4, 0, 2, Orientation::Vertical)),
        Err(GameError::OverlapConflict)
    ));
    grid.place_vessel(vessel(5, 0, 2, Orientation::Vertical))
        .unwrap();
    assert_eq!(grid.vessels().len(), 2);
}

#[test]
fn test_wider_margin_blocks_more() {
    let mut grid = Grid::with_margin(12, 2).unwrap();
    grid.place_vessel(vessel(0, 0, 1, Orientation::Horizontal))
        .unwrap();
    assert!(matches!(
        grid.place_vessel(vessel(4, 0, 1, Orientation::Horizontal)),
        Err(GameError::OverlapConflict)
    ));
    grid.place_vessel(vessel(5, 0, 1, Orientation::Horizontal))
        .unwrap();
}

#[test]
fn test_rejected_vessel_leaves_grid_untouched() {
    let mut grid = Grid::new(10).unwrap();
    assert!(matches!(
        grid.place_vessel(vessel(8, 5, 4, Orientation::Horizontal)),
        Err(GameError::OutOfBounds)
    ));
    // the rejected vessel's margin must not block later placements
    grid.place_vessel(vessel(7, 5, 3, Orientation::Horizontal))
        .unwrap();
    assert_eq!(grid.live_vessel_count(), 1);
}
