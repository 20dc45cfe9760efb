use std::io::Cursor;

use seabattle::{
    Coordinate, Grid, HumanSelector, Orientation, Player, ShotResult, TargetSelector, Vessel,
};

#[test]
fn test_human_turn_from_scripted_input() {
    let input = Cursor::new("11 1\n1 1\n1 1\n2 1\n");
    let selector = HumanSelector::new(input, Vec::new());
    let mut player = Player::new("Human", Grid::new(10).unwrap(), Box::new(selector));

    let mut opponent = Grid::new(10).unwrap().hidden(true);
    opponent
        .place_vessel(Vessel::new(Coordinate::new(0, 0), 2, Orientation::Horizontal).unwrap())
        .unwrap();

    // out of bounds first, then the hit
    assert_eq!(player.take_turn(&mut opponent).unwrap(), ShotResult::Hit);
    assert_eq!(player.last_target(), Some(Coordinate::new(0, 0)));
    // repeat is refused, second cell sinks the vessel
    assert_eq!(player.take_turn(&mut opponent).unwrap(), ShotResult::Hit);
    assert_eq!(opponent.live_vessel_count(), 0);
    assert_eq!(opponent.fired_upon().len(), 2);
}

#[test]
fn test_human_selector_ignores_grid_size() {
    // bounds are the grid's job; the selector passes large values through
    let mut selector = HumanSelector::new(Cursor::new("40 40\n"), Vec::new());
    assert_eq!(
        selector.select_target(10).unwrap(),
        Coordinate::new(39, 39)
    );
}
