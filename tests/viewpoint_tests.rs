//! Viewpoint tests - collision-checked movement and heading updates

use tui_raycaster::core::{RenderConfig, Viewpoint, WorldMap};
use tui_raycaster::types::Command;

#[test]
fn test_try_move_into_wall_is_noop() {
    let map = WorldMap::default_map();

    // Every move that ends in a solid cell must leave the viewpoint untouched.
    for &(x, y) in &[(1.5, 1.5), (21.5, 4.5), (6.5, 7.5), (9.5, 23.5)] {
        for &(dx, dy) in &[(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0), (-40.0, 3.0)] {
            let mut v = Viewpoint::new(x, y, 0.7);
            let before = v;
            let (tx, ty) = ((x + dx).floor() as i64, (y + dy).floor() as i64);
            let moved = v.try_move(dx, dy, &map);
            if map.is_solid(tx, ty) {
                assert!(!moved, "({x}, {y}) + ({dx}, {dy}) should be rejected");
                assert_eq!(v, before);
            } else {
                assert!(moved);
                assert_eq!((v.x, v.y), (x + dx, y + dy));
            }
        }
    }
}

#[test]
fn test_move_off_grid_is_noop() {
    let map = WorldMap::default_map();
    let mut v = Viewpoint::new(1.5, 1.5, 0.0);
    let before = v;
    assert!(!v.try_move(-5.0, -5.0, &map));
    assert!(!v.try_move(100.0, 0.0, &map));
    assert_eq!(v, before);
}

#[test]
fn test_forward_command_stops_at_wall() {
    let map = WorldMap::default_map();
    let cfg = RenderConfig::default();
    let mut v = Viewpoint::new(5.5, 5.5, std::f64::consts::PI);

    // Walk towards the row-0 border; position only ever stays in open cells.
    for _ in 0..100 {
        v.apply(Command::MoveForward, 0.01, &cfg, &map);
        let (cx, cy) = v.cell();
        assert!(!map.is_solid(cx, cy));
    }
    assert_eq!(v.cell(), (5, 1));
}

#[test]
fn test_turn_round_trip_restores_heading() {
    for &start in &[0.0, 1.3, -7.25, 1000.0] {
        for &delta in &[0.001, 0.5, 3.0, 42.0] {
            let mut v = Viewpoint::new(5.0, 5.0, start);
            v.turn(delta);
            v.turn(-delta);
            assert!((v.heading - start).abs() < 1e-9);
        }
    }
}

#[test]
fn test_heading_is_not_normalized() {
    let map = WorldMap::default_map();
    let cfg = RenderConfig::default();
    let mut v = Viewpoint::default();
    for _ in 0..10 {
        v.apply(Command::TurnLeft, 0.1, &cfg, &map);
    }
    assert!((v.heading - 10.0).abs() < 1e-9);
    assert_eq!((v.x, v.y), (5.0, 5.0));
}
