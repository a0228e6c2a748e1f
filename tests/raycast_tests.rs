//! Ray casting tests - wall search, seam detection and column coverage

use std::f64::consts::{FRAC_PI_4, PI};

use tui_raycaster::core::{wall_shade, RayCaster, RenderConfig, Viewpoint, WorldMap};
use tui_raycaster::types::glyph;

/// 5x5 open map with a single wall cell at (3, 3).
fn single_wall_map() -> WorldMap {
    WorldMap::parse(".....\n.....\n.....\n...#.\n.....").unwrap()
}

#[test]
fn test_every_column_covers_every_row() {
    let map = WorldMap::default_map();
    let cfg = RenderConfig::default();
    let rc = RayCaster::new(&map, Viewpoint::default(), &cfg);

    for column in 0..cfg.screen_width {
        let rows = rc.cast_column(column);
        assert_eq!(rows.len(), usize::from(cfg.screen_height));
        let indices: Vec<u16> = rows.iter().map(|(row, _)| *row).collect();
        let expected: Vec<u16> = (0..cfg.screen_height).collect();
        assert_eq!(indices, expected, "column {}", column);
    }
}

#[test]
fn test_distance_stays_within_bounds() {
    let map = WorldMap::default_map();
    let cfg = RenderConfig::default();
    let views = [
        Viewpoint::default(),
        Viewpoint::new(15.5, 15.5, 1.0),
        Viewpoint::new(30.5, 30.5, -2.0),
        Viewpoint::new(1.2, 20.0, 12.0),
    ];

    for view in views {
        let rc = RayCaster::new(&map, view, &cfg);
        for column in 0..cfg.screen_width {
            let hit = rc.cast(rc.ray_angle(column));
            assert!(hit.distance > 0.0);
            assert!(hit.distance <= cfg.max_depth);
        }
    }
}

#[test]
fn test_corner_graze_is_boundary() {
    let map = single_wall_map();
    let cfg = RenderConfig::default();
    // The diagonal from (1, 1) passes exactly through corner (3, 3).
    let rc = RayCaster::new(&map, Viewpoint::new(1.0, 1.0, FRAC_PI_4), &cfg);
    let hit = rc.cast(FRAC_PI_4);
    assert!(hit.distance < cfg.max_depth);
    assert!((hit.distance - 2.9).abs() < 1e-9);
    assert!(hit.is_boundary);
    assert_eq!(wall_shade(hit.distance, hit.is_boundary, cfg.max_depth), glyph::SEAM);
}

#[test]
fn test_face_center_is_not_boundary() {
    let map = single_wall_map();
    let cfg = RenderConfig::default();
    let rc = RayCaster::new(&map, Viewpoint::new(3.5, 0.5, 0.0), &cfg);
    let hit = rc.cast(0.0);
    assert!((hit.distance - 2.5).abs() < 0.1 + 1e-9);
    assert!(!hit.is_boundary);
}

#[test]
fn test_center_column_matches_heading() {
    let map = single_wall_map();
    let cfg = RenderConfig::default();
    let rc = RayCaster::new(&map, Viewpoint::new(3.5, 0.5, 0.0), &cfg);
    let center = rc.cast(rc.ray_angle(cfg.screen_width / 2));
    assert_eq!(center, rc.cast(0.0));
}

#[test]
fn test_open_corridor_distance() {
    let map = WorldMap::default_map();
    let cfg = RenderConfig::default();
    // Column 5 runs open from row 9 down to the row-22 wall.
    let rc = RayCaster::new(&map, Viewpoint::new(5.5, 10.5, 0.0), &cfg);
    let hit = rc.cast(rc.ray_angle(cfg.screen_width / 2));
    assert!((hit.distance - 11.5).abs() <= 0.1 + 1e-9, "{}", hit.distance);
    assert!(!hit.is_boundary);
}

#[test]
fn test_spawn_looking_down_sees_nothing_within_depth() {
    let map = WorldMap::default_map();
    let cfg = RenderConfig::default();
    // From the spawn the nearest wall straight ahead is 17 units away.
    let rc = RayCaster::new(&map, Viewpoint::default(), &cfg);
    let hit = rc.cast(rc.ray_angle(cfg.screen_width / 2));
    assert_eq!(hit.distance, cfg.max_depth);
    assert!(!hit.is_boundary);

    // The wall band collapses to nothing visible: sky, blank wall, then floor.
    let rows = rc.cast_column(cfg.screen_width / 2);
    assert_eq!(rows[0].1, glyph::BLANK);
    assert_eq!(rows[119].1, '#');
}

#[test]
fn test_border_wall_shade_by_distance() {
    let map = WorldMap::default_map();
    let cfg = RenderConfig::default();
    let rc = RayCaster::new(&map, Viewpoint::new(5.5, 5.5, PI), &cfg);
    let center = cfg.screen_width / 2;
    let hit = rc.cast(rc.ray_angle(center));
    assert!(!hit.is_boundary);
    // ~4.6 units: between depth/4 and depth/3.
    assert_eq!(
        wall_shade(hit.distance, hit.is_boundary, cfg.max_depth),
        glyph::WALL[1]
    );

    let rows = rc.cast_column(center);
    let (ceiling, floor) = rc.projection(hit.distance);
    for (row, ch) in rows {
        let row = i64::from(row);
        if row <= ceiling {
            assert_eq!(ch, glyph::BLANK);
        } else if row <= floor {
            assert_eq!(ch, glyph::WALL[1]);
        }
    }
}

#[test]
fn test_columns_are_not_mirrored() {
    let map = single_wall_map();
    let cfg = RenderConfig::default();
    // Looking along +y from (2.0, 0.5): the wall at x=3 is on the viewer's left
    // (heading 0 maps +x to the left half of the screen).
    let rc = RayCaster::new(&map, Viewpoint::new(2.0, 0.5, 0.0), &cfg);
    let left = rc.cast(rc.ray_angle(20));
    let right = rc.cast(rc.ray_angle(cfg.screen_width - 20));
    assert!(left.distance < right.distance);
}
