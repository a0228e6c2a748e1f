//! Render configuration.
//!
//! Values are fixed for the lifetime of the process: built once at startup from
//! compile-time defaults, optionally overridden through environment variables.

use std::env;
use std::str::FromStr;

use crate::types::{
    FOV, FRAME_MS, MAX_DEPTH, MOVE_SPEED, RAY_STEP, SCREEN_HEIGHT, SCREEN_WIDTH, TURN_RATE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    /// Sweep width in radians, also the projection scale.
    pub fov: f64,
    pub max_depth: f64,
    pub ray_step: f64,
    pub move_speed: f64,
    pub turn_rate: f64,
    pub frame_ms: u64,
    /// Custom layout file, embedded level when unset.
    pub map_path: Option<String>,
    /// Log file, logging disabled when unset.
    pub log_path: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fov: FOV,
            max_depth: MAX_DEPTH,
            ray_step: RAY_STEP,
            move_speed: MOVE_SPEED,
            turn_rate: TURN_RATE,
            frame_ms: FRAME_MS,
            map_path: None,
            log_path: None,
        }
    }
}

impl RenderConfig {
    /// Create from environment variables.
    ///
    /// Unparseable or non-positive values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RenderConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();

        let positive_f64 = |key: &str, default: f64| {
            parse_var::<f64>(&lookup, key)
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };
        let positive_u16 = |key: &str, default: u16| {
            parse_var::<u16>(&lookup, key)
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        Self {
            screen_width: positive_u16("RAYCASTER_SCREEN_WIDTH", d.screen_width),
            screen_height: positive_u16("RAYCASTER_SCREEN_HEIGHT", d.screen_height),
            fov: positive_f64("RAYCASTER_FOV", d.fov),
            max_depth: positive_f64("RAYCASTER_DEPTH", d.max_depth),
            ray_step: d.ray_step,
            move_speed: positive_f64("RAYCASTER_MOVE_SPEED", d.move_speed),
            turn_rate: positive_f64("RAYCASTER_TURN_RATE", d.turn_rate),
            frame_ms: parse_var::<u64>(&lookup, "RAYCASTER_FRAME_MS").unwrap_or(d.frame_ms),
            map_path: path("RAYCASTER_MAP"),
            log_path: path("RAYCASTER_LOG_PATH"),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
