use std::{default::Default, time::Duration};

use crate::types::{MapBounds, Position};

/// Contains Config properties which will be used by the Capture-the-Coin rules
#[derive(Clone, Debug)]
pub struct CtcConfig {
    /// How long a dropped coin may lie untouched before it is sent back to
    /// its spawn point
    pub return_timeout: Duration,
    /// Number of ticks after which an unchanged value is re-sent
    pub heartbeat_ticks: u32,
    /// A possession time must move by more than this many milliseconds before
    /// a delta is sent
    pub quantization_epsilon_ms: u32,
}

impl Default for CtcConfig {
    fn default() -> Self {
        Self {
            return_timeout: Duration::from_secs(10),
            heartbeat_ticks: 60,
            quantization_epsilon_ms: 50,
        }
    }
}

/// What the coin needs to know about the loaded map
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapInfo {
    pub coin_origin: Position,
    pub bounds: Option<MapBounds>,
}

impl MapInfo {
    pub fn new(coin_origin: Position) -> Self {
        Self {
            coin_origin,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: MapBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}
