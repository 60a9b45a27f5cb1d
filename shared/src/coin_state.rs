use std::time::Duration;

use log::warn;

use crate::{
    config::MapInfo,
    messages::coin_update::CoinUpdate,
    types::{MapBounds, PlayerId, Position},
};

/// The single contested object of a match.
///
/// Either a player carries it or it lies somewhere on the ground, never both.
/// While it lies away from its spawn point a timer runs that eventually sends
/// it home, so a coin dropped somewhere unreachable cannot end the objective.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinState {
    carrier: Option<PlayerId>,
    position: Option<Position>,
    time_since_drop: f64,
    origin: Position,
    bounds: Option<MapBounds>,
}

impl CoinState {
    /// Places a new coin on its spawn point with nobody holding it
    pub fn new(map: &MapInfo) -> Self {
        Self {
            carrier: None,
            position: Some(map.coin_origin),
            time_since_drop: 0.0,
            origin: map.coin_origin,
            bounds: map.bounds,
        }
    }

    pub fn carrier(&self) -> Option<PlayerId> {
        self.carrier
    }

    /// Ground position; `None` while carried
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn time_since_drop(&self) -> f64 {
        self.time_since_drop
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn bounds(&self) -> Option<MapBounds> {
        self.bounds
    }

    pub fn is_carried(&self) -> bool {
        self.carrier.is_some()
    }

    pub fn is_carried_by(&self, player_id: &PlayerId) -> bool {
        self.carrier.as_ref() == Some(player_id)
    }

    /// Hands the coin to `player_id`. Refused if somebody already holds it.
    pub fn pick_up(&mut self, player_id: PlayerId) -> bool {
        if self.carrier.is_some() {
            return false;
        }
        self.carrier = Some(player_id);
        self.position = None;
        true
    }

    /// Puts the coin on the ground at `position` and restarts the return timer
    pub fn place(&mut self, position: Position) {
        self.carrier = None;
        self.position = Some(position);
        self.time_since_drop = 0.0;

        if self.is_out_of_bounds() {
            warn!(
                "coin placed off the map at ({}, {}), it will return after the timeout",
                position.x, position.y
            );
        }
    }

    pub fn return_to_origin(&mut self) {
        self.carrier = None;
        self.position = Some(self.origin);
        self.time_since_drop = 0.0;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        match (&self.position, &self.bounds) {
            (Some(position), Some(bounds)) => !bounds.contains(position),
            _ => false,
        }
    }

    /// HUD hint only: true whenever the coin is not lying on its spawn point
    pub fn coin_not_at_origin(&self) -> bool {
        self.position != Some(self.origin)
    }

    /// Runs the ground timer for `period` seconds. Returns true if the coin
    /// was sent back to its origin.
    ///
    /// Off-map coins are "not at origin" like any other and go home through
    /// the same timer.
    pub fn check_coin_validity(&mut self, period: f64, return_timeout: Duration) -> bool {
        if self.carrier.is_some() || !(period > 0.0) {
            return false;
        }

        self.time_since_drop += period;
        if self.time_since_drop <= return_timeout.as_secs_f64() {
            return false;
        }

        if self.coin_not_at_origin() {
            self.return_to_origin();
            return true;
        }

        self.time_since_drop = 0.0;
        false
    }

    /// Seconds left until the coin goes home; `None` while carried or resting
    /// on its origin
    pub fn return_remaining(&self, return_timeout: Duration) -> Option<f64> {
        if self.carrier.is_some() || !self.coin_not_at_origin() {
            return None;
        }
        Some((return_timeout.as_secs_f64() - self.time_since_drop).max(0.0))
    }

    pub fn to_update(&self) -> CoinUpdate {
        match self.carrier {
            Some(player_id) => CoinUpdate::Carried(player_id),
            None => CoinUpdate::Grounded(self.position.unwrap_or(self.origin)),
        }
    }

    /// Mirrors an update received from the host, no rule bookkeeping
    pub fn apply_update(&mut self, update: &CoinUpdate) {
        match update {
            CoinUpdate::Carried(player_id) => {
                self.carrier = Some(*player_id);
                self.position = None;
            }
            CoinUpdate::Grounded(position) => {
                self.carrier = None;
                self.position = Some(*position);
            }
        }
    }
}
