use crate::types::PlayerId;

/// Read access to the tournament's player registry.
///
/// Players are owned by the surrounding match framework; the coin rules only
/// ever look them up.
pub trait PlayerRoster {
    fn is_alive(&self, player_id: &PlayerId) -> bool;

    fn player_name(&self, player_id: &PlayerId) -> Option<&str>;
}
