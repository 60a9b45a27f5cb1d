use std::collections::HashMap;

use ctc_shared::{PlayerId, PlayerRoster};

/// Player registry stand-in: names, liveness and join order
#[derive(Default)]
pub struct TestRoster {
    names: HashMap<PlayerId, String>,
    alive: HashMap<PlayerId, bool>,
}

impl TestRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: u16, name: &str) -> PlayerId {
        let player_id = PlayerId::new(id);
        self.names.insert(player_id, name.to_string());
        self.alive.insert(player_id, true);
        player_id
    }

    pub fn kill(&mut self, player_id: PlayerId) {
        self.alive.insert(player_id, false);
    }

    pub fn respawn(&mut self, player_id: PlayerId) {
        self.alive.insert(player_id, true);
    }
}

impl PlayerRoster for TestRoster {
    fn is_alive(&self, player_id: &PlayerId) -> bool {
        self.alive.get(player_id).copied().unwrap_or(false)
    }

    fn player_name(&self, player_id: &PlayerId) -> Option<&str> {
        self.names.get(player_id).map(String::as_str)
    }
}
