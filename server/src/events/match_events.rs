use std::vec::IntoIter;

use ctc_shared::{PlayerId, Position};

/// Something the match framework reports to the coin rules
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchEvent {
    Joined(PlayerId),
    Left {
        player_id: PlayerId,
        last_position: Option<Position>,
    },
    Pickup(PlayerId),
    VoluntaryDrop {
        player_id: PlayerId,
        position: Position,
    },
    Died {
        player_id: PlayerId,
        last_position: Position,
    },
}

/// Inbound events, drained once per update in arrival order
pub struct MatchEvents {
    events: Vec<MatchEvent>,
}

impl Default for MatchEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEvents {
    pub(crate) fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // Crate-public

    pub(crate) fn push(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    pub(crate) fn drain(&mut self) -> IntoIter<MatchEvent> {
        let list = std::mem::take(&mut self.events);
        IntoIterator::into_iter(list)
    }
}
