use std::mem;

use crate::{messages::ctc_message::CtcMessage, types::PlayerId};

/// The entity a queued payload describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutboxKey {
    Coin,
    CoinReturnTimer,
    Player(PlayerId),
}

impl OutboxKey {
    pub fn of(message: &CtcMessage) -> Self {
        match message {
            CtcMessage::Coin(_) => OutboxKey::Coin,
            CtcMessage::CoinReturnTimer(_) => OutboxKey::CoinReturnTimer,
            CtcMessage::PlayerTime(update) => OutboxKey::Player(update.player_id),
            CtcMessage::PlayerStats(stats) => OutboxKey::Player(stats.player_id),
        }
    }
}

/// Outgoing payloads waiting for the end of the tick.
///
/// Holds at most one payload per entity: a newer coin state replaces the
/// older one, time deltas for the same player add up, and an absolute resync
/// supersedes any pending delta. Flush order is the order in which each
/// entity was first queued.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: Vec<(OutboxKey, CtcMessage)>,
}

impl Outbox {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn push(&mut self, message: CtcMessage) {
        let key = OutboxKey::of(&message);
        let Some(index) = self.pending.iter().position(|(queued_key, _)| *queued_key == key)
        else {
            self.pending.push((key, message));
            return;
        };

        match (&mut self.pending[index].1, message) {
            (CtcMessage::PlayerTime(queued), CtcMessage::PlayerTime(newer)) => {
                queued.merge(&newer);
            }
            (CtcMessage::PlayerStats(queued), CtcMessage::PlayerTime(newer)) => {
                queued.fold_delta(newer.delta_ms);
            }
            (queued, newer) => {
                *queued = newer;
            }
        }
    }

    /// Milliseconds of time delta queued for the player and not yet drained.
    /// A pending absolute resync carries no delta.
    pub fn pending_delta(&self, player_id: &PlayerId) -> i64 {
        self.pending
            .iter()
            .find_map(|(key, message)| match (key, message) {
                (OutboxKey::Player(queued), CtcMessage::PlayerTime(update)) if queued == player_id => {
                    Some(update.delta_ms)
                }
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Takes every pending payload, leaving the outbox empty
    pub fn drain(&mut self) -> Vec<CtcMessage> {
        mem::take(&mut self.pending)
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }
}
