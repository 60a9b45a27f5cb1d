use std::slice::{Iter, IterMut};

use crate::{
    ledger::{error::LedgerError, ledger_entry::LedgerEntry},
    types::PlayerId,
};

/// Every participating player's possession time, kept in join order.
///
/// Join order is the tie-break for rankings, so entries are never reordered;
/// removing a player closes the gap.
#[derive(Clone, Debug, Default)]
pub struct PlayerTimeLedger {
    entries: Vec<LedgerEntry>,
}

impl PlayerTimeLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.get(player_id).is_some()
    }

    /// Appends a fresh entry for the player
    pub fn try_add_player(&mut self, player_id: PlayerId) -> Result<&mut LedgerEntry, LedgerError> {
        if self.contains(&player_id) {
            return Err(LedgerError::AlreadyJoined { player_id });
        }
        self.entries.push(LedgerEntry::new(player_id));
        let index = self.entries.len() - 1;
        Ok(&mut self.entries[index])
    }

    pub fn remove_player(&mut self, player_id: &PlayerId) -> Option<LedgerEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.player_id() == *player_id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, player_id: &PlayerId) -> Option<&LedgerEntry> {
        self.entries
            .iter()
            .find(|entry| entry.player_id() == *player_id)
    }

    pub fn get_mut(&mut self, player_id: &PlayerId) -> Option<&mut LedgerEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.player_id() == *player_id)
    }

    /// The entry currently holding an open interval, if any
    pub fn open_entry(&self) -> Option<&LedgerEntry> {
        self.entries.iter().find(|entry| entry.has_open_interval())
    }

    pub fn iter(&self) -> Iter<'_, LedgerEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, LedgerEntry> {
        self.entries.iter_mut()
    }
}
