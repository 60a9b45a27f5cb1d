use thiserror::Error;

use crate::types::PlayerId;

/// Errors that can occur while maintaining the possession-time ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A player joined twice without leaving in between
    #[error("{player_id} already has a ledger entry")]
    AlreadyJoined { player_id: PlayerId },
}
