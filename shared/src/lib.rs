//! # CTC Shared
//! Common functionality shared between ctc-server & ctc-client crates: the
//! contested coin, the possession-time ledger, the sync codec and rankings.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use naia_serde::{BitReader, BitWrite, BitWriter, Serde};

mod coin_state;
mod config;
mod fixed_point;
mod ledger;
mod messages;
mod outbox;
mod ranking;
mod roster;
mod types;

pub use coin_state::CoinState;
pub use config::{CtcConfig, MapInfo};
pub use fixed_point::{millis_to_secs, secs_to_millis};
pub use ledger::{
    error::LedgerError, ledger_entry::LedgerEntry, player_time_ledger::PlayerTimeLedger,
};
pub use messages::{
    coin_return_timer::CoinReturnTimer, coin_update::CoinUpdate, ctc_message::CtcMessage,
    error::CodecError, message_kind::MessageKind, player_stats::PlayerStats,
    player_time_update::PlayerTimeUpdate,
};
pub use outbox::{Outbox, OutboxKey};
pub use ranking::{compute_ranking, format_clock, stats_lines, RankEntry};
pub use roster::PlayerRoster;
pub use types::{MapBounds, PlayerId, Position};
