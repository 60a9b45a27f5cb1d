//! # CTC Server
//! The authoritative side of a Capture-the-Coin match. Runs the coin rules
//! every tick, keeps the possession ledger and produces the sync payloads
//! that replicas mirror.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use ctc_shared::{
        compute_ranking, format_clock, CoinState, CtcConfig, CtcMessage, MapBounds, MapInfo,
        PlayerId, PlayerRoster, PlayerTimeLedger, Position, RankEntry,
    };
}

mod events;
mod server;

pub use events::{MatchEvent, MatchEvents};
pub use server::CtcServer;
