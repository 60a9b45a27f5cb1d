//! # CTC Client
//! The replica side of a Capture-the-Coin match. Mirrors the coin and every
//! player's possession time from the payloads the host sends, for display
//! only; no rules run here.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use ctc_shared::{
        format_clock, CodecError, CtcMessage, MapInfo, PlayerId, PlayerRoster, Position,
        RankEntry,
    };
}

mod hud;
mod replica;

pub use hud::{HudRow, HudView};
pub use replica::Replica;
