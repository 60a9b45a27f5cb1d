use naia_serde::{BitReader, BitWrite, Serde, SerdeErr, SignedVariableInteger};

use crate::types::PlayerId;

type DeltaMillis = SignedVariableInteger<10>;

/// Change of a player's displayed possession time since the previous update,
/// in fixed-point milliseconds.
///
/// Negative when an open interval is forfeited on death.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerTimeUpdate {
    pub player_id: PlayerId,
    pub delta_ms: i64,
}

impl PlayerTimeUpdate {
    pub fn new(player_id: PlayerId, delta_ms: i64) -> Self {
        Self {
            player_id,
            delta_ms,
        }
    }

    /// Sums two updates for the same player into one
    pub fn merge(&mut self, other: &PlayerTimeUpdate) {
        self.delta_ms = self.delta_ms.saturating_add(other.delta_ms);
    }
}

impl Serde for PlayerTimeUpdate {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.player_id.ser(writer);
        DeltaMillis::new(self.delta_ms).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let player_id = PlayerId::de(reader)?;
        let delta = DeltaMillis::de(reader)?.get();
        let delta_ms = delta.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        Ok(Self {
            player_id,
            delta_ms,
        })
    }

    fn bit_length(&self) -> u32 {
        self.player_id.bit_length() + DeltaMillis::new(self.delta_ms).bit_length()
    }
}
