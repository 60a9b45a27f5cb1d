use naia_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

use crate::types::PlayerId;

type Millis = UnsignedVariableInteger<12>;

/// Absolute possession times of a player, sent as a heartbeat and to replicas
/// that connect mid-match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub total_ms: u64,
    pub current_ms: u64,
}

impl PlayerStats {
    pub fn new(player_id: PlayerId, total_ms: u64, current_ms: u64) -> Self {
        Self {
            player_id,
            total_ms,
            current_ms,
        }
    }

    /// Committed plus in-flight milliseconds
    pub fn display_millis(&self) -> i64 {
        let sum = self.total_ms.saturating_add(self.current_ms);
        i64::try_from(sum).unwrap_or(i64::MAX)
    }

    /// Folds a delta that was queued after this resync into it. The
    /// in-flight part absorbs it first, then the committed part.
    pub fn fold_delta(&mut self, delta_ms: i64) {
        if delta_ms >= 0 {
            self.current_ms = self.current_ms.saturating_add(delta_ms.unsigned_abs());
            return;
        }
        let mut owed = delta_ms.unsigned_abs();
        let from_current = owed.min(self.current_ms);
        self.current_ms -= from_current;
        owed -= from_current;
        self.total_ms = self.total_ms.saturating_sub(owed);
    }
}

fn read_millis(reader: &mut BitReader) -> Result<u64, SerdeErr> {
    let value = Millis::de(reader)?.get();
    Ok(u64::try_from(value).unwrap_or(u64::MAX))
}

impl Serde for PlayerStats {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.player_id.ser(writer);
        Millis::new(self.total_ms).ser(writer);
        Millis::new(self.current_ms).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let player_id = PlayerId::de(reader)?;
        let total_ms = read_millis(reader)?;
        let current_ms = read_millis(reader)?;
        Ok(Self {
            player_id,
            total_ms,
            current_ms,
        })
    }

    fn bit_length(&self) -> u32 {
        self.player_id.bit_length()
            + Millis::new(self.total_ms).bit_length()
            + Millis::new(self.current_ms).bit_length()
    }
}
