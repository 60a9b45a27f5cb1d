use naia_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

type RemainingMillis = UnsignedVariableInteger<10>;

/// Countdown until a grounded coin returns to its spawn point, shown on the
/// HUD next to the coin indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoinReturnTimer {
    pub remaining_ms: u32,
}

impl CoinReturnTimer {
    pub fn new(remaining_ms: u32) -> Self {
        Self { remaining_ms }
    }

    pub fn from_secs(remaining: f64) -> Self {
        let millis = crate::fixed_point::secs_to_millis(remaining).max(0);
        Self::new(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

impl Serde for CoinReturnTimer {
    fn ser(&self, writer: &mut dyn BitWrite) {
        RemainingMillis::new(self.remaining_ms).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let value = RemainingMillis::de(reader)?.get();
        Ok(Self {
            remaining_ms: u32::try_from(value).unwrap_or(u32::MAX),
        })
    }

    fn bit_length(&self) -> u32 {
        RemainingMillis::new(self.remaining_ms).bit_length()
    }
}
