use naia_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::types::{PlayerId, Position};

/// Where the coin is: in somebody's hands, or lying on the ground
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoinUpdate {
    Carried(PlayerId),
    Grounded(Position),
}

impl CoinUpdate {
    pub fn carrier(&self) -> Option<PlayerId> {
        match self {
            CoinUpdate::Carried(player_id) => Some(*player_id),
            CoinUpdate::Grounded(_) => None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            CoinUpdate::Carried(_) => None,
            CoinUpdate::Grounded(position) => Some(*position),
        }
    }
}

impl Serde for CoinUpdate {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            CoinUpdate::Carried(player_id) => {
                true.ser(writer);
                player_id.ser(writer);
            }
            CoinUpdate::Grounded(position) => {
                false.ser(writer);
                position.ser(writer);
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let carried = bool::de(reader)?;
        if carried {
            Ok(CoinUpdate::Carried(PlayerId::de(reader)?))
        } else {
            Ok(CoinUpdate::Grounded(Position::de(reader)?))
        }
    }

    fn bit_length(&self) -> u32 {
        1 + match self {
            CoinUpdate::Carried(player_id) => player_id.bit_length(),
            CoinUpdate::Grounded(position) => position.bit_length(),
        }
    }
}
