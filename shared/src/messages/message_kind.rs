use naia_serde::{BitReader, BitWrite, Serde, UnsignedInteger};

use crate::messages::error::CodecError;

const TAG_BITS: u8 = 3;

/// Tag written in front of every sync payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Coin,
    PlayerTime,
    PlayerStats,
    CoinReturnTimer,
}

impl MessageKind {
    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Coin => "CoinUpdate",
            MessageKind::PlayerTime => "PlayerTimeUpdate",
            MessageKind::PlayerStats => "PlayerStats",
            MessageKind::CoinReturnTimer => "CoinReturnTimer",
        }
    }

    fn tag(&self) -> u8 {
        match self {
            MessageKind::Coin => 0,
            MessageKind::PlayerTime => 1,
            MessageKind::PlayerStats => 2,
            MessageKind::CoinReturnTimer => 3,
        }
    }

    fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(MessageKind::Coin),
            1 => Some(MessageKind::PlayerTime),
            2 => Some(MessageKind::PlayerStats),
            3 => Some(MessageKind::CoinReturnTimer),
            _ => None,
        }
    }

    pub(crate) fn write(&self, writer: &mut dyn BitWrite) {
        UnsignedInteger::<TAG_BITS>::new(self.tag()).ser(writer);
    }

    pub(crate) fn read(reader: &mut BitReader) -> Result<Self, CodecError> {
        let tag = UnsignedInteger::<TAG_BITS>::de(reader)
            .map_err(|_| CodecError::Truncated { kind: "message kind" })?;
        // 3 bits always fit in a u8
        let tag = tag.get() as u8;
        Self::from_tag(tag).ok_or(CodecError::UnknownKind { tag })
    }

    pub(crate) fn bit_length() -> u32 {
        u32::from(TAG_BITS)
    }
}
