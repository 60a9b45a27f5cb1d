use naia_serde::{BitReader, BitWrite, BitWriter, Serde};

use crate::messages::{
    coin_return_timer::CoinReturnTimer, coin_update::CoinUpdate, error::CodecError,
    message_kind::MessageKind, player_stats::PlayerStats, player_time_update::PlayerTimeUpdate,
};

/// A single sync payload sent from the authoritative match to its replicas
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CtcMessage {
    Coin(CoinUpdate),
    PlayerTime(PlayerTimeUpdate),
    PlayerStats(PlayerStats),
    CoinReturnTimer(CoinReturnTimer),
}

impl CtcMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            CtcMessage::Coin(_) => MessageKind::Coin,
            CtcMessage::PlayerTime(_) => MessageKind::PlayerTime,
            CtcMessage::PlayerStats(_) => MessageKind::PlayerStats,
            CtcMessage::CoinReturnTimer(_) => MessageKind::CoinReturnTimer,
        }
    }

    pub fn write(&self, writer: &mut dyn BitWrite) {
        self.kind().write(writer);
        match self {
            CtcMessage::Coin(update) => update.ser(writer),
            CtcMessage::PlayerTime(update) => update.ser(writer),
            CtcMessage::PlayerStats(stats) => stats.ser(writer),
            CtcMessage::CoinReturnTimer(timer) => timer.ser(writer),
        }
    }

    pub fn read(reader: &mut BitReader) -> Result<Self, CodecError> {
        let kind = MessageKind::read(reader)?;
        let truncated = |_| CodecError::Truncated { kind: kind.name() };

        let message = match kind {
            MessageKind::Coin => CtcMessage::Coin(CoinUpdate::de(reader).map_err(truncated)?),
            MessageKind::PlayerTime => {
                CtcMessage::PlayerTime(PlayerTimeUpdate::de(reader).map_err(truncated)?)
            }
            MessageKind::PlayerStats => {
                CtcMessage::PlayerStats(PlayerStats::de(reader).map_err(truncated)?)
            }
            MessageKind::CoinReturnTimer => {
                CtcMessage::CoinReturnTimer(CoinReturnTimer::de(reader).map_err(truncated)?)
            }
        };
        Ok(message)
    }

    pub fn bit_length(&self) -> u32 {
        MessageKind::bit_length()
            + match self {
                CtcMessage::Coin(update) => update.bit_length(),
                CtcMessage::PlayerTime(update) => update.bit_length(),
                CtcMessage::PlayerStats(stats) => stats.bit_length(),
                CtcMessage::CoinReturnTimer(timer) => timer.bit_length(),
            }
    }

    /// Encodes the message into the bytes handed to the transport
    pub fn to_bytes(&self) -> Box<[u8]> {
        let mut writer = BitWriter::new();
        self.write(&mut writer);
        writer.to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.is_empty() {
            return Err(CodecError::Empty);
        }
        let mut reader = BitReader::new(bytes);
        Self::read(&mut reader)
    }
}
