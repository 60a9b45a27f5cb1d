use thiserror::Error;

/// Errors that can occur while decoding a sync payload
///
/// A payload that fails to decode is rejected whole; replicas never apply a
/// partially read message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The payload contained no bytes at all
    #[error("Empty sync payload")]
    Empty,

    /// The kind tag does not name any known message
    #[error("Unknown sync message kind {tag}")]
    UnknownKind { tag: u8 },

    /// The payload ended before the message body was complete
    #[error("Sync payload truncated while reading {kind}")]
    Truncated { kind: &'static str },
}
