//! In-memory transport for E2E testing
//! Carries encoded payloads from the host to each replica, reliable and in order

use std::collections::VecDeque;

use log::trace;

use ctc_client::Replica;
use ctc_shared::CtcMessage;

/// Handle of one replica's connection on a [`LocalLink`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionId(usize);

#[derive(Default)]
pub struct LocalLink {
    queues: Vec<VecDeque<Box<[u8]>>>,
    bytes_sent: usize,
}

impl LocalLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self) -> ConnectionId {
        self.queues.push(VecDeque::new());
        ConnectionId(self.queues.len() - 1)
    }

    /// Encodes every message and queues it on every connection
    pub fn broadcast(&mut self, messages: &[CtcMessage]) {
        for message in messages {
            let bytes = message.to_bytes();
            for queue in self.queues.iter_mut() {
                self.bytes_sent += bytes.len();
                queue.push_back(bytes.clone());
            }
        }
    }

    pub fn send_to(&mut self, connection: ConnectionId, messages: &[CtcMessage]) {
        let queue = &mut self.queues[connection.0];
        for message in messages {
            let bytes = message.to_bytes();
            self.bytes_sent += bytes.len();
            queue.push_back(bytes);
        }
    }

    /// Hands every queued payload to the replica, returning how many were applied
    pub fn deliver(&mut self, connection: ConnectionId, replica: &mut Replica) -> usize {
        let mut applied = 0;
        while let Some(bytes) = self.queues[connection.0].pop_front() {
            trace!("delivering {} bytes to {:?}", bytes.len(), connection);
            if replica.receive(&bytes).is_ok() {
                applied += 1;
            }
        }
        applied
    }

    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }
}
