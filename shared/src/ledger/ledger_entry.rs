use crate::{
    fixed_point::{millis_to_secs, secs_to_millis},
    messages::{ctc_message::CtcMessage, player_stats::PlayerStats, player_time_update::PlayerTimeUpdate},
    types::PlayerId,
};

/// Possession-time record of a single player.
///
/// `total_time` only ever grows through a commit. Time spent in the interval
/// that is currently open lives in `current_time` until the interval is
/// either committed or discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerEntry {
    player_id: PlayerId,
    total_time: f64,
    current_time: f64,
    interval_start: Option<f64>,
    // milliseconds as last seen on the wire: sent (host) or integrated (replica)
    last_broadcast_value: i64,
    broadcast_sequence: u32,
}

impl LedgerEntry {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            total_time: 0.0,
            current_time: 0.0,
            interval_start: None,
            last_broadcast_value: 0,
            broadcast_sequence: 0,
        }
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Committed plus in-flight possession time, what rankings are ordered by
    pub fn display_time(&self) -> f64 {
        self.total_time + self.current_time
    }

    pub fn interval_start(&self) -> Option<f64> {
        self.interval_start
    }

    pub fn has_open_interval(&self) -> bool {
        self.interval_start.is_some()
    }

    pub fn last_broadcast_value(&self) -> i64 {
        self.last_broadcast_value
    }

    pub fn broadcast_sequence(&self) -> u32 {
        self.broadcast_sequence
    }

    // Interval bookkeeping (authoritative side)

    pub fn open_interval(&mut self, now: f64) {
        self.interval_start = Some(now);
        self.current_time = 0.0;
    }

    pub fn advance(&mut self, elapsed: f64) {
        if self.interval_start.is_some() {
            self.current_time += elapsed;
        }
    }

    /// Moves the open interval into `total_time`. Returns the committed
    /// seconds, or `None` if no interval was open.
    pub fn commit(&mut self) -> Option<f64> {
        self.interval_start.take()?;
        let committed = self.current_time;
        self.total_time += committed;
        self.current_time = 0.0;
        Some(committed)
    }

    /// Closes the open interval without crediting it. Returns the forfeited
    /// seconds, or `None` if no interval was open.
    pub fn discard(&mut self) -> Option<f64> {
        self.interval_start.take()?;
        let forfeited = self.current_time;
        self.current_time = 0.0;
        Some(forfeited)
    }

    /// Decides whether this entry has to go on the wire this tick.
    ///
    /// A change beyond `epsilon_ms` produces a delta; otherwise once
    /// `heartbeat_ticks` ticks have passed an absolute resync goes out.
    pub fn poll_broadcast(&mut self, epsilon_ms: u32, heartbeat_ticks: u32) -> Option<CtcMessage> {
        self.broadcast_sequence = self.broadcast_sequence.saturating_add(1);

        let value = secs_to_millis(self.display_time());
        let delta_ms = value - self.last_broadcast_value;
        if delta_ms.unsigned_abs() > u64::from(epsilon_ms) {
            self.last_broadcast_value = value;
            self.broadcast_sequence = 0;
            return Some(CtcMessage::PlayerTime(PlayerTimeUpdate::new(
                self.player_id,
                delta_ms,
            )));
        }

        if self.broadcast_sequence >= heartbeat_ticks {
            return Some(CtcMessage::PlayerStats(self.resync()));
        }

        None
    }

    /// Absolute state for a heartbeat or a freshly connected replica.
    /// Resets the throttling state to what the receiver will hold.
    pub fn resync(&mut self) -> PlayerStats {
        let stats = PlayerStats::new(
            self.player_id,
            secs_to_millis(self.total_time).max(0) as u64,
            secs_to_millis(self.current_time).max(0) as u64,
        );
        self.last_broadcast_value = stats.display_millis();
        self.broadcast_sequence = 0;
        stats
    }

    /// What replicas that received every flushed payload hold for this
    /// player, for bringing a new replica level with them. `unflushed_ms` is
    /// the delta already counted in `last_broadcast_value` but still waiting
    /// to go out. Leaves the throttling state alone.
    pub fn wire_snapshot(&self, unflushed_ms: i64) -> PlayerStats {
        let held = self
            .last_broadcast_value
            .saturating_sub(unflushed_ms)
            .max(0);
        let current = secs_to_millis(self.current_time).clamp(0, held);
        PlayerStats::new(self.player_id, (held - current) as u64, current as u64)
    }

    // Wire application (replica side)

    pub fn apply_delta(&mut self, delta_ms: i64) {
        self.last_broadcast_value = self.last_broadcast_value.saturating_add(delta_ms);
        self.total_time = millis_to_secs(self.last_broadcast_value);
    }

    pub fn apply_stats(&mut self, stats: &PlayerStats) {
        self.last_broadcast_value = stats.display_millis();
        self.total_time = millis_to_secs(self.last_broadcast_value);
    }
}
