use log::{debug, info, warn};

use ctc_shared::{
    compute_ranking, stats_lines, CoinReturnTimer, CoinState, CtcConfig, CtcMessage, MapInfo,
    Outbox, PlayerId, PlayerRoster, PlayerTimeLedger, Position, RankEntry,
};

use crate::events::{MatchEvent, MatchEvents};

/// The authoritative Capture-the-Coin match.
///
/// Owns the coin and every player's possession time. All mutation happens
/// through the rule operations below, sequenced by the host's tick loop;
/// the payloads they produce are collected and handed out once per update.
pub struct CtcServer {
    config: CtcConfig,
    coin: CoinState,
    ledger: PlayerTimeLedger,
    // simulated seconds since match start
    now: f64,
    coin_heartbeat: u32,
    incoming_events: MatchEvents,
    outbox: Outbox,
    finished: bool,
}

impl CtcServer {
    /// Create a new match with the coin resting on the map's spawn point
    pub fn new(config: CtcConfig, map: MapInfo) -> Self {
        info!(
            "capture-the-coin match started, coin at ({}, {})",
            map.coin_origin.x, map.coin_origin.y
        );
        Self {
            config,
            coin: CoinState::new(&map),
            ledger: PlayerTimeLedger::new(),
            now: 0.0,
            coin_heartbeat: 0,
            incoming_events: MatchEvents::new(),
            outbox: Outbox::new(),
            finished: false,
        }
    }

    pub fn config(&self) -> &CtcConfig {
        &self.config
    }

    pub fn coin(&self) -> &CoinState {
        &self.coin
    }

    pub fn ledger(&self) -> &PlayerTimeLedger {
        &self.ledger
    }

    /// Simulated seconds since the match started
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Live leaderboard, open intervals included
    pub fn ranking(&self) -> Vec<RankEntry> {
        compute_ranking(&self.ledger)
    }

    /// Seconds until a grounded coin is sent home, for the HUD countdown
    pub fn return_remaining(&self) -> Option<f64> {
        self.coin.return_remaining(self.config.return_timeout)
    }

    // Players

    /// Creates the player's ledger entry. Returns false if they already have one.
    pub fn on_player_joined(&mut self, player_id: PlayerId) -> bool {
        match self.ledger.try_add_player(player_id) {
            Ok(entry) => {
                let stats = entry.resync();
                self.outbox.push(CtcMessage::PlayerStats(stats));
                info!("{} joined the coin hunt", player_id);
                true
            }
            Err(error) => {
                warn!("ignoring join: {}", error);
                false
            }
        }
    }

    /// Removes the player's ledger entry. A leaving carrier drops the coin
    /// where they were last seen, or at its origin if that is unknown.
    pub fn on_player_left(&mut self, player_id: PlayerId, last_position: Option<Position>) -> bool {
        let Some(entry) = self.ledger.remove_player(&player_id) else {
            debug!("{} left without a ledger entry", player_id);
            return false;
        };

        if self.coin.is_carried_by(&player_id) {
            match last_position {
                Some(position) => self.coin.place(position),
                None => self.coin.return_to_origin(),
            }
            self.queue_coin_state();
            debug!(
                "{} left while carrying the coin, {:.3}s in flight not kept",
                player_id,
                entry.current_time()
            );
        }
        info!("{} left the coin hunt", player_id);
        true
    }

    // Rules

    /// Hands the coin to the player. Denied if the coin is already carried,
    /// the player is dead or unknown, or the match is over.
    ///
    /// Range checks are the physics layer's business and happen before this
    /// is called.
    pub fn on_pickup(&mut self, roster: &dyn PlayerRoster, player_id: PlayerId) -> bool {
        if self.finished {
            return false;
        }
        let Some(entry) = self.ledger.get_mut(&player_id) else {
            debug!("pickup by unknown {} ignored", player_id);
            return false;
        };
        if !roster.is_alive(&player_id) {
            debug!("pickup by dead {} ignored", player_id);
            return false;
        }
        if !self.coin.pick_up(player_id) {
            debug!("pickup by {} denied, coin already carried", player_id);
            return false;
        }

        entry.open_interval(self.now);
        self.queue_coin_state();
        debug!("{} picked up the coin", player_id);
        true
    }

    /// Drop on purpose (drop key or scoring): the open interval is committed.
    /// A no-op unless the player is the carrier.
    pub fn on_voluntary_drop(&mut self, player_id: PlayerId, position: Position) -> bool {
        if !self.coin.is_carried_by(&player_id) {
            return false;
        }
        if let Some(committed) = self
            .ledger
            .get_mut(&player_id)
            .and_then(|entry| entry.commit())
        {
            debug!("{} dropped the coin, {:.3}s committed", player_id, committed);
        }

        self.coin.place(position);
        self.queue_coin_state();
        true
    }

    /// Death of the carrier loses the coin where they fell, and the time
    /// held in this run is forfeited.
    pub fn on_player_died(&mut self, player_id: PlayerId, last_position: Position) -> bool {
        if !self.coin.is_carried_by(&player_id) {
            return false;
        }
        if let Some(forfeited) = self
            .ledger
            .get_mut(&player_id)
            .and_then(|entry| entry.discard())
        {
            debug!("{} died with the coin, {:.3}s forfeited", player_id, forfeited);
        }

        self.coin.place(last_position);
        self.queue_coin_state();
        true
    }

    /// Advances the match by `elapsed` seconds.
    ///
    /// Non-positive or non-finite steps are ignored, as is every tick after
    /// the match has finished.
    pub fn tick(&mut self, elapsed: f64) {
        if self.finished || !elapsed.is_finite() || elapsed <= 0.0 {
            return;
        }
        self.now += elapsed;

        match self.coin.carrier() {
            Some(carrier) => {
                if let Some(entry) = self.ledger.get_mut(&carrier) {
                    entry.advance(elapsed);
                }
            }
            None => {
                if self
                    .coin
                    .check_coin_validity(elapsed, self.config.return_timeout)
                {
                    debug!("coin lay untouched too long, returned to origin");
                    self.queue_coin_state();
                }
            }
        }

        self.broadcast();
    }

    fn broadcast(&mut self) {
        let epsilon_ms = self.config.quantization_epsilon_ms;
        let heartbeat_ticks = self.config.heartbeat_ticks;
        for entry in self.ledger.iter_mut() {
            if let Some(message) = entry.poll_broadcast(epsilon_ms, heartbeat_ticks) {
                self.outbox.push(message);
            }
        }

        self.coin_heartbeat = self.coin_heartbeat.saturating_add(1);
        if self.coin_heartbeat >= heartbeat_ticks {
            self.queue_coin_state();
        }
    }

    fn queue_coin_state(&mut self) {
        self.outbox.push(CtcMessage::Coin(self.coin.to_update()));
        if let Some(remaining) = self.return_remaining() {
            self.outbox
                .push(CtcMessage::CoinReturnTimer(CoinReturnTimer::from_secs(remaining)));
        }
        self.coin_heartbeat = 0;
    }

    // Events

    /// Queues an event to be applied at the start of the next `update`
    pub fn queue_event(&mut self, event: MatchEvent) {
        self.incoming_events.push(event);
    }

    /// Applies queued events in arrival order, advances by `elapsed` and
    /// returns every payload produced since the last flush.
    pub fn update(&mut self, roster: &dyn PlayerRoster, elapsed: f64) -> Vec<CtcMessage> {
        for event in self.incoming_events.drain() {
            if self.finished {
                debug!("match finished, dropping {:?}", event);
                continue;
            }
            self.apply_event(roster, event);
        }
        self.tick(elapsed);
        self.take_outgoing()
    }

    fn apply_event(&mut self, roster: &dyn PlayerRoster, event: MatchEvent) {
        match event {
            MatchEvent::Joined(player_id) => {
                self.on_player_joined(player_id);
            }
            MatchEvent::Left {
                player_id,
                last_position,
            } => {
                self.on_player_left(player_id, last_position);
            }
            MatchEvent::Pickup(player_id) => {
                self.on_pickup(roster, player_id);
            }
            MatchEvent::VoluntaryDrop {
                player_id,
                position,
            } => {
                self.on_voluntary_drop(player_id, position);
            }
            MatchEvent::Died {
                player_id,
                last_position,
            } => {
                self.on_player_died(player_id, last_position);
            }
        }
    }

    /// Pending payloads, coalesced to at most one per entity
    pub fn take_outgoing(&mut self) -> Vec<CtcMessage> {
        self.outbox.drain()
    }

    /// Everything a replica connecting now needs to catch up with the
    /// replicas already connected. It must only receive flushes taken after
    /// this call, so payloads still pending are left out of the player stats.
    pub fn snapshot(&self) -> Vec<CtcMessage> {
        let mut messages = vec![CtcMessage::Coin(self.coin.to_update())];
        if let Some(remaining) = self.return_remaining() {
            messages.push(CtcMessage::CoinReturnTimer(CoinReturnTimer::from_secs(
                remaining,
            )));
        }
        messages.extend(
            self.ledger
                .iter()
                .map(|entry| {
                    let unflushed_ms = self.outbox.pending_delta(&entry.player_id());
                    CtcMessage::PlayerStats(entry.wire_snapshot(unflushed_ms))
                }),
        );
        messages
    }

    // Match end

    /// Ends the match: any open interval is committed as a voluntary drop
    /// would, the coin goes home and no further ticks are accepted. Returns
    /// the server log lines in ranked order.
    ///
    /// Calling it again commits nothing and yields the same lines.
    pub fn finish_match(&mut self, roster: &dyn PlayerRoster) -> Vec<String> {
        if !self.finished {
            if let Some(carrier) = self.coin.carrier() {
                if let Some(entry) = self.ledger.get_mut(&carrier) {
                    entry.commit();
                }
                self.coin.return_to_origin();
                self.queue_coin_state();
            }
            for entry in self.ledger.iter_mut() {
                let stats = entry.resync();
                self.outbox.push(CtcMessage::PlayerStats(stats));
            }
            self.finished = true;
            info!("capture-the-coin match finished after {:.3}s", self.now);
        }

        let lines = stats_lines(&self.ledger, roster);
        for line in &lines {
            info!("{}", line);
        }
        lines
    }
}
