use log::{debug, warn};

use ctc_shared::{
    compute_ranking, CodecError, CoinState, CtcMessage, MapInfo, PlayerId, PlayerRoster,
    PlayerTimeLedger, RankEntry,
};

use crate::hud::HudView;

/// A non-authoritative mirror of a match.
///
/// Shares the coin and ledger shapes with the host but only ever applies
/// decoded payloads. Payloads must arrive in the order the host flushed them.
pub struct Replica {
    coin: CoinState,
    ledger: PlayerTimeLedger,
    return_remaining: Option<f64>,
}

impl Replica {
    pub fn new(map: MapInfo) -> Self {
        Self {
            coin: CoinState::new(&map),
            ledger: PlayerTimeLedger::new(),
            return_remaining: None,
        }
    }

    pub fn coin(&self) -> &CoinState {
        &self.coin
    }

    pub fn ledger(&self) -> &PlayerTimeLedger {
        &self.ledger
    }

    /// Seconds until the grounded coin returns home, as last told by the host
    /// and counted down locally
    pub fn return_remaining(&self) -> Option<f64> {
        self.return_remaining
    }

    /// Leaderboard for display. Never used for win conditions.
    pub fn ranking(&self) -> Vec<RankEntry> {
        compute_ranking(&self.ledger)
    }

    pub fn hud(&self, roster: &dyn PlayerRoster) -> HudView {
        HudView::build(&self.ledger, &self.coin, self.return_remaining, roster)
    }

    // Players

    pub fn add_player(&mut self, player_id: PlayerId) -> bool {
        match self.ledger.try_add_player(player_id) {
            Ok(_) => true,
            Err(error) => {
                warn!("replica ignoring join: {}", error);
                false
            }
        }
    }

    pub fn remove_player(&mut self, player_id: &PlayerId) -> bool {
        self.ledger.remove_player(player_id).is_some()
    }

    // Payloads

    /// Decodes and applies one payload. A malformed payload is rejected whole
    /// and leaves the replica untouched.
    pub fn receive(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        match CtcMessage::from_bytes(bytes) {
            Ok(message) => {
                self.apply(&message);
                Ok(())
            }
            Err(error) => {
                warn!("dropping malformed sync payload: {}", error);
                Err(error)
            }
        }
    }

    pub fn apply(&mut self, message: &CtcMessage) {
        match message {
            CtcMessage::Coin(update) => {
                self.coin.apply_update(update);
                if !self.coin.coin_not_at_origin() || self.coin.is_carried() {
                    self.return_remaining = None;
                }
            }
            CtcMessage::PlayerTime(update) => match self.ledger.get_mut(&update.player_id) {
                Some(entry) => entry.apply_delta(update.delta_ms),
                None => debug!("time update for unknown {} ignored", update.player_id),
            },
            CtcMessage::PlayerStats(stats) => match self.ledger.get_mut(&stats.player_id) {
                Some(entry) => entry.apply_stats(stats),
                None => debug!("stats for unknown {} ignored", stats.player_id),
            },
            CtcMessage::CoinReturnTimer(timer) => {
                // a countdown only means something for a coin lying away from home
                if !self.coin.is_carried() && self.coin.coin_not_at_origin() {
                    self.return_remaining = Some(f64::from(timer.remaining_ms) / 1000.0);
                }
            }
        }
    }

    /// Runs the local countdown between host updates. Display only.
    pub fn advance_display(&mut self, elapsed: f64) {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return;
        }
        if let Some(remaining) = self.return_remaining.as_mut() {
            *remaining = (*remaining - elapsed).max(0.0);
        }
    }
}
