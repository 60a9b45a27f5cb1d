use ctc_shared::{compute_ranking, CoinState, PlayerId, PlayerRoster, PlayerTimeLedger};

/// One leaderboard line as drawn on the HUD
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudRow {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    /// `MM:SS.mmm`
    pub clock: String,
}

/// Everything the tournament HUD needs to draw the coin mode
#[derive(Clone, Debug, PartialEq)]
pub struct HudView {
    pub rows: Vec<HudRow>,
    pub carrier: Option<PlayerId>,
    /// Draw the homing indicator toward the coin
    pub homing_hint: bool,
    /// Whole seconds left before a grounded coin returns, rounded up
    pub return_countdown: Option<u32>,
}

impl HudView {
    /// Builds the view from either role's state
    pub fn build(
        ledger: &PlayerTimeLedger,
        coin: &CoinState,
        return_remaining: Option<f64>,
        roster: &dyn PlayerRoster,
    ) -> Self {
        let rows = compute_ranking(ledger)
            .into_iter()
            .map(|entry| HudRow {
                rank: entry.rank,
                player_id: entry.player_id,
                name: roster
                    .player_name(&entry.player_id)
                    .map(str::to_string)
                    .unwrap_or_else(|| entry.player_id.to_string()),
                clock: entry.clock(),
            })
            .collect();

        Self {
            rows,
            carrier: coin.carrier(),
            homing_hint: coin.coin_not_at_origin(),
            return_countdown: return_remaining.map(|secs| secs.max(0.0).ceil() as u32),
        }
    }
}
