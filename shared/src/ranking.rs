use crate::{
    fixed_point::secs_to_millis, ledger::player_time_ledger::PlayerTimeLedger,
    roster::PlayerRoster, types::PlayerId,
};

/// One row of the possession leaderboard
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankEntry {
    /// 1-based position on the leaderboard
    pub rank: usize,
    pub player_id: PlayerId,
    /// Committed plus in-flight possession time, in seconds
    pub display_time: f64,
}

impl RankEntry {
    pub fn clock(&self) -> String {
        format_clock(self.display_time)
    }
}

/// Orders the ledger by possession time, longest first.
///
/// Open intervals count toward the live order. The sort is stable, so equal
/// times keep join order and the leaderboard does not jitter between calls.
pub fn compute_ranking(ledger: &PlayerTimeLedger) -> Vec<RankEntry> {
    let mut entries: Vec<_> = ledger.iter().collect();
    entries.sort_by(|a, b| b.display_time().total_cmp(&a.display_time()));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankEntry {
            rank: index + 1,
            player_id: entry.player_id(),
            display_time: entry.display_time(),
        })
        .collect()
}

/// Renders seconds as `MM:SS.mmm`. Minutes are not wrapped into hours and
/// milliseconds are truncated.
pub fn format_clock(secs: f64) -> String {
    let millis = secs_to_millis(secs).max(0);
    format!(
        "{:02}:{:02}.{:03}",
        millis / 60_000,
        (millis / 1000) % 60,
        millis % 1000
    )
}

/// Server log lines, one per player in ranked order: `<name>: <MM:SS.mmm>`
pub fn stats_lines(ledger: &PlayerTimeLedger, roster: &dyn PlayerRoster) -> Vec<String> {
    compute_ranking(ledger)
        .iter()
        .map(|entry| {
            let clock = entry.clock();
            match roster.player_name(&entry.player_id) {
                Some(name) => format!("{}: {}", name, clock),
                None => format!("{}: {}", entry.player_id, clock),
            }
        })
        .collect()
}
