pub mod error;
pub mod ledger_entry;
pub mod player_time_ledger;
