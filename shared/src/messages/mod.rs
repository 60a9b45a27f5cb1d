pub mod coin_return_timer;
pub mod coin_update;
pub mod ctc_message;
pub mod error;
pub mod message_kind;
pub mod player_stats;
pub mod player_time_update;
